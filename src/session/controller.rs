use tracing::{debug, info, warn};

use super::screen::{Control, Screen};
use super::view::{MenuView, View};
use crate::game::{
    CollisionType, Direction, GameConfig, GameEngine, GameState, StepResult, TickSchedule,
};
use crate::input::Key;
use crate::menu::{MainMenuOption, Menu, PauseMenuOption, TitleAnimation};
use crate::storage::HighScoreStore;

/// One player's session: the current screen, the game in it, the menus and
/// the best score.
///
/// Nothing here reads the clock. The driver calls `tick` on the gameplay
/// schedule, `animate` on the animation clock and `handle_key` for input;
/// tests call them directly.
pub struct Session<S: HighScoreStore> {
    engine: GameEngine,
    game: GameState,
    screen: Screen,
    main_menu: Menu<MainMenuOption>,
    pause_menu: Menu<PauseMenuOption>,
    high_score: u32,
    store: S,
    title: TitleAnimation,
    schedule: TickSchedule,
    save_error: Option<String>,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_engine(GameEngine::new(config), store)
    }

    /// Build a session around an existing engine, e.g. a seeded one
    pub fn with_engine(mut engine: GameEngine, store: S) -> Self {
        let high_score = store.load();
        info!(high_score, "session started");

        let game = engine.reset();
        let title = TitleAnimation::new(engine.config());

        Self {
            engine,
            game,
            screen: Screen::Menu,
            main_menu: Menu::new(),
            pause_menu: Menu::new(),
            high_score,
            store,
            title,
            schedule: TickSchedule::new(),
            save_error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn main_menu(&self) -> &Menu<MainMenuOption> {
        &self.main_menu
    }

    pub fn pause_menu(&self) -> &Menu<PauseMenuOption> {
        &self.pause_menu
    }

    /// Why the most recent high-score write failed, if it did
    pub fn last_save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn title(&self) -> &TitleAnimation {
        &self.title
    }

    /// Gameplay tick schedule the driver should follow
    pub fn schedule(&self) -> &TickSchedule {
        &self.schedule
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: Key) -> Control {
        match self.screen {
            Screen::Menu => self.main_menu_input(key),
            Screen::ViewHighScore => self.high_score_input(key),
            Screen::Running => self.running_input(key),
            Screen::Paused => self.pause_menu_input(key),
            Screen::GameOver => self.game_over_input(key),
        }
    }

    /// One gameplay tick. Does nothing unless a game is running, which is
    /// how a paused game holds still while the schedule keeps firing.
    pub fn tick(&mut self) -> Option<StepResult> {
        if self.screen != Screen::Running {
            return None;
        }

        let result = self.engine.step(&mut self.game);

        if let Some(collision) = result.info.collision_type {
            self.game_over(collision);
        } else if result.info.ate_food {
            let cadence = self.engine.tick_interval(self.game.score);
            debug!(score = self.game.score, ?cadence, "food eaten");
            self.schedule.set_cadence(cadence);
        }

        Some(result)
    }

    /// One frame of the title animation
    pub fn animate(&mut self) {
        self.title.tick(self.screen == Screen::Menu);
    }

    /// Describe the current screen for a renderer
    pub fn view(&self) -> View<'_> {
        match self.screen {
            Screen::Menu => View::MainMenu {
                menu: MenuView::from(&self.main_menu),
                title_pulse: self.title.pulse.intensity(),
                menu_snake: self.title.snake.cells(),
                grid_width: self.config().grid_width,
                grid_height: self.config().grid_height,
            },
            Screen::ViewHighScore => View::HighScore {
                high_score: self.high_score,
            },
            Screen::Running => View::Playing {
                game: &self.game,
                high_score: self.high_score,
            },
            Screen::Paused => View::Paused {
                game: &self.game,
                high_score: self.high_score,
                menu: MenuView::from(&self.pause_menu),
            },
            Screen::GameOver => View::GameOver {
                game: &self.game,
                high_score: self.high_score,
            },
        }
    }

    /// Throw away any current game and start a new one
    pub fn start_game(&mut self) {
        self.game = self.engine.reset();
        self.pause_menu.reset();
        self.schedule.start(self.engine.tick_interval(0));
        info!(food = ?self.game.food, "game started");
        self.set_screen(Screen::Running);
    }

    fn main_menu_input(&mut self, key: Key) -> Control {
        match key {
            Key::Up | Key::Left => self.main_menu.previous(),
            Key::Down | Key::Right => self.main_menu.next(),
            Key::Enter => match self.main_menu.selected() {
                MainMenuOption::StartGame => self.start_game(),
                MainMenuOption::ViewHighScore => self.set_screen(Screen::ViewHighScore),
                MainMenuOption::Exit => return self.exit(),
            },
            Key::Escape => {}
        }
        Control::Continue
    }

    fn high_score_input(&mut self, key: Key) -> Control {
        if matches!(key, Key::Enter | Key::Escape) {
            self.set_screen(Screen::Menu);
        }
        Control::Continue
    }

    fn running_input(&mut self, key: Key) -> Control {
        match key {
            Key::Escape => self.set_screen(Screen::Paused),
            Key::Enter => {}
            arrow => {
                if let Some(direction) = arrow_direction(arrow) {
                    self.game.snake.turn(direction);
                }
            }
        }
        Control::Continue
    }

    fn pause_menu_input(&mut self, key: Key) -> Control {
        match key {
            Key::Up | Key::Left => self.pause_menu.previous(),
            Key::Down | Key::Right => self.pause_menu.next(),
            Key::Enter => match self.pause_menu.selected() {
                PauseMenuOption::Resume => self.set_screen(Screen::Running),
                PauseMenuOption::Restart => self.start_game(),
                PauseMenuOption::Exit => return self.exit(),
            },
            Key::Escape => self.set_screen(Screen::Running),
        }
        Control::Continue
    }

    fn game_over_input(&mut self, key: Key) -> Control {
        match key {
            Key::Enter => self.start_game(),
            Key::Escape => self.set_screen(Screen::Menu),
            _ => {}
        }
        Control::Continue
    }

    fn game_over(&mut self, collision: CollisionType) {
        let score = self.game.score;
        info!(score, ?collision, steps = self.game.steps, "game over");

        self.schedule.stop();
        self.set_screen(Screen::GameOver);

        if score > self.high_score {
            self.high_score = score;
            info!(high_score = score, "new high score");
            match self.store.save(score) {
                Ok(()) => self.save_error = None,
                Err(err) => {
                    warn!("Failed to save high score: {err:#}");
                    self.save_error = Some(format!("{err:#}"));
                }
            }
        }
    }

    fn exit(&self) -> Control {
        info!(high_score = self.high_score, "exit requested");
        Control::Exit
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!(from = self.screen.name(), to = screen.name(), "screen change");
        }
        self.screen = screen;
    }
}

fn arrow_direction(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::Enter | Key::Escape => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::storage::{FileHighScoreStore, MemoryHighScoreStore};
    use anyhow::bail;
    use std::time::Duration;
    use tempfile::TempDir;

    fn session_with<S: HighScoreStore>(store: S) -> Session<S> {
        Session::with_engine(GameEngine::with_seed(GameConfig::default(), 5), store)
    }

    fn session() -> Session<MemoryHighScoreStore> {
        session_with(MemoryHighScoreStore::default())
    }

    fn running_session() -> Session<MemoryHighScoreStore> {
        let mut session = session();
        assert_eq!(session.handle_key(Key::Enter), Control::Continue);
        assert_eq!(session.screen(), Screen::Running);
        session
    }

    /// Put the food right in front of the head and tick once
    fn feed<S: HighScoreStore>(session: &mut Session<S>) {
        let snake = &session.game().snake;
        let ahead = snake.head().moved_in_direction(snake.direction());
        session.game_mut().food = ahead;
        let result = session.tick().unwrap();
        assert!(result.info.ate_food);
    }

    /// Keep ticking until the game ends
    fn crash<S: HighScoreStore>(session: &mut Session<S>) {
        session.game_mut().food = Position::new(0, 0);
        for _ in 0..50 {
            if session.screen() == Screen::GameOver {
                return;
            }
            session.tick();
        }
        panic!("snake never crashed");
    }

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&self) -> u32 {
            0
        }

        fn save(&mut self, _score: u32) -> anyhow::Result<()> {
            bail!("disk full")
        }
    }

    #[test]
    fn test_starts_on_menu_with_stored_high_score() {
        let session = session_with(MemoryHighScoreStore::new(90));
        assert_eq!(session.screen(), Screen::Menu);
        assert_eq!(session.high_score(), 90);
        assert!(!session.schedule().is_running());
    }

    #[test]
    fn test_main_menu_navigation_wraps() {
        let mut session = session();
        session.handle_key(Key::Up);
        assert_eq!(session.main_menu().selected(), MainMenuOption::Exit);
        session.handle_key(Key::Right);
        assert_eq!(session.main_menu().selected(), MainMenuOption::StartGame);
        session.handle_key(Key::Down);
        assert_eq!(session.main_menu().selected(), MainMenuOption::ViewHighScore);
        session.handle_key(Key::Left);
        assert_eq!(session.main_menu().selected(), MainMenuOption::StartGame);
        session.handle_key(Key::Escape);
        assert_eq!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_start_game_is_fresh() {
        let session = running_session();
        let game = session.game();
        assert_eq!(game.snake.body, vec![Position::new(10, 10)]);
        assert_eq!(game.snake.direction(), Direction::Right);
        assert_eq!(game.score, 0);
        assert!(!game.snake.occupies(game.food));
        assert_eq!(session.schedule().cadence(), Some(Duration::from_millis(120)));
    }

    #[test]
    fn test_first_tick_moves_right() {
        let mut session = running_session();
        session.game_mut().food = Position::new(0, 0);
        session.tick();
        assert_eq!(session.game().snake.body, vec![Position::new(11, 10)]);
    }

    #[test]
    fn test_high_score_screen_round_trip() {
        let mut session = session();
        session.handle_key(Key::Down);
        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::ViewHighScore);
        session.handle_key(Key::Up);
        assert_eq!(session.screen(), Screen::ViewHighScore);
        session.handle_key(Key::Escape);
        assert_eq!(session.screen(), Screen::Menu);

        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::ViewHighScore);
        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::Menu);
    }

    #[test]
    fn test_exit_from_main_menu() {
        let mut session = session();
        session.handle_key(Key::Up);
        assert_eq!(session.handle_key(Key::Enter), Control::Exit);
    }

    #[test]
    fn test_arrow_keys_steer_but_never_reverse() {
        let mut session = running_session();
        session.handle_key(Key::Left);
        assert_eq!(session.game().snake.direction(), Direction::Right);

        session.handle_key(Key::Up);
        assert_eq!(session.game().snake.direction(), Direction::Up);
        // Enter does nothing while playing
        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::Running);
    }

    #[test]
    fn test_pause_freezes_ticks_but_keeps_schedule() {
        let mut session = running_session();
        session.handle_key(Key::Escape);
        assert_eq!(session.screen(), Screen::Paused);

        let before = session.game().clone();
        assert!(session.tick().is_none());
        assert_eq!(session.game(), &before);
        assert!(session.schedule().is_running());

        session.handle_key(Key::Escape);
        assert_eq!(session.screen(), Screen::Running);
        assert!(session.tick().is_some());
    }

    #[test]
    fn test_pause_menu_resume() {
        let mut session = running_session();
        session.handle_key(Key::Escape);
        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::Running);
    }

    #[test]
    fn test_pause_menu_restart_resets_game_and_cursor() {
        let mut session = running_session();
        feed(&mut session);
        assert_eq!(session.game().score, 10);
        let epoch = session.schedule().epoch();

        session.handle_key(Key::Escape);
        session.handle_key(Key::Down);
        assert_eq!(session.pause_menu().selected(), PauseMenuOption::Restart);
        session.handle_key(Key::Enter);

        assert_eq!(session.screen(), Screen::Running);
        assert_eq!(session.game().score, 0);
        assert_eq!(session.game().snake.len(), 1);
        assert_eq!(session.pause_menu().selected(), PauseMenuOption::Resume);
        assert_eq!(session.schedule().epoch(), epoch + 1);
        assert_eq!(session.schedule().cadence(), Some(Duration::from_millis(120)));
    }

    #[test]
    fn test_pause_menu_exit() {
        let mut session = running_session();
        session.handle_key(Key::Escape);
        session.handle_key(Key::Up);
        assert_eq!(session.pause_menu().selected(), PauseMenuOption::Exit);
        assert_eq!(session.handle_key(Key::Enter), Control::Exit);
    }

    #[test]
    fn test_eating_scores_grows_and_speeds_up() {
        let mut session = running_session();
        feed(&mut session);

        assert_eq!(session.game().score, 10);
        assert_eq!(session.game().snake.len(), 2);
        assert_eq!(session.schedule().cadence(), Some(Duration::from_millis(118)));

        feed(&mut session);
        assert_eq!(session.game().score, 20);
        assert_eq!(session.game().snake.len(), 3);
        assert_eq!(session.schedule().cadence(), Some(Duration::from_millis(116)));
    }

    #[test]
    fn test_game_over_updates_and_saves_high_score() {
        let mut session = running_session();
        feed(&mut session);
        feed(&mut session);
        crash(&mut session);

        assert_eq!(session.screen(), Screen::GameOver);
        assert!(!session.schedule().is_running());
        assert_eq!(session.high_score(), 20);
        assert_eq!(session.store().load(), 20);
        assert_eq!(session.store().saves(), 1);
    }

    #[test]
    fn test_lower_score_leaves_high_score_alone() {
        let mut session = session_with(MemoryHighScoreStore::new(500));
        session.handle_key(Key::Enter);
        feed(&mut session);
        crash(&mut session);

        assert_eq!(session.high_score(), 500);
        assert_eq!(session.store().saves(), 0);
    }

    #[test]
    fn test_failed_save_does_not_stop_the_game() {
        let mut session = session_with(BrokenStore);
        assert_eq!(session.last_save_error(), None);
        session.handle_key(Key::Enter);
        feed(&mut session);
        crash(&mut session);

        assert_eq!(session.screen(), Screen::GameOver);
        assert_eq!(session.high_score(), 10);
        assert_eq!(session.last_save_error(), Some("disk full"));

        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::Running);
    }

    #[test]
    fn test_ticks_after_game_over_do_nothing() {
        let mut session = running_session();
        crash(&mut session);
        let before = session.game().clone();
        assert!(session.tick().is_none());
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_game_over_keys() {
        let mut session = running_session();
        crash(&mut session);
        session.handle_key(Key::Up);
        assert_eq!(session.screen(), Screen::GameOver);

        session.handle_key(Key::Escape);
        assert_eq!(session.screen(), Screen::Menu);

        session.handle_key(Key::Enter);
        crash(&mut session);
        session.handle_key(Key::Enter);
        assert_eq!(session.screen(), Screen::Running);
        assert_eq!(session.game().score, 0);
        assert!(session.schedule().is_running());
    }

    #[test]
    fn test_high_score_persists_across_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("highscore.txt");

        let mut session = session_with(FileHighScoreStore::new(&path));
        assert_eq!(session.high_score(), 0);
        session.handle_key(Key::Enter);
        feed(&mut session);
        feed(&mut session);
        feed(&mut session);
        crash(&mut session);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "30");

        let next = session_with(FileHighScoreStore::new(&path));
        assert_eq!(next.high_score(), 30);
    }

    #[test]
    fn test_animation_pulse_runs_everywhere_snake_only_on_menu() {
        let mut session = running_session();
        let snake_before = session.title().snake.clone();
        session.animate();
        assert_eq!(session.title().snake, snake_before);
        assert!(session.title().pulse.intensity() > 0.0);

        session.handle_key(Key::Escape);
        session.handle_key(Key::Enter); // Resume
        crash(&mut session);
        session.handle_key(Key::Escape);
        assert_eq!(session.screen(), Screen::Menu);
        session.animate();
        assert_ne!(session.title().snake, snake_before);
    }

    #[test]
    fn test_view_matches_screen() {
        let mut session = session();
        match session.view() {
            View::MainMenu {
                menu, menu_snake, ..
            } => {
                assert_eq!(menu.labels, vec!["Start Game", "View High Score", "Exit"]);
                assert_eq!(menu.selected, 0);
                assert_eq!(menu_snake.len(), 6);
            }
            other => panic!("unexpected view {other:?}"),
        }

        session.handle_key(Key::Enter);
        assert!(matches!(session.view(), View::Playing { .. }));

        session.handle_key(Key::Escape);
        match session.view() {
            View::Paused { menu, .. } => {
                assert_eq!(menu.labels, vec!["Resume", "Restart", "Exit"]);
            }
            other => panic!("unexpected view {other:?}"),
        }

        session.handle_key(Key::Escape);
        crash(&mut session);
        assert!(matches!(session.view(), View::GameOver { .. }));
    }
}
