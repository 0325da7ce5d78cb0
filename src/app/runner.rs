use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use super::timer::GameplayTimer;
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::session::{Control, Session};
use crate::storage::HighScoreStore;

/// Terminal front end: owns the screen and feeds the session keys and ticks
pub struct App<S: HighScoreStore> {
    session: Session<S>,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<S: HighScoreStore> App<S> {
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_event_loop(&mut terminal).await;
        let cleanup = cleanup_terminal(&mut terminal);

        // The alternate screen is gone, so this reaches the user
        if let Some(err) = self.session.last_save_error() {
            eprintln!("Failed to save high score: {err}");
        }

        first_error(result, cleanup)
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut animation_timer = interval(self.session.config().animation_interval());
        animation_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut gameplay_timer = GameplayTimer::new();

        self.draw(terminal)?;

        loop {
            gameplay_timer.sync(self.session.schedule());

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = gameplay_timer.tick() => {
                    self.session.tick();
                }

                // Title animation
                _ = animation_timer.tick() => {
                    self.session.animate();
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let view = self.session.view();
        terminal
            .draw(|frame| self.renderer.render(frame, &view))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Key(key) => {
                    if self.session.handle_key(key) == Control::Exit {
                        self.should_quit = true;
                    }
                }
                KeyAction::Quit => {
                    info!("interrupted");
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }
}

/// Raw mode plus alternate screen on stderr. Raw mode is undone again if any
/// later step fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let setup = || -> Result<Terminal<CrosstermBackend<Stderr>>> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(stderr)).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    };

    setup().inspect_err(|_| {
        let _ = execute!(stderr(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Restore the terminal, attempting every step even if an earlier one fails
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    raw.and(screen).and(cursor)
}

/// The event loop's error wins over a cleanup error
fn first_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    result.and(cleanup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use crate::session::Screen;
    use crate::storage::MemoryHighScoreStore;
    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App<MemoryHighScoreStore> {
        let engine = GameEngine::with_seed(GameConfig::default(), 9);
        App::new(Session::with_engine(engine, MemoryHighScoreStore::default()))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_initialization() {
        let app = app();
        assert_eq!(app.session().screen(), Screen::Menu);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_enter_starts_game() {
        let mut app = app();
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.session().screen(), Screen::Running);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        app.handle_event(Event::Key(release));
        assert_eq!(app.session().screen(), Screen::Menu);
    }

    #[test]
    fn test_exit_option_quits() {
        let mut app = app();
        app.handle_event(key(KeyCode::Up));
        app.handle_event(key(KeyCode::Enter));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('x')));
        app.handle_event(Event::FocusGained);
        assert_eq!(app.session().screen(), Screen::Menu);
        assert_eq!(app.session().main_menu().selected_index(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_event_loop_error_is_reported_before_cleanup_error() {
        let err = first_error(Err(anyhow!("event stream closed")), Err(anyhow!("tty gone")))
            .unwrap_err();
        assert_eq!(err.to_string(), "event stream closed");

        let err = first_error(Ok(()), Err(anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");

        assert!(first_error(Ok(()), Ok(())).is_ok());
    }
}
