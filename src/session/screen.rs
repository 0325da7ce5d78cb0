/// Which screen the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Title screen with the main menu
    Menu,
    /// Best score display
    ViewHighScore,
    /// A game in progress
    Running,
    /// A game on hold under the pause menu
    Paused,
    /// Final score of the last game
    GameOver,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::ViewHighScore => "high score",
            Screen::Running => "running",
            Screen::Paused => "paused",
            Screen::GameOver => "game over",
        }
    }
}

/// What the driver should do after handing the session a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}
