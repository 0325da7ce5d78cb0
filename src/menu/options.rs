use super::selection::MenuOption;

/// Entries of the title screen menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    StartGame,
    ViewHighScore,
    Exit,
}

impl MenuOption for MainMenuOption {
    const ALL: &'static [Self] = &[Self::StartGame, Self::ViewHighScore, Self::Exit];

    fn label(&self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::ViewHighScore => "View High Score",
            Self::Exit => "Exit",
        }
    }
}

/// Entries of the pause overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseMenuOption {
    Resume,
    Restart,
    Exit,
}

impl MenuOption for PauseMenuOption {
    const ALL: &'static [Self] = &[Self::Resume, Self::Restart, Self::Exit];

    fn label(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Restart => "Restart",
            Self::Exit => "Exit",
        }
    }
}
