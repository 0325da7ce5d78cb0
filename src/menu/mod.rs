//! Menu screens: option lists, selection cursors and the title animation

pub mod options;
pub mod selection;
pub mod title;

pub use options::{MainMenuOption, PauseMenuOption};
pub use selection::{Menu, MenuOption};
pub use title::{MenuSnake, TitleAnimation, TitlePulse};
