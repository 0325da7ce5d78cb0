use crate::game::{GameState, Position};
use crate::menu::{Menu, MenuOption};

/// Labels of one menu and the highlighted entry
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub labels: Vec<&'static str>,
    pub selected: usize,
}

impl<T: MenuOption> From<&Menu<T>> for MenuView {
    fn from(menu: &Menu<T>) -> Self {
        Self {
            labels: menu.options().iter().map(|option| option.label()).collect(),
            selected: menu.selected_index(),
        }
    }
}

/// Everything a renderer needs to draw the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    MainMenu {
        menu: MenuView,
        /// Title brightness in [0.0, 1.0]
        title_pulse: f32,
        menu_snake: Vec<Position>,
        grid_width: usize,
        grid_height: usize,
    },
    HighScore {
        high_score: u32,
    },
    Playing {
        game: &'a GameState,
        high_score: u32,
    },
    Paused {
        game: &'a GameState,
        high_score: u32,
        menu: MenuView,
    },
    GameOver {
        game: &'a GameState,
        high_score: u32,
    },
}
