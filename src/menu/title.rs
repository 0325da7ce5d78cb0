//! Title screen decoration: a pulsing title and a snake sliding along the
//! bottom of the grid.

use crate::game::{GameConfig, Position};

const PULSE_STEP: u8 = 5;
const PULSE_MIN: u8 = 30;
const PULSE_MAX: u8 = 100;

/// Title brightness, kept in hundredths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitlePulse {
    level: u8,
    rising: bool,
}

impl TitlePulse {
    pub fn new() -> Self {
        Self {
            level: 0,
            rising: true,
        }
    }

    /// Intensity in [0.0, 1.0]
    pub fn intensity(&self) -> f32 {
        f32::from(self.level) / f32::from(PULSE_MAX)
    }

    pub fn step(&mut self) {
        if self.rising {
            self.level = (self.level + PULSE_STEP).min(PULSE_MAX);
            if self.level >= PULSE_MAX {
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(PULSE_STEP);
            if self.level <= PULSE_MIN {
                self.rising = true;
            }
        }
    }
}

impl Default for TitlePulse {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-length snake that slides back and forth along one row.
///
/// When the leading cell would leave the grid the step turns the snake
/// around instead of moving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSnake {
    left: i32,
    row: i32,
    length: i32,
    grid_width: i32,
    moving_right: bool,
}

impl MenuSnake {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            left: 0,
            row: config.grid_height as i32 - 2,
            length: config.menu_snake_length as i32,
            grid_width: config.grid_width as i32,
            moving_right: true,
        }
    }

    /// Occupied cells, left to right
    pub fn cells(&self) -> Vec<Position> {
        (self.left..self.left + self.length)
            .map(|x| Position::new(x, self.row))
            .collect()
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn is_moving_right(&self) -> bool {
        self.moving_right
    }

    pub fn step(&mut self) {
        if self.moving_right {
            let lead = self.left + self.length - 1;
            if lead + 1 >= self.grid_width {
                self.moving_right = false;
            } else {
                self.left += 1;
            }
        } else if self.left - 1 < 0 {
            self.moving_right = true;
        } else {
            self.left -= 1;
        }
    }
}

/// Everything animated on the title screen, driven by one clock
#[derive(Debug, Clone, PartialEq)]
pub struct TitleAnimation {
    pub pulse: TitlePulse,
    pub snake: MenuSnake,
}

impl TitleAnimation {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pulse: TitlePulse::new(),
            snake: MenuSnake::new(config),
        }
    }

    /// Advance one animation frame.
    ///
    /// The pulse always moves; the snake only slides while the title screen
    /// is showing, so it resumes where it stopped when the player returns.
    pub fn tick(&mut self, on_title_screen: bool) {
        if on_title_screen {
            self.snake.step();
        }
        self.pulse.step();
    }
}
