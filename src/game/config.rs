use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Points awarded for each food eaten
    pub food_score: u32,
    /// Gameplay tick interval at score 0, in milliseconds
    pub base_tick_ms: u64,
    /// Fastest gameplay tick interval, in milliseconds
    pub min_tick_ms: u64,
    /// Milliseconds shaved off the tick interval per food eaten
    pub speedup_step_ms: u64,

    /// Interval of the title screen animation clock, in milliseconds
    pub animation_tick_ms: u64,
    /// Number of cells in the decorative title snake
    pub menu_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 1,
            food_score: 10,
            base_tick_ms: 120,
            min_tick_ms: 50,
            speedup_step_ms: 2,
            animation_tick_ms: 150,
            menu_snake_length: 6,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Gameplay tick interval for the given score.
    ///
    /// The interval drops by `speedup_step_ms` for every `food_score` points
    /// and never goes below `min_tick_ms`.
    pub fn tick_interval(&self, score: u32) -> Duration {
        let foods = u64::from(score / self.food_score.max(1));
        let ms = self
            .base_tick_ms
            .saturating_sub(foods.saturating_mul(self.speedup_step_ms))
            .max(self.min_tick_ms);
        Duration::from_millis(ms)
    }

    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_tick_ms)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > i32::MAX as usize || self.grid_height > i32::MAX as usize {
            return Err("grid dimensions do not fit in cell coordinates".to_string());
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        // The body trails to the left of the centre cell
        if self.initial_snake_length > self.grid_width / 2 + 1 {
            return Err(format!(
                "initial_snake_length ({}) does not fit a grid {} cells wide",
                self.initial_snake_length, self.grid_width
            ));
        }

        if self.menu_snake_length == 0 || self.menu_snake_length > self.grid_width {
            return Err(format!(
                "menu_snake_length must be in [1, {}], got {}",
                self.grid_width, self.menu_snake_length
            ));
        }

        if self.grid_height < 2 {
            return Err("grid_height must be at least 2 for the title animation".to_string());
        }

        if self.food_score == 0 {
            return Err("food_score must be at least 1".to_string());
        }

        if self.min_tick_ms == 0 {
            return Err("min_tick_ms must be at least 1".to_string());
        }

        if self.min_tick_ms > self.base_tick_ms {
            return Err(format!(
                "min_tick_ms ({}) cannot exceed base_tick_ms ({})",
                self.min_tick_ms, self.base_tick_ms
            ));
        }

        if self.animation_tick_ms == 0 {
            return Err("animation_tick_ms must be at least 1".to_string());
        }

        Ok(())
    }
}
