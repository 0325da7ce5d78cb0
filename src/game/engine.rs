use super::{
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
    Direction,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: snake in the centre heading right, score 0
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one step of the game
    ///
    /// Move, then check collisions, then check food. A step that collides
    /// never scores, even if the head landed on the food.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            };
        }

        let direction = state.snake.direction();
        state.snake.advance(direction);
        state.steps += 1;

        if let Some(collision_type) = self.check_collision(state) {
            state.is_alive = false;

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        let ate_food = state.snake.head() == state.food;

        if ate_food {
            state.score += self.config.food_score;
            state.snake.grow();
            state.food = self.spawn_food(&state.snake);
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    /// Check the snake's current head against the walls and its own body
    pub fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position
    ///
    /// Samples uniformly until a free cell turns up. This only terminates
    /// while the snake leaves at least one cell free; nothing enforces that,
    /// and on a 20x20 grid a snake that long is not reached in practice.
    pub fn spawn_food(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }

    /// Gameplay tick interval for the given score
    pub fn tick_interval(&self, score: u32) -> Duration {
        self.config.tick_interval(score)
    }
}
