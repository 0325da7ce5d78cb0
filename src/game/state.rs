use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction of the last completed move; turns are checked against it
    heading: Direction,
    /// Direction the next move will take
    next_direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            heading: direction,
            next_direction: direction,
        }
    }

    /// Build a snake from explicit segments, head first
    ///
    /// `body` must not be empty.
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "snake needs at least one segment");
        Self {
            body,
            heading: direction,
            next_direction: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, occupies the position
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Direction the snake travelled on its last move
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Direction the snake will travel on its next move
    pub fn direction(&self) -> Direction {
        self.next_direction
    }

    /// Request a new direction for the next move.
    ///
    /// Returns false and leaves the snake untouched if `direction` would reverse
    /// the last move. Any other request replaces the previous one.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.heading.is_opposite(direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Move one cell in `direction`: push a new head and drop the tail.
    pub fn advance(&mut self, direction: Direction) {
        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);
        self.body.pop();
        self.heading = direction;
        self.next_direction = direction;
    }

    /// Grow by one cell.
    ///
    /// The tail cell is doubled; the next `advance` drops only one copy, so
    /// the snake keeps the extra length from then on.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Playfield state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }
}
