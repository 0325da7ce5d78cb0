pub mod handler;

pub use handler::{InputHandler, Key, KeyAction};
