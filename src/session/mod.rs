//! Top-level screen state machine
//!
//! `Session` owns everything that changes while the program runs. Each screen
//! handles keys its own way and describes itself to the renderer as a `View`.

pub mod controller;
pub mod screen;
pub mod view;

pub use controller::Session;
pub use screen::{Control, Screen};
pub use view::{MenuView, View};
