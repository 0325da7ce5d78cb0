//! Terminal front end: raw-mode setup, the async event loop and its timers

pub mod runner;
pub mod timer;

pub use runner::App;
pub use timer::GameplayTimer;
