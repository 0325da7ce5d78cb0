//! Snake Arcade - grid snake for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Menus and the title animation (menu module)
//! - The screen state machine that ties them together (session module)
//! - High score persistence (storage module)
//! - Terminal input, rendering and the event loop (input, render, app modules)

pub mod app;
pub mod game;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;
pub mod storage;
