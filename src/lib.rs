//! Conway's Game of Life on a toroidal grid, rendered to the terminal
//!
//! [`engine::Engine`] is the simulation; [`runner::Runner`] wraps it with
//! pause, step and quit controls and drives a [`display::Display`] from an
//! [`input::InputSource`].

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod patterns;
pub mod runner;
pub mod settings;
pub mod terminal;

pub use engine::Engine;
pub use error::LifeError;
pub use runner::Runner;
