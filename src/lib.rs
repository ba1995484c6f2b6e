#![warn(clippy::all)]

mod config;
mod engine;
mod error;
mod grid;
mod gui;
mod pattern;
mod utils;

pub use config::Settings;
pub use engine::{
    neighbour_sum, next_state, step, step_into, ExecutionMode, Simulation, Transition,
};
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid};
pub use gui::App;
pub use pattern::Pattern;
pub use utils::NiceInt;
