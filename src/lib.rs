// lib.rs - Conway's Game of Life: automaton engine and simulation driver

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod sim;

pub use error::{LifeError, Result};
pub use grid::Grid;
pub use sim::{FrameInput, FrameReport, RunState, Simulation};
