pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod mutators;
pub mod process;
pub mod repo;
pub mod section;
pub mod ui;

pub use error::{PrepareError, Result};
