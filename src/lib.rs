pub mod cli;
pub mod config;
pub mod error;
pub mod list;
pub mod math;
pub mod task;
