pub mod classifier;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod error;
pub mod flatten;
