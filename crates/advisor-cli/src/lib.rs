//! Advisor CLI: terminal frontend for the directory analysis engine.
//!
//! This crate owns argument parsing, command classification and advisory
//! rendering. Measurement lives in `advisor-core`.
pub mod app;
pub mod cli;
pub mod command;
pub mod render;
pub mod theme;

pub use app::{analyse_targets, run, TargetAnalysis};
pub use cli::Cli;
pub use command::{Advisory, PowerAction};
