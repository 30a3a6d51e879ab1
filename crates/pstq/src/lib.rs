//! Scoring engine and what-if simulator for Quebec's skilled worker selection program.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::selection::{selection_router, SelectionService};
