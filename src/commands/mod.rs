//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod stats;

pub use evaluate::{EvaluateReport, evaluate_guesses};
pub use simple::{run_simple, run_simple_with};
pub use stats::{reset_stats, show_stats};
