//! Core data models for gnuplot-pipe
//!
//! Value types shared by the session, the command builder and the
//! process layer.

pub mod plot_verb;
pub mod process_info;
pub mod style;

// Re-exports for convenience
pub use plot_verb::{Axis, PlotVerb};
pub use process_info::{ProcessInfo, ProcessState};
pub use style::PlotStyle;
