//! # benchtop-plot
//!
//! Terminal rendering for the analysis chart models using ratatui.

pub mod chart;
pub mod viewer;

// Re-exports
pub use chart::{render_heating_curve, render_xrd_scan};
pub use viewer::{show_heating_curve, show_xrd_scan};
