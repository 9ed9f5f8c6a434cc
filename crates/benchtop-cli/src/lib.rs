//! # benchtop-cli
//!
//! Output formatting and presentation for the benchtop binary.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::{format_count, format_duration, write_report};
pub use presenter::ReportPresenter;
