//! # benchtop
//!
//! Application layer for the benchtop binary: configuration, dispatch,
//! exit-code mapping, and the built-in demo datasets.

pub mod app;
pub mod config;
pub mod demo;
pub mod errors;
