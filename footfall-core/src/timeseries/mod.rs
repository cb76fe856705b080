//! Time-series utilities for the overnight visitor window.
//!
//! Modules include:
//! - `normalize`: midnight-rollover normalization shared by grid and matching
//! - `grid`: the fixed 10-minute overnight grid (18:00 through 02:50)
//! - `align`: nearest-sample resampling of two raw nights onto the grid
/// Midnight-rollover normalization and the overnight hour window.
pub mod normalize;
/// Overnight grid generation at a fixed step.
pub mod grid;
/// Alignment of raw series onto the grid with bounded-tolerance matching.
pub mod align;
