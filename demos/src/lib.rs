//! Shared helpers for the runnable footfall demos.

pub mod common;
