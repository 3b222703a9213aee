//! Quadsplit Core
//!
//! Math, geometry, color, logging and profiling utilities shared by the
//! quadsplit layout crates.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
