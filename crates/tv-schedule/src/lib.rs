//! `tv-schedule` - Data-movement orderings for matmul accelerators.
//!
//! This crate provides:
//! - Block-major tiling (and its inverse) for weight-stationary tiled arrays
//! - Skewed per-cycle lane schedules for wavefront systolic arrays
//!
//! Both transforms are pure index permutations over an immutable `Matrix`;
//! neither inspects the values it reorders.

pub mod error;
pub mod skew;
pub mod tiling;

pub use error::{Result, ScheduleError};
pub use skew::{total_cycles, Edge, SystolicSchedule};
pub use tiling::{block_major, block_major_inverse};
