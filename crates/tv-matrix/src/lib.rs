//! `tv-matrix` - Square integer matrices for hardware test-vector generation.
//!
//! This crate provides:
//! - An immutable `Matrix` type holding non-negative integer entries
//! - A seeded `MatrixGenerator` for reproducible operand matrices
//! - An exact golden matrix product with an accumulator-width overflow check

pub mod error;
pub mod generator;
pub mod golden;
pub mod matrix;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use generator::{MatrixGenerator, OPERAND_RANGE};
pub use golden::{fits_accumulator, golden_product};
pub use matrix::Matrix;
