use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Exclusive upper bound on generated operand entries.
///
/// Hardware operand feeds are exercised with 4-bit values so that even modest
/// accumulator widths hold the products exactly.
pub const OPERAND_RANGE: u64 = 16;

/// Deterministic generator for operand matrices.
///
/// Wraps a seeded `StdRng`; the same seed and dimension always produce the
/// same sequence of matrices. The two operands of one run are drawn
/// back-to-back from the same stream, so a single seed pins down the entire
/// run.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    /// Create a generator seeded for reproducibility.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next NxN matrix with entries uniform in `[0, OPERAND_RANGE)`.
    pub fn generate(&mut self, n: usize) -> Result<Matrix> {
        if n == 0 {
            return Err(MatrixError::InvalidDimension { dim: n });
        }
        let data: Vec<u64> = (0..n * n)
            .map(|_| self.rng.gen_range(0..OPERAND_RANGE))
            .collect();
        Matrix::from_vec(n, data)
    }

    /// Draw the operand pair (A, B) for one generation run.
    pub fn operand_pair(&mut self, n: usize) -> Result<(Matrix, Matrix)> {
        let a = self.generate(n)?;
        let b = self.generate(n)?;
        Ok((a, b))
    }
}
