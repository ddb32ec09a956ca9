use tv_matrix::Matrix;

use crate::error::{Result, ScheduleError};

/// Reorders a matrix into the block-major stream a tiled, weight-stationary
/// array consumes.
///
/// Blocks are visited block-row outer, block-column inner; within each
/// `block x block` submatrix, elements are emitted row-major. The output
/// position of an element depends only on its indices, so the transform is a
/// pure permutation. `block == n` degenerates to a plain row-major flatten.
///
/// Fails if `block` is zero or does not divide the matrix dimension.
pub fn block_major(m: &Matrix, block: usize) -> Result<Vec<u64>> {
    let n = m.n();
    if block == 0 || n % block != 0 {
        return Err(ScheduleError::BlockMismatch { dim: n, block });
    }

    let num_blocks = n / block;
    let mut out = Vec::with_capacity(n * n);
    for ib in 0..num_blocks {
        for jb in 0..num_blocks {
            for r in 0..block {
                for c in 0..block {
                    out.push(m.get(ib * block + r, jb * block + c));
                }
            }
        }
    }
    Ok(out)
}

/// Inverts `block_major`, reconstructing the row-major matrix from a
/// block-major stream.
pub fn block_major_inverse(flat: &[u64], n: usize, block: usize) -> Result<Matrix> {
    if block == 0 || n == 0 || n % block != 0 {
        return Err(ScheduleError::BlockMismatch { dim: n, block });
    }
    if flat.len() != n * n {
        return Err(ScheduleError::LengthMismatch {
            dim: n,
            len: flat.len(),
        });
    }

    let num_blocks = n / block;
    let mut data = vec![0u64; n * n];
    let mut pos = 0;
    for ib in 0..num_blocks {
        for jb in 0..num_blocks {
            for r in 0..block {
                for c in 0..block {
                    // Same visit order as block_major, scattered back.
                    data[(ib * block + r) * n + jb * block + c] = flat[pos];
                    pos += 1;
                }
            }
        }
    }
    Ok(Matrix::from_vec(n, data)?)
}
