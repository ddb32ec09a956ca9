use std::fmt;

use crate::error::{MatrixError, Result};

/// An immutable NxN matrix of non-negative integers.
///
/// Entries are stored row-major in a contiguous `Vec<u64>`. The dimension is
/// validated at construction and never changes afterwards; there are no
/// mutating operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<u64>,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// Fails if `n` is zero or `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<u64>) -> Result<Matrix> {
        if n == 0 {
            return Err(MatrixError::InvalidDimension { dim: n });
        }
        if data.len() != n * n {
            return Err(MatrixError::LengthMismatch {
                dim: n,
                len: data.len(),
            });
        }
        Ok(Matrix { n, data })
    }

    /// Create a matrix from nested rows.
    ///
    /// Fails if the rows do not form a non-empty square grid.
    pub fn from_rows(rows: &[Vec<u64>]) -> Result<Matrix> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::InvalidDimension { dim: n });
        }
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(MatrixError::LengthMismatch {
                    dim: n,
                    len: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { n, data })
    }

    /// Matrix dimension N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i >= n()` or `j >= n()`.
    pub fn get(&self, i: usize, j: usize) -> u64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds");
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= n()`.
    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// The underlying row-major data.
    pub fn data(&self) -> &[u64] {
        &self.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.get(1, 1), 4);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.data(), &[1, 2, 3, 4]);
        assert_eq!(m.row(1), &[3, 4]);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Matrix::from_vec(0, vec![]),
            Err(MatrixError::InvalidDimension { dim: 0 })
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(matches!(
            Matrix::from_vec(2, vec![1, 2, 3]),
            Err(MatrixError::LengthMismatch { dim: 2, len: 3 })
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Matrix::from_rows(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }
}
