use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Checks the closed-form accumulator precondition for a product of two NxN
/// matrices whose entries fit `operand_width` bits.
///
/// The worst-case dot product is `N * (2^W - 1)^2`; it must stay below
/// `2^acc_width` for the golden result to be representable.
pub fn fits_accumulator(n: usize, operand_width: u32, acc_width: u32) -> bool {
    if n == 0 || operand_width == 0 || operand_width > 64 || acc_width == 0 || acc_width > 64 {
        return false;
    }
    let max_operand = (1u128 << operand_width) - 1;
    let worst_case = n as u128 * max_operand * max_operand;
    worst_case < 1u128 << acc_width
}

/// Computes the exact golden product `C = A x B`.
///
/// Dot products accumulate in `u128`, so the arithmetic itself cannot
/// overflow for any supported width. Every entry is then checked against the
/// declared accumulator width; an entry that does not fit fails the whole
/// computation rather than being truncated, since a wrong golden reference
/// would defeat hardware verification.
pub fn golden_product(a: &Matrix, b: &Matrix, acc_width: u32) -> Result<Matrix> {
    if a.n() != b.n() {
        return Err(MatrixError::DimensionMismatch { a: a.n(), b: b.n() });
    }
    if acc_width == 0 || acc_width > 64 {
        return Err(MatrixError::InvalidWidth { width: acc_width });
    }

    let n = a.n();
    let bound = 1u128 << acc_width;
    let mut data = Vec::with_capacity(n * n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0u128;
            for k in 0..n {
                sum += a.get(i, k) as u128 * b.get(k, j) as u128;
            }
            if sum >= bound {
                return Err(MatrixError::Overflow {
                    row: i,
                    col: j,
                    value: sum,
                    acc_width,
                });
            }
            data.push(sum as u64);
        }
    }

    Matrix::from_vec(n, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MatrixGenerator;

    #[test]
    fn test_golden_2x2() {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
        let c = golden_product(&a, &b, 32).unwrap();
        assert_eq!(c.data(), &[19, 22, 43, 50]);
    }

    #[test]
    fn test_golden_matches_brute_force() {
        let mut gen = MatrixGenerator::new(42);
        let (a, b) = gen.operand_pair(4).unwrap();
        let c = golden_product(&a, &b, 32).unwrap();

        for i in 0..4 {
            for j in 0..4 {
                let mut expected = 0u64;
                for k in 0..4 {
                    expected += a.get(i, k) * b.get(k, j);
                }
                assert_eq!(c.get(i, j), expected);
            }
        }
    }

    #[test]
    fn test_overflow_reports_entry() {
        // 15 * 15 * 4 = 900 does not fit 8 bits.
        let a = Matrix::from_vec(4, vec![15; 16]).unwrap();
        let b = Matrix::from_vec(4, vec![15; 16]).unwrap();
        match golden_product(&a, &b, 8) {
            Err(MatrixError::Overflow {
                row: 0,
                col: 0,
                value: 900,
                acc_width: 8,
            }) => {}
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::from_vec(2, vec![0; 4]).unwrap();
        let b = Matrix::from_vec(3, vec![0; 9]).unwrap();
        assert!(matches!(
            golden_product(&a, &b, 32),
            Err(MatrixError::DimensionMismatch { a: 2, b: 3 })
        ));
    }

    #[test]
    fn test_fits_accumulator_boundary() {
        // 4 * 255^2 = 260100: below 2^18 = 262144, above 2^17 = 131072.
        assert!(fits_accumulator(4, 8, 18));
        assert!(!fits_accumulator(4, 8, 17));
        // Reference configuration: 4-bit values in a 32-bit accumulator.
        assert!(fits_accumulator(128, 4, 32));
    }

    #[test]
    fn test_fits_accumulator_rejects_bad_widths() {
        assert!(!fits_accumulator(0, 8, 32));
        assert!(!fits_accumulator(4, 0, 32));
        assert!(!fits_accumulator(4, 8, 0));
        assert!(!fits_accumulator(4, 65, 128));
    }

    #[test]
    fn test_invalid_accumulator_width() {
        let a = Matrix::from_vec(2, vec![1; 4]).unwrap();
        assert!(matches!(
            golden_product(&a, &a, 0),
            Err(MatrixError::InvalidWidth { width: 0 })
        ));
        assert!(matches!(
            golden_product(&a, &a, 65),
            Err(MatrixError::InvalidWidth { width: 65 })
        ));
    }
}
