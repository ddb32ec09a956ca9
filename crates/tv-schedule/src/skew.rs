use tv_matrix::Matrix;

/// Number of cycles a skewed feed occupies for an NxN operand: fill,
/// steady state, and drain margin for an N-wide skew window.
pub fn total_cycles(n: usize) -> usize {
    3 * n - 1
}

/// The physical edge of the systolic array a skewed stream feeds.
///
/// Which operand goes to which edge is a port convention of the target
/// interconnect; callers must bind it explicitly rather than infer it from
/// variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Lane `i` carries column `i` of the source matrix, entering from the
    /// top and flowing downward: `lane[t][i] = M[t - i][i]`.
    Top,
    /// Lane `i` carries row `i` of the source matrix, entering from the
    /// left and flowing rightward: `lane[t][i] = M[i][t - i]`.
    Left,
}

/// A per-cycle staggered feed for a wavefront systolic array.
///
/// Lane `i` is delayed by `i` cycles relative to lane 0 so that partial
/// products destined for the same output meet at the same processing element
/// on the same cycle. Cycles outside a lane's live window carry the zero pad
/// value: at cycle `t`, lane `i` is live iff `0 <= t - i < N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystolicSchedule {
    n: usize,
    lanes: Vec<Vec<u64>>,
}

impl SystolicSchedule {
    /// Skews a matrix into the staggered stream for the given array edge.
    ///
    /// A `Matrix` always has positive dimension, so the schedule always has
    /// at least `total_cycles(1) == 2` cycles and construction cannot fail.
    pub fn skew(m: &Matrix, edge: Edge) -> SystolicSchedule {
        let n = m.n();
        let cycles = total_cycles(n);
        let mut lanes = Vec::with_capacity(cycles);

        for t in 0..cycles {
            let mut lane = vec![0u64; n];
            for (i, slot) in lane.iter_mut().enumerate() {
                if t < i {
                    continue;
                }
                let source = t - i;
                if source < n {
                    *slot = match edge {
                        Edge::Top => m.get(source, i),
                        Edge::Left => m.get(i, source),
                    };
                }
            }
            lanes.push(lane);
        }

        SystolicSchedule { n, lanes }
    }

    /// Lane width N.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of cycles in the schedule.
    pub fn total_cycles(&self) -> usize {
        self.lanes.len()
    }

    /// The lane vector for cycle `t`.
    ///
    /// # Panics
    /// Panics if `t >= total_cycles()`.
    pub fn lane(&self, t: usize) -> &[u64] {
        &self.lanes[t]
    }

    /// Iterator over lane vectors in cycle order.
    pub fn cycles(&self) -> impl Iterator<Item = &[u64]> {
        self.lanes.iter().map(|l| l.as_slice())
    }

    /// All lane vectors concatenated in cycle order, for serialization.
    pub fn flatten(&self) -> Vec<u64> {
        self.lanes.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_matrix::MatrixGenerator;

    #[test]
    fn test_total_cycles() {
        assert_eq!(total_cycles(8), 23);
        assert_eq!(total_cycles(1), 2);
    }

    #[test]
    fn test_top_edge_2x2() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let s = SystolicSchedule::skew(&m, Edge::Top);
        assert_eq!(s.total_cycles(), 5);
        // Lane i walks column i, delayed i cycles.
        assert_eq!(s.lane(0), &[1, 0]);
        assert_eq!(s.lane(1), &[3, 2]);
        assert_eq!(s.lane(2), &[0, 4]);
        assert_eq!(s.lane(3), &[0, 0]);
        assert_eq!(s.lane(4), &[0, 0]);
    }

    #[test]
    fn test_left_edge_2x2() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let s = SystolicSchedule::skew(&m, Edge::Left);
        // Lane i walks row i, delayed i cycles.
        assert_eq!(s.lane(0), &[1, 0]);
        assert_eq!(s.lane(1), &[2, 3]);
        assert_eq!(s.lane(2), &[0, 4]);
        assert_eq!(s.lane(3), &[0, 0]);
    }

    #[test]
    fn test_live_window_8x8() {
        let m = MatrixGenerator::new(42).generate(8).unwrap();
        let s = SystolicSchedule::skew(&m, Edge::Top);
        assert_eq!(s.total_cycles(), 23);

        for t in 0..s.total_cycles() {
            for i in 0..8 {
                let v = s.lane(t)[i];
                if t < i || t - i >= 8 {
                    assert_eq!(v, 0, "expected pad at cycle {t}, lane {i}");
                } else {
                    assert_eq!(v, m.get(t - i, i), "wrong value at cycle {t}, lane {i}");
                }
            }
        }
    }

    #[test]
    fn test_flatten_shape() {
        let m = MatrixGenerator::new(1).generate(4).unwrap();
        let s = SystolicSchedule::skew(&m, Edge::Left);
        assert_eq!(s.flatten().len(), s.total_cycles() * 4);
        assert_eq!(s.cycles().count(), 11);
    }
}
