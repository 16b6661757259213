//! The naive exponential algorithm, used as a correctness oracle.
//!
//! All alignments are enumerated recursively, without any memoization or
//! pruning, so the running time is the number of alignments, about `3^(n+m)`.
use crate::align::AlignOf;
use crate::aligners::Aligner;
use crate::config::NAIVE_MAX_LEN;
use crate::cost_model::{CostT, MetricSpace};

/// The distance between `x` and `y`, by trying all alignments.
///
/// # Panics
///
/// When `x` or `y` is longer than `NAIVE_MAX_LEN`.
pub fn distance_naive<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> M::Cost {
    assert!(
        x.len() <= NAIVE_MAX_LEN && y.len() <= NAIVE_MAX_LEN,
        "The naive algorithm only supports sequences of length at most {NAIVE_MAX_LEN}, got {} and {}.",
        x.len(),
        y.len()
    );
    distance_naive_rec(x, y, cm, M::ZERO_COST, M::INF_COST)
}

/// Extend the current partial alignment of cost `c` in all possible ways,
/// and return the minimum of `dist` and all completed alignments.
fn distance_naive_rec<M: MetricSpace>(
    x: &[M::Item],
    y: &[M::Item],
    cm: &M,
    c: M::Cost,
    mut dist: M::Cost,
) -> M::Cost {
    match (x.split_first(), y.split_first()) {
        (None, None) => c.min(dist),
        (Some((a, xs)), Some((b, ys))) => {
            dist = distance_naive_rec(xs, ys, cm, c.combine(cm.sub(a, b)), dist);
            dist = distance_naive_rec(xs, y, cm, c.combine(cm.del()), dist);
            distance_naive_rec(x, ys, cm, c.combine(cm.ins()), dist)
        }
        (Some((_, xs)), None) => distance_naive_rec(xs, y, cm, c.combine(cm.del()), dist),
        (None, Some((_, ys))) => distance_naive_rec(x, ys, cm, c.combine(cm.ins()), dist),
    }
}

/// Aligner computing only the cost, using `distance_naive`.
#[derive(Debug, Clone)]
pub struct Naive<M> {
    pub cm: M,
}

impl<M: MetricSpace + std::fmt::Debug> Aligner for Naive<M> {
    type Metric = M;

    fn cost_model(&self) -> &M {
        &self.cm
    }

    fn cost(&mut self, x: &[M::Item], y: &[M::Item]) -> M::Cost {
        distance_naive(x, y, &self.cm)
    }

    fn align(&mut self, x: &[M::Item], y: &[M::Item]) -> (M::Cost, Option<AlignOf<M>>) {
        (self.cost(x, y), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_model::{Cost, LinearCost};
    use crate::dna::{parse_dna, DnaMetricSpace};

    #[test]
    fn dist_naive() {
        let cm = LinearCost::<char>::new_unit();
        let test_results = &[
            ("abc", "abc", 0),
            ("abc", "abs", 1),
            ("", "abc", 3),
            ("abc", "", 3),
            ("kitten", "sitting", 3),
            ("GATTACA", "GCATGCU", 4),
        ];

        for (x, y, result) in test_results {
            let x = x.chars().collect::<Vec<_>>();
            let y = y.chars().collect::<Vec<_>>();
            assert_eq!(distance_naive(&x, &y, &cm), *result);
        }
    }

    #[test]
    fn dist_naive_dna() {
        let x = parse_dna("TATATGAGTC").unwrap();
        let y = parse_dna("TATTT").unwrap();
        assert_eq!(distance_naive(&x, &y, &DnaMetricSpace), 10);
    }

    #[test]
    fn dist_naive_infeasible() {
        let cm = LinearCost::<u8>::new_linear_asymmetric(1, 1, Cost::INF);
        assert_eq!(distance_naive(b"AA", b"C", &cm), Cost::INF);
        assert_eq!(distance_naive(b"A", b"CC", &cm), 2);
    }

    #[test]
    #[should_panic]
    fn too_long() {
        let x = vec![b'A'; NAIVE_MAX_LEN + 1];
        distance_naive(&x, b"A", &LinearCost::<u8>::new_unit());
    }
}
