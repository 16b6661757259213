//! Needleman-Wunsch: the quadratic dynamic programming algorithm.
//!
//! Cell `(i, j)` of the table is the cost of aligning `x[..i]` to `y[..j]`.
//! Row 0 only contains insertions, and column 0 only contains deletions.
//!
//! When several predecessors give the same minimal cost, the diagonal
//! (substitution) is preferred over up (deletion) over left (insertion).
//! Both filling the table and tracing back use this order, so the alignment
//! found for a pair of sequences is deterministic.
use std::ops::{Index, IndexMut};

use log::debug;

use crate::align::{Align, AlignOf, Symbol};
use crate::aligners::Aligner;
use crate::cost_model::{CostT, MetricSpace};
use crate::error::AlignError;

/// The move into a cell of the DP table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// From `(i-1, j-1)`: `x[i-1]` aligned to `y[j-1]`.
    Diagonal,
    /// From `(i-1, j)`: `x[i-1]` is deleted.
    Up,
    /// From `(i, j-1)`: `y[j-1]` is inserted.
    Left,
}

/// The minimum of the three candidate costs of a cell.
/// Ties are broken in the order diagonal, up, left.
#[inline]
pub fn best_step<C: CostT>(diagonal: C, up: C, left: C) -> (C, Step) {
    let mut best = (diagonal, Step::Diagonal);
    if up < best.0 {
        best = (up, Step::Up);
    }
    if left < best.0 {
        best = (left, Step::Left);
    }
    best
}

/// A dense `(n+1) x (m+1)` table of costs, stored row-major in a single buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable<C> {
    rows: usize,
    cols: usize,
    cells: Vec<C>,
}

impl<C: CostT> DpTable<C> {
    /// A table for sequences of lengths `n` and `m`, with all cells `INF`.
    pub fn new(n: usize, m: usize) -> Self {
        DpTable {
            rows: n + 1,
            cols: m + 1,
            cells: vec![C::INF; (n + 1) * (m + 1)],
        }
    }

    /// The lengths `(n, m)` of the sequences this table is for.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 1)
    }

    /// Fails when the table was not built for sequences of lengths `n` and `m`.
    pub fn check_dims(&self, n: usize, m: usize) -> Result<(), AlignError> {
        if self.dims() != (n, m) {
            return Err(AlignError::TableDimensions {
                expected: (n, m),
                found: self.dims(),
            });
        }
        Ok(())
    }

    pub fn get(&self, i: usize, j: usize) -> Option<C> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i`, the costs of aligning `x[..i]` to each prefix of `y`.
    ///
    /// # Panics
    ///
    /// When `i > n`.
    pub fn row(&self, i: usize) -> &[C] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The value of the bottom-right cell.
    pub fn distance(&self) -> C {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    fn idx(&self, (i, j): (usize, usize)) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({i}, {j}) out of bounds for table with {} rows and {} columns",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl<C: CostT> Index<(usize, usize)> for DpTable<C> {
    type Output = C;

    fn index(&self, pos: (usize, usize)) -> &C {
        &self.cells[self.idx(pos)]
    }
}

impl<C: CostT> IndexMut<(usize, usize)> for DpTable<C> {
    fn index_mut(&mut self, pos: (usize, usize)) -> &mut C {
        let idx = self.idx(pos);
        &mut self.cells[idx]
    }
}

/// Initialize row 0: only insertions.
fn first_row<M: MetricSpace>(cm: &M, row: &mut [M::Cost]) {
    row[0] = M::ZERO_COST;
    for j in 1..row.len() {
        row[j] = row[j - 1].combine(cm.ins());
    }
}

/// Computes the next row (row `i`) from the previous one.
/// `ca` is the `i-1`th character of sequence `x`.
fn next_row<M: MetricSpace>(
    cm: &M,
    ca: &M::Item,
    y: &[M::Item],
    prev: &[M::Cost],
    next: &mut [M::Cost],
) {
    next[0] = prev[0].combine(cm.del());
    for (j0, cb) in y.iter().enumerate() {
        // Change from 0 to 1 based indexing.
        let j = j0 + 1;
        next[j] = best_step(
            prev[j - 1].combine(cm.sub(ca, cb)),
            prev[j].combine(cm.del()),
            next[j - 1].combine(cm.ins()),
        )
        .0;
    }
}

/// The full table for `x` and `y`. O(nm) time and memory.
pub fn dp_table<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> DpTable<M::Cost> {
    debug!("Filling {}x{} table", x.len() + 1, y.len() + 1);
    let mut table = DpTable::new(x.len(), y.len());
    let cols = table.cols;
    first_row(cm, &mut table.cells[..cols]);
    for (i0, ca) in x.iter().enumerate() {
        // Change from 0-based to 1-based indexing.
        let i = i0 + 1;
        let (done, todo) = table.cells.split_at_mut(i * cols);
        next_row(cm, ca, y, &done[i0 * cols..], &mut todo[..cols]);
    }
    table
}

/// The distance between `x` and `y`, using the full table.
/// O(nm) time and memory.
pub fn distance_dp<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> M::Cost {
    dp_table(x, y, cm).distance()
}

/// Cost of aligning all of `x` to each prefix of `y`: the last row of the
/// table. Only two rows are kept in memory.
pub fn prefix_row<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> Vec<M::Cost> {
    let ref mut prev = vec![M::INF_COST; y.len() + 1];
    let ref mut next = vec![M::INF_COST; y.len() + 1];
    first_row(cm, next);
    for ca in x {
        std::mem::swap(prev, next);
        next_row(cm, ca, y, prev, next);
    }
    std::mem::take(next)
}

/// Cost of aligning all of `x` to each suffix of `y`: entry `j` is the cost of
/// aligning `x` to `y[j..]`. This is the first row of the table of costs to
/// the end, computed backwards using two rows.
pub fn suffix_row<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> Vec<M::Cost> {
    let m = y.len();
    let ref mut prev = vec![M::INF_COST; m + 1];
    let ref mut next = vec![M::INF_COST; m + 1];
    next[m] = M::ZERO_COST;
    for j in (0..m).rev() {
        next[j] = next[j + 1].combine(cm.ins());
    }
    for ca in x.iter().rev() {
        std::mem::swap(prev, next);
        next[m] = prev[m].combine(cm.del());
        for j in (0..m).rev() {
            next[j] = best_step(
                prev[j + 1].combine(cm.sub(ca, &y[j])),
                prev[j].combine(cm.del()),
                next[j + 1].combine(cm.ins()),
            )
            .0;
        }
    }
    std::mem::take(next)
}

/// The distance between `x` and `y`, keeping only two rows of the table.
/// O(nm) time and O(m) memory.
pub fn distance_linear_space<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> M::Cost {
    prefix_row(x, y, cm)[y.len()]
}

/// Walk back from `(n, m)` to `(0, 0)`, preferring diagonal, then up, then left.
///
/// The table is only read, so a table that does not belong to `x`, `y`, and
/// `cm` still gives a valid (but not necessarily optimal) alignment.
fn traceback<M: MetricSpace>(
    x: &[M::Item],
    y: &[M::Item],
    cm: &M,
    table: &DpTable<M::Cost>,
) -> AlignOf<M> {
    let (mut i, mut j) = (x.len(), y.len());
    let mut ax = Vec::with_capacity(i + j);
    let mut ay = Vec::with_capacity(i + j);
    while i > 0 || j > 0 {
        let cur = table[(i, j)];
        let step = if i > 0
            && j > 0
            && cur == table[(i - 1, j - 1)].combine(cm.sub(&x[i - 1], &y[j - 1]))
        {
            Step::Diagonal
        } else if j == 0 || (i > 0 && cur == table[(i - 1, j)].combine(cm.del())) {
            Step::Up
        } else {
            Step::Left
        };
        match step {
            Step::Diagonal => {
                i -= 1;
                j -= 1;
                ax.push(x[i]);
                ay.push(y[j]);
            }
            Step::Up => {
                i -= 1;
                ax.push(x[i]);
                ay.push(M::Item::GAP);
            }
            Step::Left => {
                j -= 1;
                ax.push(M::Item::GAP);
                ay.push(y[j]);
            }
        }
    }
    ax.reverse();
    ay.reverse();
    Align::new(ax, ay, table.distance())
}

/// An optimal alignment of `x` and `y`, using the full table.
/// O(nm) time and memory.
pub fn align_quadratic<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> AlignOf<M> {
    let table = dp_table(x, y, cm);
    traceback(x, y, cm, &table)
}

/// Same as `align_quadratic`, but reuses a table built before by `dp_table`.
///
/// Fails when the dimensions of the table do not match the sequences.
pub fn align_quadratic_with_table<M: MetricSpace>(
    x: &[M::Item],
    y: &[M::Item],
    cm: &M,
    table: &DpTable<M::Cost>,
) -> Result<AlignOf<M>, AlignError> {
    table.check_dims(x.len(), y.len())?;
    Ok(traceback(x, y, cm, table))
}

/// The distance together with an optimal alignment.
pub fn distance_and_align<M: MetricSpace>(
    x: &[M::Item],
    y: &[M::Item],
    cm: &M,
) -> (M::Cost, AlignOf<M>) {
    let align = align_quadratic(x, y, cm);
    (align.cost, align)
}

/// Needleman-Wunsch aligner.
///
/// The cost-only version uses linear memory.
/// When `trace` is false, `align` does not return an alignment.
#[derive(Debug, Clone)]
pub struct NW<M> {
    pub cm: M,
    pub trace: bool,
}

impl<M: MetricSpace> NW<M> {
    pub fn new(cm: M, trace: bool) -> Self {
        NW { cm, trace }
    }
}

impl<M: MetricSpace + std::fmt::Debug> Aligner for NW<M> {
    type Metric = M;

    fn cost_model(&self) -> &M {
        &self.cm
    }

    fn cost(&mut self, x: &[M::Item], y: &[M::Item]) -> M::Cost {
        distance_linear_space(x, y, &self.cm)
    }

    fn align(&mut self, x: &[M::Item], y: &[M::Item]) -> (M::Cost, Option<AlignOf<M>>) {
        if self.trace {
            let (cost, align) = distance_and_align(x, y, &self.cm);
            (cost, Some(align))
        } else {
            (distance_linear_space(x, y, &self.cm), None)
        }
    }
}
