//! Hirschberg's divide & conquer: an optimal alignment in linear memory.
//!
//! `x` is always the sequence that is split, at `i = n/2`, so rows are
//! `|y| + 1` long. Pass the shorter sequence as `y` to keep them small.
//!
//! A forward pass over the whole table finds the column `j` where the path
//! traced back by [`align_quadratic`](crate::nw::align_quadratic) crosses row
//! `i`. Both halves are then aligned recursively and concatenated. The
//! traceback of each half is the corresponding part of the full traceback, so
//! the result is exactly the alignment of `align_quadratic`. Each pass keeps
//! only two rows, so memory is `O(n + m)` on top of the output, while time
//! stays `O(nm)`.
use std::collections::VecDeque;
use std::iter::once;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::align::{Align, AlignOf, Symbol};
use crate::aligners::Aligner;
use crate::cost_model::{CostT, MetricSpace};
use crate::nw::{best_step, distance_linear_space, prefix_row, suffix_row, Step};

/// The position `(i, j)` where the alignment of `x` and `y` is split.
///
/// `i` is `|x|/2`. `j` is the column where the optimal path preferring
/// diagonal, then up, then left steps enters row `i` from below. It minimizes
/// the cost of aligning `x[..i]` to `y[..j]` plus the cost of aligning
/// `x[i..]` to `y[j..]`.
pub fn cut<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> (usize, usize) {
    let (i, j, _) = cut_with_cost(x, y, cm);
    (i, j)
}

/// Same as `cut`, but also returns the cost through `(i, j)`, which is the
/// distance between `x` and `y`.
fn cut_with_cost<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> (usize, usize, M::Cost) {
    let i = x.len() / 2;
    let m = y.len();
    let forward = prefix_row(&x[..i], y, cm);
    let ref mut prev = forward.clone();
    let ref mut next = vec![M::INF_COST; m + 1];
    // For each cell of the current row, the column at which the preferred
    // path into it leaves row `i`.
    let ref mut prev_from = (0..=m).collect::<Vec<usize>>();
    let ref mut next_from = vec![0; m + 1];
    for ca in &x[i..] {
        next[0] = prev[0].combine(cm.del());
        next_from[0] = prev_from[0];
        for (j0, cb) in y.iter().enumerate() {
            // Change from 0 to 1 based indexing.
            let j = j0 + 1;
            let (cost, step) = best_step(
                prev[j - 1].combine(cm.sub(ca, cb)),
                prev[j].combine(cm.del()),
                next[j - 1].combine(cm.ins()),
            );
            next[j] = cost;
            next_from[j] = match step {
                Step::Diagonal => prev_from[j - 1],
                Step::Up => prev_from[j],
                Step::Left => next_from[j - 1],
            };
        }
        std::mem::swap(prev, next);
        std::mem::swap(prev_from, next_from);
    }
    let (j, cost) = (prev_from[m], prev[m]);
    debug_assert_eq!(forward[j].combine(suffix_row(&x[i..], y, cm)[j]), cost);
    (i, j, cost)
}

/// Where a single symbol goes when aligned to a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    /// Paired with `word[k]`.
    Paired(usize),
    /// Deleted right after `word[..k]`.
    Deleted(usize),
}

/// Fills the one-row table of `a` against `word`, and walks back along it the
/// way the quadratic traceback does.
fn place_symbol<M: MetricSpace>(a: &M::Item, word: &[M::Item], cm: &M) -> (Placement, M::Cost) {
    let row = prefix_row(std::slice::from_ref(a), word, cm);
    let mut j = word.len();
    let placement = loop {
        if j > 0 && row[j] == cm.ins().repeat(j - 1).combine(cm.sub(a, &word[j - 1])) {
            break Placement::Paired(j - 1);
        }
        if j == 0 || row[j] == cm.ins().repeat(j).combine(cm.del()) {
            break Placement::Deleted(j);
        }
        j -= 1;
    };
    (placement, row[word.len()])
}

/// The columns of aligning `a` to `word` with the given placement, from left to right.
fn symbol_word_columns<'a, T: Symbol>(
    a: T,
    word: &'a [T],
    placement: Placement,
) -> impl DoubleEndedIterator<Item = (T, T)> + 'a {
    let (before, head, after) = match placement {
        Placement::Paired(k) => (&word[..k], (a, word[k]), &word[k + 1..]),
        Placement::Deleted(k) => (&word[..k], (a, T::GAP), &word[k..]),
    };
    let ins = |b: &T| (T::GAP, *b);
    before.iter().map(ins).chain(once(head)).chain(after.iter().map(ins))
}

/// An optimal alignment of a single symbol to a word, trying each position of
/// the word for it. `O(|word|)`.
///
/// Ties are broken like [`align_quadratic`](crate::nw::align_quadratic):
/// scanning the word from its end, the first position where `a` can be paired
/// at optimal cost wins, and otherwise the first position where it can be
/// deleted.
pub fn align_symbol_word<M: MetricSpace>(a: &M::Item, word: &[M::Item], cm: &M) -> AlignOf<M> {
    let (placement, cost) = place_symbol(a, word, cm);
    let (x, y) = symbol_word_columns(*a, word, placement).unzip();
    Align::new(x, y, cost)
}

/// The structure collecting the columns of the alignment during the recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Accumulator {
    /// Append to a `Vec`, solving the left half first.
    #[default]
    Vec,
    /// Prepend to a `VecDeque`, solving the right half first.
    Deque,
}

/// Receives the columns found by the base cases.
trait Columns<T: Symbol> {
    /// Whether the right half must be solved before the left half.
    const REVERSED: bool;

    /// Add a run of columns, given from left to right.
    fn extend<I: DoubleEndedIterator<Item = (T, T)>>(&mut self, cols: I);

    fn into_rows(self) -> (Vec<T>, Vec<T>);
}

struct Appender<T> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Symbol> Columns<T> for Appender<T> {
    const REVERSED: bool = false;

    fn extend<I: DoubleEndedIterator<Item = (T, T)>>(&mut self, cols: I) {
        for (a, b) in cols {
            self.x.push(a);
            self.y.push(b);
        }
    }

    fn into_rows(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.y)
    }
}

struct Prepender<T> {
    x: VecDeque<T>,
    y: VecDeque<T>,
}

impl<T: Symbol> Columns<T> for Prepender<T> {
    const REVERSED: bool = true;

    fn extend<I: DoubleEndedIterator<Item = (T, T)>>(&mut self, cols: I) {
        for (a, b) in cols.rev() {
            self.x.push_front(a);
            self.y.push_front(b);
        }
    }

    fn into_rows(self) -> (Vec<T>, Vec<T>) {
        (self.x.into(), self.y.into())
    }
}

/// Align `x` to `y`, sending the columns to `out`. Returns the cost.
fn align_rec<M: MetricSpace, A: Columns<M::Item>>(
    x: &[M::Item],
    y: &[M::Item],
    cm: &M,
    out: &mut A,
) -> M::Cost {
    let (n, m) = (x.len(), y.len());
    if n == 0 {
        trace!("Base case: insert {m}");
        out.extend(y.iter().map(|b| (M::Item::GAP, *b)));
        return cm.ins().repeat(m);
    }
    if m == 0 {
        trace!("Base case: delete {n}");
        out.extend(x.iter().map(|a| (*a, M::Item::GAP)));
        return cm.del().repeat(n);
    }
    if n == 1 {
        trace!("Base case: symbol against word of length {m}");
        let (placement, cost) = place_symbol(&x[0], y, cm);
        out.extend(symbol_word_columns(x[0], y, placement));
        return cost;
    }

    let (i, j, cost) = cut_with_cost(x, y, cm);
    debug!("Cut {n}x{m} at ({i}, {j}) with cost {cost}");
    let (x1, x2) = x.split_at(i);
    let (y1, y2) = y.split_at(j);
    let (c1, c2) = if A::REVERSED {
        let c2 = align_rec(x2, y2, cm, out);
        (align_rec(x1, y1, cm, out), c2)
    } else {
        let c1 = align_rec(x1, y1, cm, out);
        (c1, align_rec(x2, y2, cm, out))
    };
    debug_assert_eq!(c1.combine(c2), cost);
    c1.combine(c2)
}

fn align_with<M: MetricSpace, A: Columns<M::Item>>(
    x: &[M::Item],
    y: &[M::Item],
    cm: &M,
    mut out: A,
) -> AlignOf<M> {
    let cost = align_rec(x, y, cm, &mut out);
    let (ax, ay) = out.into_rows();
    Align::new(ax, ay, cost)
}

/// An optimal alignment of `x` and `y` in `O(n + m)` memory.
/// It is the same alignment as `align_quadratic` returns.
pub fn align_linear_space<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> AlignOf<M> {
    let len = x.len() + y.len();
    align_with(
        x,
        y,
        cm,
        Appender {
            x: Vec::with_capacity(len),
            y: Vec::with_capacity(len),
        },
    )
}

/// Same as `align_linear_space`, but builds the alignment from right to left
/// by prepending to a deque. The result is identical.
pub fn align_linear_space_deque<M: MetricSpace>(x: &[M::Item], y: &[M::Item], cm: &M) -> AlignOf<M> {
    let len = x.len() + y.len();
    align_with(
        x,
        y,
        cm,
        Prepender {
            x: VecDeque::with_capacity(len),
            y: VecDeque::with_capacity(len),
        },
    )
}

/// Linear memory aligner.
#[derive(Debug, Clone)]
pub struct Hirschberg<M> {
    pub cm: M,
    pub accumulator: Accumulator,
}

impl<M: MetricSpace> Hirschberg<M> {
    pub fn new(cm: M, accumulator: Accumulator) -> Self {
        Hirschberg { cm, accumulator }
    }
}

impl<M: MetricSpace + std::fmt::Debug> Aligner for Hirschberg<M> {
    type Metric = M;

    fn cost_model(&self) -> &M {
        &self.cm
    }

    fn cost(&mut self, x: &[M::Item], y: &[M::Item]) -> M::Cost {
        distance_linear_space(x, y, &self.cm)
    }

    fn align(&mut self, x: &[M::Item], y: &[M::Item]) -> (M::Cost, Option<AlignOf<M>>) {
        let align = match self.accumulator {
            Accumulator::Vec => align_linear_space(x, y, &self.cm),
            Accumulator::Deque => align_linear_space_deque(x, y, &self.cm),
        };
        (align.cost, Some(align))
    }
}
