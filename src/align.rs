//! The `Align` result type, and small utilities to build and check alignments.
use std::fmt::{self, Debug, Display};

use crate::cost_model::{CostT, MetricSpace};

/// A member of an alphabet, extended with a `GAP` marker.
///
/// Input sequences never contain `GAP`; it only appears inside an `Align`.
pub trait Symbol: Copy + Eq + Debug {
    const GAP: Self;

    #[inline]
    fn is_gap(&self) -> bool {
        *self == Self::GAP
    }

    /// Single character used when printing.
    fn to_char(&self) -> char;
}

impl Symbol for u8 {
    const GAP: u8 = b'-';

    fn to_char(&self) -> char {
        *self as char
    }
}

impl Symbol for char {
    const GAP: char = '-';

    fn to_char(&self) -> char {
        *self
    }
}

/// Which of the two rows of an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The row of `x`.
    Left,
    /// The row of `y`.
    Right,
}

/// Two gapped sequences of equal length, and the cost of aligning them.
///
/// Removing the gaps from `x` and `y` gives back the two aligned sequences.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Align<T, C> {
    pub x: Vec<T>,
    pub y: Vec<T>,
    pub cost: C,
}

/// The alignment type produced for a cost model.
pub type AlignOf<M> = Align<<M as MetricSpace>::Item, <M as MetricSpace>::Cost>;

impl<T: Symbol, C: CostT> Align<T, C> {
    /// # Panics
    ///
    /// When the two rows differ in length.
    pub fn new(x: Vec<T>, y: Vec<T>, cost: C) -> Self {
        assert_eq!(x.len(), y.len(), "Rows of an alignment must have equal length.");
        Align { x, y, cost }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over the aligned pairs, from left to right.
    pub fn pairs(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn row(&self, side: Side) -> &[T] {
        match side {
            Side::Left => &self.x,
            Side::Right => &self.y,
        }
    }

    /// Whether this is an alignment of `x` and `y` at all, irrespective of its cost.
    pub fn is_alignment_of(&self, x: &[T], y: &[T]) -> bool {
        self.x.len() == self.y.len()
            && strip_gaps(self, Side::Left) == x
            && strip_gaps(self, Side::Right) == y
    }
}

/// A word of `n` gaps.
pub fn gaps<T: Symbol>(n: usize) -> Vec<T> {
    vec![T::GAP; n]
}

/// Remove all gaps from one row of the alignment, giving back the original sequence.
pub fn strip_gaps<T: Symbol, C>(align: &Align<T, C>, side: Side) -> Vec<T> {
    let row = match side {
        Side::Left => &align.x,
        Side::Right => &align.y,
    };
    row.iter().copied().filter(|c| !c.is_gap()).collect()
}

/// The cost of a single column of an alignment.
#[inline]
pub fn column_cost<M: MetricSpace>(cm: &M, a: &M::Item, b: &M::Item) -> M::Cost {
    match (a.is_gap(), b.is_gap()) {
        (true, true) => cm.gap(),
        (false, true) => cm.del(),
        (true, false) => cm.ins(),
        (false, false) => cm.sub(a, b),
    }
}

/// Recompute the cost of an alignment column by column, ignoring its `cost` field.
pub fn alignment_cost<M: MetricSpace>(align: &AlignOf<M>, cm: &M) -> M::Cost {
    align
        .x
        .iter()
        .zip(&align.y)
        .fold(M::ZERO_COST, |acc, (a, b)| {
            acc.combine(column_cost(cm, a, b))
        })
}

/// Prints the two rows above each other, with a middle line showing matches
/// (`|`), substitutions (`.`), and indels (` `).
impl<T: Symbol, C: Display> Display for Align<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x: String = self.x.iter().map(Symbol::to_char).collect();
        let mid: String = self
            .x
            .iter()
            .zip(&self.y)
            .map(|(a, b)| match (a.is_gap() || b.is_gap(), a == b) {
                (true, _) => ' ',
                (false, true) => '|',
                (false, false) => '.',
            })
            .collect();
        let y: String = self.y.iter().map(Symbol::to_char).collect();
        writeln!(f, "{x}")?;
        writeln!(f, "{mid}")?;
        writeln!(f, "{y}")?;
        write!(f, "cost: {}", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_model::LinearCost;

    fn align(x: &str, y: &str, cost: u32) -> Align<u8, u32> {
        Align::new(x.as_bytes().to_vec(), y.as_bytes().to_vec(), cost)
    }

    #[test]
    fn gaps_only() {
        let g = gaps::<u8>(5);
        assert_eq!(g.len(), 5);
        assert!(g.iter().all(Symbol::is_gap));
        assert!(gaps::<char>(0).is_empty());

        let a = Align::new(gaps::<u8>(3), b"ACG".to_vec(), 3u32);
        assert!(strip_gaps(&a, Side::Left).is_empty());
        assert_eq!(strip_gaps(&a, Side::Right), b"ACG");
    }

    #[test]
    fn strip() {
        let a = align("AC-GT-", "A-TG-A", 0);
        assert_eq!(strip_gaps(&a, Side::Left), b"ACGT");
        assert_eq!(strip_gaps(&a, Side::Right), b"ATGA");
        assert!(a.is_alignment_of(b"ACGT", b"ATGA"));
        assert!(!a.is_alignment_of(b"ACGT", b"ATG"));
    }

    #[test]
    fn cost_of_columns() {
        let cm = LinearCost::<u8>::new_linear_asymmetric(1, 2, 3);
        // match, del, ins, match, del, sub
        let a = align("AC-GTA", "A-TG-C", 0);
        assert_eq!(alignment_cost(&a, &cm), 0 + 3 + 2 + 0 + 3 + 1);
        // gap-gap columns use the gap cost.
        let a = align("A-", "A-", 0);
        assert_eq!(alignment_cost(&a, &cm), 0);
        assert_eq!(alignment_cost(&align("", "", 0), &cm), 0);
    }

    #[test]
    fn cost_of_forbidden_substitution() {
        let cm = LinearCost::<u8>::new_lcs();
        let a = align("AC", "AG", 0);
        assert_eq!(alignment_cost(&a, &cm), u32::INF);
    }

    #[test]
    fn display() {
        let a = align("GA-TC", "GTAT-", 3);
        assert_eq!(a.to_string(), "GA-TC\n|. | \nGTAT-\ncost: 3");
    }

    #[test]
    #[should_panic]
    fn unequal_rows() {
        align("AC", "A", 0);
    }
}
