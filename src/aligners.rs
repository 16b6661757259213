//! The `Aligner` trait implemented by all algorithms of this crate.

use crate::align::AlignOf;
use crate::cost_model::MetricSpace;

/// An aligner is a type that supports aligning sequences using some algorithm.
///
/// The output can be:
/// - cost only
/// - cost and alignment
///
/// The cost-only variant can sometimes be implemented using less memory.
///
/// Note that insertions are when `y` has more characters than `x`, and deletions are when `y` has less characters than `x`.
pub trait Aligner: std::fmt::Debug {
    type Metric: MetricSpace;

    /// Returns the cost model used by the aligner.
    fn cost_model(&self) -> &Self::Metric;

    /// Finds the cost of aligning `x` and `y`.
    fn cost(
        &mut self,
        x: &[<Self::Metric as MetricSpace>::Item],
        y: &[<Self::Metric as MetricSpace>::Item],
    ) -> <Self::Metric as MetricSpace>::Cost;

    /// Finds the cost of aligning `x` and `y`, and an optimal alignment when
    /// the aligner supports it.
    fn align(
        &mut self,
        x: &[<Self::Metric as MetricSpace>::Item],
        y: &[<Self::Metric as MetricSpace>::Item],
    ) -> (
        <Self::Metric as MetricSpace>::Cost,
        Option<AlignOf<Self::Metric>>,
    );
}
