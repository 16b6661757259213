//! This module contains the `MetricSpace` trait describing a cost model, the
//! `CostT` trait for cost values, and the generic `LinearCost` model.
//!
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use num_traits::{PrimInt, Saturating, SaturatingMul, Unsigned};

use crate::align::Symbol;

/// Type for storing costs. Not u64 to save on memory.
pub type Cost = u32;

/// A value of a cost model.
///
/// `INF` is the largest value of the type and all arithmetic saturates, so an
/// infeasible transition can never become feasible again: `INF + c == INF`.
/// A sum of finite costs that overflows is reported as `INF` as well.
pub trait CostT:
    PrimInt + Unsigned + SaturatingMul + Hash + Debug + Display + Default + Send + Sync + 'static
{
    const ZERO: Self;
    const INF: Self;

    /// Add two costs. `INF` is absorbing.
    #[inline]
    fn combine(self, other: Self) -> Self {
        Saturating::saturating_add(self, other)
    }

    /// The cost of `n` consecutive steps of cost `self`.
    #[inline]
    fn repeat(self, n: usize) -> Self {
        match num_traits::cast::<usize, Self>(n) {
            Some(n) => self.saturating_mul(&n),
            None if self == Self::ZERO => Self::ZERO,
            None => Self::INF,
        }
    }

    #[inline]
    fn is_inf(self) -> bool {
        self == Self::INF
    }
}

macro_rules! impl_cost {
    ($($t:ty),*) => {
        $(
            impl CostT for $t {
                const ZERO: $t = 0;
                const INF: $t = <$t>::MAX;
            }
        )*
    };
}
impl_cost!(u8, u16, u32, u64, usize);

/// A cost model over an alphabet of `Item`s.
///
/// Algorithms take the model by reference, so it can carry runtime
/// parameters. All functions must be pure.
///
/// Note that insertions are when `y` has more characters than `x`, and
/// deletions are when `y` has less characters than `x`.
pub trait MetricSpace {
    type Item: Symbol;
    type Cost: CostT;

    /// Cost of a no-op.
    const ZERO_COST: Self::Cost = <Self::Cost as CostT>::ZERO;
    /// Cost of a forbidden transition.
    const INF_COST: Self::Cost = <Self::Cost as CostT>::INF;

    /// Cost of aligning `a` to `b`. `INF_COST` when this is not allowed.
    fn sub(&self, a: &Self::Item, b: &Self::Item) -> Self::Cost;
    /// Cost of a character of `y` aligned to a gap.
    fn ins(&self) -> Self::Cost;
    /// Cost of a character of `x` aligned to a gap.
    fn del(&self) -> Self::Cost;
    /// Cost of a gap aligned to a gap.
    fn gap(&self) -> Self::Cost {
        Self::ZERO_COST
    }
}

impl<M: MetricSpace> MetricSpace for &M {
    type Item = M::Item;
    type Cost = M::Cost;

    fn sub(&self, a: &Self::Item, b: &Self::Item) -> Self::Cost {
        (**self).sub(a, b)
    }
    fn ins(&self) -> Self::Cost {
        (**self).ins()
    }
    fn del(&self) -> Self::Cost {
        (**self).del()
    }
    fn gap(&self) -> Self::Cost {
        (**self).gap()
    }
}

/// Matches are free, mismatches cost `sub`, and indels cost `ins`/`del`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearCost<T, C = Cost> {
    /// The substitution cost. Or None when substitutions are not allowed.
    pub sub: Option<C>,
    /// The insertion cost.
    pub ins: C,
    /// The deletion cost.
    pub del: C,
    _item: PhantomData<fn() -> T>,
}

impl<T: Symbol, C: CostT> LinearCost<T, C> {
    pub fn new_linear_asymmetric(sub: C, ins: C, del: C) -> Self {
        LinearCost {
            sub: Some(sub),
            ins,
            del,
            _item: PhantomData,
        }
    }

    pub fn new_linear(sub: C, indel: C) -> Self {
        Self::new_linear_asymmetric(sub, indel, indel)
    }

    /// Levenshtein distance.
    pub fn new_unit() -> Self {
        Self::new_linear(C::one(), C::one())
    }

    /// Longest common subsequence: only indels are allowed.
    pub fn new_lcs() -> Self {
        LinearCost {
            sub: None,
            ins: C::one(),
            del: C::one(),
            _item: PhantomData,
        }
    }
}

impl<T: Symbol, C: CostT> MetricSpace for LinearCost<T, C> {
    type Item = T;
    type Cost = C;

    fn sub(&self, a: &T, b: &T) -> C {
        if a.is_gap() || b.is_gap() {
            C::INF
        } else if a == b {
            C::ZERO
        } else {
            self.sub.unwrap_or(C::INF)
        }
    }

    fn ins(&self) -> C {
        self.ins
    }

    fn del(&self) -> C {
        self.del
    }
}
