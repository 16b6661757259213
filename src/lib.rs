//! Exact global pairwise alignment under a generic cost model.
//!
//! - `naive`: exponential enumeration of all alignments, as a test oracle.
//! - `nw`: the quadratic DP, with the full table and traceback.
//! - `hirschberg`: divide & conquer giving the same alignment in linear memory.
//! - `limits`: the largest instance each algorithm aligns within a time budget.
//!
//! All algorithms take the cost model as an explicit `MetricSpace` argument.
pub mod align;
pub mod aligners;
pub mod cli;
pub mod config;
pub mod cost_model;
pub mod dna;
pub mod error;
pub mod generate;
pub mod hirschberg;
pub mod io;
pub mod limits;
pub mod naive;
pub mod nw;


pub mod prelude {
    pub use crate::align::{alignment_cost, gaps, strip_gaps, Align, AlignOf, Side, Symbol};
    pub use crate::aligners::Aligner;
    pub use crate::config::NAIVE_MAX_LEN;
    pub use crate::cost_model::{Cost, CostT, LinearCost, MetricSpace};
    pub use crate::dna::{dna_to_string, parse_dna, Dna, DnaBlock, DnaMetricSpace};
    pub use crate::error::{AlignError, Error, ParseError};
    pub use crate::hirschberg::{
        align_linear_space, align_linear_space_deque, align_symbol_word, cut, Accumulator,
        Hirschberg,
    };
    pub use crate::io::InstanceSource;
    pub use crate::naive::{distance_naive, Naive};
    pub use crate::nw::{
        align_quadratic, align_quadratic_with_table, distance_and_align, distance_dp,
        distance_linear_space, dp_table, DpTable, NW,
    };
}
