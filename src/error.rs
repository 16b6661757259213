//! Error types of the crate.
//!
//! The alignment algorithms themselves are total; errors only come from
//! parsing instances, reading them from disk, and reusing a DP table for the
//! wrong pair of sequences.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn text into symbols or instances.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid DNA symbol {0:?}, expected one of A, C, G, T")]
    InvalidSymbol(char),
    #[error("expected a single symbol, got {0:?}")]
    NotASymbol(String),
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("invalid sequence length {0:?}")]
    InvalidLength(String),
    #[error("{which} sequence declares {declared} symbols but contains {found}")]
    LengthMismatch {
        which: &'static str,
        declared: usize,
        found: usize,
    },
}

/// Misuse of an alignment entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// A precomputed table does not belong to the sequences being aligned.
    #[error("table has dimensions {found:?} but sequences need {expected:?}")]
    TableDimensions {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Errors of the instance source.
#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable {var} is not set")]
    MissingDataDir {
        var: &'static str,
        #[source]
        source: std::env::VarError,
    },
    #[error("cannot read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("no instance of size {0} found")]
    NoInstanceOfSize(usize),
    #[error("cannot infer instance size from file name {0:?}")]
    InvalidFileName(String),
    #[error("no input given")]
    NoInput,
}
