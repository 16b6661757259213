//! Types specific to DNA: the `Dna` alphabet, its reference cost model, and
//! `DnaBlock` problem instances.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::align::Symbol;
use crate::cost_model::{Cost, CostT, MetricSpace};
use crate::error::ParseError;

/// A DNA base, or a gap inside an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dna {
    A,
    C,
    G,
    T,
    Gap,
}

use Dna::*;

impl Dna {
    /// The four bases, without `Gap`.
    pub const BASES: [Dna; 4] = [A, C, G, T];

    /// Whether the two bases form a Watson-Crick pair.
    pub fn is_complement(self, other: Dna) -> bool {
        matches!((self, other), (A, T) | (T, A) | (C, G) | (G, C))
    }
}

impl Symbol for Dna {
    const GAP: Dna = Gap;

    fn to_char(&self) -> char {
        match self {
            A => 'A',
            C => 'C',
            G => 'G',
            T => 'T',
            Gap => '-',
        }
    }
}

impl TryFrom<char> for Dna {
    type Error = ParseError;

    /// Gaps are rejected: they never occur in input sequences.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(A),
            'C' => Ok(C),
            'G' => Ok(G),
            'T' => Ok(T),
            _ => Err(ParseError::InvalidSymbol(c)),
        }
    }
}

impl FromStr for Dna {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Dna::try_from(c),
            _ => Err(ParseError::NotASymbol(s.to_string())),
        }
    }
}

impl fmt::Display for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Parse a sequence written without separators, like `"GATTACA"`.
pub fn parse_dna(s: &str) -> Result<Vec<Dna>, ParseError> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(Dna::try_from)
        .collect()
}

pub fn dna_to_string(seq: &[Dna]) -> String {
    seq.iter().map(Symbol::to_char).collect()
}

/// The reference cost model for DNA.
///
/// - insertions and deletions cost 2,
/// - substituting a base by its complement (`A-T`, `G-C`) costs 3,
/// - any other substitution costs 4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DnaMetricSpace;

impl DnaMetricSpace {
    pub const INDEL: Cost = 2;
    pub const COMPLEMENT: Cost = 3;
    pub const MISMATCH: Cost = 4;
}

impl MetricSpace for DnaMetricSpace {
    type Item = Dna;
    type Cost = Cost;

    fn sub(&self, a: &Dna, b: &Dna) -> Cost {
        match (a, b) {
            (Gap, _) | (_, Gap) => Cost::INF,
            (a, b) if a == b => 0,
            (a, b) if a.is_complement(*b) => Self::COMPLEMENT,
            _ => Self::MISMATCH,
        }
    }

    fn ins(&self) -> Cost {
        Self::INDEL
    }

    fn del(&self) -> Cost {
        Self::INDEL
    }
}

/// A pair of DNA sequences to align.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct DnaBlock(pub Vec<Dna>, pub Vec<Dna>);

impl DnaBlock {
    pub fn x(&self) -> &[Dna] {
        &self.0
    }

    pub fn y(&self) -> &[Dna] {
        &self.1
    }
}

/// Parses the `.adn` instance format:
/// ```text
/// 10
/// 5
/// T A T A T G A G T C
/// T A T T T
/// ```
/// Empty lines are skipped.
impl FromStr for DnaBlock {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        let mut next_len = |which: &'static str| -> Result<usize, ParseError> {
            let line = lines.next().ok_or(ParseError::MissingLine(which))?;
            line.parse::<usize>()
                .map_err(|_| ParseError::InvalidLength(line.to_string()))
        };
        let n = next_len("first length")?;
        let m = next_len("second length")?;
        let mut next_seq = |which: &'static str, declared: usize| -> Result<Vec<Dna>, ParseError> {
            // An empty sequence has an empty (thus skipped) line.
            if declared == 0 {
                return Ok(vec![]);
            }
            let line = lines.next().ok_or(ParseError::MissingLine(which))?;
            let seq = line
                .split_whitespace()
                .map(str::parse::<Dna>)
                .collect::<Result<Vec<_>, _>>()?;
            if seq.len() != declared {
                return Err(ParseError::LengthMismatch {
                    which,
                    declared,
                    found: seq.len(),
                });
            }
            Ok(seq)
        };
        let x = next_seq("first sequence", n)?;
        let y = next_seq("second sequence", m)?;
        Ok(DnaBlock(x, y))
    }
}

impl fmt::Display for DnaBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.len())?;
        writeln!(f, "{}", self.1.len())?;
        for seq in [&self.0, &self.1] {
            for c in seq.iter() {
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
