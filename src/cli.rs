use std::fmt::Debug;
use std::path::PathBuf;

use clap::{value_parser, ArgGroup, Parser, ValueEnum};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::aligners::Aligner;
use crate::cost_model::MetricSpace;
use crate::dna::DnaBlock;
use crate::error::Error;
use crate::generate::setup_with_seed;
use crate::hirschberg::{Accumulator, Hirschberg};
use crate::io::InstanceSource;
use crate::naive::Naive;
use crate::nw::NW;

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, about)]
pub struct Cli {
    #[clap(flatten)]
    pub input: Input,

    /// The algorithm to run.
    #[arg(short, long, value_enum, default_value_t)]
    pub algorithm: AlgorithmArg,

    /// The cost model to align with.
    #[arg(short, long, value_enum, default_value_t)]
    pub cost_model: CostModelArg,

    /// Print a single JSON record instead of the alignment.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(next_help_heading = "Input", group = ArgGroup::new("inputmethod").required(true))]
pub struct Input {
    /// An .adn file with the pair of sequences to align.
    #[arg(short, long, value_parser = value_parser!(PathBuf), group = "inputmethod", display_order = 1)]
    pub input: Option<PathBuf>,

    /// Name of an instance in the $GENOME_DATA directory, e.g. Inst_0000010_44.adn.
    #[arg(long, group = "inputmethod", display_order = 2)]
    pub instance: Option<String>,

    /// Align the first instance of this size in the $GENOME_DATA directory.
    #[arg(short, long, group = "inputmethod", display_order = 3)]
    pub size: Option<usize>,

    /// Length of a generated sequence.
    #[arg(short = 'n', long, group = "inputmethod", display_order = 4)]
    pub length: Option<usize>,

    /// Error rate of the generated second sequence.
    #[arg(short, long, default_value_t = 0.1, display_order = 5)]
    pub error_rate: f32,

    /// Seed to initialize RNG for reproducability
    #[arg(long, display_order = 6)]
    pub seed: Option<u64>,
}

impl Input {
    /// Read or generate the pair of sequences to align.
    pub fn block(&self) -> Result<DnaBlock, Error> {
        if let Some(path) = &self.input {
            InstanceSource::load_path(path)
        } else if let Some(name) = &self.instance {
            InstanceSource::from_env()?.load(name)
        } else if let Some(size) = self.size {
            InstanceSource::from_env()?.load_of_size(size)
        } else if let Some(n) = self.length {
            let seed = self.seed.unwrap_or_else(|| {
                let seed = ChaCha8Rng::from_entropy().gen_range(0..u64::MAX);
                info!("Seed: {seed}");
                seed
            });
            Ok(setup_with_seed(n, self.error_rate, seed))
        } else {
            Err(Error::NoInput)
        }
    }
}

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmArg {
    /// Try all alignments. Cost only, for tiny inputs.
    Naive,
    /// Quadratic DP keeping two rows. Cost only.
    Dp,
    /// Quadratic DP with the full table and traceback.
    Nw,
    /// Divide & conquer in linear memory.
    #[default]
    Hirschberg,
    /// Divide & conquer in linear memory, collecting the alignment in a deque.
    HirschbergDeque,
}

impl AlgorithmArg {
    pub fn make_aligner<M: MetricSpace + Debug + 'static>(
        &self,
        cm: M,
    ) -> Box<dyn Aligner<Metric = M>> {
        match self {
            AlgorithmArg::Naive => Box::new(Naive { cm }),
            AlgorithmArg::Dp => Box::new(NW::new(cm, false)),
            AlgorithmArg::Nw => Box::new(NW::new(cm, true)),
            AlgorithmArg::Hirschberg => Box::new(Hirschberg::new(cm, Accumulator::Vec)),
            AlgorithmArg::HirschbergDeque => Box::new(Hirschberg::new(cm, Accumulator::Deque)),
        }
    }
}

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostModelArg {
    /// Indels 2, complements 3, other substitutions 4.
    #[default]
    Dna,
    /// Edit distance.
    Unit,
    /// Indels only.
    Lcs,
}
