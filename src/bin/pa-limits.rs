use std::fmt::Debug;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use pa_linear_space::cli::{AlgorithmArg, CostModelArg};
use pa_linear_space::limits::{algorithm_limit, Limit};
use pa_linear_space::prelude::*;

/// Find the largest instance each algorithm aligns within a time budget.
#[derive(Parser, Debug)]
#[clap(author, about)]
struct Cli {
    /// Directory with the .adn instances. Defaults to $GENOME_DATA.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// The algorithms to measure, comma separated. All of them by default.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    algorithms: Vec<AlgorithmArg>,

    /// The cost model to align with.
    #[arg(short, long, value_enum, default_value_t)]
    cost_model: CostModelArg,

    /// Time budget for a single instance, in seconds.
    #[arg(short, long, default_value_t = 60.0)]
    budget: f64,

    /// Print the limits as JSON.
    #[arg(long)]
    json: bool,
}

fn limits<M>(args: &Cli, source: &InstanceSource, cm: M) -> Result<Vec<Limit>>
where
    M: MetricSpace<Item = Dna, Cost = Cost> + Clone + Debug + 'static,
{
    let budget = Duration::from_secs_f64(args.budget);
    let algorithms = if args.algorithms.is_empty() {
        AlgorithmArg::value_variants().to_vec()
    } else {
        args.algorithms.clone()
    };
    algorithms
        .into_iter()
        .map(|algorithm| {
            algorithm_limit(algorithm, cm.clone(), source, budget)
                .with_context(|| format!("Could not measure {algorithm:?}"))
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    ensure!(
        args.budget.is_finite() && args.budget > 0.,
        "The budget must be a positive number of seconds, got {}.",
        args.budget
    );

    let source = match &args.dir {
        Some(dir) => InstanceSource::new(dir),
        None => InstanceSource::from_env().context("No instance directory given")?,
    };
    let limits = match args.cost_model {
        CostModelArg::Dna => limits(&args, &source, DnaMetricSpace)?,
        CostModelArg::Unit => limits(&args, &source, LinearCost::<Dna>::new_unit())?,
        CostModelArg::Lcs => limits(&args, &source, LinearCost::<Dna>::new_lcs())?,
    };

    if args.json {
        println!("{}", serde_json::to_string(&limits)?);
    } else {
        for Limit { algorithm, size } in limits {
            println!("The limit of {algorithm:?} is {size}");
        }
    }
    Ok(())
}
