use std::fmt::Debug;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;
use pa_linear_space::cli::{AlgorithmArg, Cli, CostModelArg};
use pa_linear_space::prelude::*;
use serde::Serialize;

/// The record printed with `--json`.
#[derive(Serialize)]
struct Output<'a> {
    args: &'a Cli,
    len_x: usize,
    len_y: usize,
    cost: Cost,
    /// The two rows of the alignment, when the algorithm gives one.
    alignment: Option<(String, String)>,
    seconds: f64,
}

fn run<M>(args: &Cli, block: &DnaBlock, cm: M) -> Result<()>
where
    M: MetricSpace<Item = Dna, Cost = Cost> + Debug + 'static,
{
    let (x, y) = (block.x(), block.y());
    if args.algorithm == AlgorithmArg::Naive {
        ensure!(
            x.len() <= NAIVE_MAX_LEN && y.len() <= NAIVE_MAX_LEN,
            "The naive algorithm only supports sequences of length at most {NAIVE_MAX_LEN}, got {} and {}.",
            x.len(),
            y.len()
        );
    }

    let mut aligner = args.algorithm.make_aligner(cm);
    info!("Aligning {}x{} with {aligner:?}", x.len(), y.len());
    let start = Instant::now();
    let (cost, align) = aligner.align(x, y);
    let seconds = start.elapsed().as_secs_f64();

    if args.json {
        let output = Output {
            args,
            len_x: x.len(),
            len_y: y.len(),
            cost,
            alignment: align
                .as_ref()
                .map(|a| (dna_to_string(&a.x), dna_to_string(&a.y))),
            seconds,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match align {
            Some(align) => println!("{align}"),
            None => println!("cost: {cost}"),
        }
        info!("Took {seconds:.6}s");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let block = args.input.block().context("Could not read the input")?;
    match args.cost_model {
        CostModelArg::Dna => run(&args, &block, DnaMetricSpace),
        CostModelArg::Unit => run(&args, &block, LinearCost::<Dna>::new_unit()),
        CostModelArg::Lcs => run(&args, &block, LinearCost::<Dna>::new_lcs()),
    }
}
