//! Size limits: the largest instance each algorithm aligns within a time budget.
//!
//! Instances are taken in increasing size from an [`InstanceSource`], and the
//! sweep stops at the first one that takes longer than the budget.
use std::fmt::Debug;
use std::time::{Duration, Instant};

use log::{info, warn};
use serde::Serialize;

use crate::cli::AlgorithmArg;
use crate::config::NAIVE_MAX_LEN;
use crate::cost_model::{Cost, MetricSpace};
use crate::dna::{Dna, DnaBlock};
use crate::error::Error;
use crate::io::InstanceSource;

/// Wall time of a single call.
pub fn lapse(f: impl FnOnce()) -> Duration {
    let start = Instant::now();
    f();
    start.elapsed()
}

/// Runs `f` on each instance in turn, until one takes `budget` or more.
/// Returns the largest size solved within the budget, or 0 when there is none.
///
/// A size without any instance ends the sweep. Other errors are returned.
pub fn size_limit<I, F>(instances: I, budget: Duration, mut f: F) -> Result<usize, Error>
where
    I: IntoIterator<Item = Result<(usize, DnaBlock), Error>>,
    F: FnMut(&DnaBlock),
{
    let mut limit = 0;
    for instance in instances {
        let (size, block) = match instance {
            Ok(instance) => instance,
            Err(Error::NoInstanceOfSize(size)) => {
                warn!("No instance of size {size}, stopping");
                break;
            }
            Err(e) => return Err(e),
        };
        let time = lapse(|| f(&block));
        info!("Completed size {size} in {:.6}s", time.as_secs_f64());
        if time >= budget {
            break;
        }
        limit = size;
    }
    Ok(limit)
}

/// Whether the algorithm accepts the instance at all.
pub fn supports(algorithm: AlgorithmArg, block: &DnaBlock) -> bool {
    algorithm != AlgorithmArg::Naive
        || (block.x().len() <= NAIVE_MAX_LEN && block.y().len() <= NAIVE_MAX_LEN)
}

/// The size limit of one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Limit {
    pub algorithm: AlgorithmArg,
    pub size: usize,
}

/// The size limit of `algorithm` on the instances of `source`, one per size.
/// The sweep also ends at the first instance the algorithm does not support.
pub fn algorithm_limit<M>(
    algorithm: AlgorithmArg,
    cm: M,
    source: &InstanceSource,
    budget: Duration,
) -> Result<Limit, Error>
where
    M: MetricSpace<Item = Dna, Cost = Cost> + Debug + 'static,
{
    let mut aligner = algorithm.make_aligner(cm);
    let instances = source.by_size().take_while(|instance| {
        instance
            .as_ref()
            .map_or(true, |(_, block)| supports(algorithm, block))
    });
    let size = size_limit(instances, budget, |block| {
        aligner.align(block.x(), block.y());
    })?;
    info!("The limit of {algorithm:?} is {size}");
    Ok(Limit { algorithm, size })
}
