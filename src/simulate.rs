use crate::digest::Digester;
use crate::error::{Result, SimError};
use crate::key::generate_key;
use crate::table::ChainedTable;
use ordered_float::NotNan;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

pub type Average = NotNan<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundParams {
    pub rounds: usize,
    pub keys_per_round: usize,
}

impl RoundParams {
    pub fn new(rounds: usize, keys_per_round: usize) -> Result<Self> {
        let params = RoundParams {
            rounds,
            keys_per_round,
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        SimError::check_positive("rounds", self.rounds)?;
        SimError::check_positive("keys_per_round", self.keys_per_round)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Sequential,
    #[default]
    Parallel,
}

/// Collision counts of every round of one table configuration, in round
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    label: String,
    results: Vec<usize>,
}

impl SimulationReport {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the default label (the table size) with `label`.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        SimulationReport {
            label: label.into(),
            ..self
        }
    }

    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn average(&self) -> Option<Average> {
        if self.results.is_empty() {
            return None;
        }
        let sum: usize = self.results.iter().sum();
        NotNan::new(sum as f64 / self.results.len() as f64).ok()
    }

    pub fn min(&self) -> Option<usize> {
        self.results.iter().copied().min()
    }

    pub fn max(&self) -> Option<usize> {
        self.results.iter().copied().max()
    }
}

/// Runs `params.rounds` independent rounds against fresh tables of
/// `table_size` buckets.
///
/// One seed per round is drawn from `rng` up front, so the report depends
/// only on the state of `rng` and never on `mode`.
pub fn simulate<R: Rng + ?Sized>(
    table_size: usize,
    params: RoundParams,
    digester: &dyn Digester,
    rng: &mut R,
    mode: ExecutionMode,
) -> Result<SimulationReport> {
    SimError::check_positive("table_size", table_size)?;
    params.validate()?;

    let seeds: Vec<u64> = (0..params.rounds).map(|_| rng.gen()).collect();

    log::info!(
        "Simulating {} rounds of {} keys into {table_size} buckets ({mode:?})",
        params.rounds,
        params.keys_per_round,
    );
    let start = Instant::now();

    let run = |(round, &seed): (usize, &u64)| {
        run_round(round, seed, table_size, params.keys_per_round, digester)
    };
    let results: Vec<usize> = match mode {
        ExecutionMode::Sequential => seeds.iter().enumerate().map(run).collect::<Result<_>>()?,
        ExecutionMode::Parallel => seeds.par_iter().enumerate().map(run).collect::<Result<_>>()?,
    };

    let report = SimulationReport {
        label: table_size.to_string(),
        results,
    };
    log::info!(
        "Simulated {table_size} buckets in {:?}, average {} collisions",
        start.elapsed(),
        report.average().map_or(0.0, NotNan::into_inner),
    );
    Ok(report)
}

fn run_round(
    round: usize,
    seed: u64,
    table_size: usize,
    keys_per_round: usize,
    digester: &dyn Digester,
) -> Result<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = ChainedTable::new(table_size, digester)?;
    for _ in 0..keys_per_round {
        table.insert(generate_key(&mut rng));
    }

    let stats = table.stats();
    log::debug!(
        "round {round}: {} collisions, {} buckets occupied, longest chain {}",
        table.collisions(),
        stats.occupied,
        stats.longest_chain,
    );
    Ok(table.collisions())
}
