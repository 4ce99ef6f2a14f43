//! Raw swarm performance at steady state, across a univariate batch:
//! gather collated frames, reduce to steady state, prepare the
//! distribution, emit the summary line graph.

use std::path::PathBuf;

use log::info;

use crate::analysis::{self, collate};
use crate::config::SweepConfig;
use crate::criteria::{AxisMetadata, BatchCriteria, MeasureApplicability};
use crate::error::{Error, Result};
use crate::plotting::SummaryLineGraph;
use crate::stats;

/// Stem of every artifact this measure writes.
pub const LEAF: &str = "PM-ss-raw";

/// Raw steady-state performance measure over a 1-D sweep.
pub struct SteadyStateRaw<'a> {
    config: &'a SweepConfig,
}

impl<'a> SteadyStateRaw<'a> {
    pub fn new(config: &'a SweepConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline for one batch, returning the path of the
    /// emitted graph artifact.
    pub fn from_batch(&self, criteria: &BatchCriteria) -> Result<PathBuf> {
        if !criteria.pm_query("raw") {
            return Err(Error::MeasureNotApplicable {
                measure: "raw".to_string(),
                criteria: criteria.cli_arg().to_string(),
            });
        }

        info!("steady-state raw: from {}", self.config.collate_root.display());

        let names = criteria.experiment_names()?;
        let collated = collate::gather(&self.config.collate_root, &names, &self.config.perf_leaf)?;
        let reduced = analysis::steady_state(&collated)?;

        stats::prepare(
            &self.config.stats_root,
            LEAF,
            &names,
            &reduced,
            &self.config.dist_stats,
        )?;

        SummaryLineGraph {
            stats_root: self.config.stats_root.clone(),
            input_stem: LEAF.to_string(),
            output_fpath: self.config.graph_root.join(format!("{}.json", LEAF)),
            title: self.config.title.clone(),
            xlabel: criteria.axis_label().to_string(),
            ylabel: self.config.ylabel.clone(),
            xticks: criteria.axis_tick_positions(Some(&names))?,
        }
        .generate()
    }
}
