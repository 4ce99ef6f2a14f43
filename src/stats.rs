//! Distribution preparer: summary statistics across the per-simulation
//! columns of each experiment's steady-state row, written as intermediate
//! stats artifacts for the graph emitters.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::CollatedFrame;
use crate::error::{Error, Result};

/// One summary statistic over an experiment's steady-state values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistStat {
    Mean,
    Stddev,
    Min,
    Max,
}

impl DistStat {
    /// File extension of the stats artifact carrying this statistic. The
    /// mean is the primary artifact and keeps the plain `.csv` extension.
    pub fn ext(&self) -> &'static str {
        match self {
            DistStat::Mean => ".csv",
            DistStat::Stddev => ".stddev",
            DistStat::Min => ".min",
            DistStat::Max => ".max",
        }
    }

    fn compute(&self, values: &[f64]) -> f64 {
        match self {
            DistStat::Mean => mean(values),
            DistStat::Stddev => {
                let m = mean(values);
                let var =
                    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
                var.sqrt()
            }
            DistStat::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            DistStat::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Path of the stats artifact for `leaf` and `stat` under the stats root.
pub fn stats_path(stats_root: &Path, leaf: &str, stat: DistStat) -> PathBuf {
    stats_root.join(format!("{}{}", leaf, stat.ext()))
}

/// Write one stats CSV per requested statistic: header = experiment names
/// in plan order, a single data row of per-experiment statistics. Existing
/// artifacts for the same leaf are overwritten (idempotent).
pub fn prepare(
    stats_root: &Path,
    leaf: &str,
    experiments: &[String],
    reduced: &HashMap<String, CollatedFrame>,
    stats: &[DistStat],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(stats_root).map_err(|e| Error::io(stats_root, e))?;

    let mut written = Vec::with_capacity(stats.len());
    for &stat in stats {
        let mut content = String::new();
        writeln!(content, "{}", experiments.join(",")).unwrap();

        let mut row = Vec::with_capacity(experiments.len());
        for exp in experiments {
            let frame = reduced.get(exp).ok_or_else(|| Error::MissingExperiment {
                experiment: exp.clone(),
                path: stats_root.to_path_buf(),
            })?;
            row.push(stat.compute(&frame.rows()[0]).to_string());
        }
        writeln!(content, "{}", row.join(",")).unwrap();

        let path = stats_path(stats_root, leaf, stat);
        fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
        written.push(path);
    }

    debug!(
        "prepared {} stats artifacts for '{}' under {}",
        written.len(),
        leaf,
        stats_root.display()
    );
    Ok(written)
}
