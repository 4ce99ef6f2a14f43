//! Sweep analysis configuration, loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::DistStat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Stem of the collated performance CSV, e.g. `blocks-transported`
    pub perf_leaf: String,

    /// Root directory of collated per-experiment CSVs
    pub collate_root: PathBuf,

    /// Where intermediate stats artifacts are written
    pub stats_root: PathBuf,

    /// Where graph artifacts are written
    pub graph_root: PathBuf,

    /// Which distribution statistics to prepare
    pub dist_stats: Vec<DistStat>,

    /// Graph title
    pub title: String,

    /// Graph y-axis label
    pub ylabel: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            perf_leaf: "blocks-transported".to_string(),
            collate_root: PathBuf::from("collated"),
            stats_root: PathBuf::from("stats"),
            graph_root: PathBuf::from("graphs"),
            dist_stats: vec![DistStat::Mean, DistStat::Stddev],
            title: "Swarm Performance".to_string(),
            ylabel: "Blocks Transported".to_string(),
        }
    }
}

impl SweepConfig {
    /// Load sweep configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save sweep configuration to a TOML file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| Error::io(path, e))
    }
}
