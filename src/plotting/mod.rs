//! Graph emitters: turning prepared stats artifacts into plot-data
//! artifacts. Rendering pixels is somebody else's job; what we emit is the
//! fully-resolved data + axis description a plotting frontend consumes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::stats::{stats_path, DistStat};

/// Resolved plot content written as a JSON artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotData {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub xticks: Vec<f64>,
    /// One series value per experiment, in sweep order
    pub values: Vec<f64>,
    /// Confidence band half-width per experiment, when stddev stats exist
    pub stddev: Option<Vec<f64>>,
    pub metadata: HashMap<String, String>,
}

/// Line graph over a 1-D sweep, built from the mean (and, when present,
/// stddev) stats artifacts for one measure leaf.
pub struct SummaryLineGraph {
    pub stats_root: PathBuf,
    pub input_stem: String,
    pub output_fpath: PathBuf,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub xticks: Vec<f64>,
}

impl SummaryLineGraph {
    pub fn generate(&self) -> Result<PathBuf> {
        let mean_path = stats_path(&self.stats_root, &self.input_stem, DistStat::Mean);
        let (experiments, values) = read_stats_row(&mean_path)?;

        let stddev_path = stats_path(&self.stats_root, &self.input_stem, DistStat::Stddev);
        let stddev = if stddev_path.exists() {
            Some(read_stats_row(&stddev_path)?.1)
        } else {
            None
        };

        let mut metadata = HashMap::new();
        metadata.insert("experiments".to_string(), experiments.join(","));
        metadata.insert("input_stem".to_string(), self.input_stem.clone());

        let data = PlotData {
            title: self.title.clone(),
            xlabel: self.xlabel.clone(),
            ylabel: self.ylabel.clone(),
            xticks: self.xticks.clone(),
            values,
            stddev,
            metadata,
        };
        write_artifact(&self.output_fpath, &data)?;

        info!("summary line graph -> {}", self.output_fpath.display());
        Ok(self.output_fpath.clone())
    }
}

/// Heatmap artifact over a 2-D sweep, built from a matrix-shaped mean
/// stats file.
pub struct Heatmap {
    pub input_fpath: PathBuf,
    pub output_fpath: PathBuf,
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub xtick_labels: Vec<String>,
    pub ytick_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapData {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub xtick_labels: Vec<String>,
    pub ytick_labels: Vec<String>,
    /// Row-major matrix, one row per y tick
    pub values: Vec<Vec<f64>>,
}

impl Heatmap {
    pub fn generate(&self) -> Result<PathBuf> {
        if !self.input_fpath.exists() {
            return Err(Error::MissingStats(self.input_fpath.clone()));
        }
        let frame = crate::analysis::collate::read_frame(&self.input_fpath)?;

        let data = HeatmapData {
            title: self.title.clone(),
            xlabel: self.xlabel.clone(),
            ylabel: self.ylabel.clone(),
            xtick_labels: self.xtick_labels.clone(),
            ytick_labels: self.ytick_labels.clone(),
            values: frame.rows().to_vec(),
        };
        write_artifact(&self.output_fpath, &data)?;

        info!("heatmap -> {}", self.output_fpath.display());
        Ok(self.output_fpath.clone())
    }
}

/// Read a single-data-row stats CSV: header of experiment names plus one
/// row of values. A missing file surfaces as `MissingStats`, not a default.
fn read_stats_row(path: &Path) -> Result<(Vec<String>, Vec<f64>)> {
    if !path.exists() {
        return Err(Error::MissingStats(path.to_path_buf()));
    }
    let frame = crate::analysis::collate::read_frame(path)?;
    let row = frame.rows().first().ok_or_else(|| Error::CsvParse {
        path: path.to_path_buf(),
        line: 2,
        message: "stats file has no data row".to_string(),
    })?;
    Ok((frame.columns().to_vec(), row.clone()))
}

fn write_artifact<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))
}
