//! Collation-service boundary: reading per-experiment collated CSVs from
//! disk into [`CollatedFrame`]s keyed by experiment name.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::CollatedFrame;
use crate::error::{Error, Result};

/// Path of one experiment's collated CSV under the collation root.
pub fn frame_path(collate_root: &Path, experiment: &str, leaf: &str) -> PathBuf {
    collate_root.join(experiment).join(format!("{}.csv", leaf))
}

/// Load `<collate_root>/<exp>/<leaf>.csv` for every experiment name.
/// A missing file is an error naming the experiment; experiment names must
/// match the criteria's `experiment_names()` output exactly.
pub fn gather(
    collate_root: &Path,
    experiments: &[String],
    leaf: &str,
) -> Result<HashMap<String, CollatedFrame>> {
    let mut collated = HashMap::with_capacity(experiments.len());

    for exp in experiments {
        let path = frame_path(collate_root, exp, leaf);
        if !path.exists() {
            return Err(Error::MissingExperiment {
                experiment: exp.clone(),
                path,
            });
        }
        collated.insert(exp.clone(), read_frame(&path)?);
    }

    debug!(
        "gathered {} collated frames for leaf '{}' from {}",
        collated.len(),
        leaf,
        collate_root.display()
    );
    Ok(collated)
}

/// Parse one collated CSV: header row of column names, numeric body.
/// Ragged rows and non-numeric cells are parse errors naming file and line.
pub fn read_frame(path: &Path) -> Result<CollatedFrame> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut lines = contents.lines().enumerate();

    let (_, header) = lines.next().ok_or_else(|| Error::CsvParse {
        path: path.to_path_buf(),
        line: 1,
        message: "missing header row".to_string(),
    })?;
    let columns: Vec<String> = header.split(',').map(|c| c.trim().to_string()).collect();

    let mut frame = CollatedFrame::new(columns.clone());
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != columns.len() {
            return Err(Error::CsvParse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("expected {} cells, found {}", columns.len(), cells.len()),
            });
        }

        let mut row = Vec::with_capacity(cells.len());
        for cell in cells {
            let value = cell.trim().parse::<f64>().map_err(|e| Error::CsvParse {
                path: path.to_path_buf(),
                line: idx + 1,
                message: format!("'{}': {}", cell.trim(), e),
            })?;
            row.push(value);
        }
        frame.push_row(row);
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, exp: &str, leaf: &str, body: &str) {
        let exp_dir = dir.join(exp);
        fs::create_dir_all(&exp_dir).unwrap();
        let mut f = fs::File::create(exp_dir.join(format!("{}.csv", leaf))).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn gather_reads_every_experiment() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "exp0", "blocks-transported", "sim0,sim1\n1,2\n3,4\n");
        write_csv(dir.path(), "exp1", "blocks-transported", "sim0,sim1\n5,6\n");

        let names = vec!["exp0".to_string(), "exp1".to_string()];
        let collated = gather(dir.path(), &names, "blocks-transported").unwrap();

        assert_eq!(collated["exp0"].columns(), ["sim0", "sim1"]);
        assert_eq!(collated["exp0"].n_rows(), 2);
        assert_eq!(collated["exp1"].rows(), [vec![5.0, 6.0]]);
    }

    #[test]
    fn gather_reports_missing_experiment() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "exp0", "leaf", "a\n1\n");

        let names = vec!["exp0".to_string(), "exp1".to_string()];
        match gather(dir.path(), &names, "leaf") {
            Err(Error::MissingExperiment { experiment, .. }) => assert_eq!(experiment, "exp1"),
            other => panic!("expected MissingExperiment, got {:?}", other),
        }
    }

    #[test]
    fn ragged_row_is_a_parse_error_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "exp0", "leaf", "a,b\n1,2\n3\n");

        let path = frame_path(dir.path(), "exp0", "leaf");
        match read_frame(&path) {
            Err(Error::CsvParse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected CsvParse, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_cell_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "exp0", "leaf", "a\noops\n");

        let path = frame_path(dir.path(), "exp0", "leaf");
        assert!(matches!(read_frame(&path), Err(Error::CsvParse { .. })));
    }
}
