//! Collated time-series frames and the steady-state reduction kernel.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod collate;

/// One data frame per experiment: uniform columns, one row per recorded
/// timestep in time order. Opaque to the kernel beyond that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollatedFrame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl CollatedFrame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Row arity must match the column count.
    pub fn push_row(&mut self, row: Vec<f64>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row arity does not match column count"
        );
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reduce each experiment's frame to a single steady-state row: the value
/// at the last recorded timestep, per column ("steady state" by convention,
/// not by any convergence test). Column order and naming are preserved
/// exactly; experiments are reduced independently of one another.
///
/// An empty frame has no steady state and is an error naming the offending
/// experiment, never a silently-produced NaN row.
pub fn steady_state(
    collated: &HashMap<String, CollatedFrame>,
) -> Result<HashMap<String, CollatedFrame>> {
    let mut reduced = HashMap::with_capacity(collated.len());

    for (exp, frame) in collated {
        let last = frame.rows.last().ok_or_else(|| Error::EmptyFrame {
            experiment: exp.clone(),
        })?;

        let mut out = CollatedFrame::new(frame.columns.clone());
        out.push_row(last.clone());
        reduced.insert(exp.clone(), out);
    }

    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: &[&str], rows: &[&[f64]]) -> CollatedFrame {
        let mut f = CollatedFrame::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            f.push_row(row.to_vec());
        }
        f
    }

    #[test]
    fn reduction_takes_the_last_row_per_column() {
        let mut collated = HashMap::new();
        collated.insert(
            "exp0".to_string(),
            frame(&["A", "B"], &[&[1.0, 10.0], &[2.0, 20.0], &[3.0, 30.0]]),
        );

        let reduced = steady_state(&collated).unwrap();
        let out = &reduced["exp0"];
        assert_eq!(out.columns(), ["A", "B"]);
        assert_eq!(out.rows(), [vec![3.0, 30.0]]);
    }

    #[test]
    fn reduction_is_independent_per_experiment() {
        let mut collated = HashMap::new();
        collated.insert("exp0".to_string(), frame(&["A"], &[&[1.0], &[5.0]]));
        collated.insert("exp1".to_string(), frame(&["A"], &[&[7.0]]));

        let reduced = steady_state(&collated).unwrap();
        assert_eq!(reduced["exp0"].rows(), [vec![5.0]]);
        assert_eq!(reduced["exp1"].rows(), [vec![7.0]]);
    }

    #[test]
    fn empty_frame_is_an_error_naming_the_experiment() {
        let mut collated = HashMap::new();
        collated.insert("exp3".to_string(), frame(&["A"], &[]));

        match steady_state(&collated) {
            Err(Error::EmptyFrame { experiment }) => assert_eq!(experiment, "exp3"),
            other => panic!("expected EmptyFrame, got {:?}", other),
        }
    }
}
