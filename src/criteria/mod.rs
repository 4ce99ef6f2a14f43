//! Batch criteria: the expansion of a terse command-line sweep description
//! into one fully-specified attribute-change set per experiment, plus the
//! axis metadata downstream graphing needs.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::xml::AttrChangeSet;

pub mod factory;
pub mod parser;

#[cfg(test)]
mod tests;

pub use factory::build;
pub use parser::parse;

/// Ordered sequence of per-experiment change sets. Index 0..N-1; order
/// defines experiment naming and the x-axis ordering of summary graphs.
pub type ExpansionPlan = Vec<AttrChangeSet>;

/// Closed set of sweep categories: which kind of oracular information the
/// criteria string toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Entities,
    Tasking,
    /// No recognized category keyword in the criteria string. Not a parse
    /// error; the factory expands this to a single no-op experiment.
    Unrecognized,
}

impl Category {
    /// Ordered boolean feature flags swept for this category. The order is
    /// load-bearing: it fixes the enumeration order of the expansion.
    pub fn flags(&self) -> &'static [&'static str] {
        match self {
            Category::Entities => &["caches", "blocks"],
            Category::Tasking => &[],
            Category::Unrecognized => &[],
        }
    }

    /// Document root selector token, e.g. `entities_oracle`.
    pub fn oracle_name(&self) -> Option<&'static str> {
        match self {
            Category::Entities => Some("entities_oracle"),
            Category::Tasking => Some("tasking_oracle"),
            Category::Unrecognized => None,
        }
    }
}

/// Parsed form of a criteria string. `category` and `name` are set together
/// or both absent (`Unrecognized` / empty); `population` comes from an
/// optional `.Z<digits>` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaIntent {
    pub category: Category,
    pub name: String,
    pub population: Option<u32>,
}

/// Axis metadata a criteria family exposes to the graph emitter.
pub trait AxisMetadata {
    fn axis_label(&self) -> &'static str;
    fn axis_tick_positions(&self, names: Option<&[String]>) -> Result<Vec<f64>>;
    fn axis_tick_labels(&self, names: Option<&[String]>) -> Result<Vec<String>>;
}

/// Which performance-measure families apply to a criteria family.
pub trait MeasureApplicability {
    fn pm_query(&self, pm: &str) -> bool;
    fn exclude_baseline_experiment(&self) -> bool;
}

/// One concrete parameter sweep: the parsed intent, the original criteria
/// string for identification, and the lazily-computed expansion.
///
/// The expansion is computed at most once and cached; repeated access
/// returns the identical plan. `OnceCell` gives the single-writer,
/// many-reader guarantee should the instance ever be shared.
#[derive(Debug)]
pub struct BatchCriteria {
    cli_arg: String,
    intent: CriteriaIntent,
    population_changes: Option<AttrChangeSet>,
    plan: OnceCell<ExpansionPlan>,
}

impl BatchCriteria {
    pub(crate) fn new(
        cli_arg: String,
        intent: CriteriaIntent,
        population_changes: Option<AttrChangeSet>,
    ) -> Self {
        Self {
            cli_arg,
            intent,
            population_changes,
            plan: OnceCell::new(),
        }
    }

    /// The criteria string this sweep was built from.
    pub fn cli_arg(&self) -> &str {
        &self.cli_arg
    }

    pub fn intent(&self) -> &CriteriaIntent {
        &self.intent
    }

    /// The per-experiment attribute-change sets, one per experiment in
    /// sweep order. Computed on first call, cached thereafter.
    pub fn expansion(&self) -> Result<&ExpansionPlan> {
        self.plan
            .get_or_try_init(|| factory::expand(&self.intent, self.population_changes.as_ref()))
    }

    /// `exp0`, `exp1`, ... one per plan entry, in plan order.
    pub fn experiment_names(&self) -> Result<Vec<String>> {
        let plan = self.expansion()?;
        Ok((0..plan.len()).map(|i| format!("exp{}", i)).collect())
    }
}

impl AxisMetadata for BatchCriteria {
    fn axis_label(&self) -> &'static str {
        "Oracular Information Type"
    }

    fn axis_tick_positions(&self, names: Option<&[String]>) -> Result<Vec<f64>> {
        let n = match names {
            Some(names) => names.len(),
            None => self.experiment_names()?.len(),
        };
        Ok((0..n).map(|i| i as f64).collect())
    }

    /// Human-readable per-experiment labels are category-specific and are
    /// not defined for the oracle family; callers must supply their own
    /// formatting. Failing loudly here beats returning a guess.
    fn axis_tick_labels(&self, _names: Option<&[String]>) -> Result<Vec<String>> {
        Err(Error::TickLabelsUnsupported(self.cli_arg.clone()))
    }
}

impl MeasureApplicability for BatchCriteria {
    fn pm_query(&self, pm: &str) -> bool {
        ["raw"].contains(&pm)
    }

    fn exclude_baseline_experiment(&self) -> bool {
        false
    }
}
