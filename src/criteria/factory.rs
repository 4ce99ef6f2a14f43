//! Combinatorial expansion: intent -> one attribute-change set per
//! experiment in the sweep.

use log::{debug, warn};

use super::{BatchCriteria, CriteriaIntent, ExpansionPlan};
use crate::error::Result;
use crate::population::PopulationSource;
use crate::xml::{AttrChange, AttrChangeSet};

/// Build a concrete [`BatchCriteria`] from a parsed intent. The population
/// override, when present, comes from the injected `population_source`
/// capability rather than being synthesized here.
pub fn build(
    criteria_str: &str,
    intent: CriteriaIntent,
    population_source: &dyn PopulationSource,
) -> BatchCriteria {
    if intent.category.flags().is_empty() {
        warn!(
            "criteria '{}' has no declared feature flags; expanding to a single no-op experiment",
            criteria_str
        );
    }

    let population_changes = intent
        .population
        .map(|size| population_source.changes_for(size));

    BatchCriteria::new(criteria_str.to_string(), intent, population_changes)
}

/// Enumerate the full `{false, true}^k` factorial over the category's flag
/// list, in lexicographic order with `false` before `true` (the first flag
/// varies slowest). Exactly `2^k` entries, order-stable across calls.
///
/// A category with no flags yields a single empty change set.
pub(super) fn expand(
    intent: &CriteriaIntent,
    population_changes: Option<&AttrChangeSet>,
) -> Result<ExpansionPlan> {
    let flags = intent.category.flags();
    let k = flags.len();

    let mut plan = ExpansionPlan::with_capacity(1 << k);
    for combo in 0..(1u32 << k) {
        let mut changes = AttrChangeSet::new();
        for (i, flag) in flags.iter().enumerate() {
            let enabled = (combo >> (k - 1 - i)) & 1 == 1;
            changes.add(AttrChange::new(
                format!(".//oracle_manager/{}", intent.name),
                *flag,
                enabled.to_string(),
            ));
        }
        plan.push(changes);
    }

    if let Some(pop) = population_changes {
        for changes in &mut plan {
            changes.combine(pop)?;
        }
    }

    debug!(
        "expanded {} flags into {} experiments (population override: {})",
        k,
        plan.len(),
        population_changes.is_some()
    );
    Ok(plan)
}
