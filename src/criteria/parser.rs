//! Parser for the command-line criteria string, e.g. `oracle.entities.Z64`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Category, CriteriaIntent};

static POPULATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.Z([0-9]+)").unwrap());

/// Parse a criteria string into a structured intent.
///
/// Category is decided by keyword scan, first match wins; a string with no
/// recognized keyword parses to `Category::Unrecognized` rather than
/// erroring, and the factory's degenerate single-experiment expansion is
/// the documented consequence. The optional `.Z<digits>` population suffix
/// is parsed separately; a suffix that does not match the pattern is
/// treated as absent.
///
/// Pure function: no I/O, deterministic.
pub fn parse(criteria_str: &str) -> CriteriaIntent {
    let category = if criteria_str.contains("entities") {
        Category::Entities
    } else if criteria_str.contains("tasking") {
        Category::Tasking
    } else {
        Category::Unrecognized
    };

    let population = POPULATION_RE
        .captures(criteria_str)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    CriteriaIntent {
        category,
        name: category.oracle_name().unwrap_or_default().to_string(),
        population,
    }
}
