//! Population-override capability: turning a swarm size into the attribute
//! edit that sets it, independent of which criteria category is in play.

use crate::xml::{AttrChange, AttrChangeSet};

/// Capability consumed by the criteria factory when a `.Z<digits>` override
/// is present. Produces the change set that pins swarm population to `size`.
pub trait PopulationSource {
    fn changes_for(&self, size: u32) -> AttrChangeSet;
}

/// Swarm size via the ARGoS entity distributor: exactly one edit to the
/// `quantity` attribute of the arena's robot distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgosPopulation;

impl PopulationSource for ArgosPopulation {
    fn changes_for(&self, size: u32) -> AttrChangeSet {
        [AttrChange::new(
            ".//arena/distribute/entity",
            "quantity",
            size.to_string(),
        )]
        .into_iter()
        .collect()
    }
}
