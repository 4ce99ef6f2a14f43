//! Attribute-change model for hierarchical experiment configuration
//! documents. One `AttrChange` is one attribute write at an element path;
//! an `AttrChangeSet` is every edit needed for one experiment variant.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One atomic edit: set `attr` to `value` on the element selected by `path`.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttrChange {
    /// Element selector, e.g. `.//oracle_manager/entities_oracle`
    pub path: String,

    /// Attribute name on the selected element
    pub attr: String,

    /// New attribute value, already stringified
    pub value: String,
}

impl AttrChange {
    pub fn new(path: impl Into<String>, attr: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            attr: attr.into(),
            value: value.into(),
        }
    }
}

/// All attribute edits for a single experiment. Uniqueness is by full
/// (path, attr, value) triple; iteration order is stable so expansion
/// output never depends on hash ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrChangeSet {
    changes: BTreeSet<AttrChange>,
}

impl AttrChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, change: AttrChange) {
        self.changes.insert(change);
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn contains(&self, change: &AttrChange) -> bool {
        self.changes.contains(change)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttrChange> {
        self.changes.iter()
    }

    /// Union `other` into this set, used to overlay an independent axis
    /// (e.g. population size) onto a base set of changes.
    ///
    /// Two sources editing the same (path, attr) with different values is a
    /// conflict and is reported, not resolved by last-write-wins: silently
    /// picking one value would corrupt the experiment's configuration.
    /// Identical triples dedupe silently.
    pub fn combine(&mut self, other: &AttrChangeSet) -> Result<()> {
        for incoming in &other.changes {
            if let Some(existing) = self
                .changes
                .iter()
                .find(|c| c.path == incoming.path && c.attr == incoming.attr)
            {
                if existing.value != incoming.value {
                    return Err(Error::AttrConflict {
                        path: incoming.path.clone(),
                        attr: incoming.attr.clone(),
                        left: existing.value.clone(),
                        right: incoming.value.clone(),
                    });
                }
                continue;
            }
            self.changes.insert(incoming.clone());
        }
        Ok(())
    }
}

impl FromIterator<AttrChange> for AttrChangeSet {
    fn from_iter<I: IntoIterator<Item = AttrChange>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttrChangeSet {
    type Item = &'a AttrChange;
    type IntoIter = std::collections::btree_set::Iter<'a, AttrChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_unions_disjoint_sets() {
        let mut base: AttrChangeSet = [
            AttrChange::new(".//oracle_manager/entities_oracle", "caches", "true"),
            AttrChange::new(".//oracle_manager/entities_oracle", "blocks", "false"),
        ]
        .into_iter()
        .collect();

        let size: AttrChangeSet =
            [AttrChange::new(".//arena/distribute/entity", "quantity", "64")]
                .into_iter()
                .collect();

        base.combine(&size).unwrap();
        assert_eq!(base.len(), 3);
        assert!(base.contains(&AttrChange::new(
            ".//arena/distribute/entity",
            "quantity",
            "64"
        )));
    }

    #[test]
    fn combine_dedupes_identical_edit() {
        let mut a: AttrChangeSet = [AttrChange::new("X", "Y", "1")].into_iter().collect();
        let b = a.clone();
        a.combine(&b).unwrap();
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn combine_reports_conflicting_edit() {
        let mut a: AttrChangeSet = [AttrChange::new("X", "Y", "1")].into_iter().collect();
        let b: AttrChangeSet = [AttrChange::new("X", "Y", "2")].into_iter().collect();

        match a.combine(&b) {
            Err(Error::AttrConflict {
                path,
                attr,
                left,
                right,
            }) => {
                assert_eq!(path, "X");
                assert_eq!(attr, "Y");
                assert_eq!(left, "1");
                assert_eq!(right, "2");
            }
            other => panic!("expected AttrConflict, got {:?}", other),
        }
    }
}
