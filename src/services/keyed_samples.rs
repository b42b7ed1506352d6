use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Deserialize;

use crate::domain::chart_error::ChartDataError;

/// What to do when two samples share a grouping key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`ChartDataError::DuplicateKey`].
    #[default]
    Strict,
    /// Keep the value seen last in input order.
    LastWriteWins,
}

/// Indexes `(key, value)` pairs by key, applying `policy` to repeated keys.
///
/// The result iterates in ascending key order whatever the input order was.
pub fn collect_unique<K, V, I>(
    entries: I,
    policy: DuplicatePolicy,
    key_label: impl Fn(&K) -> String,
) -> Result<BTreeMap<K, V>, ChartDataError>
where
    K: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let mut indexed = BTreeMap::new();
    for (key, value) in entries {
        match indexed.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Strict => {
                    return Err(ChartDataError::DuplicateKey {
                        key: key_label(slot.key()),
                    });
                }
                DuplicatePolicy::LastWriteWins => {
                    slot.insert(value);
                }
            },
        }
    }
    Ok(indexed)
}
