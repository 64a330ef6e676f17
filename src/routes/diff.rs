// Two-way difference between pre and post routing entries

use super::RoutingEntry;
use serde::Serialize;
use std::collections::HashMap;

/// Entries present on one side only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub only_in_pre: Vec<RoutingEntry>,
    pub only_in_post: Vec<RoutingEntry>,
}

impl ComparisonResult {
    pub fn is_empty(&self) -> bool {
        self.only_in_pre.is_empty() && self.only_in_post.is_empty()
    }
}

/// Compare two snapshots. Entries match only when every field is equal,
/// including the order and length of the next-hop lists.
pub fn diff(pre: &[RoutingEntry], post: &[RoutingEntry]) -> ComparisonResult {
    ComparisonResult {
        only_in_pre: missing_from(pre, post),
        only_in_post: missing_from(post, pre),
    }
}

/// Entries of `side`, in order, with no equal entry in `other`.
fn missing_from(side: &[RoutingEntry], other: &[RoutingEntry]) -> Vec<RoutingEntry> {
    let mut index: HashMap<(&str, &str), Vec<&RoutingEntry>> = HashMap::new();
    for entry in other {
        index.entry(entry.key()).or_default().push(entry);
    }

    side.iter()
        .filter(|entry| {
            !index
                .get(&entry.key())
                .is_some_and(|candidates| candidates.iter().any(|c| *c == *entry))
        })
        .cloned()
        .collect()
}
