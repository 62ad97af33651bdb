//! Aggregation of operations into category totals for pie slices.

use std::collections::BTreeMap;

use finchart_domain::{GroupByDimension, GroupingStrategy, Operation};

/// Fixed number of categories kept before the remainder collapses into
/// [`OTHER_LABEL`]. Not user-editable.
pub const CATEGORY_LIMIT: usize = 5;

/// Label reserved for the collapsed remainder slice.
pub const OTHER_LABEL: &str = "Other";

/// Summed magnitude for one dimension value.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub label: String,
    pub total: f64,
}

/// Groups operations by a categorical dimension into totals.
pub struct CategoryConverter;

impl CategoryConverter {
    /// Sums `|value|` per dimension label. `ShowAll` emits every distinct
    /// label sorted by name; `TopN` keeps the `limit` largest totals and
    /// folds the rest into a trailing "Other" entry, omitted when nothing
    /// was collapsed. Both strategies conserve the input total.
    pub fn aggregate(
        operations: &[Operation],
        dimension: GroupByDimension,
        strategy: GroupingStrategy,
        limit: usize,
    ) -> Vec<CategoryTotal> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for operation in operations {
            *totals.entry(operation.category_label(dimension)).or_insert(0.0) +=
                operation.magnitude();
        }
        let entries: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(label, total)| CategoryTotal {
                label: label.to_string(),
                total,
            })
            .collect();
        match strategy {
            GroupingStrategy::ShowAll => entries,
            GroupingStrategy::TopN => collapse_tail(entries, limit),
        }
    }
}

fn collapse_tail(mut entries: Vec<CategoryTotal>, limit: usize) -> Vec<CategoryTotal> {
    // Stable sort on top of the label-sorted input keeps equal totals in
    // deterministic name order.
    entries.sort_by(|a, b| b.total.total_cmp(&a.total));
    if entries.len() <= limit {
        return entries;
    }
    let tail = entries.split_off(limit);
    let remainder: f64 = tail.iter().map(|entry| entry.total).sum();
    entries.push(CategoryTotal {
        label: OTHER_LABEL.to_string(),
        total: remainder,
    });
    entries
}
