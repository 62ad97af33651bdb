//! Reduction of grouped operations to bar-chart entries.

use crate::grouper::GroupedOperations;

/// One bar-chart point: the bucket ordinal and the summed magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub bucket: usize,
    pub value: f64,
}

/// Converts grouped operations into chart-ready series.
pub struct SeriesConverter;

impl SeriesConverter {
    /// One entry per bucket, ascending by ordinal. Empty buckets produce an
    /// explicit zero point rather than an omission, so two series rendered
    /// side by side remain index-aligned.
    pub fn bar_entries(grouped: &GroupedOperations) -> Vec<BarEntry> {
        grouped
            .iter()
            .map(|(bucket, operations)| BarEntry {
                bucket: *bucket,
                value: operations.iter().map(|operation| operation.magnitude()).sum(),
            })
            .collect()
    }
}
