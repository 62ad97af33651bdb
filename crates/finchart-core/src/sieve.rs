//! Type-based filtering of grouped operations.

use finchart_domain::OperationType;

use crate::grouper::GroupedOperations;

/// Restricts bucket contents to a set of operation types.
pub struct OperationSieve;

impl OperationSieve {
    /// Returns a new grouping with the same bucket set, each list reduced
    /// to operations whose type is in `types`. Bucket keys are never
    /// dropped, so an income series and an expense series derived from the
    /// same grouping stay axis-aligned.
    pub fn filter_by_types(
        grouped: &GroupedOperations,
        types: &[OperationType],
    ) -> GroupedOperations {
        grouped
            .iter()
            .map(|(bucket, operations)| {
                let kept = operations
                    .iter()
                    .filter(|operation| types.contains(&operation.op_type))
                    .cloned()
                    .collect();
                (*bucket, kept)
            })
            .collect()
    }
}
