//! Pipeline facade wiring grouping, sieving, and conversion together.

use tracing::debug;

use finchart_domain::{DisplaySpec, FilterSpec, Operation};

use crate::category::{CategoryConverter, CategoryTotal, CATEGORY_LIMIT};
use crate::formatter::{PeriodLabeler, ValueFormat};
use crate::grouper::OperationGrouper;
use crate::series::{BarEntry, SeriesConverter};
use crate::sieve::OperationSieve;

/// Income and expense bar series over the same bucket range. A hidden
/// class yields an all-zero series of the same length, so the two stay
/// index-aligned however they are rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub income: Vec<BarEntry>,
    pub expense: Vec<BarEntry>,
}

/// Complete result of one pipeline run.
#[derive(Debug, Clone)]
pub struct ChartOutput {
    pub bars: BarSeries,
    pub categories: Vec<CategoryTotal>,
    pub period_count: usize,
    pub operation_count: usize,
}

impl ChartOutput {
    /// Distinguishes the valid "no data" outcome from actual content;
    /// hosts render an empty state instead of treating it as a failure.
    pub fn has_data(&self) -> bool {
        self.operation_count > 0
    }
}

/// One immutable filter/display pair driving a full aggregation run.
/// Changing either spec means constructing a fresh pipeline.
#[derive(Debug, Clone)]
pub struct ChartPipeline {
    filter: FilterSpec,
    display: DisplaySpec,
}

impl ChartPipeline {
    pub fn new(filter: FilterSpec, display: DisplaySpec) -> Self {
        Self { filter, display }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn display(&self) -> &DisplaySpec {
        &self.display
    }

    pub fn period_count(&self) -> usize {
        OperationGrouper::period_count(
            self.filter.start_date,
            self.filter.end_date,
            self.display.granularity,
        )
    }

    /// Buckets once, then sieves and summarizes per type class.
    pub fn bar_series(&self, operations: &[Operation]) -> BarSeries {
        let grouped = OperationGrouper::group(
            operations,
            self.filter.start_date,
            self.filter.end_date,
            self.display.granularity,
        );
        let income = OperationSieve::filter_by_types(&grouped, &self.display.income_types());
        let expense = OperationSieve::filter_by_types(&grouped, &self.display.expense_types());
        BarSeries {
            income: SeriesConverter::bar_entries(&income),
            expense: SeriesConverter::bar_entries(&expense),
        }
    }

    pub fn category_slices(&self, operations: &[Operation]) -> Vec<CategoryTotal> {
        CategoryConverter::aggregate(
            operations,
            self.display.group_by,
            self.display.grouping,
            CATEGORY_LIMIT,
        )
    }

    pub fn labeler(&self) -> PeriodLabeler {
        PeriodLabeler::new(self.filter.start_date, self.display.granularity)
    }

    pub fn value_format(&self) -> ValueFormat {
        ValueFormat::for_display(&self.display)
    }

    pub fn run(&self, operations: &[Operation]) -> ChartOutput {
        debug!(
            "running chart pipeline over {} operations at {} granularity",
            operations.len(),
            self.display.granularity
        );
        ChartOutput {
            bars: self.bar_series(operations),
            categories: self.category_slices(operations),
            period_count: self.period_count(),
            operation_count: operations.len(),
        }
    }
}
