//! Display preferences controlling chart granularity and grouping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operation::OperationType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Calendar unit defining bucket boundaries on the bar chart axis.
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Day => "Day",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
            Granularity::Quarter => "Quarter",
            Granularity::Year => "Year",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Dimension used to slice operations for the pie chart.
pub enum GroupByDimension {
    Article,
    ArticleParent,
}

impl fmt::Display for GroupByDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupByDimension::Article => "Article",
            GroupByDimension::ArticleParent => "Article Parent",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Summarization policy for category slices.
pub enum GroupingStrategy {
    ShowAll,
    TopN,
}

impl fmt::Display for GroupingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupingStrategy::ShowAll => "Show All",
            GroupingStrategy::TopN => "Top N",
        };
        f.write_str(label)
    }
}

/// Immutable display preferences consumed by the pipeline. Callers replace
/// the whole value to change anything; partial mutation is not supported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySpec {
    pub granularity: Granularity,
    pub group_by: GroupByDimension,
    pub grouping: GroupingStrategy,
    pub show_income: bool,
    pub show_expense: bool,
    pub show_values: bool,
    pub use_percent: bool,
    pub include_transfers: bool,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self {
            granularity: Granularity::Month,
            group_by: GroupByDimension::Article,
            grouping: GroupingStrategy::TopN,
            show_income: true,
            show_expense: true,
            show_values: true,
            use_percent: false,
            include_transfers: false,
        }
    }
}

impl DisplaySpec {
    /// Income-class types selected by the current flags. Empty when the
    /// income series is hidden, so its buckets summarize to zero.
    pub fn income_types(&self) -> Vec<OperationType> {
        let mut types = Vec::new();
        if self.show_income {
            types.push(OperationType::Income);
            if self.include_transfers {
                types.push(OperationType::TransferIncome);
            }
        }
        types
    }

    pub fn expense_types(&self) -> Vec<OperationType> {
        let mut types = Vec::new();
        if self.show_expense {
            types.push(OperationType::Expense);
            if self.include_transfers {
                types.push(OperationType::TransferExpense);
            }
        }
        types
    }

    /// Whether switching to `other` changes bucket or slice contents, as
    /// opposed to touching only value-presentation flags.
    pub fn needs_regroup(&self, other: &DisplaySpec) -> bool {
        self.granularity != other.granularity
            || self.group_by != other.group_by
            || self.grouping != other.grouping
            || self.show_income != other.show_income
            || self.show_expense != other.show_expense
            || self.include_transfers != other.include_transfers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_types_follow_flags() {
        let mut display = DisplaySpec::default();
        assert_eq!(display.income_types(), vec![OperationType::Income]);

        display.include_transfers = true;
        assert_eq!(
            display.income_types(),
            vec![OperationType::Income, OperationType::TransferIncome]
        );

        display.show_income = false;
        assert!(display.income_types().is_empty());
    }

    #[test]
    fn value_flags_do_not_force_regroup() {
        let base = DisplaySpec::default();
        let mut tweaked = base.clone();
        tweaked.show_values = false;
        tweaked.use_percent = true;
        assert!(!base.needs_regroup(&tweaked));

        let mut regrouped = base.clone();
        regrouped.granularity = Granularity::Week;
        assert!(base.needs_regroup(&regrouped));
    }
}
