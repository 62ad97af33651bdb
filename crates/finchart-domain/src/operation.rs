//! Domain model for financial operations feeding the chart pipeline.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::display::GroupByDimension;

/// A single financial operation, denormalized the way the query layer
/// delivers it: article names are carried on the record so grouping does
/// not need to resolve identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    pub id: Uuid,
    pub date: NaiveDate,
    pub value: f64,
    pub op_type: OperationType,
    pub article_id: Uuid,
    pub article_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_article_name: Option<String>,
    pub account_id: Uuid,
    pub owner_id: Uuid,
    pub currency_id: Uuid,
}

impl Operation {
    pub fn new(
        date: NaiveDate,
        value: f64,
        op_type: OperationType,
        article_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            value,
            op_type,
            article_id: Uuid::nil(),
            article_name: article_name.into(),
            parent_article_name: None,
            account_id: Uuid::nil(),
            owner_id: Uuid::nil(),
            currency_id: Uuid::nil(),
        }
    }

    pub fn with_parent_article(mut self, name: impl Into<String>) -> Self {
        self.parent_article_name = Some(name.into());
        self
    }

    pub fn with_article_id(mut self, id: Uuid) -> Self {
        self.article_id = id;
        self
    }

    pub fn with_account_id(mut self, id: Uuid) -> Self {
        self.account_id = id;
        self
    }

    pub fn with_owner_id(mut self, id: Uuid) -> Self {
        self.owner_id = id;
        self
    }

    pub fn with_currency_id(mut self, id: Uuid) -> Self {
        self.currency_id = id;
        self
    }

    /// Magnitude of the operation; sign is carried by the type class.
    pub fn magnitude(&self) -> f64 {
        self.value.abs()
    }

    /// Label of the grouping dimension. Parentless articles group under
    /// their own name when the parent dimension is requested.
    pub fn category_label(&self, dimension: GroupByDimension) -> &str {
        match dimension {
            GroupByDimension::Article => &self.article_name,
            GroupByDimension::ArticleParent => self
                .parent_article_name
                .as_deref()
                .unwrap_or(&self.article_name),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the transaction type tags carried by operations.
pub enum OperationType {
    Expense,
    Income,
    TransferExpense,
    TransferIncome,
}

impl OperationType {
    pub fn is_income(self) -> bool {
        matches!(self, OperationType::Income | OperationType::TransferIncome)
    }

    pub fn is_expense(self) -> bool {
        matches!(
            self,
            OperationType::Expense | OperationType::TransferExpense
        )
    }

    pub fn is_transfer(self) -> bool {
        matches!(
            self,
            OperationType::TransferExpense | OperationType::TransferIncome
        )
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationType::Expense => "Expense",
            OperationType::Income => "Income",
            OperationType::TransferExpense => "Transfer Expense",
            OperationType::TransferIncome => "Transfer Income",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::GroupByDimension;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn type_classes_cover_transfers() {
        assert!(OperationType::Income.is_income());
        assert!(OperationType::TransferIncome.is_income());
        assert!(OperationType::Expense.is_expense());
        assert!(OperationType::TransferExpense.is_expense());
        assert!(!OperationType::Income.is_transfer());
        assert!(OperationType::TransferExpense.is_transfer());
    }

    #[test]
    fn parent_label_falls_back_to_article_name() {
        let orphan = Operation::new(date(2024, 5, 1), -12.0, OperationType::Expense, "Rent");
        assert_eq!(orphan.category_label(GroupByDimension::ArticleParent), "Rent");

        let child = Operation::new(date(2024, 5, 2), -7.5, OperationType::Expense, "Bread")
            .with_parent_article("Food");
        assert_eq!(child.category_label(GroupByDimension::Article), "Bread");
        assert_eq!(child.category_label(GroupByDimension::ArticleParent), "Food");
    }

    #[test]
    fn magnitude_strips_sign() {
        let op = Operation::new(date(2024, 1, 10), -250.0, OperationType::Expense, "Fuel");
        assert_eq!(op.magnitude(), 250.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let op = Operation::new(date(2024, 3, 8), 99.9, OperationType::Income, "Salary")
            .with_parent_article("Work");
        let json = serde_json::to_string(&op).unwrap();
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}
