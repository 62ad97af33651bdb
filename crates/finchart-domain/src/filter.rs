//! Filter window describing the operation set fed to the pipeline.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable filter parameters. The query collaborator applies these
/// predicates before operations reach the pipeline; the pipeline itself
/// only reads the date range and trusts `start_date <= end_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
}

impl FilterSpec {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            min_value: None,
            max_value: None,
            owner_id: None,
            currency_id: None,
            article_id: None,
            account_id: None,
        }
    }

    /// Filter spanning the calendar month containing `reference`.
    pub fn month_of(reference: NaiveDate) -> Self {
        let start = reference.with_day(1).unwrap_or(reference);
        Self::new(start, last_day_of_month(reference))
    }

    pub fn with_value_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_currency(mut self, currency_id: Uuid) -> Self {
        self.currency_id = Some(currency_id);
        self
    }

    pub fn with_article(mut self, article_id: Uuid) -> Self {
        self.article_id = Some(article_id);
        self
    }

    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::month_of(Utc::now().date_naive())
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_of_spans_whole_month() {
        let filter = FilterSpec::month_of(date(2024, 2, 14));
        assert_eq!(filter.start_date, date(2024, 2, 1));
        assert_eq!(filter.end_date, date(2024, 2, 29));

        let december = FilterSpec::month_of(date(2023, 12, 31));
        assert_eq!(december.start_date, date(2023, 12, 1));
        assert_eq!(december.end_date, date(2023, 12, 31));
    }

    #[test]
    fn builders_set_optional_dimensions() {
        let owner = Uuid::new_v4();
        let filter = FilterSpec::new(date(2024, 1, 1), date(2024, 1, 31))
            .with_owner(owner)
            .with_value_range(Some(10.0), None);
        assert_eq!(filter.owner_id, Some(owner));
        assert_eq!(filter.min_value, Some(10.0));
        assert_eq!(filter.max_value, None);
        assert_eq!(filter.article_id, None);
    }
}
