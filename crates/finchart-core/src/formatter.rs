//! Axis-label and value-format selection per display preferences.

use chrono::{Datelike, Duration, NaiveDate};

use finchart_domain::{DisplaySpec, Granularity};

use crate::grouper::{shift_month, shift_year};

/// How the rendering collaborator should print slice and bar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Absolute,
    Percent,
}

impl ValueFormat {
    pub fn for_display(display: &DisplaySpec) -> Self {
        if display.use_percent {
            ValueFormat::Percent
        } else {
            ValueFormat::Absolute
        }
    }
}

/// Formats bucket ordinals into axis labels, one variant per granularity.
#[derive(Debug, Clone)]
pub struct PeriodLabeler {
    start: NaiveDate,
    granularity: Granularity,
}

impl PeriodLabeler {
    pub fn new(start: NaiveDate, granularity: Granularity) -> Self {
        Self { start, granularity }
    }

    /// First date of the bucket at `ordinal`.
    pub fn period_start(&self, ordinal: usize) -> NaiveDate {
        let steps = ordinal as i32;
        match self.granularity {
            Granularity::Day => self.start + Duration::days(steps as i64),
            Granularity::Week => self.start + Duration::weeks(steps as i64),
            Granularity::Month => shift_month(self.start, steps),
            Granularity::Quarter => shift_month(self.start, steps * 3),
            Granularity::Year => shift_year(self.start, steps),
        }
    }

    pub fn label(&self, ordinal: usize) -> String {
        let date = self.period_start(ordinal);
        match self.granularity {
            Granularity::Day => date.to_string(),
            Granularity::Week => {
                let week = date.iso_week();
                format!("Week {} {}", week.week(), week.year())
            }
            Granularity::Month => date.format("%b %Y").to_string(),
            Granularity::Quarter => format!("Q{} {}", date.month0() / 3 + 1, date.year()),
            Granularity::Year => date.year().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn labels_follow_granularity() {
        let start = date(2024, 1, 1);
        assert_eq!(PeriodLabeler::new(start, Granularity::Day).label(14), "2024-01-15");
        assert_eq!(
            PeriodLabeler::new(start, Granularity::Week).label(11),
            "Week 12 2024"
        );
        assert_eq!(
            PeriodLabeler::new(start, Granularity::Month).label(1),
            "Feb 2024"
        );
        assert_eq!(
            PeriodLabeler::new(start, Granularity::Quarter).label(2),
            "Q3 2024"
        );
        assert_eq!(PeriodLabeler::new(start, Granularity::Year).label(1), "2025");
    }

    #[test]
    fn value_format_tracks_percent_flag() {
        let mut display = DisplaySpec::default();
        assert_eq!(ValueFormat::for_display(&display), ValueFormat::Absolute);
        display.use_percent = true;
        assert_eq!(ValueFormat::for_display(&display), ValueFormat::Percent);
    }
}
