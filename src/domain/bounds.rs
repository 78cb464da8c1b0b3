use crate::domain::date_range::first_of_month;
use crate::error::{PickerError, Result};
use chrono::NaiveDate;

/// Inclusive window restricting selectable and navigable dates.
///
/// `None` on either side means unbounded in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionBounds {
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
}

impl SelectionBounds {
    pub fn new(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min_date, max_date) {
            if min > max {
                return Err(PickerError::InvalidBounds { min, max });
            }
        }
        Ok(Self { min_date, max_date })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min_date.is_none_or(|min| date >= min) && self.max_date.is_none_or(|max| date <= max)
    }

    /// Fail with `InvalidDate` when `date` is outside the window.
    pub fn ensure_contains(&self, date: NaiveDate, field_name: &str) -> Result<NaiveDate> {
        if let Some(min) = self.min_date.filter(|min| date < *min) {
            return Err(PickerError::date(format!(
                "{field_name} {date} must be on or after the configured min_date {min}"
            )));
        }
        if let Some(max) = self.max_date.filter(|max| date > *max) {
            return Err(PickerError::date(format!(
                "{field_name} {date} must be on or before the configured max_date {max}"
            )));
        }
        Ok(date)
    }

    /// Move `date` to the nearest bound if it falls outside.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        match (self.min_date, self.max_date) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }

    /// Same as [`clamp`](Self::clamp) at first-of-month resolution.
    pub fn clamp_month(&self, month: NaiveDate) -> NaiveDate {
        let target = first_of_month(month);
        if let Some(min_month) = self.min_date.map(first_of_month) {
            if target < min_month {
                return min_month;
            }
        }
        if let Some(max_month) = self.max_date.map(first_of_month) {
            if target > max_month {
                return max_month;
            }
        }
        target
    }
}
