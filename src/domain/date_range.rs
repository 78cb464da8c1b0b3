use crate::domain::time::{format_time_of_day, parse_time_of_day};
use crate::error::{PickerError, Result};
use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Number of cells in a calendar month grid (six weeks of seven days).
pub const MONTH_GRID_DAYS: usize = 42;

/// Build a calendar date, rejecting impossible year/month/day combinations.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PickerError::date(format!("{year:04}-{month:02}-{day:02} is not a calendar date")))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Return the pair ordered so that the first element is not after the second.
pub fn normalize_range(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    if start > end { (end, start) } else { (start, end) }
}

/// Dates shown in the calendar grid for `month`.
///
/// The grid always holds six full weeks and starts on the Monday on or before
/// the first of the month, so leading and trailing days of the neighbouring
/// months fill the gaps. Fails for the first and last months chrono can
/// represent, whose grids would spill past the calendar's range.
pub fn month_grid(month: NaiveDate) -> Result<Vec<NaiveDate>> {
    let first = first_of_month(month);
    let offset = u64::from(first.weekday().num_days_from_monday());
    let grid_start = first.checked_sub_days(Days::new(offset)).ok_or_else(|| {
        PickerError::date(format!("calendar grid for {} starts before the earliest date", first.format("%Y-%m")))
    })?;
    (0..MONTH_GRID_DAYS as u64)
        .map(|i| {
            grid_start.checked_add_days(Days::new(i)).ok_or_else(|| {
                PickerError::date(format!("calendar grid for {} runs past the latest date", first.format("%Y-%m")))
            })
        })
        .collect()
}

/// A date/time range handed to or from the host application.
///
/// Either side may be open. When both dates are present they are stored in
/// ascending order no matter how they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRangeInput {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
}

impl DateRangeInput {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        let (start_date, end_date) = match (start_date, end_date) {
            (Some(start), Some(end)) => {
                let (start, end) = normalize_range(start, end);
                (Some(start), Some(end))
            }
            other => other,
        };

        Self {
            start_date,
            end_date,
            start_time: None,
            end_time: None,
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn with_times(mut self, start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    pub fn is_open(&self) -> bool {
        self.start_date.is_none() || self.end_date.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawDateRange {
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

impl TryFrom<RawDateRange> for DateRangeInput {
    type Error = PickerError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        let start_time = raw
            .start_time
            .as_deref()
            .map(|text| parse_time_of_day(text, "start_time"))
            .transpose()?;
        let end_time = raw
            .end_time
            .as_deref()
            .map(|text| parse_time_of_day(text, "end_time"))
            .transpose()?;

        Ok(Self::new(raw.start_date, raw.end_date).with_times(start_time, end_time))
    }
}

impl From<DateRangeInput> for RawDateRange {
    fn from(range: DateRangeInput) -> Self {
        Self {
            start_date: range.start_date,
            end_date: range.end_date,
            start_time: range.start_time.map(format_time_of_day),
            end_time: range.end_time.map(format_time_of_day),
        }
    }
}
