use crate::error::{PickerError, Result};
use chrono::{NaiveTime, Timelike};

pub const MIN_TIME_STEP_MINUTES: u32 = 1;
pub const MAX_TIME_STEP_MINUTES: u32 = 60;

const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| PickerError::config(format!("{hour:02}:{minute:02} is not a valid time")))
}

/// Parse `HH:MM` or `HH:MM:SS`. `field_name` only shows up in the error.
pub fn parse_time_of_day(text: &str, field_name: &str) -> Result<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .map_err(|_| PickerError::config(format!("{field_name} is not a valid time: {text:?}")))
}

pub fn format_time_of_day(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

/// Options offered by the time selector's completer, e.g. `["00:00", "00:15", ...]`.
///
/// Steps outside `[1, 60]` are clamped rather than rejected.
pub fn generate_time_options(step_minutes: u32) -> Vec<String> {
    let step = step_minutes.clamp(MIN_TIME_STEP_MINUTES, MAX_TIME_STEP_MINUTES);
    (0..MINUTES_PER_DAY)
        .step_by(step as usize)
        .map(|minutes| format!("{:02}:{:02}", minutes / 60, minutes % 60))
        .collect()
}
