use crate::domain::{
    DateRangeInput, MAX_TIME_STEP_MINUTES, MIN_TIME_STEP_MINUTES, PickerMode, SelectionBounds,
};
use crate::error::{PickerError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const WINDOW_MIN_WIDTH: u32 = 320;
pub const WINDOW_MIN_HEIGHT: u32 = 360;
pub const DEFAULT_TIME_STEP_MINUTES: u32 = 15;
/// Environment variable naming a JSON config file for the picker.
pub const CONFIG_ENV_VAR: &str = "RANGEPICKER_CONFIG";

/// Host-supplied configuration for a [`DateRangePicker`](crate::application::DateRangePicker).
///
/// Values usually come from outside the program (settings files, another
/// widget), so nothing here is trusted until [`validate`](Self::validate) has
/// run. `max_date` falls back to today so the picker never offers future
/// dates unless asked to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    pub width: u32,
    pub height: u32,
    /// Palette and layout tokens for the view layer. Passed through untouched.
    pub theme: serde_json::Value,
    pub initial_date: Option<NaiveDate>,
    /// Takes precedence over `initial_date` when both endpoints are set.
    pub initial_range: Option<DateRangeInput>,
    pub mode: PickerMode,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub time_step_minutes: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_MIN_WIDTH,
            height: WINDOW_MIN_HEIGHT,
            theme: serde_json::Value::Null,
            initial_date: None,
            initial_range: None,
            mode: PickerMode::Date,
            min_date: None,
            max_date: None,
            time_step_minutes: DEFAULT_TIME_STEP_MINUTES,
        }
    }
}

impl PickerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PickerError::config(format!("malformed picker config: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PickerError::config(format!("cannot read picker config {}: {e}", path.display()))
        })?;
        log::debug!("Loading picker config from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Load the file named by `RANGEPICKER_CONFIG`, or fall back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Check every field and fill in `max_date` from `today` when unset.
    pub fn validate(mut self, today: NaiveDate) -> Result<Self> {
        validate_dimension(self.width, "width", WINDOW_MIN_WIDTH, u32::MAX)?;
        validate_dimension(self.height, "height", WINDOW_MIN_HEIGHT, u32::MAX)?;
        validate_dimension(
            self.time_step_minutes,
            "time_step_minutes",
            MIN_TIME_STEP_MINUTES,
            MAX_TIME_STEP_MINUTES,
        )?;

        self.max_date = Some(self.max_date.unwrap_or(today));
        let bounds = self.bounds()?;

        if let Some(date) = self.initial_date {
            ensure_within(&bounds, date, "initial_date")?;
        }
        if let Some(range) = &self.initial_range {
            if let Some(start) = range.start_date() {
                ensure_within(&bounds, start, "initial_range.start_date")?;
            }
            if let Some(end) = range.end_date() {
                ensure_within(&bounds, end, "initial_range.end_date")?;
            }
        }

        Ok(self)
    }

    pub fn bounds(&self) -> Result<SelectionBounds> {
        SelectionBounds::new(self.min_date, self.max_date)
    }
}

fn validate_dimension(value: u32, field_name: &str, min: u32, max: u32) -> Result<u32> {
    if value < min || value > max {
        return Err(PickerError::config(format!(
            "{field_name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(value)
}

// Configuration problems surface as InvalidConfiguration even though the
// underlying check is the same one selection uses.
fn ensure_within(bounds: &SelectionBounds, date: NaiveDate, field_name: &str) -> Result<()> {
    bounds
        .ensure_contains(date, field_name)
        .map(|_| ())
        .map_err(|e| match e {
            PickerError::InvalidDate(message) => PickerError::InvalidConfiguration(message),
            other => other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::test_harness::{date, fixed_today};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_validate_and_cap_at_today() {
        let config = PickerConfig::default().validate(fixed_today()).unwrap();
        assert_eq!(config.max_date, Some(fixed_today()));
        assert_eq!(config.mode, PickerMode::Date);
        assert_eq!(config.time_step_minutes, 15);
    }

    #[test]
    fn enforces_minimum_dimensions_and_time_step() {
        let too_narrow = PickerConfig {
            width: WINDOW_MIN_WIDTH - 1,
            ..PickerConfig::default()
        };
        assert!(too_narrow.validate(fixed_today()).unwrap_err().is_invalid_configuration());

        let too_short = PickerConfig {
            height: WINDOW_MIN_HEIGHT - 1,
            ..PickerConfig::default()
        };
        assert!(too_short.validate(fixed_today()).is_err());

        for step in [0, 61] {
            let config = PickerConfig {
                time_step_minutes: step,
                ..PickerConfig::default()
            };
            assert!(config.validate(fixed_today()).is_err());
        }
    }

    #[test]
    fn rejects_min_after_max() {
        let config = PickerConfig {
            min_date: Some(date(2024, 2, 10)),
            max_date: Some(date(2024, 2, 5)),
            ..PickerConfig::default()
        };
        let err = config.validate(fixed_today()).unwrap_err();
        assert!(matches!(err, PickerError::InvalidBounds { .. }));
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn min_after_defaulted_max_is_rejected() {
        let config = PickerConfig {
            min_date: Some(date(2030, 1, 1)),
            ..PickerConfig::default()
        };
        assert!(config.validate(fixed_today()).is_err());
    }

    #[test]
    fn initial_selection_must_respect_bounds() {
        let base = PickerConfig {
            min_date: Some(date(2024, 1, 1)),
            max_date: Some(date(2024, 1, 10)),
            ..PickerConfig::default()
        };

        let early = PickerConfig {
            initial_date: Some(date(2023, 12, 31)),
            ..base.clone()
        };
        let err = early.validate(fixed_today()).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("initial_date"));

        let late = PickerConfig {
            initial_date: Some(date(2024, 1, 11)),
            ..base.clone()
        };
        assert!(late.validate(fixed_today()).is_err());

        let wide_range = PickerConfig {
            initial_range: Some(DateRangeInput::between(date(2023, 12, 29), date(2024, 1, 11))),
            ..base
        };
        assert!(wide_range.validate(fixed_today()).is_err());
    }

    #[test]
    fn open_initial_ranges_are_checked_on_their_present_side() {
        let open_start = PickerConfig {
            min_date: Some(date(2024, 5, 1)),
            max_date: Some(date(2024, 5, 20)),
            initial_range: Some(DateRangeInput::new(None, Some(date(2024, 5, 18)))),
            ..PickerConfig::default()
        };
        let config = open_start.validate(fixed_today()).unwrap();
        assert_eq!(
            config.initial_range.as_ref().and_then(|r| r.end_date()),
            Some(date(2024, 5, 18))
        );

        let open_end = PickerConfig {
            min_date: Some(date(2024, 6, 1)),
            max_date: Some(date(2024, 6, 30)),
            initial_range: Some(DateRangeInput::new(Some(date(2024, 6, 2)), None)),
            ..PickerConfig::default()
        };
        assert!(open_end.validate(fixed_today()).is_ok());
    }

    #[test]
    fn parses_json_documents() {
        let config = PickerConfig::from_json_str(
            r##"{
                "width": 400,
                "mode": "CUSTOM_RANGE",
                "min_date": "2024-01-01",
                "initial_range": {"start_date": "2024-03-09", "end_date": "2024-03-01"},
                "theme": {"accent": "#2962ff"}
            }"##,
        )
        .unwrap();

        assert_eq!(config.width, 400);
        assert_eq!(config.height, WINDOW_MIN_HEIGHT);
        assert_eq!(config.mode, PickerMode::CustomRange);
        assert_eq!(config.theme["accent"], "#2962ff");
        let range = config.initial_range.unwrap();
        assert_eq!(range.start_date(), Some(date(2024, 3, 1)));
        assert_eq!(range.end_date(), Some(date(2024, 3, 9)));
    }

    #[test]
    fn malformed_documents_are_configuration_errors() {
        for json in [
            r#"{"mode": "WEEK"}"#,
            r#"{"width": "wide"}"#,
            r#"{"initial_date": "2024-02-30"}"#,
            r#"{"initial_range": "2024-01-01"}"#,
            r#"{"colour": "red"}"#,
        ] {
            let err = PickerConfig::from_json_str(json).unwrap_err();
            assert!(err.is_invalid_configuration(), "{json} should be rejected");
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{"time_step_minutes": 30, "max_date": "2024-12-31"}}"#).unwrap();

        let config = PickerConfig::from_path(file.path()).unwrap();

        assert_eq!(config.time_step_minutes, 30);
        assert_eq!(config.max_date, Some(date(2024, 12, 31)));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PickerConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
