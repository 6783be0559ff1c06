use serde::{Deserialize, Serialize};

use crate::{CalendarKind, DEFAULT_YEAR_WINDOW, GREGORIAN_MONTHS, JALALI_MONTHS, Month};

/// How month options are labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLabels {
    /// Zero-padded month number, e.g. `07`
    Numeric,
    /// Full month name, e.g. `Mehr`
    #[default]
    Full,
    /// First three letters of the month name, e.g. `Meh`
    Short,
}

impl MonthLabels {
    /// Label for `month` in the given calendar.
    pub fn label(self, kind: CalendarKind, month: Month) -> String {
        let index = usize::from(month.get() - 1);
        let name = match kind {
            CalendarKind::Gregorian => GREGORIAN_MONTHS[index],
            CalendarKind::Jalali => JALALI_MONTHS[index],
        };
        match self {
            Self::Numeric => format!("{:02}", month.get()),
            Self::Full => name.to_owned(),
            Self::Short => name.chars().take(3).collect(),
        }
    }
}

/// Settings for a [`crate::DatePicker`].
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Number of years offered, counting back from the current year
    pub year_window:  u16,
    pub month_labels: MonthLabels,
    /// Calendar used when the caller doesn't pick one
    pub default_kind: CalendarKind,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            year_window:  DEFAULT_YEAR_WINDOW,
            month_labels: MonthLabels::default(),
            default_kind: CalendarKind::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Year window must offer at least one year")]
    EmptyYearWindow,
}

impl PickerConfig {
    /// Checks that the configuration can produce a usable picker.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyYearWindow` if `year_window` is 0.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.year_window == 0 {
            return Err(ConfigError::EmptyYearWindow);
        }
        Ok(())
    }
}
