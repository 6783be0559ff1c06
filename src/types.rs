use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_COMMON, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JALALI_HALF_YEAR_MONTHS, JALALI_LONG_MONTH_DAYS, JALALI_SHORT_MONTH_DAYS,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use crate::leap::is_jalali_leap;
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// Which calendar a `(year, month, day)` triple is expressed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Jalali")]
    Jalali,
}

impl CalendarKind {
    /// The other calendar
    pub const fn toggled(self) -> Self {
        match self {
            Self::Gregorian => Self::Jalali,
            Self::Jalali => Self::Gregorian,
        }
    }
}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for the calendar, year and month it was built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, kind: CalendarKind, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            kind,
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(kind, year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Builds the largest valid day not after `value` for the given month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `value` is 0 or `month` is out of range.
    pub fn clamped(value: u8, kind: CalendarKind, year: u16, month: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidDay {
                kind,
                year,
                month,
                day: value,
            });
        }
        Self::new(value.min(days_in_month(kind, year, month)), kind, year, month)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = DateError::InvalidDay {
            kind:  CalendarKind::Gregorian,
            year:  0,
            month: 0,
            day:   value,
        };
        // Can't validate without calendar/year/month context, so just check bounds
        if !(MIN_DAY..=JALALI_LONG_MONTH_DAYS).contains(&value) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Month length resolution

/// Gregorian leap rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, in the given calendar.
///
/// Always in `28..=31`. `month` must already be in `1..=12`.
pub const fn days_in_month(kind: CalendarKind, year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match kind {
        CalendarKind::Gregorian => gregorian_days_in_month(year, month),
        CalendarKind::Jalali => jalali_days_in_month(year as i32, month),
    }
}

/// Number of days in a year of the given calendar (365 or 366)
pub const fn days_in_year(kind: CalendarKind, year: u16) -> u16 {
    let leap = match kind {
        CalendarKind::Gregorian => is_leap_year(year),
        CalendarKind::Jalali => is_jalali_leap(year as i32),
    };
    if leap { 366 } else { 365 }
}

pub(crate) const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const fn jalali_days_in_month(year: i32, month: u8) -> u8 {
    if month <= JALALI_HALF_YEAR_MONTHS {
        JALALI_LONG_MONTH_DAYS
    } else if month < ESFAND || is_jalali_leap(year) {
        JALALI_SHORT_MONTH_DAYS
    } else {
        ESFAND_DAYS_COMMON
    }
}
