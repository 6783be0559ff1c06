mod config;
mod consts;
mod convert;
mod leap;
mod picker;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use config::{ConfigError, MonthLabels, PickerConfig};
pub use consts::*;
pub use convert::{
    from_gregorian_day_number, gregorian_day_number, gregorian_to_jalali, jalali_day_number,
    jalali_to_gregorian,
};
pub use leap::{JalaliYearInfo, is_jalali_leap, jalali_year_info, nowruz};
pub use picker::{
    DatePicker, DayOption, MonthOption, PickerError, PickerEvent, PickerOptions, PickerState,
    Step, YearOption, reduce,
};
pub use types::{CalendarKind, Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate};
use std::str::FromStr;

/// Canonical calendar-neutral date, stored as a Gregorian `(year, month, day)`.
///
/// This is the value exchanged with forms; every Jalali view is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CivilDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// A date in the Jalali (Persian solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for {kind} month {year}-{month:02}")]
    InvalidDay {
        kind:  CalendarKind,
        year:  u16,
        month: u8,
        day:   u8,
    },
    #[display(fmt = "{kind} date {year:04}-{month:02}-{day:02} is outside the supported range")]
    OutOfRange {
        kind:  CalendarKind,
        year:  i32,
        month: i32,
        day:   i32,
    },
}

impl std::error::Error for DateError {}

/// Validates a `(year, month, day)` triple for `kind`.
fn validate(kind: CalendarKind, year: u16, month: u8, day: u8) -> Result<(Year, Month, Day), DateError> {
    let year_nz = Year::new(year)?;
    let month_nz = Month::new(month)?;
    let day_nz = Day::new(day, kind, year, month)?;
    Ok((year_nz, month_nz, day_nz))
}

/// Validates a converter result, reporting anything unrepresentable as out of range.
fn from_raw(kind: CalendarKind, (year, month, day): (i32, i32, i32)) -> Result<(Year, Month, Day), DateError> {
    let out_of_range = DateError::OutOfRange {
        kind,
        year,
        month,
        day,
    };
    let (Ok(y), Ok(m), Ok(d)) = (u16::try_from(year), u8::try_from(month), u8::try_from(day)) else {
        return Err(out_of_range);
    };
    validate(kind, y, m, d).map_err(|_| out_of_range)
}

/// Parses `YYYY-MM-DD` into its unvalidated components.
fn parse_ymd(s: &str) -> Result<(u16, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(format!(
            "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in {trimmed}",
            parts.len()
        )));
    };

    let year = year
        .parse::<u16>()
        .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;
    Ok((year, month, day))
}

impl CivilDate {
    /// Creates a Gregorian date, validating every component.
    ///
    /// # Errors
    /// Returns the `DateError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let (year, month, day) = validate(CalendarKind::Gregorian, year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Builds the canonical date from a triple expressed in either calendar.
    ///
    /// # Errors
    /// Returns a validation error for an invalid triple and
    /// `DateError::OutOfRange` when the Gregorian result is not representable.
    pub fn from_calendar(kind: CalendarKind, year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        match kind {
            CalendarKind::Gregorian => Self::new(year, month, day),
            CalendarKind::Jalali => JalaliDate::new(year, month, day)?.to_gregorian(),
        }
    }

    /// Expresses this date as a `(year, month, day)` triple in `kind`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for Jalali views of dates before the Jalali epoch.
    pub fn in_calendar(self, kind: CalendarKind) -> Result<(u16, u8, u8), DateError> {
        match kind {
            CalendarKind::Gregorian => Ok(self.ymd()),
            CalendarKind::Jalali => self.to_jalali().map(JalaliDate::ymd),
        }
    }

    /// Converts to the Jalali calendar.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for dates before 0622-03-22 (Jalali 0001-01-01).
    pub fn to_jalali(self) -> Result<JalaliDate, DateError> {
        let (y, m, d) = self.ymd();
        let raw = gregorian_to_jalali(i32::from(y), i32::from(m), i32::from(d));
        let (year, month, day) = from_raw(CalendarKind::Jalali, raw)?;
        Ok(JalaliDate { year, month, day })
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the system clock is outside years 1-9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(Local::now().date_naive())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Components as plain integers: (year, month, day)
    pub const fn ymd(self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// English name of the month
    pub fn month_name(&self) -> &'static str {
        GREGORIAN_MONTHS[usize::from(self.month.get() - 1)]
    }

    /// Day number on the scale of [`gregorian_day_number`]
    pub const fn day_number(self) -> i64 {
        gregorian_day_number(
            self.year.get() as i32,
            self.month.get() as i32,
            self.day.get() as i32,
        )
    }
}

impl JalaliDate {
    /// Creates a Jalali date, validating every component against the Jalali month lengths.
    ///
    /// # Errors
    /// Returns the `DateError` of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let (year, month, day) = validate(CalendarKind::Jalali, year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Converts to the canonical Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for dates after Jalali 9378-10-10 (Gregorian 9999-12-31).
    pub fn to_gregorian(self) -> Result<CivilDate, DateError> {
        let (y, m, d) = self.ymd();
        let raw = jalali_to_gregorian(i32::from(y), i32::from(m), i32::from(d));
        let (year, month, day) = from_raw(CalendarKind::Gregorian, raw)?;
        Ok(CivilDate { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Components as plain integers: (year, month, day)
    pub const fn ymd(self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Transliterated name of the month
    pub fn month_name(&self) -> &'static str {
        JALALI_MONTHS[usize::from(self.month.get() - 1)]
    }

    /// Whether this date falls in a Jalali leap year
    pub const fn is_leap_year(&self) -> bool {
        is_jalali_leap(self.year.get() as i32)
    }
}

impl TryFrom<CivilDate> for JalaliDate {
    type Error = DateError;

    fn try_from(value: CivilDate) -> Result<Self, Self::Error> {
        value.to_jalali()
    }
}

impl TryFrom<JalaliDate> for CivilDate {
    type Error = DateError;

    fn try_from(value: JalaliDate) -> Result<Self, Self::Error> {
        value.to_gregorian()
    }
}

impl TryFrom<NaiveDate> for CivilDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        // Anything that doesn't fit maps to 0, which validation rejects
        let year = u16::try_from(value.year()).unwrap_or(0);
        let month = u8::try_from(value.month()).unwrap_or(0);
        let day = u8::try_from(value.day()).unwrap_or(0);
        Self::new(year, month, day)
    }
}

impl TryFrom<CivilDate> for NaiveDate {
    type Error = DateError;

    fn try_from(value: CivilDate) -> Result<Self, Self::Error> {
        let (y, m, d) = value.ymd();
        Self::from_ymd_opt(i32::from(y), u32::from(m), u32::from(d)).ok_or(DateError::OutOfRange {
            kind:  CalendarKind::Gregorian,
            year:  i32::from(y),
            month: i32::from(m),
            day:   i32::from(d),
        })
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
