//! Shorthand constructors for tests.

use crate::{CalendarKind, CivilDate, JalaliDate, PickerState};

pub fn civil(year: u16, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day).expect("valid Gregorian date in test")
}

pub fn jalali(year: u16, month: u8, day: u8) -> JalaliDate {
    JalaliDate::new(year, month, day).expect("valid Jalali date in test")
}

pub fn picker(kind: CalendarKind, year: u16, month: u8, day: u8) -> PickerState {
    PickerState::new(civil(year, month, day), kind).expect("picker state in test")
}
