//! Jalali leap years from the table of 33-year cycle break-points.

use crate::consts::{BREAKS, JALALI_CYCLE_LEAPS, JALALI_CYCLE_YEARS, JALALI_EPOCH_OFFSET, MARCH};

/// Facts about one Jalali year derived from the break-point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JalaliYearInfo {
    /// Whether Esfand has 30 days this year
    pub leap:           bool,
    /// Gregorian year in which Farvardin 1 falls
    pub gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls
    pub march:          i32,
}

/// Where a Jalali year sits relative to the break-point table.
struct CyclePosition {
    /// Last break-point at or before the year
    start: i32,
    /// Length of the interval containing the year
    jump:  i32,
    /// Jalali leap days accumulated over the completed intervals
    leaps: i32,
}

const fn cycle_position(jy: i32) -> CyclePosition {
    let mut leaps = -14;
    let mut start = BREAKS[0];
    let mut jump = 0;
    let mut i = 1;
    while i < BREAKS.len() {
        let end = BREAKS[i];
        jump = end - start;
        if jy < end {
            break;
        }
        leaps += jump.div_euclid(JALALI_CYCLE_YEARS) * JALALI_CYCLE_LEAPS
            + jump.rem_euclid(JALALI_CYCLE_YEARS).div_euclid(4);
        start = end;
        i += 1;
    }
    CyclePosition { start, jump, leaps }
}

/// Computes leap status and the Gregorian date of Nowruz for Jalali year `jy`.
///
/// Years outside the break-point table reuse its outermost interval. The
/// result is only guaranteed for `BREAKS[0] <= jy < BREAKS[19]`.
pub const fn jalali_year_info(jy: i32) -> JalaliYearInfo {
    let CyclePosition { start, jump, leaps } = cycle_position(jy);
    let gregorian_year = jy + JALALI_EPOCH_OFFSET;

    let mut n = jy - start;
    let mut leap_j = leaps
        + n.div_euclid(JALALI_CYCLE_YEARS) * JALALI_CYCLE_LEAPS
        + (n.rem_euclid(JALALI_CYCLE_YEARS) + 3).div_euclid(4);
    if jump.rem_euclid(JALALI_CYCLE_YEARS) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days since the same origin
    let leap_g = gregorian_year.div_euclid(4)
        - ((gregorian_year.div_euclid(100) + 1) * 3).div_euclid(4)
        - 150;
    let march = 20 + leap_j - leap_g;

    // Near the end of an interval the phase is taken from the next cycle.
    if jump - n < 6 {
        n = n - jump + (jump + 4).div_euclid(JALALI_CYCLE_YEARS) * JALALI_CYCLE_YEARS;
    }
    let phase = ((n + 1).rem_euclid(JALALI_CYCLE_YEARS) - 1).rem_euclid(4);

    JalaliYearInfo {
        leap: phase == 0,
        gregorian_year,
        march,
    }
}

/// Whether Jalali year `jy` is a leap year (Esfand has 30 days).
pub const fn is_jalali_leap(jy: i32) -> bool {
    jalali_year_info(jy).leap
}

/// Gregorian `(year, month, day)` of Farvardin 1 of Jalali year `jy`.
pub const fn nowruz(jy: i32) -> (i32, i32, i32) {
    let info = jalali_year_info(jy);
    (info.gregorian_year, MARCH as i32, info.march)
}
