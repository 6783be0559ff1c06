//! Gregorian <-> Jalali conversion over raw `(year, month, day)` triples.
//!
//! Both directions go through a day number counting days since
//! 0001-01-01 (which is day 1). Each Jalali year starts on the Nowruz day
//! given by [`crate::leap::nowruz`], so month lengths here always agree
//! with [`crate::is_jalali_leap`].

use crate::consts::{
    DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS,
    DAYS_PER_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP, JALALI_EPOCH_OFFSET, JALALI_HALF_YEAR_DAYS,
    JALALI_HALF_YEAR_MONTHS, JALALI_LONG_MONTH_DAYS, JALALI_SHORT_MONTH_DAYS, MAX_MONTH,
};
use crate::leap::nowruz;

const fn is_gregorian_leap(year: i64) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

const fn gregorian_month_len(year: i64, month: usize) -> i64 {
    if month == FEBRUARY as usize && is_gregorian_leap(year) {
        FEBRUARY_DAYS_LEAP as i64
    } else {
        DAYS_IN_MONTH[month] as i64
    }
}

/// Day number of a Gregorian date, 0001-01-01 being day 1.
///
/// `gm` must be in `1..=12`.
pub const fn gregorian_day_number(gy: i32, gm: i32, gd: i32) -> i64 {
    debug_assert!(gm >= 1 && gm <= MAX_MONTH as i32);

    let y = gy as i64 - 1;
    let mut days = y * DAYS_PER_YEAR + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    days += DAYS_BEFORE_MONTH[gm as usize] as i64;
    if gm > FEBRUARY as i32 && is_gregorian_leap(gy as i64) {
        days += 1;
    }
    days + gd as i64
}

/// Gregorian `(year, month, day)` of a day number, inverse of [`gregorian_day_number`].
pub const fn from_gregorian_day_number(day_number: i64) -> (i32, i32, i32) {
    let days = day_number - 1;
    let cycles_400 = days.div_euclid(DAYS_PER_400_YEARS);
    let mut days = days.rem_euclid(DAYS_PER_400_YEARS);

    // The last day of a 400-year cycle is the leap day the centuries skipped.
    let mut centuries = days / DAYS_PER_100_YEARS;
    if centuries == 4 {
        centuries = 3;
    }
    days -= centuries * DAYS_PER_100_YEARS;

    let cycles_4 = days / DAYS_PER_4_YEARS;
    days %= DAYS_PER_4_YEARS;

    let mut years = days / DAYS_PER_YEAR;
    if years == 4 {
        years = 3;
    }
    days -= years * DAYS_PER_YEAR;

    let year = cycles_400 * 400 + centuries * 100 + cycles_4 * 4 + years + 1;

    let mut month = 1;
    while month < MAX_MONTH as usize {
        let len = gregorian_month_len(year, month);
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }

    (year as i32, month as i32, days as i32 + 1)
}

/// Days from Farvardin 1 to the first of month `jm`.
const fn jalali_days_before_month(jm: i32) -> i64 {
    if jm <= JALALI_HALF_YEAR_MONTHS as i32 {
        (jm as i64 - 1) * JALALI_LONG_MONTH_DAYS as i64
    } else {
        JALALI_HALF_YEAR_DAYS + (jm as i64 - 7) * JALALI_SHORT_MONTH_DAYS as i64
    }
}

const fn nowruz_day_number(jy: i32) -> i64 {
    let (gy, gm, gd) = nowruz(jy);
    gregorian_day_number(gy, gm, gd)
}

/// Day number of a Jalali date, on the same scale as [`gregorian_day_number`].
pub const fn jalali_day_number(jy: i32, jm: i32, jd: i32) -> i64 {
    nowruz_day_number(jy) + jalali_days_before_month(jm) + jd as i64 - 1
}

/// Converts a Gregorian date to the Jalali calendar.
pub const fn gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> (i32, i32, i32) {
    let day_number = gregorian_day_number(gy, gm, gd);

    // Farvardin 1 of `gy - 621` falls in March of `gy`; earlier dates
    // belong to the year before.
    let mut jy = gy - JALALI_EPOCH_OFFSET;
    let mut ordinal = day_number - nowruz_day_number(jy);
    if ordinal < 0 {
        jy -= 1;
        ordinal = day_number - nowruz_day_number(jy);
    }

    let (jm, jd) = if ordinal < JALALI_HALF_YEAR_DAYS {
        let long = JALALI_LONG_MONTH_DAYS as i64;
        (1 + ordinal / long, 1 + ordinal % long)
    } else {
        let short = JALALI_SHORT_MONTH_DAYS as i64;
        let rest = ordinal - JALALI_HALF_YEAR_DAYS;
        (7 + rest / short, 1 + rest % short)
    };

    (jy, jm as i32, jd as i32)
}

/// Converts a Jalali date to the Gregorian calendar.
pub const fn jalali_to_gregorian(jy: i32, jm: i32, jd: i32) -> (i32, i32, i32) {
    from_gregorian_day_number(jalali_day_number(jy, jm, jd))
}
