/// Maximum valid year (inclusive), in either calendar
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Gregorian month in which Nowruz falls
pub const MARCH: u8 = 3;
/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days before the first of each Gregorian month in a common year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in a Gregorian century that does not end on a 400-year boundary
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in 4 Gregorian years (one leap day)
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Jalali months 1..=6 have this many days
pub const JALALI_LONG_MONTH_DAYS: u8 = 31;
/// Jalali months 7..=11 (and Esfand in leap years) have this many days
pub const JALALI_SHORT_MONTH_DAYS: u8 = 30;
/// Esfand in a common year
pub const ESFAND_DAYS_COMMON: u8 = 29;
/// Last month of the first (31-day) half of the Jalali year
pub(crate) const JALALI_HALF_YEAR_MONTHS: u8 = 6;
/// Days in the first half of the Jalali year (6 x 31)
pub(crate) const JALALI_HALF_YEAR_DAYS: i64 = 186;

/// Offset between a Jalali year and the Gregorian year in which it starts
pub const JALALI_EPOCH_OFFSET: i32 = 621;

/// Years at which the 33-year Jalali leap cycle is re-phased.
///
/// Leap status is only guaranteed for years between the first and last entry.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Length of a Jalali leap sub-cycle, in years
pub(crate) const JALALI_CYCLE_YEARS: i32 = 33;
/// Leap days in a full 33-year sub-cycle
pub(crate) const JALALI_CYCLE_LEAPS: i32 = 8;

/// Default number of years offered by the picker
pub const DEFAULT_YEAR_WINDOW: u16 = 100;

/// Gregorian month names
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Jalali month names, transliterated
pub const JALALI_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
