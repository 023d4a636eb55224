/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Julian day number of 0001-01-01, the first representable date
pub const MIN_JDN: i32 = 1_721_426;
/// Julian day number of 9999-12-31, the last representable date
pub const MAX_JDN: i32 = 5_373_484;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// First lunar year covered by the year table
pub const LUNAR_MIN_YEAR: i32 = 1900;
/// Last lunar year covered by the year table (inclusive)
pub const LUNAR_MAX_YEAR: i32 = 2100;

/// Gregorian date of 正月初一 of lunar year 1900, the day-counting epoch
pub const LUNAR_EPOCH: (u16, u8, u8) = (1900, 1, 31);

/// Length of a long (大) lunar month
pub const LONG_MONTH_DAYS: u8 = 30;
/// Length of a short (小) lunar month
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Year whose stem and branch are both index 0 (甲子), modulo 60
pub const SEXAGENARY_EPOCH: i32 = 4;

/// Reference Tibetan year for the element and animal cycles (wood rat)
pub const TIBETAN_CYCLE_EPOCH: i32 = 1984;
/// First year of the first Rabjung
pub const RABJUNG_EPOCH: i32 = 1027;
/// Length of a Rabjung in years
pub const RABJUNG_LENGTH: i32 = 60;

/// Tibetan years accepted by the Tibetan-to-solar conversion
pub const TIBETAN_MIN_YEAR: i32 = 1950;
/// Tibetan years accepted by the Tibetan-to-solar conversion (inclusive)
pub const TIBETAN_MAX_YEAR: i32 = 2050;

/// Longest Tibetan month the inverse conversion accepts
pub const TIBETAN_MONTH_DAYS: u8 = 30;

/// `(year + month + day)` divisible by this marks a doubled day
pub(crate) const DOUBLED_DAY_MODULUS: i32 = 128;
/// `(year + month + day)` divisible by this marks a missing day
pub(crate) const MISSING_DAY_MODULUS: i32 = 64;

/// How many days ahead `next_special_day` looks before giving up
pub const SPECIAL_DAY_HORIZON: u16 = 60;

/// Marker prefixed to the name of an intercalary month
pub const LEAP_MONTH_MARKER: &str = "闰";

/// Default reminder time of day
pub const DEFAULT_REMINDER_TIME: (u8, u8) = (9, 0);
/// Time component separator for reminder times
pub const TIME_SEPARATOR: char = ':';

/// Julian day number of 2000-01-07, a 甲子 day
pub const SEXAGENARY_DAY_EPOCH: i32 = 2_451_551;

/// Number of solar terms in a year
pub const SOLAR_TERM_COUNT: usize = 24;
/// Gregorian date of 小寒 1900, the solar-term reference day
pub const SOLAR_TERM_EPOCH: (u16, u8, u8) = (1900, 1, 6);
/// Minutes past midnight of the reference day at which 小寒 1900 fell (02:05)
pub(crate) const SOLAR_TERM_EPOCH_MINUTES: i64 = 125;
/// Mean tropical year in hundredths of a minute
pub(crate) const TROPICAL_YEAR_CENTIMINUTES: i64 = 52_594_876;
pub(crate) const MINUTES_PER_DAY: i64 = 1440;

/// Index of 庚 among the heavenly stems; 三伏 starts on 庚 days
pub(crate) const GENG_STEM: usize = 6;
/// Length of 初伏 and 末伏, and the gap from 初伏 to 中伏
pub const DOG_DAYS_PERIOD: u8 = 10;
/// Length of each of the nine 数九 periods
pub const NINE_PERIOD_DAYS: u8 = 9;
