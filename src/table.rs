//! Lunar year table, 1900–2100.
//!
//! Each lunar year is packed into one integer:
//!
//! | bits    | meaning                                                       |
//! |---------|---------------------------------------------------------------|
//! | `0..4`  | leap-month index, 0 when the year has none                    |
//! | `4..16` | regular month lengths, month 1 at bit 15 down to month 12 at bit 4 (set = 30 days) |
//! | `16`    | length of the leap month (set = 30 days)                      |

use crate::CalendarError;
use crate::consts::{LONG_MONTH_DAYS, LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, MAX_MONTH, SHORT_MONTH_DAYS};

const LEAP_MONTH_MASK: u32 = 0xf;
const LEAP_LENGTH_BIT: u32 = 0x1_0000;

#[rustfmt::skip]
static LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050-2059
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
    0x0d520,                                                                                   // 2100
];

/// Decoded month layout of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRecord {
    year: i32,
    bits: u32,
}

impl YearRecord {
    /// Looks up the record for lunar year `year`.
    ///
    /// # Errors
    /// Returns `YearOutOfRange` outside `LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR`.
    pub fn get(year: i32) -> Result<Self, CalendarError> {
        usize::try_from(year - LUNAR_MIN_YEAR)
            .ok()
            .and_then(|idx| LUNAR_INFO.get(idx))
            .map(|&bits| Self { year, bits })
            .ok_or(CalendarError::YearOutOfRange {
                year,
                min: LUNAR_MIN_YEAR,
                max: LUNAR_MAX_YEAR,
            })
    }

    /// The lunar year this record describes.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Index of the intercalary month, if the year has one.
    ///
    /// # Panics
    /// Panics if the record's leap index is above 12.
    pub fn leap_month(&self) -> Option<u8> {
        let idx = (self.bits & LEAP_MONTH_MASK) as u8;
        assert!(idx <= MAX_MONTH, "leap month {idx} in year {}", self.year);
        (idx != 0).then_some(idx)
    }

    /// Length of regular month `month` (1..=12).
    ///
    /// # Panics
    /// Panics if `month` is not in `1..=12`.
    pub fn month_length(&self, month: u8) -> u8 {
        assert!((1..=MAX_MONTH).contains(&month), "month {month} not in 1..=12");
        if self.bits & (LEAP_LENGTH_BIT >> month) == 0 {
            SHORT_MONTH_DAYS
        } else {
            LONG_MONTH_DAYS
        }
    }

    /// Length of the leap month, if the year has one.
    pub fn leap_month_length(&self) -> Option<u8> {
        self.leap_month().map(|_| {
            if self.bits & LEAP_LENGTH_BIT == 0 {
                SHORT_MONTH_DAYS
            } else {
                LONG_MONTH_DAYS
            }
        })
    }

    /// Total number of days in the year, leap month included.
    pub fn length(&self) -> u16 {
        let regular: u16 = (1..=MAX_MONTH).map(|m| u16::from(self.month_length(m))).sum();
        regular + self.leap_month_length().map_or(0, u16::from)
    }

    /// Months in day-counting order: each leap month directly follows its
    /// regular namesake. Yields `(month, is_leap, length)`.
    pub fn months(&self) -> impl Iterator<Item = (u8, bool, u8)> + '_ {
        let leap = self.leap_month();
        (1..=MAX_MONTH).flat_map(move |m| {
            let regular = std::iter::once((m, false, self.month_length(m)));
            let intercalary = (leap == Some(m))
                .then(|| (m, true, self.leap_month_length().unwrap_or(SHORT_MONTH_DAYS)));
            regular.chain(intercalary)
        })
    }
}

/// Index of the intercalary month of lunar year `year`, if any.
///
/// # Errors
/// Returns `YearOutOfRange` outside the table.
pub fn leap_month(year: i32) -> Result<Option<u8>, CalendarError> {
    Ok(YearRecord::get(year)?.leap_month())
}

/// Number of days in a lunar month.
///
/// With `is_leap` set, the length of the year's leap month is returned,
/// which must be numbered `month`.
///
/// # Errors
/// `YearOutOfRange` outside the table, `InvalidMonth` for months outside
/// `1..=12` and `NoLeapMonth` if the year has no leap month `month`.
pub fn month_length(year: i32, month: u8, is_leap: bool) -> Result<u8, CalendarError> {
    let record = YearRecord::get(year)?;
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    if !is_leap {
        return Ok(record.month_length(month));
    }
    match record.leap_month() {
        Some(leap) if leap == month => record
            .leap_month_length()
            .ok_or(CalendarError::NoLeapMonth { year, month }),
        _ => Err(CalendarError::NoLeapMonth { year, month }),
    }
}

/// Number of days in lunar year `year`.
///
/// # Errors
/// Returns `YearOutOfRange` outside the table.
pub fn year_length(year: i32) -> Result<u16, CalendarError> {
    Ok(YearRecord::get(year)?.length())
}
