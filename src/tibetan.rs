//! Tibetan calendar approximation.
//!
//! The Tibetan date is taken to trail the Gregorian date by one month:
//! solar March is Tibetan month 2, and solar January belongs to Tibetan month
//! 12 of the previous year. Days carry over unchanged. This is a heuristic,
//! not an astronomical Tibetan calendar, and the missing/doubled day markers
//! are placeholders of the same kind.

use crate::consts::{
    DECEMBER, DOUBLED_DAY_MODULUS, JANUARY, MIN_DAY, MISSING_DAY_MODULUS, RABJUNG_EPOCH,
    RABJUNG_LENGTH, SPECIAL_DAY_HORIZON, TIBETAN_MAX_YEAR, TIBETAN_MIN_YEAR, TIBETAN_MONTH_DAYS,
};
use crate::almanac::{DayQuality, FlyingStar, day_quality, flying_star};
use crate::festival::CalendarType;
use crate::names::{lunar_day_name, tibetan_day_name, tibetan_element, tibetan_month_name, tibetan_zodiac};
use crate::{CalendarError, SolarDate};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Days of the Tibetan month on which the effect of deeds is multiplied.
const SPECIAL_DAYS: [(u8, &str); 7] = [
    (1, "初一 - 吉祥日"),
    (8, "初八 - 药师佛节日"),
    (10, "初十 - 莲师荟供日"),
    (15, "十五 - 佛陀节日 (满月)"),
    (18, "十八 - 观音菩萨节日"),
    (25, "廿五 - 空行母荟供日"),
    (30, "三十 - 释迦牟尼佛节日 (新月)"),
];

const TIBETAN_YEAR_SUFFIX: &str = "ལོ";
const TSHEG: char = '་';

/// A Tibetan calendar date with element, animal and month/day names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TibetanDate {
    year: i32,
    month: u8,
    day: u8,
    year_element_name: String,
    year_element_name_tibetan: String,
    month_name_tibetan: &'static str,
    month_name_chinese: &'static str,
    day_name_tibetan: Option<&'static str>,
    day_name_chinese: Option<&'static str>,
    is_missing_day: bool,
    is_doubleday: bool,
}

impl TibetanDate {
    fn new(year: i32, month: u8, day: u8) -> Self {
        let (element, element_tibetan) = tibetan_element(year);
        let (animal, animal_tibetan) = tibetan_zodiac(year);
        let (month_chinese, month_tibetan) = tibetan_month_name(month);
        Self {
            year,
            month,
            day,
            year_element_name: format!("{element}{animal}年"),
            year_element_name_tibetan: tibetan_year_name(element_tibetan, animal_tibetan),
            month_name_tibetan: month_tibetan,
            month_name_chinese: month_chinese,
            day_name_tibetan: tibetan_day_name(day),
            day_name_chinese: lunar_day_name(day),
            is_missing_day: is_missing_day(year, month, day),
            is_doubleday: is_doubleday(year, month, day),
        }
    }

    /// Tibetan year; solar January still counts to the previous year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, always in `1..=12`
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month. Can be 31, which has no Tibetan day name.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Element and animal of the year, e.g. `火马年`
    pub fn year_element_name(&self) -> &str {
        &self.year_element_name
    }

    /// Year name in Tibetan script, e.g. `མེ་རྟ་ལོ`
    pub fn year_element_name_tibetan(&self) -> &str {
        &self.year_element_name_tibetan
    }

    /// Month name in Tibetan script, e.g. `ཧོར་ཟླ་དང་པོ`
    pub const fn month_name_tibetan(&self) -> &'static str {
        self.month_name_tibetan
    }

    /// Month name in Chinese, `一月` through `十二月`
    pub const fn month_name_chinese(&self) -> &'static str {
        self.month_name_chinese
    }

    /// Day name in Tibetan script; `None` on day 31
    pub const fn day_name_tibetan(&self) -> Option<&'static str> {
        self.day_name_tibetan
    }

    /// Day name in Chinese (`初一` to `三十`); `None` on day 31
    pub const fn day_name_chinese(&self) -> Option<&'static str> {
        self.day_name_chinese
    }

    /// See [`is_missing_day`].
    pub const fn is_missing_day(&self) -> bool {
        self.is_missing_day
    }

    /// See [`is_doubleday`].
    pub const fn is_doubleday(&self) -> bool {
        self.is_doubleday
    }

    /// Rabjung cycle and year within it; see [`rabjung`].
    pub const fn rabjung(&self) -> Option<(i32, i32)> {
        rabjung(self.year)
    }

    /// Name including the Rabjung cycle, e.g. `第17绕迥火马年`.
    pub fn full_year_name(&self) -> String {
        full_year_name(self.year)
    }

    /// Length of this date's month; see [`month_days`].
    pub const fn month_days(&self) -> u8 {
        month_days(self.year, self.month)
    }

    /// Day quality of this date; see [`day_quality`].
    pub fn day_quality(&self) -> (DayQuality, String) {
        day_quality(self.year, self.month, self.day)
    }

    /// 九宫飞星 of this date; see [`flying_star`].
    pub const fn flying_star(&self) -> FlyingStar {
        flying_star(self.year, self.month, self.day)
    }

    /// Special-day flag and description for this date's day.
    pub fn special_day(&self) -> (bool, Option<&'static str>) {
        is_special_day(self.day)
    }

    /// Maps the date back to the Gregorian calendar.
    ///
    /// # Errors
    /// See [`tibetan_to_solar`].
    pub fn to_solar(&self) -> Result<SolarDate, CalendarError> {
        tibetan_to_solar(self.year, self.month, self.day)
    }
}

/// Joins the element, the animal and `ལོ`, with a tsheg between syllables.
fn tibetan_year_name(element: &str, animal: &str) -> String {
    let mut name = format!("{element}{animal}");
    if !name.ends_with(TSHEG) {
        name.push(TSHEG);
    }
    name + TIBETAN_YEAR_SUFFIX
}

impl fmt::Display for TibetanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.year_element_name, self.month_name_chinese)?;
        match self.day_name_chinese {
            Some(name) => f.write_str(name),
            None => write!(f, "{}日", self.day),
        }
    }
}

/// Converts a Gregorian date to its approximate Tibetan date.
///
/// ```
/// use lunar_tibetan::{SolarDate, solar_to_tibetan};
///
/// let date = solar_to_tibetan(SolarDate::new(2026, 1, 21).unwrap());
/// assert_eq!((date.year(), date.month(), date.day()), (2025, 12, 21));
/// assert_eq!(date.year_element_name(), "木蛇年");
/// ```
#[tracing::instrument(level = "trace")]
pub fn solar_to_tibetan(date: SolarDate) -> TibetanDate {
    let (year, month) = if date.month() == JANUARY {
        (i32::from(date.year()) - 1, DECEMBER)
    } else {
        (i32::from(date.year()), date.month() - 1)
    };
    TibetanDate::new(year, month, date.day())
}

/// Maps a Tibetan date back to the Gregorian calendar.
///
/// # Errors
/// `YearOutOfRange` outside Tibetan years 1950–2050, `InvalidMonth` outside
/// `1..=12`, `InvalidLunarDay` outside `1..=30`, and `InvalidDay` when the
/// matching Gregorian month has no such day (e.g. month 1 day 30 would be
/// February 30).
pub fn tibetan_to_solar(year: i32, month: u8, day: u8) -> Result<SolarDate, CalendarError> {
    if !(TIBETAN_MIN_YEAR..=TIBETAN_MAX_YEAR).contains(&year) {
        debug!(year, "tibetan year outside supported range");
        return Err(CalendarError::YearOutOfRange {
            year,
            min: TIBETAN_MIN_YEAR,
            max: TIBETAN_MAX_YEAR,
        });
    }
    if !(JANUARY..=DECEMBER).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    if !(MIN_DAY..=TIBETAN_MONTH_DAYS).contains(&day) {
        return Err(CalendarError::InvalidLunarDay {
            calendar: CalendarType::Tibetan,
            year,
            month,
            day,
        });
    }

    let (solar_year, solar_month) = if month == DECEMBER {
        (year + 1, JANUARY)
    } else {
        (year, month + 1)
    };
    let solar_year = u16::try_from(solar_year).map_err(|_| CalendarError::YearOutOfRange {
        year,
        min: TIBETAN_MIN_YEAR,
        max: TIBETAN_MAX_YEAR,
    })?;
    SolarDate::new(solar_year, solar_month, day)
}

/// Rabjung (60-year cycle) number and the 1-based year within it.
/// `None` for years before the first Rabjung began in 1027.
pub const fn rabjung(year: i32) -> Option<(i32, i32)> {
    if year < RABJUNG_EPOCH {
        return None;
    }
    let since = year - RABJUNG_EPOCH;
    Some((since / RABJUNG_LENGTH + 1, since % RABJUNG_LENGTH + 1))
}

/// Year name with its Rabjung cycle, e.g. `第17绕迥火马年`.
///
/// Years before 1027 have no cycle and get the bare element-animal name.
pub fn full_year_name(year: i32) -> String {
    let (element, _) = tibetan_element(year);
    let (animal, _) = tibetan_zodiac(year);
    match rabjung(year) {
        Some((cycle, _)) => format!("第{cycle}绕迥{element}{animal}年"),
        None => format!("{element}{animal}年"),
    }
}

/// Length of a Tibetan month: 29 days when `(year + month) % 3 == 0`,
/// otherwise 30. A placeholder for the real month-length computation.
#[allow(clippy::cast_lossless)]
pub const fn month_days(year: i32, month: u8) -> u8 {
    if (year + month as i32).rem_euclid(3) == 0 {
        TIBETAN_MONTH_DAYS - 1
    } else {
        TIBETAN_MONTH_DAYS
    }
}

fn day_sum(year: i32, month: u8, day: u8) -> i32 {
    year + i32::from(month) + i32::from(day)
}

/// Placeholder doubled-day marker: `year + month + day` divisible by 128.
pub fn is_doubleday(year: i32, month: u8, day: u8) -> bool {
    day_sum(year, month, day).rem_euclid(DOUBLED_DAY_MODULUS) == 0
}

/// Placeholder missing-day marker: `year + month + day` divisible by 64.
/// A doubled day is never also missing.
pub fn is_missing_day(year: i32, month: u8, day: u8) -> bool {
    day_sum(year, month, day).rem_euclid(MISSING_DAY_MODULUS) == 0 && !is_doubleday(year, month, day)
}

/// Days of a Tibetan month flagged as missing.
pub fn missing_days(year: i32, month: u8) -> Vec<u8> {
    (MIN_DAY..=TIBETAN_MONTH_DAYS)
        .filter(|&day| is_missing_day(year, month, day))
        .collect()
}

/// Days of a Tibetan month flagged as doubled.
pub fn doubled_days(year: i32, month: u8) -> Vec<u8> {
    (MIN_DAY..=TIBETAN_MONTH_DAYS)
        .filter(|&day| is_doubleday(year, month, day))
        .collect()
}

/// Description of a special day, if `day` is one.
pub fn special_day_description(day: u8) -> Option<&'static str> {
    SPECIAL_DAYS
        .iter()
        .find(|(special, _)| *special == day)
        .map(|&(_, description)| description)
}

/// Whether a Tibetan day of month is a special day, with its description.
pub fn is_special_day(day: u8) -> (bool, Option<&'static str>) {
    let description = special_day_description(day);
    (description.is_some(), description)
}

/// First special day strictly after `from`, looking at most 60 days ahead.
pub fn next_special_day(from: SolarDate) -> Option<(SolarDate, &'static str)> {
    (1..=i32::from(SPECIAL_DAY_HORIZON))
        .map_while(|offset| from.add_days(offset))
        .find_map(|date| {
            special_day_description(solar_to_tibetan(date).day()).map(|description| (date, description))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tibetan(y: u16, m: u8, d: u8) -> TibetanDate {
        solar_to_tibetan(SolarDate::new(y, m, d).unwrap())
    }

    #[test]
    fn test_month_offset() {
        let date = tibetan(2026, 2, 26);
        assert_eq!((date.year(), date.month(), date.day()), (2026, 1, 26));
        assert_eq!(date.month_name_chinese(), "一月");
        assert_eq!(date.month_name_tibetan(), "ཧོར་ཟླ་དང་པོ");
        assert_eq!(date.day_name_chinese(), Some("廿六"));
        assert_eq!(date.day_name_tibetan(), Some("ཉེར་དྲུག"));
    }

    #[test]
    fn test_january_rolls_back_a_year() {
        for day in 1..=31 {
            let date = tibetan(2026, 1, day);
            assert_eq!(date.year(), 2025);
            assert_eq!(date.month(), 12);
            assert_eq!(date.month_name_chinese(), "十二月");
        }
        assert_eq!(tibetan(2026, 12, 31).month(), 11);
    }

    #[test]
    fn test_year_names() {
        let date = tibetan(2026, 6, 1);
        assert_eq!(date.year_element_name(), "火马年");
        assert_eq!(date.year_element_name_tibetan(), "མེ་རྟ་ལོ");
        assert_eq!(date.full_year_name(), "第17绕迥火马年");
        assert_eq!(date.rabjung(), Some((17, 40)));

        assert_eq!(tibetan(2025, 6, 1).year_element_name(), "木蛇年");
        assert_eq!(tibetan(1984, 6, 1).year_element_name(), "木鼠年");
        assert_eq!(tibetan(1983, 6, 1).year_element_name(), "水猪年");
        assert_eq!(tibetan(1900, 6, 1).year_element_name(), "金鼠年");
    }

    #[test]
    fn test_tibetan_year_name_separates_syllables() {
        assert_eq!(tibetan(2025, 6, 1).year_element_name_tibetan(), "ཤིང་སྦྲུལ་ལོ");
        // ox already ends with a tsheg
        assert_eq!(tibetan(2021, 6, 1).year_element_name_tibetan(), "ལྕགས་གླང་ལོ");
        for year in 1984..1996 {
            let name = tibetan(year, 6, 1).year_element_name_tibetan().to_owned();
            assert!(name.ends_with("་ལོ"), "{name}");
            assert!(!name.contains("་་"), "{name}");
        }
    }

    #[test]
    fn test_month_days() {
        assert_eq!(month_days(2026, 1), 30);
        assert_eq!(month_days(2026, 2), 29);
        assert_eq!(month_days(2026, 3), 30);
        assert_eq!(tibetan(2026, 3, 5).month_days(), 29);
        for month in 1..=12 {
            assert!(matches!(month_days(2024, month), 29 | 30));
        }
    }

    #[test]
    fn test_almanac_accessors() {
        let date = tibetan(2026, 2, 8);
        assert_eq!(date.day_quality().0, DayQuality::VeryGood);
        assert_eq!(date.flying_star().star, flying_star(2026, 1, 8).star);
    }

    #[test]
    fn test_rabjung() {
        assert_eq!(rabjung(1027), Some((1, 1)));
        assert_eq!(rabjung(1086), Some((1, 60)));
        assert_eq!(rabjung(1087), Some((2, 1)));
        assert_eq!(rabjung(1026), None);
        assert_eq!(full_year_name(1000), "金鼠年");
    }

    #[test]
    fn test_day_31_has_no_name() {
        let date = tibetan(2026, 3, 31);
        assert_eq!(date.day(), 31);
        assert_eq!(date.day_name_tibetan(), None);
        assert_eq!(date.day_name_chinese(), None);
        assert_eq!(date.to_string(), "火马年二月31日");
        assert_eq!(date.special_day(), (false, None));
    }

    #[test]
    fn test_display() {
        assert_eq!(tibetan(2026, 2, 26).to_string(), "火马年一月廿六");
    }

    #[test]
    fn test_doubled_and_missing_days() {
        // 2025 + 12 + 11 = 2048
        let doubled = tibetan(2026, 1, 11);
        assert!(doubled.is_doubleday());
        assert!(!doubled.is_missing_day());

        // 1950 + 4 + 30 = 1984
        let missing = tibetan(1950, 5, 30);
        assert!(missing.is_missing_day());
        assert!(!missing.is_doubleday());

        assert_eq!(doubled_days(2025, 12), vec![11]);
        assert!(missing_days(2025, 12).is_empty());
        assert_eq!(missing_days(1950, 4), vec![30]);

        let plain = tibetan(2026, 2, 26);
        assert!(!plain.is_missing_day() && !plain.is_doubleday());
    }

    #[test]
    fn test_special_days() {
        for day in [1, 8, 10, 15, 18, 25, 30] {
            let (special, description) = is_special_day(day);
            assert!(special, "day {day}");
            assert!(!description.unwrap().is_empty());
        }
        for day in (2..=29).filter(|d| ![8, 10, 15, 18, 25].contains(d)) {
            assert_eq!(is_special_day(day), (false, None), "day {day}");
        }
        assert_eq!(special_day_description(15), Some("十五 - 佛陀节日 (满月)"));
        assert_eq!(is_special_day(0), (false, None));
        assert_eq!(is_special_day(31), (false, None));
    }

    #[test]
    fn test_next_special_day() {
        let from = SolarDate::new(2026, 2, 26).unwrap();
        let (date, description) = next_special_day(from).unwrap();
        assert_eq!(date, SolarDate::new(2026, 3, 1).unwrap());
        assert_eq!(description, "初一 - 吉祥日");

        // strictly after: day 8 itself is skipped
        let from = SolarDate::new(2026, 4, 8).unwrap();
        let (date, _) = next_special_day(from).unwrap();
        assert_eq!(date, SolarDate::new(2026, 4, 10).unwrap());

        assert_eq!(next_special_day(SolarDate::new(9999, 12, 31).unwrap()), None);
    }

    #[test]
    fn test_tibetan_to_solar() {
        assert_eq!(
            tibetan_to_solar(2026, 1, 26).unwrap(),
            SolarDate::new(2026, 2, 26).unwrap()
        );
        assert_eq!(
            tibetan_to_solar(2025, 12, 21).unwrap(),
            SolarDate::new(2026, 1, 21).unwrap()
        );
        assert_eq!(tibetan(2026, 1, 21).to_solar().unwrap(), SolarDate::new(2026, 1, 21).unwrap());
    }

    #[test]
    fn test_tibetan_to_solar_errors() {
        assert!(tibetan_to_solar(1949, 1, 1).unwrap_err().is_out_of_range());
        assert!(tibetan_to_solar(2051, 1, 1).unwrap_err().is_out_of_range());
        assert_eq!(tibetan_to_solar(2026, 13, 1), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(tibetan_to_solar(2026, 0, 1), Err(CalendarError::InvalidMonth(0)));
        assert!(matches!(
            tibetan_to_solar(2026, 1, 31),
            Err(CalendarError::InvalidLunarDay {
                calendar: CalendarType::Tibetan,
                day: 31,
                ..
            })
        ));
        assert!(matches!(
            tibetan_to_solar(2026, 1, 30),
            Err(CalendarError::InvalidDay { month: 2, day: 30, .. })
        ));
    }

    #[test]
    fn test_serializes_optional_names() {
        let json = serde_json::to_value(tibetan(2026, 3, 31)).unwrap();
        assert_eq!(json["day_name_tibetan"], serde_json::Value::Null);
        assert_eq!(json["month"], 2);
    }
}
