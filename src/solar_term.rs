//! The 24 solar terms (节气) and the periods counted from them.
//!
//! Term dates come from a mean tropical year and fixed offsets within it,
//! starting at 小寒 1900. This is accurate to the day for almost all terms
//! in 1900–2100 but is not an ephemeris; a term falling near midnight can
//! land on the neighbouring day.

use crate::consts::{
    DOG_DAYS_PERIOD, GENG_STEM, LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, MINUTES_PER_DAY,
    NINE_PERIOD_DAYS, SOLAR_TERM_COUNT, SOLAR_TERM_EPOCH, SOLAR_TERM_EPOCH_MINUTES,
    TROPICAL_YEAR_CENTIMINUTES,
};
use crate::names::day_stem;
use crate::{CalendarError, SolarDate};
use serde::Serialize;
use tracing::debug;

const SOLAR_TERMS: [&str; SOLAR_TERM_COUNT] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// Minutes from 小寒 to each term within one tropical year.
const SOLAR_TERM_MINUTES: [i64; SOLAR_TERM_COUNT] = [
    0, 21208, 42467, 63836, 85337, 107_014, 128_867, 150_921, 173_149, 195_551, 218_072, 240_693,
    263_343, 285_989, 308_563, 331_033, 353_350, 375_494, 397_447, 419_210, 440_795, 462_224,
    483_532, 504_758,
];

const SUMMER_SOLSTICE: usize = 11;
const START_OF_AUTUMN: usize = 14;
const WINTER_SOLSTICE: usize = 23;

const NINE_PERIODS: [&str; 9] = ["一九", "二九", "三九", "四九", "五九", "六九", "七九", "八九", "九九"];

/// One solar term of a Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolarTerm {
    index: u8,
    name: &'static str,
    date: SolarDate,
}

impl SolarTerm {
    /// Position in the year, `0` (小寒) through `23` (冬至)
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Chinese name, e.g. `立春`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Gregorian day the term falls on
    pub const fn date(&self) -> SolarDate {
        self.date
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        debug!(year, "year outside solar term range");
        Err(CalendarError::YearOutOfRange {
            year,
            min: LUNAR_MIN_YEAR,
            max: LUNAR_MAX_YEAR,
        })
    }
}

fn epoch_jdn() -> Result<i32, CalendarError> {
    let (y, m, d) = SOLAR_TERM_EPOCH;
    Ok(SolarDate::new(y, m, d)?.jdn())
}

fn term_in(year: i32, index: usize, epoch: i32) -> Result<SolarTerm, CalendarError> {
    let minutes = i64::from(year - LUNAR_MIN_YEAR) * TROPICAL_YEAR_CENTIMINUTES / 100
        + SOLAR_TERM_MINUTES[index]
        + SOLAR_TERM_EPOCH_MINUTES;
    let offset = i32::try_from(minutes.div_euclid(MINUTES_PER_DAY)).map_err(|_| {
        CalendarError::YearOutOfRange {
            year,
            min: LUNAR_MIN_YEAR,
            max: LUNAR_MAX_YEAR,
        }
    })?;
    let date = SolarDate::from_jdn(epoch + offset).ok_or(CalendarError::YearOutOfRange {
        year,
        min: LUNAR_MIN_YEAR,
        max: LUNAR_MAX_YEAR,
    })?;
    Ok(SolarTerm {
        index: u8::try_from(index).unwrap_or_default(),
        name: SOLAR_TERMS[index],
        date,
    })
}

/// The 24 solar terms of a Gregorian year, 小寒 first.
///
/// ```
/// use lunar_tibetan::{SolarDate, solar_terms};
///
/// let terms = solar_terms(2024).unwrap();
/// assert_eq!(terms[2].name(), "立春");
/// assert_eq!(terms[2].date(), SolarDate::new(2024, 2, 4).unwrap());
/// ```
///
/// # Errors
/// `YearOutOfRange` outside 1900–2100.
pub fn solar_terms(year: i32) -> Result<Vec<SolarTerm>, CalendarError> {
    check_year(year)?;
    let epoch = epoch_jdn()?;
    (0..SOLAR_TERM_COUNT)
        .map(|index| term_in(year, index, epoch))
        .collect()
}

/// Date of the named term in `year`.
///
/// # Errors
/// `YearOutOfRange` outside 1900–2100, `InvalidFormat` for an unknown name.
pub fn solar_term_date(year: i32, name: &str) -> Result<SolarDate, CalendarError> {
    check_year(year)?;
    let index = SOLAR_TERMS
        .iter()
        .position(|&term| term == name)
        .ok_or_else(|| CalendarError::InvalidFormat(format!("unknown solar term {name}")))?;
    Ok(term_in(year, index, epoch_jdn()?)?.date)
}

/// The solar term starting on `date`, if any.
pub fn solar_term_on(date: SolarDate) -> Option<SolarTerm> {
    solar_terms(i32::from(date.year()))
        .ok()?
        .into_iter()
        .find(|term| term.date == date)
}

/// First solar term on or after `from`, rolling over into the next year.
///
/// `None` once past 冬至 2100.
pub fn next_solar_term(from: SolarDate) -> Option<SolarTerm> {
    let year = i32::from(from.year());
    [year, year + 1]
        .into_iter()
        .filter_map(|y| solar_terms(y).ok())
        .flatten()
        .find(|term| term.date >= from)
}

/// The three 伏 periods of a summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DogDays {
    /// 初伏: the third 庚 day counting from 夏至
    pub chufu: SolarDate,
    /// 中伏: ten days after 初伏
    pub zhongfu: SolarDate,
    /// 末伏: the first 庚 day counting from 立秋
    pub mofu: SolarDate,
}

impl DogDays {
    /// Last day of 末伏.
    pub fn end(&self) -> Option<SolarDate> {
        self.mofu.add_days(i32::from(DOG_DAYS_PERIOD) - 1)
    }
}

fn geng_days_from(start: SolarDate) -> impl Iterator<Item = SolarDate> {
    (0..)
        .map_while(move |offset| start.add_days(offset))
        .filter(|day| day_stem(day.jdn()) == GENG_STEM)
}

/// 三伏 of a Gregorian year.
///
/// ```
/// use lunar_tibetan::{SolarDate, dog_days};
///
/// let sanfu = dog_days(2024).unwrap();
/// assert_eq!(sanfu.chufu, SolarDate::new(2024, 7, 15).unwrap());
/// ```
///
/// # Errors
/// `YearOutOfRange` outside 1900–2100.
pub fn dog_days(year: i32) -> Result<DogDays, CalendarError> {
    let terms = solar_terms(year)?;
    let out_of_range = || CalendarError::YearOutOfRange {
        year,
        min: LUNAR_MIN_YEAR,
        max: LUNAR_MAX_YEAR,
    };
    let chufu = geng_days_from(terms[SUMMER_SOLSTICE].date)
        .nth(2)
        .ok_or_else(out_of_range)?;
    let zhongfu = chufu
        .add_days(i32::from(DOG_DAYS_PERIOD))
        .ok_or_else(out_of_range)?;
    let mofu = geng_days_from(terms[START_OF_AUTUMN].date)
        .next()
        .ok_or_else(out_of_range)?;
    Ok(DogDays {
        chufu,
        zhongfu,
        mofu,
    })
}

/// One of the nine 数九 periods after the winter solstice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NinePeriod {
    pub name: &'static str,
    pub start: SolarDate,
    /// Last day of the period, inclusive
    pub end: SolarDate,
}

/// 数九: nine nine-day periods starting on 冬至 of `year`.
///
/// # Errors
/// `YearOutOfRange` outside 1900–2100.
pub fn nine_periods(year: i32) -> Result<Vec<NinePeriod>, CalendarError> {
    let winter_solstice = solar_terms(year)?[WINTER_SOLSTICE].date;
    let length = i32::from(NINE_PERIOD_DAYS);
    NINE_PERIODS
        .iter()
        .zip(0..)
        .map(|(&name, i)| {
            let start = winter_solstice.add_days(i * length);
            let end = winter_solstice.add_days((i + 1) * length - 1);
            match (start, end) {
                (Some(start), Some(end)) => Ok(NinePeriod { name, start, end }),
                _ => Err(CalendarError::YearOutOfRange {
                    year,
                    min: LUNAR_MIN_YEAR,
                    max: LUNAR_MAX_YEAR,
                }),
            }
        })
        .collect()
}
