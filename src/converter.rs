use crate::config::ConverterConfig;
use crate::festival::{CalendarType, Festival, FestivalType, festivals};
use crate::lunar::{ConversionMode, LunarDate, solar_to_lunar};
use crate::solar_term::{SolarTerm, solar_term_on};
use crate::tibetan::{TibetanDate, solar_to_tibetan};
use crate::{CalendarError, SolarDate};
use serde::Serialize;
use tracing::debug;

/// One Gregorian day seen through every supported calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    solar: SolarDate,
    lunar: Option<LunarDate>,
    tibetan: TibetanDate,
    solar_term: Option<SolarTerm>,
    festivals: Vec<&'static Festival>,
    special_day: Option<&'static str>,
}

impl CalendarDay {
    /// The converted Gregorian date
    pub const fn solar(&self) -> SolarDate {
        self.solar
    }

    /// Lunar date. Always present in exact mode; in approximate mode `None`
    /// when the Gregorian day has no lunar counterpart (the 31st).
    pub const fn lunar(&self) -> Option<&LunarDate> {
        self.lunar.as_ref()
    }

    /// Approximate Tibetan date; available in every mode
    pub const fn tibetan(&self) -> &TibetanDate {
        &self.tibetan
    }

    /// Solar term starting on this day, if any.
    pub const fn solar_term(&self) -> Option<&SolarTerm> {
        self.solar_term.as_ref()
    }

    /// Solar, then lunar, then Tibetan festivals on this day.
    /// Empty when festival lookup is disabled.
    pub fn festivals(&self) -> &[&'static Festival] {
        &self.festivals
    }

    /// Description when the Tibetan day is a special day.
    pub const fn special_day(&self) -> Option<&'static str> {
        self.special_day
    }
}

/// Applies the lunar and Tibetan conversions and festival lookup to a date.
///
/// ```
/// use lunar_tibetan::{Converter, ConverterConfig};
///
/// let converter = Converter::new(ConverterConfig::default());
/// let day = converter.convert("2024-09-17".parse().unwrap()).unwrap();
/// assert_eq!(day.lunar().unwrap().to_string(), "甲辰年八月十五");
/// assert_eq!(day.festivals()[0].name, "中秋节");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub const fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts one date.
    ///
    /// # Errors
    /// In exact mode, propagates the lunar conversion error, e.g.
    /// `DateOutOfRange` for dates outside the lunar table. Approximate mode
    /// never fails and leaves the lunar date empty instead.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn convert(&self, solar: SolarDate) -> Result<CalendarDay, CalendarError> {
        let lunar = match (solar_to_lunar(solar, self.config.mode()), self.config.mode()) {
            (Ok(lunar), _) => Some(lunar),
            (Err(err), ConversionMode::Approximate) => {
                debug!(%solar, %err, "no approximate lunar date");
                None
            }
            (Err(err), ConversionMode::Exact) => return Err(err),
        };
        let tibetan = solar_to_tibetan(solar);
        let solar_term = solar_term_on(solar);
        let festivals = if self.config.festivals() {
            festivals_on_day(solar, solar_term.as_ref(), lunar.as_ref(), &tibetan)
        } else {
            Vec::new()
        };
        let (_, special_day) = tibetan.special_day();
        Ok(CalendarDay {
            solar,
            lunar,
            tibetan,
            solar_term,
            festivals,
            special_day,
        })
    }
}

fn festivals_on_day(
    solar: SolarDate,
    solar_term: Option<&SolarTerm>,
    lunar: Option<&LunarDate>,
    tibetan: &TibetanDate,
) -> Vec<&'static Festival> {
    let on = |calendar: CalendarType, month: u8, day: u8| {
        festivals(calendar).filter(move |f| f.month == month && f.day == day)
    };
    let mut found: Vec<&'static Festival> = festivals(CalendarType::Solar)
        .filter(|f| match f.festival_type {
            FestivalType::SolarTerm => solar_term.is_some_and(|term| term.name() == f.name),
            _ => f.month == solar.month() && f.day == solar.day(),
        })
        .collect();
    // leap months repeat no festivals
    if let Some(lunar) = lunar.filter(|lunar| !lunar.is_leap_month()) {
        found.extend(on(CalendarType::Lunar, lunar.month(), lunar.day()));
    }
    found.extend(on(CalendarType::Tibetan, tibetan.month(), tibetan.day()));
    found
}
