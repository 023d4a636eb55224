//! Reminder rules and their yearly occurrences.
//!
//! Rules are plain configuration. Computing when a rule fires is pure;
//! delivering the notification is left to the caller.

use crate::consts::{DEFAULT_REMINDER_TIME, MAX_MONTH, TIME_SEPARATOR};
use crate::festival::{CalendarType, Festival, FestivalType, festivals};
use crate::lunar::lunar_to_solar;
use crate::names::{lunar_day_name, lunar_month_name};
use crate::prelude::*;
use crate::solar_term::solar_terms;
use crate::{CalendarError, SolarDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;
const NEW_MOON_DAY: u8 = 1;
const FULL_MOON_DAY: u8 = 15;

/// A validated wall-clock time, `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:02}:{:02}", "hour", "minute")]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// # Errors
    /// Returns `InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, CalendarError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE {
            return Err(CalendarError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        let (hour, minute) = DEFAULT_REMINDER_TIME;
        Self { hour, minute }
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidTime(s.to_owned());
        let (hour, minute) = s.trim().split_once(TIME_SEPARATOR).ok_or_else(invalid)?;
        if minute.len() != 2 || hour.is_empty() || hour.len() > 2 {
            return Err(invalid());
        }
        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// What a reminder rule fires for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// 初一 of every lunar month
    #[display(fmt = "初一提醒")]
    NewMoon,
    /// 十五 of every lunar month
    #[display(fmt = "十五提醒")]
    FullMoon,
    #[display(fmt = "佛教节日")]
    BuddhistFestival,
    #[display(fmt = "传统节日")]
    TraditionalFestival,
    #[display(fmt = "节气")]
    SolarTerm,
    #[display(fmt = "藏历节日")]
    TibetanFestival,
    #[display(fmt = "自定义")]
    Custom,
}

/// A user-configurable reminder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderRule {
    pub id: String,
    pub name: String,
    pub kind: ReminderKind,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Days before the event to notify
    #[serde(default)]
    pub advance_days: u16,
    #[serde(default)]
    pub time: TimeOfDay,
}

const fn enabled_by_default() -> bool {
    true
}

/// One firing of a rule: the event and when to announce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    pub title: String,
    pub event_date: SolarDate,
    pub notify_on: SolarDate,
    pub time: TimeOfDay,
}

impl ReminderRule {
    /// Creates an enabled rule firing on the day of the event at 09:00.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ReminderKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            enabled: true,
            advance_days: 0,
            time: TimeOfDay::default(),
        }
    }

    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn with_advance_days(mut self, days: u16) -> Self {
        self.advance_days = days;
        self
    }

    #[must_use]
    pub const fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Checks that the rule has an id and a name.
    ///
    /// # Errors
    /// Returns `InvalidFormat` naming the empty field.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.id.trim().is_empty() {
            return Err(CalendarError::InvalidFormat("reminder id is empty".to_owned()));
        }
        if self.name.trim().is_empty() {
            return Err(CalendarError::InvalidFormat(format!(
                "reminder {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    /// Date to notify for an event on `event`, `advance_days` earlier.
    pub fn notify_on(&self, event: SolarDate) -> Option<SolarDate> {
        event.add_days(-i32::from(self.advance_days))
    }

    /// Everything this rule fires for in `year`, in chronological order.
    ///
    /// Lunar rules use lunar year `year`, the Tibetan rule Tibetan year
    /// `year`, solar-term rules Gregorian year `year`. Disabled and custom
    /// rules yield nothing, and events whose date does not exist that year
    /// are skipped.
    #[tracing::instrument(level = "debug", skip(self), fields(rule = %self.id))]
    pub fn occurrences(&self, year: i32) -> Vec<Occurrence> {
        if !self.enabled {
            return Vec::new();
        }
        let events: Vec<(String, Result<SolarDate, CalendarError>)> = match self.kind {
            ReminderKind::NewMoon => monthly(year, NEW_MOON_DAY),
            ReminderKind::FullMoon => monthly(year, FULL_MOON_DAY),
            ReminderKind::BuddhistFestival => {
                festival_events(year, CalendarType::Lunar, Some(FestivalType::Buddhist))
            }
            ReminderKind::TraditionalFestival => {
                festival_events(year, CalendarType::Lunar, Some(FestivalType::Traditional))
            }
            ReminderKind::TibetanFestival => festival_events(year, CalendarType::Tibetan, None),
            ReminderKind::SolarTerm => solar_term_events(year),
            ReminderKind::Custom => Vec::new(),
        };

        let mut occurrences: Vec<Occurrence> = events
            .into_iter()
            .filter_map(|(title, event)| {
                let event_date = event
                    .inspect_err(|err| debug!(%title, %err, "skipping reminder event"))
                    .ok()?;
                let notify_on = self.notify_on(event_date)?;
                Some(Occurrence {
                    title,
                    event_date,
                    notify_on,
                    time: self.time,
                })
            })
            .collect();
        occurrences.sort_by_key(|o| o.event_date);
        occurrences
    }
}

fn monthly(year: i32, day: u8) -> Vec<(String, Result<SolarDate, CalendarError>)> {
    let day_name = lunar_day_name(day).unwrap_or_default();
    (1..=MAX_MONTH)
        .map(|month| {
            let title = lunar_month_name(month, false) + day_name;
            (title, lunar_to_solar(year, month, day, false))
        })
        .collect()
}

fn festival_events(
    year: i32,
    calendar: CalendarType,
    kind: Option<FestivalType>,
) -> Vec<(String, Result<SolarDate, CalendarError>)> {
    festivals(calendar)
        .filter(|f| kind.is_none_or(|k| f.festival_type == k))
        .map(|f: &Festival| (f.name.to_owned(), f.solar_date_in(year)))
        .collect()
}

fn solar_term_events(year: i32) -> Vec<(String, Result<SolarDate, CalendarError>)> {
    match solar_terms(year) {
        Ok(terms) => terms
            .into_iter()
            .map(|term| (term.name().to_owned(), Ok(term.date())))
            .collect(),
        Err(err) => vec![("节气".to_owned(), Err(err))],
    }
}

/// The built-in reminder rules.
pub fn default_rules() -> Vec<ReminderRule> {
    let morning = TimeOfDay { hour: 8, minute: 0 };
    vec![
        ReminderRule::new("new-moon", "初一提醒", ReminderKind::NewMoon),
        ReminderRule::new("full-moon", "十五提醒", ReminderKind::FullMoon),
        ReminderRule::new("buddhist-festival", "佛教节日提醒", ReminderKind::BuddhistFestival)
            .with_advance_days(1)
            .with_time(morning),
        ReminderRule::new("traditional-festival", "传统节日提醒", ReminderKind::TraditionalFestival),
        ReminderRule::new("tibetan-festival", "藏历节日提醒", ReminderKind::TibetanFestival)
            .with_advance_days(1)
            .with_time(morning),
    ]
}
