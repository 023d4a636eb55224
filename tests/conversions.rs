//! Cross-module properties of the public conversion API.

use std::time::{Duration, Instant};

use lunar_tibetan::{
    CalendarError, CalendarType, ConversionMode, Converter, ConverterConfig, LUNAR_MAX_YEAR,
    LUNAR_MIN_YEAR, SolarDate, default_rules, festival_on, festivals, festivals_for, is_special_day,
    lunar_new_year, lunar_to_solar, month_length, solar_to_lunar, solar_to_tibetan,
    tibetan_to_solar, year_length,
};

fn date(y: u16, m: u8, d: u8) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

#[test]
fn conversion_is_idempotent() {
    let converter = Converter::default();
    for d in [date(1900, 1, 31), date(2000, 1, 1), date(2023, 3, 22), date(2101, 1, 28)] {
        let first = converter.convert(d).unwrap();
        let second = converter.convert(d).unwrap();
        assert_eq!(first, second);
        assert_eq!(solar_to_tibetan(d), solar_to_tibetan(d));
    }
}

#[test]
fn every_day_since_1990_round_trips() {
    let first = lunar_new_year(1990).unwrap();
    let last = date(2101, 1, 28);
    let mut day = first;
    let mut previous: Option<(i32, u8, bool, u8)> = None;
    while day <= last {
        let lunar = solar_to_lunar(day, ConversionMode::Exact).unwrap();
        assert_eq!(lunar.to_solar().unwrap(), day, "{day}");

        let key = (lunar.year(), lunar.month(), lunar.is_leap_month(), lunar.day());
        if let Some((_, _, _, prev_day)) = previous {
            // days either advance by one or restart a month at 初一
            assert!(key.3 == prev_day + 1 || key.3 == 1, "{day}: {key:?} after {previous:?}");
        }
        previous = Some(key);
        day = day.add_days(1).unwrap();
    }
}

#[test]
fn year_lengths_match_new_year_spacing() {
    for year in LUNAR_MIN_YEAR..LUNAR_MAX_YEAR {
        let this = lunar_new_year(year).unwrap();
        let next = lunar_new_year(year + 1).unwrap();
        assert_eq!(next - this, i32::from(year_length(year).unwrap()), "year {year}");
    }
}

#[test]
fn month_lengths_are_29_or_30() {
    for year in LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR {
        for month in 1..=12 {
            assert!(matches!(month_length(year, month, false), Ok(29 | 30)));
        }
    }
}

#[test]
fn table_boundaries() {
    assert!(matches!(
        solar_to_lunar(date(1900, 1, 30), ConversionMode::Exact),
        Err(CalendarError::DateOutOfRange { .. })
    ));
    assert!(solar_to_lunar(date(1900, 1, 31), ConversionMode::Exact).is_ok());
    assert!(solar_to_lunar(date(2101, 1, 29), ConversionMode::Exact).unwrap_err().is_out_of_range());
    assert!(lunar_to_solar(2101, 1, 1, false).unwrap_err().is_out_of_range());
}

#[test]
fn january_belongs_to_previous_tibetan_year() {
    for year in [1950, 2000, 2026, 9999] {
        for day in 1..=31 {
            let tibetan = solar_to_tibetan(date(year, 1, day));
            assert_eq!(tibetan.month(), 12);
            assert_eq!(tibetan.year(), i32::from(year) - 1);
        }
    }
}

#[test]
fn tibetan_round_trip_within_supported_years() {
    let mut day = date(1950, 2, 1);
    let end = date(2051, 1, 31);
    while day <= end {
        let tibetan = solar_to_tibetan(day);
        if tibetan.day() <= 30 {
            assert_eq!(tibetan.to_solar().unwrap(), day, "{day}");
        }
        day = day.add_days(1).unwrap();
    }
    assert!(tibetan_to_solar(2051, 1, 1).unwrap_err().is_out_of_range());
}

#[test]
fn special_days_have_descriptions() {
    for day in 1..=31 {
        match is_special_day(day) {
            (true, Some(description)) => assert!(!description.is_empty()),
            (false, None) => assert!(![1, 8, 10, 15, 18, 25, 30].contains(&day)),
            other => panic!("day {day}: inconsistent {other:?}"),
        }
    }
}

#[test]
fn catalog_queries() {
    assert!(festivals_for(CalendarType::Lunar, 1).iter().any(|f| f.name == "春节"));
    assert!(
        festivals_for(CalendarType::Tibetan, 1)
            .iter()
            .any(|f| f.native_name == Some("ལོ་གསར"))
    );
    assert_eq!(festival_on(CalendarType::Lunar, 8, 15).unwrap().name, "中秋节");
    for calendar in CalendarType::ALL {
        for festival in festivals(calendar) {
            assert_eq!(festival.calendar_type, calendar);
            assert!(festivals_for(calendar, festival.month).contains(&festival));
        }
    }
}

#[test]
fn default_reminders_fire_every_year_in_range() {
    for rule in default_rules() {
        for year in [1950, 2000, 2024, 2050] {
            assert!(!rule.occurrences(year).is_empty(), "{} in {year}", rule.id);
        }
    }
}

#[test]
fn thousand_conversions_are_fast() {
    let converter = Converter::new(ConverterConfig::new());
    let d = date(2099, 12, 31);
    let start = Instant::now();
    for _ in 0..1000 {
        let day = converter.convert(d).unwrap();
        assert_eq!(day.lunar().unwrap().year(), 2099);
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn latency_does_not_grow_across_calls() {
    let converter = Converter::default();
    let dates: Vec<SolarDate> = (0..1000)
        .map(|i| date(2000, 1, 1).add_days(i * 36).unwrap())
        .collect();
    let mut timings = Vec::with_capacity(dates.len());
    for &d in &dates {
        let start = Instant::now();
        converter.convert(d).unwrap();
        timings.push(start.elapsed());
    }
    let first: Duration = timings[..100].iter().sum();
    let last: Duration = timings[900..].iter().sum();
    // slack absorbs scheduler noise on fast machines
    assert!(last <= first * 3 + Duration::from_millis(20), "first {first:?}, last {last:?}");
}

#[test]
fn concurrent_conversions_agree() {
    let converter = Converter::default();
    let dates: Vec<SolarDate> = (0..200)
        .map(|i| date(1950, 3, 1).add_days(i * 97).unwrap())
        .collect();
    let expected: Vec<_> = dates.iter().map(|&d| converter.convert(d).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| dates.iter().map(|&d| converter.convert(d).unwrap()).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SolarDate>();
    assert_send_sync::<lunar_tibetan::LunarDate>();
    assert_send_sync::<lunar_tibetan::TibetanDate>();
    assert_send_sync::<lunar_tibetan::CalendarDay>();
    assert_send_sync::<Converter>();
    assert_send_sync::<lunar_tibetan::ReminderRule>();
    assert_send_sync::<lunar_tibetan::SolarTerm>();
    assert_send_sync::<CalendarError>();
}
