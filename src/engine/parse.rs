use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::models::{PrayerKey, Timetable};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeError {
    #[error("invalid clock time '{0}': expected HH:MM")]
    Malformed(String),
    #[error("invalid {key} time '{value}': {source}")]
    BadEntry {
        key: PrayerKey,
        value: String,
        source: Box<ParseTimeError>,
    },
}

/// A wall-clock time of day with no date attached.
///
/// Hour and minute ranges are deliberately not validated; the external
/// source is trusted for shape ("HH:MM") but not re-checked for range,
/// matching the permissive upstream format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Total minutes since midnight (h*60 + m).
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Concrete instant on the given date, at zero seconds.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse an AlAdhan-style "HH:MM (TZ)" string, dropping the trailing
/// parenthetical annotation when present.
pub fn parse_clock(s: &str) -> Result<ClockTime, ParseTimeError> {
    let clean = match s.find('(') {
        Some(idx) => s[..idx].trim(),
        None => s.trim(),
    };

    let (h, m) = clean
        .split_once(':')
        .ok_or_else(|| ParseTimeError::Malformed(s.to_string()))?;
    let hour = h
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
    let minute = m
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;

    Ok(ClockTime::new(hour, minute))
}

/// Convenience: time string straight to minutes since midnight.
pub fn time_to_minutes(s: &str) -> Result<u32, ParseTimeError> {
    Ok(parse_clock(s)?.minutes_from_midnight())
}

/// A fully parsed day table. Building this is the single point where
/// malformed input surfaces; every derivation downstream is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTimetable {
    times: [ClockTime; 8],
}

impl ParsedTimetable {
    pub fn get(&self, key: PrayerKey) -> ClockTime {
        self.times[key_index(key)]
    }

    pub fn minutes(&self, key: PrayerKey) -> u32 {
        self.get(key).minutes_from_midnight()
    }
}

fn key_index(key: PrayerKey) -> usize {
    match key {
        PrayerKey::Imsak => 0,
        PrayerKey::Fajr => 1,
        PrayerKey::Sunrise => 2,
        PrayerKey::Dhuhr => 3,
        PrayerKey::Asr => 4,
        PrayerKey::Maghrib => 5,
        PrayerKey::Isha => 6,
        PrayerKey::Midnight => 7,
    }
}

impl TryFrom<&Timetable> for ParsedTimetable {
    type Error = ParseTimeError;

    fn try_from(table: &Timetable) -> Result<Self, Self::Error> {
        let mut times = [ClockTime::new(0, 0); 8];
        for key in PrayerKey::all() {
            let raw = table.get(key);
            times[key_index(key)] = parse_clock(raw).map_err(|e| ParseTimeError::BadEntry {
                key,
                value: raw.to_string(),
                source: Box::new(e),
            })?;
        }
        Ok(Self { times })
    }
}

/// Shared fixture for engine tests: the mock table from the upstream suite.
#[cfg(test)]
pub(crate) fn sample_table() -> Timetable {
    Timetable {
        imsak: "04:30 (CET)".to_string(),
        fajr: "04:45 (CET)".to_string(),
        sunrise: "06:30 (CET)".to_string(),
        dhuhr: "12:30 (CET)".to_string(),
        asr: "15:45 (CET)".to_string(),
        maghrib: "18:30 (CET)".to_string(),
        isha: "20:00 (CET)".to_string(),
        midnight: "00:00 (CET)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_time_with_timezone_annotation() {
        assert_eq!(parse_clock("04:30 (CET)").unwrap(), ClockTime::new(4, 30));
    }

    #[test]
    fn parses_time_without_annotation() {
        assert_eq!(parse_clock("12:45").unwrap(), ClockTime::new(12, 45));
    }

    #[test]
    fn parses_midnight() {
        assert_eq!(parse_clock("00:00").unwrap(), ClockTime::new(0, 0));
    }

    #[test]
    fn does_not_range_check_components() {
        // Shape is checked, range is not.
        assert_eq!(parse_clock("25:90").unwrap(), ClockTime::new(25, 90));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(parse_clock("ab:cd").is_err());
        assert!(parse_clock("0430").is_err());
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn minutes_conversion_matches_arithmetic() {
        for hour in 0..24 {
            for minute in (0..60).step_by(7) {
                let s = format!("{:02}:{:02}", hour, minute);
                assert_eq!(time_to_minutes(&s).unwrap(), hour * 60 + minute);
            }
        }
        assert_eq!(time_to_minutes("04:30 (CET)").unwrap(), 270);
        assert_eq!(time_to_minutes("12:00").unwrap(), 720);
        assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    }

    #[test]
    fn clock_time_on_date_zeroes_seconds() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        let dt = ClockTime::new(4, 30).on(date);
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-02-19 04:30:00");
    }

    #[test]
    fn parsed_timetable_reports_offending_entry() {
        let mut table = sample_table();
        table.asr = "bogus".to_string();
        let err = ParsedTimetable::try_from(&table).unwrap_err();
        match err {
            ParseTimeError::BadEntry { key, .. } => assert_eq!(key, PrayerKey::Asr),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parsed_timetable_round_trips_sample() {
        let parsed = ParsedTimetable::try_from(&sample_table()).unwrap();
        assert_eq!(parsed.get(PrayerKey::Imsak), ClockTime::new(4, 30));
        assert_eq!(parsed.minutes(PrayerKey::Maghrib), 18 * 60 + 30);
    }
}
