use anyhow::{anyhow, Result};
use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime};
use rusqlite::Connection;
use salah::prelude::*;

use crate::db::repository::{CacheRepo, CacheSource};
use crate::models::Timetable;

/// Minutes before Fajr that mark Imsak, matching the AlAdhan default the
/// published imsakiyya tables use.
const IMSAK_OFFSET_MIN: i64 = 10;

/// Offline astronomical source for daily time tables.
pub struct TimetableCalculator {
    pub lat: f64,
    pub lng: f64,
    pub method_str: String,
    pub madhab_str: String,
    pub tz_offset_minutes: i32,
}

#[derive(Debug, Clone, Copy)]
struct SolarTimes {
    fajr: NaiveTime,
    sunrise: NaiveTime,
    dhuhr: NaiveTime,
    asr: NaiveTime,
    maghrib: NaiveTime,
    isha: NaiveTime,
}

impl TimetableCalculator {
    pub fn new(
        lat: f64,
        lng: f64,
        method: &str,
        madhab: &str,
        tz_offset_minutes: i32,
    ) -> Result<Self> {
        // Validate method + madhab early
        parse_method(method)?;
        parse_madhab(madhab)?;
        Ok(Self {
            lat,
            lng,
            method_str: method.to_string(),
            madhab_str: madhab.to_string(),
            tz_offset_minutes,
        })
    }

    fn solar_times(&self, date: NaiveDate) -> Result<SolarTimes> {
        let coords = Coordinates::new(self.lat, self.lng);
        let method = parse_method(&self.method_str)?;
        let madhab = parse_madhab(&self.madhab_str)?;
        let params = Configuration::with(method, madhab);

        let times = PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
            .map_err(|e| anyhow!("Prayer calculation failed: {}", e))?;

        let offset = FixedOffset::east_opt(self.tz_offset_minutes * 60)
            .ok_or_else(|| anyhow!("Invalid timezone offset: {}", self.tz_offset_minutes))?;

        let to_local = |utc: chrono::DateTime<chrono::Utc>| -> NaiveTime {
            utc.with_timezone(&offset).time()
        };

        Ok(SolarTimes {
            fajr: to_local(times.time(Prayer::Fajr)),
            sunrise: to_local(times.time(Prayer::Sunrise)),
            dhuhr: to_local(times.time(Prayer::Dhuhr)),
            asr: to_local(times.time(Prayer::Asr)),
            maghrib: to_local(times.time(Prayer::Maghrib)),
            isha: to_local(times.time(Prayer::Isha)),
        })
    }

    /// Full eight-entry table for one date. Imsak is Fajr minus a fixed
    /// offset; Midnight is the midpoint of Maghrib and the next day's Fajr.
    pub fn timetable_for_date(&self, date: NaiveDate) -> Result<Timetable> {
        let today = self.solar_times(date)?;
        let tomorrow = self.solar_times(date + Duration::days(1))?;

        let imsak = today.fajr - Duration::minutes(IMSAK_OFFSET_MIN);
        let midnight = islamic_midnight(today.maghrib, tomorrow.fajr);

        let fmt = |t: NaiveTime| t.format("%H:%M").to_string();
        Ok(Timetable {
            imsak: fmt(imsak),
            fajr: fmt(today.fajr),
            sunrise: fmt(today.sunrise),
            dhuhr: fmt(today.dhuhr),
            asr: fmt(today.asr),
            maghrib: fmt(today.maghrib),
            isha: fmt(today.isha),
            midnight: fmt(midnight),
        })
    }

    /// Fill the cache for `count` days starting at `from`, computing only
    /// the missing dates.
    pub fn ensure_cached(&self, conn: &Connection, from: NaiveDate, count: u32) -> Result<()> {
        for i in 0..count as i64 {
            let date = from + Duration::days(i);
            let date_str = date.format("%Y-%m-%d").to_string();

            if CacheRepo::get_for_date(conn, &date_str)?.is_none() {
                let table = self.timetable_for_date(date)?;
                CacheRepo::store(conn, &date_str, &table, None, CacheSource::Computed)?;
            }
        }
        Ok(())
    }

    /// Get the table from cache, or compute and cache it.
    pub fn get_cached_or_compute(&self, conn: &Connection, date: NaiveDate) -> Result<Timetable> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if let Some(cached) = CacheRepo::get_for_date(conn, &date_str)? {
            return Ok(cached);
        }

        let table = self.timetable_for_date(date)?;
        CacheRepo::store(conn, &date_str, &table, None, CacheSource::Computed)?;
        Ok(table)
    }
}

/// Midpoint of the night between sunset and the next dawn, wrapping across
/// midnight when needed.
fn islamic_midnight(maghrib: NaiveTime, next_fajr: NaiveTime) -> NaiveTime {
    let day_secs = 24 * 3600i64;
    let m = seconds_from_midnight(maghrib);
    let f = seconds_from_midnight(next_fajr) + day_secs;
    let mid = (m + (f - m) / 2) % day_secs;
    NaiveTime::from_num_seconds_from_midnight_opt(mid as u32, 0).unwrap_or(NaiveTime::MIN)
}

fn seconds_from_midnight(t: NaiveTime) -> i64 {
    use chrono::Timelike;
    i64::from(t.num_seconds_from_midnight())
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(anyhow!("Unknown calculation method: '{}'", s)),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(anyhow!("Unknown madhab: '{}'", s)),
    }
}

pub const CALC_METHODS: &[&str] = &[
    "MuslimWorldLeague",
    "Egyptian",
    "Karachi",
    "UmmAlQura",
    "Dubai",
    "MoonsightingCommittee",
    "NorthAmerica",
    "Kuwait",
    "Qatar",
    "Singapore",
    "Tehran",
    "Turkey",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_midpoint_wraps_past_midnight() {
        let maghrib = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        let fajr = NaiveTime::from_hms_opt(4, 30, 0).unwrap();
        // 10h night, midpoint 5h after maghrib = 23:30
        assert_eq!(
            islamic_midnight(maghrib, fajr),
            NaiveTime::from_hms_opt(23, 30, 0).unwrap()
        );

        let late_maghrib = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        // 8h30 night, midpoint 4h15 after maghrib = 00:15
        assert_eq!(
            islamic_midnight(late_maghrib, NaiveTime::from_hms_opt(4, 30, 0).unwrap()),
            NaiveTime::from_hms_opt(0, 15, 0).unwrap()
        );
    }

    #[test]
    fn rejects_unknown_method_and_madhab() {
        assert!(TimetableCalculator::new(36.8, 10.1, "NotAMethod", "Shafi", 60).is_err());
        assert!(TimetableCalculator::new(36.8, 10.1, "Egyptian", "NotAMadhab", 60).is_err());
        assert!(TimetableCalculator::new(36.8, 10.1, "Egyptian", "Shafi", 60).is_ok());
    }

    #[test]
    fn computed_table_parses_and_is_ordered() {
        let calc = TimetableCalculator::new(36.8065, 10.1815, "MuslimWorldLeague", "Shafi", 60)
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let table = calc.timetable_for_date(date).unwrap();

        let parsed = crate::engine::ParsedTimetable::try_from(&table).unwrap();
        use crate::models::PrayerKey::*;
        assert!(parsed.minutes(Imsak) < parsed.minutes(Fajr));
        assert!(parsed.minutes(Fajr) < parsed.minutes(Sunrise));
        assert!(parsed.minutes(Sunrise) < parsed.minutes(Dhuhr));
        assert!(parsed.minutes(Dhuhr) < parsed.minutes(Asr));
        assert!(parsed.minutes(Asr) < parsed.minutes(Maghrib));
        assert!(parsed.minutes(Maghrib) < parsed.minutes(Isha));
        assert_eq!(
            parsed.minutes(Fajr) - parsed.minutes(Imsak),
            IMSAK_OFFSET_MIN as u32
        );
    }

    #[test]
    fn ensure_cached_fills_only_missing_days() {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::migrations::run_migrations(&conn).unwrap();

        let calc = TimetableCalculator::new(36.8065, 10.1815, "MuslimWorldLeague", "Shafi", 60)
            .unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 2, 19).unwrap();
        calc.ensure_cached(&conn, start, 3).unwrap();

        let days = CacheRepo::get_range(&conn, "2026-02-19", "2026-02-21").unwrap();
        assert_eq!(days.len(), 3);

        // A second pass must not disturb existing rows
        calc.ensure_cached(&conn, start, 3).unwrap();
        assert_eq!(
            CacheRepo::get_range(&conn, "2026-02-19", "2026-02-21").unwrap().len(),
            3
        );
    }
}
