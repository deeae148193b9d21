use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Deserialize;
use std::path::Path;

use crate::db::repository::{CacheRepo, CacheSource};
use crate::models::Timetable;

/// Subset of the AlAdhan calendar response we keep: the raw timings and
/// the date labels. Anything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct MonthResponse {
    code: i32,
    #[allow(dead_code)]
    status: Option<String>,
    data: Vec<DayInfo>,
}

#[derive(Debug, Deserialize)]
struct DayInfo {
    timings: Timetable,
    date: DayDate,
}

#[derive(Debug, Deserialize)]
struct DayDate {
    gregorian: GregorianDate,
    hijri: Option<HijriDate>,
}

#[derive(Debug, Deserialize)]
struct GregorianDate {
    /// "DD-MM-YYYY"
    date: String,
}

#[derive(Debug, Deserialize)]
struct HijriDate {
    day: Option<String>,
}

fn parse_gregorian(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y")
        .with_context(|| format!("Bad gregorian date '{}': expected DD-MM-YYYY", s))
}

/// Import an AlAdhan-format month JSON file into the timetable cache.
/// Returns the number of rows stored. Timings are kept verbatim, including
/// "(CET)" style annotations; the engine strips them at parse time.
pub fn import_month(conn: &Connection, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {:?}", path))?;
    let response: MonthResponse =
        serde_json::from_str(&content).context("Parsing AlAdhan month JSON")?;

    if response.code != 200 {
        bail!("Calendar file reports code {}, expected 200", response.code);
    }
    if response.data.is_empty() {
        bail!("Calendar file contains no days");
    }

    let mut stored = 0;
    for day in &response.data {
        let date = parse_gregorian(&day.date.gregorian.date)?;
        let date_str = date.format("%Y-%m-%d").to_string();
        let hijri_day = day
            .date
            .hijri
            .as_ref()
            .and_then(|h| h.day.as_deref());

        // Timings are stored verbatim; flag rows that will fail to parse
        // at display time so bad files are noticed early.
        for key in crate::models::PrayerKey::all() {
            let raw = day.timings.get(key);
            if crate::engine::time_to_minutes(raw).is_err() {
                log::warn!("{}: {} time '{}' is not HH:MM", date_str, key, raw);
            }
        }

        CacheRepo::store(conn, &date_str, &day.timings, hijri_day, CacheSource::Imported)?;
        stored += 1;
    }

    log::info!("Imported {} days from {:?}", stored, path);
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use std::io::Write;

    const SAMPLE: &str = r#"{
      "code": 200,
      "status": "OK",
      "data": [
        {
          "timings": {
            "Imsak": "04:30 (CET)", "Fajr": "04:40 (CET)", "Sunrise": "06:10 (CET)",
            "Dhuhr": "12:25 (CET)", "Asr": "15:40 (CET)", "Maghrib": "18:32 (CET)",
            "Isha": "19:52 (CET)", "Midnight": "00:21 (CET)"
          },
          "date": {
            "gregorian": { "date": "19-02-2026" },
            "hijri": { "day": "1" }
          }
        },
        {
          "timings": {
            "Imsak": "04:29 (CET)", "Fajr": "04:39 (CET)", "Sunrise": "06:09 (CET)",
            "Dhuhr": "12:25 (CET)", "Asr": "15:41 (CET)", "Maghrib": "18:33 (CET)",
            "Isha": "19:53 (CET)", "Midnight": "00:21 (CET)"
          },
          "date": {
            "gregorian": { "date": "20-02-2026" },
            "hijri": { "day": "2" }
          }
        }
      ]
    }"#;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn imports_month_rows_verbatim() {
        let conn = test_conn();
        let file = write_temp(SAMPLE);

        let stored = import_month(&conn, file.path()).unwrap();
        assert_eq!(stored, 2);

        let days = CacheRepo::get_range(&conn, "2026-02-19", "2026-02-20").unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].timetable.imsak, "04:30 (CET)");
        assert_eq!(days[0].hijri_day.as_deref(), Some("1"));
        assert_eq!(days[1].timetable.maghrib, "18:33 (CET)");
    }

    #[test]
    fn rejects_error_payload() {
        let conn = test_conn();
        let file = write_temp(r#"{ "code": 500, "status": "err", "data": [] }"#);
        assert!(import_month(&conn, file.path()).is_err());
    }

    #[test]
    fn rejects_bad_gregorian_date() {
        let conn = test_conn();
        let bad = SAMPLE.replace("19-02-2026", "2026-02-19");
        let file = write_temp(&bad);
        assert!(import_month(&conn, file.path()).is_err());
    }
}
