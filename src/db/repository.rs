use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;

use crate::models::{CalendarDay, FastEntry, FastStatus, FastingStats, Timetable};

// ─── Cached time tables ──────────────────────────────────────────────────────

/// Where a cached row came from: offline computation or an imported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    Computed,
    Imported,
}

impl CacheSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheSource::Computed => "computed",
            CacheSource::Imported => "imported",
        }
    }
}

pub struct CacheRepo;

impl CacheRepo {
    pub fn get_for_date(conn: &Connection, date: &str) -> Result<Option<Timetable>> {
        let row = conn
            .query_row(
                "SELECT imsak, fajr, sunrise, dhuhr, asr, maghrib, isha, midnight
                 FROM timetable_cache WHERE date = ?1",
                params![date],
                |row| {
                    Ok(Timetable {
                        imsak: row.get(0)?,
                        fajr: row.get(1)?,
                        sunrise: row.get(2)?,
                        dhuhr: row.get(3)?,
                        asr: row.get(4)?,
                        maghrib: row.get(5)?,
                        isha: row.get(6)?,
                        midnight: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    pub fn store(
        conn: &Connection,
        date: &str,
        table: &Timetable,
        hijri_day: Option<&str>,
        source: CacheSource,
    ) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO timetable_cache
                 (date, imsak, fajr, sunrise, dhuhr, asr, maghrib, isha, midnight, hijri_day, source)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                date,
                table.imsak,
                table.fajr,
                table.sunrise,
                table.dhuhr,
                table.asr,
                table.maghrib,
                table.isha,
                table.midnight,
                hijri_day,
                source.as_str(),
            ],
        )?;
        Ok(())
    }

    /// All cached rows in an inclusive date range, ordered by date.
    pub fn get_range(conn: &Connection, start: &str, end: &str) -> Result<Vec<CalendarDay>> {
        let mut stmt = conn.prepare(
            "SELECT date, imsak, fajr, sunrise, dhuhr, asr, maghrib, isha, midnight, hijri_day
             FROM timetable_cache WHERE date >= ?1 AND date <= ?2 ORDER BY date",
        )?;

        let rows = stmt.query_map(params![start, end], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Timetable {
                    imsak: row.get(1)?,
                    fajr: row.get(2)?,
                    sunrise: row.get(3)?,
                    dhuhr: row.get(4)?,
                    asr: row.get(5)?,
                    maghrib: row.get(6)?,
                    isha: row.get(7)?,
                    midnight: row.get(8)?,
                },
                row.get::<_, Option<String>>(9)?,
            ))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (date_str, timetable, hijri_day) = r?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                rusqlite::Error::InvalidParameterName(format!("bad date '{date_str}': {e}"))
            })?;
            result.push(CalendarDay { date, timetable, hijri_day });
        }
        Ok(result)
    }

    pub fn clear_all(conn: &Connection) -> Result<()> {
        conn.execute("DELETE FROM timetable_cache", [])?;
        Ok(())
    }
}

// ─── Fasting log ─────────────────────────────────────────────────────────────

pub struct FastingRepo;

impl FastingRepo {
    pub fn mark(conn: &Connection, date: &str, status: FastStatus) -> Result<()> {
        conn.execute(
            "INSERT INTO fasting_log (date, status) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET status = ?2",
            params![date, status.as_str()],
        )?;
        Ok(())
    }

    pub fn get(conn: &Connection, date: &str) -> Result<Option<FastEntry>> {
        let row = conn
            .query_row(
                "SELECT date, status FROM fasting_log WHERE date = ?1",
                params![date],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((date, status)) => Ok(Some(FastEntry {
                date,
                status: FastStatus::from_str(&status)
                    .map_err(|e| anyhow::anyhow!("bad fasting_log row: {e}"))?,
            })),
        }
    }

    pub fn get_range(conn: &Connection, start: &str, end: &str) -> Result<Vec<FastEntry>> {
        let mut stmt = conn.prepare(
            "SELECT date, status FROM fasting_log
             WHERE date >= ?1 AND date <= ?2 ORDER BY date",
        )?;

        let rows = stmt.query_map(params![start, end], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (date, status) = r?;
            result.push(FastEntry {
                date,
                status: FastStatus::from_str(&status)
                    .map_err(|e| anyhow::anyhow!("bad fasting_log row: {e}"))?,
            });
        }
        Ok(result)
    }

    /// Totals and streaks over an inclusive date range (the season).
    pub fn stats(conn: &Connection, start: &str, end: &str) -> Result<FastingStats> {
        let entries = Self::get_range(conn, start, end)?;

        let fasted = entries
            .iter()
            .filter(|e| e.status == FastStatus::Fasted)
            .count() as u32;
        let missed = entries.len() as u32 - fasted;

        let fasted_dates: Vec<NaiveDate> = entries
            .iter()
            .filter(|e| e.status == FastStatus::Fasted)
            .filter_map(|e| NaiveDate::parse_from_str(&e.date, "%Y-%m-%d").ok())
            .collect();

        let (current_streak, best_streak) = streaks(&fasted_dates);

        Ok(FastingStats { fasted, missed, current_streak, best_streak })
    }
}

/// (current, best) run lengths of consecutive dates. `dates` must be sorted
/// ascending; current is the run ending at the latest logged date.
fn streaks(dates: &[NaiveDate]) -> (u32, u32) {
    if dates.is_empty() {
        return (0, 0);
    }

    let mut best = 1u32;
    let mut run = 1u32;
    for window in dates.windows(2) {
        if window[1] == window[0] + chrono::Duration::days(1) {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }
    (run, best)
}

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn table(maghrib: &str) -> Timetable {
        Timetable {
            imsak: "04:30".into(),
            fajr: "04:45".into(),
            sunrise: "06:30".into(),
            dhuhr: "12:30".into(),
            asr: "15:45".into(),
            maghrib: maghrib.into(),
            isha: "20:00".into(),
            midnight: "00:07".into(),
        }
    }

    #[test]
    fn cache_round_trip_preserves_raw_strings() {
        let conn = test_conn();
        let t = Timetable {
            imsak: "04:30 (CET)".into(),
            ..table("18:30")
        };
        CacheRepo::store(&conn, "2026-02-20", &t, Some("2"), CacheSource::Imported).unwrap();

        let got = CacheRepo::get_for_date(&conn, "2026-02-20").unwrap().unwrap();
        assert_eq!(got.imsak, "04:30 (CET)");
        assert_eq!(got.maghrib, "18:30");
        assert!(CacheRepo::get_for_date(&conn, "2026-02-21").unwrap().is_none());
    }

    #[test]
    fn store_replaces_existing_row() {
        let conn = test_conn();
        CacheRepo::store(&conn, "2026-02-20", &table("18:30"), None, CacheSource::Computed).unwrap();
        CacheRepo::store(&conn, "2026-02-20", &table("18:31"), None, CacheSource::Computed).unwrap();
        let got = CacheRepo::get_for_date(&conn, "2026-02-20").unwrap().unwrap();
        assert_eq!(got.maghrib, "18:31");
    }

    #[test]
    fn range_is_ordered_and_carries_hijri_label() {
        let conn = test_conn();
        CacheRepo::store(&conn, "2026-02-21", &table("18:31"), Some("3"), CacheSource::Imported).unwrap();
        CacheRepo::store(&conn, "2026-02-20", &table("18:30"), Some("2"), CacheSource::Imported).unwrap();

        let days = CacheRepo::get_range(&conn, "2026-02-19", "2026-03-20").unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
        assert_eq!(days[0].hijri_day.as_deref(), Some("2"));
    }

    #[test]
    fn fasting_mark_is_an_upsert() {
        let conn = test_conn();
        FastingRepo::mark(&conn, "2026-02-20", FastStatus::Fasted).unwrap();
        FastingRepo::mark(&conn, "2026-02-20", FastStatus::Missed).unwrap();

        let entry = FastingRepo::get(&conn, "2026-02-20").unwrap().unwrap();
        assert_eq!(entry.status, FastStatus::Missed);
    }

    #[test]
    fn fasting_stats_counts_and_streaks() {
        let conn = test_conn();
        FastingRepo::mark(&conn, "2026-02-19", FastStatus::Fasted).unwrap();
        FastingRepo::mark(&conn, "2026-02-20", FastStatus::Fasted).unwrap();
        FastingRepo::mark(&conn, "2026-02-21", FastStatus::Missed).unwrap();
        FastingRepo::mark(&conn, "2026-02-22", FastStatus::Fasted).unwrap();
        FastingRepo::mark(&conn, "2026-02-23", FastStatus::Fasted).unwrap();
        FastingRepo::mark(&conn, "2026-02-24", FastStatus::Fasted).unwrap();

        let stats = FastingRepo::stats(&conn, "2026-02-19", "2026-03-20").unwrap();
        assert_eq!(stats.fasted, 5);
        assert_eq!(stats.missed, 1);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.best_streak, 3);
    }

    #[test]
    fn meta_round_trip() {
        let conn = test_conn();
        assert!(MetaRepo::get(&conn, "setup_done").unwrap().is_none());
        MetaRepo::set(&conn, "setup_done", "1").unwrap();
        MetaRepo::set(&conn, "setup_done", "1").unwrap();
        assert_eq!(MetaRepo::get(&conn, "setup_done").unwrap().as_deref(), Some("1"));
    }
}
