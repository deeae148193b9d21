use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS timetable_cache (
            date      TEXT PRIMARY KEY,
            imsak     TEXT NOT NULL,
            fajr      TEXT NOT NULL,
            sunrise   TEXT NOT NULL,
            dhuhr     TEXT NOT NULL,
            asr       TEXT NOT NULL,
            maghrib   TEXT NOT NULL,
            isha      TEXT NOT NULL,
            midnight  TEXT NOT NULL,
            hijri_day TEXT,
            source    TEXT NOT NULL DEFAULT 'computed'
                      CHECK(source IN ('computed','imported'))
        );

        CREATE TABLE IF NOT EXISTS fasting_log (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL UNIQUE,
            status     TEXT NOT NULL CHECK(status IN ('fasted','missed')),
            created_at TEXT DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
                 ('timetable_cache', 'fasting_log', 'app_meta')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }
}
