use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Timetable;

/// One row of the month calendar: a date, its raw time table, and the Hijri
/// day label carried by imported AlAdhan data (None for computed tables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub timetable: Timetable,
    pub hijri_day: Option<String>,
}

/// Display classification of one calendar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    /// 1-based Ramadan day number.
    pub day: u32,
    pub is_today: bool,
    /// Days 21..=30, the last ten nights.
    pub is_last_ten: bool,
    /// The configured Qadr night (27 by default, a display heuristic).
    pub is_qadr_night: bool,
}
