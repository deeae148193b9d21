pub mod calendar;
pub mod city;
pub mod fasting;
pub mod timetable;

pub use calendar::{CalendarDay, DayClass};
pub use city::City;
pub use fasting::{FastEntry, FastStatus, FastingStats};
pub use timetable::{
    ActivePrayer, CountdownLabel, CountdownTarget, FastingInfo, PrayerKey, Timetable, MAIN_PRAYERS,
};
