//! Pure derivation engine: everything in here is a synchronous function of
//! (time table, instant). No I/O, no clock reads; callers pass "now" in and
//! re-invoke on their own tick to keep displays fresh.

pub mod active;
pub mod countdown;
pub mod fasting;
pub mod parse;
pub mod ramadan;

pub use active::{active_prayer, next_prayer};
pub use countdown::{countdown_target, format_countdown, seconds_until, Countdown};
pub use fasting::{fasting_duration, format_duration, imsak_alert};
pub use parse::{parse_clock, time_to_minutes, ClockTime, ParseTimeError, ParsedTimetable};
pub use ramadan::RamadanSeason;
