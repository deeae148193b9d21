use chrono::NaiveDateTime;

use crate::engine::parse::{ClockTime, ParsedTimetable};
use crate::models::{CountdownLabel, CountdownTarget, PrayerKey};

/// Choose the fasting anchor the single countdown should track.
///
/// Before Imsak the target is Imsak; between Imsak and Maghrib it is
/// Maghrib (iftar); after Maghrib it is Imsak again, implicitly tomorrow's.
pub fn countdown_target(table: &ParsedTimetable, now_minutes: u32) -> CountdownTarget {
    let imsak = table.get(PrayerKey::Imsak);
    let maghrib = table.get(PrayerKey::Maghrib);

    if now_minutes < imsak.minutes_from_midnight() {
        CountdownTarget {
            key: PrayerKey::Imsak,
            time: imsak,
            label: CountdownLabel::Imsak,
        }
    } else if now_minutes < maghrib.minutes_from_midnight() {
        CountdownTarget {
            key: PrayerKey::Maghrib,
            time: maghrib,
            label: CountdownLabel::Iftar,
        }
    } else {
        CountdownTarget {
            key: PrayerKey::Imsak,
            time: imsak,
            label: CountdownLabel::Imsak,
        }
    }
}

/// Seconds from `now` until the target clock-time on the same date, wrapping
/// forward by 24h when the time has already passed today.
pub fn seconds_until(target: ClockTime, now: NaiveDateTime) -> i64 {
    let target_instant = target.on(now.date());
    let mut diff = (target_instant - now).num_seconds();
    if diff < 0 {
        diff += 24 * 60 * 60;
    }
    diff
}

/// Zero-padded HH:MM:SS decomposition of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn hh(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn mm(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn ss(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.hh(), self.mm(), self.ss())
    }
}

pub fn format_countdown(total_seconds: i64) -> Countdown {
    let total = total_seconds.max(0);
    Countdown {
        hours: total / 3600,
        minutes: (total % 3600) / 60,
        seconds: total % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse::{sample_table, ParsedTimetable};
    use chrono::NaiveDate;

    fn parsed() -> ParsedTimetable {
        ParsedTimetable::try_from(&sample_table()).unwrap()
    }

    #[test]
    fn before_dawn_targets_imsak() {
        let target = countdown_target(&parsed(), 3 * 60);
        assert_eq!(target.key, PrayerKey::Imsak);
        assert_eq!(target.label, CountdownLabel::Imsak);
    }

    #[test]
    fn daytime_targets_iftar() {
        let target = countdown_target(&parsed(), 12 * 60);
        assert_eq!(target.key, PrayerKey::Maghrib);
        assert_eq!(target.label, CountdownLabel::Iftar);
    }

    #[test]
    fn evening_targets_tomorrows_imsak() {
        let target = countdown_target(&parsed(), 19 * 60);
        assert_eq!(target.key, PrayerKey::Imsak);
        assert_eq!(target.label, CountdownLabel::Imsak);
    }

    #[test]
    fn seconds_until_later_today() {
        let now = NaiveDate::from_ymd_opt(2026, 2, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(seconds_until(ClockTime::new(18, 30), now), 6 * 3600 + 30 * 60);
    }

    #[test]
    fn seconds_until_wraps_past_midnight() {
        let now = NaiveDate::from_ymd_opt(2026, 2, 20)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        // 04:30 tomorrow: 5h to midnight + 4h30
        assert_eq!(seconds_until(ClockTime::new(4, 30), now), 9 * 3600 + 30 * 60);
    }

    #[test]
    fn formats_zero() {
        let c = format_countdown(0);
        assert_eq!((c.hh(), c.mm(), c.ss()), ("00".into(), "00".into(), "00".into()));
    }

    #[test]
    fn formats_hour_minute_second() {
        let c = format_countdown(3661);
        assert_eq!((c.hh(), c.mm(), c.ss()), ("01".into(), "01".into(), "01".into()));
        assert_eq!(c.to_string(), "01:01:01");
    }

    #[test]
    fn pads_single_digits() {
        let c = format_countdown(5);
        assert_eq!(c.to_string(), "00:00:05");
    }
}
