use crate::engine::parse::ParsedTimetable;
use crate::models::{ActivePrayer, PrayerKey, MAIN_PRAYERS};

/// Derive the current and next prayer from the seven ordered markers.
///
/// Scans backward for the last marker at or before `now_minutes`. Before the
/// first marker of the day the current prayer is Isha of the previous cycle
/// and the next is today's Imsak, so the hours between midnight and Imsak
/// never yield an undefined state.
pub fn active_prayer(table: &ParsedTimetable, now_minutes: u32) -> ActivePrayer {
    let mut current_idx = None;
    for (i, key) in MAIN_PRAYERS.iter().enumerate().rev() {
        if now_minutes >= table.minutes(*key) {
            current_idx = Some(i);
            break;
        }
    }

    match current_idx {
        None => ActivePrayer {
            current: PrayerKey::Isha,
            next: MAIN_PRAYERS[0],
            next_time: table.get(MAIN_PRAYERS[0]),
        },
        Some(i) => {
            let next = MAIN_PRAYERS[(i + 1) % MAIN_PRAYERS.len()];
            ActivePrayer {
                current: MAIN_PRAYERS[i],
                next,
                next_time: table.get(next),
            }
        }
    }
}

/// The next marker and its clock-time, for countdown display.
pub fn next_prayer(table: &ParsedTimetable, now_minutes: u32) -> (PrayerKey, crate::engine::ClockTime) {
    let active = active_prayer(table, now_minutes);
    (active.next, active.next_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse::{sample_table, ClockTime, ParsedTimetable};

    fn parsed() -> ParsedTimetable {
        ParsedTimetable::try_from(&sample_table()).unwrap()
    }

    #[test]
    fn before_imsak_wraps_to_isha() {
        // 03:00, Imsak at 04:30
        let active = active_prayer(&parsed(), 3 * 60);
        assert_eq!(active.current, PrayerKey::Isha);
        assert_eq!(active.next, PrayerKey::Imsak);
        assert_eq!(active.next_time, ClockTime::new(4, 30));
    }

    #[test]
    fn just_after_imsak() {
        // 04:35, between Imsak 04:30 and Fajr 04:45
        let active = active_prayer(&parsed(), 4 * 60 + 35);
        assert_eq!(active.current, PrayerKey::Imsak);
        assert_eq!(active.next, PrayerKey::Fajr);
        assert_eq!(active.next_time, ClockTime::new(4, 45));
    }

    #[test]
    fn midday_is_dhuhr() {
        let active = active_prayer(&parsed(), 13 * 60);
        assert_eq!(active.current, PrayerKey::Dhuhr);
        assert_eq!(active.next, PrayerKey::Asr);
    }

    #[test]
    fn evening_cycles_back_to_imsak() {
        let active = active_prayer(&parsed(), 21 * 60);
        assert_eq!(active.current, PrayerKey::Isha);
        assert_eq!(active.next, PrayerKey::Imsak);
    }

    #[test]
    fn exact_marker_minute_counts_as_current() {
        let active = active_prayer(&parsed(), 18 * 60 + 30);
        assert_eq!(active.current, PrayerKey::Maghrib);
        assert_eq!(active.next, PrayerKey::Isha);
    }

    #[test]
    fn next_prayer_matches_active_derivation() {
        let (key, time) = next_prayer(&parsed(), 12 * 60);
        assert_eq!(key, PrayerKey::Dhuhr);
        assert_eq!(time, ClockTime::new(12, 30));
    }
}
