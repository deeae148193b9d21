pub mod data;

use serde::{Deserialize, Serialize};

use crate::engine::parse::ParsedTimetable;
use crate::models::PrayerKey;

pub use data::{duas_for, DUAS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuaCategory {
    Iftar,
    Suhoor,
    Morning,
    Evening,
    Sleep,
    LaylatAlQadr,
    General,
}

impl DuaCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            DuaCategory::Iftar => "Iftar",
            DuaCategory::Suhoor => "Suhoor",
            DuaCategory::Morning => "Morning",
            DuaCategory::Evening => "Evening",
            DuaCategory::Sleep => "Sleep",
            DuaCategory::LaylatAlQadr => "Laylat al-Qadr",
            DuaCategory::General => "General",
        }
    }
}

/// One supplication with its Arabic text and French translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dua {
    pub title_fr: &'static str,
    pub text_ar: &'static str,
    pub transliteration: &'static str,
    pub translation_fr: &'static str,
    pub source: &'static str,
    pub category: DuaCategory,
    pub repeat_count: Option<u32>,
}

/// Pick the dua category that fits the time of day.
///
/// Laylat al-Qadr takes priority during the last ten nights, but only at
/// night (after Isha or before Fajr). Otherwise the day is carved into
/// suhoor / morning / evening bands with a half-hour iftar window around
/// Maghrib, falling back to general when no table is available.
pub fn contextual_category(
    table: Option<&ParsedTimetable>,
    ramadan_day: u32,
    now_minutes: u32,
) -> DuaCategory {
    if (21..=30).contains(&ramadan_day) {
        if let Some(t) = table {
            let isha = t.minutes(PrayerKey::Isha);
            let fajr = t.minutes(PrayerKey::Fajr);
            if now_minutes >= isha || now_minutes < fajr {
                return DuaCategory::LaylatAlQadr;
            }
        }
    }

    let Some(t) = table else {
        return DuaCategory::General;
    };

    let fajr = t.minutes(PrayerKey::Fajr);
    let asr = t.minutes(PrayerKey::Asr);
    let maghrib = t.minutes(PrayerKey::Maghrib);
    let isha = t.minutes(PrayerKey::Isha);

    if now_minutes < fajr {
        DuaCategory::Suhoor
    } else if now_minutes < asr {
        DuaCategory::Morning
    } else if now_minutes < maghrib.saturating_sub(30) {
        DuaCategory::Evening
    } else if now_minutes <= maghrib + 30 {
        DuaCategory::Iftar
    } else if now_minutes < isha {
        DuaCategory::Evening
    } else {
        DuaCategory::Sleep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse::sample_table;

    fn parsed() -> ParsedTimetable {
        ParsedTimetable::try_from(&sample_table()).unwrap()
    }

    #[test]
    fn before_fajr_is_suhoor() {
        let t = parsed();
        assert_eq!(contextual_category(Some(&t), 10, 4 * 60), DuaCategory::Suhoor);
    }

    #[test]
    fn daytime_is_morning() {
        let t = parsed();
        assert_eq!(contextual_category(Some(&t), 10, 10 * 60), DuaCategory::Morning);
    }

    #[test]
    fn iftar_window_spans_maghrib() {
        let t = parsed();
        // Maghrib at 18:30; both sides of it within 30 min
        assert_eq!(contextual_category(Some(&t), 10, 18 * 60 + 10), DuaCategory::Iftar);
        assert_eq!(contextual_category(Some(&t), 10, 18 * 60 + 50), DuaCategory::Iftar);
    }

    #[test]
    fn after_isha_is_sleep() {
        let t = parsed();
        assert_eq!(contextual_category(Some(&t), 10, 21 * 60), DuaCategory::Sleep);
    }

    #[test]
    fn last_ten_nights_take_priority_after_isha() {
        let t = parsed();
        assert_eq!(
            contextual_category(Some(&t), 27, 21 * 60),
            DuaCategory::LaylatAlQadr
        );
        // and before Fajr
        assert_eq!(
            contextual_category(Some(&t), 27, 3 * 60),
            DuaCategory::LaylatAlQadr
        );
        // but not during the day
        assert_eq!(contextual_category(Some(&t), 27, 10 * 60), DuaCategory::Morning);
    }

    #[test]
    fn no_table_falls_back_to_general() {
        assert_eq!(contextual_category(None, 27, 21 * 60), DuaCategory::General);
        assert_eq!(contextual_category(None, 5, 10 * 60), DuaCategory::General);
    }
}
