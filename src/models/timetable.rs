use serde::{Deserialize, Serialize};

/// The eight named time points of a daily imsakiyya row, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerKey {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Midnight,
}

/// The seven ordered markers used for active-prayer derivation.
/// Midnight is display-only and never participates in the scan.
pub const MAIN_PRAYERS: [PrayerKey; 7] = [
    PrayerKey::Imsak,
    PrayerKey::Fajr,
    PrayerKey::Sunrise,
    PrayerKey::Dhuhr,
    PrayerKey::Asr,
    PrayerKey::Maghrib,
    PrayerKey::Isha,
];

impl PrayerKey {
    pub fn all() -> [PrayerKey; 8] {
        [
            PrayerKey::Imsak,
            PrayerKey::Fajr,
            PrayerKey::Sunrise,
            PrayerKey::Dhuhr,
            PrayerKey::Asr,
            PrayerKey::Maghrib,
            PrayerKey::Isha,
            PrayerKey::Midnight,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerKey::Imsak => "Imsak",
            PrayerKey::Fajr => "Fajr",
            PrayerKey::Sunrise => "Sunrise",
            PrayerKey::Dhuhr => "Dhuhr",
            PrayerKey::Asr => "Asr",
            PrayerKey::Maghrib => "Maghrib",
            PrayerKey::Isha => "Isha",
            PrayerKey::Midnight => "Midnight",
        }
    }

    pub fn name_ar(&self) -> &'static str {
        match self {
            PrayerKey::Imsak => "الإمساك",
            PrayerKey::Fajr => "الفجر",
            PrayerKey::Sunrise => "الشروق",
            PrayerKey::Dhuhr => "الظهر",
            PrayerKey::Asr => "العصر",
            PrayerKey::Maghrib => "المغرب",
            PrayerKey::Isha => "العشاء",
            PrayerKey::Midnight => "منتصف الليل",
        }
    }
}

impl std::fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One day's raw time table, as the external AlAdhan-style source supplies
/// it: "HH:MM" strings, possibly annotated with "(CET)" style suffixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    #[serde(rename = "Imsak")]
    pub imsak: String,
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
    #[serde(rename = "Midnight")]
    pub midnight: String,
}

impl Timetable {
    pub fn get(&self, key: PrayerKey) -> &str {
        match key {
            PrayerKey::Imsak => &self.imsak,
            PrayerKey::Fajr => &self.fajr,
            PrayerKey::Sunrise => &self.sunrise,
            PrayerKey::Dhuhr => &self.dhuhr,
            PrayerKey::Asr => &self.asr,
            PrayerKey::Maghrib => &self.maghrib,
            PrayerKey::Isha => &self.isha,
            PrayerKey::Midnight => &self.midnight,
        }
    }
}

/// Derived current/next pair. `next_time` is the raw clock-time of the next
/// marker, for countdown display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePrayer {
    pub current: PrayerKey,
    pub next: PrayerKey,
    pub next_time: crate::engine::ClockTime,
}

/// Which fasting anchor the single countdown should track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownLabel {
    /// Counting down to the start of the fast (pre-dawn marker).
    Imsak,
    /// Counting down to sunset and the breaking of the fast.
    Iftar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTarget {
    pub key: PrayerKey,
    pub time: crate::engine::ClockTime,
    pub label: CountdownLabel,
}

/// Imsak-to-Maghrib span for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastingInfo {
    pub duration: String,
    pub duration_minutes: i64,
}
