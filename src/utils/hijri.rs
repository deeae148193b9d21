use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

fn format_hijri(date: NaiveDate) -> Option<String> {
    let hd = HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .ok()?;
    Some(format!(
        "{} {} {}",
        hd.day(),
        hijri_month_name(hd.month()),
        hd.year()
    ))
}

/// Returns the Hijri date string for today, with an optional day offset.
/// `offset_days` lets users adjust for local moon sighting differences
/// (e.g., -1 if the local declaration trails Saudi Arabia by a day).
pub fn today_hijri_string(offset_days: i32) -> String {
    let today = chrono::Local::now().date_naive();
    let adjusted = today + Duration::days(offset_days as i64);

    format_hijri(adjusted).unwrap_or_else(|| {
        // Fallback: use today without offset
        let hd = HijriDate::today();
        format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_gregorian_date_lands_in_ramadan() {
        // Mid-March 2026 is Ramadan 1447
        let s = format_hijri(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()).unwrap();
        assert!(s.contains("Ramadan"), "got {s}");
        assert!(s.contains("1447"), "got {s}");
    }

    #[test]
    fn month_name_bounds() {
        assert_eq!(hijri_month_name(9), "Ramadan");
        assert_eq!(hijri_month_name(0), "Unknown");
        assert_eq!(hijri_month_name(13), "Unknown");
    }
}
