use chrono::NaiveDate;

use crate::models::DayClass;

/// The observance period: a configured start date, length, and Qadr night.
///
/// The start date is the officially declared one (the Tunisian ministry
/// date), which can differ from the astronomical calendar by a day. The
/// Qadr night defaults to 27 but is configurable; the true date is not
/// fixed and the 27th is only the customary highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamadanSeason {
    pub start: NaiveDate,
    pub days: u32,
    pub qadr_night: u32,
}

impl Default for RamadanSeason {
    fn default() -> Self {
        Self {
            // 19 February 2026, as declared for Tunisia.
            start: NaiveDate::from_ymd_opt(2026, 2, 19).expect("valid date"),
            days: 30,
            qadr_night: 27,
        }
    }
}

impl RamadanSeason {
    pub fn new(start: NaiveDate, days: u32, qadr_night: u32) -> Self {
        Self { start, days, qadr_night }
    }

    /// 1-based day number for `today`: 0 before the season starts, clamped
    /// to the season length afterwards.
    pub fn day_number(&self, today: NaiveDate) -> u32 {
        let diff = (today - self.start).num_days();
        if diff < 0 {
            0
        } else {
            ((diff + 1) as u32).min(self.days)
        }
    }

    /// Legacy path for imported rows that carry a Hijri day label instead of
    /// a date: parses a day in range, defaulting to 1 on empty or
    /// non-numeric input. Prefer [`day_number`](Self::day_number); this
    /// exists only for data that predates the date-based derivation.
    pub fn day_number_from_hijri(&self, hijri_day: &str) -> u32 {
        match hijri_day.trim().parse::<u32>() {
            Ok(day) if (1..=self.days).contains(&day) => day,
            _ => 1,
        }
    }

    /// True from the start date through the last day of the season.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        let day = self.day_number(today);
        day >= 1 && (today - self.start).num_days() < self.days as i64
    }

    /// Date of the 1-based `day` of the season.
    pub fn date_of_day(&self, day: u32) -> NaiveDate {
        self.start + chrono::Duration::days(day.saturating_sub(1) as i64)
    }

    /// Classify the calendar row at `index` (0-based from the season start).
    pub fn classify(&self, index: usize, date: NaiveDate, today: NaiveDate) -> DayClass {
        let day = index as u32 + 1;
        DayClass {
            day,
            is_today: date == today,
            is_last_ten: day >= self.days.saturating_sub(9),
            is_qadr_night: day == self.qadr_night,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season() -> RamadanSeason {
        RamadanSeason::default()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_before_the_season() {
        assert_eq!(season().day_number(date(2026, 2, 18)), 0);
        assert_eq!(season().day_number(date(2026, 1, 1)), 0);
    }

    #[test]
    fn first_day_is_one() {
        assert_eq!(season().day_number(date(2026, 2, 19)), 1);
    }

    #[test]
    fn mid_season_offset() {
        assert_eq!(season().day_number(date(2026, 3, 5)), 15);
    }

    #[test]
    fn clamps_to_season_length() {
        assert_eq!(season().day_number(date(2026, 3, 20)), 30);
        assert_eq!(season().day_number(date(2026, 6, 1)), 30);
    }

    #[test]
    fn hijri_fallback_parses_valid_day() {
        assert_eq!(season().day_number_from_hijri("15"), 15);
    }

    #[test]
    fn hijri_fallback_defaults_to_one() {
        assert_eq!(season().day_number_from_hijri(""), 1);
        assert_eq!(season().day_number_from_hijri("abc"), 1);
        assert_eq!(season().day_number_from_hijri("31"), 1);
        assert_eq!(season().day_number_from_hijri("0"), 1);
    }

    #[test]
    fn activity_window() {
        assert!(!season().is_active(date(2026, 2, 18)));
        assert!(season().is_active(date(2026, 2, 19)));
        assert!(season().is_active(date(2026, 3, 20)));
        assert!(!season().is_active(date(2026, 3, 21)));
    }

    #[test]
    fn classification_markers() {
        let today = date(2026, 3, 5); // day 15
        let s = season();

        let d15 = s.classify(14, s.date_of_day(15), today);
        assert!(d15.is_today);
        assert!(!d15.is_last_ten);

        let d21 = s.classify(20, s.date_of_day(21), today);
        assert!(d21.is_last_ten);
        assert!(!d21.is_qadr_night);

        let d27 = s.classify(26, s.date_of_day(27), today);
        assert!(d27.is_last_ten);
        assert!(d27.is_qadr_night);
        assert!(!d27.is_today);
    }

    #[test]
    fn qadr_night_is_configurable() {
        let s = RamadanSeason::new(date(2026, 2, 19), 30, 23);
        assert!(s.classify(22, s.date_of_day(23), date(2026, 1, 1)).is_qadr_night);
        assert!(!s.classify(26, s.date_of_day(27), date(2026, 1, 1)).is_qadr_night);
    }
}
