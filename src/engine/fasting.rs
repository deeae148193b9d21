use crate::engine::parse::ClockTime;
use crate::models::FastingInfo;

/// Format minutes as "Xh YYmin", hours unpadded, minutes zero-padded.
pub fn format_duration(total_minutes: i64) -> String {
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    format!("{}h {:02}min", h, m)
}

/// Imsak-to-Maghrib span. Both markers fall on the same day by
/// construction, so no cross-midnight handling is needed.
pub fn fasting_duration(imsak: ClockTime, maghrib: ClockTime) -> FastingInfo {
    let duration_minutes =
        maghrib.minutes_from_midnight() as i64 - imsak.minutes_from_midnight() as i64;
    FastingInfo {
        duration: format_duration(duration_minutes),
        duration_minutes,
    }
}

/// True inside the final half hour before Imsak.
pub fn imsak_alert(seconds_until_imsak: i64) -> bool {
    seconds_until_imsak > 0 && seconds_until_imsak <= 30 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_hour_fast() {
        let info = fasting_duration(ClockTime::new(4, 30), ClockTime::new(18, 30));
        assert_eq!(info.duration_minutes, 840);
        assert_eq!(info.duration, "14h 00min");
    }

    #[test]
    fn typical_tunis_timing() {
        let info = fasting_duration(ClockTime::new(4, 15), ClockTime::new(18, 45));
        assert_eq!(info.duration_minutes, 870);
        assert_eq!(info.duration, "14h 30min");
    }

    #[test]
    fn duration_formats_exact_hours() {
        assert_eq!(format_duration(720), "12h 00min");
        assert_eq!(format_duration(870), "14h 30min");
    }

    #[test]
    fn alert_window_is_half_open() {
        assert!(!imsak_alert(0));
        assert!(imsak_alert(1));
        assert!(imsak_alert(30 * 60));
        assert!(!imsak_alert(30 * 60 + 1));
        assert!(!imsak_alert(-5));
    }
}
