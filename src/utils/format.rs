use unicode_width::UnicodeWidthStr;

/// Format a duration in seconds to "Xh Ym" or "Ym" string
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "now".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Pad a string with trailing spaces to a target display width.
/// Plain `{:<w}` counts chars, which misaligns columns mixing Latin and
/// Arabic text.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let pad = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(pad))
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_variants() {
        assert_eq!(format_duration_secs(0), "now");
        assert_eq!(format_duration_secs(90), "1m");
        assert_eq!(format_duration_secs(3660), "1h 1m");
    }

    #[test]
    fn pad_counts_display_width() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert!(pad_display("تونس", 8).ends_with(' '));
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0, 10, 4), "░░░░");
        assert_eq!(progress_bar(10, 10, 4), "████");
        assert_eq!(progress_bar(12, 10, 4), "████");
        assert_eq!(progress_bar(3, 0, 4), "░░░░");
    }
}
