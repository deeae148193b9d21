use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: View) {
    let hints: &[(&str, &str)] = match view {
        View::Dashboard => &[
            ("f", "fasted"),
            ("F", "missed"),
            ("c", "calendar"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Calendar => &[("c/Esc", "back"), ("q", "quit")],
        View::Help => &[("Esc", "back"), ("q", "quit")],
    };

    let mut spans = vec![Span::styled(" ", theme::dim())];
    for (key, label) in hints {
        spans.push(Span::styled(format!("[{key}]"), theme::gold()));
        spans.push(Span::styled(format!(" {label}  "), theme::dim()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme::base()), area);
}
