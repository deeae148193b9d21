use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    location_name: &str,
    hijri_str: &str,
    ramadan_day: u32,
    season_days: u32,
) {
    let today = Local::now();
    let gregorian_str = today.format("%A, %b %d, %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  الإمساكية  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("imsakiyya", theme::gold()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(location_name, theme::amber()),
    ]);

    let mut date_spans = vec![
        Span::styled(hijri_str.to_string(), theme::amber()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(gregorian_str, theme::dim()),
    ];
    if ramadan_day > 0 {
        date_spans.push(Span::styled("  ·  ", theme::dim()));
        date_spans.push(Span::styled(
            format!("Day {}/{}", ramadan_day, season_days),
            theme::green().add_modifier(Modifier::BOLD),
        ));
    }

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
