use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::engine::ParsedTimetable;
use crate::models::{ActivePrayer, PrayerKey};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    table: Option<&ParsedTimetable>,
    active: Option<&ActivePrayer>,
    now_minutes: u32,
) {
    let block = Block::default()
        .title(Span::styled(" Today ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(table) = table else {
        let empty = List::new(vec![ListItem::new(Line::from(Span::styled(
            "  no time table",
            theme::dim(),
        )))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let items: Vec<ListItem> = PrayerKey::all()
        .into_iter()
        .map(|key| {
            let time = table.get(key);
            let is_current = active.map(|a| a.current == key).unwrap_or(false);
            let is_next = active.map(|a| a.next == key).unwrap_or(false);
            let is_past = time.minutes_from_midnight() < now_minutes;

            let name_style = if is_current {
                theme::gold().add_modifier(Modifier::BOLD)
            } else if is_past {
                theme::dim()
            } else {
                theme::bold()
            };

            let marker = if is_current {
                Span::styled("  ◀ now", theme::gold())
            } else if is_next {
                Span::styled("  · next", theme::amber())
            } else {
                Span::raw("")
            };

            let line = Line::from(vec![
                Span::styled(format!("  {:<9}", key.display_name()), name_style),
                Span::styled(time.to_string(), if is_past { theme::dim() } else { theme::amber() }),
                Span::styled(format!("   {}", key.name_ar()), theme::dim()),
                marker,
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
