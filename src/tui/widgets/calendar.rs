use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::engine::RamadanSeason;
use crate::models::CalendarDay;
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    days: &[CalendarDay],
    season: &RamadanSeason,
    today: chrono::NaiveDate,
) {
    let block = Block::default()
        .title(Span::styled(" Ramadan calendar ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let header = ListItem::new(Line::from(Span::styled(
        format!(
            "  {:<4} {:<12} {:>6} {:>6} {:>6}",
            "Day", "Date", "Imsak", "Fajr", "Iftar"
        ),
        theme::dim().add_modifier(Modifier::BOLD),
    )));

    let mut items = vec![header];
    for (idx, day) in days.iter().enumerate() {
        let class = season.classify(idx, day.date, today);
        let marker = if class.is_qadr_night {
            "✦"
        } else if class.is_last_ten {
            "·"
        } else {
            " "
        };
        let row = format!(
            " {marker}{:<4} {:<12} {:>6} {:>6} {:>6}",
            class.day,
            day.date.format("%d %b"),
            day.timetable.imsak,
            day.timetable.fajr,
            day.timetable.maghrib,
        );
        let style = if class.is_today {
            theme::gold().add_modifier(Modifier::BOLD)
        } else if class.is_qadr_night {
            theme::amber()
        } else if class.is_last_ten {
            theme::base()
        } else {
            theme::dim()
        };
        let suffix = if class.is_today { "  ◀ today" } else { "" };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(row, style),
            Span::styled(suffix, theme::gold()),
        ])));
    }

    frame.render_widget(List::new(items).block(block), area);
}
