use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{FastStatus, FastingInfo, FastingStats};
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    info: Option<&FastingInfo>,
    today_status: Option<FastStatus>,
    stats: &FastingStats,
    season_days: u32,
) {
    let block = Block::default()
        .title(Span::styled(" Fasting ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let duration_line = match info {
        Some(i) => Line::from(vec![
            Span::styled("  Today's fast:  ", theme::dim()),
            Span::styled(i.duration.clone(), theme::amber().add_modifier(Modifier::BOLD)),
        ]),
        None => Line::from(Span::styled("  Today's fast:  --", theme::dim())),
    };

    let status_line = match today_status {
        Some(FastStatus::Fasted) => Line::from(vec![
            Span::styled("  ● fasted", theme::green().add_modifier(Modifier::BOLD)),
            Span::styled("   [f] undo via re-mark", theme::dim()),
        ]),
        Some(FastStatus::Missed) => Line::from(vec![
            Span::styled("  ✗ missed", theme::red()),
            Span::styled("   [f] mark fasted", theme::dim()),
        ]),
        None => Line::from(vec![
            Span::styled("  ○ unmarked", theme::dim()),
            Span::styled("   [f] fasted  [F] missed", theme::dim()),
        ]),
    };

    let bar = progress_bar(stats.fasted, season_days, 14);
    let stats_line = Line::from(vec![
        Span::styled(format!("  {}", bar), theme::green()),
        Span::styled(
            format!("  {}/{} fasted", stats.fasted, season_days),
            theme::dim(),
        ),
    ]);
    let streak_line = Line::from(Span::styled(
        format!(
            "  Streak: {} current · {} best",
            stats.current_streak, stats.best_streak
        ),
        theme::dim(),
    ));

    let text = vec![
        Line::from(""),
        duration_line,
        status_line,
        Line::from(""),
        stats_line,
        streak_line,
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
