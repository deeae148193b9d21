use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::engine::Countdown;
use crate::models::{CountdownLabel, CountdownTarget};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    target: Option<&CountdownTarget>,
    countdown: Option<Countdown>,
    alert: bool,
) {
    let (title, accent) = match target.map(|t| t.label) {
        Some(CountdownLabel::Iftar) => (" Iftar in ", theme::green()),
        Some(CountdownLabel::Imsak) if alert => (" Imsak in ", theme::red()),
        Some(CountdownLabel::Imsak) => (" Imsak in ", theme::gold()),
        None => (" Countdown ", theme::dim()),
    };

    let block = Block::default()
        .title(Span::styled(title, accent.add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if alert { theme::red() } else { theme::border() })
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(cd) = countdown else {
        let paragraph = Paragraph::new(Line::from(Span::styled("  no data", theme::dim())))
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4), // big clock
            Constraint::Min(0),
        ])
        .split(inner);

    let clock = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(accent.add_modifier(Modifier::BOLD))
        .lines(vec![cd.to_string().into()])
        .build();
    frame.render_widget(clock, chunks[1]);

    if let Some(t) = target {
        let footer = Line::from(vec![
            Span::styled(format!("  {} at ", t.key.display_name()), theme::dim()),
            Span::styled(t.time.to_string(), theme::bold()),
            Span::styled(
                if alert { "  last chance for suhoor" } else { "" },
                theme::red(),
            ),
        ]);
        frame.render_widget(Paragraph::new(footer), chunks[2]);
    }
}
