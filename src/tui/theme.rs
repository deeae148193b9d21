use ratatui::style::{Color, Modifier, Style};

// Night-blue and gold, after the printed imsakiyya posters.
pub const BG: Color = Color::Rgb(13, 17, 30);
pub const SURFACE: Color = Color::Rgb(20, 26, 44);
pub const BORDER: Color = Color::Rgb(44, 54, 82);
pub const TEXT: Color = Color::Rgb(222, 226, 238);
pub const TEXT_DIM: Color = Color::Rgb(110, 120, 148);
pub const GOLD: Color = Color::Rgb(212, 175, 85);
pub const GREEN: Color = Color::Rgb(96, 156, 110);
pub const AMBER: Color = Color::Rgb(222, 148, 70);
pub const RED: Color = Color::Rgb(196, 90, 74);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}
