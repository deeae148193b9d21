use anyhow::Result;
use chrono::{Local, Timelike};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::repository::{CacheRepo, FastingRepo};
use crate::engine::{
    active_prayer, countdown_target, fasting_duration, format_countdown, imsak_alert,
    seconds_until, Countdown, ParsedTimetable, RamadanSeason,
};
use crate::models::{
    ActivePrayer, CalendarDay, CountdownLabel, CountdownTarget, FastStatus, FastingInfo,
    FastingStats, PrayerKey,
};
use crate::prayer_times::TimetableCalculator;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{calendar, countdown, fasting, header, statusbar, timetable};
use crate::utils::hijri::today_hijri_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Calendar,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,

    // Cached state (refreshed on tick/action)
    pub today: chrono::NaiveDate,
    pub today_str: String,
    pub hijri_str: String,
    pub season: RamadanSeason,
    pub ramadan_day: u32,
    pub parsed: Option<ParsedTimetable>,
    pub active: Option<ActivePrayer>,
    pub target: Option<CountdownTarget>,
    pub countdown: Option<Countdown>,
    pub alert: bool,
    pub fasting_info: Option<FastingInfo>,
    pub today_status: Option<FastStatus>,
    pub stats: FastingStats,
    pub calendar_days: Vec<CalendarDay>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let today = Local::now().date_naive();
        let today_str = today.format("%Y-%m-%d").to_string();
        let hijri_str = today_hijri_string(config.location.hijri_offset);
        let season = config.ramadan.season()?;
        let ramadan_day = season.day_number(today);

        Ok(App {
            view: View::Dashboard,
            config,
            should_quit: false,
            today,
            today_str,
            hijri_str,
            season,
            ramadan_day,
            parsed: None,
            active: None,
            target: None,
            countdown: None,
            alert: false,
            fasting_info: None,
            today_status: None,
            stats: FastingStats::default(),
            calendar_days: Vec::new(),
        })
    }

    pub fn load(&mut self, conn: &Connection) -> Result<()> {
        let calc = self.make_calculator()?;
        let table = calc.get_cached_or_compute(conn, self.today)?;
        let parsed = ParsedTimetable::try_from(&table)?;

        self.fasting_info = Some(fasting_duration(
            parsed.get(PrayerKey::Imsak),
            parsed.get(PrayerKey::Maghrib),
        ));
        self.parsed = Some(parsed);

        self.today_status = FastingRepo::get(conn, &self.today_str)?.map(|e| e.status);

        let start = self.season.start.format("%Y-%m-%d").to_string();
        let end = self
            .season
            .date_of_day(self.season.days)
            .format("%Y-%m-%d")
            .to_string();
        self.stats = FastingRepo::stats(conn, &start, &end)?;

        calc.ensure_cached(conn, self.season.start, self.season.days)?;
        self.calendar_days = CacheRepo::get_range(conn, &start, &end)?;

        self.refresh_countdown();
        Ok(())
    }

    pub fn tick(&mut self, conn: &Connection) {
        let today = Local::now().date_naive();
        if today != self.today {
            // Gregorian rollover while the app is open
            self.today = today;
            self.today_str = today.format("%Y-%m-%d").to_string();
            self.ramadan_day = self.season.day_number(today);
            let _ = self.load(conn);
        }
        self.refresh_countdown();
    }

    fn refresh_countdown(&mut self) {
        let Some(parsed) = &self.parsed else {
            return;
        };
        let now = Local::now().naive_local();
        let now_min = now.time().hour() * 60 + now.time().minute();
        self.active = Some(active_prayer(parsed, now_min));
        let target = countdown_target(parsed, now_min);
        let secs = seconds_until(target.time, now);
        self.alert = target.label == CountdownLabel::Imsak && imsak_alert(secs);
        self.countdown = Some(format_countdown(secs));
        self.target = Some(target);
    }

    fn make_calculator(&self) -> Result<TimetableCalculator> {
        TimetableCalculator::new(
            self.config.location.latitude,
            self.config.location.longitude,
            &self.config.location.calc_method,
            &self.config.location.madhab,
            self.config.location.timezone_offset,
        )
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key, conn),
            View::Calendar => self.handle_calendar_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent, conn: &Connection) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('c') => {
                self.view = View::Calendar;
            }
            KeyCode::Char('f') => {
                let _ = FastingRepo::mark(conn, &self.today_str, FastStatus::Fasted);
                let _ = self.load(conn);
            }
            KeyCode::Char('F') => {
                let _ = FastingRepo::mark(conn, &self.today_str, FastStatus::Missed);
                let _ = self.load(conn);
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') => {
                self.view = View::Dashboard;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Calendar => self.draw_calendar(frame),
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            &self.config.location.name,
            &self.hijri_str,
            self.ramadan_day,
            self.season.days,
        );
        statusbar::render(frame, outer_chunks[2], self.view);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[1]);

        let now = Local::now().time();
        let now_min = now.hour() * 60 + now.minute();
        timetable::render(
            frame,
            columns[0],
            self.parsed.as_ref(),
            self.active.as_ref(),
            now_min,
        );

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // countdown
                Constraint::Min(8),    // fasting
            ])
            .split(columns[1]);

        countdown::render(
            frame,
            right_chunks[0],
            self.target.as_ref(),
            self.countdown,
            self.alert,
        );
        fasting::render(
            frame,
            right_chunks[1],
            self.fasting_info.as_ref(),
            self.today_status,
            &self.stats,
            self.season.days,
        );
    }

    fn draw_calendar(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        header::render(
            frame,
            chunks[0],
            &self.config.location.name,
            &self.hijri_str,
            self.ramadan_day,
            self.season.days,
        );
        calendar::render(frame, chunks[1], &self.calendar_days, &self.season, self.today);
        statusbar::render(frame, chunks[2], self.view);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).min(14),
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [f]      ", theme::gold()),
                Span::styled("Mark today fasted", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [F]      ", theme::gold()),
                Span::styled("Mark today missed", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [c]      ", theme::gold()),
                Span::styled("Toggle Ramadan calendar", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]      ", theme::gold()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [q/Esc]  ", theme::gold()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(conn: Connection, config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;
    app.load(&conn)?;

    let mut terminal = ratatui::init();
    let events = EventHandler::new(500);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key, &conn);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick(&conn);
            }
        }
    }

    ratatui::restore();
    Ok(())
}
