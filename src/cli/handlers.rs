use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rusqlite::Connection;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::adhkar;
use crate::config::AppConfig;
use crate::db::repository::{CacheRepo, FastingRepo, MetaRepo};
use crate::engine::{
    self, countdown_target, fasting_duration, format_countdown, seconds_until, ParsedTimetable,
};
use crate::geo;
use crate::models::{CountdownLabel, FastStatus, PrayerKey, Timetable, MAIN_PRAYERS};
use crate::prayer_times::{import_month, TimetableCalculator};
use crate::utils::format::{format_duration_secs, pad_display, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Shared helpers ──────────────────────────────────────────────────────────

fn make_calculator(config: &AppConfig) -> Result<TimetableCalculator> {
    TimetableCalculator::new(
        config.location.latitude,
        config.location.longitude,
        &config.location.calc_method,
        &config.location.madhab,
        config.location.timezone_offset,
    )
}

fn today_table(conn: &Connection, config: &AppConfig) -> Result<Timetable> {
    let calc = make_calculator(config)?;
    calc.get_cached_or_compute(conn, Local::now().date_naive())
}

fn now_minutes() -> u32 {
    let t = Local::now().time();
    chrono::Timelike::hour(&t) * 60 + chrono::Timelike::minute(&t)
}

// ─── Setup ───────────────────────────────────────────────────────────────────

pub fn handle_setup(conn: &Connection, config: &mut AppConfig, reset: bool) -> Result<()> {
    if !reset {
        if let Some(done) = MetaRepo::get(conn, "setup_done")? {
            if done == "1" {
                println!("imsakiyya is already configured. Use --reset to reconfigure.");
                return Ok(());
            }
        }
    }

    println!();
    println_colored!(GOLD, "  imsakiyya setup");
    println!();

    // City: by name, or "lat,lng" for the nearest listed city
    let city = loop {
        let query = prompt("  City (name, \"lat,lng\", Enter for Tunis): ")?;
        if query.is_empty() {
            break geo::by_id("tunis").ok_or_else(|| anyhow!("builtin city table is empty"))?;
        }
        if let Some((lat, lng)) = parse_coords(&query) {
            let near = geo::nearest_city(lat, lng);
            println_colored!(DIM, "  Nearest listed city: {}", near.name_fr);
            break near;
        }
        let matches = geo::search(&query);
        match matches.len() {
            0 => println_colored!(RED, "  No city matches '{}'", query),
            1 => break matches[0],
            _ => {
                println!();
                for (i, c) in matches.iter().enumerate() {
                    println!("    [{}] {}  {}", i + 1, pad_display(c.name_fr, 22), c.name_ar);
                }
                println!();
                let pick = prompt("  Number: ")?;
                if let Ok(idx) = pick.parse::<usize>() {
                    if idx >= 1 && idx <= matches.len() {
                        break matches[idx - 1];
                    }
                }
                println_colored!(RED, "  Not a valid choice");
            }
        }
    };

    config.location.city_id = city.id.to_string();
    config.location.name = city.name_fr.to_string();
    config.location.latitude = city.lat;
    config.location.longitude = city.lng;

    // Calculation method
    let method = prompt(&format!(
        "  Calculation method [{}] (? to list): ",
        config.location.calc_method
    ))?;
    if method == "?" {
        for m in crate::prayer_times::CALC_METHODS {
            println!("    {}", m);
        }
        let method = prompt(&format!(
            "  Calculation method [{}]: ",
            config.location.calc_method
        ))?;
        if !method.is_empty() {
            config.location.calc_method = method;
        }
    } else if !method.is_empty() {
        config.location.calc_method = method;
    }

    // Ramadan start
    let start = prompt(&format!(
        "  Ramadan start date [{}]: ",
        config.ramadan.start_date
    ))?;
    if !start.is_empty() {
        chrono::NaiveDate::parse_from_str(&start, "%Y-%m-%d")
            .with_context(|| format!("Expected YYYY-MM-DD, got '{start}'"))?;
        config.ramadan.start_date = start;
    }

    // Validate the combination before anything is persisted
    let calc = make_calculator(config)?;
    let season = config.ramadan.season()?;

    config.save()?;
    MetaRepo::set(conn, "setup_done", "1")?;

    // Pre-fill the cache for the whole season
    if reset {
        CacheRepo::clear_all(conn)?;
    }
    calc.ensure_cached(conn, season.start, season.days)
        .context("Pre-computing the season's time tables")?;

    println!();
    println_colored!(
        GREEN,
        "  ✓ Configured for {} — season cached from {}",
        config.location.name,
        config.ramadan.start_date
    );
    println!();
    Ok(())
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(conn: &Connection, config: &AppConfig) -> Result<()> {
    let table = today_table(conn, config)?;
    let parsed = ParsedTimetable::try_from(&table)?;
    let season = config.ramadan.season()?;
    let today = Local::now().date_naive();
    let now_min = now_minutes();

    let active = engine::active_prayer(&parsed, now_min);

    println!();
    let day = season.day_number(today);
    if day > 0 {
        println_colored!(
            GOLD,
            "  {} — {}  ·  Ramadan day {}/{}",
            config.location.name,
            today.format("%Y-%m-%d"),
            day,
            season.days
        );
    } else {
        println_colored!(
            GOLD,
            "  {} — {}",
            config.location.name,
            today.format("%Y-%m-%d")
        );
    }
    println!();

    for key in PrayerKey::all() {
        let time = parsed.get(key);
        let marker_is_active = MAIN_PRAYERS.contains(&key) && key == active.current;
        let label = format!(
            "  {:<10}  {}   {}",
            key.display_name(),
            time,
            key.name_ar()
        );
        if marker_is_active {
            println_colored!(GOLD, "{}  ◀", label);
        } else if time.minutes_from_midnight() < now_min {
            println_colored!(DIM, "{}", label);
        } else {
            println_colored!(BOLD, "{}", label);
        }
    }

    // Countdown to next prayer and to the fasting anchor
    let now = Local::now().naive_local();
    let (next, next_time) = engine::next_prayer(&parsed, now_min);
    let next_secs = seconds_until(next_time, now);
    println!();
    println_colored!(
        AMBER,
        "  Next: {} in {}",
        next.display_name(),
        format_duration_secs(next_secs)
    );

    let target = countdown_target(&parsed, now_min);
    let secs = seconds_until(target.time, now);
    let cd = format_countdown(secs);
    match target.label {
        CountdownLabel::Iftar => {
            println_colored!(GREEN, "  Iftar in {}", cd);
        }
        CountdownLabel::Imsak => {
            if engine::imsak_alert(secs) {
                println_colored!(RED, "  Imsak in {} — last chance for suhoor!", cd);
            } else {
                println_colored!(GREEN, "  Imsak in {}", cd);
            }
        }
    }

    let info = fasting_duration(parsed.get(PrayerKey::Imsak), parsed.get(PrayerKey::Maghrib));
    println_colored!(DIM, "  Fasting today: {}", info.duration);
    println!();
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

pub fn handle_calendar(conn: &Connection, config: &AppConfig) -> Result<()> {
    let season = config.ramadan.season()?;
    let calc = make_calculator(config)?;
    calc.ensure_cached(conn, season.start, season.days)?;

    let start_str = season.start.format("%Y-%m-%d").to_string();
    let end_str = season
        .date_of_day(season.days)
        .format("%Y-%m-%d")
        .to_string();
    let days = CacheRepo::get_range(conn, &start_str, &end_str)?;
    let today = Local::now().date_naive();

    println!();
    println_colored!(GOLD, "  Ramadan {} — {}", season.start.format("%Y"), config.location.name);
    println!();
    println_colored!(DIM, "   day  date    imsak  maghrib  fast");

    for (idx, day) in days.iter().enumerate() {
        let class = season.classify(idx, day.date, today);
        // Imported rows carry the official Hijri day label; trust it over
        // the positional index when present.
        let day_no = match day.hijri_day.as_deref() {
            Some(h) => season.day_number_from_hijri(h),
            None => class.day,
        };
        let parsed = ParsedTimetable::try_from(&day.timetable)?;
        let info = fasting_duration(parsed.get(PrayerKey::Imsak), parsed.get(PrayerKey::Maghrib));

        let mark = if class.is_qadr_night {
            "✦"
        } else if class.is_last_ten {
            "·"
        } else {
            " "
        };

        let line = format!(
            "  {:>4}  {}  {}  {}    {}  {}",
            day_no,
            day.date.format("%d/%m"),
            parsed.get(PrayerKey::Imsak),
            parsed.get(PrayerKey::Maghrib),
            info.duration,
            mark
        );

        if class.is_today {
            println_colored!(GOLD, "{}  ◀ today", line);
        } else if class.is_last_ten {
            println_colored!(GREEN, "{}", line);
        } else {
            println!("{}", line);
        }
    }

    println!();
    println_colored!(DIM, "  ✦ Laylat al-Qadr (night {})  ·  last ten nights", season.qadr_night);
    println!();
    Ok(())
}

// ─── Fasting log ─────────────────────────────────────────────────────────────

pub fn handle_fast(conn: &Connection, config: &AppConfig, missed: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let today_str = today.format("%Y-%m-%d").to_string();

    if missed {
        FastingRepo::mark(conn, &today_str, FastStatus::Missed)?;
        println_colored!(RED, "  ✗ Today marked as missed");
    } else {
        FastingRepo::mark(conn, &today_str, FastStatus::Fasted)?;
        println_colored!(GREEN, "  ✓ Today marked as fasted");
    }

    let season = config.ramadan.season()?;
    if !season.is_active(today) {
        println_colored!(AMBER, "  Note: {} is outside the configured season", today_str);
    }
    Ok(())
}

pub fn handle_stats(conn: &Connection, config: &AppConfig) -> Result<()> {
    let season = config.ramadan.season()?;
    let today = Local::now().date_naive();
    let start_str = season.start.format("%Y-%m-%d").to_string();
    let end_str = season
        .date_of_day(season.days)
        .format("%Y-%m-%d")
        .to_string();

    let stats = FastingRepo::stats(conn, &start_str, &end_str)?;
    let day = season.day_number(today);

    println!();
    println_colored!(GOLD, "  Fasting — Ramadan {}", season.start.format("%Y"));
    println!();
    if day == 0 {
        println_colored!(DIM, "  Ramadan has not started yet (begins {})", start_str);
    } else {
        println_colored!(
            BOLD,
            "  Day {}/{}   {}",
            day,
            season.days,
            progress_bar(day, season.days, 20)
        );
    }
    println!();
    println_colored!(GREEN, "  Fasted:  {} days", stats.fasted);
    if stats.missed > 0 {
        println_colored!(RED, "  Missed:  {} days", stats.missed);
    }
    println_colored!(
        AMBER,
        "  Streak:  {} days current  |  {} days best",
        stats.current_streak,
        stats.best_streak
    );
    println!();
    Ok(())
}

// ─── Qibla ───────────────────────────────────────────────────────────────────

pub fn handle_qibla(config: &AppConfig) -> Result<()> {
    let lat = config.location.latitude;
    let lng = config.location.longitude;
    let angle = geo::qibla_angle(lat, lng);
    let km = geo::distance_to_mecca(lat, lng);

    println!();
    println_colored!(GOLD, "  Qibla from {}", config.location.name);
    println!();
    println_colored!(BOLD, "  Bearing:   {:.1}° from North", angle);
    println_colored!(DIM, "  Distance:  {} km to Mecca", km);
    println!();
    Ok(())
}

// ─── Cities ──────────────────────────────────────────────────────────────────

pub fn handle_cities(query: Option<&str>) -> Result<()> {
    let matches = geo::search(query.unwrap_or(""));
    if matches.is_empty() {
        println_colored!(RED, "  No city matches");
        return Ok(());
    }

    println!();
    for city in matches {
        println!(
            "  {}{}  {:.4}, {:.4}",
            pad_display(city.name_fr, 22),
            pad_display(city.name_ar, 14),
            city.lat,
            city.lng
        );
    }
    println!();
    Ok(())
}

// ─── Dua ─────────────────────────────────────────────────────────────────────

pub fn handle_dua(conn: &Connection, config: &AppConfig) -> Result<()> {
    let season = config.ramadan.season()?;
    let day = season.day_number(Local::now().date_naive());

    let parsed = today_table(conn, config)
        .ok()
        .and_then(|t| ParsedTimetable::try_from(&t).ok());

    let category = adhkar::contextual_category(parsed.as_ref(), day, now_minutes());
    let duas = adhkar::duas_for(category);

    println!();
    println_colored!(GOLD, "  {} adhkar", category.display_name());
    println!();
    for dua in duas {
        println_colored!(GOLD, "  {}", dua.title_fr);
        println_colored!(BOLD, "  {}", dua.text_ar);
        println_colored!(DIM, "  {}", dua.transliteration);
        println!("  {}", dua.translation_fr);
        if let Some(n) = dua.repeat_count {
            println_colored!(AMBER, "  (repeat {}×)", n);
        }
        println_colored!(DIM, "  — {}", dua.source);
        println!();
    }
    Ok(())
}

// ─── Import / Export ─────────────────────────────────────────────────────────

pub fn handle_import(conn: &Connection, path: &Path) -> Result<()> {
    let stored = import_month(conn, path)?;
    println_colored!(GREEN, "  ✓ Imported {} days from {:?}", stored, path);
    Ok(())
}

pub fn handle_export(conn: &Connection, config: &AppConfig) -> Result<()> {
    let season = config.ramadan.season()?;
    let calc = make_calculator(config)?;
    calc.ensure_cached(conn, season.start, season.days)?;

    let start_str = season.start.format("%Y-%m-%d").to_string();
    let end_str = season
        .date_of_day(season.days)
        .format("%Y-%m-%d")
        .to_string();
    let days = CacheRepo::get_range(conn, &start_str, &end_str)?;
    let today = Local::now().date_naive();

    println!("# imsakiyya — Ramadan {}", season.start.format("%Y"));
    println!("# {} ({:.4}, {:.4})", config.location.name, config.location.latitude, config.location.longitude);
    println!();
    println!("day  date        imsak  maghrib  fast");
    for (idx, day) in days.iter().enumerate() {
        let class = season.classify(idx, day.date, today);
        let day_no = match day.hijri_day.as_deref() {
            Some(h) => season.day_number_from_hijri(h),
            None => class.day,
        };
        let parsed = ParsedTimetable::try_from(&day.timetable)?;
        let info = fasting_duration(parsed.get(PrayerKey::Imsak), parsed.get(PrayerKey::Maghrib));
        println!(
            "{:>3}  {}  {}  {}    {}{}",
            day_no,
            day.date.format("%Y-%m-%d"),
            parsed.get(PrayerKey::Imsak),
            parsed.get(PrayerKey::Maghrib),
            info.duration,
            if class.is_qadr_night { "  *" } else { "" }
        );
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn parse_coords(s: &str) -> Option<(f64, f64)> {
    let (lat, lng) = s.split_once(',')?;
    Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
