mod adhkar;
mod cli;
mod config;
mod db;
mod engine;
mod geo;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::repository::MetaRepo;
use prayer_times::TimetableCalculator;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open DB
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    // Enable WAL mode for better concurrent access
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    // Run migrations on every startup
    run_migrations(&conn)?;

    match cli.command {
        // Setup wizard
        Some(Commands::Setup { reset }) => {
            handlers::handle_setup(&conn, &mut config, reset)?;
        }

        // Cities and Qibla need no cache, only config defaults
        Some(Commands::Cities { query }) => {
            handlers::handle_cities(query.as_deref())?;
        }

        // Explicit subcommands — check setup first
        Some(cmd) => {
            ensure_setup(&conn, &mut config)?;
            match cmd {
                Commands::Times => {
                    handlers::handle_times(&conn, &config)?;
                }
                Commands::Calendar => {
                    handlers::handle_calendar(&conn, &config)?;
                }
                Commands::Fast { missed } => {
                    handlers::handle_fast(&conn, &config, missed)?;
                }
                Commands::Stats => {
                    handlers::handle_stats(&conn, &config)?;
                }
                Commands::Qibla => {
                    handlers::handle_qibla(&config)?;
                }
                Commands::Dua => {
                    handlers::handle_dua(&conn, &config)?;
                }
                Commands::Import { path } => {
                    handlers::handle_import(&conn, &path)?;
                }
                Commands::Export => {
                    handlers::handle_export(&conn, &config)?;
                }
                Commands::Setup { .. } | Commands::Cities { .. } => unreachable!(),
            }
        }

        // No subcommand → launch TUI
        None => {
            ensure_setup(&conn, &mut config)?;
            // Pre-cache the whole season so the calendar view opens instantly
            if let Ok(season) = config.ramadan.season() {
                if let Ok(calc) = TimetableCalculator::new(
                    config.location.latitude,
                    config.location.longitude,
                    &config.location.calc_method,
                    &config.location.madhab,
                    config.location.timezone_offset,
                ) {
                    let _ = calc.ensure_cached(&conn, season.start, season.days);
                }
            }
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}

/// Check if setup has been done; if not, run the wizard automatically.
fn ensure_setup(conn: &Connection, config: &mut AppConfig) -> Result<()> {
    let done = MetaRepo::get(conn, "setup_done")?;
    if done.as_deref() != Some("1") {
        eprintln!("No configuration found. Running setup...");
        eprintln!();
        handlers::handle_setup(conn, config, false)?;
    }
    Ok(())
}
