use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imsakiyya", version, about = "A terminal Ramadan imsakiyya for Tunisia")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-run setup (city, coordinates, Ramadan start date)
    Setup {
        /// Reset existing configuration
        #[arg(long)]
        reset: bool,
    },
    /// Show today's time table and the countdown to the next prayer
    Times,
    /// Show the full Ramadan calendar with fasting durations
    Calendar,
    /// Mark today's fast
    Fast {
        /// Mark today as missed instead of fasted
        #[arg(long)]
        missed: bool,
    },
    /// Show fasting statistics for the season
    Stats,
    /// Show the Qibla direction from the configured location
    Qibla,
    /// Search the built-in city table
    Cities {
        /// Substring to match against French/Arabic names (empty lists all)
        query: Option<String>,
    },
    /// Show a dua fitting the current time of day
    Dua,
    /// Import an AlAdhan-format month JSON file into the cache
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },
    /// Export a plain-text imsakiyya for the season to stdout
    Export,
}
