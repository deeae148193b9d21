use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::RamadanSeason;

fn default_city_id() -> String {
    "tunis".to_string()
}
fn default_location_name() -> String {
    "Tunis".to_string()
}
fn default_latitude() -> f64 {
    36.8065
}
fn default_longitude() -> f64 {
    10.1815
}
fn default_calc_method() -> String {
    "MuslimWorldLeague".to_string()
}
fn default_madhab() -> String {
    "Shafi".to_string()
}
fn default_timezone_offset() -> i32 {
    60
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_ramadan_start() -> String {
    "2026-02-19".to_string()
}
fn default_ramadan_days() -> u32 {
    30
}
fn default_qadr_night() -> u32 {
    27
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_city_id")]
    pub city_id: String,
    #[serde(default = "default_location_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_calc_method")]
    pub calc_method: String,
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: i32, // minutes from UTC
    /// Days to add/subtract from the Hijri date for local moon sighting.
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            city_id: default_city_id(),
            name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            calc_method: default_calc_method(),
            madhab: default_madhab(),
            timezone_offset: default_timezone_offset(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamadanConfig {
    /// Officially declared first day, "YYYY-MM-DD". The ministry date can
    /// differ from the astronomical one by a day.
    #[serde(default = "default_ramadan_start")]
    pub start_date: String,
    #[serde(default = "default_ramadan_days")]
    pub days: u32,
    /// Which night the calendar highlights as Laylat al-Qadr.
    #[serde(default = "default_qadr_night")]
    pub qadr_night: u32,
}

impl Default for RamadanConfig {
    fn default() -> Self {
        Self {
            start_date: default_ramadan_start(),
            days: default_ramadan_days(),
            qadr_night: default_qadr_night(),
        }
    }
}

impl RamadanConfig {
    pub fn season(&self) -> Result<RamadanSeason> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .with_context(|| format!("Bad ramadan.start_date '{}'", self.start_date))?;
        Ok(RamadanSeason::new(start, self.days, self.qadr_night))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub ramadan: RamadanConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "imsakiyya")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("imsakiyya.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_to_a_season() {
        let season = RamadanConfig::default().season().unwrap();
        assert_eq!(season.days, 30);
        assert_eq!(season.qadr_night, 27);
        assert_eq!(
            season.start,
            NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
        );
    }

    #[test]
    fn bad_start_date_is_an_error() {
        let cfg = RamadanConfig {
            start_date: "19/02/2026".to_string(),
            ..Default::default()
        };
        assert!(cfg.season().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            "[location]\nname = \"Sfax\"\nlatitude = 34.74\nlongitude = 10.76\n",
        )
        .unwrap();
        assert_eq!(cfg.location.name, "Sfax");
        assert_eq!(cfg.location.timezone_offset, 60);
        assert_eq!(cfg.ramadan.days, 30);
    }
}
