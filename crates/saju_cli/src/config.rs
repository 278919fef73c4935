//! Config file loading and command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use saju_base::{DaewoonAgeMethod, SajuConfig, ZiHourRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgeMethodArg {
    Heuristic,
    SolarTerm,
}

impl From<AgeMethodArg> for DaewoonAgeMethod {
    fn from(arg: AgeMethodArg) -> Self {
        match arg {
            AgeMethodArg::Heuristic => Self::Heuristic,
            AgeMethodArg::SolarTerm => Self::SolarTerm,
        }
    }
}

/// Flags that override individual config fields.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Civil time zone of the birth time, minutes east of UTC
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,
    /// Birthplace longitude in degrees east (enables local mean time)
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    /// Change the day at 23:00 instead of midnight
    #[arg(long)]
    pub early_zi: bool,
    /// Daewoon starting-age method
    #[arg(long, value_enum)]
    pub daewoon_age: Option<AgeMethodArg>,
    /// Years in the samsae outlook
    #[arg(long)]
    pub samsae_years: Option<u8>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut SajuConfig) {
        if let Some(offset) = self.utc_offset {
            config.utc_offset_minutes = offset;
        }
        if let Some(lon) = self.longitude {
            config.longitude_deg = Some(lon);
        }
        if self.early_zi {
            config.zi_hour = ZiHourRule::Early;
        }
        if let Some(method) = self.daewoon_age {
            config.daewoon_age = method.into();
        }
        if let Some(n) = self.samsae_years {
            config.samsae_years = n;
        }
    }
}

/// Read a TOML config file.
pub fn read_config_file(path: &Path) -> Result<SajuConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Defaults, then the config file (if any), then flags; validated.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<SajuConfig> {
    let mut config = match path {
        Some(p) => read_config_file(p)?,
        None => SajuConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate().context("invalid configuration")?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let cfg = load_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(cfg, SajuConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("daewoon_age = \"solar_term\"\nzi_hour = \"early\"\n");
        let cfg = load_config(Some(file.path()), &ConfigOverrides::default()).unwrap();
        assert_eq!(cfg.daewoon_age, DaewoonAgeMethod::SolarTerm);
        assert_eq!(cfg.zi_hour, ZiHourRule::Early);
        assert_eq!(cfg.utc_offset_minutes, 540);
        assert_eq!(cfg.samsae_years, 5);
    }

    #[test]
    fn flags_override_file() {
        let file = write_config("utc_offset_minutes = 480\nlongitude_deg = 121.5\n");
        let overrides = ConfigOverrides {
            utc_offset: Some(540),
            samsae_years: Some(3),
            daewoon_age: Some(AgeMethodArg::Heuristic),
            ..ConfigOverrides::default()
        };
        let cfg = load_config(Some(file.path()), &overrides).unwrap();
        assert_eq!(cfg.utc_offset_minutes, 540);
        assert_eq!(cfg.longitude_deg, Some(121.5));
        assert_eq!(cfg.samsae_years, 3);
        assert_eq!(cfg.daewoon_age, DaewoonAgeMethod::Heuristic);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_config("samsae_years = 0\n");
        assert!(load_config(Some(file.path()), &ConfigOverrides::default()).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = write_config("utc_offset_minutes = \"nine\"\n");
        let err = read_config_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(read_config_file(&path).is_err());
    }
}
