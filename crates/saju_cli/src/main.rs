use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saju_base::{BirthInput, Gender, SajuCalculator, SajuConfig};
use saju_time::jeol_terms_for_year;

mod config;
mod render;

use config::{ConfigOverrides, load_config};

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) chart calculator", version)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "SAJU_CONFIG")]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(flatten)]
    overrides: ConfigOverrides,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    date: String,
    /// Birth time (HH:MM); noon when omitted
    #[arg(long)]
    time: Option<String>,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
}

impl BirthArgs {
    fn to_input(&self) -> Result<BirthInput> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", self.date))?;
        let time = self
            .time
            .as_deref()
            .map(|t| {
                NaiveTime::parse_from_str(t, "%H:%M")
                    .with_context(|| format!("invalid time '{t}', expected HH:MM"))
            })
            .transpose()?;
        let birth = BirthInput::new(
            date.year(),
            date.month(),
            date.day(),
            time.map(|t| t.hour()),
            self.gender,
        );
        Ok(birth.with_minute(time.map_or(0, |t| t.minute())))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: pillars, elements, ten gods, shinsal, daewoon, samsae
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// First year of the samsae outlook (default: current year)
        #[arg(long)]
        reference_year: Option<i32>,
    },
    /// Four pillars only
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Samsae outlook for a birth date
    Samsae {
        #[command(flatten)]
        birth: BirthArgs,
        /// First year of the outlook (default: current year)
        #[arg(long)]
        reference_year: Option<i32>,
    },
    /// The 12 jeol solar terms of a year
    SolarTerms {
        /// Gregorian year
        year: i32,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saju_cli=info,saju_base=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{s}");
    Ok(())
}

fn calculator(config: SajuConfig) -> Result<SajuCalculator> {
    SajuCalculator::new(config).context("failed to build calculator")
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), &cli.overrides)?;

    match cli.command {
        Commands::Chart {
            birth,
            reference_year,
        } => {
            let input = birth.to_input()?;
            let reference_year = reference_year.unwrap_or_else(current_year);
            let result = calculator(config)?
                .calculate(&input, reference_year)
                .context("chart calculation failed")?;
            info!(
                year = %result.texts.year,
                month = %result.texts.month,
                day = %result.texts.day,
                hour = %result.texts.hour,
                "chart calculated"
            );
            if cli.json {
                print_json(&result)?;
            } else {
                render::print_chart(&result);
            }
        }

        Commands::Pillars { birth } => {
            let input = birth.to_input()?;
            let pillars = calculator(config)?
                .pillars(&input)
                .context("pillar calculation failed")?;
            if cli.json {
                print_json(&pillars)?;
            } else {
                render::print_pillars(&pillars);
            }
        }

        Commands::Samsae {
            birth,
            reference_year,
        } => {
            let input = birth.to_input()?;
            let reference_year = reference_year.unwrap_or_else(current_year);
            let window = calculator(config)?
                .samsae(&input, reference_year)
                .context("samsae calculation failed")?;
            if cli.json {
                print_json(&window)?;
            } else {
                render::print_samsae(&window);
            }
        }

        Commands::SolarTerms { year } => {
            let events = jeol_terms_for_year(year)
                .with_context(|| format!("failed to compute solar terms for {year}"))?;
            if cli.json {
                print_json(&events)?;
            } else {
                render::print_solar_terms(&events, config.utc_offset_minutes)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chart_arguments() {
        let cli = Cli::try_parse_from([
            "saju",
            "chart",
            "1990-01-01",
            "--time",
            "12:30",
            "--gender",
            "female",
            "--reference-year",
            "2024",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Chart {
                birth,
                reference_year,
            } => {
                let input = birth.to_input().unwrap();
                assert_eq!(input.hour, Some(12));
                assert_eq!(input.minute, 30);
                assert_eq!(input.gender, Gender::Female);
                assert_eq!(reference_year, Some(2024));
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn missing_time_means_unknown_hour() {
        let cli = Cli::try_parse_from(["saju", "pillars", "2000-06-15"]).unwrap();
        let Commands::Pillars { birth } = cli.command else {
            panic!("expected pillars");
        };
        let input = birth.to_input().unwrap();
        assert_eq!(input.hour, None);
        assert_eq!(input.gender, Gender::Male);
    }

    #[test]
    fn bad_date_is_reported() {
        let cli = Cli::try_parse_from(["saju", "pillars", "2000-13-01"]).unwrap();
        let Commands::Pillars { birth } = cli.command else {
            panic!("expected pillars");
        };
        assert!(birth.to_input().is_err());
    }

    #[test]
    fn override_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "saju",
            "--utc-offset",
            "-300",
            "--early-zi",
            "solar-terms",
            "2024",
        ])
        .unwrap();
        assert_eq!(cli.overrides.utc_offset, Some(-300));
        assert!(cli.overrides.early_zi);
    }
}
