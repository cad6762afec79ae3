//! `oncall-shift`: encode and inspect on-call shift schedules.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use oncall_schedule::{
    format_duration_shorthand, parse_duration_shorthand, seconds_to_weekday_start,
    weekday_start_to_seconds, ProviderConfig, ProviderSettings, Schedule, ScheduleSpec,
};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "ONCALL_LOG";

#[derive(Parser)]
#[command(name = "oncall-shift", version)]
#[command(about = "Encode and inspect weekly on-call shift schedules")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a weekday and HH:MM start time to seconds since Sunday 00:00
    Encode {
        /// Full weekday name, any case
        day: String,
        /// 24-hour start time, e.g. 13:15
        time: String,
    },

    /// Convert seconds since Sunday 00:00 back to a weekday and HH:MM
    Decode {
        seconds: u64,
    },

    /// Parse or format duration shorthand (1w2d3h4m5s)
    Duration {
        #[command(subcommand)]
        action: DurationAction,
    },

    /// Convert between schedule declarations and API payloads
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Print the resolved service connection settings
    Config {
        /// Everything before '/api/v0' [env: ONCALL_ENDPOINT]
        #[arg(long)]
        endpoint: Option<String>,

        /// [env: ONCALL_USERNAME]
        #[arg(long)]
        username: Option<String>,

        /// [env: ONCALL_PASSWORD]
        #[arg(long)]
        password: Option<String>,

        /// api or user [env: ONCALL_AUTH_TYPE]
        #[arg(long)]
        auth_type: Option<String>,
    },
}

#[derive(Subcommand)]
enum DurationAction {
    /// Shorthand to seconds
    Parse { text: String },
    /// Seconds to canonical shorthand
    Format { seconds: u64 },
}

#[derive(Subcommand)]
enum ScheduleAction {
    /// Schedule declaration JSON → API schedule payload JSON
    Build {
        /// Input file (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// API schedule payload JSON → schedule declaration JSON
    Read {
        /// Input file (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct DecodedStart {
    weekday_index: u64,
    weekday: Option<&'static str>,
    start_time: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Encode { day, time } => {
            let seconds = weekday_start_to_seconds(&day, &time)
                .with_context(|| format!("invalid shift start '{day} {time}'"))?;
            println!("{seconds}");
        }
        Command::Decode { seconds } => {
            let start = seconds_to_weekday_start(seconds);
            let decoded = DecodedStart {
                weekday_index: start.weekday_index,
                weekday: start.weekday_name(),
                start_time: start.clock_time().to_string(),
            };
            println!("{}", serde_json::to_string(&decoded)?);
        }
        Command::Duration { action } => match action {
            DurationAction::Parse { text } => {
                let seconds = parse_duration_shorthand(&text)
                    .with_context(|| format!("invalid duration '{text}'"))?;
                println!("{seconds}");
            }
            DurationAction::Format { seconds } => {
                println!("{}", format_duration_shorthand(seconds));
            }
        },
        Command::Schedule { action } => match action {
            ScheduleAction::Build { file } => {
                let input = read_input(file.as_ref())?;
                let spec: ScheduleSpec =
                    serde_json::from_str(&input).context("parsing schedule declaration")?;
                let id = spec.schedule_id().context("resolving schedule id")?;
                debug!(schedule = %id, "building schedule payload");
                let schedule = spec
                    .to_schedule()
                    .with_context(|| format!("building schedule {id}"))?;
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            }
            ScheduleAction::Read { file } => {
                let input = read_input(file.as_ref())?;
                let schedule: Schedule =
                    serde_json::from_str(&input).context("parsing schedule payload")?;
                let spec = ScheduleSpec::from_schedule(&schedule).with_context(|| {
                    format!(
                        "reading schedule {}/{}/{}",
                        schedule.team, schedule.roster, schedule.role
                    )
                })?;
                println!("{}", serde_json::to_string_pretty(&spec)?);
            }
        },
        Command::Config {
            endpoint,
            username,
            password,
            auth_type,
        } => {
            let settings = ProviderSettings {
                endpoint,
                username,
                password,
                auth_type,
            };
            let config =
                ProviderConfig::from_env(&settings).context("resolving provider config")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
