use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use conference_clock::{
    abbreviated_time_string, parse_locale, parse_timezone, session_state, time_range_string,
    time_string, Clock, ConferenceConfig, ConferenceDay, ConferenceSchedule, FixedClock, Session,
    SystemClock,
};
use serde_json::{json, Map, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "confclock",
    version,
    about = "Conference time windows: session state, day labels, and conference status"
)]
struct Cli {
    /// Conference config JSON file (default: CONFERENCE_* environment variables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference instant in RFC 3339 (default: system clock)
    #[arg(long, global = true, value_parser = parse_instant)]
    now: Option<DateTime<FixedOffset>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print BEFORE, DURING or AFTER for a session slot
    State {
        #[arg(long, value_parser = parse_instant)]
        start: DateTime<FixedOffset>,
        #[arg(long, value_parser = parse_instant)]
        end: DateTime<FixedOffset>,
    },
    /// Print whether the conference has started or ended, today's day, and open features as JSON
    Status,
    /// Print the label of a configured conference day
    Label {
        #[arg(long, value_parser = parse_instant)]
        start: DateTime<FixedOffset>,
        #[arg(long, value_parser = parse_instant)]
        end: DateTime<FixedOffset>,
        /// Use "Day N" instead of the date in the conference timezone
        #[arg(long)]
        plain: bool,
    },
    /// Render an instant or a session slot for display
    Format {
        #[arg(long, value_parser = parse_instant)]
        start: DateTime<FixedOffset>,
        #[arg(long, value_parser = parse_instant)]
        end: Option<DateTime<FixedOffset>>,
        /// Short date only (ignores --end)
        #[arg(long)]
        abbreviated: bool,
        /// IANA timezone to render in (default: the conference timezone)
        #[arg(long)]
        tz: Option<String>,
        #[arg(long, default_value = "en_US")]
        locale: String,
    },
}

fn parse_instant(s: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("'{s}' is not RFC 3339: {e}"))
}

fn load_schedule(config: Option<&PathBuf>) -> Result<ConferenceSchedule> {
    let config = match config {
        Some(path) => ConferenceConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => ConferenceConfig::from_env().context("failed to read CONFERENCE_* environment")?,
    };
    config
        .into_schedule()
        .context("invalid conference configuration")
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clock: Box<dyn Clock> = match cli.now {
        Some(now) => Box::new(FixedClock::new(now)),
        None => Box::new(SystemClock),
    };
    let now = clock.now();
    debug!(%now, "reference instant");

    match cli.command {
        Command::State { start, end } => {
            let session = Session::new("cli", "", start, end);
            println!("{}", session_state(Some(&session), &now));
        }
        Command::Status => {
            let schedule = load_schedule(cli.config.as_ref())?;
            let current_day = schedule
                .day_at(&now)
                .map(|(_, day)| schedule.day_label(day, false));
            let mut features = Map::new();
            for (name, _) in schedule.features() {
                let open = schedule.is_feature_open(name, &now)?;
                features.insert(name.to_string(), Value::Bool(open));
            }
            let status = json!({
                "started": schedule.has_conference_started(&now),
                "ended": schedule.has_conference_ended(&now),
                "current_day": current_day,
                "features": features,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::Label { start, end, plain } => {
            let schedule = load_schedule(cli.config.as_ref())?;
            let day = ConferenceDay::new(start, end)?;
            if schedule.day_index(&day).is_none() {
                bail!(
                    "unknown conference day: {} - {}",
                    start.to_rfc3339(),
                    end.to_rfc3339()
                );
            }
            println!("{}", schedule.day_label(&day, !plain));
        }
        Command::Format {
            start,
            end,
            abbreviated,
            tz,
            locale,
        } => {
            let tz = match tz {
                Some(name) => parse_timezone(&name)?,
                None => load_schedule(cli.config.as_ref())?.timezone(),
            };
            let locale = parse_locale(&locale)?;
            let text = match (abbreviated, end) {
                (true, _) => abbreviated_time_string(&start, tz, locale),
                (false, Some(end)) => time_range_string(&start, &end, tz, locale),
                (false, None) => time_string(&start, tz, locale),
            };
            println!("{text}");
        }
    }

    Ok(())
}
