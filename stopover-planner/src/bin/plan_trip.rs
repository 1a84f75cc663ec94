//! Plan a trip from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::Parser;
use stopover_planner::backend::Backend;
use stopover_planner::domain::parse_wire_time;
use stopover_planner::export::save_day_plans;
use stopover_planner::planner::plan_trip;
use stopover_planner::settings::Settings;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Plan the overnight stops of a local-train trip.
#[derive(Debug, Parser)]
#[command(name = "plan-trip", version, long_about = None)]
struct Args {
    /// Origin station name, e.g. 品川
    origin: String,

    /// Destination station name, e.g. 仙台
    destination: String,

    /// First-day departure, YYYY-MM-DDTHH:MM:SS (optional +09:00)
    #[arg(value_parser = parse_wire_time)]
    start: NaiveDateTime,

    /// Write the plan to this JSON file
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stopover_planner=info")),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let backend = match Backend::from_settings(&settings) {
        Ok(backend) => backend,
        Err(e) => {
            error!("failed to create NAVITIME backend: {e}");
            return ExitCode::FAILURE;
        }
    };

    let days = match plan_trip(
        &backend,
        &backend,
        &settings.plan,
        &args.origin,
        &args.destination,
        args.start,
    )
    .await
    {
        Ok(days) => days,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if days.is_empty() {
        info!("no overnight stop needed");
    }
    for (i, day) in days.iter().enumerate() {
        info!("day {} stopover candidates:", i + 1);
        for stop in day.candidates() {
            info!("  - {} (ID: {})", stop.name, stop.id);
        }
    }

    if let Some(path) = args.output
        && let Err(e) = save_day_plans(&path, &days)
    {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::error::ErrorKind;

    #[test]
    fn parses_positional_arguments() {
        let args =
            Args::try_parse_from(["plan-trip", "品川", "仙台", "2020-01-01T09:00:00+09:00", "out.json"])
                .unwrap();

        assert_eq!(args.origin, "品川");
        assert_eq!(args.destination, "仙台");
        assert_eq!(
            args.start,
            NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn output_is_optional() {
        let args = Args::try_parse_from(["plan-trip", "品川", "仙台", "2020-01-01T09:00:00"]).unwrap();
        assert!(args.output.is_none());
    }

    #[test]
    fn bad_start_time_is_a_usage_error() {
        let err = Args::try_parse_from(["plan-trip", "品川", "仙台", "tomorrow"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn help_and_missing_arguments() {
        let err = Args::try_parse_from(["plan-trip", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["plan-trip", "品川"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
