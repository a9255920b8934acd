use argh::FromArgs;
use axis_stats::api::settings::array_settings::{
    DEFAULT_COLS, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_ROWS,
};
use axis_stats::prelude::*;
use thiserror::Error;
use tracing::{info, Level};

/// Compute mean, sum, and median by axis for a 2D array.
#[derive(FromArgs, Debug)]
pub struct Args {
    /// number of rows (default: 4)
    #[argh(option, default = "DEFAULT_ROWS")]
    rows: usize,

    /// number of cols (default: 3)
    #[argh(option, default = "DEFAULT_COLS")]
    cols: usize,

    /// random seed (optional); without it the grid is 1..=rows*cols
    #[argh(option)]
    seed: Option<u64>,

    /// min integer value for random data (default: 1)
    #[argh(option, default = "DEFAULT_LOW")]
    low: i64,

    /// max integer value for random data (default: 12)
    #[argh(option, default = "DEFAULT_HIGH")]
    high: i64,

    /// output format: text or table (default: text)
    #[argh(option, default = "ReportFormat::Text")]
    format: ReportFormat,

    /// log progress to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

/// Errors that can occur while producing the report
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl From<&Args> for ArraySettings {
    fn from(args: &Args) -> Self {
        ArraySettings::new(args.rows, args.cols, args.seed, args.low, args.high)
    }
}

fn main() -> Result<(), CliError> {
    let args: Args = argh::from_env();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let settings = ArraySettings::from(&args);
    info!(?settings, format = ?args.format, "Starting");

    let array = make_array(&settings)?;
    let stats = compute_stats(&array)?;
    print_report(&array.view(), &stats, args.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["axis-stats"], args).unwrap()
    }

    #[test]
    fn defaults_match_library() {
        let args = parse(&[]);
        assert_eq!(ArraySettings::from(&args), ArraySettings::default());
        assert_eq!(args.format, ReportFormat::Text);
        assert!(!args.verbose);
    }

    #[test]
    fn options_are_forwarded() {
        let args = parse(&[
            "--rows", "5", "--cols", "4", "--seed", "7", "--low", "10", "--high", "99", "-v",
        ]);
        assert_eq!(
            ArraySettings::from(&args),
            ArraySettings::new(5, 4, Some(7), 10, 99)
        );
        assert!(args.verbose);
    }

    #[test]
    fn negative_rows_fail_to_parse() {
        assert!(Args::from_args(&["axis-stats"], &["--rows", "-1"]).is_err());
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        assert!(Args::from_args(&["axis-stats"], &["--format", "json"]).is_err());
    }
}
