//! CLI argument parsing for grades

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::gradebook::Settings;

/// Largest number of decimal places accepted by the precision flags.
const MAX_PRECISION: i64 = 20;

fn precision() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=MAX_PRECISION)
}

/// Parse and calculate grades from file.
#[derive(Parser, Debug)]
#[command(name = "grades")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Grades file
    #[arg(value_name = "grades-file")]
    pub input: PathBuf,

    /// Recalculate and update the grades file
    #[arg(short, long)]
    pub update: bool,

    /// Optional output file
    #[arg(short = 'o', value_name = "output-file")]
    pub output: Option<PathBuf>,

    /// Don't print warnings about malformed rows or output files
    #[arg(short, long)]
    pub quiet: bool,

    /// Decimal places for category weights
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = precision())]
    pub weight_precision: u8,

    /// Decimal places for assignment points and percentages
    #[arg(long, value_name = "N", default_value_t = 3, value_parser = precision())]
    pub assignment_precision: u8,

    /// Decimal places for the final grade
    #[arg(long, value_name = "N", default_value_t = 3, value_parser = precision())]
    pub final_precision: u8,

    /// Log level or filter directive (e.g. debug, grades=trace)
    #[arg(long, env = "GRADES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: (),
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            weight_precision: usize::from(self.weight_precision),
            assignment_precision: usize::from(self.assignment_precision),
            final_precision: usize::from(self.final_precision),
            warnings: !self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_settings() {
        let cli = Cli::try_parse_from(["grades", "grades.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("grades.txt"));
        assert!(!cli.update);
        assert_eq!(cli.output, None);
        assert_eq!(cli.settings(), Settings::default());
    }

    #[test]
    fn test_settings_from_flags() {
        let cli = Cli::try_parse_from([
            "grades",
            "-q",
            "--final-precision",
            "1",
            "--weight-precision=0",
            "grades.txt",
        ])
        .unwrap();
        let settings = cli.settings();
        assert!(!settings.warnings);
        assert_eq!(settings.final_precision, 1);
        assert_eq!(settings.weight_precision, 0);
        assert_eq!(settings.assignment_precision, 3);
    }

    #[test]
    fn test_precision_out_of_range() {
        for flag in [
            "--weight-precision",
            "--assignment-precision",
            "--final-precision",
        ] {
            let err = Cli::try_parse_from(["grades", flag, "70000", "grades.txt"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }

        let cli = Cli::try_parse_from(["grades", "--final-precision", "20", "grades.txt"]).unwrap();
        assert_eq!(cli.settings().final_precision, 20);
    }

    #[test]
    fn test_update_and_output() {
        let cli = Cli::try_parse_from(["grades", "-u", "-o", "out.txt", "grades.txt"]).unwrap();
        assert!(cli.update);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_missing_input() {
        let err = Cli::try_parse_from(["grades"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
