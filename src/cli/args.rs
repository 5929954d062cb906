//! CLI argument definitions for `NuEnroll`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nu_enroll::config::ConfigOverrides;
use nu_enroll::core::report::ReportFormat;
use nu_enroll::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `store`, `data_dir`, `threshold`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Options shared by the aggregate view commands
#[derive(Debug, Clone, clap::Args)]
pub struct ViewArgs {
    /// Minimum total enrollment for a course to be listed (default: config `threshold`)
    #[arg(short, long, value_name = "N")]
    pub threshold: Option<i64>,

    /// Output format: text, csv, or markdown (md)
    #[arg(short, long, value_name = "FORMAT", default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the view to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the view into the config `reports_dir`
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Load every semester CSV in a directory and rebuild the database.
    ///
    /// Each `SEM.csv` becomes table `SEM`; all of them are then merged into `ClassData`.
    Populate {
        /// Directory holding the semester CSV files (default: config `data_dir`)
        #[arg(value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },
    /// Show total enrollment per course, highest first.
    Enrollment {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show enrollment-to-capacity ratio per course, most popular first.
    Popularity {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Search by exact course ID, partial course name, or partial semester.
    Search {
        /// One or more descriptions; each produces its own result block
        #[arg(value_name = "DESCRIPTION", num_args = 1.., required = true)]
        descriptions: Vec<String>,
    },
    /// Populate, print both views, then run the example searches.
    Run {
        /// Directory holding the semester CSV files (default: config `data_dir`)
        #[arg(value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Threshold for both views
        #[arg(short, long, value_name = "N", default_value_t = 100)]
        threshold: i64,

        /// Searches to run after the views
        #[arg(short, long = "search", value_name = "DESCRIPTION", default_values_t = [String::from("Algebra"), String::from("2020")])]
        searches: Vec<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "nuenroll",
    about = "NuEnroll command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the database file for this run
    #[arg(long = "store", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Override the semester CSV directory for this run
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reports directory for this run
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            store: self.store.as_ref().map(path_string),
            data_dir: self.data_dir.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["nuenroll", "config"]);
        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.store.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "nuenroll",
            "--config-level",
            "debug",
            "--config-verbose",
            "yes",
            "--store",
            "/tmp/classes.db",
            "--data-dir",
            "/data",
            "populate",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.store, Some("/tmp/classes.db".to_string()));
        assert_eq!(overrides.data_dir, Some("/data".to_string()));
    }

    #[test]
    fn test_run_defaults_match_example_session() {
        let cli = Cli::parse_from(["nuenroll", "run"]);
        match cli.command {
            Command::Run {
                data_dir,
                threshold,
                searches,
            } => {
                assert!(data_dir.is_none());
                assert_eq!(threshold, 100);
                assert_eq!(searches, vec!["Algebra", "2020"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_view_args_parse_format() {
        let cli = Cli::parse_from(["nuenroll", "popularity", "-t", "5", "-f", "md"]);
        match cli.command {
            Command::Popularity { view } => {
                assert_eq!(view.threshold, Some(5));
                assert_eq!(view.format, ReportFormat::Markdown);
                assert!(view.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_description() {
        assert!(Cli::try_parse_from(["nuenroll", "search"]).is_err());
    }
}
