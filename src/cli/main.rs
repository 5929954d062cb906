//! Command-line interface entry point for `NuEnroll`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use nu_enroll::config::Config;
use nu_enroll::core::store::Store;
use nu_enroll::info;
use nu_enroll::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let store = Store::new(&config.store.path);

    let outcome = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Populate { data_dir } => {
            commands::populate::run(data_dir.as_deref(), &store, &config).map(|_| ())
        }
        Command::Enrollment { view } => {
            commands::views::run(commands::views::View::Enrollment, &view, &store, &config)
        }
        Command::Popularity { view } => {
            commands::views::run(commands::views::View::Popularity, &view, &store, &config)
        }
        Command::Search { descriptions } => commands::search::run(&descriptions, &store),
        Command::Run {
            data_dir,
            threshold,
            searches,
        } => commands::run::run(data_dir.as_deref(), threshold, &searches, &store, &config),
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
