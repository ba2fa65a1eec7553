// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "pico")]
#[command(about = "A minimal terminal text editor")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nProvide a file path to edit in pico. Or no arguments to edit a new file.\nUSAGE:\n  pico [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    /// Only the first path is opened.
    #[arg(name = "file path")]
    pub file_paths: Vec<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

impl CLIArg {
    #[must_use]
    pub fn maybe_file_path(&self) -> Option<&str> {
        self.file_paths.first().map(String::as_str)
    }
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "How much to log, when logging is enabled."
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let it = CLIArg::try_parse_from(["pico"]).unwrap();
        assert_eq!(it.maybe_file_path(), None);
        assert!(!it.global_options.enable_logging);
        assert_eq!(it.global_options.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_file_path_and_logging() {
        let it = CLIArg::try_parse_from([
            "pico",
            "-l",
            "--log-level",
            "trace",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(it.maybe_file_path(), Some("a.txt"));
        assert!(it.global_options.enable_logging);
        assert_eq!(LevelFilter::from(it.global_options.log_level), LevelFilter::TRACE);
    }
}
