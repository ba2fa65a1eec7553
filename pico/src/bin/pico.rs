// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use mimalloc::MiMalloc;
use pico::{CLIArg, DEFAULT_LOG_FILE_PATH, EditorConfig, RawModeGuard, StdTerminal,
           TracingConfig, run_app, try_initialize_logging_global};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(
            DEFAULT_LOG_FILE_PATH,
            cli_arg.global_options.log_level.into(),
        ))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    if cli_arg.file_paths.len() > 1 {
        tracing::warn!(
            message = "Only the first file is opened",
            ignored = ?&cli_arg.file_paths[1..]
        );
    }

    let raw_mode = RawModeGuard::try_new()?;
    let mut terminal = StdTerminal::new();
    let result =
        run_app(cli_arg.maybe_file_path(), &mut terminal, EditorConfig::default());

    // Leave raw mode before miette prints the report, if any.
    let restore_result = raw_mode.restore();
    result?;
    restore_result?;

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}
