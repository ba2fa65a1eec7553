// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fatal errors. These end the session: the terminal is restored and the error is
//! reported by [`miette`].
//!
//! Recoverable outcomes are not errors. A failed save is reported through the status
//! message (see [`crate::SaveOutcome`]), a cancelled prompt is `Ok(None)`, and out of
//! range cursor moves are clamped.

use std::{io, path::PathBuf};

use miette::Diagnostic;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum PicoError {
    /// The file given on the command line could not be read.
    #[error("Could not open file '{}'", path.display())]
    #[diagnostic(
        code(pico::open_file),
        help("Check that the file exists and that you have permission to read it")
    )]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to determine the size of the terminal window.
    #[error("Could not get the terminal window size")]
    #[diagnostic(
        code(pico::window_size),
        help("pico must be run inside an interactive terminal")
    )]
    WindowSize(#[source] io::Error),

    /// Failed to switch the terminal into raw mode, or back out of it.
    #[error("Could not change terminal raw mode")]
    #[diagnostic(
        code(pico::raw_mode),
        help("stdin must be connected to a tty")
    )]
    RawMode(#[source] io::Error),

    /// Reading from stdin failed (other than a timeout or an interrupted read).
    #[error("Could not read input from the terminal")]
    #[diagnostic(code(pico::read_input))]
    ReadInput(#[source] io::Error),

    /// Writing a frame to stdout failed.
    #[error("Could not write output to the terminal")]
    #[diagnostic(code(pico::write_output))]
    WriteOutput(#[source] io::Error),
}
