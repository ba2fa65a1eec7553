// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging via [`tracing`]. Stdout belongs to the editor screen, so the only writer is a
//! file. Logging stays off unless it is turned on from the command line.

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
