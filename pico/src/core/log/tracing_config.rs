// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Default log file, created in the current directory.
pub const DEFAULT_LOG_FILE_PATH: &str = "log.txt";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    /// Logging is disabled.
    None,
    /// Append to the file at this path.
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(path: impl Into<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level_filter,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}
