// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures shared by unit tests and the integration tests in `tests/`.

// Attach.
pub mod temp_dir;
pub mod terminal_mock;

// Re-export.
pub use temp_dir::*;
pub use terminal_mock::*;
