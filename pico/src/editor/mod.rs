// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod coordinate_mapper;
pub mod editor_config;
pub mod editor_session;
pub mod input_controller;
pub mod line;
pub mod line_buffer;
pub mod prompt;
pub mod renderer;
pub mod status_message;
pub mod ui_str;
pub mod viewport;

// Re-export.
pub use coordinate_mapper::*;
pub use editor_config::*;
pub use editor_session::*;
pub use input_controller::*;
pub use line::*;
pub use line_buffer::*;
pub use prompt::*;
pub use renderer::*;
pub use status_message::*;
pub use viewport::*;
