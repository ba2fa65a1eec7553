// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Note that if you wrap this up in a non blocking writer, it doesn't work, since the
/// worker guard would have to outlive the editor's main loop.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = match path.parent() {
        // A bare file name like "log.txt" has an empty parent.
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => {
            return Err(miette::miette!(
                "Can't access the folder of {}. It might not exist, or you don't have the required permissions.",
                path.display()
            ));
        }
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_try_create_in_dir() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("pico.log");
        let appender = try_create(file_path.to_str().unwrap());
        assert!(appender.is_ok());
    }

    #[test]
    fn test_try_create_no_file_name() {
        assert!(try_create("/").is_err());
    }
}
