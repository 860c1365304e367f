use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration errors reported to the user before any frame is read
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Color '{name}' not available. The available color options are {}", format_names(.available))]
    UnknownColor {
        name: String,
        available: Vec<&'static str>,
    },
    #[error("Path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("The provided path is not a video file: {}", .0.display())]
    InputNotFile(PathBuf),
    #[error("Trail length must be at least 1")]
    InvalidTrailLength,
    #[error("Trail width must be a finite, non-negative number (got {0})")]
    InvalidTrailWidth(f64),
    #[error("Headless mode needs --input; a webcam stream has no end without the Escape key")]
    HeadlessWebcam,
}

fn format_names(names: &[&str]) -> String {
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_color_message_lists_names() {
        let err = ConfigError::UnknownColor {
            name: "magenta".to_string(),
            available: vec!["black", "white"],
        };
        assert_eq!(
            err.to_string(),
            "Color 'magenta' not available. The available color options are [black, white]"
        );
    }
}
