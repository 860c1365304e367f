use crate::cli::Args;
use crate::colors::{self, ColorRange};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Where frames come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Webcam(i32),
    File(PathBuf),
}

/// Immutable tracker settings, built once from the command line
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub color_name: String,
    pub color_range: ColorRange,
    pub trail_length: usize,
    pub trail_width: f64,
    pub source: InputSource,
    pub output_root: PathBuf,
    pub min_radius: i32,
    pub keep_small_detections: bool,
    pub headless: bool,
}

impl TrackerConfig {
    /// Whether frames are exported and assembled into a video afterwards
    pub fn is_file_mode(&self) -> bool {
        matches!(self.source, InputSource::File(_))
    }

    /// Webcam frames are mirrored so the display behaves like a mirror
    pub fn mirror_frames(&self) -> bool {
        matches!(self.source, InputSource::Webcam(_))
    }
}

/// Builds a tracker configuration from command line arguments
pub fn build_config(args: &Args) -> Result<TrackerConfig, ConfigError> {
    let color_name = colors::normalize_color_name(&args.color);
    let color_range = colors::lookup(&color_name)?;

    if args.trail_length == 0 {
        return Err(ConfigError::InvalidTrailLength);
    }
    if !args.trail_width.is_finite() || args.trail_width < 0.0 {
        return Err(ConfigError::InvalidTrailWidth(args.trail_width));
    }

    let source = match &args.input {
        Some(path) => InputSource::File(validate_input_path(Path::new(path))?),
        None if args.headless => return Err(ConfigError::HeadlessWebcam),
        None => InputSource::Webcam(args.camera),
    };

    Ok(TrackerConfig {
        color_name,
        color_range,
        trail_length: args.trail_length,
        trail_width: args.trail_width,
        source,
        output_root: PathBuf::from(&args.output_dir),
        min_radius: args.min_radius,
        keep_small_detections: args.keep_small_detections,
        headless: args.headless,
    })
}

fn validate_input_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ConfigError::InputNotFile(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
