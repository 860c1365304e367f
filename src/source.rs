use crate::config::InputSource;
use anyhow::{Context, Result, bail};
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture},
};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Time given to the camera or decoder before the first read
const WARMUP: Duration = Duration::from_secs(1);

/// An opened webcam or video file
pub struct FrameSource {
    capture: VideoCapture,
    kind: InputSource,
}

impl FrameSource {
    /// Opens the configured source and waits for it to warm up
    pub fn open(source: &InputSource) -> Result<Self> {
        let capture = match source {
            InputSource::Webcam(index) => VideoCapture::new(*index, videoio::CAP_ANY)
                .with_context(|| format!("Failed to open webcam {}", index))?,
            InputSource::File(path) => {
                VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)
                    .with_context(|| format!("Failed to open video: {}", path.display()))?
            }
        };
        if !capture.is_opened()? {
            bail!("Video source could not be opened: {:?}", source);
        }
        info!("Opened video source: {:?}", source);

        thread::sleep(WARMUP);

        Ok(Self {
            capture,
            kind: source.clone(),
        })
    }

    /// Reads the next frame; `None` at end of stream or on a device error
    pub fn next_frame(&mut self) -> Option<Mat> {
        let mut frame = Mat::default();
        match self.capture.read(&mut frame) {
            Ok(true) if !frame.empty() => Some(frame),
            Ok(_) => None,
            Err(e) => {
                debug!("Frame read failed, ending stream: {}", e);
                None
            }
        }
    }

    /// Total frames reported by the container, if known
    pub fn frame_count(&self) -> Option<u64> {
        if !matches!(self.kind, InputSource::File(_)) {
            return None;
        }
        match self.capture.get(videoio::CAP_PROP_FRAME_COUNT) {
            Ok(count) if count > 0.0 => Some(count as u64),
            _ => None,
        }
    }

    /// Frame rate reported by the source, if known
    pub fn frame_rate(&self) -> Option<f64> {
        match self.capture.get(videoio::CAP_PROP_FPS) {
            Ok(fps) if fps > 0.0 => Some(fps),
            _ => None,
        }
    }
}
