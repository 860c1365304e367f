use crate::config::TrackerConfig;
use crate::detection::{self, Detection};
use crate::frame_store::{FrameStore, OUTPUT_FPS};
use crate::progress::VideoProgressTracker;
use crate::source::FrameSource;
use crate::viewer::Viewer;
use anyhow::Result;
use opencv::{core::Mat, core::Point};
use tracing::debug;

/// What one processed frame produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// Largest blob of the tracked color, whether or not it passed the radius check
    pub detection: Option<Detection>,
    /// Entry pushed onto the trail for this frame
    pub trail_point: Option<Point>,
    /// Number of trail segments drawn
    pub segments_drawn: usize,
}

/// Base trait for processors that annotate a video stream frame by frame
pub trait VideoProcessor {
    /// Reads frames until the stream ends or Escape is pressed, returning the frame count
    fn process_video(
        &mut self,
        config: &TrackerConfig,
        source: &mut FrameSource,
        viewer: &mut Viewer,
        mut store: Option<&mut FrameStore>,
    ) -> Result<u64> {
        let mut progress = if config.is_file_mode() {
            let frame_rate = source.frame_rate().unwrap_or(OUTPUT_FPS);
            Some(match source.frame_count() {
                Some(total) => VideoProgressTracker::new(total, frame_rate, "tracking"),
                None => VideoProgressTracker::new_unknown_total(frame_rate, "tracking"),
            })
        } else {
            None
        };

        let mut frames = 0u64;
        while let Some(raw) = source.next_frame() {
            let raw = if config.mirror_frames() {
                detection::mirror(&raw)?
            } else {
                raw
            };
            let mut frame = detection::resize_to_display(&raw)?;

            let outcome = self.process_frame(&mut frame, config)?;
            frames += 1;
            self.print_debug_info(frames, &outcome);

            viewer.imshow(&frame)?;
            if let Some(store) = store.as_deref_mut() {
                store.save(&frame)?;
            }
            if let Some(progress) = progress.as_mut() {
                progress.update_frame();
            }

            if viewer.escape_pressed(1)? {
                debug!("Escape pressed, stopping");
                break;
            }
        }

        if let Some(progress) = progress {
            progress.finish();
        }
        Ok(frames)
    }

    /// Detects, annotates and records one display-sized frame in place
    fn process_frame(&mut self, frame: &mut Mat, config: &TrackerConfig) -> Result<FrameOutcome>;

    /// Logs per-frame details at debug level
    fn print_debug_info(&self, frame_number: u64, outcome: &FrameOutcome) {
        debug!("frame {}: {:?}", frame_number, outcome);
    }
}
