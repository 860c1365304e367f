use crate::config::TrackerConfig;
use crate::detection;
use crate::render;
use crate::trail::Trail;
use crate::video_processor::{FrameOutcome, VideoProcessor};
use anyhow::Result;
use opencv::core::Mat;
use tracing::debug;

/// Tracks the largest blob of one color and draws its fading trail
pub struct ColorTrackingProcessor {
    trail: Trail,
}

impl ColorTrackingProcessor {
    /// Creates a processor with an empty trail sized from the config
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            trail: Trail::new(config.trail_length),
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

impl VideoProcessor for ColorTrackingProcessor {
    fn process_frame(&mut self, frame: &mut Mat, config: &TrackerConfig) -> Result<FrameOutcome> {
        let detection = detection::detect(frame, &config.color_range)?;

        let trail_point = match &detection {
            Some(found) if found.is_valid(config.min_radius) => {
                render::draw_detection(frame, found)?;
                Some(found.centroid)
            }
            Some(found) if config.keep_small_detections => {
                debug!("Keeping small detection (radius {}) in trail", found.radius);
                Some(found.centroid)
            }
            _ => None,
        };

        self.trail.push(trail_point);
        let segments_drawn = render::draw_trail(frame, &self.trail, config.trail_width)?;

        Ok(FrameOutcome {
            detection,
            trail_point,
            segments_drawn,
        })
    }

    fn print_debug_info(&self, frame_number: u64, outcome: &FrameOutcome) {
        debug!("--------------------------------");
        debug!("frame: {}", frame_number);
        debug!("detection: {:?}", outcome.detection);
        debug!("trail_point: {:?}", outcome.trail_point);
        debug!("trail: {}/{} entries, {} segments", self.trail.len(), self.trail.capacity(), outcome.segments_drawn);
    }
}
