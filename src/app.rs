use crate::config::{InputSource, TrackerConfig};
use crate::color_tracking_processor::ColorTrackingProcessor;
use crate::frame_store::{self, FrameStore};
use crate::source::FrameSource;
use crate::video_processor::VideoProcessor;
use crate::viewer::Viewer;
use anyhow::Result;
use tracing::info;

/// Runs one tracking session: capture, annotate, and in file mode export and assemble
pub fn run(config: &TrackerConfig) -> Result<()> {
    info!(
        "Tracking {} objects (trail length {}, width scale {})",
        config.color_name, config.trail_length, config.trail_width
    );

    // the run directory only exists once the source is readable
    let mut source = FrameSource::open(&config.source)?;

    let mut store = match &config.source {
        InputSource::File(path) => {
            let dir = frame_store::create_run_dir(&config.output_root, path)?;
            info!("Saving tracked frames to: {}", dir.display());
            Some(FrameStore::new(dir))
        }
        InputSource::Webcam(_) => None,
    };

    let mut viewer = Viewer::new(config.headless);
    let mut processor = ColorTrackingProcessor::new(config);

    let frames = processor.process_video(config, &mut source, &mut viewer, store.as_mut())?;
    viewer.close()?;
    info!("Processed {} frames", frames);

    if let Some(store) = &store {
        if store.count() > 0 {
            let video_path = frame_store::assemble_video(store.dir())?;
            info!("Tracking video saved to: {}", video_path.display());
        } else {
            info!("No frames were read; skipping video assembly");
        }
    }

    Ok(())
}
