use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Progress display for frame-by-frame work on a video file
pub struct VideoProgressTracker {
    progress_bar: ProgressBar,
    start_time: Instant,
    total_frames: Option<u64>,
    frame_rate: f64,
    processed_frames: u64,
}

impl VideoProgressTracker {
    /// Creates a bar for a known number of frames
    pub fn new(total_frames: u64, frame_rate: f64, operation_name: &str) -> Self {
        let progress_bar = ProgressBar::new(total_frames);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames ({percent}%) | {msg}",
        ) {
            progress_bar.set_style(style.progress_chars("#>-"));
        }
        progress_bar.set_message(format!("Processing {}", operation_name));

        Self {
            progress_bar,
            start_time: Instant::now(),
            total_frames: Some(total_frames),
            frame_rate,
            processed_frames: 0,
        }
    }

    /// Creates a spinner for streams whose length the container does not report
    pub fn new_unknown_total(frame_rate: f64, operation_name: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} frames | {msg}")
        {
            progress_bar.set_style(style);
        }
        progress_bar.set_message(format!("Processing {}", operation_name));

        Self {
            progress_bar,
            start_time: Instant::now(),
            total_frames: None,
            frame_rate,
            processed_frames: 0,
        }
    }

    /// Advances by one frame
    pub fn update_frame(&mut self) {
        self.processed_frames += 1;
        self.progress_bar.inc(1);
        let msg = self.progress_message();
        self.progress_bar.set_message(msg);
    }

    fn progress_message(&self) -> String {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 {
            self.processed_frames as f64 / elapsed
        } else {
            0.0
        };
        let position = format_duration(self.processed_frames as f64 / self.frame_rate);

        match self.total_frames {
            Some(total) => format!(
                "{} / {} | Speed: {:.1} fps",
                position,
                format_duration(total as f64 / self.frame_rate),
                speed
            ),
            None => format!("{} | Speed: {:.1} fps", position, speed),
        }
    }

    /// Finishes the bar with a summary line
    pub fn finish(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let avg_fps = if elapsed > 0.0 {
            self.processed_frames as f64 / elapsed
        } else {
            0.0
        };
        self.progress_bar.finish_with_message(format!(
            "Completed! Frames: {} | Video: {} | Processing: {} | Avg FPS: {:.1}",
            self.processed_frames,
            format_duration(self.processed_frames as f64 / self.frame_rate),
            format_duration(elapsed),
            avg_fps
        ));
    }

    pub fn total_frames(&self) -> Option<u64> {
        self.total_frames
    }

    pub fn processed_frames(&self) -> u64 {
        self.processed_frames
    }
}

/// Formats seconds as h:mm:ss, or m:ss under an hour
fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
