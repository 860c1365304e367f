use crate::conversion;
use crate::progress::VideoProgressTracker;
use anyhow::{Context, Result, bail};
use chrono::Local;
use image::codecs::jpeg::JpegEncoder;
use opencv::{
    core::{Mat, Size},
    prelude::*,
    videoio::VideoWriter,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Frame rate of the assembled video
pub const OUTPUT_FPS: f64 = 30.0;
/// Name of the assembled video inside the run directory
pub const VIDEO_FILE_NAME: &str = "01_tracking_video.mp4";

const JPEG_QUALITY: u8 = 95;
const FRAME_PREFIX: &str = "frame_";
const FRAME_EXTENSION: &str = "jpg";

/// Creates `<root>/<stem>_<timestamp>` for one tracking run and returns its path
pub fn create_run_dir(root: &Path, input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "video".to_string());
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let dir = root.join(format!("{}_{}", stem, timestamp));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    Ok(dir)
}

/// Sequentially numbered JPEG frames written to one directory
pub struct FrameStore {
    dir: PathBuf,
    count: u64,
}

impl FrameStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir, count: 0 }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames written so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Writes the next frame as `frame_<n>.jpg`, numbering from 1
    pub fn save(&mut self, frame: &Mat) -> Result<PathBuf> {
        let path = self
            .dir
            .join(format!("{}{}.{}", FRAME_PREFIX, self.count + 1, FRAME_EXTENSION));
        let rgb = conversion::mat_to_rgb(frame)?;
        let file = File::create(&path)
            .with_context(|| format!("Failed to create frame file: {}", path.display()))?;
        let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
        encoder
            .encode_image(&rgb)
            .with_context(|| format!("Failed to encode frame: {}", path.display()))?;
        self.count += 1;
        Ok(path)
    }
}

/// Parses the frame number out of a `frame_<n>.jpg` file name
fn frame_index(path: &Path) -> Option<u64> {
    if path.extension()?.to_str()? != FRAME_EXTENSION {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix(FRAME_PREFIX)?
        .parse()
        .ok()
}

/// Lists saved frames ordered by their number, so `frame_2` sorts before `frame_10`
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut frames: Vec<(u64, PathBuf)> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read frame directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|path| frame_index(&path).map(|index| (index, path)))
        .collect();
    frames.sort_by_key(|(index, _)| *index);
    Ok(frames.into_iter().map(|(_, path)| path).collect())
}

fn load_frame(path: &Path) -> Result<Mat> {
    let rgb = image::open(path)
        .with_context(|| format!("Failed to open frame: {}", path.display()))?
        .to_rgb8();
    conversion::rgb_to_mat(&rgb)
}

/// Writes every saved frame in `dir` into an mp4v video at `OUTPUT_FPS`
pub fn assemble_video(dir: &Path) -> Result<PathBuf> {
    let frames = list_frames(dir)?;
    let Some(first) = frames.first() else {
        bail!("No frames to assemble in {}", dir.display());
    };

    let first_frame = load_frame(first)?;
    let size = Size::new(first_frame.cols(), first_frame.rows());
    let video_path = dir.join(VIDEO_FILE_NAME);
    let fourcc = VideoWriter::fourcc('m', 'p', '4', 'v')?;
    let mut writer = VideoWriter::new(&video_path.to_string_lossy(), fourcc, OUTPUT_FPS, size, true)?;
    if !writer.is_opened()? {
        bail!("Failed to open video writer: {}", video_path.display());
    }

    let mut progress = VideoProgressTracker::new(frames.len() as u64, OUTPUT_FPS, "video assembly");
    writer.write(&first_frame)?;
    progress.update_frame();
    for path in &frames[1..] {
        writer.write(&load_frame(path)?)?;
        progress.update_frame();
    }
    writer.release()?;
    progress.finish();

    info!("Assembled {} frames into {}", frames.len(), video_path.display());
    Ok(video_path)
}
