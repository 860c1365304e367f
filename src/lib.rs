//! Color-based object tracking on webcam or video streams.
//!
//! Each frame is thresholded in HSV space for one named color. The largest
//! blob is circled and its centroid feeds a fixed-length trail drawn as a
//! tapering line.

pub mod app;
pub mod cli;
pub mod color_tracking_processor;
pub mod colors;
pub mod config;
pub mod conversion;
pub mod detection;
pub mod error;
pub mod frame_store;
pub mod logging;
pub mod progress;
pub mod render;
pub mod source;
pub mod trail;
pub mod video_processor;
pub mod viewer;
