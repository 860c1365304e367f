use crate::detection::Detection;
use crate::trail::Trail;
use anyhow::Result;
use opencv::{
    core::{Mat, Scalar},
    imgproc,
};

const CIRCLE_COLOR: (f64, f64, f64) = (255.0, 255.0, 0.0);
const CIRCLE_THICKNESS: i32 = 2;
const CENTROID_COLOR: (f64, f64, f64) = (0.0, 0.0, 255.0);
const CENTROID_RADIUS: i32 = 5;
const TRAIL_COLOR: (f64, f64, f64) = (0.0, 0.0, 255.0);

fn bgr(color: (f64, f64, f64)) -> Scalar {
    Scalar::new(color.0, color.1, color.2, 0.0)
}

/// Draws the enclosing circle and a filled centroid marker
pub fn draw_detection(frame: &mut Mat, detection: &Detection) -> Result<()> {
    imgproc::circle(
        frame,
        detection.center,
        detection.radius,
        bgr(CIRCLE_COLOR),
        CIRCLE_THICKNESS,
        imgproc::LINE_8,
        0,
    )?;
    imgproc::circle(
        frame,
        detection.centroid,
        CENTROID_RADIUS,
        bgr(CENTROID_COLOR),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )?;
    Ok(())
}

/// Draws the tapering trail, skipping gaps where no object was seen
pub fn draw_trail(frame: &mut Mat, trail: &Trail, width_scale: f64) -> Result<usize> {
    let segments = trail.segments(width_scale);
    for segment in &segments {
        imgproc::line(
            frame,
            segment.newer,
            segment.older,
            bgr(TRAIL_COLOR),
            segment.thickness,
            imgproc::LINE_8,
            0,
        )?;
    }
    Ok(segments.len())
}
