use anyhow::{Context, Result, bail};
use image::RgbImage;
use opencv::{
    core::{CV_8UC3, Mat, Scalar},
    imgproc,
    prelude::*,
};

/// Converts a BGR OpenCV frame into an `RgbImage`
pub fn mat_to_rgb(frame: &Mat) -> Result<RgbImage> {
    if frame.typ() != CV_8UC3 {
        bail!("Expected an 8-bit 3-channel frame, got type {}", frame.typ());
    }
    let mut rgb = Mat::default();
    imgproc::cvt_color_def(frame, &mut rgb, imgproc::COLOR_BGR2RGB)?;

    let width = rgb.cols() as u32;
    let height = rgb.rows() as u32;
    let data = rgb.data_bytes()?.to_vec();
    RgbImage::from_vec(width, height, data).context("Frame buffer size does not match its dimensions")
}

/// Converts an `RgbImage` back into a BGR OpenCV frame
pub fn rgb_to_mat(image: &RgbImage) -> Result<Mat> {
    let (width, height) = image.dimensions();
    let mut rgb = Mat::new_rows_cols_with_default(
        height as i32,
        width as i32,
        CV_8UC3,
        Scalar::all(0.0),
    )?;
    rgb.data_bytes_mut()?.copy_from_slice(image.as_raw());

    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&rgb, &mut bgr, imgproc::COLOR_RGB2BGR)?;
    Ok(bgr)
}
