use crate::colors::ColorRange;
use anyhow::Result;
use opencv::{
    core::{self, Mat, Point, Point2f, Size, Vector},
    imgproc,
    prelude::*,
};

/// Every frame is resized to this before processing and display
pub const DISPLAY_SIZE: (i32, i32) = (1000, 750);

const BLUR_KERNEL: i32 = 7;
const MORPH_KERNEL: i32 = 3;
const OPEN_ITERATIONS: i32 = 2;

/// Largest blob found in a mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Center of the minimal enclosing circle
    pub center: Point,
    pub radius: i32,
    /// Centroid from image moments
    pub centroid: Point,
    pub area: f64,
}

impl Detection {
    /// A detection counts only when its enclosing circle is larger than `min_radius`
    pub fn is_valid(&self, min_radius: i32) -> bool {
        self.radius > min_radius
    }
}

/// Mirrors a frame around its vertical axis
pub fn mirror(frame: &Mat) -> Result<Mat> {
    let mut flipped = Mat::default();
    core::flip(frame, &mut flipped, 1)?;
    Ok(flipped)
}

/// Resizes a frame to the fixed display resolution
pub fn resize_to_display(frame: &Mat) -> Result<Mat> {
    let mut resized = Mat::default();
    imgproc::resize(
        frame,
        &mut resized,
        Size::new(DISPLAY_SIZE.0, DISPLAY_SIZE.1),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;
    Ok(resized)
}

/// Blurs, converts to HSV, thresholds on `range` and opens the result to drop speckles
pub fn build_mask(frame: &Mat, range: &ColorRange) -> Result<Mat> {
    let mut blurred = Mat::default();
    imgproc::gaussian_blur_def(
        frame,
        &mut blurred,
        Size::new(BLUR_KERNEL, BLUR_KERNEL),
        0.0,
    )?;

    let mut hsv = Mat::default();
    imgproc::cvt_color_def(&blurred, &mut hsv, imgproc::COLOR_BGR2HSV)?;

    let mut mask = Mat::default();
    core::in_range(
        &hsv,
        &range.lower.to_scalar(),
        &range.upper.to_scalar(),
        &mut mask,
    )?;

    let kernel = imgproc::get_structuring_element_def(
        imgproc::MORPH_RECT,
        Size::new(MORPH_KERNEL, MORPH_KERNEL),
    )?;
    let mut opened = Mat::default();
    imgproc::morphology_ex(
        &mask,
        &mut opened,
        imgproc::MORPH_OPEN,
        &kernel,
        Point::new(-1, -1),
        OPEN_ITERATIONS,
        core::BORDER_CONSTANT,
        imgproc::morphology_default_border_value()?,
    )?;
    Ok(opened)
}

/// External contours of a binary mask
pub fn find_contours(mask: &Mat) -> Result<Vector<Vector<Point>>> {
    let mut contours = Vector::<Vector<Point>>::new();
    imgproc::find_contours_def(
        mask,
        &mut contours,
        imgproc::RETR_EXTERNAL,
        imgproc::CHAIN_APPROX_SIMPLE,
    )?;
    Ok(contours)
}

/// Picks the contour with the largest area and measures it.
///
/// Returns `None` when the mask has no contours.
pub fn detect_largest(contours: &Vector<Vector<Point>>) -> Result<Option<Detection>> {
    let mut largest: Option<(f64, Vector<Point>)> = None;
    for contour in contours.iter() {
        let area = imgproc::contour_area_def(&contour)?;
        let is_larger = largest.as_ref().is_none_or(|(best, _)| area > *best);
        if is_larger {
            largest = Some((area, contour));
        }
    }

    let Some((area, contour)) = largest else {
        return Ok(None);
    };

    let mut circle_center = Point2f::default();
    let mut radius = 0.0f32;
    imgproc::min_enclosing_circle(&contour, &mut circle_center, &mut radius)?;
    let center = Point::new(circle_center.x as i32, circle_center.y as i32);

    let moments = imgproc::moments_def(&contour)?;
    let centroid = if moments.m00 != 0.0 {
        Point::new(
            (moments.m10 / moments.m00) as i32,
            (moments.m01 / moments.m00) as i32,
        )
    } else {
        // degenerate contour (a line or a single pixel)
        center
    };

    Ok(Some(Detection {
        center,
        radius: radius as i32,
        centroid,
        area,
    }))
}

/// Runs mask building and contour measurement on one display-sized frame
pub fn detect(frame: &Mat, range: &ColorRange) -> Result<Option<Detection>> {
    let mask = build_mask(frame, range)?;
    let contours = find_contours(&mask)?;
    detect_largest(&contours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use opencv::core::{CV_8UC1, CV_8UC3, Scalar};

    fn blank_mask() -> Mat {
        Mat::new_rows_cols_with_default(480, 640, CV_8UC1, Scalar::all(0.0)).unwrap()
    }

    fn fill_circle(img: &mut Mat, center: Point, radius: i32, color: Scalar) {
        imgproc::circle(img, center, radius, color, -1, imgproc::LINE_8, 0).unwrap();
    }

    #[test]
    fn test_recovers_circular_blob() {
        let mut mask = blank_mask();
        fill_circle(&mut mask, Point::new(320, 200), 60, Scalar::all(255.0));

        let contours = find_contours(&mask).unwrap();
        let detection = detect_largest(&contours).unwrap().expect("blob detected");

        assert!((detection.center.x - 320).abs() <= 2);
        assert!((detection.center.y - 200).abs() <= 2);
        assert!((detection.radius - 60).abs() <= 2);
        assert!((detection.centroid.x - 320).abs() <= 2);
        assert!((detection.centroid.y - 200).abs() <= 2);
        assert!(detection.is_valid(10));
    }

    #[test]
    fn test_picks_largest_blob() {
        let mut mask = blank_mask();
        fill_circle(&mut mask, Point::new(100, 100), 15, Scalar::all(255.0));
        fill_circle(&mut mask, Point::new(450, 300), 40, Scalar::all(255.0));

        let contours = find_contours(&mask).unwrap();
        assert_eq!(contours.len(), 2);
        let detection = detect_largest(&contours).unwrap().unwrap();
        assert!((detection.center.x - 450).abs() <= 2);
        assert!((detection.center.y - 300).abs() <= 2);
    }

    #[test]
    fn test_empty_mask_has_no_contours() {
        let contours = find_contours(&blank_mask()).unwrap();
        assert!(contours.is_empty());
        assert!(detect_largest(&contours).unwrap().is_none());
    }

    #[test]
    fn test_small_blob_is_not_valid() {
        let mut mask = blank_mask();
        fill_circle(&mut mask, Point::new(50, 50), 5, Scalar::all(255.0));
        let contours = find_contours(&mask).unwrap();
        let detection = detect_largest(&contours).unwrap().unwrap();
        assert!(!detection.is_valid(10));
    }

    #[test]
    fn test_zero_area_contour_falls_back_to_circle_center() {
        let mut contours = Vector::<Vector<Point>>::new();
        contours.push(Vector::from_slice(&[Point::new(10, 10), Point::new(30, 10)]));
        let detection = detect_largest(&contours).unwrap().unwrap();
        assert_eq!(detection.area, 0.0);
        assert_eq!(detection.centroid, detection.center);
    }

    #[test]
    fn test_detects_blue_object_in_bgr_frame() {
        let mut frame = Mat::new_rows_cols_with_default(
            DISPLAY_SIZE.1,
            DISPLAY_SIZE.0,
            CV_8UC3,
            Scalar::all(0.0),
        )
        .unwrap();
        // pure blue in BGR is hue 120 in OpenCV's HSV
        fill_circle(&mut frame, Point::new(500, 375), 80, Scalar::new(255.0, 0.0, 0.0, 0.0));

        let range = colors::lookup("blue").unwrap();
        let detection = detect(&frame, &range).unwrap().expect("blue blob");
        assert!((detection.center.x - 500).abs() <= 3);
        assert!((detection.center.y - 375).abs() <= 3);
        assert!((detection.radius - 80).abs() <= 4);

        let red = colors::lookup("red").unwrap();
        assert!(detect(&frame, &red).unwrap().is_none());
    }

    #[test]
    fn test_resize_to_display() {
        let frame =
            Mat::new_rows_cols_with_default(240, 320, CV_8UC3, Scalar::all(0.0)).unwrap();
        let resized = resize_to_display(&frame).unwrap();
        assert_eq!(resized.cols(), DISPLAY_SIZE.0);
        assert_eq!(resized.rows(), DISPLAY_SIZE.1);
    }

    #[test]
    fn test_mirror_flips_horizontally() {
        let mut mask = blank_mask();
        fill_circle(&mut mask, Point::new(100, 240), 30, Scalar::all(255.0));
        let flipped = mirror(&mask).unwrap();
        let detection = detect_largest(&find_contours(&flipped).unwrap())
            .unwrap()
            .unwrap();
        assert!((detection.center.x - (639 - 100)).abs() <= 2);
    }
}
