use opencv::core::Point;
use std::collections::VecDeque;

/// Largest line thickness OpenCV will draw
pub const MAX_THICKNESS: i32 = 32767;

/// Fixed-capacity history of tracked positions, newest first.
///
/// `None` entries mark frames without a detection and break the drawn path.
pub struct Trail {
    points: VecDeque<Option<Point>>,
    capacity: usize,
}

/// One drawable piece of the trail between two consecutive positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub newer: Point,
    pub older: Point,
    pub thickness: i32,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push the latest position at the head, evicting the oldest entry when full
    pub fn push(&mut self, point: Option<Point>) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_back();
        }
        self.points.push_front(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent entry
    pub fn head(&self) -> Option<Option<Point>> {
        self.points.front().copied()
    }

    /// Entries from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &Option<Point>> {
        self.points.iter()
    }

    /// Segments joining adjacent entries where both are present, tapering towards the tail
    pub fn segments(&self, width_scale: f64) -> Vec<TrailSegment> {
        (1..self.points.len())
            .filter_map(|i| match (self.points[i - 1], self.points[i]) {
                (Some(newer), Some(older)) => Some(TrailSegment {
                    newer,
                    older,
                    thickness: segment_thickness(self.capacity, i, width_scale),
                }),
                _ => None,
            })
            .collect()
    }
}

/// Line thickness for the segment ending at `index`: `floor(sqrt(capacity / (index + 1)) * width_scale)`.
///
/// Clamped to `1..=MAX_THICKNESS`, the range OpenCV accepts for lines.
pub fn segment_thickness(capacity: usize, index: usize, width_scale: f64) -> i32 {
    let raw = (capacity as f64 / (index as f64 + 1.0)).sqrt() * width_scale;
    raw.floor().clamp(1.0, MAX_THICKNESS as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_examples() {
        assert_eq!(segment_thickness(64, 0, 5.0), 40);
        assert_eq!(segment_thickness(64, 63, 5.0), 5);
        assert_eq!(segment_thickness(64, 1, 5.0), 28);
    }

    #[test]
    fn test_thickness_non_increasing() {
        for &(capacity, scale) in &[(64usize, 5.0), (10, 1.5), (200, 0.5), (1, 10.0)] {
            let mut previous = i32::MAX;
            for index in 0..capacity {
                let t = segment_thickness(capacity, index, scale);
                assert!(t <= previous, "capacity {capacity} index {index}");
                assert!(t >= 1);
                previous = t;
            }
        }
    }

    #[test]
    fn test_oversized_width_scale_is_capped() {
        assert_eq!(segment_thickness(64, 1, 6000.0), MAX_THICKNESS);
        assert_eq!(segment_thickness(64, 0, 1e12), MAX_THICKNESS);
        assert_eq!(segment_thickness(64, 1, 5000.0), 28284);
    }

    #[test]
    fn test_zero_width_scale_still_drawable() {
        assert_eq!(segment_thickness(64, 0, 0.0), 1);
    }

    #[test]
    fn test_never_exceeds_capacity_and_evicts_oldest() {
        let mut trail = Trail::new(3);
        for x in 0..10 {
            trail.push(Some(Point::new(x, 0)));
            assert!(trail.len() <= 3);
        }
        let xs: Vec<i32> = trail.iter().map(|p| p.unwrap().x).collect();
        assert_eq!(xs, vec![9, 8, 7]);
        assert_eq!(trail.head(), Some(Some(Point::new(9, 0))));
    }

    #[test]
    fn test_absent_entries_break_segments() {
        let mut trail = Trail::new(8);
        trail.push(Some(Point::new(0, 0)));
        trail.push(Some(Point::new(1, 1)));
        trail.push(None);
        trail.push(Some(Point::new(3, 3)));
        trail.push(Some(Point::new(4, 4)));

        let segments = trail.segments(5.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].newer, Point::new(4, 4));
        assert_eq!(segments[0].older, Point::new(3, 3));
        assert_eq!(segments[0].thickness, segment_thickness(8, 1, 5.0));
        assert_eq!(segments[1].newer, Point::new(1, 1));
        assert_eq!(segments[1].older, Point::new(0, 0));
        assert_eq!(segments[1].thickness, segment_thickness(8, 4, 5.0));
    }

    #[test]
    fn test_empty_and_single_entry_have_no_segments() {
        let mut trail = Trail::new(4);
        assert!(trail.is_empty());
        assert!(trail.segments(5.0).is_empty());
        trail.push(None);
        assert_eq!(trail.len(), 1);
        assert!(trail.segments(5.0).is_empty());
    }
}
