use crate::error::ConfigError;
use opencv::core::Scalar;

/// A single HSV triple (hue 0-180, saturation and value 0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Converts to an OpenCV scalar usable as an `in_range` bound
    pub fn to_scalar(self) -> Scalar {
        Scalar::new(self.h as f64, self.s as f64, self.v as f64, 0.0)
    }
}

/// Inclusive HSV thresholds for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl ColorRange {
    const fn new(lower: (u8, u8, u8), upper: (u8, u8, u8)) -> Self {
        Self {
            lower: Hsv::new(lower.0, lower.1, lower.2),
            upper: Hsv::new(upper.0, upper.1, upper.2),
        }
    }
}

/// Supported colors, in the order they are reported to the user
const COLOR_TABLE: [(&str, ColorRange); 10] = [
    ("black", ColorRange::new((0, 0, 0), (180, 255, 30))),
    ("white", ColorRange::new((0, 0, 231), (180, 18, 255))),
    ("red", ColorRange::new((159, 50, 70), (180, 255, 255))),
    ("green", ColorRange::new((36, 50, 70), (89, 255, 255))),
    ("blue", ColorRange::new((90, 50, 70), (128, 255, 255))),
    ("yellow", ColorRange::new((25, 50, 70), (35, 255, 255))),
    ("purple", ColorRange::new((129, 50, 70), (158, 255, 255))),
    ("orange", ColorRange::new((10, 50, 70), (24, 255, 255))),
    ("gray", ColorRange::new((0, 0, 40), (180, 18, 230))),
    ("cyan", ColorRange::new((29, 88, 10), (62, 255, 255))),
];

/// Strips every space and lowercases, so " Dark Blue" style input matches table keys
pub fn normalize_color_name(raw: &str) -> String {
    raw.replace(' ', "").to_lowercase()
}

/// Names of all supported colors
pub fn available_colors() -> Vec<&'static str> {
    COLOR_TABLE.iter().map(|(name, _)| *name).collect()
}

/// Looks up the HSV range for an already-normalized color name
pub fn lookup(name: &str) -> Result<ColorRange, ConfigError> {
    COLOR_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, range)| *range)
        .ok_or_else(|| ConfigError::UnknownColor {
            name: name.to_string(),
            available: available_colors(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_range_is_ordered() {
        for name in available_colors() {
            let range = lookup(name).unwrap();
            assert!(range.lower.h <= range.upper.h, "{name} hue");
            assert!(range.lower.s <= range.upper.s, "{name} saturation");
            assert!(range.lower.v <= range.upper.v, "{name} value");
            assert!(range.upper.h <= 180, "{name} hue bound");
        }
    }

    #[test]
    fn test_lookup_blue() {
        let range = lookup("blue").unwrap();
        assert_eq!(range.lower, Hsv::new(90, 50, 70));
        assert_eq!(range.upper, Hsv::new(128, 255, 255));
    }

    #[test]
    fn test_normalize_strips_spaces_and_case() {
        assert_eq!(normalize_color_name(" Bl ue "), "blue");
        assert_eq!(normalize_color_name("GRAY"), "gray");
        assert!(lookup(&normalize_color_name("  Cyan")).is_ok());
    }

    #[test]
    fn test_unknown_color_reports_all_names() {
        match lookup("magenta") {
            Err(ConfigError::UnknownColor { name, available }) => {
                assert_eq!(name, "magenta");
                assert_eq!(available.len(), 10);
                assert_eq!(available[0], "black");
                assert_eq!(available[9], "cyan");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive_after_normalization() {
        assert!(lookup("Blue").is_err());
    }

    #[test]
    fn test_to_scalar() {
        let scalar = Hsv::new(90, 50, 70).to_scalar();
        assert_eq!(scalar[0], 90.0);
        assert_eq!(scalar[1], 50.0);
        assert_eq!(scalar[2], 70.0);
    }
}
