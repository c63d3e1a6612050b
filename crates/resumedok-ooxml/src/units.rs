//! Measurement units used by WordprocessingML
//!
//! The document model works in points and inches; the XML stores font sizes
//! in half-points (`w:sz`) and lengths in twentieths of a point (twips).

/// Twips per inch (1440)
pub const TWIPS_PER_INCH: f32 = 1440.0;

/// Twips per point (20)
pub const TWIPS_PER_POINT: f32 = 20.0;

/// Half-points per point (2)
pub const HALF_POINTS_PER_POINT: f32 = 2.0;

/// Convert a font size in points to half-points
pub fn points_to_half_points(points: f32) -> u32 {
    (points * HALF_POINTS_PER_POINT).round() as u32
}

/// Convert half-points back to points
pub fn half_points_to_points(half_points: u32) -> f32 {
    half_points as f32 / HALF_POINTS_PER_POINT
}

/// Convert inches to twips
pub fn inches_to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

/// Convert twips to inches
pub fn twips_to_inches(twips: i32) -> f32 {
    twips as f32 / TWIPS_PER_INCH
}

/// Convert points to twips
pub fn points_to_twips(points: f32) -> u32 {
    (points * TWIPS_PER_POINT).round() as u32
}

/// Convert twips to points
pub fn twips_to_points(twips: u32) -> f32 {
    twips as f32 / TWIPS_PER_POINT
}

/// Check that a font size can be written as `w:sz`
pub fn is_valid_font_size(points: f32) -> bool {
    points.is_finite() && points > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_inch_is_360_twips() {
        assert_eq!(inches_to_twips(0.25), 360);
        assert_eq!(twips_to_inches(360), 0.25);
    }

    #[test]
    fn test_twelve_points_spacing() {
        assert_eq!(points_to_twips(12.0), 240);
        assert_eq!(twips_to_points(240), 12.0);
    }

    #[test]
    fn test_font_sizes_in_half_points() {
        assert_eq!(points_to_half_points(11.0), 22);
        assert_eq!(points_to_half_points(16.0), 32);
        assert_eq!(points_to_half_points(10.5), 21);
        assert_eq!(half_points_to_points(28), 14.0);
    }

    #[test]
    fn test_font_size_validation() {
        assert!(is_valid_font_size(11.0));
        assert!(!is_valid_font_size(0.0));
        assert!(!is_valid_font_size(-3.0));
        assert!(!is_valid_font_size(f32::NAN));
        assert!(!is_valid_font_size(f32::INFINITY));
    }
}
