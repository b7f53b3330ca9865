//! Degree-angle helpers.

/// Wrap an angle in degrees into `[0.0, 360.0)`.
///
/// Works for any finite input, including negative angles and values many
/// turns away from zero.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_range_unchanged() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(359.5), 359.5);
    }

    #[test]
    fn test_wrap_full_turns() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_negative() {
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!((wrap_degrees(-450.0) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_360() {
        let w = wrap_degrees(-1e-6);
        assert!((0.0..360.0).contains(&w), "wrapped = {w}");
    }
}
