use crate::core::data::complex::Complex;

pub const MAX_ITERATIONS: u8 = 200;
pub const ESCAPE_RADIUS: f64 = 2.0;
pub const CONTRAST_STEP: u8 = 30;

/// Intensity for a point that escaped during iteration `n`.
///
/// The subtraction and multiplication wrap modulo 256, so anything escaping
/// after iteration 8 cycles back into the bright range.
// TODO: decide whether the banding should become a deliberate palette or be
// replaced by a clamped gradient; either changes every rendered image.
#[inline]
#[must_use]
pub fn intensity_for_escape(n: u8) -> u8 {
    u8::MAX.wrapping_sub(CONTRAST_STEP.wrapping_mul(n))
}

/// Escape-time evaluator: iterates `v = v² + c` from zero and shades `c` by
/// the iteration in which `|v|` first exceeds [`ESCAPE_RADIUS`]. Points that
/// never escape within [`MAX_ITERATIONS`] are black.
#[must_use]
pub fn escape_intensity(c: Complex) -> u8 {
    let mut v = Complex::ZERO;

    for n in 0..MAX_ITERATIONS {
        v = v * v + c;
        if v.magnitude() > ESCAPE_RADIUS {
            return intensity_for_escape(n);
        }
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_intensity(Complex::ZERO), 0);
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        for point in [c(-2.0, -2.0), c(3.0, 0.0), c(0.0, -2.5), c(1e300, 1e300)] {
            assert_eq!(escape_intensity(point), 255, "point {:?}", point);
        }
    }

    #[test]
    fn test_point_on_radius_does_not_escape() {
        // -2 maps to 2 and then stays there; |v| == 2 is not an escape
        assert_eq!(escape_intensity(c(-2.0, 0.0)), 0);
    }

    #[test]
    fn test_escape_at_first_iteration() {
        // 1+i -> 1+3i
        assert_eq!(escape_intensity(c(1.0, 1.0)), 225);
    }

    #[test]
    fn test_escape_at_second_iteration() {
        // -1-i -> -1+i -> -1-3i
        assert_eq!(escape_intensity(c(-1.0, -1.0)), 195);
    }

    #[test]
    fn test_periodic_orbits_are_black() {
        assert_eq!(escape_intensity(c(-1.0, 0.0)), 0);
        assert_eq!(escape_intensity(c(0.0, -1.0)), 0);
    }

    #[test]
    fn test_intensity_steps_by_contrast() {
        assert_eq!(intensity_for_escape(0), 255);
        assert_eq!(intensity_for_escape(1), 225);
        assert_eq!(intensity_for_escape(8), 15);
    }

    #[test]
    fn test_intensity_wraps_instead_of_clamping() {
        // 255 - 270 = -15 ≡ 241 (mod 256)
        assert_eq!(intensity_for_escape(9), 241);
        // 30 * 199 = 5970 ≡ 82, 255 - 82 = 173
        assert_eq!(intensity_for_escape(199), 173);
    }

    #[test]
    fn test_escape_intensity_matches_formula_at_true_escape_iteration() {
        // Walk along the real axis just right of the cusp, where escape
        // iterations grow slowly, and check every result against an
        // independent count.
        for step in 0..200 {
            let point = c(0.25 + step as f64 * 0.01, 0.0);
            let mut v = 0.0f64;
            let mut escaped_at = None;
            for n in 0..MAX_ITERATIONS {
                v = v * v + point.real;
                if v.abs() > ESCAPE_RADIUS {
                    escaped_at = Some(n);
                    break;
                }
            }

            let expected = escaped_at.map_or(0, |n| 255u8.wrapping_sub(30u8.wrapping_mul(n)));
            assert_eq!(escape_intensity(point), expected, "point {:?}", point);
        }
    }
}
