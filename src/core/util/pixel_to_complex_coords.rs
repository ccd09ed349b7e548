use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, size: GridSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x,
                    point.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linear map from pixel space onto the viewport: pixel (0, 0) is the
/// viewport minimum and the far edge of the grid is the (exclusive) maximum.
pub fn pixel_to_complex_coords(
    pixel: Point,
    size: GridSize,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !size.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { point: pixel, size });
    }

    let real = pixel.x as f64 / size.width() as f64 * viewport.width() + viewport.min().real;
    let imag = pixel.y as f64 / size.height() as f64 * viewport.height() + viewport.min().imag;

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::from_bounds(-2.0, -1.0, 2.0, 1.0).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_origin_pixel_is_viewport_min() {
        let size = GridSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, size, viewport()).unwrap();

        assert_eq!(result, Complex { real: -2.0, imag: -1.0 });
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let size = GridSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, size, viewport()).unwrap();

        assert_eq!(result, Complex { real: 0.0, imag: 0.0 });
    }

    #[test]
    fn test_pixel_to_complex_last_pixel_stops_short_of_max() {
        let size = GridSize::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: 3, y: 3 }, size, viewport()).unwrap();

        assert_eq!(result, Complex { real: 1.0, imag: 0.5 });
    }

    #[test]
    fn test_single_pixel_grid_maps_to_viewport_min() {
        let size = GridSize::new(1, 1).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, size, viewport()).unwrap();

        assert_eq!(result, Complex { real: -2.0, imag: -1.0 });
    }

    #[test]
    fn test_pixel_outside_grid_fails() {
        let size = GridSize::new(10, 10).unwrap();
        let point = Point { x: 10, y: 3 };

        let result = pixel_to_complex_coords(point, size, viewport());

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideGrid { point, size })
        );
    }
}
