use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangle of the complex plane mapped onto the pixel grid. `min` lands on
/// pixel (0, 0); `max` is the exclusive far corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            min: Complex { real: -2.0, imag: -2.0 },
            max: Complex { real: 2.0, imag: 2.0 },
        }
    }
}

impl Viewport {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ViewportError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        // NaN bounds fail both comparisons
        if !(width > 0.0 && height > 0.0) {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    pub fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, ViewportError> {
        Self::new(
            Complex { real: xmin, imag: ymin },
            Complex { real: xmax, imag: ymax },
        )
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
