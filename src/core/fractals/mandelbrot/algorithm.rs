use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::GridSize;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::escape_intensity;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: GridSize,
    viewport: Viewport,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u8;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.size, self.viewport)?;

        Ok(escape_intensity(c))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(size: GridSize, viewport: Viewport) -> Self {
        Self { size, viewport }
    }

    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.size(), config.viewport())
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }
}
