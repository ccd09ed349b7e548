use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::controllers::ports::image_presenter::ImagePresenterPort;
use crate::core::data::pixel_grid::GrayGrid;

/// Encodes grids as 8-bit grayscale PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngPresenter {}

impl PngPresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl ImagePresenterPort for PngPresenter {
    type Failure = ImageError;

    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn present(&self, grid: &GrayGrid) -> Result<Vec<u8>, Self::Failure> {
        let size = grid.size();
        let mut bytes = Vec::new();

        PngEncoder::new(&mut bytes).write_image(
            grid.cells(),
            size.width(),
            size.height(),
            ExtendedColorType::L8,
        )?;

        Ok(bytes)
    }
}
