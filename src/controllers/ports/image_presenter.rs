use std::error::Error;

use crate::core::data::pixel_grid::GrayGrid;

/// Turns a finished grayscale grid into an encoded image.
pub trait ImagePresenterPort {
    type Failure: Error + Send + 'static;

    fn content_type(&self) -> &'static str;

    fn present(&self, grid: &GrayGrid) -> Result<Vec<u8>, Self::Failure>;
}
