use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::fill_row::fill_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::data::pixel_grid::{GridSize, PixelGrid};

/// Single-threaded, row-major reference renderer.
pub fn generate_fractal_serial<Alg, C>(
    algorithm: &Alg,
    size: GridSize,
    cancel: &C,
) -> Result<PixelGrid<Alg::Success>, RenderError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    Alg::Success: Clone + Default,
    C: CancelToken,
{
    let mut grid = PixelGrid::new(size);

    for row in grid.rows_mut() {
        fill_row(algorithm, row, cancel)?;
    }

    Ok(grid)
}
