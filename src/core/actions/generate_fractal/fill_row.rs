use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::data::pixel_grid::GridRow;
use crate::core::data::point::Point;

/// Body of every work unit: compute each pixel of one row into that row's
/// cells, stopping at the first failure or cancellation.
pub(crate) fn fill_row<Alg, C>(
    algorithm: &Alg,
    mut row: GridRow<'_, Alg::Success>,
    cancel: &C,
) -> Result<(), RenderError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let y = row.y();

    for (x, cell) in row.cells_mut().iter_mut().enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(RenderError::Cancelled(Cancelled));
        }

        *cell = algorithm
            .compute(Point { x: x as u32, y })
            .map_err(RenderError::Algorithm)?;
    }

    Ok(())
}
