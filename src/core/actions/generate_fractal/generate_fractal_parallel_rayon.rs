use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::fill_row::fill_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::data::pixel_grid::{GridSize, PixelGrid};

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work, handed to rayon's global pool, which balances
/// them across its threads. The first failing row short-circuits the
/// remaining ones. A panicking row is caught on its pool thread and reported
/// as [`RenderError::WorkerPanicked`], like the scoped-thread strategies.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    algorithm: &Alg,
    size: GridSize,
    cancel: &C,
) -> Result<PixelGrid<Alg::Success>, RenderError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send + Clone + Default,
    Alg::Failure: Send,
    C: CancelToken,
{
    let mut grid = PixelGrid::new(size);

    grid.rows_mut()
        .collect::<Vec<_>>()
        .into_par_iter()
        .try_for_each(|row| {
            panic::catch_unwind(AssertUnwindSafe(|| fill_row(algorithm, row, cancel)))
                .unwrap_or(Err(RenderError::WorkerPanicked))
        })?;

    Ok(grid)
}
