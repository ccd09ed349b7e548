use std::thread;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::fill_row::fill_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::actions::generate_fractal::worker_pool::{FirstFailure, join_workers, spawn_worker};
use crate::core::data::pixel_grid::{GridSize, PixelGrid};

/// Spawns one scoped thread per row, so parallelism equals the image height.
///
/// Nothing throttles the spawn: a 4096-row image starts 4096 threads. Use the
/// row queue when resource usage has to stay bounded. If the OS refuses a
/// thread, rows not yet handed out are abandoned and the spawn error is
/// returned once the already running workers have joined.
pub fn generate_fractal_row_per_thread<Alg, C>(
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
    let failures = FirstFailure::new();
    let rows: Vec<_> = grid.rows_mut().collect();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(rows.len());

        for row in rows {
            let failures = &failures;
            let name = format!("mandel-row-{}", row.y());
            let spawned = spawn_worker(scope, name, move || {
                if failures.is_aborted() {
                    return;
                }
                if let Err(err) = fill_row(algorithm, row, cancel) {
                    failures.record(err);
                }
            });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    failures.record(RenderError::WorkerSpawn(err));
                    break;
                }
            }
        }

        join_workers(handles, &failures);
    });

    failures.into_result()?;
    Ok(grid)
}
