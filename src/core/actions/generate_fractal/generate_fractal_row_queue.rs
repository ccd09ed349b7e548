use std::num::NonZeroUsize;
use std::thread;

use crossbeam_channel::bounded;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::fill_row::fill_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::actions::generate_fractal::worker_pool::{FirstFailure, join_workers, spawn_worker};
use crate::core::data::pixel_grid::{GridSize, PixelGrid};

/// Renders with a fixed pool of long-lived workers fed from a row queue.
///
/// Every row of the grid is pushed into a bounded channel sized to hold them
/// all, and the sending side is dropped, before any worker starts. Each worker
/// then drains rows until the channel is empty. A queued row owns an
/// exclusive slice of the grid, so whichever worker receives it is the only
/// one able to write those cells.
///
/// The pool is `workers` threads, capped at the number of rows since extra
/// workers would find the queue already empty.
pub fn generate_fractal_row_queue<Alg, C>(
    algorithm: &Alg,
    size: GridSize,
    workers: NonZeroUsize,
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

    {
        let height = size.height() as usize;
        let (sender, receiver) = bounded(height);
        for row in grid.rows_mut() {
            sender
                .send(row)
                .map_err(|_| RenderError::QueueDisconnected)?;
        }
        drop(sender);

        let worker_count = workers.get().min(height);
        log::debug!("row queue: {} rows across {} workers", height, worker_count);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(worker_count);

            for index in 0..worker_count {
                let receiver = receiver.clone();
                let failures = &failures;
                let spawned = spawn_worker(scope, format!("mandel-worker-{}", index), move || {
                    for row in receiver.iter() {
                        if failures.is_aborted() {
                            break;
                        }
                        if let Err(err) = fill_row(algorithm, row, cancel) {
                            failures.record(err);
                            break;
                        }
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

            drop(receiver);
            join_workers(handles, &failures);
        });
    }

    failures.into_result()?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::actions::generate_fractal::test_support::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_row_queue_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {};
        let serial = generate_fractal_serial(&algorithm, size(10, 8), &NeverCancel).unwrap();
        let queued = generate_fractal_row_queue(&algorithm, size(10, 8), workers(3), &NeverCancel).unwrap();

        assert_eq!(queued, serial);
    }

    #[test]
    fn test_row_queue_with_single_worker() {
        let algorithm = StubSuccessAlgorithm {};
        let serial = generate_fractal_serial(&algorithm, size(5, 5), &NeverCancel).unwrap();
        let queued = generate_fractal_row_queue(&algorithm, size(5, 5), workers(1), &NeverCancel).unwrap();

        assert_eq!(queued, serial);
    }

    #[test]
    fn test_row_queue_with_more_workers_than_rows() {
        let algorithm = StubSuccessAlgorithm {};
        let serial = generate_fractal_serial(&algorithm, size(5, 2), &NeverCancel).unwrap();
        let queued = generate_fractal_row_queue(&algorithm, size(5, 2), workers(64), &NeverCancel).unwrap();

        assert_eq!(queued, serial);
    }

    #[test]
    fn test_row_queue_computes_each_pixel_once() {
        let algorithm = CountingAlgorithm::default();

        generate_fractal_row_queue(&algorithm, size(9, 17), workers(4), &NeverCancel).unwrap();

        algorithm.assert_each_pixel_computed_once(size(9, 17));
    }

    #[test]
    fn test_row_queue_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm { failing_row: 0 };

        let result = generate_fractal_row_queue(&algorithm, size(3, 4), workers(2), &NeverCancel);

        assert!(matches!(result, Err(RenderError::Algorithm(StubError {}))));
    }

    #[test]
    fn test_row_queue_reports_panicking_worker() {
        let result =
            generate_fractal_row_queue(&StubPanickingAlgorithm {}, size(3, 3), workers(2), &NeverCancel);

        assert!(matches!(result, Err(RenderError::WorkerPanicked)));
    }

    #[test]
    fn test_row_queue_stops_after_cancellation() {
        let polls = AtomicUsize::new(0);
        let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 2;

        let result = generate_fractal_row_queue(&StubSuccessAlgorithm {}, size(4, 50), workers(1), &cancel);

        assert!(matches!(result, Err(RenderError::Cancelled(_))));
        // a single worker stops on the first cancelled poll and drains nothing else
        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }
}
