use std::fmt;
use std::num::NonZeroUsize;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_row_per_thread::generate_fractal_row_per_thread;
use crate::core::actions::generate_fractal::generate_fractal_row_queue::generate_fractal_row_queue;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::data::pixel_grid::{GridSize, PixelGrid};

/// How the rows of a render are spread across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    /// Bounded pool of `workers` threads draining a pre-filled row queue.
    #[default]
    RowQueue,
    /// One thread per row; ignores the worker count.
    RowPerThread,
    /// Rows on rayon's work-stealing pool; ignores the worker count.
    WorkStealing,
}

impl PartitionStrategy {
    pub const ALL: &'static [Self] = &[Self::RowQueue, Self::RowPerThread, Self::WorkStealing];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RowQueue => "row queue",
            Self::RowPerThread => "row per thread",
            Self::WorkStealing => "work stealing",
        }
    }
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fills a whole grid with one algorithm using the configured strategy,
/// blocking until every worker has finished. Either the complete grid or a
/// single [`RenderError`] comes back, never a partial grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderScheduler {
    strategy: PartitionStrategy,
}

impl RenderScheduler {
    #[must_use]
    pub fn new(strategy: PartitionStrategy) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn strategy(&self) -> PartitionStrategy {
        self.strategy
    }

    pub fn render<Alg, C>(
        &self,
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
        match self.strategy {
            PartitionStrategy::RowQueue => generate_fractal_row_queue(algorithm, size, workers, cancel),
            PartitionStrategy::RowPerThread => generate_fractal_row_per_thread(algorithm, size, cancel),
            PartitionStrategy::WorkStealing => generate_fractal_parallel_rayon(algorithm, size, cancel),
        }
    }
}
