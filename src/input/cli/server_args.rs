use clap::{Parser, ValueEnum};

use crate::core::actions::generate_fractal::render_scheduler::PartitionStrategy;
use crate::input::http::query::DEFAULT_MAX_PIXELS;

#[derive(Debug, Clone, Parser)]
#[command(name = "mandel_service", about = "Renders Mandelbrot images over HTTP")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, default_value = "localhost:8080")]
    pub listen: String,

    /// How the rows of each image are spread across threads
    #[arg(long, value_enum, default_value_t = StrategyArg::RowQueue)]
    pub strategy: StrategyArg,

    /// Largest width × height a request may ask for
    #[arg(long, default_value_t = DEFAULT_MAX_PIXELS)]
    pub max_pixels: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Fixed pool of `workers` threads pulling rows from a queue
    RowQueue,
    /// One thread per row
    RowPerThread,
    /// Rayon work-stealing pool
    WorkStealing,
}

impl From<StrategyArg> for PartitionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RowQueue => PartitionStrategy::RowQueue,
            StrategyArg::RowPerThread => PartitionStrategy::RowPerThread,
            StrategyArg::WorkStealing => PartitionStrategy::WorkStealing,
        }
    }
}
