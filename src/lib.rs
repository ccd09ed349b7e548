pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::mandelbrot::MandelbrotController;
pub use crate::core::actions::generate_fractal::render_scheduler::{PartitionStrategy, RenderScheduler};
pub use input::cli::server_args::ServerArgs;
pub use input::http::handler::{AppState, router};
pub use input::http::query::RequestLimits;
pub use input::http::server::serve;
pub use presenters::png::presenter::PngPresenter;
