use std::io;

use tokio::net::TcpListener;

use crate::controllers::mandelbrot::MandelbrotController;
use crate::core::actions::generate_fractal::render_scheduler::{PartitionStrategy, RenderScheduler};
use crate::input::cli::server_args::ServerArgs;
use crate::input::http::handler::{AppState, router};
use crate::input::http::query::RequestLimits;
use crate::presenters::png::presenter::PngPresenter;

pub fn app_state(args: &ServerArgs) -> AppState {
    let scheduler = RenderScheduler::new(args.strategy.into());
    let limits = RequestLimits {
        max_pixels: args.max_pixels,
    };

    AppState::new(MandelbrotController::new(PngPresenter::new(), scheduler), limits)
}

pub async fn serve(args: ServerArgs) -> io::Result<()> {
    let state = app_state(&args);
    let listener = TcpListener::bind(&args.listen).await?;

    log::info!(
        "listening on {} (strategy: {}, max pixels: {})",
        listener.local_addr()?,
        PartitionStrategy::from(args.strategy),
        args.max_pixels
    );

    axum::serve(listener, router(state)).await
}
