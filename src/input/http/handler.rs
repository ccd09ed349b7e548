use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::task::JoinError;

use crate::controllers::mandelbrot::MandelbrotController;
use crate::core::actions::cancellation::CancelFlag;
use crate::input::http::query::{RequestLimits, parse_render_config};
use crate::presenters::png::presenter::PngPresenter;

/// Everything a request needs, injected once at startup. Requests share no
/// mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    controller: Arc<MandelbrotController<PngPresenter>>,
    limits: RequestLimits,
}

impl AppState {
    pub fn new(controller: MandelbrotController<PngPresenter>, limits: RequestLimits) -> Self {
        Self {
            controller: Arc::new(controller),
            limits,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/mandel", get(mandel_handler))
        .with_state(state)
}

/// `GET /mandel`: 400 with no body for a bad query, 500 with no body when
/// rendering or encoding fails, otherwise the image.
async fn mandel_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            log::warn!("rejected render request: {}", rejection);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let config = match parse_render_config(&pairs, state.limits) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("rejected render request: {}", err);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let controller = Arc::clone(&state.controller);
    let rendered = render_until_dropped(CancelFlag::new(), move |cancel| {
        controller.render_image(&config, cancel)
    })
    .await;

    match rendered {
        Ok(Ok(image)) => ([(header::CONTENT_TYPE, image.content_type)], image.bytes).into_response(),
        Ok(Err(err)) => {
            log::error!("{}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(err) => {
            log::error!("render task failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Runs `render` on the blocking pool. If the returned future is dropped
/// before the render finishes (the client went away), `cancel` is tripped so
/// the workers stop at their next poll.
pub(crate) async fn render_until_dropped<T, F>(cancel: CancelFlag, render: F) -> Result<T, JoinError>
where
    F: FnOnce(&CancelFlag) -> T + Send + 'static,
    T: Send + 'static,
{
    let guard = cancel.cancel_on_drop();
    let rendered = tokio::task::spawn_blocking(move || render(&cancel)).await;
    guard.disarm();
    rendered
}
