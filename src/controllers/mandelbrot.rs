use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::controllers::ports::image_presenter::ImagePresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::render_error::RenderError;
use crate::core::actions::generate_fractal::render_scheduler::RenderScheduler;
use crate::core::data::pixel_grid::GrayGrid;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

pub type MandelbrotRenderError = RenderError<PixelToComplexCoordsError>;

#[derive(Debug)]
pub enum MandelbrotControllerError<E> {
    Render(MandelbrotRenderError),
    Present(E),
}

impl<E: fmt::Display> fmt::Display for MandelbrotControllerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Present(err) => write!(f, "encoding failed: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for MandelbrotControllerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Renders one configuration and hands the grid to a presenter.
#[derive(Debug)]
pub struct MandelbrotController<P: ImagePresenterPort> {
    presenter: P,
    scheduler: RenderScheduler,
}

impl<P: ImagePresenterPort> MandelbrotController<P> {
    pub fn new(presenter: P, scheduler: RenderScheduler) -> Self {
        Self {
            presenter,
            scheduler,
        }
    }

    pub fn scheduler(&self) -> RenderScheduler {
        self.scheduler
    }

    pub fn render<C: CancelToken>(
        &self,
        config: &RenderConfig,
        cancel: &C,
    ) -> Result<GrayGrid, MandelbrotRenderError> {
        let algorithm = MandelbrotAlgorithm::from_config(config);
        let size = config.size();

        let start = Instant::now();
        let grid = self.scheduler.render(&algorithm, size, config.workers(), cancel)?;

        log::info!(
            "rendered {}x{} with {} ({} workers) in {:?}",
            size.width(),
            size.height(),
            self.scheduler.strategy(),
            config.workers(),
            start.elapsed()
        );

        Ok(grid)
    }

    pub fn render_image<C: CancelToken>(
        &self,
        config: &RenderConfig,
        cancel: &C,
    ) -> Result<RenderedImage, MandelbrotControllerError<P::Failure>> {
        let grid = self
            .render(config, cancel)
            .map_err(MandelbrotControllerError::Render)?;

        let bytes = self
            .presenter
            .present(&grid)
            .map_err(MandelbrotControllerError::Present)?;

        Ok(RenderedImage {
            content_type: self.presenter.content_type(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::point::Point;
    use crate::core::data::render_config::RenderParams;

    #[derive(Debug)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    /// Emits the raw cells so tests can inspect what was rendered.
    struct RawPresenter {}

    impl ImagePresenterPort for RawPresenter {
        type Failure = StubError;

        fn content_type(&self) -> &'static str {
            "application/octet-stream"
        }

        fn present(&self, grid: &GrayGrid) -> Result<Vec<u8>, Self::Failure> {
            Ok(grid.cells().to_vec())
        }
    }

    struct FailingPresenter {}

    impl ImagePresenterPort for FailingPresenter {
        type Failure = StubError;

        fn content_type(&self) -> &'static str {
            "application/octet-stream"
        }

        fn present(&self, _: &GrayGrid) -> Result<Vec<u8>, Self::Failure> {
            Err(StubError {})
        }
    }

    fn config(width: i32, height: i32, workers: i32) -> RenderConfig {
        RenderConfig::try_from(RenderParams {
            width,
            height,
            workers,
            ..RenderParams::default()
        })
        .unwrap()
    }

    #[test]
    fn test_render_four_by_four_reference_pixels() {
        let controller = MandelbrotController::new(RawPresenter {}, RenderScheduler::default());

        let grid = controller.render(&config(4, 4, 2), &NeverCancel).unwrap();

        assert_eq!(grid.get(Point { x: 0, y: 0 }), Some(&255));
        assert_eq!(grid.get(Point { x: 1, y: 1 }), Some(&195));
        assert_eq!(grid.get(Point { x: 2, y: 2 }), Some(&0));
        assert_eq!(grid.get(Point { x: 3, y: 3 }), Some(&225));
        assert_eq!(grid.get(Point { x: 0, y: 2 }), Some(&0));
    }

    #[test]
    fn test_render_image_uses_presenter() {
        let controller = MandelbrotController::new(RawPresenter {}, RenderScheduler::default());

        let image = controller.render_image(&config(2, 2, 1), &NeverCancel).unwrap();

        assert_eq!(image.content_type, "application/octet-stream");
        assert_eq!(image.bytes.len(), 4);
    }

    #[test]
    fn test_presenter_failure_is_reported() {
        let controller = MandelbrotController::new(FailingPresenter {}, RenderScheduler::default());

        let result = controller.render_image(&config(2, 2, 1), &NeverCancel);

        assert!(matches!(result, Err(MandelbrotControllerError::Present(StubError {}))));
    }

    #[test]
    fn test_cancelled_render_is_reported() {
        let controller = MandelbrotController::new(RawPresenter {}, RenderScheduler::default());
        let cancel = || true;

        let result = controller.render_image(&config(2, 2, 1), &cancel);

        assert!(matches!(
            result,
            Err(MandelbrotControllerError::Render(RenderError::Cancelled(_)))
        ));
    }
}
