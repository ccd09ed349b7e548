use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use crate::core::data::pixel_grid::{GridSize, PixelGridError};
use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_WIDTH: i32 = 4096;
pub const DEFAULT_HEIGHT: i32 = 4096;
pub const DEFAULT_WORKERS: i32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderConfigError {
    Viewport(ViewportError),
    InvalidDimensions { width: i32, height: i32 },
    Grid(PixelGridError),
    InvalidWorkerCount(i32),
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::InvalidDimensions { width, height } => {
                write!(f, "image dimensions must be positive: {}x{}", width, height)
            }
            Self::Grid(err) => write!(f, "invalid pixel grid: {}", err),
            Self::InvalidWorkerCount(workers) => {
                write!(f, "worker count must be at least 1, got {}", workers)
            }
        }
    }
}

impl Error for RenderConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for RenderConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<PixelGridError> for RenderConfigError {
    fn from(err: PixelGridError) -> Self {
        Self::Grid(err)
    }
}

/// Unvalidated render request, as it arrives from the outside world.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub width: i32,
    pub height: i32,
    pub workers: i32,
}

impl Default for RenderParams {
    fn default() -> Self {
        let viewport = Viewport::default();

        Self {
            xmin: viewport.min().real,
            ymin: viewport.min().imag,
            xmax: viewport.max().real,
            ymax: viewport.max().imag,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            workers: DEFAULT_WORKERS,
        }
    }
}

/// A validated, immutable description of one render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    viewport: Viewport,
    size: GridSize,
    workers: NonZeroUsize,
}

impl RenderConfig {
    #[must_use]
    pub fn new(viewport: Viewport, size: GridSize, workers: NonZeroUsize) -> Self {
        Self {
            viewport,
            size,
            workers,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }
}

impl TryFrom<RenderParams> for RenderConfig {
    type Error = RenderConfigError;

    fn try_from(params: RenderParams) -> Result<Self, Self::Error> {
        let viewport = Viewport::from_bounds(params.xmin, params.ymin, params.xmax, params.ymax)?;

        if params.width <= 0 || params.height <= 0 {
            return Err(RenderConfigError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }
        let size = GridSize::new(params.width as u32, params.height as u32)?;

        let workers = usize::try_from(params.workers)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(RenderConfigError::InvalidWorkerCount(params.workers))?;

        Ok(Self::new(viewport, size, workers))
    }
}
