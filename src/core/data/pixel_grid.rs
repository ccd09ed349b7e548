use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelGridError {
    ZeroSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
    BoundsMismatch { grid_size: usize, buffer_size: usize },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "pixel grid size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "pixel grid {}x{} does not fit in memory", width, height)
            }
            Self::BoundsMismatch { grid_size, buffer_size } => {
                write!(
                    f,
                    "pixel grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelGridError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelGridError> {
        if width == 0 || height == 0 {
            return Err(PixelGridError::ZeroSize { width, height });
        }

        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(PixelGridError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells. Cannot overflow, `new` checks the product.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }
}

/// Row-major `width × height` grid of cells.
///
/// The only way to mutate cells is through [`PixelGrid::rows_mut`], which
/// splits the buffer into one exclusive slice per row. A row is the unit of
/// work the schedulers hand out, so two workers can never be given
/// overlapping cells.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid<T> {
    size: GridSize,
    cells: Vec<T>,
}

impl<T: Clone + Default> PixelGrid<T> {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![T::default(); size.pixel_count()],
        }
    }
}

impl<T> PixelGrid<T> {
    pub fn from_cells(size: GridSize, cells: Vec<T>) -> Result<Self, PixelGridError> {
        if cells.len() != size.pixel_count() {
            return Err(PixelGridError::BoundsMismatch {
                grid_size: size.pixel_count(),
                buffer_size: cells.len(),
            });
        }

        Ok(Self { size, cells })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<&T> {
        if !self.size.contains_point(point) {
            return None;
        }

        self.cells
            .get(point.y as usize * self.size.width as usize + point.x as usize)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = GridRow<'_, T>> {
        self.cells
            .chunks_mut(self.size.width as usize)
            .enumerate()
            .map(|(y, cells)| GridRow { y: y as u32, cells })
    }
}

/// Exclusive view of one row of a [`PixelGrid`].
#[derive(Debug)]
pub struct GridRow<'a, T> {
    y: u32,
    cells: &'a mut [T],
}

impl<T> GridRow<'_, T> {
    #[must_use]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[must_use]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut *self.cells
    }
}

pub type GrayGrid = PixelGrid<u8>;
