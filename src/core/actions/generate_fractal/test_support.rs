use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::GridSize;
use crate::core::data::point::Point;

#[derive(Debug, PartialEq)]
pub(crate) struct StubError {}

impl std::fmt::Display for StubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StubError")
    }
}

impl Error for StubError {}

/// Never yields 0, so a default cell left in a grid means a missed pixel.
#[derive(Debug)]
pub(crate) struct StubSuccessAlgorithm {}

impl FractalAlgorithm for StubSuccessAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(1 + (pixel.y as u64) * 1000 + pixel.x as u64)
    }
}

#[derive(Debug)]
pub(crate) struct StubFailureAlgorithm {
    pub(crate) failing_row: u32,
}

impl FractalAlgorithm for StubFailureAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if pixel.y == self.failing_row {
            return Err(StubError {});
        }
        Ok(1)
    }
}

#[derive(Debug)]
pub(crate) struct StubPanickingAlgorithm {}

impl FractalAlgorithm for StubPanickingAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
        panic!("stub algorithm panicked")
    }
}

/// Records how many times each pixel was computed.
#[derive(Debug, Default)]
pub(crate) struct CountingAlgorithm {
    visits: Mutex<HashMap<Point, usize>>,
}

impl CountingAlgorithm {
    pub(crate) fn assert_each_pixel_computed_once(&self, size: GridSize) {
        let visits = self.visits.lock().unwrap();

        assert_eq!(visits.len(), size.pixel_count());
        for y in 0..size.height() {
            for x in 0..size.width() {
                assert_eq!(visits.get(&Point { x, y }), Some(&1), "pixel ({}, {})", x, y);
            }
        }
    }
}

impl FractalAlgorithm for CountingAlgorithm {
    type Success = u8;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        *self.visits.lock().unwrap().entry(pixel).or_default() += 1;
        Ok(1)
    }
}

pub(crate) fn size(width: u32, height: u32) -> GridSize {
    GridSize::new(width, height).unwrap()
}
