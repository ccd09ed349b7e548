use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel computation the schedulers fan out. Implementations must be
/// pure: the same pixel always yields the same value, whichever worker asks.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
