use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluation seam between the generation loops and a fractal.
///
/// Implementations must be safe to call from many threads at once on
/// distinct pixels.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
