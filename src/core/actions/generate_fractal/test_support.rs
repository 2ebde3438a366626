use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub struct StubError {}

impl fmt::Display for StubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StubError")
    }
}

impl Error for StubError {}

#[derive(Debug)]
pub struct StubSuccessAlgorithm {}

impl FractalAlgorithm for StubSuccessAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok((pixel.y * 1000 + pixel.x) as u64)
    }
}

/// Fails on a single pixel so callers can check partial work is discarded.
#[derive(Debug)]
pub struct StubFailureAlgorithm {
    pub failing_pixel: Point,
}

impl FractalAlgorithm for StubFailureAlgorithm {
    type Success = u64;
    type Failure = StubError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if pixel == self.failing_pixel {
            Err(StubError {})
        } else {
            Ok(0)
        }
    }
}
