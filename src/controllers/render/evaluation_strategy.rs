use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

/// How per-pixel work is spread across cores. Every strategy produces the
/// same row-major output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationStrategy {
    #[default]
    Rayon,
    ScopedThreads,
    Serial,
}

impl EvaluationStrategy {
    pub const ALL: &'static [Self] = &[Self::Rayon, Self::ScopedThreads, Self::Serial];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rayon => "Rayon",
            Self::ScopedThreads => "Scoped threads",
            Self::Serial => "Serial",
        }
    }

    pub fn evaluate<Alg>(
        self,
        pixel_rect: PixelRect,
        algorithm: &Alg,
    ) -> Result<Vec<Alg::Success>, Box<dyn Error>>
    where
        Alg: FractalAlgorithm + Sync,
        Alg::Success: Default + Clone + Send,
        Alg::Failure: Send + 'static,
    {
        let values = match self {
            Self::Rayon => generate_fractal_parallel_rayon(pixel_rect, algorithm)?,
            Self::ScopedThreads => generate_fractal_parallel_scoped_threads(pixel_rect, algorithm)?,
            Self::Serial => generate_fractal_serial(pixel_rect, algorithm)?,
        };

        Ok(values)
    }
}

impl fmt::Display for EvaluationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::test_support::{
        StubFailureAlgorithm, StubSuccessAlgorithm,
    };
    use crate::core::data::point::Point;

    #[test]
    fn test_all_strategies_agree() {
        let pixel_rect = PixelRect::with_size(13, 9).unwrap();
        let algorithm = StubSuccessAlgorithm {};
        let expected = generate_fractal_serial(pixel_rect, &algorithm).unwrap();

        for &strategy in EvaluationStrategy::ALL {
            assert_eq!(strategy.evaluate(pixel_rect, &algorithm).unwrap(), expected, "{strategy}");
        }
    }

    #[test]
    fn test_all_strategies_propagate_failures() {
        let pixel_rect = PixelRect::with_size(6, 6).unwrap();
        let algorithm = StubFailureAlgorithm {
            failing_pixel: Point { x: 3, y: 4 },
        };

        for &strategy in EvaluationStrategy::ALL {
            assert!(strategy.evaluate(pixel_rect, &algorithm).is_err(), "{strategy}");
        }
    }
}
