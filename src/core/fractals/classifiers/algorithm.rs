use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::classifiers::classifier_kinds::{Classifier, ClassifierKinds};
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Evaluates one classifier for every pixel of a frame.
///
/// Probabilistic classifiers get a fresh RNG per pixel, seeded from the
/// frame seed and the pixel position, so a frame is reproducible for a given
/// seed no matter how pixels are spread across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierAlgorithm {
    kind: ClassifierKinds,
    pixel_rect: PixelRect,
    viewport: Viewport,
    depth: u32,
    seed: u64,
}

impl ClassifierAlgorithm {
    #[must_use]
    pub fn new(
        kind: ClassifierKinds,
        pixel_rect: PixelRect,
        viewport: Viewport,
        depth: u32,
        seed: u64,
    ) -> Self {
        Self {
            kind,
            pixel_rect,
            viewport,
            depth,
            seed,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ClassifierKinds {
        self.kind
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn pixel_seed(&self, pixel: Point) -> u64 {
        let position = (u64::from(pixel.y as u32) << 32) | u64::from(pixel.x as u32);
        self.seed ^ position
    }
}

impl FractalAlgorithm for ClassifierAlgorithm {
    type Success = f32;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_plane_coords(pixel, self.pixel_rect, self.viewport)?;

        let value = match self.kind.classifier() {
            Classifier::Deterministic(classify) => classify(point.real, point.imag, self.depth),
            Classifier::Probabilistic(classify) => {
                let mut rng = SmallRng::seed_from_u64(self.pixel_seed(pixel));
                classify(point.real, point.imag, self.depth, &mut rng)
            }
        };

        Ok(value)
    }
}
