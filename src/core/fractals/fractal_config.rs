use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::classifiers::algorithm::ClassifierAlgorithm;
use crate::core::fractals::fractal_kinds::{FractalFamily, FractalKinds};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::render_request::RenderRequest;
use std::error::Error;
use std::fmt;

pub const DEFAULT_ITERATIONS: u32 = 6;
pub const MAX_CURVE_ITERATIONS: u32 = 8;
pub const MAX_CLASSIFIER_DEPTH: u32 = 16;

/// Wheel zoom factors, in and out.
pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalConfigError {
    IterationsExceedMax {
        kind: FractalKinds,
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for FractalConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                kind,
                iterations,
                max_iterations,
            } => write!(
                f,
                "iterations {} exceeds maximum {} for {}",
                iterations, max_iterations, kind
            ),
        }
    }
}

impl Error for FractalConfigError {}

/// Largest accepted iteration count, or `None` when the fractal ignores it.
///
/// Curve output grows geometrically with iterations and classifier cost grows
/// linearly with depth, so both are capped.
#[must_use]
pub const fn max_iterations_for(kind: FractalKinds) -> Option<u32> {
    match kind.family() {
        FractalFamily::Escape => None,
        FractalFamily::Classifier(_) => Some(MAX_CLASSIFIER_DEPTH),
        FractalFamily::Curve(_) => Some(MAX_CURVE_ITERATIONS),
    }
}

/// Render settings for one session: which fractal, where the camera is and
/// how it is coloured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    pub kind: FractalKinds,
    pub viewport: Viewport,
    pub iterations: u32,
    pub colour_map_kind: ColourMapKinds,
    pub tint: Colour,
    /// Fixed seed for probabilistic classifiers; a fresh one per frame if unset.
    pub seed: Option<u64>,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self::for_kind(FractalKinds::default())
    }
}

impl FractalConfig {
    #[must_use]
    pub fn for_kind(kind: FractalKinds) -> Self {
        Self {
            kind,
            viewport: kind.default_viewport(),
            iterations: DEFAULT_ITERATIONS,
            colour_map_kind: ColourMapKinds::default(),
            tint: Colour::WHITE,
            seed: None,
        }
    }

    pub fn set_iterations(&mut self, iterations: u32) -> Result<(), FractalConfigError> {
        if let Some(max_iterations) = max_iterations_for(self.kind) {
            if iterations > max_iterations {
                log::warn!(
                    "rejected {} iterations for {} (max {})",
                    iterations,
                    self.kind,
                    max_iterations
                );
                return Err(FractalConfigError::IterationsExceedMax {
                    kind: self.kind,
                    iterations,
                    max_iterations,
                });
            }
        }

        self.iterations = iterations;
        Ok(())
    }

    /// Switches fractal, jumping to its default viewport. Iterations carried
    /// over from the previous fractal are capped to the new fractal's limit.
    pub fn select(&mut self, kind: FractalKinds) {
        self.kind = kind;
        self.viewport = kind.default_viewport();

        if let Some(max_iterations) = max_iterations_for(kind) {
            if self.iterations > max_iterations {
                log::debug!("capping iterations at {} for {}", max_iterations, kind);
                self.iterations = max_iterations;
            }
        }
    }

    pub fn reset_view(&mut self) {
        self.viewport = self.kind.default_viewport();
    }

    pub fn zoom_about(&mut self, focus: Complex, factor: f64) -> Result<(), ViewportError> {
        self.viewport.zoom_about(focus, factor)
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        self.viewport.pan(dx, dy)
    }

    #[must_use]
    pub fn build_render_request(&self, pixel_rect: PixelRect) -> RenderRequest {
        let colour_map = colour_map_factory(self.colour_map_kind, self.tint);

        match self.kind.family() {
            FractalFamily::Escape => RenderRequest::Mandelbrot {
                colour_map,
                algorithm: MandelbrotAlgorithm::new(pixel_rect, self.viewport),
            },
            FractalFamily::Classifier(kind) => {
                let seed = self.seed.unwrap_or_else(rand::random);

                RenderRequest::Classifier {
                    colour_map,
                    algorithm: ClassifierAlgorithm::new(
                        kind,
                        pixel_rect,
                        self.viewport,
                        self.iterations,
                        seed,
                    ),
                }
            }
            FractalFamily::Curve(kind) => RenderRequest::Curve {
                colour_map,
                kind,
                iterations: self.iterations,
                viewport: self.viewport,
                pixel_rect,
            },
        }
    }
}
