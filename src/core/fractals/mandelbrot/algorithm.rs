use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::mandelbrot;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f32;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_plane_coords(pixel, self.pixel_rect, self.viewport)?;

        Ok(mandelbrot(c.real, c.imag))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, viewport: Viewport) -> Self {
        Self {
            pixel_rect,
            viewport,
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}
