use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Maps a pixel onto the viewport's plane window.
///
/// Corner pixels land exactly on the viewport bounds. Row 0 is the top of
/// the image, so it maps to `y_max`.
pub fn pixel_to_plane_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToPlaneCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x - pixel_rect.top_left().x) as f64;
    let relative_pixel_y = (pixel_position.y - pixel_rect.top_left().y) as f64;
    let real =
        viewport.x_min() + (relative_pixel_x / (pixel_rect.width() - 1) as f64) * viewport.width();
    let imag =
        viewport.y_max() - (relative_pixel_y / (pixel_rect.height() - 1) as f64) * viewport.height();

    Ok(Complex { real, imag })
}

/// Inverse of [`pixel_to_plane_coords`], rounded to the nearest pixel.
///
/// Plane points outside the viewport produce pixels outside `pixel_rect`;
/// callers that draw must clip.
#[must_use]
pub fn plane_to_pixel_coords(point: Complex, pixel_rect: PixelRect, viewport: Viewport) -> Point {
    let relative_x = (point.real - viewport.x_min()) / viewport.width();
    let relative_y = (viewport.y_max() - point.imag) / viewport.height();

    let x = relative_x * (pixel_rect.width() - 1) as f64;
    let y = relative_y * (pixel_rect.height() - 1) as f64;

    Point {
        x: pixel_rect.top_left().x + x.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32,
        y: pixel_rect.top_left().y + y.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32,
    }
}
