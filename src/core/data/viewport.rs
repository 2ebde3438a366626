use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
    NonFinite,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::NonFinite => write!(f, "viewport bounds must be finite"),
        }
    }
}

impl Error for ViewportError {}

/// Camera window over a fractal's native plane.
///
/// Owned by the application layer. The engine never sees it: callers map
/// pixels into plane coordinates before classifying, and map generated curve
/// points back into pixels afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    zoom: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, zoom: f64) -> Result<Self, ViewportError> {
        if ![x_min, x_max, y_min, y_max, zoom].iter().all(|v| v.is_finite()) {
            return Err(ViewportError::NonFinite);
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            zoom,
        })
    }

    /// Builds a viewport from bounds already known to be finite with
    /// positive extents, such as a fixed catalog table.
    pub(crate) const fn from_trusted_bounds(bounds: [f64; 5]) -> Self {
        let [x_min, x_max, y_min, y_max, zoom] = bounds;

        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            zoom,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x_min + self.x_max) * 0.5,
            imag: (self.y_min + self.y_max) * 0.5,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max
            && self.y_min <= point.imag
            && point.imag <= self.y_max
    }

    /// Scales the window about `focus`. A factor below one zooms in.
    ///
    /// The viewport is left untouched if the result would be degenerate.
    pub fn zoom_about(&mut self, focus: Complex, factor: f64) -> Result<(), ViewportError> {
        let zoomed = Self::new(
            focus.real + (self.x_min - focus.real) * factor,
            focus.real + (self.x_max - focus.real) * factor,
            focus.imag + (self.y_min - focus.imag) * factor,
            focus.imag + (self.y_max - focus.imag) * factor,
            self.zoom * factor,
        )?;

        *self = zoomed;
        Ok(())
    }

    /// Translates the window by plane units.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        let panned = Self::new(
            self.x_min + dx,
            self.x_max + dx,
            self.y_min + dy,
            self.y_max + dy,
            self.zoom,
        )?;

        *self = panned;
        Ok(())
    }

    /// Translates the window so the plane follows a mouse drag of
    /// `(dx, dy)` pixels across `pixel_rect`.
    pub fn pan_pixels(&mut self, dx: i32, dy: i32, pixel_rect: PixelRect) -> Result<(), ViewportError> {
        let plane_dx = -self.width() * dx as f64 / pixel_rect.width() as f64;
        let plane_dy = self.height() * dy as f64 / pixel_rect.height() as f64;

        self.pan(plane_dx, plane_dy)
    }
}
