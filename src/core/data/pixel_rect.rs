use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be at least 2x2: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of pixels. Both corners belong to the rect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = (bottom_right.x as i64) - (top_left.x as i64);
        let dy = (bottom_right.y as i64) - (top_left.y as i64);

        let width = (dx + if dx >= 0 { 1 } else { -1 }) as i32;
        let height = (dy + if dy >= 0 { 1 } else { -1 }) as i32;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rect anchored at the origin covering `width` x `height` pixels.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width.saturating_sub(1),
                y: height.saturating_sub(1),
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Row-major offset of `point` within the rect, or `None` outside it.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let relative_x = (point.x - self.top_left.x) as usize;
        let relative_y = (point.y - self.top_left.y) as usize;

        Some(relative_y * self.width() as usize + relative_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 100, y: 100 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_with_size_is_anchored_at_origin() {
        let rect = PixelRect::with_size(900, 780).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 899, y: 779 });
        assert_eq!(rect.width(), 900);
        assert_eq!(rect.height(), 780);
    }

    #[test]
    fn test_with_size_rejects_degenerate_sizes() {
        assert!(PixelRect::with_size(1, 10).is_err());
        assert!(PixelRect::with_size(10, 0).is_err());
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        let rect_negative_width = PixelRect::new(Point { x: 0, y: 0 }, Point { x: -100, y: 10 });
        let rect_negative_height = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 100, y: -10 });

        assert_eq!(rect_negative_width, Err(PixelRectError::InvalidSize { width: -101, height: 11 }));
        assert_eq!(rect_negative_height, Err(PixelRectError::InvalidSize { width: 101, height: -11 }));
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        let single_pixel = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 0, y: 0 });
        let two_pixels_square = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 });

        assert_eq!(single_pixel, Err(PixelRectError::InvalidSize { width: 1, height: 1 }));
        assert!(two_pixels_square.is_ok());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
    }

    #[test]
    fn test_index_of() {
        let rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 12, y: 22 }).unwrap();

        assert_eq!(rect.index_of(Point { x: 10, y: 20 }), Some(0));
        assert_eq!(rect.index_of(Point { x: 11, y: 21 }), Some(4));
        assert_eq!(rect.index_of(Point { x: 12, y: 22 }), Some(8));
        assert_eq!(rect.index_of(Point { x: 13, y: 22 }), None);
    }
}
