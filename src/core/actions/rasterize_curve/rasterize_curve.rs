use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane_coords::plane_to_pixel_coords;

/// Draws a polyline onto a black frame.
///
/// Each segment is clipped to the viewport in plane space before it is
/// stepped, so zooming deep into a curve costs no more than the visible
/// pixels. Segments with non-finite endpoints are skipped.
pub fn rasterize_curve(
    points: &[Complex],
    viewport: Viewport,
    pixel_rect: PixelRect,
    colour: Colour,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer = PixelBuffer::new(pixel_rect);

    if let [point] = points {
        if viewport.contains_point(*point) {
            plot(&mut buffer, plane_to_pixel_coords(*point, pixel_rect, viewport), colour)?;
        }
    }

    for segment in points.windows(2) {
        let Some((from, to)) = clip_segment(segment[0], segment[1], viewport) else {
            continue;
        };

        draw_line(
            &mut buffer,
            plane_to_pixel_coords(from, pixel_rect, viewport),
            plane_to_pixel_coords(to, pixel_rect, viewport),
            colour,
        )?;
    }

    Ok(buffer)
}

/// Liang-Barsky clip of `p1 -> p2` against the viewport bounds.
fn clip_segment(p1: Complex, p2: Complex, viewport: Viewport) -> Option<(Complex, Complex)> {
    if ![p1.real, p1.imag, p2.real, p2.imag].iter().all(|v| v.is_finite()) {
        return None;
    }

    let delta = p2 - p1;
    let mut t_enter: f64 = 0.0;
    let mut t_exit: f64 = 1.0;

    let edges = [
        (-delta.real, p1.real - viewport.x_min()),
        (delta.real, viewport.x_max() - p1.real),
        (-delta.imag, p1.imag - viewport.y_min()),
        (delta.imag, viewport.y_max() - p1.imag),
    ];

    for (direction, distance) in edges {
        if direction == 0.0 {
            // parallel to this edge and on its outer side
            if distance < 0.0 {
                return None;
            }
        } else {
            let t = distance / direction;
            if direction < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }
        }
    }

    if t_enter > t_exit {
        return None;
    }

    Some((p1 + delta * t_enter, p1 + delta * t_exit))
}

fn draw_line(
    buffer: &mut PixelBuffer,
    from: Point,
    to: Point,
    colour: Colour,
) -> Result<(), PixelBufferError> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut error = dx + dy;
    let mut current = from;

    loop {
        plot(buffer, current, colour)?;

        if current == to {
            return Ok(());
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }
}

// Rounding a clipped endpoint can land half a pixel past the edge.
fn plot(buffer: &mut PixelBuffer, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
    if buffer.pixel_rect().contains_point(pixel) {
        buffer.set_pixel(pixel, colour)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::curves::koch::koch_curve;

    fn square_setup() -> (Viewport, PixelRect) {
        (
            Viewport::new(0.0, 4.0, 0.0, 4.0, 1.0).unwrap(),
            PixelRect::with_size(5, 5).unwrap(),
        )
    }

    fn lit_pixels(buffer: &PixelBuffer) -> Vec<Point> {
        let rect = buffer.pixel_rect();
        let mut lit = Vec::new();

        for y in rect.top_left().y..=rect.bottom_right().y {
            for x in rect.top_left().x..=rect.bottom_right().x {
                let pixel = Point { x, y };
                if buffer.pixel(pixel).unwrap() != Colour::BLACK {
                    lit.push(pixel);
                }
            }
        }

        lit
    }

    #[test]
    fn test_empty_curve_is_black() {
        let (viewport, pixel_rect) = square_setup();
        let buffer = rasterize_curve(&[], viewport, pixel_rect, Colour::WHITE).unwrap();

        assert_eq!(buffer, PixelBuffer::new(pixel_rect));
    }

    #[test]
    fn test_single_point_curve_plots_one_pixel() {
        let (viewport, pixel_rect) = square_setup();
        let buffer =
            rasterize_curve(&[Complex::new(1.0, 1.0)], viewport, pixel_rect, Colour::WHITE)
                .unwrap();

        assert_eq!(lit_pixels(&buffer), vec![Point { x: 1, y: 3 }]);
    }

    #[test]
    fn test_horizontal_segment_fills_a_row() {
        let (viewport, pixel_rect) = square_setup();
        let points = [Complex::new(0.0, 2.0), Complex::new(4.0, 2.0)];

        let buffer = rasterize_curve(&points, viewport, pixel_rect, Colour::RED).unwrap();

        let expected: Vec<Point> = (0..5).map(|x| Point { x, y: 2 }).collect();
        assert_eq!(lit_pixels(&buffer), expected);
        assert_eq!(buffer.pixel(Point { x: 3, y: 2 }), Ok(Colour::RED));
    }

    #[test]
    fn test_diagonal_segment_steps_one_pixel_per_row() {
        let (viewport, pixel_rect) = square_setup();
        let points = [Complex::new(0.0, 0.0), Complex::new(4.0, 4.0)];

        let buffer = rasterize_curve(&points, viewport, pixel_rect, Colour::WHITE).unwrap();

        let expected: Vec<Point> = (0..5).map(|y| Point { x: 4 - y, y }).collect();
        assert_eq!(lit_pixels(&buffer), expected);
    }

    #[test]
    fn test_segment_crossing_viewport_is_clipped() {
        let (viewport, pixel_rect) = square_setup();
        let points = [Complex::new(-100.0, 0.0), Complex::new(100.0, 0.0)];

        let buffer = rasterize_curve(&points, viewport, pixel_rect, Colour::WHITE).unwrap();

        let expected: Vec<Point> = (0..5).map(|x| Point { x, y: 4 }).collect();
        assert_eq!(lit_pixels(&buffer), expected);
    }

    #[test]
    fn test_segment_outside_viewport_draws_nothing() {
        let (viewport, pixel_rect) = square_setup();
        let points = [Complex::new(-1.0, 5.0), Complex::new(6.0, 5.0)];

        let buffer = rasterize_curve(&points, viewport, pixel_rect, Colour::WHITE).unwrap();

        assert!(lit_pixels(&buffer).is_empty());
    }

    #[test]
    fn test_non_finite_points_are_skipped() {
        let (viewport, pixel_rect) = square_setup();
        let points = [Complex::new(f64::NAN, 1.0), Complex::new(2.0, 2.0)];

        let buffer = rasterize_curve(&points, viewport, pixel_rect, Colour::WHITE).unwrap();

        assert!(lit_pixels(&buffer).is_empty());
    }

    #[test]
    fn test_koch_curve_touches_both_endpoints() {
        let viewport = Viewport::new(0.0, 1.0, -0.5, 0.5, 1.0).unwrap();
        let pixel_rect = PixelRect::with_size(101, 101).unwrap();

        let buffer = rasterize_curve(&koch_curve(3), viewport, pixel_rect, Colour::WHITE).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 50 }), Ok(Colour::WHITE));
        assert_eq!(buffer.pixel(Point { x: 100, y: 50 }), Ok(Colour::WHITE));
        // the bump rises above the baseline
        assert_eq!(buffer.pixel(Point { x: 50, y: 21 }), Ok(Colour::WHITE));
    }
}
