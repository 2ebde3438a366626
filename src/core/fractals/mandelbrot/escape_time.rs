use crate::core::data::complex::Complex;

pub const MANDELBROT_MAX_ITERATIONS: u32 = 50;
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time membership of `c = real + i·imag`.
///
/// Iterates `z <- z² + c` from zero. Returns `i / 50` for the first iteration
/// `i` at which `|z| > 2`, or `1.0` if the orbit stays bounded.
#[must_use]
pub fn mandelbrot(real: f64, imag: f64) -> f32 {
    let c = Complex::new(real, imag);
    let mut z = Complex::default();

    for iteration in 0..MANDELBROT_MAX_ITERATIONS {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration as f32 / MANDELBROT_MAX_ITERATIONS as f32;
        }
    }

    1.0
}
