use crate::core::data::complex::Complex;

pub(crate) const SQRT_3_OVER_2: f64 = 0.866_025_403_784_438_6;

pub const UNIT_SEGMENT: &[Complex] = &[Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)];

pub const UNIT_TRIANGLE: &[Complex] = &[
    Complex::new(0.0, 0.0),
    Complex::new(1.0, 0.0),
    Complex::new(0.5, SQRT_3_OVER_2),
    Complex::new(0.0, 0.0),
];

pub const UNIT_SQUARE: &[Complex] = &[
    Complex::new(0.0, 0.0),
    Complex::new(1.0, 0.0),
    Complex::new(1.0, 1.0),
    Complex::new(0.0, 1.0),
    Complex::new(0.0, 0.0),
];

/// How one segment is rewritten during a generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motif {
    /// Factor applied to `p2 - p1` before it is handed to the motif.
    pub scale: f64,
    /// Points emitted per segment, counting `p1` but not `p2`.
    pub size: usize,
}

/// Rewrites every segment of `seed` with a motif, `iterations` times.
///
/// For each segment `(p1, p2)` the output receives `p1`, then whatever
/// `interior` pushes given `p1`, the scaled delta and the segment index.
/// The final endpoint is appended once per generation, so both endpoints of
/// the seed survive every generation.
pub fn refine(
    seed: &[Complex],
    iterations: u32,
    motif: Motif,
    interior: impl Fn(Complex, Complex, usize, &mut Vec<Complex>),
) -> Vec<Complex> {
    let mut points = seed.to_vec();

    for _ in 0..iterations {
        let segments = points.len().saturating_sub(1);
        let mut next = Vec::with_capacity(segments * motif.size + 1);

        for (index, segment) in points.windows(2).enumerate() {
            let (p1, p2) = (segment[0], segment[1]);
            next.push(p1);
            interior(p1, (p2 - p1) * motif.scale, index, &mut next);
        }

        if let Some(&last) = points.last() {
            next.push(last);
        }

        points = next;
    }

    points
}

/// Number of points [`refine`] produces, or `None` if it would not fit in
/// `usize`.
#[must_use]
pub fn refined_len(seed_len: usize, motif_size: usize, iterations: u32) -> Option<usize> {
    let segments = seed_len.saturating_sub(1);

    motif_size
        .checked_pow(iterations)?
        .checked_mul(segments)?
        .checked_add(1)
}
