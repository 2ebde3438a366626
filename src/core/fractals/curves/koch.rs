//! Koch family: each segment becomes four, with a triangular bump on the
//! middle third.

use crate::core::data::complex::Complex;
use crate::core::fractals::curves::refine::{
    Motif, SQRT_3_OVER_2, UNIT_SEGMENT, UNIT_TRIANGLE, refine,
};

pub const KOCH_MOTIF: Motif = Motif {
    scale: 1.0 / 3.0,
    size: 4,
};

/// `bump` is `+1.0` for an outward peak and `-1.0` for an inward one.
fn koch_interior(bump: f64) -> impl Fn(Complex, Complex, usize, &mut Vec<Complex>) {
    move |p1: Complex, delta: Complex, _: usize, out: &mut Vec<Complex>| {
        let peak = Complex::new(0.0, bump * SQRT_3_OVER_2);

        out.push(p1 + delta);
        out.push(p1 + delta * 1.5 + delta * peak);
        out.push(p1 + delta * 2.0);
    }
}

#[must_use]
pub fn koch_curve(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, KOCH_MOTIF, koch_interior(1.0))
}

#[must_use]
pub fn koch_snowflake(iterations: u32) -> Vec<Complex> {
    refine(UNIT_TRIANGLE, iterations, KOCH_MOTIF, koch_interior(1.0))
}

#[must_use]
pub fn koch_anti_snowflake(iterations: u32) -> Vec<Complex> {
    refine(UNIT_TRIANGLE, iterations, KOCH_MOTIF, koch_interior(-1.0))
}
