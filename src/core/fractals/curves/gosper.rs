//! Curves built on 60° rotations, plus the Cesàro sawtooth.

use crate::core::data::complex::Complex;
use crate::core::fractals::curves::refine::{Motif, UNIT_SEGMENT, UNIT_TRIANGLE, refine};
use std::f64::consts::FRAC_PI_3;

pub const GOSPER_MOTIF: Motif = Motif {
    scale: 0.377_964_473_009_227_2, // 1 / sqrt(7)
    size: 7,
};

pub const ARROWHEAD_MOTIF: Motif = Motif {
    scale: 0.5,
    size: 3,
};

pub const CESARO_MOTIF: Motif = Motif {
    scale: 0.678_170_852_454_628_5, // 1 / (2 cos 42.5°)
    size: 4,
};

const CESARO_ANGLE_DEGREES: f64 = 85.0;

fn rot60() -> Complex {
    Complex::from_polar(1.0, FRAC_PI_3)
}

#[must_use]
pub fn gosper_curve(iterations: u32) -> Vec<Complex> {
    let w = rot60();

    refine(UNIT_SEGMENT, iterations, GOSPER_MOTIF, move |p1, delta, _, out| {
        out.push(p1 + delta);
        out.push(p1 + delta * (w + 1.0));
        out.push(p1 + delta * (w * w + w + 1.0));
        out.push(p1 + delta * (w + 2.0));
        out.push(p1 + delta * (w * 2.0 + 2.0));
        out.push(p1 + delta * (w + 3.0));
    })
}

/// Gosper motif over a closed triangle. The third point uses `1 + 2ω`
/// where the open curve uses `1 + ω + ω²`.
#[must_use]
pub fn gosper_island(iterations: u32) -> Vec<Complex> {
    let w = rot60();

    refine(UNIT_TRIANGLE, iterations, GOSPER_MOTIF, move |p1, delta, _, out| {
        out.push(p1 + delta);
        out.push(p1 + delta * (w + 1.0));
        out.push(p1 + delta * (w * 2.0 + 1.0));
        out.push(p1 + delta * (w + 2.0));
        out.push(p1 + delta * (w * 2.0 + 2.0));
        out.push(p1 + delta * (w + 3.0));
    })
}

#[must_use]
pub fn sierpinski_arrowhead(iterations: u32) -> Vec<Complex> {
    let w = rot60();

    refine(UNIT_SEGMENT, iterations, ARROWHEAD_MOTIF, move |p1, delta, _, out| {
        out.push(p1 + delta * w);
        out.push(p1 + delta * (w + 1.0));
    })
}

/// Sawtooth with an 85° apex, split as two 42.5° turns.
#[must_use]
pub fn cesaro_curve(iterations: u32) -> Vec<Complex> {
    let half_angle = CESARO_ANGLE_DEGREES.to_radians() / 2.0;
    let r = Complex::from_polar(1.0, half_angle);

    refine(UNIT_SEGMENT, iterations, CESARO_MOTIF, move |p1, delta, _, out| {
        out.push(p1 + delta * r);
        out.push(p1 + delta * (r + r.conj()));
        out.push(p1 + delta * (r.conj() + 1.0));
    })
}
