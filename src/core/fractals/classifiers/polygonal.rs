//! Classifiers over hexagonal and pentagonal cell layouts.
//!
//! Each level picks the cell centre nearest to the point and then maps that
//! cell back onto the whole figure. The working domain is
//! `x in [0, 1]`, `y in [-0.5, 1.5]`, further limited to the figure's disk.

use crate::core::data::complex::Complex;
use crate::core::fractals::classifiers::subdivision::OUTSIDE;
use std::f64::consts::{FRAC_PI_3, PI};

const INSIDE: f32 = 1.0;
const SQRT_3: f64 = 1.732_050_807_568_877_2;

fn in_polygonal_domain(point: Complex) -> bool {
    (0.0..=1.0).contains(&point.real) && (-0.5..=1.5).contains(&point.imag)
}

/// Index and distance of the centre nearest to `point`. Ties go to the
/// lowest index.
fn nearest_centre(point: Complex, centres: impl Iterator<Item = Complex>) -> (usize, f64) {
    let mut closest = 0;
    let mut min_dist = f64::MAX;

    for (index, centre) in centres.enumerate() {
        let dist = (point - centre).magnitude();
        if dist < min_dist {
            min_dist = dist;
            closest = index;
        }
    }

    (closest, min_dist)
}

/// Zooms `point` about `centre` by `scale` and shifts it back by `offset`.
fn rescale(point: Complex, centre: Complex, scale: f64, offset: Complex) -> Complex {
    (point - centre) * scale + centre - offset
}

#[must_use]
pub fn sierpinski_hexagon(x: f64, y: f64, depth: u32) -> f32 {
    const SCALE: f64 = 3.0;

    let mut point = Complex::new(x, y);
    let centre = Complex::new(0.5, SQRT_3 / 4.0);

    if !in_polygonal_domain(point) || (point - centre).magnitude() > SQRT_3 / 2.0 {
        return OUTSIDE;
    }

    for _ in 0..depth {
        let sectors = (0..6_u32)
            .map(|j| centre + Complex::from_polar(SQRT_3 / (2.0 * SCALE), f64::from(j) * FRAC_PI_3));
        let (closest, min_dist) = nearest_centre(point, sectors);

        if closest == 0 && min_dist < SQRT_3 / (6.0 * SCALE) {
            return OUTSIDE;
        }

        let offset = Complex::from_polar(SQRT_3 / 2.0, closest as f64 * FRAC_PI_3);
        point = rescale(point, centre, SCALE, offset);
    }

    INSIDE
}

/// Centre cell plus a ring of six. Landing on the centre is kept outright.
#[must_use]
pub fn hexaflake(x: f64, y: f64, depth: u32) -> f32 {
    const SCALE: f64 = 3.0;

    let mut point = Complex::new(x, y);
    let centre = Complex::new(0.5, SQRT_3 / 4.0);

    if !in_polygonal_domain(point) || (point - centre).magnitude() > SQRT_3 / 2.0 {
        return OUTSIDE;
    }

    for _ in 0..depth {
        let cells = std::iter::once(centre).chain(
            (0..6_u32).map(|j| {
                centre + Complex::from_polar(SQRT_3 / (3.0 * SCALE), f64::from(j) * FRAC_PI_3)
            }),
        );
        let (closest, _) = nearest_centre(point, cells);

        if closest == 0 {
            return INSIDE;
        }

        let offset = Complex::from_polar(SQRT_3 / 3.0, (closest - 1) as f64 * FRAC_PI_3);
        point = rescale(point, centre, SCALE, offset);
    }

    INSIDE
}

/// Centre cell plus a ring of five. Landing on the centre removes the point.
///
/// Ring cell `j` sits at angle `j * 72°` but is mapped back using
/// `(j - 1) * 72°`; the folding this produces is part of the figure.
#[must_use]
pub fn sierpinski_pentagon(x: f64, y: f64, depth: u32) -> f32 {
    let step = 2.0 * PI / 5.0;
    let scale = 2.0 + step.cos();
    let ring_radius = step.sin() / scale;

    let mut point = Complex::new(x, y);
    let centre = Complex::new(0.5, 0.5 * (PI / 5.0).tan());

    if !in_polygonal_domain(point)
        || (point - centre).magnitude() > step.sin() / (2.0 * (PI / 5.0).cos())
    {
        return OUTSIDE;
    }

    for _ in 0..depth {
        let cells = std::iter::once(centre).chain(
            (1..6_u32).map(|j| centre + Complex::from_polar(ring_radius, f64::from(j) * step)),
        );
        let (closest, _) = nearest_centre(point, cells);

        if closest == 0 {
            return OUTSIDE;
        }

        let offset = Complex::from_polar(ring_radius, (closest - 1) as f64 * step);
        point = rescale(point, centre, scale, offset);
    }

    INSIDE
}
