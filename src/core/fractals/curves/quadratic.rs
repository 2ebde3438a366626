//! Right-angle motifs over segments and squares.

use crate::core::data::complex::{Complex, I};
use crate::core::fractals::curves::refine::{Motif, UNIT_SEGMENT, UNIT_SQUARE, refine};

pub const QUADRIC_KOCH_MOTIF: Motif = Motif {
    scale: 1.0 / 3.0,
    size: 6,
};

pub const KOCH_ISLAND_MOTIF: Motif = Motif {
    scale: 1.0 / 3.0,
    size: 5,
};

pub const MINKOWSKI_MOTIF: Motif = Motif {
    scale: 0.25,
    size: 8,
};

pub const SNOWFLAKE_SWEEP_MOTIF: Motif = Motif {
    scale: 0.25,
    size: 6,
};

/// Offset straight up by the delta's vertical component.
fn rise_by_imag(delta: Complex) -> Complex {
    Complex::new(0.0, delta.imag)
}

/// Offset straight up by the delta's horizontal component.
fn rise_by_real(delta: Complex) -> Complex {
    Complex::new(0.0, delta.real)
}

#[must_use]
pub fn quadric_koch(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SQUARE, iterations, QUADRIC_KOCH_MOTIF, |p1, delta, _, out| {
        let rise = rise_by_imag(delta);

        out.push(p1 + delta);
        out.push(p1 + delta + rise);
        out.push(p1 + delta * 2.0 + rise);
        out.push(p1 + delta * 2.0 + rise - delta);
        out.push(p1 + delta * 2.0);
    })
}

/// Square notch turned a quarter clockwise from each segment.
#[must_use]
pub fn koch_island(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SQUARE, iterations, KOCH_ISLAND_MOTIF, |p1, delta, _, out| {
        let notch = -(delta * I);

        out.push(p1 + delta);
        out.push(p1 + delta + notch);
        out.push(p1 + delta * 2.0 + notch);
        out.push(p1 + delta * 2.0);
    })
}

#[must_use]
pub fn minkowski_sausage(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, MINKOWSKI_MOTIF, |p1, delta, _, out| {
        let rise = rise_by_real(delta);

        out.push(p1 + delta);
        out.push(p1 + delta + rise);
        out.push(p1 + delta * 2.0 + rise);
        out.push(p1 + delta * 2.0);
        out.push(p1 + delta * 2.0 - rise);
        out.push(p1 + delta * 3.0 - rise);
        out.push(p1 + delta * 3.0);
    })
}

/// Like [`minkowski_sausage`] but the notches are perpendicular to each
/// segment rather than vertical.
#[must_use]
pub fn koch_quadratic(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, MINKOWSKI_MOTIF, |p1, delta, _, out| {
        let turn = delta * I;

        out.push(p1 + delta);
        out.push(p1 + delta + turn);
        out.push(p1 + delta * 2.0 + turn);
        out.push(p1 + delta * 2.0);
        out.push(p1 + delta * 2.0 - turn);
        out.push(p1 + delta * 3.0 - turn);
        out.push(p1 + delta * 3.0);
    })
}

#[must_use]
pub fn snowflake_sweep(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SQUARE, iterations, SNOWFLAKE_SWEEP_MOTIF, |p1, delta, _, out| {
        let rise = rise_by_real(delta);

        out.push(p1 + delta);
        out.push(p1 + delta + rise);
        out.push(p1 + delta * 2.0);
        out.push(p1 + delta * 2.0 - rise);
        out.push(p1 + delta * 3.0);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx(a: Complex, b: Complex) -> bool {
        (a - b).magnitude() < EPSILON
    }

    #[test]
    fn test_minkowski_and_koch_quadratic_agree_on_horizontal_seed() {
        let minkowski = minkowski_sausage(1);
        let quadratic = koch_quadratic(1);

        assert_eq!(minkowski.len(), 9);
        for (a, b) in minkowski.iter().zip(&quadratic) {
            assert!(approx(*a, *b));
        }
    }

    #[test]
    fn test_minkowski_and_koch_quadratic_diverge_on_later_generations() {
        let minkowski = minkowski_sausage(2);
        let quadratic = koch_quadratic(2);

        assert!(minkowski.iter().zip(&quadratic).any(|(a, b)| !approx(*a, *b)));
    }

    #[test]
    fn test_minkowski_first_generation_shape() {
        let points = minkowski_sausage(1);

        assert!(approx(points[2], Complex::new(0.25, 0.25)));
        assert!(approx(points[5], Complex::new(0.5, -0.25)));
        assert!(approx(points[8], Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_koch_island_notches_outward_on_base() {
        let points = koch_island(1);

        assert_eq!(points.len(), 4 * 5 + 1);
        assert!(approx(points[2], Complex::new(1.0 / 3.0, -1.0 / 3.0)));
    }

    #[test]
    fn test_quadric_koch_base_edge_is_flat() {
        // the base edge has no vertical component, so its rise is zero
        let points = quadric_koch(1);

        assert_eq!(points.len(), 4 * 6 + 1);
        for point in &points[0..6] {
            assert!(point.imag.abs() < EPSILON);
        }
    }

    #[test]
    fn test_snowflake_sweep_closes_the_square() {
        let points = snowflake_sweep(2);

        assert_eq!(points.len(), 4 * 6 * 6 + 1);
        assert_eq!(points.first(), points.last());
    }
}
