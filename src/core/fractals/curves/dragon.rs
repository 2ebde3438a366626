//! Dragon family: folding curves driven by right-angle and 120° turns.

use crate::core::data::complex::{Complex, I};
use crate::core::fractals::curves::refine::{Motif, UNIT_SEGMENT, refine};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

pub const DRAGON_MOTIF: Motif = Motif {
    scale: FRAC_1_SQRT_2,
    size: 2,
};

pub const TERDRAGON_MOTIF: Motif = Motif {
    scale: 0.577_350_269_189_625_8, // 1 / sqrt(3)
    size: 3,
};

pub const DEKKING_MOTIF: Motif = Motif {
    scale: 0.447_213_595_499_957_9, // 1 / sqrt(5)
    size: 5,
};

fn lift(p1: Complex, delta: Complex, _: usize, out: &mut Vec<Complex>) {
    out.push(p1 + delta * Complex::new(1.0, 1.0));
}

#[must_use]
pub fn dragon_curve(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, DRAGON_MOTIF, lift)
}

/// Shares its motif with [`dragon_curve`]; kept as its own catalog entry.
#[must_use]
pub fn levy_curve(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, DRAGON_MOTIF, lift)
}

/// Folds left on even segments and right on odd ones.
#[must_use]
pub fn heighway_dragon_variant(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, DRAGON_MOTIF, |p1, delta, index, out| {
        let turn = if index % 2 == 0 { I } else { I.conj() };
        out.push(p1 + delta * turn);
    })
}

#[must_use]
pub fn terdragon_curve(iterations: u32) -> Vec<Complex> {
    let rot120 = Complex::from_polar(1.0, 2.0 * PI / 3.0);

    refine(UNIT_SEGMENT, iterations, TERDRAGON_MOTIF, move |p1, delta, _, out| {
        out.push(p1 + delta);
        out.push(p1 + delta * (rot120 + 1.0));
    })
}

#[must_use]
pub fn dekking_curve(iterations: u32) -> Vec<Complex> {
    refine(UNIT_SEGMENT, iterations, DEKKING_MOTIF, |p1, delta, _, out| {
        out.push(p1 + delta * I);
        out.push(p1 + delta * (I + 1.0));
        out.push(p1 + delta * (I + 2.0));
        out.push(p1 + delta * (I * 2.0 + 2.0));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_dragon_first_fold_is_right_angle() {
        let points = dragon_curve(1);

        assert_eq!(points.len(), 3);
        assert!((points[1] - Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)).magnitude() < EPSILON);
    }

    #[test]
    fn test_dragon_and_levy_agree() {
        assert_eq!(dragon_curve(5), levy_curve(5));
    }

    #[test]
    fn test_heighway_alternates_fold_direction() {
        let first = heighway_dragon_variant(1);
        assert!((first[1] - Complex::new(0.0, FRAC_1_SQRT_2)).magnitude() < EPSILON);

        // segment 0 turns by +i, segment 1 by -i
        let second = heighway_dragon_variant(2);
        assert_eq!(second.len(), 5);
        assert!((second[1] - Complex::new(-0.5, 0.0)).magnitude() < EPSILON);
        assert!((second[3] - Complex::new(-0.5, 0.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_terdragon_first_generation() {
        let points = terdragon_curve(1);
        let third = 1.0 / 3.0_f64.sqrt();

        assert_eq!(points.len(), 4);
        assert!((points[1] - Complex::new(third, 0.0)).magnitude() < EPSILON);
        assert!(
            (points[2] - Complex::new(third * 0.5, third * 3.0_f64.sqrt() / 2.0)).magnitude()
                < EPSILON
        );
    }

    #[test]
    fn test_dekking_first_generation_points() {
        let s = 1.0 / 5.0_f64.sqrt();
        let points = dekking_curve(1);

        assert_eq!(points.len(), 6);
        assert!((points[1] - Complex::new(0.0, s)).magnitude() < EPSILON);
        assert!((points[4] - Complex::new(2.0 * s, 2.0 * s)).magnitude() < EPSILON);
    }
}
