//! Space-filling curve classifiers.
//!
//! These return the point's position along the curve rather than a
//! membership value: the visiting index of its cell, accumulated across
//! levels, divided by the total number of cells.

use crate::core::fractals::classifiers::subdivision::{
    OUTSIDE, clamp_membership, in_unit_square, subdivide,
};

/// Accumulates `index / cells^(2 * depth)` without forming the integer index,
/// so large depths cannot overflow.
///
/// `quadrant` maps a level's `(rx, ry)` cell and the level number to that
/// cell's visiting order.
fn curve_position(
    mut x: f64,
    mut y: f64,
    depth: u32,
    cells: u32,
    quadrant: impl Fn(i64, i64, u32) -> i64,
) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    let cells_per_level = f64::from(cells * cells);
    let mut weight = 1.0;
    let mut position = 0.0;

    for level in 0..depth {
        let rx = i64::from(subdivide(&mut x, cells));
        let ry = i64::from(subdivide(&mut y, cells));

        weight /= cells_per_level;
        position += quadrant(rx, ry, level) as f64 * weight;
    }

    clamp_membership(position)
}

#[must_use]
pub fn peano_curve(x: f64, y: f64, depth: u32) -> f32 {
    curve_position(x, y, depth, 3, |rx, ry, _| ry * 3 + rx)
}

/// Peano ordering reversed on every odd level.
#[must_use]
pub fn peano_meander_curve(x: f64, y: f64, depth: u32) -> f32 {
    curve_position(x, y, depth, 3, |rx, ry, level| {
        let quadrant = ry * 3 + rx;
        if level % 2 == 1 { (9 - quadrant) % 9 } else { quadrant }
    })
}

#[must_use]
pub fn hilbert_curve(x: f64, y: f64, depth: u32) -> f32 {
    curve_position(x, y, depth, 2, |rx, ry, _| (rx ^ ry) * 2 + rx)
}

/// Column-major quadrants, mirrored on every odd level.
#[must_use]
pub fn hilbert_variant(x: f64, y: f64, depth: u32) -> f32 {
    curve_position(x, y, depth, 2, |rx, ry, level| {
        let quadrant = rx * 2 + ry;
        if level % 2 == 1 { (3 - quadrant) % 4 } else { quadrant }
    })
}

/// Hilbert ordering rotated by one quadrant on every even level.
#[must_use]
pub fn moore_curve(x: f64, y: f64, depth: u32) -> f32 {
    curve_position(x, y, depth, 2, |rx, ry, level| {
        let quadrant = (rx ^ ry) * 2 + rx;
        if level % 2 == 0 { (quadrant + 1) % 4 } else { quadrant }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hilbert_origin_is_start_of_curve() {
        assert_eq!(hilbert_curve(0.0, 0.0, 3), 0.0);
    }

    #[test]
    fn test_hilbert_quadrant_order_at_depth_one() {
        // q = 2 * (rx ^ ry) + rx
        assert_eq!(hilbert_curve(0.25, 0.25, 1), 0.0);
        assert_eq!(hilbert_curve(0.25, 0.75, 1), 0.5);
        assert_eq!(hilbert_curve(0.75, 0.75, 1), 0.25);
        assert_eq!(hilbert_curve(0.75, 0.25, 1), 0.75);
    }

    #[test]
    fn test_hilbert_nested_index() {
        // level 0 quadrant 3, level 1 quadrant 2: (3 * 4 + 2) / 16
        assert_eq!(hilbert_curve(0.6, 0.4, 2), 14.0 / 16.0);
    }

    #[test]
    fn test_peano_positions_stay_below_one() {
        for &(x, y) in &[(0.99, 0.99), (0.5, 0.5), (0.01, 0.7)] {
            for depth in 1..6 {
                let position = peano_curve(x, y, depth);
                assert!((0.0..1.0).contains(&position), "{position} at depth {depth}");
            }
        }
    }

    #[test]
    fn test_peano_last_cell_at_depth_one() {
        assert!((peano_curve(0.9, 0.9, 1) - 8.0 / 9.0).abs() < 1e-7);
    }

    #[test]
    fn test_peano_meander_reverses_odd_levels() {
        // level 0 keeps quadrant 0, level 1 maps quadrant 4 to 5
        let position = peano_meander_curve(0.15, 0.15, 2);
        assert!((position - 5.0 / 81.0).abs() < 1e-7);
        assert!((peano_curve(0.15, 0.15, 2) - 4.0 / 81.0).abs() < 1e-7);
    }

    #[test]
    fn test_moore_rotates_even_levels() {
        assert_eq!(moore_curve(0.25, 0.25, 1), 0.25);
        assert_eq!(moore_curve(0.75, 0.25, 1), 0.0);
    }

    #[test]
    fn test_hilbert_variant_mirrors_odd_levels() {
        assert_eq!(hilbert_variant(0.75, 0.25, 1), 0.5);
        // level 1 quadrant 0 becomes 3
        assert_eq!(hilbert_variant(0.1, 0.1, 2), 3.0 / 16.0);
    }

    #[test]
    fn test_upper_edge_is_clamped_into_range() {
        for classify in [peano_curve, peano_meander_curve, hilbert_curve, hilbert_variant, moore_curve]
        {
            let position = classify(1.0, 1.0, 4);
            assert!((0.0..=1.0).contains(&position));
        }
    }

    #[test]
    fn test_depth_zero_is_start_of_curve() {
        assert_eq!(peano_curve(0.7, 0.2, 0), 0.0);
        assert_eq!(moore_curve(0.7, 0.2, 0), 0.0);
    }

    #[test]
    fn test_outside_unit_square_is_zero() {
        assert_eq!(hilbert_curve(-0.1, 0.5, 3), 0.0);
        assert_eq!(peano_meander_curve(0.5, 1.1, 3), 0.0);
    }
}
