//! Area fractals built by removing cells from a regular grid over the unit
//! square.

use crate::core::fractals::classifiers::subdivision::{OUTSIDE, in_unit_square, walk_grid};
use rand::{Rng, RngCore};

const KEEP: f64 = 1.0;
const REMOVE: f64 = 0.0;
const CLOUD_FADE: f64 = 0.5;

fn keep_if(condition: bool) -> f64 {
    if condition { KEEP } else { REMOVE }
}

fn is_corner(index: u32) -> bool {
    index == 0 || index == 2
}

/// Removes the centre of every 3x3 block.
#[must_use]
pub fn sierpinski_carpet(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| keep_if(!(xi == 1 && yi == 1)))
}

/// Removes the middle band along both axes.
#[must_use]
pub fn cantor_dust(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| keep_if(xi != 1 && yi != 1))
}

/// Keeps only the four corner cells.
#[must_use]
pub fn box_fractal(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| keep_if(is_corner(xi) && is_corner(yi)))
}

/// Same cells as [`sierpinski_carpet`]. Both names exist in the catalog.
#[must_use]
pub fn cantor_ternary_grid(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| keep_if(!(xi == 1 && yi == 1)))
}

/// Removes the middle row and column but keeps the centre cell.
#[must_use]
pub fn cantor_maze(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| {
        let on_cross = xi == 1 || yi == 1;
        let is_centre = xi == 1 && yi == 1;
        keep_if(!on_cross || is_centre)
    })
}

/// Keeps the centre cross: the middle row and the middle column.
#[must_use]
pub fn vicsek_fractal(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| keep_if(xi == 1 || yi == 1))
}

#[must_use]
pub fn cantor_square(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| keep_if(is_corner(xi) && is_corner(yi)))
}

/// Carpet whose cross cells fade at random.
///
/// The centre cell is removed. A cell on the middle cross halves the density
/// with probability one half, drawn from `rng` only when the point lands on
/// the cross.
pub fn cantor_cloud(x: f64, y: f64, depth: u32, rng: &mut dyn RngCore) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 3, |xi, yi| {
        if xi == 1 && yi == 1 {
            REMOVE
        } else if (xi == 1 || yi == 1) && rng.gen_bool(0.5) {
            CLOUD_FADE
        } else {
            KEEP
        }
    })
}

/// Right-angled Sierpiński triangle below the diagonal `y = 1 - x`.
#[must_use]
pub fn sierpinski_triangle(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) || y > 1.0 - x {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 2, |xi, yi| keep_if(xi + yi < 2))
}

/// 5x5 variant that only removes the centre cell of each block.
#[must_use]
pub fn sierpinski_square(x: f64, y: f64, depth: u32) -> f32 {
    if !in_unit_square(x, y) {
        return OUTSIDE;
    }

    walk_grid(x, y, depth, 5, |xi, yi| keep_if(!(xi == 2 && yi == 2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_carpet_centre_is_removed() {
        assert_eq!(sierpinski_carpet(0.5, 0.5, 1), 0.0);
    }

    #[test]
    fn test_carpet_corner_survives_every_level() {
        // 0.01 has ternary digits 0,0,0,0,2 so it never lands in a centre cell
        assert_eq!(sierpinski_carpet(0.01, 0.01, 5), 1.0);
    }

    #[test]
    fn test_carpet_diagonal_point_hits_a_nested_centre() {
        // 0.05 has ternary digits 0,0,1,... on both axes
        assert_eq!(sierpinski_carpet(0.05, 0.05, 2), 1.0);
        assert_eq!(sierpinski_carpet(0.05, 0.05, 5), 0.0);
    }

    #[test]
    fn test_carpet_depth_zero_is_full_square() {
        assert_eq!(sierpinski_carpet(0.5, 0.5, 0), 1.0);
    }

    #[test]
    fn test_cantor_dust_middle_band() {
        assert_eq!(cantor_dust(0.5, 0.5, 1), 0.0);
        assert_eq!(cantor_dust(0.5, 0.1, 1), 0.0);
        assert_eq!(cantor_dust(0.1, 0.9, 1), 1.0);
    }

    #[test]
    fn test_box_fractal_keeps_corners_only() {
        assert_eq!(box_fractal(0.1, 0.1, 1), 1.0);
        assert_eq!(box_fractal(0.9, 0.1, 1), 1.0);
        assert_eq!(box_fractal(0.5, 0.1, 1), 0.0);
        assert_eq!(box_fractal(0.5, 0.5, 1), 0.0);
    }

    #[test]
    fn test_cantor_maze_keeps_centre_but_not_arms() {
        assert_eq!(cantor_maze(0.5, 0.5, 1), 1.0);
        assert_eq!(cantor_maze(0.5, 0.1, 1), 0.0);
        assert_eq!(cantor_maze(0.1, 0.1, 1), 1.0);
    }

    #[test]
    fn test_vicsek_keeps_cross_only() {
        assert_eq!(vicsek_fractal(0.5, 0.5, 1), 1.0);
        assert_eq!(vicsek_fractal(0.5, 0.9, 1), 1.0);
        assert_eq!(vicsek_fractal(0.1, 0.1, 1), 0.0);
    }

    #[test]
    fn test_cantor_square_matches_box_fractal() {
        for &(x, y) in &[(0.1, 0.1), (0.5, 0.1), (0.95, 0.75), (0.2, 0.7)] {
            assert_eq!(cantor_square(x, y, 3), box_fractal(x, y, 3));
        }
    }

    #[test]
    fn test_cantor_ternary_grid_matches_carpet() {
        for &(x, y) in &[(0.5, 0.5), (0.05, 0.05), (0.4, 0.7), (0.01, 0.99)] {
            assert_eq!(cantor_ternary_grid(x, y, 4), sierpinski_carpet(x, y, 4));
        }
    }

    #[test]
    fn test_cantor_cloud_centre_is_removed_regardless_of_rng() {
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(cantor_cloud(0.5, 0.5, 1, &mut rng), 0.0);
    }

    #[test]
    fn test_cantor_cloud_fades_on_cross_when_rng_says_so() {
        // a zero draw is below every threshold, u64::MAX is above them
        let mut always = StepRng::new(0, 0);
        let mut never = StepRng::new(u64::MAX, 0);

        assert_eq!(cantor_cloud(0.5, 0.1, 1, &mut always), 0.5);
        assert_eq!(cantor_cloud(0.5, 0.1, 1, &mut never), 1.0);
    }

    #[test]
    fn test_cantor_cloud_off_cross_does_not_draw() {
        let mut rng = StepRng::new(0, 0);

        assert_eq!(cantor_cloud(0.1, 0.1, 1, &mut rng), 1.0);
    }

    #[test]
    fn test_cantor_cloud_is_reproducible_for_a_seed() {
        let first = cantor_cloud(0.4, 0.15, 6, &mut SmallRng::seed_from_u64(42));
        let second = cantor_cloud(0.4, 0.15, 6, &mut SmallRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_sierpinski_triangle_domain_is_lower_left_half() {
        assert_eq!(sierpinski_triangle(0.1, 0.1, 0), 1.0);
        assert_eq!(sierpinski_triangle(0.9, 0.9, 0), 0.0);
    }

    #[test]
    fn test_sierpinski_triangle_removes_upper_right_cell() {
        assert_eq!(sierpinski_triangle(0.1, 0.1, 1), 1.0);
        assert_eq!(sierpinski_triangle(0.6, 0.2, 1), 1.0);
        // inside the domain but in the (1,1) cell after one rescale
        assert_eq!(sierpinski_triangle(0.4, 0.4, 2), 0.0);
    }

    #[test]
    fn test_sierpinski_square_removes_only_5x5_centre() {
        assert_eq!(sierpinski_square(0.5, 0.5, 1), 0.0);
        assert_eq!(sierpinski_square(0.5, 0.3, 1), 1.0);
        assert_eq!(sierpinski_square(0.1, 0.1, 1), 1.0);
    }
}
