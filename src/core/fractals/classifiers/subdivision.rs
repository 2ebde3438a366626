/// Membership returned for any point outside a classifier's domain.
pub const OUTSIDE: f32 = 0.0;

#[must_use]
pub(crate) fn in_unit_square(x: f64, y: f64) -> bool {
    (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)
}

#[must_use]
pub(crate) fn clamp_membership(value: f64) -> f32 {
    if value.is_nan() {
        return OUTSIDE;
    }

    value.clamp(0.0, 1.0) as f32
}

/// Scales `coord` by `cells`, returning the sub-cell it falls into and
/// rewriting `coord` into that cell's local frame.
///
/// The cell index truncates, so a point on a divider belongs to the lower
/// cell. `coord == 1.0` yields index `cells` with a local coordinate of 0.
#[must_use]
pub(crate) fn subdivide(coord: &mut f64, cells: u32) -> u32 {
    let scaled = *coord * f64::from(cells);
    let index = scaled as u32;
    *coord = scaled - f64::from(index);
    index
}

/// Walks `depth` levels of a `cells` x `cells` grid over the unit square.
///
/// `factor` receives each level's `(xi, yi)` cell and returns the multiplier
/// for that level: `0.0` removes the point, `1.0` keeps it. The walk stops as
/// soon as the running product reaches zero.
pub(crate) fn walk_grid(
    mut x: f64,
    mut y: f64,
    depth: u32,
    cells: u32,
    mut factor: impl FnMut(u32, u32) -> f64,
) -> f32 {
    let mut value = 1.0;

    for _ in 0..depth {
        let xi = subdivide(&mut x, cells);
        let yi = subdivide(&mut y, cells);

        value *= factor(xi, yi);
        if value == 0.0 {
            return OUTSIDE;
        }
    }

    clamp_membership(value)
}
