pub mod curve_kinds;
pub mod dragon;
pub mod gosper;
pub mod koch;
pub mod quadratic;
pub mod refine;
