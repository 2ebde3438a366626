pub mod algorithm;
pub mod classifier_kinds;
pub mod grid;
pub mod polygonal;
pub mod space_filling;
pub(crate) mod subdivision;
