use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::FractalColourMap;
use crate::core::colour_mapping::maps::{fire_gradient::FireGradient, tint::Tint};
use crate::core::data::colour::Colour;

/// `tint` only affects [`ColourMapKinds::Tint`].
#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds, tint: Colour) -> Box<dyn FractalColourMap> {
    match kind {
        ColourMapKinds::Tint => Box::new(Tint::new(tint)),
        ColourMapKinds::FireGradient => Box::new(FireGradient::new()),
    }
}
