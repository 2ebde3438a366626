use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::check_membership;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::FractalColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Scales a single tint by the membership value, so a white tint gives
/// greyscale.
#[derive(Debug)]
pub struct Tint {
    colour: Colour,
}

impl ColourMap<f32> for Tint {
    fn map(&self, value: f32) -> Result<Colour, Box<dyn Error>> {
        let value = check_membership(value)?;

        Ok(self.colour.scaled(value))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl FractalColourMap for Tint {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::Tint
    }
}

impl Tint {
    #[must_use]
    pub fn new(colour: Colour) -> Self {
        Self { colour }
    }
}
