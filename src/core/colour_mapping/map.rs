use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Colour map over membership values in `[0,1]`.
pub trait FractalColourMap: ColourMap<f32> + Send + Sync {
    fn kind(&self) -> ColourMapKinds;
}

impl ColourMap<f32> for Box<dyn FractalColourMap> {
    fn map(&self, value: f32) -> Result<Colour, Box<dyn Error>> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
