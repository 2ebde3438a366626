use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::check_membership;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::FractalColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;

/// Black, red, orange, yellow, white ramp across `[0,1]`.
#[derive(Debug, Default)]
pub struct FireGradient {}

impl ColourMap<f32> for FireGradient {
    fn map(&self, value: f32) -> Result<Colour, Box<dyn Error>> {
        let t = f64::from(check_membership(value)?);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl FractalColourMap for FireGradient {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
