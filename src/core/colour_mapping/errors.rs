use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourMapError {
    ValueOutOfRange { value: f32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { value } => {
                write!(f, "membership value {} is outside [0, 1]", value)
            }
        }
    }
}

impl Error for ColourMapError {}

/// Rejects NaN along with anything outside `[0,1]`.
pub(crate) fn check_membership(value: f32) -> Result<f32, ColourMapError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColourMapError::ValueOutOfRange { value })
    }
}
