use crate::core::data::pixel_rect::PixelRect;
use std::num::NonZeroU32;

/// Number of row bands to split `pixel_rect` into, given at most `max_bands`.
///
/// Every band is at least two rows tall so it is itself a valid `PixelRect`.
pub fn calculate_bands_in_pixel_rect(max_bands: NonZeroU32, pixel_rect: PixelRect) -> u32 {
    let max_by_height = (pixel_rect.height() / 2).max(1);

    max_bands.get().min(max_by_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(max_bands: u32, width: u32, height: u32) -> u32 {
        calculate_bands_in_pixel_rect(
            NonZeroU32::new(max_bands).unwrap(),
            PixelRect::with_size(width, height).unwrap(),
        )
    }

    #[test]
    fn test_height_2_gives_1_band() {
        assert_eq!(bands(10, 6, 2), 1);
    }

    #[test]
    fn test_height_3_gives_1_band() {
        assert_eq!(bands(10, 6, 3), 1);
    }

    #[test]
    fn test_bands_do_not_exceed_half_pixel_rect_height() {
        assert_eq!(bands(10, 6, 6), 3);
        assert_eq!(bands(10, 6, 7), 3);
        assert_eq!(bands(3, 6, 6), 3);
    }

    #[test]
    fn test_max_bands_is_respected_on_tall_rects() {
        assert_eq!(bands(4, 900, 780), 4);
        assert_eq!(bands(1, 900, 780), 1);
    }
}
