use crate::core::data::pixel_rect::PixelRect;
use crate::core::util::calculate_bands_in_pixel_rect::calculate_bands_in_pixel_rect;
use std::num::NonZeroU32;

pub fn calculate_threads_for_pixel_rect_banding(pixel_rect: PixelRect) -> u32 {
    let num_avail_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1) as u32;

    calculate_bands_in_pixel_rect(
        NonZeroU32::new(num_avail_threads).unwrap_or(NonZeroU32::MIN),
        pixel_rect,
    )
}
