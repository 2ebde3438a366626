pub mod calculate_bands_in_pixel_rect;
pub mod calculate_threads_for_pixel_rect_banding;
pub mod pixel_to_plane_coords;
