pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod rasterize_curve;
