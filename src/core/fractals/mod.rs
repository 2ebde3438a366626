pub mod classifiers;
pub mod curves;
pub mod fractal_config;
pub mod fractal_kinds;
pub mod mandelbrot;
pub mod render_request;
