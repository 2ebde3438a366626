pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::render::evaluation_strategy::EvaluationStrategy;
pub use controllers::render::render_controller::RenderController;
pub use crate::core::colour_mapping::kinds::ColourMapKinds;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::classifiers::classifier_kinds::ClassifierKinds;
pub use crate::core::fractals::curves::curve_kinds::CurveKinds;
pub use crate::core::fractals::fractal_config::FractalConfig;
pub use crate::core::fractals::fractal_kinds::{FractalFamily, FractalKinds};
pub use crate::core::fractals::mandelbrot::escape_time::mandelbrot;
pub use presenters::file::ppm::PpmFilePresenter;
