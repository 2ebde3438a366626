use std::error::Error;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::evaluation_strategy::EvaluationStrategy;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::rasterize_curve::rasterize_curve::rasterize_curve;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::fractal_config::FractalConfig;
use crate::core::fractals::render_request::RenderRequest;

/// Renders frames from a [`FractalConfig`] and hands the latest one to a
/// file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    strategy: EvaluationStrategy,
    buffer: Option<PixelBuffer>,
    last_duration: Option<Duration>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self::with_strategy(presenter, EvaluationStrategy::default())
    }

    pub fn with_strategy(presenter: P, strategy: EvaluationStrategy) -> Self {
        Self {
            presenter,
            strategy,
            buffer: None,
            last_duration: None,
        }
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Wall time of the most recent [`render`](Self::render).
    pub fn last_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    pub fn render(
        &mut self,
        config: &FractalConfig,
        pixel_rect: PixelRect,
    ) -> Result<&PixelBuffer, Box<dyn Error>> {
        log::info!(
            "Rendering {} at {}x{}",
            config.kind,
            pixel_rect.width(),
            pixel_rect.height()
        );
        log::debug!(
            "viewport: {:?}, iterations: {}, colour map: {}, strategy: {}",
            config.viewport,
            config.iterations,
            config.colour_map_kind,
            self.strategy
        );

        let request = config.build_render_request(pixel_rect);
        let start = Instant::now();
        let buffer = self.execute(request)?;
        let duration = start.elapsed();

        log::info!("Duration: {:?}", duration);

        self.last_duration = Some(duration);
        Ok(self.buffer.insert(buffer))
    }

    fn execute(&self, request: RenderRequest) -> Result<PixelBuffer, Box<dyn Error>> {
        let buffer = match request {
            RenderRequest::Mandelbrot {
                colour_map,
                algorithm,
            } => {
                let pixel_rect = algorithm.pixel_rect();
                let values = self.strategy.evaluate(pixel_rect, &algorithm)?;
                generate_pixel_buffer(values, &colour_map, pixel_rect)?
            }
            RenderRequest::Classifier {
                colour_map,
                algorithm,
            } => {
                let pixel_rect = algorithm.pixel_rect();
                let values = self.strategy.evaluate(pixel_rect, &algorithm)?;
                generate_pixel_buffer(values, &colour_map, pixel_rect)?
            }
            RenderRequest::Curve {
                colour_map,
                kind,
                iterations,
                viewport,
                pixel_rect,
            } => {
                let points = kind.generate(iterations);
                log::debug!("{} generated {} points", kind, points.len());

                let colour = colour_map.map(1.0)?;
                rasterize_curve(&points, viewport, pixel_rect, colour)?
            }
        };

        Ok(buffer)
    }

    /// Writes the latest frame. Does nothing if nothing has been rendered
    /// or loaded yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), P::Failure> {
        match &self.buffer {
            Some(buffer) => {
                self.presenter.present(buffer, &filepath)?;
                log::info!("Saved to {}", filepath.as_ref().display());
            }
            None => log::warn!("nothing rendered yet, skipping write"),
        }

        Ok(())
    }

    /// Replaces the latest frame with one read back from disk.
    pub fn load(&mut self, filepath: impl AsRef<Path>) -> Result<&PixelBuffer, P::Failure> {
        let buffer = self.presenter.load(&filepath)?;

        log::info!(
            "Loaded {}x{} frame from {}",
            buffer.pixel_rect().width(),
            buffer.pixel_rect().height(),
            filepath.as_ref().display()
        );

        Ok(self.buffer.insert(buffer))
    }
}
