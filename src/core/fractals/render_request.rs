use crate::core::colour_mapping::map::FractalColourMap;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::classifiers::algorithm::ClassifierAlgorithm;
use crate::core::fractals::curves::curve_kinds::CurveKinds;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Everything needed to produce one frame, resolved from a
/// [`FractalConfig`](crate::core::fractals::fractal_config::FractalConfig).
pub enum RenderRequest {
    Mandelbrot {
        colour_map: Box<dyn FractalColourMap>,
        algorithm: MandelbrotAlgorithm,
    },
    Classifier {
        colour_map: Box<dyn FractalColourMap>,
        algorithm: ClassifierAlgorithm,
    },
    /// Curves are drawn in the colour the map gives full membership.
    Curve {
        colour_map: Box<dyn FractalColourMap>,
        kind: CurveKinds,
        iterations: u32,
        viewport: Viewport,
        pixel_rect: PixelRect,
    },
}

impl RenderRequest {
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        match self {
            Self::Mandelbrot { algorithm, .. } => algorithm.pixel_rect(),
            Self::Classifier { algorithm, .. } => algorithm.pixel_rect(),
            Self::Curve { pixel_rect, .. } => *pixel_rect,
        }
    }
}

impl PartialEq for RenderRequest {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Mandelbrot { colour_map: cmap1, algorithm: alg1 },
                Self::Mandelbrot { colour_map: cmap2, algorithm: alg2 },
            ) => cmap1.kind() == cmap2.kind() && alg1 == alg2,
            (
                Self::Classifier { colour_map: cmap1, algorithm: alg1 },
                Self::Classifier { colour_map: cmap2, algorithm: alg2 },
            ) => cmap1.kind() == cmap2.kind() && alg1 == alg2,
            (
                Self::Curve {
                    colour_map: cmap1,
                    kind: kind1,
                    iterations: iterations1,
                    viewport: viewport1,
                    pixel_rect: rect1,
                },
                Self::Curve {
                    colour_map: cmap2,
                    kind: kind2,
                    iterations: iterations2,
                    viewport: viewport2,
                    pixel_rect: rect2,
                },
            ) => {
                cmap1.kind() == cmap2.kind()
                    && kind1 == kind2
                    && iterations1 == iterations2
                    && viewport1 == viewport2
                    && rect1 == rect2
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for RenderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot { colour_map, algorithm } => f
                .debug_struct("Mandelbrot")
                .field("colour_map", &colour_map.kind())
                .field("algorithm", algorithm)
                .finish(),
            Self::Classifier { colour_map, algorithm } => f
                .debug_struct("Classifier")
                .field("colour_map", &colour_map.kind())
                .field("algorithm", algorithm)
                .finish(),
            Self::Curve {
                colour_map,
                kind,
                iterations,
                viewport,
                pixel_rect,
            } => f
                .debug_struct("Curve")
                .field("colour_map", &colour_map.kind())
                .field("kind", kind)
                .field("iterations", iterations)
                .field("viewport", viewport)
                .field("pixel_rect", pixel_rect)
                .finish(),
        }
    }
}
