use crate::core::data::viewport::Viewport;
use crate::core::fractals::classifiers::classifier_kinds::ClassifierKinds;
use crate::core::fractals::curves::curve_kinds::CurveKinds;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How a fractal is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalFamily {
    Escape,
    Classifier(ClassifierKinds),
    Curve(CurveKinds),
}

impl FractalFamily {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Escape => "escape-time",
            Self::Classifier(_) => "classifier",
            Self::Curve(_) => "curve",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Classifier(ClassifierKinds),
    Curve(CurveKinds),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFractalKindError {
    UnknownSlug(String),
}

impl fmt::Display for ParseFractalKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSlug(slug) => write!(f, "unknown fractal: {}", slug),
        }
    }
}

impl Error for ParseFractalKindError {}

const fn bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64, zoom: f64) -> [f64; 5] {
    [x_min, x_max, y_min, y_max, zoom]
}

const UNIT_SQUARE_VIEW: [f64; 5] = bounds(0.0, 1.0, 0.0, 1.0, 1.0);
const HEXAGONAL_VIEW: [f64; 5] = bounds(0.0, 1.0, -0.5, 1.5, 1.0);
const CENTRED_VIEW: [f64; 5] = bounds(-1.0, 1.0, -1.0, 1.0, 1.0);
const TRIANGLE_SEED_VIEW: [f64; 5] = bounds(-0.5, 1.5, -0.5, 1.0, 1.0);
const SQUARE_SEED_VIEW: [f64; 5] = bounds(-0.5, 1.5, -0.5, 1.5, 1.0);

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Classifier(ClassifierKinds::SierpinskiCarpet),
        Self::Classifier(ClassifierKinds::CantorDust),
        Self::Classifier(ClassifierKinds::BoxFractal),
        Self::Classifier(ClassifierKinds::CantorTernaryGrid),
        Self::Classifier(ClassifierKinds::CantorMaze),
        Self::Classifier(ClassifierKinds::VicsekFractal),
        Self::Classifier(ClassifierKinds::CantorSquare),
        Self::Classifier(ClassifierKinds::CantorCloud),
        Self::Classifier(ClassifierKinds::SierpinskiTriangle),
        Self::Classifier(ClassifierKinds::SierpinskiSquare),
        Self::Classifier(ClassifierKinds::PeanoCurve),
        Self::Classifier(ClassifierKinds::PeanoMeanderCurve),
        Self::Classifier(ClassifierKinds::HilbertCurve),
        Self::Classifier(ClassifierKinds::HilbertVariant),
        Self::Classifier(ClassifierKinds::MooreCurve),
        Self::Classifier(ClassifierKinds::SierpinskiHexagon),
        Self::Classifier(ClassifierKinds::Hexaflake),
        Self::Classifier(ClassifierKinds::SierpinskiPentagon),
        Self::Curve(CurveKinds::KochCurve),
        Self::Curve(CurveKinds::KochSnowflake),
        Self::Curve(CurveKinds::KochAntiSnowflake),
        Self::Curve(CurveKinds::DragonCurve),
        Self::Curve(CurveKinds::LevyCurve),
        Self::Curve(CurveKinds::HeighwayDragonVariant),
        Self::Curve(CurveKinds::TerdragonCurve),
        Self::Curve(CurveKinds::DekkingCurve),
        Self::Curve(CurveKinds::GosperCurve),
        Self::Curve(CurveKinds::GosperIsland),
        Self::Curve(CurveKinds::CesaroCurve),
        Self::Curve(CurveKinds::SierpinskiArrowhead),
        Self::Curve(CurveKinds::QuadricKoch),
        Self::Curve(CurveKinds::KochIsland),
        Self::Curve(CurveKinds::MinkowskiSausage),
        Self::Curve(CurveKinds::KochQuadratic),
        Self::Curve(CurveKinds::SnowflakeSweep),
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Classifier(kind) => kind.display_name(),
            Self::Curve(kind) => kind.display_name(),
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Classifier(kind) => kind.slug(),
            Self::Curve(kind) => kind.slug(),
        }
    }

    #[must_use]
    pub const fn family(self) -> FractalFamily {
        match self {
            Self::Mandelbrot => FractalFamily::Escape,
            Self::Classifier(kind) => FractalFamily::Classifier(kind),
            Self::Curve(kind) => FractalFamily::Curve(kind),
        }
    }

    /// Window a fractal opens at, framing its whole attractor.
    #[must_use]
    pub fn default_viewport(self) -> Viewport {
        Viewport::from_trusted_bounds(self.default_bounds())
    }

    const fn default_bounds(self) -> [f64; 5] {
        use ClassifierKinds as C;
        use CurveKinds as K;

        match self {
            Self::Mandelbrot => bounds(-2.0, 1.0, -1.5, 1.5, 1.0),
            Self::Classifier(kind) => match kind {
                C::SierpinskiCarpet => bounds(0.0, 0.6, 0.0, 0.5, 0.5),
                C::CantorDust => bounds(0.0, 0.1, 0.0, 0.1, 0.1),
                C::SierpinskiHexagon | C::Hexaflake | C::SierpinskiPentagon => HEXAGONAL_VIEW,
                _ => UNIT_SQUARE_VIEW,
            },
            Self::Curve(kind) => match kind {
                K::KochCurve => bounds(0.0, 1.0, -0.5, 0.5, 1.0),
                K::KochSnowflake
                | K::KochAntiSnowflake
                | K::SierpinskiArrowhead
                | K::MinkowskiSausage
                | K::GosperIsland
                | K::KochQuadratic => TRIANGLE_SEED_VIEW,
                K::QuadricKoch | K::KochIsland | K::SnowflakeSweep => SQUARE_SEED_VIEW,
                K::DragonCurve
                | K::LevyCurve
                | K::HeighwayDragonVariant
                | K::TerdragonCurve
                | K::DekkingCurve
                | K::GosperCurve
                | K::CesaroCurve => CENTRED_VIEW,
            },
        }
    }
}

impl FromStr for FractalKinds {
    type Err = ParseFractalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == slug)
            .ok_or(ParseFractalKindError::UnknownSlug(slug))
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}
