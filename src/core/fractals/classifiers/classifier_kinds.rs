use crate::core::fractals::classifiers::grid::{
    box_fractal, cantor_cloud, cantor_dust, cantor_maze, cantor_square, cantor_ternary_grid,
    sierpinski_carpet, sierpinski_square, sierpinski_triangle, vicsek_fractal,
};
use crate::core::fractals::classifiers::polygonal::{
    hexaflake, sierpinski_hexagon, sierpinski_pentagon,
};
use crate::core::fractals::classifiers::space_filling::{
    hilbert_curve, hilbert_variant, moore_curve, peano_curve, peano_meander_curve,
};
use rand::RngCore;

pub type ClassifierFn = fn(f64, f64, u32) -> f32;
pub type ProbabilisticClassifierFn = fn(f64, f64, u32, &mut dyn RngCore) -> f32;

/// A classifier function value, tagged by whether it needs randomness.
#[derive(Clone, Copy)]
pub enum Classifier {
    Deterministic(ClassifierFn),
    Probabilistic(ProbabilisticClassifierFn),
}

impl Classifier {
    /// `rng` is only drawn from by probabilistic classifiers.
    pub fn classify(&self, x: f64, y: f64, depth: u32, rng: &mut dyn RngCore) -> f32 {
        match self {
            Self::Deterministic(classify) => classify(x, y, depth),
            Self::Probabilistic(classify) => classify(x, y, depth, rng),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierKinds {
    SierpinskiCarpet,
    CantorDust,
    BoxFractal,
    CantorTernaryGrid,
    CantorMaze,
    VicsekFractal,
    CantorSquare,
    CantorCloud,
    SierpinskiTriangle,
    SierpinskiSquare,
    PeanoCurve,
    PeanoMeanderCurve,
    HilbertCurve,
    HilbertVariant,
    MooreCurve,
    SierpinskiHexagon,
    Hexaflake,
    SierpinskiPentagon,
}

impl ClassifierKinds {
    pub const ALL: &'static [Self] = &[
        Self::SierpinskiCarpet,
        Self::CantorDust,
        Self::BoxFractal,
        Self::CantorTernaryGrid,
        Self::CantorMaze,
        Self::VicsekFractal,
        Self::CantorSquare,
        Self::CantorCloud,
        Self::SierpinskiTriangle,
        Self::SierpinskiSquare,
        Self::PeanoCurve,
        Self::PeanoMeanderCurve,
        Self::HilbertCurve,
        Self::HilbertVariant,
        Self::MooreCurve,
        Self::SierpinskiHexagon,
        Self::Hexaflake,
        Self::SierpinskiPentagon,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SierpinskiCarpet => "Sierpinski carpet",
            Self::CantorDust => "Cantor dust",
            Self::BoxFractal => "Box fractal",
            Self::CantorTernaryGrid => "Cantor ternary grid",
            Self::CantorMaze => "Cantor maze",
            Self::VicsekFractal => "Vicsek fractal",
            Self::CantorSquare => "Cantor square",
            Self::CantorCloud => "Cantor cloud",
            Self::SierpinskiTriangle => "Sierpinski triangle",
            Self::SierpinskiSquare => "Sierpinski square",
            Self::PeanoCurve => "Peano curve",
            Self::PeanoMeanderCurve => "Peano meander curve",
            Self::HilbertCurve => "Hilbert curve",
            Self::HilbertVariant => "Hilbert variant",
            Self::MooreCurve => "Moore curve",
            Self::SierpinskiHexagon => "Sierpinski hexagon",
            Self::Hexaflake => "Hexaflake",
            Self::SierpinskiPentagon => "Sierpinski pentagon",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::SierpinskiCarpet => "sierpinski-carpet",
            Self::CantorDust => "cantor-dust",
            Self::BoxFractal => "box-fractal",
            Self::CantorTernaryGrid => "cantor-ternary-grid",
            Self::CantorMaze => "cantor-maze",
            Self::VicsekFractal => "vicsek-fractal",
            Self::CantorSquare => "cantor-square",
            Self::CantorCloud => "cantor-cloud",
            Self::SierpinskiTriangle => "sierpinski-triangle",
            Self::SierpinskiSquare => "sierpinski-square",
            Self::PeanoCurve => "peano-curve",
            Self::PeanoMeanderCurve => "peano-meander-curve",
            Self::HilbertCurve => "hilbert-curve",
            Self::HilbertVariant => "hilbert-variant",
            Self::MooreCurve => "moore-curve",
            Self::SierpinskiHexagon => "sierpinski-hexagon",
            Self::Hexaflake => "hexaflake",
            Self::SierpinskiPentagon => "sierpinski-pentagon",
        }
    }

    #[must_use]
    pub fn classifier(self) -> Classifier {
        use Classifier::{Deterministic, Probabilistic};

        match self {
            Self::SierpinskiCarpet => Deterministic(sierpinski_carpet),
            Self::CantorDust => Deterministic(cantor_dust),
            Self::BoxFractal => Deterministic(box_fractal),
            Self::CantorTernaryGrid => Deterministic(cantor_ternary_grid),
            Self::CantorMaze => Deterministic(cantor_maze),
            Self::VicsekFractal => Deterministic(vicsek_fractal),
            Self::CantorSquare => Deterministic(cantor_square),
            Self::CantorCloud => Probabilistic(cantor_cloud),
            Self::SierpinskiTriangle => Deterministic(sierpinski_triangle),
            Self::SierpinskiSquare => Deterministic(sierpinski_square),
            Self::PeanoCurve => Deterministic(peano_curve),
            Self::PeanoMeanderCurve => Deterministic(peano_meander_curve),
            Self::HilbertCurve => Deterministic(hilbert_curve),
            Self::HilbertVariant => Deterministic(hilbert_variant),
            Self::MooreCurve => Deterministic(moore_curve),
            Self::SierpinskiHexagon => Deterministic(sierpinski_hexagon),
            Self::Hexaflake => Deterministic(hexaflake),
            Self::SierpinskiPentagon => Deterministic(sierpinski_pentagon),
        }
    }

    #[must_use]
    pub fn is_deterministic(self) -> bool {
        matches!(self.classifier(), Classifier::Deterministic(_))
    }

    /// Returns the curve position rather than membership for space-filling
    /// curves.
    #[must_use]
    pub const fn is_space_filling(self) -> bool {
        matches!(
            self,
            Self::PeanoCurve
                | Self::PeanoMeanderCurve
                | Self::HilbertCurve
                | Self::HilbertVariant
                | Self::MooreCurve
        )
    }

    pub fn classify(self, x: f64, y: f64, depth: u32, rng: &mut dyn RngCore) -> f32 {
        self.classifier().classify(x, y, depth, rng)
    }
}

impl std::fmt::Display for ClassifierKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
