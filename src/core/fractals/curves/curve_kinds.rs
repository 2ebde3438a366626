use crate::core::data::complex::Complex;
use crate::core::fractals::curves::dragon::{
    DEKKING_MOTIF, DRAGON_MOTIF, TERDRAGON_MOTIF, dekking_curve, dragon_curve,
    heighway_dragon_variant, levy_curve, terdragon_curve,
};
use crate::core::fractals::curves::gosper::{
    ARROWHEAD_MOTIF, CESARO_MOTIF, GOSPER_MOTIF, cesaro_curve, gosper_curve, gosper_island,
    sierpinski_arrowhead,
};
use crate::core::fractals::curves::koch::{
    KOCH_MOTIF, koch_anti_snowflake, koch_curve, koch_snowflake,
};
use crate::core::fractals::curves::quadratic::{
    KOCH_ISLAND_MOTIF, MINKOWSKI_MOTIF, QUADRIC_KOCH_MOTIF, SNOWFLAKE_SWEEP_MOTIF, koch_island,
    koch_quadratic, minkowski_sausage, quadric_koch, snowflake_sweep,
};
use crate::core::fractals::curves::refine::{
    Motif, UNIT_SEGMENT, UNIT_SQUARE, UNIT_TRIANGLE, refined_len,
};

pub type CurveGeneratorFn = fn(u32) -> Vec<Complex>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKinds {
    KochCurve,
    KochSnowflake,
    KochAntiSnowflake,
    DragonCurve,
    LevyCurve,
    HeighwayDragonVariant,
    TerdragonCurve,
    DekkingCurve,
    GosperCurve,
    GosperIsland,
    CesaroCurve,
    SierpinskiArrowhead,
    QuadricKoch,
    KochIsland,
    MinkowskiSausage,
    KochQuadratic,
    SnowflakeSweep,
}

impl CurveKinds {
    pub const ALL: &'static [Self] = &[
        Self::KochCurve,
        Self::KochSnowflake,
        Self::KochAntiSnowflake,
        Self::DragonCurve,
        Self::LevyCurve,
        Self::HeighwayDragonVariant,
        Self::TerdragonCurve,
        Self::DekkingCurve,
        Self::GosperCurve,
        Self::GosperIsland,
        Self::CesaroCurve,
        Self::SierpinskiArrowhead,
        Self::QuadricKoch,
        Self::KochIsland,
        Self::MinkowskiSausage,
        Self::KochQuadratic,
        Self::SnowflakeSweep,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::KochCurve => "Koch curve",
            Self::KochSnowflake => "Koch snowflake",
            Self::KochAntiSnowflake => "Koch anti-snowflake",
            Self::DragonCurve => "Dragon curve",
            Self::LevyCurve => "Levy C curve",
            Self::HeighwayDragonVariant => "Heighway dragon variant",
            Self::TerdragonCurve => "Terdragon",
            Self::DekkingCurve => "Dekking curve",
            Self::GosperCurve => "Gosper curve",
            Self::GosperIsland => "Gosper island",
            Self::CesaroCurve => "Cesaro curve",
            Self::SierpinskiArrowhead => "Sierpinski arrowhead",
            Self::QuadricKoch => "Quadric Koch",
            Self::KochIsland => "Koch island",
            Self::MinkowskiSausage => "Minkowski sausage",
            Self::KochQuadratic => "Quadratic Koch curve",
            Self::SnowflakeSweep => "Snowflake sweep",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::KochCurve => "koch-curve",
            Self::KochSnowflake => "koch-snowflake",
            Self::KochAntiSnowflake => "koch-anti-snowflake",
            Self::DragonCurve => "dragon-curve",
            Self::LevyCurve => "levy-curve",
            Self::HeighwayDragonVariant => "heighway-dragon-variant",
            Self::TerdragonCurve => "terdragon-curve",
            Self::DekkingCurve => "dekking-curve",
            Self::GosperCurve => "gosper-curve",
            Self::GosperIsland => "gosper-island",
            Self::CesaroCurve => "cesaro-curve",
            Self::SierpinskiArrowhead => "sierpinski-arrowhead",
            Self::QuadricKoch => "quadric-koch",
            Self::KochIsland => "koch-island",
            Self::MinkowskiSausage => "minkowski-sausage",
            Self::KochQuadratic => "koch-quadratic",
            Self::SnowflakeSweep => "snowflake-sweep",
        }
    }

    #[must_use]
    pub fn generator(self) -> CurveGeneratorFn {
        match self {
            Self::KochCurve => koch_curve,
            Self::KochSnowflake => koch_snowflake,
            Self::KochAntiSnowflake => koch_anti_snowflake,
            Self::DragonCurve => dragon_curve,
            Self::LevyCurve => levy_curve,
            Self::HeighwayDragonVariant => heighway_dragon_variant,
            Self::TerdragonCurve => terdragon_curve,
            Self::DekkingCurve => dekking_curve,
            Self::GosperCurve => gosper_curve,
            Self::GosperIsland => gosper_island,
            Self::CesaroCurve => cesaro_curve,
            Self::SierpinskiArrowhead => sierpinski_arrowhead,
            Self::QuadricKoch => quadric_koch,
            Self::KochIsland => koch_island,
            Self::MinkowskiSausage => minkowski_sausage,
            Self::KochQuadratic => koch_quadratic,
            Self::SnowflakeSweep => snowflake_sweep,
        }
    }

    #[must_use]
    pub fn generate(self, iterations: u32) -> Vec<Complex> {
        self.generator()(iterations)
    }

    #[must_use]
    pub const fn seed(self) -> &'static [Complex] {
        match self {
            Self::KochSnowflake | Self::KochAntiSnowflake | Self::GosperIsland => UNIT_TRIANGLE,
            Self::QuadricKoch | Self::KochIsland | Self::SnowflakeSweep => UNIT_SQUARE,
            _ => UNIT_SEGMENT,
        }
    }

    #[must_use]
    pub const fn motif(self) -> Motif {
        match self {
            Self::KochCurve | Self::KochSnowflake | Self::KochAntiSnowflake => KOCH_MOTIF,
            Self::DragonCurve | Self::LevyCurve | Self::HeighwayDragonVariant => DRAGON_MOTIF,
            Self::TerdragonCurve => TERDRAGON_MOTIF,
            Self::DekkingCurve => DEKKING_MOTIF,
            Self::GosperCurve | Self::GosperIsland => GOSPER_MOTIF,
            Self::CesaroCurve => CESARO_MOTIF,
            Self::SierpinskiArrowhead => ARROWHEAD_MOTIF,
            Self::QuadricKoch => QUADRIC_KOCH_MOTIF,
            Self::KochIsland => KOCH_ISLAND_MOTIF,
            Self::MinkowskiSausage | Self::KochQuadratic => MINKOWSKI_MOTIF,
            Self::SnowflakeSweep => SNOWFLAKE_SWEEP_MOTIF,
        }
    }

    /// Points each segment turns into per generation.
    #[must_use]
    pub const fn motif_size(self) -> usize {
        self.motif().size
    }

    /// Length of `generate(iterations)` without generating it, or `None` if
    /// it would overflow.
    #[must_use]
    pub fn point_count(self, iterations: u32) -> Option<usize> {
        refined_len(self.seed().len(), self.motif_size(), iterations)
    }
}

impl std::fmt::Display for CurveKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
