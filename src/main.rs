use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fractal_atlas::{
    Colour, ColourMapKinds, EvaluationStrategy, FractalConfig, FractalKinds, PixelRect,
    PpmFilePresenter, RenderController,
};

const DEFAULT_WIDTH: u32 = 900;
const DEFAULT_HEIGHT: u32 = 780;

#[derive(Parser)]
#[command(name = "fractal_atlas", about = "Renders classic fractals to PPM images")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render one fractal and save it as a binary PPM
    Render {
        /// Fractal slug, see `list`
        #[arg(long, default_value = "mandelbrot")]
        fractal: FractalKinds,
        /// Curve generations or classifier depth
        #[arg(long)]
        iterations: Option<u32>,
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,
        #[arg(long, value_enum, default_value_t = ColourMapArg::Tint)]
        colour_map: ColourMapArg,
        /// Tint as RRGGBB hex
        #[arg(long, value_parser = parse_tint)]
        tint: Option<Colour>,
        /// Seed for probabilistic classifiers
        #[arg(long)]
        seed: Option<u64>,
        /// Zoom factor about the view centre; below one zooms in
        #[arg(long)]
        zoom: Option<f64>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Rayon)]
        strategy: StrategyArg,
        #[arg(long, default_value = "output/fractal.ppm")]
        output: PathBuf,
    },
    /// List every fractal with its family and default view
    List,
    /// Load a PPM and report its dimensions
    Inspect {
        #[arg(long)]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColourMapArg {
    Tint,
    Fire,
}

impl From<ColourMapArg> for ColourMapKinds {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::Tint => Self::Tint,
            ColourMapArg::Fire => Self::FireGradient,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Rayon,
    ScopedThreads,
    Serial,
}

impl From<StrategyArg> for EvaluationStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Rayon => Self::Rayon,
            StrategyArg::ScopedThreads => Self::ScopedThreads,
            StrategyArg::Serial => Self::Serial,
        }
    }
}

fn parse_tint(value: &str) -> Result<Colour, String> {
    let hex = value.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| format!("expected RRGGBB hex, got {:?}", value))
    };

    if hex.len() != 6 {
        return Err(format!("expected RRGGBB hex, got {:?}", value));
    }

    Ok(Colour {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Cmd::Render {
            fractal,
            iterations,
            width,
            height,
            colour_map,
            tint,
            seed,
            zoom,
            strategy,
            output,
        } => {
            let mut config = FractalConfig::for_kind(fractal);
            config.colour_map_kind = colour_map.into();
            config.seed = seed;

            if let Some(iterations) = iterations {
                config.set_iterations(iterations)?;
            }
            if let Some(tint) = tint {
                config.tint = tint;
            }
            if let Some(factor) = zoom {
                config.zoom_about(config.viewport.center(), factor)?;
            }

            let pixel_rect = PixelRect::with_size(width, height)?;
            let mut controller =
                RenderController::with_strategy(PpmFilePresenter::new(), strategy.into());

            controller.render(&config, pixel_rect)?;
            controller.write(&output)?;
        }
        Cmd::List => {
            for &kind in FractalKinds::ALL {
                let viewport = kind.default_viewport();
                println!(
                    "{:<24} {:<12} x: [{}, {}] y: [{}, {}] zoom: {}",
                    kind.slug(),
                    kind.family().display_name(),
                    viewport.x_min(),
                    viewport.x_max(),
                    viewport.y_min(),
                    viewport.y_max(),
                    viewport.zoom()
                );
            }
        }
        Cmd::Inspect { path } => {
            let mut controller = RenderController::new(PpmFilePresenter::new());
            let buffer = controller.load(&path)?;

            log::info!(
                "{}: {}x{} ({} bytes)",
                path.display(),
                buffer.pixel_rect().width(),
                buffer.pixel_rect().height(),
                buffer.buffer_size()
            );
        }
    }

    Ok(())
}
