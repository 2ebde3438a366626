use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::thread;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::util::calculate_bands_in_pixel_rect::calculate_bands_in_pixel_rect;
use crate::core::util::calculate_threads_for_pixel_rect_banding::calculate_threads_for_pixel_rect_banding;

#[derive(Debug)]
pub enum GenerateFractalParallelError<AlgFailure: Error> {
    Algorithm(AlgFailure),
    PixelRect(PixelRectError),
    WorkerPanicked,
}

impl<AlgFailure: Error> fmt::Display for GenerateFractalParallelError<AlgFailure> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::PixelRect(err) => write!(f, "pixel rect error: {}", err),
            Self::WorkerPanicked => write!(f, "worker thread panicked during fractal computation"),
        }
    }
}

impl<AlgFailure: Error + 'static> Error for GenerateFractalParallelError<AlgFailure> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::PixelRect(err) => Some(err),
            Self::WorkerPanicked => None,
        }
    }
}

impl<AlgFailure: Error> From<PixelRectError> for GenerateFractalParallelError<AlgFailure> {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

fn generate_pixel_rect_band(
    band_num: u32,
    band_height: u32,
    total_bands: u32,
    bounding_rect: PixelRect,
) -> Result<PixelRect, PixelRectError> {
    let band_top = (band_num * band_height) as i32;

    let band_bottom = if band_num == total_bands - 1 {
        (bounding_rect.height() - 1) as i32 // last band takes any remainder rows
    } else {
        (((band_num + 1) * band_height) - 1) as i32
    };

    PixelRect::new(
        Point {
            x: bounding_rect.top_left().x,
            y: bounding_rect.top_left().y + band_top,
        },
        Point {
            x: bounding_rect.bottom_right().x,
            y: bounding_rect.top_left().y + band_bottom,
        },
    )
}

fn fill_band<Alg: FractalAlgorithm>(
    band: PixelRect,
    output: &mut [Alg::Success],
    algorithm: &Alg,
) -> Result<(), Alg::Failure> {
    let pixels = (band.top_left().y..=band.bottom_right().y).flat_map(|y| {
        (band.top_left().x..=band.bottom_right().x).map(move |x| Point { x, y })
    });

    for (slot, pixel) in output.iter_mut().zip(pixels) {
        *slot = algorithm.compute(pixel)?;
    }

    Ok(())
}

/// Splits `pixel_rect` into one row band per available core and evaluates
/// the bands on scoped threads.
pub fn generate_fractal_parallel_scoped_threads<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, GenerateFractalParallelError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let num_threads = calculate_threads_for_pixel_rect_banding(pixel_rect);

    generate_fractal_in_bands(pixel_rect, algorithm, num_threads)
}

/// Like [`generate_fractal_parallel_scoped_threads`] with a fixed upper
/// bound on the number of worker bands.
pub fn generate_fractal_parallel_scoped_threads_with_bands<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    max_bands: NonZeroU32,
) -> Result<Vec<Alg::Success>, GenerateFractalParallelError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let num_bands = calculate_bands_in_pixel_rect(max_bands, pixel_rect);

    generate_fractal_in_bands(pixel_rect, algorithm, num_bands)
}

// Every worker owns a disjoint run of whole rows in `output`, so no locking
// is needed and the result is row-major by construction.
fn generate_fractal_in_bands<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    num_bands: u32,
) -> Result<Vec<Alg::Success>, GenerateFractalParallelError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let band_height = pixel_rect.height() / num_bands;
    let mut output = vec![Alg::Success::default(); pixel_rect.size() as usize];

    thread::scope(|scope| -> Result<(), GenerateFractalParallelError<Alg::Failure>> {
        let mut remaining = output.as_mut_slice();
        let mut handles = Vec::with_capacity(num_bands as usize);

        for band_num in 0..num_bands {
            let band = generate_pixel_rect_band(band_num, band_height, num_bands, pixel_rect)?;
            let (band_output, rest) =
                std::mem::take(&mut remaining).split_at_mut(band.size() as usize);
            remaining = rest;

            handles.push(scope.spawn(move || fill_band(band, band_output, algorithm)));
        }

        handles.into_iter().try_for_each(|handle| {
            handle
                .join()
                .map_err(|_| GenerateFractalParallelError::WorkerPanicked)?
                .map_err(GenerateFractalParallelError::Algorithm)
        })
    })?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::actions::generate_fractal::test_support::{
        StubFailureAlgorithm, StubSuccessAlgorithm,
    };

    #[test]
    fn test_parallel_generates_same_results_as_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 10, y: 8 }).unwrap();
        let sequential_results = generate_fractal_serial(pixel_rect, &algorithm).unwrap();
        let parallel_results =
            generate_fractal_parallel_scoped_threads(pixel_rect, &algorithm).unwrap();

        assert_eq!(parallel_results, sequential_results);
    }

    #[test]
    fn test_four_bands_match_sequential() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(Point { x: 3, y: 7 }, Point { x: 40, y: 36 }).unwrap();
        let sequential_results = generate_fractal_serial(pixel_rect, &algorithm).unwrap();
        let parallel_results = generate_fractal_parallel_scoped_threads_with_bands(
            pixel_rect,
            &algorithm,
            NonZeroU32::new(4).unwrap(),
        )
        .unwrap();

        assert_eq!(parallel_results, sequential_results);
    }

    #[test]
    fn test_parallel_with_uneven_row_distribution() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 3, y: 10 }).unwrap();
        let sequential_results = generate_fractal_serial(pixel_rect, &algorithm).unwrap();
        let parallel_results = generate_fractal_parallel_scoped_threads_with_bands(
            pixel_rect,
            &algorithm,
            NonZeroU32::new(3).unwrap(),
        )
        .unwrap();

        assert_eq!(parallel_results, sequential_results);
    }

    #[test]
    fn test_parallel_with_more_bands_than_rows() {
        let algorithm = StubSuccessAlgorithm {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 5, y: 2 }).unwrap();
        let sequential_results = generate_fractal_serial(pixel_rect, &algorithm).unwrap();
        let parallel_results = generate_fractal_parallel_scoped_threads_with_bands(
            pixel_rect,
            &algorithm,
            NonZeroU32::new(16).unwrap(),
        )
        .unwrap();

        assert_eq!(parallel_results, sequential_results);
    }

    #[test]
    fn test_parallel_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {
            failing_pixel: Point { x: 1, y: 9 },
        };
        let pixel_rect = PixelRect::with_size(4, 12).unwrap();

        let result = generate_fractal_parallel_scoped_threads_with_bands(
            pixel_rect,
            &algorithm,
            NonZeroU32::new(4).unwrap(),
        );

        assert!(matches!(result, Err(GenerateFractalParallelError::Algorithm(_))));
    }

    #[test]
    fn test_band_covers_remainder_rows() {
        let bounding_rect = PixelRect::with_size(5, 11).unwrap();

        let last = generate_pixel_rect_band(2, 3, 3, bounding_rect).unwrap();

        assert_eq!(last.top_left(), Point { x: 0, y: 6 });
        assert_eq!(last.bottom_right(), Point { x: 4, y: 10 });
    }
}
