use convo_image::{Image, ImageError};

use super::kernels::Kernel;
use super::sampler::Narrowing;
use super::worker::ConvolutionWorker;
use crate::error::FilterError;
use crate::parallel::{self, default_worker_count, partition_rows, ParallelError};

/// Configuration of a convolution call.
///
/// # Example
///
/// ```
/// use convo_imgproc::filter::{ConvolutionConfig, Narrowing};
///
/// let config = ConvolutionConfig::default()
///     .with_worker_count(4)
///     .with_narrowing(Narrowing::Saturating);
///
/// assert_eq!(config.worker_count, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvolutionConfig {
    /// The number of concurrent workers, must be > 0.
    pub worker_count: usize,
    /// How weighted sums are converted to 8-bit samples.
    pub narrowing: Narrowing,
}

impl ConvolutionConfig {
    /// Set the number of concurrent workers.
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the narrowing of the weighted sums.
    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            narrowing: Narrowing::default(),
        }
    }
}

/// Convolve an image with a 3x3 kernel using a fixed number of concurrent workers.
///
/// The rows of the image are split into `worker_count` contiguous ranges and each non-empty
/// range is processed by its own worker. Neighbors outside the image replicate the border
/// pixels, and weighted sums are narrowed with [`Narrowing::Wrapping`]. The output does not
/// depend on the number of workers.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The 3x3 kernel.
/// * `worker_count` - The number of concurrent workers, must be > 0.
///
/// # Errors
///
/// If `src` and `dst` do not have the same size, or if `worker_count` is zero.
///
/// # Example
///
/// ```
/// use convo_image::Image;
/// use convo_imgproc::filter::{convolve, kernels};
///
/// let src = Image::<u8, 3>::from_size_val([4, 4].into(), 100).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// convolve(&src, &mut dst, &kernels::lookup("gauss"), 2).unwrap();
///
/// assert!(dst.as_slice().iter().all(|&v| v == 100));
/// ```
pub fn convolve<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel,
    worker_count: usize,
) -> Result<(), FilterError> {
    let config = ConvolutionConfig {
        worker_count,
        narrowing: Narrowing::Wrapping,
    };
    convolve_with_config(src, dst, kernel, &config)
}

/// Convolve an image with a 3x3 kernel using the given configuration.
///
/// See [`convolve`] for the details.
pub fn convolve_with_config<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel,
    config: &ConvolutionConfig,
) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    if config.worker_count == 0 {
        return Err(ParallelError::InvalidThreadCount(config.worker_count).into());
    }

    let ranges = partition_rows(src.rows(), config.worker_count);
    log::debug!(
        "convolving {} with {} channels: {} row ranges for {} workers",
        src.size(),
        C,
        ranges.len(),
        config.worker_count
    );

    // hand every worker an exclusive slice holding exactly its rows
    let row_stride = src.row_stride();
    let mut rest = dst.as_slice_mut();
    let mut workers = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (rows, tail) = std::mem::take(&mut rest).split_at_mut(range.count * row_stride);
        rest = tail;
        workers.push(ConvolutionWorker::new(
            src,
            kernel,
            range,
            rows,
            config.narrowing,
        ));
    }

    let tasks = workers
        .into_iter()
        .map(|worker| move || worker.run())
        .collect::<Vec<_>>();

    parallel::run_batch(config.worker_count, tasks)?;

    Ok(())
}
