use convo_image::Image;

use super::kernels::Kernel;
use super::sampler::{sample_pixel_with, Narrowing};
use crate::parallel::RowRange;

/// Convolves one contiguous range of rows of an image.
///
/// The worker reads the whole source image, since rows at the border of its range sample the
/// neighboring rows, but only writes into `dst`, the slice of the destination buffer holding
/// exactly the rows of `range`.
pub struct ConvolutionWorker<'a, const C: usize> {
    src: &'a Image<u8, C>,
    kernel: &'a Kernel,
    range: RowRange,
    dst: &'a mut [u8],
    narrowing: Narrowing,
}

impl<'a, const C: usize> ConvolutionWorker<'a, C> {
    /// Create a worker for the given row range.
    ///
    /// # Arguments
    ///
    /// * `src` - The source image with shape (H, W, C).
    /// * `kernel` - The 3x3 kernel.
    /// * `range` - The rows of the image to process.
    /// * `dst` - The destination rows, `range.count * W * C` samples.
    /// * `narrowing` - How weighted sums are converted to samples.
    ///
    /// PRECONDITION: `range` lies within the source image and `dst` has the size of the range.
    pub fn new(
        src: &'a Image<u8, C>,
        kernel: &'a Kernel,
        range: RowRange,
        dst: &'a mut [u8],
        narrowing: Narrowing,
    ) -> Self {
        debug_assert!(range.end_row() <= src.rows());
        debug_assert_eq!(dst.len(), range.count * src.row_stride());
        Self {
            src,
            kernel,
            range,
            dst,
            narrowing,
        }
    }

    /// Compute every sample of the assigned rows.
    pub fn run(self) {
        let Self {
            src,
            kernel,
            range,
            dst,
            narrowing,
        } = self;

        let row_stride = src.row_stride();
        if row_stride == 0 {
            return;
        }

        log::trace!("convolving rows {}..{}", range.start_row, range.end_row());

        dst.chunks_exact_mut(row_stride)
            .zip(range.rows())
            .for_each(|(dst_row, y)| {
                dst_row
                    .chunks_exact_mut(C)
                    .enumerate()
                    .for_each(|(x, dst_pixel)| {
                        for (ch, dst_val) in dst_pixel.iter_mut().enumerate() {
                            *dst_val = sample_pixel_with(src, x, y, ch, kernel, narrowing);
                        }
                    });
            });
    }
}
