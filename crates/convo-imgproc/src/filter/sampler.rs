use convo_image::Image;

use super::kernels::Kernel;

/// How a floating point weighted sum is narrowed into an 8-bit sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narrowing {
    /// Truncate toward zero to a 32-bit integer and keep the low 8 bits.
    ///
    /// Sums outside `[0, 256)` wrap around, e.g. `-1.0` becomes `255` and `256.0` becomes `0`.
    /// Edge, sharpen and emboss kernels routinely produce such sums.
    #[default]
    Wrapping,

    /// Truncate toward zero and clamp to `[0, 255]`.
    Saturating,
}

impl Narrowing {
    /// Narrow a weighted sum into an 8-bit sample.
    ///
    /// # Example
    ///
    /// ```
    /// use convo_imgproc::filter::Narrowing;
    ///
    /// assert_eq!(Narrowing::Wrapping.narrow(-1.0), 255);
    /// assert_eq!(Narrowing::Saturating.narrow(-1.0), 0);
    /// assert_eq!(Narrowing::Wrapping.narrow(99.9), 99);
    /// ```
    #[inline]
    pub fn narrow(self, sum: f64) -> u8 {
        match self {
            Narrowing::Wrapping => sum as i32 as u8,
            Narrowing::Saturating => (sum as i32).clamp(0, 255) as u8,
        }
    }
}

/// Compute the raw weighted sum of the 3x3 neighborhood of a pixel channel.
///
/// Neighbors outside the image replicate the nearest border pixel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C). Must not be empty.
/// * `x` - The column of the pixel, in `[0, W)`.
/// * `y` - The row of the pixel, in `[0, H)`.
/// * `ch` - The channel, in `[0, C)`.
/// * `kernel` - The 3x3 kernel.
///
/// # Panics
///
/// If the coordinates are out of bounds.
pub fn weighted_sum<const C: usize>(
    src: &Image<u8, C>,
    x: usize,
    y: usize,
    ch: usize,
    kernel: &Kernel,
) -> f64 {
    let cols = src.cols();
    let data = src.as_slice();

    // replicate the border pixels
    let xs = [x.saturating_sub(1), x, (x + 1).min(cols - 1)];
    let ys = [y.saturating_sub(1), y, (y + 1).min(src.rows() - 1)];

    let mut sum = 0.0;
    for (r, &ny) in ys.iter().enumerate() {
        let row_offset = ny * cols;
        for (c, &nx) in xs.iter().enumerate() {
            let val = data[(row_offset + nx) * C + ch];
            sum += kernel.at(r, c) * val as f64;
        }
    }
    sum
}

/// Compute one output sample using the given narrowing.
///
/// See [`weighted_sum`] for the neighborhood sampling rules.
pub fn sample_pixel_with<const C: usize>(
    src: &Image<u8, C>,
    x: usize,
    y: usize,
    ch: usize,
    kernel: &Kernel,
    narrowing: Narrowing,
) -> u8 {
    narrowing.narrow(weighted_sum(src, x, y, ch, kernel))
}

/// Compute one output sample of the convolution of `src` with `kernel`.
///
/// The weighted sum is narrowed with [`Narrowing::Wrapping`].
///
/// # Example
///
/// ```
/// use convo_image::Image;
/// use convo_imgproc::filter::{kernels::Kernel, sample_pixel};
///
/// let image = Image::<u8, 1>::new([2, 1].into(), vec![10, 20]).unwrap();
///
/// assert_eq!(sample_pixel(&image, 1, 0, 0, &Kernel::IDENTITY), 20);
/// ```
pub fn sample_pixel<const C: usize>(
    src: &Image<u8, C>,
    x: usize,
    y: usize,
    ch: usize,
    kernel: &Kernel,
) -> u8 {
    sample_pixel_with(src, x, y, ch, kernel, Narrowing::Wrapping)
}
