//! Multi-threaded 3x3 convolution filters for raster images.
//!
//! ```no_run
//! use convo::image::Image;
//! use convo::imgproc::filter::{convolve, kernels};
//! use convo::io::functional::{read_image_any, write_image_png, GenericImage};
//!
//! if let GenericImage::Rgb8(src) = read_image_any("input.jpg").unwrap() {
//!     let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
//!     convolve(&src, &mut dst, &kernels::lookup("sharpen"), 4).unwrap();
//!     write_image_png("output.png", &GenericImage::Rgb8(dst)).unwrap();
//! }
//! ```

#[doc(inline)]
pub use convo_image as image;

#[doc(inline)]
pub use convo_imgproc as imgproc;

#[doc(inline)]
pub use convo_io as io;
