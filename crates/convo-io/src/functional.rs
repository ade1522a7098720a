use std::path::Path;

use convo_image::{Image, ImageSize};

use crate::{
    error::IoError,
    png::{
        write_image_png_gray8, write_image_png_gray_alpha8, write_image_png_rgb8,
        write_image_png_rgba8,
    },
};

/// A generic 8-bit image holding the channel layout found in the decoded file.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.size(),
            GenericImage::La8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(_) => 1,
            GenericImage::La8(_) => 2,
            GenericImage::Rgb8(_) => 3,
            GenericImage::Rgba8(_) => 4,
        }
    }
}

/// Reads an image from the given file path.
///
/// The format is guessed from the file content and the method reads any format supported by
/// the image crate, e.g. png, jpeg, bmp or tga. The channel layout of the file is kept and
/// samples are converted to 8 bits.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap[..]))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!(
        "decoded {} as {:?} with size {}",
        file_path.display(),
        img.color(),
        size
    );

    let image = match img.color().channel_count() {
        1 => GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?),
        2 => GenericImage::La8(Image::new(size, img.into_luma_alpha8().into_raw())?),
        3 => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
        _ => GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?),
    };

    Ok(image)
}

/// Writes the given image to a PNG file with the same channel layout.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image to encode.
pub fn write_image_png(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    match image {
        GenericImage::L8(img) => write_image_png_gray8(file_path, img),
        GenericImage::La8(img) => write_image_png_gray_alpha8(file_path, img),
        GenericImage::Rgb8(img) => write_image_png_rgb8(file_path, img),
        GenericImage::Rgba8(img) => write_image_png_rgba8(file_path, img),
    }
}
