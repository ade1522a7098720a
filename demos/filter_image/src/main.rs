use argh::{EarlyExit, FromArgs};
use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use convo::{
    image::Image,
    imgproc::{
        filter::{
            self,
            kernels::{Kernel, KernelType},
            ConvolutionConfig, Narrowing,
        },
        FilterError,
    },
    io::{
        error::IoError,
        functional::{self as F, GenericImage},
    },
};

#[derive(FromArgs, Debug)]
/// Apply a 3x3 convolution filter to an image.
struct Args {
    /// path to the input image (png, jpeg, bmp, tga, ...)
    #[argh(positional)]
    input: PathBuf,

    /// the name of the filter to apply
    #[argh(positional)]
    kernel: String,

    /// path to the output png image
    #[argh(option, short = 'o', default = "PathBuf::from(\"output.png\")")]
    output: PathBuf,

    /// the number of concurrent workers, defaults to the number of cpus
    #[argh(option, short = 'w')]
    workers: Option<usize>,

    /// clamp out of range values instead of wrapping them around
    #[argh(switch)]
    saturate: bool,
}

/// Comma separated names of the kernels in the catalog.
fn kernel_names() -> String {
    KernelType::ALL
        .iter()
        .map(KernelType::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse the command line, appending the kernel catalog to the usage text.
fn parse_args(command: &str, args: &[&str]) -> Result<Args, EarlyExit> {
    Args::from_args(&[command], args).map_err(|mut exit| {
        exit.output = format!(
            "{}\n\nKernels: {}. Unknown names fall back to identity.",
            exit.output.trim_end(),
            kernel_names()
        );
        exit
    })
}

fn load_error(path: &Path, err: &IoError) -> String {
    format!("Error loading file {}: {err}", path.display())
}

fn apply<const C: usize>(
    src: &Image<u8, C>,
    kernel: &Kernel,
    config: &ConvolutionConfig,
) -> Result<Image<u8, C>, FilterError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    filter::convolve_with_config(src, &mut dst, kernel, config)?;
    Ok(dst)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let strings = std::env::args().collect::<Vec<_>>();
    let command = strings.first().map_or("filter_image", String::as_str);
    let rest = strings.iter().skip(1).map(String::as_str).collect::<Vec<_>>();
    let args = match parse_args(command, &rest) {
        Ok(args) => args,
        Err(exit) if exit.status.is_ok() => {
            println!("{}", exit.output);
            return Ok(());
        }
        Err(exit) => {
            eprintln!("{}", exit.output);
            std::process::exit(1);
        }
    };
    let start = Instant::now();

    let kernel_type = KernelType::from_name(&args.kernel);
    let kernel = kernel_type.kernel();

    let mut config = ConvolutionConfig::default();
    if let Some(workers) = args.workers {
        config = config.with_worker_count(workers);
    }
    if args.saturate {
        config = config.with_narrowing(Narrowing::Saturating);
    }

    let src = F::read_image_any(&args.input)
        .map_err(|e| load_error(&args.input, &e))?;

    log::info!(
        "loaded {} with size {} and {} channels",
        args.input.display(),
        src.size(),
        src.num_channels()
    );
    log::info!(
        "applying {} kernel with {} workers",
        kernel_type,
        config.worker_count
    );

    let dst = match &src {
        GenericImage::L8(img) => GenericImage::L8(apply(img, &kernel, &config)?),
        GenericImage::La8(img) => GenericImage::La8(apply(img, &kernel, &config)?),
        GenericImage::Rgb8(img) => GenericImage::Rgb8(apply(img, &kernel, &config)?),
        GenericImage::Rgba8(img) => GenericImage::Rgba8(apply(img, &kernel, &config)?),
    };

    F::write_image_png(&args.output, &dst)?;
    log::info!("saved {}", args.output.display());

    println!("Took {:.3} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
