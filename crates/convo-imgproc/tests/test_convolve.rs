use convo_image::{Image, ImageSize};
use convo_imgproc::{
    filter::{convolve, convolve_with_config, kernels, ConvolutionConfig, Narrowing},
    FilterError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_image<const C: usize>(size: ImageSize, seed: u64) -> Image<u8, C> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; size.width * size.height * C];
    rng.fill(&mut data[..]);
    Image::new(size, data).unwrap()
}

#[test]
fn identity_reproduces_source() -> Result<(), FilterError> {
    let src = random_image::<3>([37, 23].into(), 1);
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    convolve(&src, &mut dst, &kernels::lookup("identity"), 4)?;

    assert_eq!(dst, src);
    Ok(())
}

#[test]
fn output_keeps_dimensions() -> Result<(), FilterError> {
    let src = random_image::<4>([9, 13].into(), 2);
    for kernel_type in kernels::KernelType::ALL {
        let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0)?;
        convolve(&src, &mut dst, &kernel_type.kernel(), 3)?;
        assert_eq!(dst.size(), src.size());
        assert_eq!(dst.num_channels(), src.num_channels());
        assert_eq!(dst.as_slice().len(), src.as_slice().len());
    }
    Ok(())
}

#[test]
fn result_independent_of_worker_count() -> Result<(), FilterError> {
    let src = random_image::<3>([64, 47].into(), 3);
    for kernel_type in kernels::KernelType::ALL {
        let kernel = kernel_type.kernel();

        let mut single = Image::<u8, 3>::from_size_val(src.size(), 0)?;
        convolve(&src, &mut single, &kernel, 1)?;

        for workers in [2, 3, 8, 47, 100] {
            let mut multi = Image::<u8, 3>::from_size_val(src.size(), 0)?;
            convolve(&src, &mut multi, &kernel, workers)?;
            assert_eq!(
                single.as_slice(),
                multi.as_slice(),
                "kernel {kernel_type} differs with {workers} workers"
            );
        }
    }
    Ok(())
}

#[test]
fn saturating_is_independent_of_worker_count() -> Result<(), FilterError> {
    let src = random_image::<1>([31, 17].into(), 4);
    let kernel = kernels::lookup("edge");
    let config = ConvolutionConfig::default().with_narrowing(Narrowing::Saturating);

    let mut single = Image::<u8, 1>::from_size_val(src.size(), 0)?;
    convolve_with_config(&src, &mut single, &kernel, &config.with_worker_count(1))?;

    let mut multi = Image::<u8, 1>::from_size_val(src.size(), 0)?;
    convolve_with_config(&src, &mut multi, &kernel, &config.with_worker_count(8))?;

    assert_eq!(single, multi);
    Ok(())
}

#[test]
fn single_pixel_image() -> Result<(), FilterError> {
    let src = Image::<u8, 3>::new([1, 1].into(), vec![10, 20, 30])?;

    // every tap samples the only pixel, so the output is the weight sum times the input
    let mut dst = src.clone();
    convolve(&src, &mut dst, &kernels::lookup("edge"), 4)?;
    assert_eq!(dst.as_slice(), &[0, 0, 0]);

    convolve(&src, &mut dst, &kernels::lookup("emboss"), 4)?;
    assert_eq!(dst.as_slice(), &[10, 20, 30]);
    Ok(())
}

#[test]
fn uniform_image_is_preserved_by_gaussian() -> Result<(), FilterError> {
    let src = Image::<u8, 3>::from_size_val([17, 5].into(), 123)?;
    let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0)?;

    convolve(&src, &mut dst, &kernels::lookup("gauss"), 8)?;

    assert_eq!(dst, src);
    Ok(())
}

#[test]
fn box_blur_end_to_end() -> Result<(), FilterError> {
    let src = Image::<u8, 3>::from_size_val([4, 4].into(), 100)?;
    let mut dst = Image::<u8, 3>::from_size_val([4, 4].into(), 0)?;

    convolve(&src, &mut dst, &kernels::lookup("blur"), 4)?;

    assert_eq!(dst.size(), ImageSize { width: 4, height: 4 });
    assert_eq!(dst.num_channels(), 3);
    assert!(dst.as_slice().iter().all(|v| (99..=101).contains(v)));
    Ok(())
}

#[test]
fn source_is_untouched() -> Result<(), FilterError> {
    let src = random_image::<2>([12, 12].into(), 5);
    let copy = src.clone();
    let mut dst = Image::<u8, 2>::from_size_val(src.size(), 0)?;

    convolve(&src, &mut dst, &kernels::lookup("sharpen"), 5)?;

    assert_eq!(src, copy);
    Ok(())
}
