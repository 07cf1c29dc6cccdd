use approx::assert_abs_diff_eq;
use rasterkit_image::{Image, ImageError, ImageSize};
use rasterkit_imgproc::{
    arithmetic, color,
    features::{colorize_gradient, sobel},
    filter::{convolve, gaussian_blur, kernels},
    resize::{resize_bilinear, resize_nearest},
};

fn gradient_image(size: ImageSize) -> Result<Image<f32, 3>, ImageError> {
    let mut image = Image::<f32, 3>::from_size_val(size, 0.0)?;
    for ch in 0..3 {
        for y in 0..size.height {
            for x in 0..size.width {
                let v = (x as f32 / size.width as f32) * 0.5
                    + (y as f32 / size.height as f32) * 0.3;
                image.set_pixel(x as isize, y as isize, ch, v + 0.1 * ch as f32);
            }
        }
    }
    Ok(image)
}

#[test]
fn flat_field_is_preserved_by_unit_kernels() -> Result<(), ImageError> {
    let image = Image::<f32, 3>::from_size_val([9, 7].into(), 0.42)?;

    let kernels = [
        kernels::box_kernel(3)?,
        kernels::box_kernel(5)?,
        kernels::gaussian_kernel(0.8)?,
        kernels::gaussian_kernel(1.7)?,
    ];

    for kernel in kernels.iter() {
        let out = convolve(&image, kernel, false)?;
        out.as_slice()
            .iter()
            .for_each(|&v| assert_abs_diff_eq!(v, 0.42, epsilon = 1e-5));
    }

    Ok(())
}

#[test]
fn gaussian_blur_rejects_non_positive_sigma() -> Result<(), ImageError> {
    let image = Image::<f32, 3>::from_size_val([3, 3].into(), 0.5)?;

    for sigma in [0.0, -1.0, f32::NAN] {
        assert!(matches!(
            gaussian_blur(&image, sigma, false),
            Err(ImageError::InvalidSigma(_))
        ));
    }

    Ok(())
}

#[test]
fn laplacian_of_flat_field_is_zero() -> Result<(), ImageError> {
    let image = Image::<f32, 2>::from_size_val([6, 6].into(), 0.9)?;

    let out = convolve(&image, &kernels::high_pass_kernel()?, false)?;

    out.as_slice()
        .iter()
        .for_each(|&v| assert_abs_diff_eq!(v, 0.0, epsilon = 1e-5));

    Ok(())
}

#[test]
fn box_filter_zero_padding_centre_vs_border() -> Result<(), ImageError> {
    let image = Image::<f32, 1>::from_size_val([3, 3].into(), 1.0)?;

    let out = convolve(&image, &kernels::box_kernel(3)?, true)?;

    #[rustfmt::skip]
    let expected = [
        4.0 / 9.0, 6.0 / 9.0, 4.0 / 9.0,
        6.0 / 9.0, 1.0, 6.0 / 9.0,
        4.0 / 9.0, 6.0 / 9.0, 4.0 / 9.0,
    ];

    for (a, b) in out.as_slice().iter().zip(expected.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }

    Ok(())
}

#[test]
fn sobel_step_edge_response() -> Result<(), ImageError> {
    let (width, height) = (10, 5);
    let mut image = Image::<f32, 1>::from_size_val([width, height].into(), 0.0)?;
    for y in 0..height as isize {
        for x in (width / 2) as isize..width as isize {
            image.set_pixel(x, y, 0, 1.0);
        }
    }

    let (gx, _) = sobel(&image)?;

    for y in 0..height as isize {
        for x in 0..width as isize {
            let v = gx.get_pixel(x, y, 0);
            if x == 4 || x == 5 {
                assert!(v > 3.9, "expected strong response at column {x}, got {v}");
            } else {
                assert_abs_diff_eq!(v, 0.0, epsilon = 1e-6);
            }
        }
    }

    Ok(())
}

#[test]
fn nearest_resize_same_size_is_identity() -> Result<(), ImageError> {
    let image = gradient_image([13, 8].into())?;

    assert_eq!(resize_nearest(&image, image.size())?, image);

    Ok(())
}

#[test]
fn bilinear_round_trip() -> Result<(), ImageError> {
    let flat = Image::<f32, 3>::from_size_val([12, 10].into(), 0.25)?;
    let down = resize_bilinear(&flat, [6, 5].into())?;
    let back = resize_bilinear(&down, flat.size())?;
    assert_eq!(back.size(), flat.size());
    back.as_slice()
        .iter()
        .for_each(|&v| assert_abs_diff_eq!(v, 0.25, epsilon = 1e-6));

    // a smooth ramp survives a down/up round trip within a small error
    let ramp = gradient_image([32, 24].into())?;
    let down = resize_bilinear(&ramp, [16, 12].into())?;
    let back = resize_bilinear(&down, ramp.size())?;
    for (a, b) in back.as_slice().iter().zip(ramp.as_slice()) {
        assert_abs_diff_eq!(a, b, epsilon = 0.05);
    }

    Ok(())
}

#[test]
fn colorize_gradient_of_flat_image_is_black() -> Result<(), ImageError> {
    let image = Image::<f32, 1>::from_size_val([8, 8].into(), 0.6)?;

    let colorized = colorize_gradient(&image)?;

    assert_eq!(colorized.num_channels(), 3);
    colorized
        .as_slice()
        .iter()
        .for_each(|&v| assert_abs_diff_eq!(v, 0.0, epsilon = 1e-6));

    Ok(())
}

#[test]
fn hybrid_image_composition() -> Result<(), ImageError> {
    // low frequencies of one image plus high frequencies of another
    let a = gradient_image([16, 16].into())?;
    let mut b = Image::<f32, 3>::from_size_val([16, 16].into(), 0.0)?;
    for y in (0..16).step_by(2) {
        for ch in 0..3 {
            for x in 0..16 {
                b.set_pixel(x, y, ch, 1.0);
            }
        }
    }

    let low = gaussian_blur(&a, 1.0, false)?;
    let high = arithmetic::subtract(&b, &gaussian_blur(&b, 1.0, false)?)?;
    let mut hybrid = arithmetic::add(&low, &high)?;
    arithmetic::clamp_unit(&mut hybrid);

    assert_eq!(hybrid.size(), a.size());
    assert!(hybrid.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));

    let gray = color::gray_from_rgb(&hybrid)?;
    assert_eq!(gray.size(), a.size());

    Ok(())
}
