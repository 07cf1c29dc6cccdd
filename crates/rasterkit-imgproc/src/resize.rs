use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel;
use rasterkit_image::{Image, ImageError, ImageSize};

/// Resize an image to a new size.
///
/// Output pixel `(i, j)` samples the source at
/// `x = (i + 0.5) * sx - 0.5`, `y = (j + 0.5) * sy - 0.5` with
/// `sx = src.width / new.width` and `sy = src.height / new.height`, so that
/// pixel centres of both grids stay aligned. Every channel is resampled
/// independently.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// A new image of size `new_size` with the channels of `src`.
///
/// # Errors
///
/// Returns an error if `new_size` has a zero dimension.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::interpolation::InterpolationMode;
/// use rasterkit_imgproc::resize::resize;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let image_resized = resize(&image, new_size, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize<const C: usize>(
    src: &Image<f32, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<f32, C>, ImageError> {
    if new_size.width == 0 || new_size.height == 0 {
        return Err(ImageError::ZeroImageSize(new_size.width, new_size.height));
    }

    log::trace!(
        "resize {} -> {} ({:?})",
        src.size(),
        new_size,
        interpolation
    );

    let mut dst = Image::from_size_val(new_size, 0.0)?;

    let scale_x = src.width() as f32 / new_size.width as f32;
    let scale_y = src.height() as f32 / new_size.height as f32;

    parallel::par_iter_planar_rows(&mut dst, |ch, j, row| {
        let y = (j as f32 + 0.5) * scale_y - 0.5;
        row.iter_mut().enumerate().for_each(|(i, out)| {
            let x = (i as f32 + 0.5) * scale_x - 0.5;
            *out = interpolate_pixel(src, x, y, ch, interpolation);
        });
    });

    Ok(dst)
}

/// Resize an image with nearest neighbor interpolation.
///
/// See [`resize`] for the coordinate mapping.
pub fn resize_nearest<const C: usize>(
    src: &Image<f32, C>,
    new_size: ImageSize,
) -> Result<Image<f32, C>, ImageError> {
    resize(src, new_size, InterpolationMode::Nearest)
}

/// Resize an image with bilinear interpolation.
///
/// See [`resize`] for the coordinate mapping.
pub fn resize_bilinear<const C: usize>(
    src: &Image<f32, C>,
    new_size: ImageSize,
) -> Result<Image<f32, C>, ImageError> {
    resize(src, new_size, InterpolationMode::Bilinear)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rasterkit_image::{Image, ImageError, ImageSize};

    #[test]
    fn resize_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let image_resized = super::resize_bilinear(&image, new_size)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size().width, 2);
        assert_eq!(image_resized.size().height, 3);
        Ok(())
    }

    #[test]
    fn resize_zero_size() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val([4, 4].into(), 1.0)?;
        assert_eq!(
            super::resize_nearest(&image, [0, 2].into()),
            Err(ImageError::ZeroImageSize(0, 2))
        );
        Ok(())
    }

    #[test]
    fn resize_nearest_identity() -> Result<(), ImageError> {
        let data = (0..5 * 3 * 2).map(|v| v as f32).collect::<Vec<_>>();
        let image = Image::<f32, 2>::new([5, 3].into(), data)?;

        let resized = super::resize_nearest(&image, image.size())?;

        assert_eq!(resized, image);
        Ok(())
    }

    #[test]
    fn resize_nearest_upsample() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([2, 1].into(), vec![1.0, 2.0])?;

        let resized = super::resize_nearest(&image, [4, 2].into())?;

        // x = (i + 0.5) * 0.5 - 0.5 -> -0.25, 0.25, 0.75, 1.25
        assert_eq!(
            resized.as_slice(),
            &[1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 2.0, 2.0]
        );
        Ok(())
    }

    #[test]
    fn resize_nearest_downsample() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([4, 1].into(), vec![0.0, 1.0, 2.0, 3.0])?;

        let resized = super::resize_nearest(&image, [2, 1].into())?;

        // x = (i + 0.5) * 2 - 0.5 -> 0.5, 2.5, rounded away from zero
        assert_eq!(resized.as_slice(), &[1.0, 3.0]);
        Ok(())
    }

    #[test]
    fn resize_bilinear_values() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new([2, 1].into(), vec![0.0, 1.0])?;

        let resized = super::resize_bilinear(&image, [4, 1].into())?;

        // x -> -0.25, 0.25, 0.75, 1.25 with clamped corners
        assert_eq!(resized.as_slice(), &[0.0, 0.25, 0.75, 1.0]);
        Ok(())
    }

    #[test]
    fn resize_bilinear_constant_round_trip() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val([4, 4].into(), 0.5)?;

        let down = super::resize_bilinear(&image, [2, 2].into())?;
        let up = super::resize_bilinear(&down, image.size())?;

        assert_eq!(up, image);

        let odd = super::resize_bilinear(&image, [7, 3].into())?;
        odd.as_slice()
            .iter()
            .for_each(|&v| assert_abs_diff_eq!(v, 0.5, epsilon = 1e-6));
        Ok(())
    }
}
