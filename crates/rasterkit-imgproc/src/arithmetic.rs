use rasterkit_image::{Image, ImageError};

use crate::parallel;

fn check_same_size<const C: usize>(
    src1: &Image<f32, C>,
    src2: &Image<f32, C>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }
    Ok(())
}

/// Add two images element-wise.
///
/// dst(x,y,c) = src1(x,y,c) + src2(x,y,c)
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::arithmetic::add;
///
/// let a = Image::<f32, 1>::from_size_val([2, 2].into(), 0.25).unwrap();
/// let b = Image::<f32, 1>::from_size_val([2, 2].into(), 0.5).unwrap();
///
/// let sum = add(&a, &b).unwrap();
///
/// assert_eq!(sum.get_pixel(1, 1, 0), 0.75);
/// ```
pub fn add<const C: usize>(
    src1: &Image<f32, C>,
    src2: &Image<f32, C>,
) -> Result<Image<f32, C>, ImageError> {
    check_same_size(src1, src2)?;

    let mut dst = Image::from_size_val(src1.size(), 0.0)?;
    parallel::par_iter_val_two(src1, src2, &mut dst, |&a, &b, out| *out = a + b);

    Ok(dst)
}

/// Subtract two images element-wise.
///
/// dst(x,y,c) = src1(x,y,c) - src2(x,y,c)
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
pub fn subtract<const C: usize>(
    src1: &Image<f32, C>,
    src2: &Image<f32, C>,
) -> Result<Image<f32, C>, ImageError> {
    check_same_size(src1, src2)?;

    let mut dst = Image::from_size_val(src1.size(), 0.0)?;
    parallel::par_iter_val_two(src1, src2, &mut dst, |&a, &b, out| *out = a - b);

    Ok(dst)
}

/// Add `value` to every element of one channel, in place.
///
/// A channel index outside the image leaves it unchanged.
pub fn shift_channel<const C: usize>(image: &mut Image<f32, C>, channel: usize, value: f32) {
    if let Some(plane) = image.plane_mut(channel) {
        plane.iter_mut().for_each(|v| *v += value);
    }
}

/// Clamp every element of the image to `[0, 1]`, in place.
pub fn clamp_unit<const C: usize>(image: &mut Image<f32, C>) {
    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|v| *v = v.clamp(0.0, 1.0));
}

/// Scale every element of the image by `factor`.
pub fn scale<const C: usize>(
    src: &Image<f32, C>,
    factor: f32,
) -> Result<Image<f32, C>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0.0)?;
    parallel::par_iter_val(src, &mut dst, |&v, out| *out = v * factor);

    Ok(dst)
}
