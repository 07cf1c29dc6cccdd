//! Gradient features built on the Sobel kernels.

use rasterkit_image::{Image, ImageError};

use crate::color::rgb_from_hsv;
use crate::filter::{convolve, kernels};
use crate::normalize::normalize_min_max_inplace;

/// A full turn, maps gradient angles to hues.
const TWO_PI: f32 = 2.0 * std::f32::consts::PI;

/// Horizontal and vertical derivatives of an image and their polar form.
///
/// All four fields have the size of the source image and are co-indexed by
/// pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    /// Horizontal derivative response.
    pub gx: Image<f32, 1>,
    /// Vertical derivative response.
    pub gy: Image<f32, 1>,
    /// `sqrt(gx^2 + gy^2)`.
    pub magnitude: Image<f32, 1>,
    /// `atan2(gy, gx)`, in `(-pi, pi]`.
    pub angle: Image<f32, 1>,
}

/// Compute the Sobel derivatives of an image.
///
/// Both derivatives use replicated borders.
///
/// # Arguments
///
/// * `src` - The source image with C channels.
///
/// # Returns
///
/// The horizontal and vertical derivative images, each with C channels.
pub fn sobel<const C: usize>(
    src: &Image<f32, C>,
) -> Result<(Image<f32, C>, Image<f32, C>), ImageError> {
    let gx = convolve(src, &kernels::sobel_x_kernel()?, false)?;
    let gy = convolve(src, &kernels::sobel_y_kernel()?, false)?;
    Ok((gx, gy))
}

/// Compute the gradient field of the first channel of an image.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::features::gradient_field;
///
/// let image = Image::<f32, 1>::from_size_val([4, 4].into(), 0.3).unwrap();
///
/// let field = gradient_field(&image).unwrap();
///
/// assert!(field.magnitude.as_slice().iter().all(|&m| m.abs() < 1e-6));
/// ```
pub fn gradient_field<const C: usize>(src: &Image<f32, C>) -> Result<GradientField, ImageError> {
    let (gx, gy) = sobel(src)?;
    let gx = gx.channel(0)?;
    let gy = gy.channel(0)?;

    let (magnitude, angle): (Vec<f32>, Vec<f32>) = gx
        .as_slice()
        .iter()
        .zip(gy.as_slice())
        .map(|(&dx, &dy)| ((dx * dx + dy * dy).sqrt(), dy.atan2(dx)))
        .unzip();

    Ok(GradientField {
        magnitude: Image::new(src.size(), magnitude)?,
        angle: Image::new(src.size(), angle)?,
        gx,
        gy,
    })
}

/// Render the gradient of an image as an RGB image.
///
/// The gradient angle becomes the hue (`angle / 2pi`, negative for angles
/// below zero) and the min-max normalized magnitude becomes both saturation
/// and value. Flat regions are therefore black.
///
/// # Arguments
///
/// * `src` - The source image; its first channel is used.
///
/// # Returns
///
/// A three-channel RGB image of the same size.
pub fn colorize_gradient<const C: usize>(src: &Image<f32, C>) -> Result<Image<f32, 3>, ImageError> {
    let GradientField {
        mut magnitude,
        angle,
        ..
    } = gradient_field(src)?;

    normalize_min_max_inplace(&mut magnitude);

    let hue = angle.as_slice().iter().map(|&a| a / TWO_PI);
    let data = hue
        .chain(magnitude.as_slice().iter().copied())
        .chain(magnitude.as_slice().iter().copied())
        .collect();

    let mut colorized = Image::new(src.size(), data)?;
    rgb_from_hsv(&mut colorized);

    Ok(colorized)
}
