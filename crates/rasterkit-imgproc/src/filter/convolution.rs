use rasterkit_image::{Image, ImageError};

use crate::padding::{spatial_padding, Padding2D, PaddingMode};
use crate::parallel;

/// Convolve an image with a square 2D kernel.
///
/// The image is first padded by `kernel.width() / 2` pixels on every side,
/// then every output pixel accumulates the kernel-weighted neighbourhood of the
/// padded image, kernel row outer and kernel column inner.
///
/// A single-channel kernel is applied to every channel independently; a kernel
/// with `C` channels applies its channel `c` to image channel `c`.
///
/// # Arguments
///
/// * `src` - The input image with C channels.
/// * `kernel` - The kernel, with 1 or C channels.
/// * `preserve_edges` - If true, the border is zero filled, which darkens
///   responses near the image edges. If false, the border replicates the
///   edge pixels.
///
/// # Returns
///
/// A new image with the same size and channels as `src`.
///
/// # Errors
///
/// Returns an error if the kernel is not square or if its channel count is
/// neither 1 nor C.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::filter::{convolve, kernels};
///
/// let image = Image::<f32, 3>::from_size_val([5, 4].into(), 0.5).unwrap();
/// let kernel = kernels::box_kernel(3).unwrap();
///
/// let blurred = convolve(&image, &kernel, false).unwrap();
///
/// assert_eq!(blurred.size(), image.size());
/// assert!((blurred.get_pixel(0, 0, 2) - 0.5).abs() < 1e-6);
/// ```
pub fn convolve<const C: usize, const K: usize>(
    src: &Image<f32, C>,
    kernel: &Image<f32, K>,
    preserve_edges: bool,
) -> Result<Image<f32, C>, ImageError> {
    if kernel.width() != kernel.height() {
        return Err(ImageError::InvalidKernelShape(
            kernel.width(),
            kernel.height(),
        ));
    }

    if K != 1 && K != C {
        return Err(ImageError::InvalidKernelChannels(K, C));
    }

    let padding = kernel.width() / 2;
    let padding_mode = if preserve_edges {
        PaddingMode::Constant
    } else {
        PaddingMode::Replicate
    };

    log::trace!(
        "convolve {} with {}x{}x{} kernel, padding {:?}",
        src.size(),
        kernel.width(),
        kernel.height(),
        K,
        padding_mode
    );

    let padded = spatial_padding(src, Padding2D::uniform(padding), padding_mode)?;
    let mut dst = Image::from_size_val(src.size(), 0.0)?;

    let p = padding as isize;

    parallel::par_iter_planar_rows(&mut dst, |ch, y, row| {
        let kernel_ch = if K == 1 { 0 } else { ch };
        let y = y as isize;

        row.iter_mut().enumerate().for_each(|(x, out)| {
            let x = x as isize;
            let mut sum = 0.0;
            for j in -p..=p {
                for i in -p..=p {
                    let img_value = padded.get_pixel(x + p + i, y + p + j, ch);
                    let kernel_value = kernel.get_pixel(p + i, p + j, kernel_ch);
                    sum += img_value * kernel_value;
                }
            }
            *out = sum;
        });
    });

    Ok(dst)
}
