use rasterkit_image::{Image, ImageError};

use super::{convolve, kernels};

/// Blur an image using a box blur filter
///
/// # Arguments
///
/// * `src` - The source image with C channels.
/// * `kernel_size` - The side of the square kernel.
/// * `preserve_edges` - Zero fill (true) or replicate (false) the border.
pub fn box_blur<const C: usize>(
    src: &Image<f32, C>,
    kernel_size: usize,
    preserve_edges: bool,
) -> Result<Image<f32, C>, ImageError> {
    let kernel = kernels::box_kernel(kernel_size)?;
    convolve(src, &kernel, preserve_edges)
}

/// Blur an image using a gaussian blur filter
///
/// # Arguments
///
/// * `src` - The source image with C channels.
/// * `sigma` - The sigma of the gaussian kernel; the kernel side is derived from it.
/// * `preserve_edges` - Zero fill (true) or replicate (false) the border.
///
/// # Errors
///
/// Returns an error if `sigma` is not a finite positive number.
pub fn gaussian_blur<const C: usize>(
    src: &Image<f32, C>,
    sigma: f32,
    preserve_edges: bool,
) -> Result<Image<f32, C>, ImageError> {
    let kernel = kernels::gaussian_kernel(sigma)?;
    convolve(src, &kernel, preserve_edges)
}

/// Sharpen an image with the 3x3 sharpen kernel.
pub fn sharpen<const C: usize>(
    src: &Image<f32, C>,
    preserve_edges: bool,
) -> Result<Image<f32, C>, ImageError> {
    convolve(src, &kernels::sharpen_kernel()?, preserve_edges)
}

/// Emboss an image with the 3x3 emboss kernel.
pub fn emboss<const C: usize>(
    src: &Image<f32, C>,
    preserve_edges: bool,
) -> Result<Image<f32, C>, ImageError> {
    convolve(src, &kernels::emboss_kernel()?, preserve_edges)
}

/// Extract the high frequencies of an image with the 3x3 Laplacian kernel.
pub fn high_pass<const C: usize>(
    src: &Image<f32, C>,
    preserve_edges: bool,
) -> Result<Image<f32, C>, ImageError> {
    convolve(src, &kernels::high_pass_kernel()?, preserve_edges)
}
