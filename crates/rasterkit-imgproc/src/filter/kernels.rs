use rasterkit_image::{Image, ImageError, ImageSize};

/// Discrete Laplacian, four-neighbour.
const HIGH_PASS_3X3: [[f32; 3]; 3] = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

/// Identity plus high-pass.
const SHARPEN_3X3: [[f32; 3]; 3] = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

const EMBOSS_3X3: [[f32; 3]; 3] = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];

const SOBEL_X_3X3: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

const SOBEL_Y_3X3: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Build a single-channel kernel image from a row-major 3x3 table.
fn kernel_from_table(table: &[[f32; 3]; 3]) -> Result<Image<f32, 1>, ImageError> {
    Image::new(
        ImageSize {
            width: 3,
            height: 3,
        },
        table.iter().flatten().copied().collect(),
    )
}

/// Normalize a kernel so that the sum of all its elements is one.
///
/// Every element, across all channels and positions, is divided by the total
/// sum. A kernel whose elements sum to zero is left unchanged.
///
/// # Arguments
///
/// * `kernel` - The kernel to normalize in place.
pub fn normalize_l1<const C: usize>(kernel: &mut Image<f32, C>) {
    let sum = kernel.as_slice().iter().sum::<f32>();

    if sum == 0.0 {
        log::debug!("skipping L1 normalization of a zero-sum kernel");
        return;
    }

    kernel.as_slice_mut().iter_mut().for_each(|k| *k /= sum);
}

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The side of the kernel. Expected to be odd; even sizes
///   are not rejected.
///
/// # Returns
///
/// A single-channel `kernel_size x kernel_size` kernel with every weight equal
/// to `1 / kernel_size^2`.
///
/// # Example
///
/// ```
/// use rasterkit_imgproc::filter::kernels::box_kernel;
///
/// let kernel = box_kernel(3).unwrap();
///
/// assert_eq!(kernel.width(), 3);
/// assert!((kernel.as_slice().iter().sum::<f32>() - 1.0).abs() < 1e-5);
/// ```
pub fn box_kernel(kernel_size: usize) -> Result<Image<f32, 1>, ImageError> {
    let weight = 1.0 / (kernel_size * kernel_size) as f32;
    Image::from_size_val([kernel_size, kernel_size].into(), weight)
}

/// The side of a gaussian kernel for `sigma`: the smallest odd integer not
/// below `6 * sigma`.
pub fn gaussian_kernel_size(sigma: f32) -> usize {
    let size = (6.0 * sigma).ceil() as usize;
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `sigma` - The sigma of the gaussian kernel, must be positive.
///
/// # Returns
///
/// A single-channel L1-normalized kernel of side [`gaussian_kernel_size`].
///
/// # Errors
///
/// Returns an error if `sigma` is zero, negative or not finite.
pub fn gaussian_kernel(sigma: f32) -> Result<Image<f32, 1>, ImageError> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(ImageError::InvalidSigma(sigma));
    }

    let kernel_size = gaussian_kernel_size(sigma);
    let center = ((kernel_size - 1) / 2) as f32;
    let sigma_sq = sigma * sigma;

    let mut kernel = Vec::with_capacity(kernel_size * kernel_size);

    for row in 0..kernel_size {
        for col in 0..kernel_size {
            let u = col as f32 - center;
            let v = row as f32 - center;
            kernel.push((-(u * u + v * v) / (2.0 * sigma_sq)).exp());
        }
    }

    let mut kernel = Image::new([kernel_size, kernel_size].into(), kernel)?;
    normalize_l1(&mut kernel);

    Ok(kernel)
}

/// Create a 3x3 high-pass (Laplacian) kernel.
pub fn high_pass_kernel() -> Result<Image<f32, 1>, ImageError> {
    kernel_from_table(&HIGH_PASS_3X3)
}

/// Create a 3x3 sharpen kernel.
pub fn sharpen_kernel() -> Result<Image<f32, 1>, ImageError> {
    kernel_from_table(&SHARPEN_3X3)
}

/// Create a 3x3 emboss kernel.
///
/// The weights are not symmetric: they favour the top-left to bottom-right
/// diagonal.
pub fn emboss_kernel() -> Result<Image<f32, 1>, ImageError> {
    kernel_from_table(&EMBOSS_3X3)
}

/// Create the 3x3 horizontal derivative Sobel kernel.
pub fn sobel_x_kernel() -> Result<Image<f32, 1>, ImageError> {
    kernel_from_table(&SOBEL_X_3X3)
}

/// Create the 3x3 vertical derivative Sobel kernel.
pub fn sobel_y_kernel() -> Result<Image<f32, 1>, ImageError> {
    kernel_from_table(&SOBEL_Y_3X3)
}
