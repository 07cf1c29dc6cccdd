use crate::parallel;
use rasterkit_image::{Image, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A new single-channel image of the same size.
///
/// # Example
///
/// ```
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::color::gray_from_rgb;
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
/// let gray = gray_from_rgb(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb(src: &Image<f32, 3>) -> Result<Image<f32, 1>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0.0)?;

    let plane_len = src.plane_len();
    let (r, rest) = src.as_slice().split_at(plane_len);
    let (g, b) = rest.split_at(plane_len);

    parallel::par_iter_planar_rows(&mut dst, |_, y, row| {
        let offset = y * row.len();
        row.iter_mut().enumerate().for_each(|(x, out)| {
            let idx = offset + x;
            *out = RW * r[idx] + GW * g[idx] + BW * b[idx];
        });
    });

    Ok(dst)
}
