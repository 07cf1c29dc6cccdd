//! Min-max normalization of feature images.
//!
//! Used to bring responses such as gradient magnitudes into `[0, 1]` before
//! they are visualized.

use rasterkit_image::Image;

/// Find the minimum and maximum values over all channels of an image.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::normalize::find_min_max;
///
/// let image = Image::<f32, 2>::new([2, 1].into(), vec![0.5, -1.0, 3.0, 2.0]).unwrap();
///
/// assert_eq!(find_min_max(&image), (-1.0, 3.0));
/// ```
pub fn find_min_max<const C: usize>(image: &Image<f32, C>) -> (f32, f32) {
    image
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &x| {
            (if x < min { x } else { min }, if x > max { x } else { max })
        })
}

/// Normalize an image in place to `[0, 1]` using its global minimum and maximum.
///
/// Every element becomes `(x - min) / (max - min)`, with the extrema taken
/// over all channels. An image whose range is zero is left unchanged.
pub fn normalize_min_max_inplace<const C: usize>(image: &mut Image<f32, C>) {
    let (min_val, max_val) = find_min_max(image);
    let range = max_val - min_val;

    if range == 0.0 {
        log::debug!("skipping min-max normalization of a constant image");
        return;
    }

    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|x| *x = (*x - min_val) / range);
}
