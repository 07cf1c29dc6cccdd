use crate::parallel;
use rasterkit_image::Image;

/// Convert an RGB image to HSV in place.
///
/// The input channels are R, G, B in `[0, 1]`. On return the channels hold:
///
/// * H: the hue in `[0, 1)`, a full turn mapped to 1.
/// * S: the saturation, `0` for black.
/// * V: the value, the largest of R, G, B.
///
/// # Example
///
/// ```
/// use rasterkit_image::Image;
/// use rasterkit_imgproc::color::hsv_from_rgb;
///
/// let mut image = Image::<f32, 3>::new([1, 1].into(), vec![0.0, 1.0, 0.0]).unwrap();
///
/// hsv_from_rgb(&mut image);
///
/// assert!((image.get_pixel(0, 0, 0) - 1.0 / 3.0).abs() < 1e-6);
/// assert_eq!(image.get_pixel(0, 0, 1), 1.0);
/// assert_eq!(image.get_pixel(0, 0, 2), 1.0);
/// ```
pub fn hsv_from_rgb(image: &mut Image<f32, 3>) {
    parallel::par_iter_pixels3_mut(image, |c0, c1, c2| {
        let (r, g, b) = (*c0, *c1, *c2);

        let value = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = value - min;

        let saturation = if value == 0.0 && min == 0.0 {
            0.0
        } else {
            chroma / value
        };

        let hue = if chroma == 0.0 {
            0.0
        } else {
            let h_prime = if value == r {
                (g - b) / chroma
            } else if value == g {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            };

            if h_prime < 0.0 {
                1.0 + h_prime / 6.0
            } else {
                h_prime / 6.0
            }
        };

        *c0 = hue;
        *c1 = saturation;
        *c2 = value;
    });
}

/// Convert an HSV image to RGB in place.
///
/// The inverse of [`hsv_from_rgb`] for hues in `[0, 1)`. Hues outside that
/// range, negative ones included, are not wrapped: they select the last sector
/// (red to magenta) and the chroma offset keeps the sign of the remainder.
pub fn rgb_from_hsv(image: &mut Image<f32, 3>) {
    parallel::par_iter_pixels3_mut(image, |c0, c1, c2| {
        let (hue, saturation, value) = (*c0, *c1, *c2);

        let chroma = value * saturation;
        let x = chroma * (1.0 - ((hue * 6.0) % 2.0 - 1.0).abs());
        let m = value - chroma;

        let (r, g, b) = match hue {
            h if (0.0..1.0 / 6.0).contains(&h) => (chroma, x, 0.0),
            h if (1.0 / 6.0..2.0 / 6.0).contains(&h) => (x, chroma, 0.0),
            h if (2.0 / 6.0..3.0 / 6.0).contains(&h) => (0.0, chroma, x),
            h if (3.0 / 6.0..4.0 / 6.0).contains(&h) => (0.0, x, chroma),
            h if (4.0 / 6.0..5.0 / 6.0).contains(&h) => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        *c0 = r + m;
        *c1 = g + m;
        *c2 = b + m;
    });
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rasterkit_image::{Image, ImageError};

    #[test]
    fn hsv_from_rgb() -> Result<(), ImageError> {
        // pixels: red, yellow, cyan, magenta, black, grey
        #[rustfmt::skip]
        let mut image = Image::<f32, 3>::new(
            [6, 1].into(),
            vec![
                1.0, 1.0, 0.0, 1.0, 0.0, 0.5,
                0.0, 1.0, 1.0, 0.0, 0.0, 0.5,
                0.0, 0.0, 1.0, 1.0, 0.0, 0.5,
            ],
        )?;

        super::hsv_from_rgb(&mut image);

        #[rustfmt::skip]
        let expected = [
            0.0, 1.0 / 6.0, 0.5, 5.0 / 6.0, 0.0, 0.0,
            1.0, 1.0, 1.0, 1.0, 0.0, 0.0,
            1.0, 1.0, 1.0, 1.0, 0.0, 0.5,
        ];

        for (a, b) in image.as_slice().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn hsv_round_trip() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let rgb = Image::<f32, 3>::new(
            [4, 1].into(),
            vec![
                0.2, 0.9, 0.4, 0.7,
                0.5, 0.1, 0.4, 0.7,
                0.8, 0.3, 0.9, 0.2,
            ],
        )?;

        let mut image = rgb.clone();
        super::hsv_from_rgb(&mut image);
        super::rgb_from_hsv(&mut image);

        for (a, b) in image.as_slice().iter().zip(rgb.as_slice()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn rgb_from_hsv_zero_saturation_is_grey() -> Result<(), ImageError> {
        let mut image = Image::<f32, 3>::new([2, 1].into(), vec![0.3, -0.2, 0.0, 0.0, 0.6, 0.0])?;

        super::rgb_from_hsv(&mut image);

        assert_eq!(image.as_slice(), &[0.6, 0.0, 0.6, 0.0, 0.6, 0.0]);

        Ok(())
    }
}
