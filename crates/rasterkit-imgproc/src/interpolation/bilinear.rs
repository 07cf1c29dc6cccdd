use rasterkit_image::Image;

/// Kernel for bilinear interpolation
///
/// The four neighbours `(x1, y1)`, `(x2, y1)`, `(x1, y2)`, `(x2, y2)` with
/// `x1 = floor(u)`, `x2 = x1 + 1` (same for `v`) are read with clamp-to-edge
/// addressing, so samples outside the image repeat the edge pixels.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `c` - The channel of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    c: usize,
) -> f32 {
    let x1 = u.floor();
    let y1 = v.floor();
    let x2 = x1 + 1.0;
    let y2 = y1 + 1.0;

    let w11 = (x2 - u) * (y2 - v);
    let w21 = (u - x1) * (y2 - v);
    let w12 = (x2 - u) * (v - y1);
    let w22 = (u - x1) * (v - y1);

    let (ix1, iy1) = (x1 as isize, y1 as isize);
    let (ix2, iy2) = (ix1 + 1, iy1 + 1);

    let p11 = image.get_pixel(ix1, iy1, c);
    let p21 = image.get_pixel(ix2, iy1, c);
    let p12 = image.get_pixel(ix1, iy2, c);
    let p22 = image.get_pixel(ix2, iy2, c);

    w11 * p11 + w21 * p21 + w12 * p12 + w22 * p22
}
