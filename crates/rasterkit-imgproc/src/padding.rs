use rasterkit_image::{Image, ImageError, ImageSize};

use crate::parallel;

/// A border type for the spatial padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// This border type fills the border with zeros.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// This border type takes the outermost row or column of pixels and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,
}

impl PaddingMode {
    /// Maps index `i` to a valid index within `[0, len)`, or `None` when the
    /// padded position has no source pixel.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Constant`: `None` outside the image
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        match self {
            PaddingMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            PaddingMode::Constant => (i >= 0 && (i as usize) < len).then_some(i as usize),
        }
    }
}

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// The same amount of padding on all four sides.
    pub fn uniform(padding: usize) -> Self {
        Self {
            top: padding,
            bottom: padding,
            left: padding,
            right: padding,
        }
    }

    /// The size of an image of `size` once this padding is applied.
    ///
    /// # Example
    /// ```rust
    /// use rasterkit_image::ImageSize;
    /// use rasterkit_imgproc::padding::Padding2D;
    ///
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let old_size = ImageSize { width: 4, height: 4 };
    ///
    /// assert_eq!(padding.padded_size(old_size), ImageSize { width: 8, height: 6 });
    /// ```
    pub fn padded_size(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width + self.left + self.right,
            height: size.height + self.top + self.bottom,
        }
    }
}

/// Creates a new image with spatial padding applied, the original image
/// placed at offset `(left, top)`.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `padding` - The amount of padding for all four sides.
/// * `padding_mode` - Zero fill or clamp-to-edge fill of the border.
///
/// # Example
///
/// ```rust
/// use rasterkit_image::{Image, ImageSize};
/// use rasterkit_imgproc::padding::{spatial_padding, Padding2D, PaddingMode};
///
/// let src = Image::<f32, 3>::from_size_val(ImageSize { width: 2, height: 2 }, 1.0).unwrap();
///
/// let dst = spatial_padding(&src, Padding2D::uniform(1), PaddingMode::Constant).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 4);
/// assert_eq!(dst.get_pixel(0, 0, 0), 0.0);
/// assert_eq!(dst.get_pixel(1, 1, 2), 1.0);
/// ```
pub fn spatial_padding<const C: usize>(
    src: &Image<f32, C>,
    padding: Padding2D,
    padding_mode: PaddingMode,
) -> Result<Image<f32, C>, ImageError> {
    let mut dst = Image::from_size_val(padding.padded_size(src.size()), 0.0)?;

    let (old_width, old_height) = (src.width(), src.height());

    parallel::par_iter_planar_rows(&mut dst, |ch, y, row| {
        let Some(src_y) = padding_mode.map_index(y as isize - padding.top as isize, old_height)
        else {
            return;
        };

        row.iter_mut().enumerate().for_each(|(x, val)| {
            if let Some(src_x) =
                padding_mode.map_index(x as isize - padding.left as isize, old_width)
            {
                *val = src.get_pixel(src_x as isize, src_y as isize, ch);
            }
        });
    });

    Ok(dst)
}
