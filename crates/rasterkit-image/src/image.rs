use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use rasterkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a planar image with pixel data.
///
/// The pixel data is stored channel-major: each channel occupies a contiguous
/// plane of `width * height` elements laid out row by row, and the planes are
/// concatenated in channel order.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS>
where
    T: Copy,
{
    /// Create a new image from planar pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, one plane per channel.
    ///
    /// # Errors
    ///
    /// If the size is empty or the length of the pixel data does not match the
    /// image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0f32; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 || CHANNELS == 0 {
            return Err(ImageError::ZeroImageSize(size.width, size.height));
        }

        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every element set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 1>::from_size_val([4, 2].into(), 0.5).unwrap();
    ///
    /// assert_eq!(image.width(), 4);
    /// assert_eq!(image.get_pixel(3, 1, 0), 0.5);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// The number of elements in one channel plane.
    pub fn plane_len(&self) -> usize {
        self.size.width * self.size.height
    }

    /// Get the raw planar data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raw planar data mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its planar data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the plane of a channel, `None` if the channel is out of bounds.
    pub fn plane(&self, ch: usize) -> Option<&[T]> {
        let len = self.plane_len();
        (ch < CHANNELS).then(|| &self.data[ch * len..(ch + 1) * len])
    }

    /// Get the plane of a channel mutably, `None` if the channel is out of bounds.
    pub fn plane_mut(&mut self, ch: usize) -> Option<&mut [T]> {
        if ch >= CHANNELS {
            return None;
        }
        let len = self.plane_len();
        Some(&mut self.data[ch * len..(ch + 1) * len])
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, ch: usize) -> usize {
        ch * self.plane_len() + y * self.size.width + x
    }

    /// Get a reference to an element, `None` if any index is out of bounds.
    pub fn get(&self, x: usize, y: usize, ch: usize) -> Option<&T> {
        if x >= self.width() || y >= self.height() || ch >= CHANNELS {
            return None;
        }
        self.data.get(self.offset(x, y, ch))
    }

    /// Read a pixel with clamp-to-edge addressing.
    ///
    /// Coordinates and channel outside the image are replaced by the nearest
    /// valid index, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::Image;
    ///
    /// let image = Image::<f32, 1>::new([2, 1].into(), vec![1.0, 2.0]).unwrap();
    ///
    /// assert_eq!(image.get_pixel(-5, 0, 0), 1.0);
    /// assert_eq!(image.get_pixel(7, 3, 0), 2.0);
    /// ```
    #[inline]
    pub fn get_pixel(&self, x: isize, y: isize, ch: usize) -> T {
        let x = x.clamp(0, self.width() as isize - 1) as usize;
        let y = y.clamp(0, self.height() as isize - 1) as usize;
        let ch = ch.min(CHANNELS - 1);
        self.data[self.offset(x, y, ch)]
    }

    /// Write a pixel; writes outside the image are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: isize, y: isize, ch: usize, val: T) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() || ch >= CHANNELS {
            return;
        }
        let offset = self.offset(x, y, ch);
        self.data[offset] = val;
    }

    /// Get a channel of the image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError> {
        let plane = self
            .plane(channel)
            .ok_or(ImageError::ChannelIndexOutOfBounds(channel, CHANNELS))?;

        Image::new(self.size, plane.to_vec())
    }

    /// Split the image into its channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 2>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0.0f32,
    /// )
    /// .unwrap();
    ///
    /// let channels = image.split_channels().unwrap();
    /// assert_eq!(channels.len(), 2);
    /// ```
    pub fn split_channels(&self) -> Result<Vec<Image<T, 1>>, ImageError> {
        (0..CHANNELS).map(|ch| self.channel(ch)).collect()
    }
}
