/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two image sizes do not match.
    #[error("Image size mismatch ({0}x{1}) vs ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the image has no pixels.
    #[error("Image size must be non-zero, got ({0}x{1})")]
    ZeroImageSize(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a kernel is not square.
    #[error("Kernel must be square, got ({0}x{1})")]
    InvalidKernelShape(usize, usize),

    /// Error when the kernel channels are neither one nor the image channels.
    #[error("Kernel channels ({0}) must be 1 or match the image channels ({1})")]
    InvalidKernelChannels(usize, usize),

    /// Error when a gaussian sigma is not a finite positive number.
    #[error("Sigma must be finite and positive, got {0}")]
    InvalidSigma(f32),
}
