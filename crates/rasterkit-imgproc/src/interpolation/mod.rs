//! Pixel interpolation methods for image resampling.
//!
//! Both kernels read the source through clamp-to-edge addressing, so any
//! fractional coordinate is valid.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: rounds to the closest pixel
//! - **Bilinear**: weighted average of the four surrounding pixels

mod bilinear;

pub(crate) mod interpolate;
mod nearest;

pub use bilinear::bilinear_interpolation;
pub use interpolate::interpolate_pixel;
pub use interpolate::InterpolationMode;
pub use nearest::nearest_neighbor_interpolation;
