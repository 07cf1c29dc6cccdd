#![deny(missing_docs)]
//! Planar image types with clamped pixel access

/// planar image representation.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
