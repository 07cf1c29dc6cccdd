//! Filter operations
//!
//! This module provides the 2D convolution engine and the kernels it is
//! parametrized with.

/// Filter kernels
pub mod kernels;

/// 2D convolution
mod convolution;
pub use convolution::convolve;

/// Filter operations
mod ops;
pub use ops::*;
