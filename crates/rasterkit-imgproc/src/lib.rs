#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// element-wise image arithmetic module.
pub mod arithmetic;

/// color transformations module.
pub mod color;

/// gradient feature extraction module.
pub mod features;

/// image filtering module.
pub mod filter;

/// utilities for interpolation.
pub mod interpolation;

/// operations to normalize images.
pub mod normalize;

/// image border padding module.
pub mod padding;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;
