//! Filter operations
//!
//! This module provides 3x3 convolution filters for 8-bit images.

/// Filter kernels
pub mod kernels;

/// Per pixel sampling
mod sampler;
pub use sampler::*;

/// Row range workers
mod worker;
pub use worker::*;

/// Filter operations
mod ops;
pub use ops::*;
