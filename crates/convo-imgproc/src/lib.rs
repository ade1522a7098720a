#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the image processing module.
mod error;
pub use error::FilterError;

/// image filtering module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;
