use convo_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the filter operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// The images passed to the filter are not valid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The workers could not be dispatched.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
