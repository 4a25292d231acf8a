use thiserror::Error;

pub type SlugResult<T> = Result<T, SlugError>;

#[derive(Debug, Error)]
pub enum SlugError {
    /// A setter or append call received input it cannot accept.
    /// The builder is left unchanged; fix the input and retry the call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The accumulated state is internally inconsistent at `build()` time.
    /// Not retryable without further mutation.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
