use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed interchange data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("reception holds {found} positions for a roster of {expected}")]
    ReceptionSize { expected: usize, found: usize },
}
