use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to decode image: {0}")]
    DecodeFailure(String),
}
