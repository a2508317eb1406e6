use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EwmaError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("estimator has not observed any sample yet")]
    NotInitialized,
}
