use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid amount: {0}")]
    Validation(String),

    #[error("Signature request rejected by the wallet")]
    UserRejected,

    #[error("Transaction error: {0}")]
    Transaction(String),
}

pub type CinderResult<T> = Result<T, CinderError>;
