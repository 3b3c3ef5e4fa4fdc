use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid model parameter: {msg}")]
    InvalidParameter { msg: String },
    #[error("sequence has length {found}, but the motif has {expected} positions")]
    LengthMismatch { expected: usize, found: usize },
    #[error("invalid base '{value}' at position {position}, must be an integer between 0 and 3 (A, C, G, T)")]
    InvalidBase { position: usize, value: String },
    #[error("posterior is undefined: sequence has probability zero under both the site and the background model")]
    DegenerateEvidence,
    #[error("invalid model specification: {msg}")]
    InvalidModelSpec { msg: String },
}

pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Error {
    Error::InvalidParameter { msg: msg.into() }
}

pub(crate) fn invalid_base(position: usize, value: impl ToString) -> Error {
    Error::InvalidBase {
        position,
        value: value.to_string(),
    }
}
