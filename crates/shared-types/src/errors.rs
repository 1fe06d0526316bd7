use thiserror::Error;

/// Errors produced when decoding a governor address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid address length: got {got} bytes, expected {expected}")]
    InvalidLength { got: usize, expected: usize },

    #[error("invalid address encoding: {message}")]
    InvalidEncoding { message: String },
}
