//! Errors raised while constructing ciphertexts, proofs, and ballots. Verification never
//! produces these; a failed check is a `false` verdict, see `proofs::Verification`.
use thiserror::Error;

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum ElectionError {
    #[error("encryption requires a non-zero nonce")]
    ZeroNonce,
    #[error("value out of range: {0}")]
    OutOfRange(String),
    #[error("ballot {0} selects more than one candidate")]
    Overvote(String),
    #[error("malformed input: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ElectionError>;
