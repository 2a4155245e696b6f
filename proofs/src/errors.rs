use crate::poly_commit::errors::CommitmentError;
use ark_std::{error, fmt};
use veil_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, VerifierError>;

/// Errors of the proof systems.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum VerifierError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// Polynomial commitment error.
    Commitment(CommitmentError),
    /// The number of public signals does not match the verifying key.
    SignalCountMismatch,
    /// The proof artifact does not have the expected shape.
    MalformedProof,
    /// The key artifact is inconsistent or targets another protocol or curve.
    KeyMismatch,
    /// Error occurred when proving.
    Proof,
    /// Error occurred during setup.
    Setup,
}

impl fmt::Display for VerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use VerifierError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Commitment(e) => write!(f, "Commitment: {}", e),
            SignalCountMismatch => {
                f.write_str("The number of public signals does not match the verifying key")
            }
            MalformedProof => f.write_str("The proof artifact does not have the expected shape"),
            KeyMismatch => f.write_str("The key artifact is inconsistent"),
            Proof => f.write_str("Proving error"),
            Setup => f.write_str("Setup error"),
        }
    }
}

impl error::Error for VerifierError {}

impl From<AlgebraError> for VerifierError {
    fn from(e: AlgebraError) -> VerifierError {
        VerifierError::Algebra(e)
    }
}

impl From<CommitmentError> for VerifierError {
    fn from(e: CommitmentError) -> VerifierError {
        VerifierError::Commitment(e)
    }
}
