use ark_std::{error, fmt};

pub(crate) type Result<T> = core::result::Result<T, CommitmentError>;

/// Polynomial commitment scheme errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommitmentError {
    /// The opening does not match the commitment at the claimed point.
    InvalidOpening,
    /// The degree of the polynomial is higher than the public parameters allow.
    DegreeTooLarge,
}

impl fmt::Display for CommitmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommitmentError::InvalidOpening => {
                "The opening does not match the commitment at the claimed point"
            }
            CommitmentError::DegreeTooLarge => {
                "The degree of the polynomial is higher than the public parameters allow"
            }
        })
    }
}

impl error::Error for CommitmentError {}
