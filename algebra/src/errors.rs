use ark_std::{error, fmt};

/// Errors of field arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArithmeticError {
    /// The element has no multiplicative inverse.
    NotInvertible,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArithmeticError::NotInvertible => "Field element is not invertible",
        })
    }
}

impl error::Error for ArithmeticError {}

/// Errors of curve point construction and decoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CurveError {
    /// The coordinates do not satisfy the curve equation or subgroup check.
    NotOnCurve,
    /// The bytes or digits are not a canonical, in-range encoding.
    InvalidEncoding,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CurveError::*;
        f.write_str(match self {
            NotOnCurve => "Point is not on the curve",
            InvalidEncoding => "Encoding is not a canonical curve element",
        })
    }
}

impl error::Error for CurveError {}

/// The umbrella error of the algebra layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlgebraError {
    /// Field arithmetic failed.
    Arithmetic(ArithmeticError),
    /// Curve point construction or decoding failed.
    Curve(CurveError),
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::Arithmetic(e) => write!(f, "Arithmetic: {}", e),
            AlgebraError::Curve(e) => write!(f, "Curve: {}", e),
        }
    }
}

impl error::Error for AlgebraError {}

impl From<ArithmeticError> for AlgebraError {
    fn from(e: ArithmeticError) -> AlgebraError {
        AlgebraError::Arithmetic(e)
    }
}

impl From<CurveError> for AlgebraError {
    fn from(e: CurveError) -> AlgebraError {
        AlgebraError::Curve(e)
    }
}
