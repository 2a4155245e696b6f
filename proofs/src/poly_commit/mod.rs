/// Errors of the commitment engine.
pub mod errors;
/// Dense polynomials over a prime field.
pub mod field_polynomial;
/// The KZG polynomial commitment scheme.
pub mod kzg;
/// The Fiat-Shamir transcript extension for commitments.
pub mod transcript;
