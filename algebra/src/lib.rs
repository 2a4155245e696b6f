//! BN254 field, group, and pairing wrappers used by the Veil proof systems.
#![deny(missing_docs)]
#![allow(clippy::upper_case_acronyms)]

/// The BN254 curve family: scalar field, base field, G1, G2, Gt, pairing.
pub mod bn254;
/// Error types of the algebra layer.
pub mod errors;
/// The prelude re-exports.
pub mod prelude;
/// The RNG helper for tests.
pub mod rand_helper;
/// Serde implementations for the wrapper types.
pub mod serialization;
/// The trait seams for scalars, groups, and pairings.
pub mod traits;
/// Byte-twiddling utilities.
pub mod utils;

pub use ark_std::{
    borrow, cfg_into_iter, cfg_iter, fmt, iter, marker, ops, rand, One, UniformRand, Zero,
};

/// A shorthand for `!matches!`.
#[macro_export]
macro_rules! not_matches {
    ($expression:expr, $( $pattern:pat_param )|+ $( if $guard: expr )?) => {
        !matches!($expression, $( $pattern )|+ $( if $guard )?)
    }
}
