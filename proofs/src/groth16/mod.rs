//! The Groth16 argument over BN254: constraint systems, single-party
//! setup, prover and pairing-check verifier.

mod prover;
mod r1cs;
mod setup;
mod verifier;

pub use prover::{prove, Groth16Proof};
pub use r1cs::{multiplier_assignment, multiplier_r1cs, LinearCombination, R1cs};
pub use setup::{setup, Groth16ProvingKey, Groth16VerifyingKey};
pub use verifier::{batch_verify, verify, Groth16Verifier};
