//! Groth16 and PLONK proof systems over BN254, with snarkjs-compatible
//! artifact loading and calldata flattening.
#![deny(missing_docs)]
#![allow(clippy::upper_case_acronyms)]

/// snarkjs-shaped JSON artifacts: proofs, verification keys, public signals.
pub mod artifacts;
/// Flattening of proofs and public signals into contract-call shaped arrays.
pub mod calldata;
/// Error types of the proof systems.
pub mod errors;
/// The Groth16 proof system.
pub mod groth16;
/// The PLONK proof system.
pub mod plonk;
/// The KZG polynomial commitment engine.
pub mod poly_commit;

use errors::Result;
use veil_algebra::bn254::BN254Scalar;

/// The seam shared by the proof-system verifiers. Verification is a pure
/// function of the key, the public signals, and the proof.
pub trait SnarkVerifier {
    /// The verifying key type.
    type VerifyingKey;
    /// The proof type.
    type Proof;

    /// Verify `proof` against `vk` and the ordered public signals.
    ///
    /// Returns `Ok(false)` for any well-shaped proof that fails the
    /// cryptographic checks. An `Err` indicates API misuse, such as a
    /// signal vector whose length does not match the key.
    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        public_signals: &[BN254Scalar],
        proof: &Self::Proof,
    ) -> Result<bool>;
}
