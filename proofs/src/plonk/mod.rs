//! A vanilla 3-wire PLONK argument over BN254 on top of the KZG
//! commitment engine: constraint systems, the indexer, the prover, and
//! the verifier.

mod constraint_system;
mod indexer;
mod prover;
mod transcript;
mod verifier;

pub use constraint_system::{
    multiplier_plonk_cs, multiplier_plonk_witness, PlonkConstraintSystem,
};
pub use indexer::{indexer, PlonkProverParams, PlonkVerifierParams};
pub use prover::{prove, PlonkProof};
pub use verifier::{verify, PlonkVerifier};
