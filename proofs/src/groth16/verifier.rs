use crate::errors::{Result, VerifierError};
use crate::groth16::prover::Groth16Proof;
use crate::groth16::setup::Groth16VerifyingKey;
use crate::SnarkVerifier;
use veil_algebra::bn254::{BN254Gt, BN254PairingEngine, BN254Scalar, BN254G1};
use veil_algebra::prelude::*;

/// The Groth16 verifier.
#[derive(Debug, Default, Copy, Clone)]
pub struct Groth16Verifier;

/// The linear combination of the public signals with the key's input
/// commitments.
fn ic_combination(vk: &Groth16VerifyingKey, public_signals: &[BN254Scalar]) -> BN254G1 {
    let scalar_refs: Vec<&BN254Scalar> = public_signals.iter().collect();
    let point_refs: Vec<&BN254G1> = vk.ic[1..].iter().collect();
    vk.ic[0].add(&BN254G1::multi_exp(&scalar_refs, &point_refs))
}

/// Verify a Groth16 proof against the key and the ordered public signals.
///
/// The single pairing product checked is
/// `e(-A, B) * e(alpha, beta) * e(ic_comb, gamma) * e(C, delta) == 1`.
/// Identity proof components make the product fail and yield `false`;
/// only a signal count mismatch is an error.
pub fn verify(
    vk: &Groth16VerifyingKey,
    public_signals: &[BN254Scalar],
    proof: &Groth16Proof,
) -> Result<bool> {
    if public_signals.len() != vk.num_public() {
        return Err(VerifierError::SignalCountMismatch);
    }

    let ic_comb = ic_combination(vk, public_signals);
    let product = BN254PairingEngine::product_of_pairings(
        &[proof.a.neg(), vk.alpha_g1, ic_comb, proof.c],
        &[proof.b, vk.beta_g2, vk.gamma_g2, vk.delta_g2],
    );

    Ok(product == BN254Gt::get_identity())
}

/// Verify several proofs under the same key with one pairing product.
/// Each per-proof check is scaled by a fresh random factor, so a batch
/// that passes contains only valid proofs up to negligible probability.
pub fn batch_verify<R: CryptoRng + RngCore>(
    vk: &Groth16VerifyingKey,
    instances: &[(Groth16Proof, Vec<BN254Scalar>)],
    prng: &mut R,
) -> Result<bool> {
    if instances.is_empty() {
        return Ok(true);
    }
    for (_, signals) in instances.iter() {
        if signals.len() != vk.num_public() {
            return Err(VerifierError::SignalCountMismatch);
        }
    }

    let mut factors = vec![BN254Scalar::one()];
    for _ in 1..instances.len() {
        factors.push(BN254Scalar::random(prng));
    }

    let mut g1_elems = Vec::with_capacity(instances.len() + 3);
    let mut g2_elems = Vec::with_capacity(instances.len() + 3);

    let mut factor_sum = BN254Scalar::zero();
    let mut ic_sum = BN254G1::get_identity();
    let mut c_sum = BN254G1::get_identity();

    for ((proof, signals), factor) in instances.iter().zip(factors.iter()) {
        g1_elems.push(proof.a.mul(factor).neg());
        g2_elems.push(proof.b);

        factor_sum.add_assign(factor);
        ic_sum.add_assign(&ic_combination(vk, signals).mul(factor));
        c_sum.add_assign(&proof.c.mul(factor));
    }

    g1_elems.push(vk.alpha_g1.mul(&factor_sum));
    g2_elems.push(vk.beta_g2);
    g1_elems.push(ic_sum);
    g2_elems.push(vk.gamma_g2);
    g1_elems.push(c_sum);
    g2_elems.push(vk.delta_g2);

    let product = BN254PairingEngine::product_of_pairings(&g1_elems, &g2_elems);
    Ok(product == BN254Gt::get_identity())
}

impl SnarkVerifier for Groth16Verifier {
    type VerifyingKey = Groth16VerifyingKey;
    type Proof = Groth16Proof;

    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        public_signals: &[BN254Scalar],
        proof: &Self::Proof,
    ) -> Result<bool> {
        verify(vk, public_signals, proof)
    }
}
