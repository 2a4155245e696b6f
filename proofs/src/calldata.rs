//! Flattening of proofs and public signals into the positional argument
//! groups a verifier contract consumes, and the fail-closed verification
//! entry points over those groups.

use crate::artifacts::{format_public_signals, parse_decimal, parse_public_signals};
use crate::errors::{Result, VerifierError};
use crate::groth16::{self, Groth16Proof, Groth16VerifyingKey};
use crate::plonk::{self, PlonkProof, PlonkVerifierParams};
use merlin::Transcript;
use veil_algebra::bn254::{BN254Fq, BN254Scalar, BN254G1, BN254G2};
use veil_algebra::prelude::*;

fn fq_decimal(x: &BN254Fq) -> String {
    x.into_biguint().to_str_radix(10)
}

/// Flatten a Groth16 proof and its public signals into one decimal-string
/// array: `[a.x, a.y, b.x.c1, b.x.c0, b.y.c1, b.y.c0, c.x, c.y,
/// signals…]`. The G2 limbs are swapped, as the pairing precompile
/// expects them.
pub fn groth16_calldata(proof: &Groth16Proof, public_signals: &[BN254Scalar]) -> Vec<String> {
    let (b_x0, b_x1) = proof.b.get_x();
    let (b_y0, b_y1) = proof.b.get_y();

    let mut calldata = vec![
        fq_decimal(&proof.a.get_x()),
        fq_decimal(&proof.a.get_y()),
        fq_decimal(&b_x1),
        fq_decimal(&b_x0),
        fq_decimal(&b_y1),
        fq_decimal(&b_y0),
        fq_decimal(&proof.c.get_x()),
        fq_decimal(&proof.c.get_y()),
    ];
    calldata.extend(format_public_signals(public_signals));
    calldata
}

/// Split a flat calldata array back into the positional groups
/// `(a: 2, b: 2x2, c: 2, signals: rest)` and reconstruct the proof.
/// Every coordinate is range-checked and every point re-validated.
pub fn groth16_split_calldata(
    calldata: &[String],
) -> Result<(Groth16Proof, Vec<BN254Scalar>)> {
    if calldata.len() < 8 {
        return Err(VerifierError::MalformedProof);
    }
    let fq = |i: usize| parse_decimal::<BN254Fq>(&calldata[i]);

    let a = BN254G1::from_xy(fq(0)?, fq(1)?)?;
    let b = BN254G2::from_xy(fq(3)?, fq(2)?, fq(5)?, fq(4)?)?;
    let c = BN254G1::from_xy(fq(6)?, fq(7)?)?;
    let public_signals = parse_public_signals(&calldata[8..])?;

    Ok((Groth16Proof { a, b, c }, public_signals))
}

/// Run the Groth16 verifier over a flat calldata array. Fails closed:
/// malformed groups, off-curve points, a signal count that does not match
/// the key, and failing proofs all come back `false`.
pub fn groth16_verify_calldata(vk: &Groth16VerifyingKey, calldata: &[String]) -> bool {
    match groth16_split_calldata(calldata) {
        Ok((proof, public_signals)) => {
            groth16::verify(vk, &public_signals, &proof).unwrap_or(false)
        }
        Err(_) => false,
    }
}

/// Encode a PLONK proof into the opaque byte blob a contract stores.
pub fn plonk_proof_to_bytes(proof: &PlonkProof) -> Result<Vec<u8>> {
    bincode::serialize(proof).map_err(|_| VerifierError::MalformedProof)
}

/// Decode a PLONK proof from its byte blob.
pub fn plonk_proof_from_bytes(bytes: &[u8]) -> Result<PlonkProof> {
    bincode::deserialize(bytes).map_err(|_| VerifierError::MalformedProof)
}

/// Flatten a PLONK proof and its public signals into the pair a contract
/// call carries: the proof blob and the decimal-string signal array.
pub fn plonk_calldata(
    proof: &PlonkProof,
    public_signals: &[BN254Scalar],
) -> Result<(Vec<u8>, Vec<String>)> {
    Ok((plonk_proof_to_bytes(proof)?, format_public_signals(public_signals)))
}

/// Run the PLONK verifier over calldata. Fails closed: an undecodable
/// blob, out-of-range signals, a signal count mismatch, and failing
/// proofs all come back `false`.
pub fn plonk_verify_calldata(
    params: &PlonkVerifierParams,
    proof_bytes: &[u8],
    public_signals: &[String],
) -> bool {
    let proof = match plonk_proof_from_bytes(proof_bytes) {
        Ok(proof) => proof,
        Err(_) => return false,
    };
    let signals = match parse_public_signals(public_signals) {
        Ok(signals) => signals,
        Err(_) => return false,
    };
    let mut transcript = Transcript::new(b"Plonk");
    plonk::verify(&mut transcript, params, &signals, &proof).unwrap_or(false)
}
