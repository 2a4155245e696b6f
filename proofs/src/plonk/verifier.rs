use crate::errors::{Result, VerifierError};
use crate::plonk::indexer::PlonkVerifierParams;
use crate::plonk::prover::PlonkProof;
use crate::plonk::transcript::transcript_init_plonk;
use crate::poly_commit::kzg::KZGCommitment;
use crate::poly_commit::transcript::PolyComTranscript;
use crate::SnarkVerifier;
use merlin::Transcript;
use veil_algebra::bn254::BN254Scalar;
use veil_algebra::prelude::*;

/// The PLONK verifier.
#[derive(Debug, Default, Copy, Clone)]
pub struct PlonkVerifier;

/// The Lagrange basis polynomial of `omega^i` at `zeta`:
/// `omega^i * (zeta^n - 1) / (n * (zeta - omega^i))`. `None` when `zeta`
/// falls on the domain element itself.
fn lagrange_at(
    zeta: &BN254Scalar,
    z_h_eval: &BN254Scalar,
    omega_i: &BN254Scalar,
    n: usize,
) -> Option<BN254Scalar> {
    let denom = BN254Scalar::from(n as u64).mul(&zeta.sub(omega_i));
    let denom_inv = denom.inv().ok()?;
    Some(omega_i.mul(z_h_eval).mul(&denom_inv))
}

/// Verify a PLONK proof against the preprocessed key and the ordered
/// public signals. The transcript must be fresh. Any cryptographic
/// failure, including challenge points that collide with the domain,
/// yields `Ok(false)`; only a signal count mismatch is an error.
pub fn verify(
    transcript: &mut Transcript,
    params: &PlonkVerifierParams,
    public_signals: &[BN254Scalar],
    proof: &PlonkProof,
) -> Result<bool> {
    if public_signals.len() != params.num_public {
        return Err(VerifierError::SignalCountMismatch);
    }

    let n = params.n;
    transcript_init_plonk(transcript, params, public_signals);

    transcript.append_commitment(&proof.cm_a);
    transcript.append_commitment(&proof.cm_b);
    transcript.append_commitment(&proof.cm_c);
    let beta: BN254Scalar = transcript.get_challenge_field_elem(b"beta");
    let gamma: BN254Scalar = transcript.get_challenge_field_elem(b"gamma");

    transcript.append_commitment(&proof.cm_z);
    let alpha: BN254Scalar = transcript.get_challenge_field_elem(b"alpha");

    transcript.append_commitment(&proof.cm_t_lo);
    transcript.append_commitment(&proof.cm_t_mid);
    transcript.append_commitment(&proof.cm_t_hi);
    let zeta: BN254Scalar = transcript.get_challenge_field_elem(b"zeta");

    transcript.append_field_elem(&proof.a_eval);
    transcript.append_field_elem(&proof.b_eval);
    transcript.append_field_elem(&proof.c_eval);
    transcript.append_field_elem(&proof.s1_eval);
    transcript.append_field_elem(&proof.s2_eval);
    transcript.append_field_elem(&proof.z_omega_eval);
    let v: BN254Scalar = transcript.get_challenge_field_elem(b"v");

    transcript.append_commitment(&proof.cm_w_zeta);
    transcript.append_commitment(&proof.cm_w_zeta_omega);
    let u: BN254Scalar = transcript.get_challenge_field_elem(b"u");

    let z_h_eval = zeta.pow(&[n as u64]).sub(&BN254Scalar::one());

    // the public-input polynomial and the first Lagrange basis at zeta
    let mut omega_i = BN254Scalar::one();
    let mut pi_eval = BN254Scalar::zero();
    let mut l1_eval = BN254Scalar::zero();
    for (i, signal) in public_signals.iter().enumerate() {
        let l_i = match lagrange_at(&zeta, &z_h_eval, &omega_i, n) {
            Some(x) => x,
            None => return Ok(false),
        };
        if i == 0 {
            l1_eval = l_i;
        }
        pi_eval.sub_assign(&signal.mul(&l_i));
        omega_i.mul_assign(&params.root);
    }
    if public_signals.is_empty() {
        l1_eval = match lagrange_at(&zeta, &z_h_eval, &BN254Scalar::one(), n) {
            Some(x) => x,
            None => return Ok(false),
        };
    }

    let alpha_sq = alpha.mul(&alpha);
    let perm_evals_part = alpha
        .mul(&proof.a_eval.add(&beta.mul(&proof.s1_eval)).add(&gamma))
        .mul(&proof.b_eval.add(&beta.mul(&proof.s2_eval)).add(&gamma));

    // the constant part of the linearization polynomial
    let r0 = pi_eval
        .sub(&l1_eval.mul(&alpha_sq))
        .sub(
            &perm_evals_part
                .mul(&proof.c_eval.add(&gamma))
                .mul(&proof.z_omega_eval),
        );

    // the committed part of the linearization polynomial
    let z_factor = alpha
        .mul(&proof.a_eval.add(&beta.mul(&zeta)).add(&gamma))
        .mul(&proof.b_eval.add(&beta.mul(&params.k1).mul(&zeta)).add(&gamma))
        .mul(&proof.c_eval.add(&beta.mul(&params.k2).mul(&zeta)).add(&gamma))
        .add(&alpha_sq.mul(&l1_eval));

    let zeta_n_plus_2 = zeta.pow(&[(n + 2) as u64]);
    let quotient_comb = proof
        .cm_t_lo
        .0
        .add(&proof.cm_t_mid.0.mul(&zeta_n_plus_2))
        .add(&proof.cm_t_hi.0.mul(&zeta_n_plus_2.mul(&zeta_n_plus_2)));

    let cm_r = params
        .cm_q_m
        .0
        .mul(&proof.a_eval.mul(&proof.b_eval))
        .add(&params.cm_q_l.0.mul(&proof.a_eval))
        .add(&params.cm_q_r.0.mul(&proof.b_eval))
        .add(&params.cm_q_o.0.mul(&proof.c_eval))
        .add(&params.cm_q_c.0)
        .add(&proof.cm_z.0.mul(&z_factor))
        .sub(&params.cm_s3.0.mul(&perm_evals_part.mul(&beta).mul(&proof.z_omega_eval)))
        .sub(&quotient_comb.mul(&z_h_eval));

    // batch the openings at zeta with the challenge v
    let mut combined_cm = proof.cm_a.0;
    let mut combined_eval = proof.a_eval;
    let mut v_power = v;
    let cms = [
        proof.cm_b.0,
        proof.cm_c.0,
        params.cm_s1.0,
        params.cm_s2.0,
        cm_r,
    ];
    let evals = [
        proof.b_eval,
        proof.c_eval,
        proof.s1_eval,
        proof.s2_eval,
        r0.neg(),
    ];
    for (cm, eval) in cms.iter().zip(evals.iter()) {
        combined_cm.add_assign(&cm.mul(&v_power));
        combined_eval.add_assign(&eval.mul(&v_power));
        v_power.mul_assign(&v);
    }

    let zeta_omega = zeta.mul(&params.root);
    let ok = params
        .pcs
        .batch_verify_diff_points(
            &[KZGCommitment(combined_cm), proof.cm_z],
            &[zeta, zeta_omega],
            &[combined_eval, proof.z_omega_eval],
            &[proof.cm_w_zeta, proof.cm_w_zeta_omega],
            &u,
        )
        .is_ok();
    Ok(ok)
}

impl SnarkVerifier for PlonkVerifier {
    type VerifyingKey = PlonkVerifierParams;
    type Proof = PlonkProof;

    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        public_signals: &[BN254Scalar],
        proof: &Self::Proof,
    ) -> Result<bool> {
        let mut transcript = Transcript::new(b"Plonk");
        verify(&mut transcript, vk, public_signals, proof)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plonk::constraint_system::{multiplier_plonk_cs, multiplier_plonk_witness};
    use crate::plonk::indexer::{indexer, PlonkProverParams};
    use crate::plonk::prover::prove;
    use crate::poly_commit::kzg::KZGCommitmentSchemeBN254;

    fn fresh_transcript() -> Transcript {
        Transcript::new(b"Plonk")
    }

    fn multiplier_3_instance() -> (
        KZGCommitmentSchemeBN254,
        PlonkProverParams,
        PlonkProof,
        Vec<BN254Scalar>,
    ) {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(8, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        let witness = multiplier_plonk_witness(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        let publics = cs.public_signals(&witness);
        let proof = prove(&mut prng, &mut fresh_transcript(), &pcs, &params, &cs, &witness).unwrap();
        (pcs, params, proof, publics)
    }

    #[test]
    fn prove_and_verify() {
        let (_, params, proof, publics) = multiplier_3_instance();
        assert_eq!(publics, vec![BN254Scalar::from(24u32)]);
        assert!(verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof).unwrap());

        // verification is deterministic
        assert!(verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof).unwrap());
    }

    #[test]
    fn wrong_public_signal_rejected() {
        let (_, params, proof, _) = multiplier_3_instance();
        let wrong = vec![BN254Scalar::from(25u32)];
        assert!(!verify(&mut fresh_transcript(), &params.verifier_params, &wrong, &proof).unwrap());
    }

    #[test]
    fn tampered_proof_rejected() {
        let (_, params, mut proof, publics) = multiplier_3_instance();
        proof.a_eval.add_assign(&BN254Scalar::one());
        assert!(!verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof).unwrap());

        let (_, params, mut proof, publics) = multiplier_3_instance();
        proof.cm_z = proof.cm_a;
        assert!(!verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof).unwrap());
    }

    #[test]
    fn unsatisfied_witness_rejected_at_proving() {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(8, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        let mut witness = multiplier_plonk_witness(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        witness[1] = BN254Scalar::from(23u32);
        assert!(prove(&mut prng, &mut fresh_transcript(), &pcs, &params, &cs, &witness).is_err());
    }

    #[test]
    fn signal_count_mismatch_is_an_error() {
        let (_, params, proof, publics) = multiplier_3_instance();
        let mut too_many = publics.clone();
        too_many.push(BN254Scalar::one());
        assert_eq!(
            verify(&mut fresh_transcript(), &params.verifier_params, &too_many, &proof),
            Err(VerifierError::SignalCountMismatch)
        );
    }
}
