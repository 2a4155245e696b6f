use crate::errors::{Result, VerifierError};
use crate::plonk::constraint_system::PlonkConstraintSystem;
use crate::plonk::indexer::PlonkProverParams;
use crate::plonk::transcript::transcript_init_plonk;
use crate::poly_commit::field_polynomial::FpPolynomial;
use crate::poly_commit::kzg::{KZGCommitment, KZGCommitmentSchemeBN254};
use crate::poly_commit::transcript::PolyComTranscript;
use merlin::Transcript;
use serde::{Deserialize, Serialize};
use veil_algebra::bn254::{BN254Scalar, BN254G1};
use veil_algebra::prelude::*;

/// A PLONK proof: seven commitments, six evaluations, and the two opening
/// proofs of the batched KZG check.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct PlonkProof {
    /// Commitment to the left wire polynomial.
    pub cm_a: KZGCommitment<BN254G1>,
    /// Commitment to the right wire polynomial.
    pub cm_b: KZGCommitment<BN254G1>,
    /// Commitment to the output wire polynomial.
    pub cm_c: KZGCommitment<BN254G1>,
    /// Commitment to the permutation accumulator polynomial.
    pub cm_z: KZGCommitment<BN254G1>,
    /// Commitment to the low chunk of the quotient polynomial.
    pub cm_t_lo: KZGCommitment<BN254G1>,
    /// Commitment to the middle chunk of the quotient polynomial.
    pub cm_t_mid: KZGCommitment<BN254G1>,
    /// Commitment to the high chunk of the quotient polynomial.
    pub cm_t_hi: KZGCommitment<BN254G1>,
    /// The left wire polynomial at `zeta`.
    pub a_eval: BN254Scalar,
    /// The right wire polynomial at `zeta`.
    pub b_eval: BN254Scalar,
    /// The output wire polynomial at `zeta`.
    pub c_eval: BN254Scalar,
    /// The first permutation polynomial at `zeta`.
    pub s1_eval: BN254Scalar,
    /// The second permutation polynomial at `zeta`.
    pub s2_eval: BN254Scalar,
    /// The accumulator polynomial at `zeta * omega`.
    pub z_omega_eval: BN254Scalar,
    /// Opening proof of the batched polynomial at `zeta`.
    pub cm_w_zeta: KZGCommitment<BN254G1>,
    /// Opening proof of the accumulator at `zeta * omega`.
    pub cm_w_zeta_omega: KZGCommitment<BN254G1>,
}

/// The first Lagrange basis polynomial of the domain.
fn first_lagrange_poly(root: &BN254Scalar, n: usize) -> FpPolynomial<BN254Scalar> {
    let mut evals = vec![BN254Scalar::zero(); n];
    evals[0] = BN254Scalar::one();
    FpPolynomial::ffti(root, &evals, n)
}

/// Produce a PLONK proof for the witness, with fresh blinding. The witness
/// is indexed by variable and must satisfy the constraint system behind
/// `params`. The transcript must be fresh; the prover binds the instance
/// itself.
pub fn prove<R: CryptoRng + RngCore>(
    prng: &mut R,
    transcript: &mut Transcript,
    pcs: &KZGCommitmentSchemeBN254,
    params: &PlonkProverParams,
    cs: &PlonkConstraintSystem,
    witness: &[BN254Scalar],
) -> Result<PlonkProof> {
    if !cs.is_satisfied(witness) {
        return Err(VerifierError::Proof);
    }

    let vp = &params.verifier_params;
    let n = vp.n;
    let root = vp.root;
    if cs.num_gates() > n {
        return Err(VerifierError::Proof);
    }

    let public_signals = cs.public_signals(witness);
    transcript_init_plonk(transcript, vp, &public_signals);

    let z_h = FpPolynomial::vanishing(n);
    let blind = |prng: &mut R, coefs: usize| {
        FpPolynomial::from_coefs((0..coefs).map(|_| BN254Scalar::random(prng)).collect())
            .mul(&z_h)
    };

    // round 1: the blinded wire polynomials
    let wire_evals: Vec<Vec<BN254Scalar>> = params
        .wiring
        .iter()
        .map(|col| col.iter().map(|var| witness[*var]).collect())
        .collect();
    let a_poly = FpPolynomial::ffti(&root, &wire_evals[0], n).add(&blind(prng, 2));
    let b_poly = FpPolynomial::ffti(&root, &wire_evals[1], n).add(&blind(prng, 2));
    let c_poly = FpPolynomial::ffti(&root, &wire_evals[2], n).add(&blind(prng, 2));

    let cm_a = pcs.commit(&a_poly)?;
    let cm_b = pcs.commit(&b_poly)?;
    let cm_c = pcs.commit(&c_poly)?;
    transcript.append_commitment(&cm_a);
    transcript.append_commitment(&cm_b);
    transcript.append_commitment(&cm_c);

    let beta: BN254Scalar = transcript.get_challenge_field_elem(b"beta");
    let gamma: BN254Scalar = transcript.get_challenge_field_elem(b"gamma");

    // round 2: the permutation accumulator
    let shifts = [BN254Scalar::one(), vp.k1, vp.k2];
    let mut z_evals = Vec::with_capacity(n);
    let mut acc = BN254Scalar::one();
    z_evals.push(acc);
    let mut omega_i = BN254Scalar::one();
    for i in 0..n - 1 {
        let mut numer = BN254Scalar::one();
        let mut denom = BN254Scalar::one();
        for col in 0..3 {
            let w = wire_evals[col][i];
            numer.mul_assign(&w.add(&beta.mul(&shifts[col]).mul(&omega_i)).add(&gamma));
            denom.mul_assign(&w.add(&beta.mul(&params.sigma_evals[col][i])).add(&gamma));
        }
        let denom_inv = denom.inv().map_err(|_| VerifierError::Proof)?;
        acc = acc.mul(&numer).mul(&denom_inv);
        z_evals.push(acc);
        omega_i.mul_assign(&root);
    }
    let z_poly = FpPolynomial::ffti(&root, &z_evals, n).add(&blind(prng, 3));

    let cm_z = pcs.commit(&z_poly)?;
    transcript.append_commitment(&cm_z);
    let alpha: BN254Scalar = transcript.get_challenge_field_elem(b"alpha");

    // round 3: the quotient polynomial
    let mut pi_evals = vec![BN254Scalar::zero(); n];
    for (i, signal) in public_signals.iter().enumerate() {
        pi_evals[i] = signal.neg();
    }
    let pi_poly = FpPolynomial::ffti(&root, &pi_evals, n);

    let gate_poly = params
        .q_l
        .mul(&a_poly)
        .add(&params.q_r.mul(&b_poly))
        .add(&params.q_o.mul(&c_poly))
        .add(&params.q_m.mul(&a_poly.mul(&b_poly)))
        .add(&params.q_c)
        .add(&pi_poly);

    let lin = |poly: &FpPolynomial<BN254Scalar>, shift: &BN254Scalar| {
        poly.add(&FpPolynomial::from_coefs(vec![gamma, beta.mul(shift)]))
    };
    let sigma_lin = |poly: &FpPolynomial<BN254Scalar>, s: &FpPolynomial<BN254Scalar>| {
        poly.add(&s.mul_scalar(&beta))
            .add(&FpPolynomial::from_coefs(vec![gamma]))
    };
    let z_omega_poly = z_poly.mul_var(&root);
    let perm_poly = lin(&a_poly, &shifts[0])
        .mul(&lin(&b_poly, &shifts[1]))
        .mul(&lin(&c_poly, &shifts[2]))
        .mul(&z_poly)
        .sub(
            &sigma_lin(&a_poly, &params.s1)
                .mul(&sigma_lin(&b_poly, &params.s2))
                .mul(&sigma_lin(&c_poly, &params.s3))
                .mul(&z_omega_poly),
        );

    let l1_poly = first_lagrange_poly(&root, n);
    let alpha_sq = alpha.mul(&alpha);
    let t_num = gate_poly
        .add(&perm_poly.mul_scalar(&alpha))
        .add(
            &z_poly
                .sub(&FpPolynomial::one())
                .mul(&l1_poly)
                .mul_scalar(&alpha_sq),
        );
    let (t_poly, rem) = t_num.div_rem(&z_h);
    if !rem.is_zero() {
        return Err(VerifierError::Proof);
    }

    // split at the n + 2 boundaries, with cross-term blinding
    let chunk = n + 2;
    let mut t_coefs = t_poly.coefs.clone();
    t_coefs.resize(3 * chunk, BN254Scalar::zero());
    let b10 = BN254Scalar::random(prng);
    let b11 = BN254Scalar::random(prng);

    let mut lo_coefs = t_coefs[..chunk].to_vec();
    lo_coefs.push(b10);
    let mut mid_coefs = t_coefs[chunk..2 * chunk].to_vec();
    mid_coefs[0].sub_assign(&b10);
    mid_coefs.push(b11);
    let mut hi_coefs = t_coefs[2 * chunk..].to_vec();
    hi_coefs[0].sub_assign(&b11);

    let t_lo = FpPolynomial::from_coefs(lo_coefs);
    let t_mid = FpPolynomial::from_coefs(mid_coefs);
    let t_hi = FpPolynomial::from_coefs(hi_coefs);

    let cm_t_lo = pcs.commit(&t_lo)?;
    let cm_t_mid = pcs.commit(&t_mid)?;
    let cm_t_hi = pcs.commit(&t_hi)?;
    transcript.append_commitment(&cm_t_lo);
    transcript.append_commitment(&cm_t_mid);
    transcript.append_commitment(&cm_t_hi);

    let zeta: BN254Scalar = transcript.get_challenge_field_elem(b"zeta");

    // round 4: the evaluations
    let a_eval = a_poly.eval(&zeta);
    let b_eval = b_poly.eval(&zeta);
    let c_eval = c_poly.eval(&zeta);
    let s1_eval = params.s1.eval(&zeta);
    let s2_eval = params.s2.eval(&zeta);
    let zeta_omega = zeta.mul(&root);
    let z_omega_eval = z_poly.eval(&zeta_omega);

    transcript.append_field_elem(&a_eval);
    transcript.append_field_elem(&b_eval);
    transcript.append_field_elem(&c_eval);
    transcript.append_field_elem(&s1_eval);
    transcript.append_field_elem(&s2_eval);
    transcript.append_field_elem(&z_omega_eval);

    let v: BN254Scalar = transcript.get_challenge_field_elem(b"v");

    // round 5: the linearization polynomial and the opening proofs
    let selector_part = params
        .q_m
        .mul_scalar(&a_eval.mul(&b_eval))
        .add(&params.q_l.mul_scalar(&a_eval))
        .add(&params.q_r.mul_scalar(&b_eval))
        .add(&params.q_o.mul_scalar(&c_eval))
        .add(&params.q_c);

    let z_factor = alpha
        .mul(&a_eval.add(&beta.mul(&zeta)).add(&gamma))
        .mul(&b_eval.add(&beta.mul(&vp.k1).mul(&zeta)).add(&gamma))
        .mul(&c_eval.add(&beta.mul(&vp.k2).mul(&zeta)).add(&gamma));
    let l1_at_zeta = l1_poly.eval(&zeta);
    let s3_factor = alpha
        .mul(&beta)
        .mul(&z_omega_eval)
        .mul(&a_eval.add(&beta.mul(&s1_eval)).add(&gamma))
        .mul(&b_eval.add(&beta.mul(&s2_eval)).add(&gamma));

    let zeta_n_plus_2 = zeta.pow(&[(n + 2) as u64]);
    let z_h_at_zeta = zeta.pow(&[n as u64]).sub(&BN254Scalar::one());
    let quotient_part = t_lo
        .add(&t_mid.mul_scalar(&zeta_n_plus_2))
        .add(&t_hi.mul_scalar(&zeta_n_plus_2.mul(&zeta_n_plus_2)))
        .mul_scalar(&z_h_at_zeta);

    let r_poly = selector_part
        .add(&z_poly.mul_scalar(&z_factor.add(&alpha_sq.mul(&l1_at_zeta))))
        .sub(&params.s3.mul_scalar(&s3_factor))
        .sub(&quotient_part);

    let mut combined_poly = a_poly.clone();
    let mut v_power = v;
    for poly in [&b_poly, &c_poly, &params.s1, &params.s2, &r_poly] {
        combined_poly.add_assign(&poly.mul_scalar(&v_power));
        v_power.mul_assign(&v);
    }

    let cm_w_zeta = pcs.prove(&combined_poly, &zeta, pcs.max_degree())?;
    let cm_w_zeta_omega = pcs.prove(&z_poly, &zeta_omega, pcs.max_degree())?;

    Ok(PlonkProof {
        cm_a,
        cm_b,
        cm_c,
        cm_z,
        cm_t_lo,
        cm_t_mid,
        cm_t_hi,
        a_eval,
        b_eval,
        c_eval,
        s1_eval,
        s2_eval,
        z_omega_eval,
        cm_w_zeta,
        cm_w_zeta_omega,
    })
}
