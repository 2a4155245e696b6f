use crate::errors::{Result, VerifierError};
use crate::groth16::r1cs::R1cs;
use crate::groth16::setup::{domain_size, Groth16ProvingKey};
use crate::poly_commit::field_polynomial::FpPolynomial;
use serde::{Deserialize, Serialize};
use veil_algebra::bn254::{BN254Scalar, BN254G1, BN254G2};
use veil_algebra::prelude::*;

/// A Groth16 proof, three group elements.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Groth16Proof {
    /// The first proof element, in G1.
    pub a: BN254G1,
    /// The second proof element, in G2.
    pub b: BN254G2,
    /// The third proof element, in G1.
    pub c: BN254G1,
}

/// Interpolate the three constraint-row polynomials of the assignment
/// over the domain, including the instance-map rows.
fn assignment_polynomials(
    cs: &R1cs,
    assignment: &[BN254Scalar],
    root: &BN254Scalar,
    n: usize,
) -> (
    FpPolynomial<BN254Scalar>,
    FpPolynomial<BN254Scalar>,
    FpPolynomial<BN254Scalar>,
) {
    let mut a_evals = vec![BN254Scalar::zero(); n];
    let mut b_evals = vec![BN254Scalar::zero(); n];
    let mut c_evals = vec![BN254Scalar::zero(); n];

    let (a_rows, b_rows, c_rows) = cs.rows();
    for (j, row) in a_rows.iter().enumerate() {
        a_evals[j] = R1cs::eval_lc(row, assignment);
    }
    for (j, row) in b_rows.iter().enumerate() {
        b_evals[j] = R1cs::eval_lc(row, assignment);
    }
    for (j, row) in c_rows.iter().enumerate() {
        c_evals[j] = R1cs::eval_lc(row, assignment);
    }

    // instance-map rows: the public wires evaluate against `x_i * 0 = 0`
    let m = cs.num_constraints();
    for i in 0..=cs.num_public {
        a_evals[m + i] = assignment[i];
    }

    (
        FpPolynomial::ffti(root, &a_evals, n),
        FpPolynomial::ffti(root, &b_evals, n),
        FpPolynomial::ffti(root, &c_evals, n),
    )
}

/// Produce a Groth16 proof for the assignment, with fresh blinding.
/// The assignment is laid out `[1, public…, private…]` and must satisfy
/// the constraint system.
pub fn prove<R: CryptoRng + RngCore>(
    pk: &Groth16ProvingKey,
    cs: &R1cs,
    assignment: &[BN254Scalar],
    prng: &mut R,
) -> Result<Groth16Proof> {
    if !cs.is_satisfied(assignment) {
        return Err(VerifierError::Proof);
    }

    let n = domain_size(cs);
    let root = BN254Scalar::get_root_of_unity(n as u64).ok_or(VerifierError::Setup)?;

    let (a_poly, b_poly, c_poly) = assignment_polynomials(cs, assignment, &root, n);

    // h = (A * B - C) / Z over the domain
    let z_poly = FpPolynomial::vanishing(n);
    let numerator = a_poly.mul(&b_poly).sub(&c_poly);
    let (h_poly, rem) = numerator.div_rem(&z_poly);
    if !rem.is_zero() {
        return Err(VerifierError::Proof);
    }

    let r = BN254Scalar::random(prng);
    let s = BN254Scalar::random(prng);

    let assignment_refs: Vec<&BN254Scalar> = assignment.iter().collect();
    let a_query_refs: Vec<&BN254G1> = pk.a_query.iter().collect();
    let b_g1_query_refs: Vec<&BN254G1> = pk.b_g1_query.iter().collect();
    let b_g2_query_refs: Vec<&BN254G2> = pk.b_g2_query.iter().collect();

    let g_a = pk
        .vk
        .alpha_g1
        .add(&BN254G1::multi_exp(&assignment_refs, &a_query_refs))
        .add(&pk.delta_g1.mul(&r));

    let g_b = pk
        .vk
        .beta_g2
        .add(&BN254G2::multi_exp(&assignment_refs, &b_g2_query_refs))
        .add(&pk.vk.delta_g2.mul(&s));

    let g_b_in_g1 = pk
        .beta_g1
        .add(&BN254G1::multi_exp(&assignment_refs, &b_g1_query_refs))
        .add(&pk.delta_g1.mul(&s));

    let private_refs: Vec<&BN254Scalar> = assignment[cs.num_public + 1..].iter().collect();
    let l_query_refs: Vec<&BN254G1> = pk.l_query.iter().collect();

    let h_coefs = h_poly.get_coefs_ref();
    let h_refs: Vec<&BN254Scalar> = h_coefs.iter().collect();
    let h_query_refs: Vec<&BN254G1> = pk.h_query[..h_refs.len()].iter().collect();

    let g_c = BN254G1::multi_exp(&private_refs, &l_query_refs)
        .add(&BN254G1::multi_exp(&h_refs, &h_query_refs))
        .add(&g_a.mul(&s))
        .add(&g_b_in_g1.mul(&r))
        .sub(&pk.delta_g1.mul(&r.mul(&s)));

    Ok(Groth16Proof {
        a: g_a,
        b: g_b,
        c: g_c,
    })
}
