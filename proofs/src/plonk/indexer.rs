use crate::errors::{Result, VerifierError};
use crate::plonk::constraint_system::PlonkConstraintSystem;
use crate::poly_commit::field_polynomial::FpPolynomial;
use crate::poly_commit::kzg::{KZGCommitment, KZGCommitmentSchemeBN254};
use serde::{Deserialize, Serialize};
use veil_algebra::bn254::{BN254Scalar, BN254G1};
use veil_algebra::prelude::*;

/// The first coset shift. `k1 * H` must be disjoint from the domain `H`.
pub const K1: u64 = 2;
/// The second coset shift. `k2 * H` must be disjoint from `H` and `k1 * H`.
pub const K2: u64 = 3;

/// The preprocessed verifier key: the selector and permutation commitments,
/// the domain, the coset shifts, and the verifier slice of the SRS.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct PlonkVerifierParams {
    /// Commitment to the left selector polynomial.
    pub cm_q_l: KZGCommitment<BN254G1>,
    /// Commitment to the right selector polynomial.
    pub cm_q_r: KZGCommitment<BN254G1>,
    /// Commitment to the output selector polynomial.
    pub cm_q_o: KZGCommitment<BN254G1>,
    /// Commitment to the multiplication selector polynomial.
    pub cm_q_m: KZGCommitment<BN254G1>,
    /// Commitment to the constant selector polynomial.
    pub cm_q_c: KZGCommitment<BN254G1>,
    /// Commitment to the first permutation polynomial.
    pub cm_s1: KZGCommitment<BN254G1>,
    /// Commitment to the second permutation polynomial.
    pub cm_s2: KZGCommitment<BN254G1>,
    /// Commitment to the third permutation polynomial.
    pub cm_s3: KZGCommitment<BN254G1>,
    /// The size of the evaluation domain.
    pub n: usize,
    /// A primitive n-th root of unity generating the domain.
    pub root: BN254Scalar,
    /// The first coset shift.
    pub k1: BN254Scalar,
    /// The second coset shift.
    pub k2: BN254Scalar,
    /// The number of public signals.
    pub num_public: usize,
    /// The verifier slice of the SRS.
    pub pcs: KZGCommitmentSchemeBN254,
}

/// The preprocessed prover key: the selector and permutation polynomials
/// in coefficient form, the padded wiring, and the verifier key.
#[derive(Clone, Debug)]
pub struct PlonkProverParams {
    pub(crate) q_l: FpPolynomial<BN254Scalar>,
    pub(crate) q_r: FpPolynomial<BN254Scalar>,
    pub(crate) q_o: FpPolynomial<BN254Scalar>,
    pub(crate) q_m: FpPolynomial<BN254Scalar>,
    pub(crate) q_c: FpPolynomial<BN254Scalar>,
    pub(crate) s1: FpPolynomial<BN254Scalar>,
    pub(crate) s2: FpPolynomial<BN254Scalar>,
    pub(crate) s3: FpPolynomial<BN254Scalar>,
    /// Permutation-image values per column, in evaluation form.
    pub(crate) sigma_evals: [Vec<BN254Scalar>; 3],
    /// Wiring padded with the zero variable up to the domain size.
    pub(crate) wiring: [Vec<usize>; 3],
    /// The verifier key.
    pub verifier_params: PlonkVerifierParams,
}

/// The field value standing for a wire position: `omega^i` in the first
/// column, `k1 * omega^i` in the second, `k2 * omega^i` in the third.
fn position_value(pos: usize, n: usize, root: &BN254Scalar) -> BN254Scalar {
    let omega_i = root.pow(&[(pos % n) as u64]);
    match pos / n {
        0 => omega_i,
        1 => BN254Scalar::from(K1).mul(&omega_i),
        _ => BN254Scalar::from(K2).mul(&omega_i),
    }
}

/// The copy-constraint permutation over the `3n` wire positions, laid out
/// column-major (`position = column * n + gate`). Positions of the same
/// variable form a cycle.
fn build_permutation(wiring: &[Vec<usize>; 3], num_vars: usize, n: usize) -> Vec<usize> {
    let mut positions_of = vec![Vec::new(); num_vars];
    for (col, wires) in wiring.iter().enumerate() {
        for (gate, var) in wires.iter().enumerate() {
            positions_of[*var].push(col * n + gate);
        }
    }

    let mut perm = vec![0usize; 3 * n];
    for positions in positions_of.iter() {
        for (i, pos) in positions.iter().enumerate() {
            perm[*pos] = positions[(i + 1) % positions.len()];
        }
    }
    perm
}

/// Preprocess a constraint system into the prover and verifier keys. The
/// SRS must cover degree `n + 2`, where `n` is the padded domain size.
pub fn indexer(
    cs: &PlonkConstraintSystem,
    pcs: &KZGCommitmentSchemeBN254,
) -> Result<PlonkProverParams> {
    // a one-gate circuit still needs a proper radix-2 domain
    let n = min_greater_equal_power_of_two(cs.num_gates().max(2) as u32) as usize;
    if pcs.max_degree() < n + 2 {
        return Err(VerifierError::Setup);
    }
    let root = BN254Scalar::get_root_of_unity(n as u64).ok_or(VerifierError::Setup)?;

    let mut wiring = cs.wiring.clone();
    for col in wiring.iter_mut() {
        col.resize(n, cs.zero_var());
    }

    let pad = |selector: &[BN254Scalar]| {
        let mut evals = selector.to_vec();
        evals.resize(n, BN254Scalar::zero());
        FpPolynomial::ffti(&root, &evals, n)
    };
    let q_l = pad(&cs.q_l);
    let q_r = pad(&cs.q_r);
    let q_o = pad(&cs.q_o);
    let q_m = pad(&cs.q_m);
    let q_c = pad(&cs.q_c);

    let perm = build_permutation(&wiring, cs.num_vars, n);
    let mut sigma_evals: [Vec<BN254Scalar>; 3] = [vec![], vec![], vec![]];
    for (col, evals) in sigma_evals.iter_mut().enumerate() {
        for gate in 0..n {
            evals.push(position_value(perm[col * n + gate], n, &root));
        }
    }
    let s1 = FpPolynomial::ffti(&root, &sigma_evals[0], n);
    let s2 = FpPolynomial::ffti(&root, &sigma_evals[1], n);
    let s3 = FpPolynomial::ffti(&root, &sigma_evals[2], n);

    let verifier_params = PlonkVerifierParams {
        cm_q_l: pcs.commit(&q_l)?,
        cm_q_r: pcs.commit(&q_r)?,
        cm_q_o: pcs.commit(&q_o)?,
        cm_q_m: pcs.commit(&q_m)?,
        cm_q_c: pcs.commit(&q_c)?,
        cm_s1: pcs.commit(&s1)?,
        cm_s2: pcs.commit(&s2)?,
        cm_s3: pcs.commit(&s3)?,
        n,
        root,
        k1: BN254Scalar::from(K1),
        k2: BN254Scalar::from(K2),
        num_public: cs.num_public,
        pcs: pcs.shrink_to_verifier_only(),
    };

    Ok(PlonkProverParams {
        q_l,
        q_r,
        q_o,
        q_m,
        q_c,
        s1,
        s2,
        s3,
        sigma_evals,
        wiring,
        verifier_params,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::plonk::constraint_system::multiplier_plonk_cs;

    #[test]
    fn multiplier_3_domain() {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(8, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        // 1 public gate + 2 multiplication gates, padded to 4
        assert_eq!(params.verifier_params.n, 4);
        assert_eq!(params.verifier_params.num_public, 1);
        assert_eq!(params.wiring[0].len(), 4);
        assert_eq!(
            params.verifier_params.root.pow(&[4]),
            BN254Scalar::one()
        );
        assert_ne!(params.verifier_params.root, BN254Scalar::one());
    }

    #[test]
    fn srs_too_small_is_rejected() {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(3, &mut prng);
        assert!(indexer(&cs, &pcs).is_err());
    }

    #[test]
    fn permutation_cycles_variables() {
        let wiring: [Vec<usize>; 3] = [vec![1, 2], vec![2, 0], vec![0, 1]];
        let perm = build_permutation(&wiring, 3, 2);

        // variable 1 sits at positions 0 and 5, variable 2 at 1 and 2,
        // variable 0 at 3 and 4
        assert_eq!(perm[0], 5);
        assert_eq!(perm[5], 0);
        assert_eq!(perm[1], 2);
        assert_eq!(perm[2], 1);
        assert_eq!(perm[3], 4);
        assert_eq!(perm[4], 3);
    }

    #[test]
    fn sigma_values_are_permuted_positions() {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(2);
        let pcs = KZGCommitmentSchemeBN254::new(8, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        let n = params.verifier_params.n;
        let root = params.verifier_params.root;

        // every sigma value is a coset element, and the multiset of sigma
        // values equals the multiset of position values
        let mut expected: Vec<BN254Scalar> =
            (0..3 * n).map(|p| position_value(p, n, &root)).collect();
        let mut got: Vec<BN254Scalar> = params
            .sigma_evals
            .iter()
            .flat_map(|col| col.iter().copied())
            .collect();
        let key = |x: &BN254Scalar| x.to_bytes();
        expected.sort_by_key(key);
        got.sort_by_key(key);
        assert_eq!(expected, got);
    }
}
