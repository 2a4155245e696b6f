use crate::poly_commit::{
    errors::{CommitmentError, Result},
    field_polynomial::FpPolynomial,
};
use serde::{Deserialize, Serialize};
use veil_algebra::bn254::BN254PairingEngine;
use veil_algebra::prelude::*;

/// A commitment to a polynomial, a single group element.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

/// The trait for appending commitments to a transcript.
pub trait ToBytes {
    /// Convert to bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

impl<G: Group> ToBytes for KZGCommitment<G> {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }
}

/// The KZG polynomial commitment scheme over a pairing: the powers of a
/// secret scalar in G1, and its first power in G2.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// The powers of tau in G1.
    pub public_parameter_group_1: Vec<P::G1>,
    /// The generator and tau times the generator in G2.
    pub public_parameter_group_2: Vec<P::G2>,
}

/// The KZG commitment scheme over BN254.
pub type KZGCommitmentSchemeBN254 = KZGCommitmentScheme<BN254PairingEngine>;

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of the KZG polynomial commitment scheme with a
    /// freshly sampled secret. Test-grade setup; real deployments load the
    /// parameters of an external ceremony instead.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::new();
        let mut elem_g1 = P::G1::get_base();
        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let elem_g2 = P::G2::get_base();
        let public_parameter_group_2 = vec![elem_g2, elem_g2.mul(&s)];

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }

    /// Return the maximum degree of a committable polynomial.
    pub fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len() - 1
    }

    /// Commit to a polynomial.
    pub fn commit(&self, polynomial: &FpPolynomial<P::ScalarField>) -> Result<KZGCommitment<P::G1>> {
        let coefs = polynomial.get_coefs_ref();
        let degree = polynomial.degree();

        if degree + 1 > self.public_parameter_group_1.len() {
            return Err(CommitmentError::DegreeTooLarge);
        }

        let coefs_ref: Vec<&P::ScalarField> = coefs.iter().collect();
        let params_ref: Vec<&P::G1> = self.public_parameter_group_1[0..degree + 1].iter().collect();

        let commitment = P::G1::multi_exp(&coefs_ref[..], &params_ref[..]);
        Ok(KZGCommitment(commitment))
    }

    /// Evaluate the polynomial and produce a proof of the evaluation: a
    /// commitment to the witness polynomial `(f(X) - f(x)) / (X - x)`.
    pub fn prove(
        &self,
        poly: &FpPolynomial<P::ScalarField>,
        x: &P::ScalarField,
        max_degree: usize,
    ) -> Result<KZGCommitment<P::G1>> {
        if poly.degree() > max_degree {
            return Err(CommitmentError::DegreeTooLarge);
        }

        let eval = poly.eval(x);
        let nominator = poly.sub(&FpPolynomial::from_coefs(vec![eval]));

        // X - x
        let vanishing_poly = FpPolynomial::from_coefs(vec![x.neg(), P::ScalarField::one()]);
        let (q_poly, r_poly) = nominator.div_rem(&vanishing_poly);

        if !r_poly.is_zero() {
            return Err(CommitmentError::InvalidOpening);
        }

        self.commit(&q_poly)
    }

    /// Verify an evaluation proof, that the polynomial behind `cm`
    /// evaluates to `eval` at `point`.
    pub fn verify(
        &self,
        cm: &KZGCommitment<P::G1>,
        point: &P::ScalarField,
        eval: &P::ScalarField,
        proof: &KZGCommitment<P::G1>,
    ) -> Result<()> {
        let g1_0 = self.public_parameter_group_1[0];
        let g2_0 = self.public_parameter_group_2[0];
        let g2_1 = self.public_parameter_group_2[1];

        // [tau - point]_2
        let x_minus_point_g2 = g2_1.sub(&g2_0.mul(point));

        let left = if eval.is_zero() {
            P::pairing(&cm.0, &g2_0)
        } else {
            P::pairing(&cm.0.sub(&g1_0.mul(eval)), &g2_0)
        };
        let right = P::pairing(&proof.0, &x_minus_point_g2);

        if left == right {
            Ok(())
        } else {
            Err(CommitmentError::InvalidOpening)
        }
    }

    /// Verify a batch of evaluation proofs at pairwise-distinct points with
    /// a single pairing product, combined by the powers of `challenge`.
    pub fn batch_verify_diff_points(
        &self,
        cm_vec: &[KZGCommitment<P::G1>],
        point_vec: &[P::ScalarField],
        eval_vec: &[P::ScalarField],
        proofs: &[KZGCommitment<P::G1>],
        challenge: &P::ScalarField,
    ) -> Result<()> {
        assert!(!proofs.is_empty());
        assert_eq!(proofs.len(), point_vec.len());
        assert_eq!(proofs.len(), eval_vec.len());
        assert_eq!(proofs.len(), cm_vec.len());

        let g1_0 = self.public_parameter_group_1[0];
        let g2_0 = self.public_parameter_group_2[0];
        let g2_1 = self.public_parameter_group_2[1];

        let mut left_first = proofs[0].0;
        let mut right_first = proofs[0].0.mul(&point_vec[0]);
        let mut right_val = eval_vec[0];
        let mut right_comm = cm_vec[0].0;

        let mut cur_challenge = *challenge;
        for i in 1..proofs.len() {
            let scaled_proof = proofs[i].0.mul(&cur_challenge);

            left_first.add_assign(&scaled_proof);
            right_first.add_assign(&scaled_proof.mul(&point_vec[i]));
            right_val.add_assign(&eval_vec[i].mul(&cur_challenge));
            right_comm.add_assign(&cm_vec[i].0.mul(&cur_challenge));

            cur_challenge.mul_assign(challenge);
        }
        right_first.sub_assign(&g1_0.mul(&right_val));
        right_first.add_assign(&right_comm);

        let pairing_eval =
            P::product_of_pairings(&[left_first, right_first.neg()], &[g2_1, g2_0]);

        if pairing_eval == P::Gt::get_identity() {
            Ok(())
        } else {
            Err(CommitmentError::InvalidOpening)
        }
    }

    /// Keep only the parameters the verifier needs.
    pub fn shrink_to_verifier_only(&self) -> Self {
        Self {
            public_parameter_group_1: vec![self.public_parameter_group_1[0]],
            public_parameter_group_2: vec![
                self.public_parameter_group_2[0],
                self.public_parameter_group_2[1],
            ],
        }
    }

    /// Serialize the parameters to unchecked bytes.
    pub fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        let len_1 = self.public_parameter_group_1.len() as u32;
        let len_2 = self.public_parameter_group_2.len() as u32;
        bytes.extend(len_1.to_le_bytes());
        bytes.extend(len_2.to_le_bytes());

        for i in &self.public_parameter_group_1 {
            bytes.extend(i.to_unchecked_bytes());
        }
        for i in &self.public_parameter_group_2 {
            bytes.extend(i.to_unchecked_bytes());
        }
        bytes
    }

    /// Deserialize the parameters from unchecked bytes.
    pub fn from_unchecked_bytes(bytes: &[u8]) -> core::result::Result<Self, AlgebraError> {
        if bytes.len() < 8 {
            return Err(CurveError::InvalidEncoding.into());
        }
        let mut len_1_bytes = [0u8; 4];
        let mut len_2_bytes = [0u8; 4];
        len_1_bytes.copy_from_slice(&bytes[0..4]);
        len_2_bytes.copy_from_slice(&bytes[4..8]);
        let len_1 = u32::from_le_bytes(len_1_bytes) as usize;
        let len_2 = u32::from_le_bytes(len_2_bytes) as usize;
        let n_1 = P::G1::unchecked_size();
        let n_2 = P::G2::unchecked_size();

        if bytes.len() < 8 + n_1 * len_1 + n_2 * len_2 {
            return Err(CurveError::InvalidEncoding.into());
        }

        let bytes_1 = &bytes[8..];
        let bytes_2 = &bytes[8 + (n_1 * len_1)..];
        let mut p1 = vec![];
        let mut p2 = vec![];

        for i in 0..len_1 {
            p1.push(P::G1::from_unchecked_bytes(
                &bytes_1[n_1 * i..n_1 * (i + 1)],
            )?);
        }
        for i in 0..len_2 {
            p2.push(P::G2::from_unchecked_bytes(
                &bytes_2[n_2 * i..n_2 * (i + 1)],
            )?);
        }

        Ok(Self {
            public_parameter_group_1: p1,
            public_parameter_group_2: p2,
        })
    }
}

#[cfg(test)]
mod tests_kzg_impl {
    use crate::poly_commit::{
        field_polynomial::FpPolynomial,
        kzg::{KZGCommitmentScheme, KZGCommitmentSchemeBN254},
    };
    use veil_algebra::bn254::{BN254PairingEngine, BN254Scalar, BN254G1};
    use veil_algebra::prelude::*;

    fn check_public_parameters_generation<P: Pairing>() {
        let param_size = 5;
        let mut prng = test_rng();
        let kzg_scheme = KZGCommitmentScheme::<P>::new(param_size, &mut prng);
        let g2_power1 = kzg_scheme.public_parameter_group_2[1];

        // Check that the G1 powers are consecutive powers of the same scalar
        for i in 0..param_size - 1 {
            let elem_first = kzg_scheme.public_parameter_group_1[i];
            let elem_next = kzg_scheme.public_parameter_group_1[i + 1];
            let target = P::pairing(&elem_next, &P::G2::get_base());
            let target_recomputed = P::pairing(&elem_first, &g2_power1);
            assert_eq!(target, target_recomputed);
        }
    }

    #[test]
    fn test_public_parameters() {
        check_public_parameters_generation::<BN254PairingEngine>();
    }

    #[test]
    fn test_generation_of_crs() {
        let n = 1 << 5;
        let mut prng = test_rng();
        let kzg_scheme = KZGCommitmentSchemeBN254::new(n, &mut prng);
        assert_eq!(kzg_scheme.public_parameter_group_1.len(), n + 1);
        assert_eq!(kzg_scheme.public_parameter_group_2.len(), 2);
    }

    #[test]
    fn test_commit() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(10, &mut prng);
        let one = BN254Scalar::one();
        let two = one.add(&one);
        let three = two.add(&one);
        let six = three.add(&three);

        let poly = FpPolynomial::from_coefs(vec![two, three, six]);
        let commitment = pcs.commit(&poly).unwrap();

        // Doing the multiexp by hand
        let mut expected = BN254G1::get_identity();
        for (i, coef) in poly.get_coefs_ref().iter().enumerate() {
            let g_i = pcs.public_parameter_group_1[i];
            expected = expected.add(&g_i.mul(coef));
        }
        assert_eq!(expected, commitment.0);

        // Degree overflow must be rejected
        let too_big = FpPolynomial::from_coefs(vec![one; 12]);
        assert!(pcs.commit(&too_big).is_err());
    }

    #[test]
    fn test_eval_proof() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(10, &mut prng);
        let one = BN254Scalar::one();
        let two = one.add(&one);
        let four = two.add(&two);
        let seven = four.add(&two).add(&one);
        let poly = FpPolynomial::from_coefs(vec![one, two, four]);
        let point = one;
        let max_degree = poly.degree();

        let commitment = pcs.commit(&poly).unwrap();

        let wrong_max_degree = 1;
        assert!(pcs.prove(&poly, &point, wrong_max_degree).is_err());

        let proof = pcs.prove(&poly, &point, max_degree).unwrap();

        // poly(1) = 1 + 2 + 4 = 7
        assert!(pcs.verify(&commitment, &point, &seven, &proof).is_ok());

        let shrunk = pcs.shrink_to_verifier_only();
        assert!(shrunk.verify(&commitment, &point, &seven, &proof).is_ok());

        let wrong_eval = one;
        assert!(pcs.verify(&commitment, &point, &wrong_eval, &proof).is_err());
    }

    #[test]
    fn test_batch_verify_diff_points() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(10, &mut prng);

        let poly1 = FpPolynomial::<BN254Scalar>::random(&mut prng, 6);
        let poly2 = FpPolynomial::<BN254Scalar>::random(&mut prng, 4);

        let point1 = BN254Scalar::random(&mut prng);
        let point2 = BN254Scalar::random(&mut prng);
        let eval1 = poly1.eval(&point1);
        let eval2 = poly2.eval(&point2);

        let cm1 = pcs.commit(&poly1).unwrap();
        let cm2 = pcs.commit(&poly2).unwrap();
        let proof1 = pcs.prove(&poly1, &point1, 10).unwrap();
        let proof2 = pcs.prove(&poly2, &point2, 10).unwrap();

        let challenge = BN254Scalar::random(&mut prng);
        assert!(pcs
            .batch_verify_diff_points(
                &[cm1, cm2],
                &[point1, point2],
                &[eval1, eval2],
                &[proof1, proof2],
                &challenge,
            )
            .is_ok());

        let wrong_eval = eval2.add(&BN254Scalar::one());
        assert!(pcs
            .batch_verify_diff_points(
                &[cm1, cm2],
                &[point1, point2],
                &[eval1, wrong_eval],
                &[proof1, proof2],
                &challenge,
            )
            .is_err());
    }

    #[test]
    fn test_unchecked_bytes_roundtrip() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(8, &mut prng);
        let bytes = pcs.to_unchecked_bytes();
        let recovered = KZGCommitmentSchemeBN254::from_unchecked_bytes(&bytes).unwrap();
        assert_eq!(pcs, recovered);

        assert!(KZGCommitmentSchemeBN254::from_unchecked_bytes(&bytes[..4]).is_err());
    }
}
