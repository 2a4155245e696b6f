/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod fq;
pub use fq::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

/// A convenient macro to initialize a field element over the BN254 curve.
#[macro_export]
macro_rules! new_bn254_fr {
    ($c0:expr) => {{
        let (is_positive, limbs) = ark_ff::ark_ff_macros::to_sign_and_limbs!($c0);
        BN254Scalar::new(is_positive, &limbs)
    }};
}

#[cfg(test)]
mod bn254_groups_test {
    use crate::traits::Group;
    use crate::{
        bn254::{BN254Fq, BN254Gt, BN254PairingEngine, BN254Scalar, BN254G1, BN254G2},
        prelude::*,
        traits::{
            group_tests::{test_scalar_operations, test_scalar_serialization, test_to_radix},
            Pairing,
        },
    };
    use ark_std::str::FromStr;

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
        test_scalar_operations::<BN254Fq>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BN254Scalar>();
        test_scalar_serialization::<BN254Fq>();
    }

    #[test]
    fn scalar_to_radix() {
        test_to_radix::<BN254Scalar>();
        test_to_radix::<BN254Fq>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BN254Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let expected_small_value_bytes: [u8; 32] = [
            115, 135, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(small_value_bytes, expected_small_value_bytes);

        let small_value_from_bytes = BN254Scalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);
    }

    #[test]
    fn scalar_from_decimal_string() {
        let a = BN254Scalar::from_str("42").unwrap();
        assert_eq!(a, BN254Scalar::from(42u32));

        assert!(BN254Scalar::from_str("not a number").is_err());
    }

    #[test]
    fn hard_coded_group_elements() {
        let base_gt = BN254Gt::get_base();
        let expected_base = BN254PairingEngine::pairing(&BN254G1::get_base(), &BN254G2::get_base());
        assert_eq!(base_gt, expected_base);
    }

    #[test]
    fn bilinear_properties() {
        let identity_g1 = BN254G1::get_identity();
        let identity_g2 = BN254G2::get_identity();
        let identity_gt_computed = BN254PairingEngine::pairing(&identity_g1, &identity_g2);
        let identity_gt = BN254Gt::get_identity();
        assert_eq!(identity_gt, identity_gt_computed);

        let mut prng = test_rng();

        let s1 = BN254Scalar::from(50 + prng.next_u32() % 50);
        let s2 = BN254Scalar::from(50 + prng.next_u32() % 50);

        let base_g1 = BN254G1::get_base();
        let base_g2 = BN254G2::get_base();

        let s1_base_g1 = base_g1.mul(&s1);
        let s2_base_g2 = base_g2.mul(&s2);

        let gt_mapped_element = BN254PairingEngine::pairing(&s1_base_g1, &s2_base_g2);

        let gt_base_computed = BN254PairingEngine::pairing(&base_g1, &base_g2);
        let base_gt = BN254Gt::get_base();
        assert_eq!(base_gt, gt_base_computed);

        assert_eq!(
            gt_mapped_element,
            BN254PairingEngine::pairing(&base_g1, &s2_base_g2).mul(&s1)
        );
        assert_eq!(
            gt_mapped_element,
            BN254PairingEngine::pairing(&s1_base_g1, &base_g2).mul(&s2)
        );

        assert_eq!(gt_mapped_element, gt_base_computed.mul(&s1).mul(&s2));
        assert_eq!(gt_mapped_element, gt_base_computed.mul(&s2).mul(&s1));
    }

    #[test]
    fn product_of_pairings_matches_single_pairings() {
        let mut prng = test_rng();

        let a1 = BN254G1::random(&mut prng);
        let a2 = BN254G1::random(&mut prng);
        let b1 = BN254G2::random(&mut prng);
        let b2 = BN254G2::random(&mut prng);

        let product = BN254PairingEngine::product_of_pairings(&[a1, a2], &[b1, b2]);
        let expected = BN254PairingEngine::pairing(&a1, &b1)
            .add(&BN254PairingEngine::pairing(&a2, &b2));
        assert_eq!(product, expected);
    }

    #[test]
    fn g1_affine_coordinates_roundtrip() {
        let mut prng = test_rng();

        let p = BN254G1::random(&mut prng);
        let q = BN254G1::from_xy(p.get_x(), p.get_y()).unwrap();
        assert_eq!(p, q);

        let identity = BN254G1::from_xy(BN254Fq::zero(), BN254Fq::zero()).unwrap();
        assert_eq!(identity, BN254G1::get_identity());

        // (1, 1) is not on the curve y^2 = x^3 + 3
        assert!(BN254G1::from_xy(BN254Fq::one(), BN254Fq::one()).is_err());
    }

    #[test]
    fn g2_affine_coordinates_roundtrip() {
        let mut prng = test_rng();

        let p = BN254G2::random(&mut prng);
        let (x0, x1) = p.get_x();
        let (y0, y1) = p.get_y();
        let q = BN254G2::from_xy(x0, x1, y0, y1).unwrap();
        assert_eq!(p, q);

        let identity = BN254G2::from_xy(
            BN254Fq::zero(),
            BN254Fq::zero(),
            BN254Fq::zero(),
            BN254Fq::zero(),
        )
        .unwrap();
        assert_eq!(identity, BN254G2::get_identity());

        assert!(BN254G2::from_xy(
            BN254Fq::one(),
            BN254Fq::one(),
            BN254Fq::one(),
            BN254Fq::one()
        )
        .is_err());
    }

    #[test]
    fn test_serialization_of_points() {
        let mut prng = test_rng();

        let g1 = BN254G1::random(&mut prng);
        let g1_bytes = g1.to_compressed_bytes();
        let g1_recovered = BN254G1::from_compressed_bytes(&g1_bytes).unwrap();
        assert_eq!(g1, g1_recovered);

        let g2 = BN254G2::random(&mut prng);
        let g2_bytes = g2.to_compressed_bytes();
        let g2_recovered = BN254G2::from_compressed_bytes(&g2_bytes).unwrap();
        assert_eq!(g2, g2_recovered);

        let gt = BN254Gt::random(&mut prng);
        let gt_bytes = gt.to_compressed_bytes();
        let gt_recovered = BN254Gt::from_compressed_bytes(&gt_bytes).unwrap();
        assert_eq!(gt, gt_recovered);
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let mut prng = test_rng();

        let g1 = BN254G1::random(&mut prng);
        let text = serde_json::to_string(&g1).unwrap();
        let g1_recovered: BN254G1 = serde_json::from_str(&text).unwrap();
        assert_eq!(g1, g1_recovered);

        let s = BN254Scalar::random(&mut prng);
        let text = serde_json::to_string(&s).unwrap();
        let s_recovered: BN254Scalar = serde_json::from_str(&text).unwrap();
        assert_eq!(s, s_recovered);
    }

    #[test]
    fn root_of_unity_has_right_order() {
        let n = 8u64;
        let omega = BN254Scalar::get_root_of_unity(n).unwrap();
        assert_eq!(omega.pow(&[n]), BN254Scalar::one());
        assert_ne!(omega.pow(&[n / 2]), BN254Scalar::one());
    }
}
