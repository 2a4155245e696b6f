#[cfg(test)]
mod smoke_groth16 {
    use veil_algebra::{bn254::BN254Scalar, rand_helper::test_rng, prelude::*};
    use veil_proofs::calldata::{groth16_calldata, groth16_verify_calldata};
    use veil_proofs::groth16::{
        multiplier_assignment, multiplier_r1cs, prove, setup, verify, Groth16Verifier,
    };
    use veil_proofs::SnarkVerifier;

    #[test]
    fn multiplier_2_end_to_end() {
        let mut prng = test_rng();
        let cs = multiplier_r1cs(2);
        let pk = setup(&cs, &mut prng).unwrap();

        let assignment =
            multiplier_assignment(&[BN254Scalar::from(2u32), BN254Scalar::from(3u32)]);
        assert_eq!(assignment[0], BN254Scalar::one());
        assert_eq!(assignment[1], BN254Scalar::from(6u32));

        let publics = vec![assignment[1]];
        let proof = prove(&pk, &cs, &assignment, &mut prng).unwrap();
        assert!(verify(&pk.vk, &publics, &proof).unwrap());
        assert!(Groth16Verifier.verify(&pk.vk, &publics, &proof).unwrap());

        // flatten and verify through the contract-shaped entry point
        let calldata = groth16_calldata(&proof, &publics);
        assert!(groth16_verify_calldata(&pk.vk, &calldata));

        // tamper a single coordinate
        let mut tampered = calldata.clone();
        tampered[0] = calldata[1].clone();
        assert!(!groth16_verify_calldata(&pk.vk, &tampered));

        let mut tampered = calldata.clone();
        tampered[8] = "7".to_string();
        assert!(!groth16_verify_calldata(&pk.vk, &tampered));
    }

    #[test]
    fn multiplier_3_end_to_end() {
        let mut prng = test_rng();
        let cs = multiplier_r1cs(3);
        let pk = setup(&cs, &mut prng).unwrap();

        let assignment = multiplier_assignment(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        assert_eq!(assignment[0], BN254Scalar::one());
        assert_eq!(assignment[1], BN254Scalar::from(24u32));

        let publics = vec![assignment[1]];
        let proof = prove(&pk, &cs, &assignment, &mut prng).unwrap();
        assert!(verify(&pk.vk, &publics, &proof).unwrap());

        let calldata = groth16_calldata(&proof, &publics);
        assert!(groth16_verify_calldata(&pk.vk, &calldata));
    }
}
