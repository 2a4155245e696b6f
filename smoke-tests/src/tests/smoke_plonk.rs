#[cfg(test)]
mod smoke_plonk {
    use merlin::Transcript;
    use veil_algebra::{bn254::BN254Scalar, rand_helper::test_rng};
    use veil_proofs::calldata::{plonk_calldata, plonk_verify_calldata};
    use veil_proofs::plonk::{
        indexer, multiplier_plonk_cs, multiplier_plonk_witness, prove, verify, PlonkVerifier,
    };
    use veil_proofs::poly_commit::kzg::KZGCommitmentSchemeBN254;
    use veil_proofs::SnarkVerifier;

    fn fresh_transcript() -> Transcript {
        Transcript::new(b"Plonk")
    }

    #[test]
    fn multiplier_3_end_to_end() {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        let witness = multiplier_plonk_witness(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        let publics = cs.public_signals(&witness);
        assert_eq!(publics, vec![BN254Scalar::from(24u32)]);

        let proof =
            prove(&mut prng, &mut fresh_transcript(), &pcs, &params, &cs, &witness).unwrap();

        // verification is deterministic: the same proof passes twice
        assert!(verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof).unwrap());
        assert!(verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof).unwrap());
        assert!(PlonkVerifier
            .verify(&params.verifier_params, &publics, &proof)
            .unwrap());

        // through the contract-shaped entry point
        let (blob, signals) = plonk_calldata(&proof, &publics).unwrap();
        assert!(plonk_verify_calldata(&params.verifier_params, &blob, &signals));

        // tamper a single proof byte
        let mut tampered = blob.clone();
        tampered[0] ^= 1;
        assert!(!plonk_verify_calldata(
            &params.verifier_params,
            &tampered,
            &signals
        ));
    }

    #[test]
    fn fresh_blinding_still_verifies() {
        let mut prng = test_rng();
        let cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
        let params = indexer(&cs, &pcs).unwrap();

        let witness = multiplier_plonk_witness(&[
            BN254Scalar::from(5u32),
            BN254Scalar::from(7u32),
            BN254Scalar::from(11u32),
        ]);
        let publics = cs.public_signals(&witness);

        // two proofs of the same statement differ but both verify
        let proof1 =
            prove(&mut prng, &mut fresh_transcript(), &pcs, &params, &cs, &witness).unwrap();
        let proof2 =
            prove(&mut prng, &mut fresh_transcript(), &pcs, &params, &cs, &witness).unwrap();
        assert_ne!(proof1, proof2);
        assert!(verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof1).unwrap());
        assert!(verify(&mut fresh_transcript(), &params.verifier_params, &publics, &proof2).unwrap());
    }
}
