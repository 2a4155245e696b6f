#[cfg(test)]
mod smoke_rejection {
    use merlin::Transcript;
    use veil_algebra::{bn254::BN254Scalar, rand_helper::test_rng, prelude::*};
    use veil_proofs::calldata::{
        groth16_verify_calldata, plonk_calldata, plonk_verify_calldata,
    };
    use veil_proofs::errors::VerifierError;
    use veil_proofs::groth16::{multiplier_assignment, multiplier_r1cs, setup};
    use veil_proofs::plonk::{indexer, multiplier_plonk_cs, multiplier_plonk_witness};
    use veil_proofs::poly_commit::kzg::KZGCommitmentSchemeBN254;
    use veil_proofs::{groth16, plonk};

    #[test]
    fn all_zero_groth16_calldata_is_false() {
        let mut prng = test_rng();
        let cs = multiplier_r1cs(2);
        let pk = setup(&cs, &mut prng).unwrap();

        let zeroes: Vec<String> = (0..9).map(|_| "0".to_string()).collect();
        assert!(!groth16_verify_calldata(&pk.vk, &zeroes));

        // undersized groups
        assert!(!groth16_verify_calldata(&pk.vk, &zeroes[..4]));
        assert!(!groth16_verify_calldata(&pk.vk, &[]));
    }

    #[test]
    fn undersized_plonk_calldata_is_false() {
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
        let proof = plonk::prove(
            &mut prng,
            &mut Transcript::new(b"Plonk"),
            &pcs,
            &params,
            &cs,
            &witness,
        )
        .unwrap();
        let (blob, signals) = plonk_calldata(&proof, &publics).unwrap();

        assert!(!plonk_verify_calldata(&params.verifier_params, &[], &signals));
        assert!(!plonk_verify_calldata(
            &params.verifier_params,
            &blob[..8],
            &signals
        ));
        assert!(!plonk_verify_calldata(&params.verifier_params, &[0u8; 16], &signals));
    }

    #[test]
    fn wrong_length_signals_are_an_error() {
        let mut prng = test_rng();

        let cs = multiplier_r1cs(2);
        let pk = setup(&cs, &mut prng).unwrap();
        let assignment =
            multiplier_assignment(&[BN254Scalar::from(2u32), BN254Scalar::from(3u32)]);
        let proof = groth16::prove(&pk, &cs, &assignment, &mut prng).unwrap();

        assert_eq!(
            groth16::verify(&pk.vk, &[], &proof),
            Err(VerifierError::SignalCountMismatch)
        );
        assert_eq!(
            groth16::verify(&pk.vk, &[BN254Scalar::one(); 3], &proof),
            Err(VerifierError::SignalCountMismatch)
        );

        let plonk_cs = multiplier_plonk_cs(3);
        let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
        let params = indexer(&plonk_cs, &pcs).unwrap();
        let witness = multiplier_plonk_witness(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        let plonk_proof = plonk::prove(
            &mut prng,
            &mut Transcript::new(b"Plonk"),
            &pcs,
            &params,
            &plonk_cs,
            &witness,
        )
        .unwrap();
        assert_eq!(
            plonk::verify(
                &mut Transcript::new(b"Plonk"),
                &params.verifier_params,
                &[],
                &plonk_proof
            ),
            Err(VerifierError::SignalCountMismatch)
        );
    }
}
