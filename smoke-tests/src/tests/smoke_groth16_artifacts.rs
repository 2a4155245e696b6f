#[cfg(test)]
mod smoke_groth16_artifacts {
    use veil_algebra::{
        bn254::{BN254Scalar, BN254G1, BN254G2},
        prelude::*,
        rand_helper::test_rng,
    };
    use veil_proofs::artifacts::{
        format_public_signals, parse_public_signals, Groth16ProofJson, Groth16VkJson,
    };
    use veil_proofs::groth16::{
        multiplier_assignment, multiplier_r1cs, prove, setup, verify,
    };

    #[test]
    fn generated_proof_json_roundtrip() {
        let mut prng = test_rng();
        let cs = multiplier_r1cs(3);
        let pk = setup(&cs, &mut prng).unwrap();

        let assignment = multiplier_assignment(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        let publics = vec![assignment[1]];
        let proof = prove(&pk, &cs, &assignment, &mut prng).unwrap();

        // export everything to the snarkjs shapes, reparse, verify
        let proof_text = serde_json::to_string(&Groth16ProofJson::from_proof(&proof)).unwrap();
        let vk_text = serde_json::to_string(&Groth16VkJson::from_vk(&pk.vk)).unwrap();
        let signal_text =
            serde_json::to_string(&format_public_signals(&publics)).unwrap();

        let reparsed_proof = Groth16ProofJson::from_reader(proof_text.as_bytes()).unwrap();
        let reparsed_vk = Groth16VkJson::from_reader(vk_text.as_bytes()).unwrap();
        let reparsed_signals: Vec<String> = serde_json::from_str(&signal_text).unwrap();
        let signals = parse_public_signals(&reparsed_signals).unwrap();

        assert_eq!(signals, publics);
        assert!(verify(&reparsed_vk, &signals, &reparsed_proof).unwrap());
    }

    #[test]
    fn snarkjs_vk_fixture_parses() {
        let vk_json = r##"
        {
            "protocol": "groth16",
            "curve": "bn128",
            "nPublic": 1,
            "vk_alpha_1": ["1", "2", "1"],
            "vk_beta_2": [
                ["10857046999023057135944570762232829481370756359578518086990519993285655852781",
                 "11559732032986387107991004021392285783925812861821192530917403151452391805634"],
                ["8495653923123431417604973247489272438418190587263600148770280649306958101930",
                 "4082367875863433681332203403145435568316851327593401208105741076214120093531"],
                ["1", "0"]
            ],
            "vk_gamma_2": [
                ["10857046999023057135944570762232829481370756359578518086990519993285655852781",
                 "11559732032986387107991004021392285783925812861821192530917403151452391805634"],
                ["8495653923123431417604973247489272438418190587263600148770280649306958101930",
                 "4082367875863433681332203403145435568316851327593401208105741076214120093531"],
                ["1", "0"]
            ],
            "vk_delta_2": [
                ["10857046999023057135944570762232829481370756359578518086990519993285655852781",
                 "11559732032986387107991004021392285783925812861821192530917403151452391805634"],
                ["8495653923123431417604973247489272438418190587263600148770280649306958101930",
                 "4082367875863433681332203403145435568316851327593401208105741076214120093531"],
                ["1", "0"]
            ],
            "IC": [
                ["1", "2", "1"],
                ["1", "2", "1"]
            ]
        }
        "##;

        let vk = Groth16VkJson::from_reader(vk_json.as_bytes()).unwrap();
        assert_eq!(vk.num_public(), 1);
        assert_eq!(vk.alpha_g1, BN254G1::get_base());
        assert_eq!(vk.beta_g2, BN254G2::get_base());

        // round back through the writer
        let rendered = Groth16VkJson::from_vk(&vk);
        assert_eq!(rendered.to_vk().unwrap(), vk);
    }

    #[test]
    fn snarkjs_fixture_off_curve_is_rejected() {
        let proof_json = r##"
        {
            "pi_a": ["1", "1", "1"],
            "pi_b": [["1", "0"], ["2", "0"], ["1", "0"]],
            "pi_c": ["1", "2", "1"],
            "protocol": "groth16",
            "curve": "bn128"
        }
        "##;
        let parsed: Groth16ProofJson = serde_json::from_str(proof_json).unwrap();
        assert!(parsed.to_proof().is_err());
    }
}
