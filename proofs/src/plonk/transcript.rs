use crate::plonk::indexer::PlonkVerifierParams;
use crate::poly_commit::transcript::PolyComTranscript;
use merlin::Transcript;
use veil_algebra::bn254::BN254Scalar;
use veil_algebra::prelude::*;

/// Bind the protocol instance to the proof transcript. The prover and the
/// verifier must bind the same data in the same order: the field, the
/// domain, the coset shifts, the preprocessed commitments, and the public
/// signals.
pub(crate) fn transcript_init_plonk(
    transcript: &mut Transcript,
    params: &PlonkVerifierParams,
    public_signals: &[BN254Scalar],
) {
    transcript.append_message(b"field size", &BN254Scalar::get_field_size_le_bytes());
    transcript.append_u64(b"domain size", params.n as u64);
    transcript.append_field_elem(&params.root);
    transcript.append_field_elem(&params.k1);
    transcript.append_field_elem(&params.k2);

    transcript.append_commitment(&params.cm_q_l);
    transcript.append_commitment(&params.cm_q_r);
    transcript.append_commitment(&params.cm_q_o);
    transcript.append_commitment(&params.cm_q_m);
    transcript.append_commitment(&params.cm_q_c);
    transcript.append_commitment(&params.cm_s1);
    transcript.append_commitment(&params.cm_s2);
    transcript.append_commitment(&params.cm_s3);

    for signal in public_signals.iter() {
        transcript.append_field_elem(signal);
    }
}
