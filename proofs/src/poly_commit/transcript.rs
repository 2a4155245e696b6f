use crate::poly_commit::kzg::ToBytes;
use merlin::Transcript;
use veil_algebra::prelude::*;

/// The transcript extension for polynomial commitments.
pub trait PolyComTranscript {
    /// Append a commitment to the transcript.
    fn append_commitment<C: ToBytes>(&mut self, commitment: &C);

    /// Append a field element to the transcript.
    fn append_field_elem<F: Scalar>(&mut self, elem: &F);

    /// Derive a challenge field element.
    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F;
}

impl PolyComTranscript for Transcript {
    fn append_commitment<C: ToBytes>(&mut self, commitment: &C) {
        self.append_message(b"append commitment", &commitment.to_bytes());
    }

    fn append_field_elem<F: Scalar>(&mut self, elem: &F) {
        self.append_message(b"append field point", &elem.to_bytes());
    }

    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        let mut buf = [0u8; 32];
        self.challenge_bytes(label, &mut buf[..]);
        F::random(&mut rand_chacha::ChaChaRng::from_seed(buf))
    }
}

#[cfg(test)]
mod test {
    use super::PolyComTranscript;
    use merlin::Transcript;
    use veil_algebra::bn254::BN254Scalar;

    #[test]
    fn challenges_are_deterministic_and_binding() {
        let mut t1 = Transcript::new(b"test transcript");
        let mut t2 = Transcript::new(b"test transcript");
        t1.append_field_elem(&BN254Scalar::from(7u32));
        t2.append_field_elem(&BN254Scalar::from(7u32));

        let c1: BN254Scalar = t1.get_challenge_field_elem(b"c");
        let c2: BN254Scalar = t2.get_challenge_field_elem(b"c");
        assert_eq!(c1, c2);

        let mut t3 = Transcript::new(b"test transcript");
        t3.append_field_elem(&BN254Scalar::from(8u32));
        let c3: BN254Scalar = t3.get_challenge_field_elem(b"c");
        assert_ne!(c1, c3);
    }
}
