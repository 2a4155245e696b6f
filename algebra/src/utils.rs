#![deny(warnings)]

use crate::prelude::*;
use ark_std::{string::String, vec::Vec};
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert an 8 byte array (little-endian) into a u64
pub fn u8_le_slice_to_u64(slice: &[u8]) -> u64 {
    let mut a = [0u8; 8];
    a.copy_from_slice(slice);
    u64::from_le_bytes(a)
}

/// Compute the minimum power of two that is greater or equal to the input
pub fn min_greater_equal_power_of_two(n: u32) -> u32 {
    2.0f64.powi((n as f64).log2().ceil() as i32) as u32
}

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| CurveError::InvalidEncoding.into())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pow_2() {
        assert_eq!(min_greater_equal_power_of_two(3), 4);
        assert_eq!(min_greater_equal_power_of_two(4), 4);
        assert_eq!(min_greater_equal_power_of_two(5), 8);
        assert_eq!(min_greater_equal_power_of_two(1), 1);
    }

    #[test]
    fn test_b64_roundtrip() {
        let bytes = [1u8, 2, 3, 250, 255];
        let enc = b64enc(&bytes);
        assert_eq!(b64dec(&enc).unwrap(), bytes.to_vec());
    }
}
