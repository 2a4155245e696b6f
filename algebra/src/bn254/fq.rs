use crate::prelude::*;
use crate::serialization::VeilFromToBytes;
use ark_bn254::Fq;
use ark_ff::{BigInteger, BigInteger256, FftField, Field, PrimeField};
use ark_std::{
    fmt::{Debug, Formatter},
    result::Result as StdResult,
    str::FromStr,
    vec,
    vec::Vec,
};
use num_bigint::BigUint;
use num_traits::Num;

/// The wrapped struct for `ark_bn254::Fq`, the base field of BN254.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Fq(pub(crate) Fq);

impl Debug for BN254Fq {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <BigUint as Debug>::fmt(
            &<BigInteger256 as Into<BigUint>>::into(self.0.into_bigint()),
            f,
        )
    }
}

impl FromStr for BN254Fq {
    type Err = AlgebraError;

    fn from_str(string: &str) -> StdResult<Self, AlgebraError> {
        Fq::from_str(string)
            .map(Self)
            .map_err(|_| CurveError::InvalidEncoding.into())
    }
}

impl Into<BigUint> for BN254Fq {
    #[inline]
    fn into(self) -> BigUint {
        self.0.into_bigint().into()
    }
}

impl<'a> From<&'a BigUint> for BN254Fq {
    #[inline]
    fn from(src: &BigUint) -> Self {
        Self(Fq::from(src.clone()))
    }
}

impl One for BN254Fq {
    #[inline]
    fn one() -> Self {
        Self(Fq::one())
    }
}

impl Zero for BN254Fq {
    #[inline]
    fn zero() -> Self {
        Self(Fq::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for BN254Fq {
    type Output = BN254Fq;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl Mul for BN254Fq {
    type Output = BN254Fq;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl Sum<BN254Fq> for BN254Fq {
    #[inline]
    fn sum<I: Iterator<Item = BN254Fq>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Add<&'a BN254Fq> for BN254Fq {
    type Output = BN254Fq;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl<'a> AddAssign<&'a BN254Fq> for BN254Fq {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        (self.0).add_assign(&rhs.0);
    }
}

impl<'a> Sub<&'a BN254Fq> for BN254Fq {
    type Output = BN254Fq;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl<'a> SubAssign<&'a BN254Fq> for BN254Fq {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        (self.0).sub_assign(&rhs.0);
    }
}

impl<'a> Mul<&'a BN254Fq> for BN254Fq {
    type Output = BN254Fq;

    #[inline]
    fn mul(self, rhs: &Self) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> MulAssign<&'a BN254Fq> for BN254Fq {
    #[inline]
    fn mul_assign(&mut self, rhs: &Self) {
        (self.0).mul_assign(&rhs.0);
    }
}

impl<'a> Sum<&'a BN254Fq> for BN254Fq {
    #[inline]
    fn sum<I: Iterator<Item = &'a BN254Fq>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl Neg for BN254Fq {
    type Output = BN254Fq;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl From<u32> for BN254Fq {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<u64> for BN254Fq {
    #[inline]
    fn from(value: u64) -> Self {
        Self(Fq::from(value))
    }
}

impl From<u128> for BN254Fq {
    #[inline]
    fn from(value: u128) -> Self {
        Self(Fq::from(value))
    }
}

impl Scalar for BN254Fq {
    #[inline]
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self(Fq::rand(rng))
    }

    #[inline]
    fn multiplicative_generator() -> Self {
        Self(Fq::GENERATOR)
    }

    #[inline]
    fn get_field_size_biguint() -> BigUint {
        BigUint::from_str_radix(
            "21888242871839275222246405745257275088696311157297823662689037894645226208583",
            10,
        )
        .unwrap()
    }

    #[inline]
    fn get_field_size_le_bytes() -> Vec<u8> {
        [
            0x47, 0xfd, 0x7c, 0xd8, 0x16, 0x8c, 0x20, 0x3c, 0x8d, 0xca, 0x71, 0x68, 0x91, 0x6a,
            0x81, 0x97, 0x5d, 0x58, 0x81, 0x81, 0xb6, 0x45, 0x50, 0xb8, 0x29, 0xa0, 0x31, 0xe1,
            0x72, 0x4e, 0x64, 0x30,
        ]
        .to_vec()
    }

    #[inline]
    fn get_little_endian_u64(&self) -> Vec<u64> {
        let a = self.0.into_bigint().to_bytes_le();
        let a1 = u8_le_slice_to_u64(&a[0..8]);
        let a2 = u8_le_slice_to_u64(&a[8..16]);
        let a3 = u8_le_slice_to_u64(&a[16..24]);
        let a4 = u8_le_slice_to_u64(&a[24..]);
        vec![a1, a2, a3, a4]
    }

    #[inline]
    fn bytes_len() -> usize {
        32
    }

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.0.into_bigint().to_bytes_le()
    }

    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > Self::bytes_len() {
            return Err(CurveError::InvalidEncoding.into());
        }
        Ok(Self(Fq::from_le_bytes_mod_order(bytes)))
    }

    #[inline]
    fn inv(&self) -> Result<Self> {
        self.0
            .inverse()
            .map(Self)
            .ok_or_else(|| ArithmeticError::NotInvertible.into())
    }

    #[inline]
    fn pow(&self, exponent: &[u64]) -> Self {
        let len = exponent.len();
        let mut array = [0u64; 4];
        array[..len].copy_from_slice(exponent);
        Self(self.0.pow(array))
    }

    #[inline]
    fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl VeilFromToBytes for BN254Fq {
    fn veil_to_bytes(&self) -> Vec<u8> {
        Scalar::to_bytes(self)
    }

    fn veil_from_bytes(bytes: &[u8]) -> Result<Self> {
        Scalar::from_bytes(bytes)
    }
}

serialize_deserialize!(BN254Fq);
