use crate::bn254::{BN254Fq, BN254Scalar};
use crate::prelude::*;
use crate::serialization::VeilFromToBytes;
use ark_bn254::{G1Affine, G1Projective};
use ark_ec::{CurveGroup, Group as ArkGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::{
    fmt::{Debug, Display, Formatter},
    vec::Vec,
};

/// The wrapped struct for `ark_bn254::G1Projective`
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BN254G1(pub(crate) G1Projective);

impl Debug for BN254G1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <G1Affine as Display>::fmt(&self.0.into_affine(), f)
    }
}

impl Group for BN254G1 {
    type ScalarType = BN254Scalar;
    const COMPRESSED_LEN: usize = 32;
    const UNCOMPRESSED_LEN: usize = 64;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.double())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G1Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G1Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G1Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let affine = G1Affine::from(self.0);
        let mut buf = Vec::new();
        affine.serialize_with_mode(&mut buf, Compress::Yes).unwrap();

        buf
    }

    #[inline]
    fn to_unchecked_bytes(&self) -> Vec<u8> {
        let affine = G1Affine::from(self.0);
        let mut buf = Vec::new();
        affine.serialize_with_mode(&mut buf, Compress::No).unwrap();

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G1Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| CurveError::InvalidEncoding)?;

        Ok(Self(G1Projective::from(affine)))
    }

    #[inline]
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G1Affine::deserialize_with_mode(bytes, Compress::No, Validate::No)
            .map_err(|_| CurveError::InvalidEncoding)?;

        Ok(Self(G1Projective::from(affine)))
    }

    #[inline]
    fn unchecked_size() -> usize {
        G1Affine::default().serialized_size(Compress::No)
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        use ark_ec::VariableBaseMSM;

        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G1Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G1Projective>>(),
        );

        Self(G1Projective::msm(&points_raw, scalars_raw.as_ref()).unwrap())
    }
}

impl<'a> Add<&'a BN254G1> for BN254G1 {
    type Output = BN254G1;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl<'a> Sub<&'a BN254G1> for BN254G1 {
    type Output = BN254G1;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254G1 {
    type Output = BN254G1;

    #[inline]
    fn mul(self, rhs: &BN254Scalar) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> AddAssign<&'a BN254G1> for BN254G1 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BN254G1) {
        self.0.add_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BN254G1> for BN254G1 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BN254G1) {
        self.0.sub_assign(&rhs.0)
    }
}

impl<'a> MulAssign<&'a BN254Scalar> for BN254G1 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BN254Scalar) {
        self.0.mul_assign(rhs.0)
    }
}

impl Neg for BN254G1 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl BN254G1 {
    /// Get the x-coordinate of the affine representation.
    /// The identity reads as `(0, 0)`.
    #[inline]
    pub fn get_x(&self) -> BN254Fq {
        BN254Fq(self.0.into_affine().x)
    }

    /// Get the y-coordinate of the affine representation.
    #[inline]
    pub fn get_y(&self) -> BN254Fq {
        BN254Fq(self.0.into_affine().y)
    }

    /// Construct from affine coordinates, where `(0, 0)` denotes the
    /// identity. Any other point must lie on the curve.
    pub fn from_xy(x: BN254Fq, y: BN254Fq) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self(G1Projective::zero()));
        }
        let affine = G1Affine::new_unchecked(x.0, y.0);
        if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
            return Err(CurveError::NotOnCurve.into());
        }
        Ok(Self(G1Projective::from(affine)))
    }
}

impl VeilFromToBytes for BN254G1 {
    fn veil_to_bytes(&self) -> Vec<u8> {
        self.to_compressed_bytes()
    }

    fn veil_from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_compressed_bytes(bytes)
    }
}

serialize_deserialize!(BN254G1);
