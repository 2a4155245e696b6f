use crate::bn254::{BN254Fq, BN254Scalar};
use crate::prelude::*;
use crate::serialization::VeilFromToBytes;
use ark_bn254::{Fq2, G2Affine, G2Projective};
use ark_ec::{CurveGroup, Group as ArkGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::{
    fmt::{Debug, Display, Formatter},
    vec::Vec,
};

/// The wrapped struct for `ark_bn254::G2Projective`
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BN254G2(pub(crate) G2Projective);

impl Debug for BN254G2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <G2Affine as Display>::fmt(&self.0.into_affine(), f)
    }
}

impl Group for BN254G2 {
    type ScalarType = BN254Scalar;
    const COMPRESSED_LEN: usize = 64;
    const UNCOMPRESSED_LEN: usize = 128;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.double())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G2Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G2Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G2Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let affine = G2Affine::from(self.0);
        let mut buf = Vec::new();
        affine.serialize_with_mode(&mut buf, Compress::Yes).unwrap();

        buf
    }

    #[inline]
    fn to_unchecked_bytes(&self) -> Vec<u8> {
        let affine = G2Affine::from(self.0);
        let mut buf = Vec::new();
        affine.serialize_with_mode(&mut buf, Compress::No).unwrap();

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G2Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| CurveError::InvalidEncoding)?;

        Ok(Self(G2Projective::from(affine)))
    }

    #[inline]
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G2Affine::deserialize_with_mode(bytes, Compress::No, Validate::No)
            .map_err(|_| CurveError::InvalidEncoding)?;

        Ok(Self(G2Projective::from(affine)))
    }

    #[inline]
    fn unchecked_size() -> usize {
        G2Affine::default().serialized_size(Compress::No)
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        use ark_ec::VariableBaseMSM;

        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G2Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G2Projective>>(),
        );

        Self(G2Projective::msm(&points_raw, scalars_raw.as_ref()).unwrap())
    }
}

impl<'a> Add<&'a BN254G2> for BN254G2 {
    type Output = BN254G2;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl<'a> Sub<&'a BN254G2> for BN254G2 {
    type Output = BN254G2;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254G2 {
    type Output = BN254G2;

    #[inline]
    fn mul(self, rhs: &BN254Scalar) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> AddAssign<&'a BN254G2> for BN254G2 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BN254G2) {
        self.0.add_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BN254G2> for BN254G2 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BN254G2) {
        self.0.sub_assign(&rhs.0)
    }
}

impl<'a> MulAssign<&'a BN254Scalar> for BN254G2 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BN254Scalar) {
        self.0.mul_assign(rhs.0)
    }
}

impl Neg for BN254G2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}

impl BN254G2 {
    /// Get the x-coordinate of the affine representation, as the pair
    /// `(c0, c1)` of its extension-field components.
    #[inline]
    pub fn get_x(&self) -> (BN254Fq, BN254Fq) {
        let affine = self.0.into_affine();
        (BN254Fq(affine.x.c0), BN254Fq(affine.x.c1))
    }

    /// Get the y-coordinate of the affine representation, as the pair
    /// `(c0, c1)` of its extension-field components.
    #[inline]
    pub fn get_y(&self) -> (BN254Fq, BN254Fq) {
        let affine = self.0.into_affine();
        (BN254Fq(affine.y.c0), BN254Fq(affine.y.c1))
    }

    /// Construct from affine coordinates over the extension field, where
    /// all-zero coordinates denote the identity. Any other point must lie
    /// on the curve and in the prime-order subgroup.
    pub fn from_xy(x0: BN254Fq, x1: BN254Fq, y0: BN254Fq, y1: BN254Fq) -> Result<Self> {
        if x0.is_zero() && x1.is_zero() && y0.is_zero() && y1.is_zero() {
            return Ok(Self(G2Projective::zero()));
        }
        let affine = G2Affine::new_unchecked(Fq2::new(x0.0, x1.0), Fq2::new(y0.0, y1.0));
        if !affine.is_on_curve() || !affine.is_in_correct_subgroup_assuming_on_curve() {
            return Err(CurveError::NotOnCurve.into());
        }
        Ok(Self(G2Projective::from(affine)))
    }
}

impl VeilFromToBytes for BN254G2 {
    fn veil_to_bytes(&self) -> Vec<u8> {
        self.to_compressed_bytes()
    }

    fn veil_from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_compressed_bytes(bytes)
    }
}

serialize_deserialize!(BN254G2);
