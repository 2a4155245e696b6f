//! snarkjs-compatible JSON artifacts: Groth16 proofs and verification
//! keys with decimal-string coordinates, and public signal arrays.

use crate::errors::{Result, VerifierError};
use crate::groth16::{Groth16Proof, Groth16VerifyingKey};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use veil_algebra::bn254::{BN254Fq, BN254Scalar, BN254G1, BN254G2};
use veil_algebra::prelude::*;

/// A Groth16 proof in snarkjs JSON shape: projective decimal-string
/// coordinates plus the protocol and curve tags.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Groth16ProofJson {
    /// The first proof element, `[x, y, z]`.
    pub pi_a: Vec<String>,
    /// The second proof element, three `[c0, c1]` pairs.
    pub pi_b: Vec<Vec<String>>,
    /// The third proof element, `[x, y, z]`.
    pub pi_c: Vec<String>,
    /// The protocol tag, `"groth16"`.
    pub protocol: String,
    /// The curve tag, `"bn128"`.
    pub curve: String,
}

/// A Groth16 verification key in snarkjs JSON shape.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Groth16VkJson {
    /// The protocol tag, `"groth16"`.
    pub protocol: String,
    /// The curve tag, `"bn128"`.
    pub curve: String,
    /// The number of public signals.
    #[serde(rename = "nPublic")]
    pub n_public: usize,
    /// `alpha * G1`.
    pub vk_alpha_1: Vec<String>,
    /// `beta * G2`.
    pub vk_beta_2: Vec<Vec<String>>,
    /// `gamma * G2`.
    pub vk_gamma_2: Vec<Vec<String>>,
    /// `delta * G2`.
    pub vk_delta_2: Vec<Vec<String>>,
    /// The input commitments, `nPublic + 1` G1 points.
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<String>>,
}

/// Parse a decimal string into a field element, rejecting values at or
/// above the modulus.
pub(crate) fn parse_decimal<F: Scalar>(s: &str) -> Result<F> {
    let value = BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or(AlgebraError::from(CurveError::InvalidEncoding))?;
    let modulus = BigUint::from_bytes_le(&F::get_field_size_le_bytes());
    if value >= modulus {
        return Err(AlgebraError::from(CurveError::InvalidEncoding).into());
    }
    Ok(F::from(&value))
}

fn format_decimal<F: Scalar>(x: &F) -> String {
    x.into_biguint().to_str_radix(10)
}

/// Parse a projective snarkjs G1 point. The z coordinate must be "1", or
/// the whole triple the canonical infinity `[0, 1, 0]`.
pub(crate) fn parse_g1(coords: &[String]) -> Result<BN254G1> {
    if coords.len() != 3 {
        return Err(VerifierError::MalformedProof);
    }
    if coords[2] == "0" {
        if coords[0] == "0" && coords[1] == "1" {
            return Ok(BN254G1::get_identity());
        }
        return Err(VerifierError::MalformedProof);
    }
    if coords[2] != "1" {
        return Err(VerifierError::MalformedProof);
    }
    let x: BN254Fq = parse_decimal(&coords[0])?;
    let y: BN254Fq = parse_decimal(&coords[1])?;
    Ok(BN254G1::from_xy(x, y)?)
}

/// Parse a projective snarkjs G2 point, three `[c0, c1]` pairs.
pub(crate) fn parse_g2(coords: &[Vec<String>]) -> Result<BN254G2> {
    if coords.len() != 3 || coords.iter().any(|pair| pair.len() != 2) {
        return Err(VerifierError::MalformedProof);
    }
    if coords[2][0] == "0" && coords[2][1] == "0" {
        if coords[0] == ["0", "0"] && coords[1] == ["1", "0"] {
            return Ok(BN254G2::get_identity());
        }
        return Err(VerifierError::MalformedProof);
    }
    if coords[2][0] != "1" || coords[2][1] != "0" {
        return Err(VerifierError::MalformedProof);
    }
    let x0: BN254Fq = parse_decimal(&coords[0][0])?;
    let x1: BN254Fq = parse_decimal(&coords[0][1])?;
    let y0: BN254Fq = parse_decimal(&coords[1][0])?;
    let y1: BN254Fq = parse_decimal(&coords[1][1])?;
    Ok(BN254G2::from_xy(x0, x1, y0, y1)?)
}

pub(crate) fn format_g1(point: &BN254G1) -> Vec<String> {
    if *point == BN254G1::get_identity() {
        return vec!["0".to_string(), "1".to_string(), "0".to_string()];
    }
    let (x, y) = (point.get_x(), point.get_y());
    vec![format_decimal(&x), format_decimal(&y), "1".to_string()]
}

pub(crate) fn format_g2(point: &BN254G2) -> Vec<Vec<String>> {
    if *point == BN254G2::get_identity() {
        return vec![
            vec!["0".to_string(), "0".to_string()],
            vec!["1".to_string(), "0".to_string()],
            vec!["0".to_string(), "0".to_string()],
        ];
    }
    let (x0, x1) = point.get_x();
    let (y0, y1) = point.get_y();
    vec![
        vec![format_decimal(&x0), format_decimal(&x1)],
        vec![format_decimal(&y0), format_decimal(&y1)],
        vec!["1".to_string(), "0".to_string()],
    ]
}

impl Groth16ProofJson {
    /// Render a proof into the snarkjs shape.
    pub fn from_proof(proof: &Groth16Proof) -> Self {
        Groth16ProofJson {
            pi_a: format_g1(&proof.a),
            pi_b: format_g2(&proof.b),
            pi_c: format_g1(&proof.c),
            protocol: "groth16".to_string(),
            curve: "bn128".to_string(),
        }
    }

    /// Parse the JSON shape into a proof, validating the tags and every
    /// coordinate.
    pub fn to_proof(&self) -> Result<Groth16Proof> {
        if self.protocol != "groth16" || self.curve != "bn128" {
            return Err(VerifierError::KeyMismatch);
        }
        Ok(Groth16Proof {
            a: parse_g1(&self.pi_a)?,
            b: parse_g2(&self.pi_b)?,
            c: parse_g1(&self.pi_c)?,
        })
    }

    /// Load a proof from a JSON reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Groth16Proof> {
        let json: Groth16ProofJson =
            serde_json::from_reader(reader).map_err(|_| VerifierError::MalformedProof)?;
        json.to_proof()
    }

    /// Load a proof from a JSON file on disk.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Groth16Proof> {
        let file = std::fs::File::open(path).map_err(|_| VerifierError::MalformedProof)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl Groth16VkJson {
    /// Render a verification key into the snarkjs shape.
    pub fn from_vk(vk: &Groth16VerifyingKey) -> Self {
        Groth16VkJson {
            protocol: "groth16".to_string(),
            curve: "bn128".to_string(),
            n_public: vk.num_public(),
            vk_alpha_1: format_g1(&vk.alpha_g1),
            vk_beta_2: format_g2(&vk.beta_g2),
            vk_gamma_2: format_g2(&vk.gamma_g2),
            vk_delta_2: format_g2(&vk.delta_g2),
            ic: vk.ic.iter().map(format_g1).collect(),
        }
    }

    /// Parse the JSON shape into a verification key, validating the tags,
    /// every coordinate, and the IC length against `nPublic`.
    pub fn to_vk(&self) -> Result<Groth16VerifyingKey> {
        if self.protocol != "groth16" || self.curve != "bn128" {
            return Err(VerifierError::KeyMismatch);
        }
        if self.ic.len() != self.n_public + 1 {
            return Err(VerifierError::KeyMismatch);
        }
        let ic = self
            .ic
            .iter()
            .map(|coords| parse_g1(coords))
            .collect::<Result<Vec<BN254G1>>>()?;
        Ok(Groth16VerifyingKey {
            alpha_g1: parse_g1(&self.vk_alpha_1)?,
            beta_g2: parse_g2(&self.vk_beta_2)?,
            gamma_g2: parse_g2(&self.vk_gamma_2)?,
            delta_g2: parse_g2(&self.vk_delta_2)?,
            ic,
        })
    }

    /// Load a verification key from a JSON reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Groth16VerifyingKey> {
        let json: Groth16VkJson =
            serde_json::from_reader(reader).map_err(|_| VerifierError::KeyMismatch)?;
        json.to_vk()
    }

    /// Load a verification key from a JSON file on disk.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Groth16VerifyingKey> {
        let file = std::fs::File::open(path).map_err(|_| VerifierError::KeyMismatch)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

/// Parse a snarkjs public signal array of decimal strings, in order.
pub fn parse_public_signals(signals: &[String]) -> Result<Vec<BN254Scalar>> {
    signals.iter().map(|s| parse_decimal(s)).collect()
}

/// Render public signals into a snarkjs decimal-string array.
pub fn format_public_signals(signals: &[BN254Scalar]) -> Vec<String> {
    signals.iter().map(format_decimal).collect()
}
