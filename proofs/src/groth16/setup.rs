use crate::errors::{Result, VerifierError};
use crate::groth16::r1cs::R1cs;
use serde::{Deserialize, Serialize};
use veil_algebra::bn254::{BN254Scalar, BN254G1, BN254G2};
use veil_algebra::prelude::*;

/// The Groth16 verifying key.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Groth16VerifyingKey {
    /// `alpha * G1`.
    pub alpha_g1: BN254G1,
    /// `beta * G2`.
    pub beta_g2: BN254G2,
    /// `gamma * G2`.
    pub gamma_g2: BN254G2,
    /// `delta * G2`.
    pub delta_g2: BN254G2,
    /// `(beta u_i(tau) + alpha v_i(tau) + w_i(tau)) / gamma * G1` for the
    /// constant wire and each public signal wire.
    pub ic: Vec<BN254G1>,
}

impl Groth16VerifyingKey {
    /// The number of public signals the key expects.
    pub fn num_public(&self) -> usize {
        self.ic.len() - 1
    }
}

/// The Groth16 proving key.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct Groth16ProvingKey {
    /// The verifying key.
    pub vk: Groth16VerifyingKey,
    /// `beta * G1`.
    pub beta_g1: BN254G1,
    /// `delta * G1`.
    pub delta_g1: BN254G1,
    /// `u_i(tau) * G1` per wire.
    pub a_query: Vec<BN254G1>,
    /// `v_i(tau) * G1` per wire.
    pub b_g1_query: Vec<BN254G1>,
    /// `v_i(tau) * G2` per wire.
    pub b_g2_query: Vec<BN254G2>,
    /// `tau^i * Z(tau) / delta * G1` for the quotient polynomial.
    pub h_query: Vec<BN254G1>,
    /// `(beta u_i(tau) + alpha v_i(tau) + w_i(tau)) / delta * G1` per
    /// private wire.
    pub l_query: Vec<BN254G1>,
}

/// The radix-2 evaluation domain of the quotient argument. Covers the
/// constraints plus one extra row per instance wire, so that the public
/// wires cannot be dropped from the first constraint matrix.
pub(crate) fn domain_size(cs: &R1cs) -> usize {
    min_greater_equal_power_of_two((cs.num_constraints() + cs.num_public + 1) as u32) as usize
}

/// Evaluate every Lagrange basis polynomial of the domain at `tau`:
/// `l_j(tau) = Z(tau) * omega^j / (n * (tau - omega^j))`.
fn lagrange_evals_at(
    tau: &BN254Scalar,
    root: &BN254Scalar,
    n: usize,
) -> Result<Vec<BN254Scalar>> {
    let z_at_tau = tau.pow(&[n as u64]).sub(&BN254Scalar::one());
    let n_inv = BN254Scalar::from(n as u64)
        .inv()
        .map_err(|_| VerifierError::Setup)?;

    let mut evals = Vec::with_capacity(n);
    let mut omega_j = BN254Scalar::one();
    for _ in 0..n {
        let denom = tau.sub(&omega_j).inv().map_err(|_| VerifierError::Setup)?;
        evals.push(z_at_tau.mul(&omega_j).mul(&n_inv).mul(&denom));
        omega_j.mul_assign(root);
    }
    Ok(evals)
}

/// Evaluate the QAP wire polynomials `u_i`, `v_i`, `w_i` at `tau`.
pub(crate) fn qap_wire_evals(
    cs: &R1cs,
    lagrange: &[BN254Scalar],
) -> (Vec<BN254Scalar>, Vec<BN254Scalar>, Vec<BN254Scalar>) {
    let mut u = vec![BN254Scalar::zero(); cs.num_wires];
    let mut v = vec![BN254Scalar::zero(); cs.num_wires];
    let mut w = vec![BN254Scalar::zero(); cs.num_wires];

    let (a_rows, b_rows, c_rows) = cs.rows();
    for (j, row) in a_rows.iter().enumerate() {
        for (wire, coef) in row.iter() {
            u[*wire].add_assign(&coef.mul(&lagrange[j]));
        }
    }
    for (j, row) in b_rows.iter().enumerate() {
        for (wire, coef) in row.iter() {
            v[*wire].add_assign(&coef.mul(&lagrange[j]));
        }
    }
    for (j, row) in c_rows.iter().enumerate() {
        for (wire, coef) in row.iter() {
            w[*wire].add_assign(&coef.mul(&lagrange[j]));
        }
    }

    // instance map: one extra row per instance wire, `x_i * 0 = 0`
    let m = cs.num_constraints();
    for i in 0..=cs.num_public {
        u[i].add_assign(&lagrange[m + i]);
    }

    (u, v, w)
}

/// Single-party Groth16 setup over a fresh toxic waste sample. Test-grade
/// scaffolding; deployments consume the keys of an external ceremony
/// through the artifact layer instead.
pub fn setup<R: CryptoRng + RngCore>(cs: &R1cs, prng: &mut R) -> Result<Groth16ProvingKey> {
    let n = domain_size(cs);
    let root =
        BN254Scalar::get_root_of_unity(n as u64).ok_or(VerifierError::Setup)?;

    let tau = BN254Scalar::random(prng);
    let alpha = BN254Scalar::random(prng);
    let beta = BN254Scalar::random(prng);
    let gamma = BN254Scalar::random(prng);
    let delta = BN254Scalar::random(prng);

    let gamma_inv = gamma.inv().map_err(|_| VerifierError::Setup)?;
    let delta_inv = delta.inv().map_err(|_| VerifierError::Setup)?;

    let lagrange = lagrange_evals_at(&tau, &root, n)?;
    let (u, v, w) = qap_wire_evals(cs, &lagrange);

    let g1 = BN254G1::get_base();
    let g2 = BN254G2::get_base();

    let a_query: Vec<BN254G1> = u.iter().map(|x| g1.mul(x)).collect();
    let b_g1_query: Vec<BN254G1> = v.iter().map(|x| g1.mul(x)).collect();
    let b_g2_query: Vec<BN254G2> = v.iter().map(|x| g2.mul(x)).collect();

    // beta u_i + alpha v_i + w_i, split by wire visibility
    let combined = |i: usize| {
        beta.mul(&u[i]).add(&alpha.mul(&v[i])).add(&w[i])
    };
    let ic: Vec<BN254G1> = (0..=cs.num_public)
        .map(|i| g1.mul(&combined(i).mul(&gamma_inv)))
        .collect();
    let l_query: Vec<BN254G1> = (cs.num_public + 1..cs.num_wires)
        .map(|i| g1.mul(&combined(i).mul(&delta_inv)))
        .collect();

    let z_at_tau = tau.pow(&[n as u64]).sub(&BN254Scalar::one());
    let mut h_query = Vec::with_capacity(n - 1);
    let mut tau_power = BN254Scalar::one();
    for _ in 0..n - 1 {
        h_query.push(g1.mul(&tau_power.mul(&z_at_tau).mul(&delta_inv)));
        tau_power.mul_assign(&tau);
    }

    Ok(Groth16ProvingKey {
        vk: Groth16VerifyingKey {
            alpha_g1: g1.mul(&alpha),
            beta_g2: g2.mul(&beta),
            gamma_g2: g2.mul(&gamma),
            delta_g2: g2.mul(&delta),
            ic,
        },
        beta_g1: g1.mul(&beta),
        delta_g1: g1.mul(&delta),
        a_query,
        b_g1_query,
        b_g2_query,
        h_query,
        l_query,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::groth16::r1cs::multiplier_r1cs;

    #[test]
    fn key_shapes() {
        let cs = multiplier_r1cs(3);
        let mut prng = test_rng();
        let pk = setup(&cs, &mut prng).unwrap();

        // 2 constraints + 2 instance rows -> domain of size 4
        assert_eq!(domain_size(&cs), 4);
        assert_eq!(pk.vk.ic.len(), 2);
        assert_eq!(pk.vk.num_public(), 1);
        assert_eq!(pk.a_query.len(), cs.num_wires);
        assert_eq!(pk.b_g2_query.len(), cs.num_wires);
        assert_eq!(pk.h_query.len(), 3);
        assert_eq!(pk.l_query.len(), cs.num_wires - 2);
    }
}
