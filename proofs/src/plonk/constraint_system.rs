use veil_algebra::bn254::BN254Scalar;
use veil_algebra::prelude::*;

/// A 3-wire PLONK constraint system over BN254. Each gate constrains its
/// three wires by
/// `q_l * a + q_r * b + q_o * c + q_m * a * b + q_c + pi = 0`,
/// where `pi` is nonzero only on the public-input gates at the front.
/// Variable 0 is pinned to zero and backs every unused wire slot.
#[derive(Clone, Debug)]
pub struct PlonkConstraintSystem {
    /// The number of variables, including the zero variable.
    pub num_vars: usize,
    /// The number of public signals.
    pub num_public: usize,
    pub(crate) wiring: [Vec<usize>; 3],
    pub(crate) q_l: Vec<BN254Scalar>,
    pub(crate) q_r: Vec<BN254Scalar>,
    pub(crate) q_o: Vec<BN254Scalar>,
    pub(crate) q_m: Vec<BN254Scalar>,
    pub(crate) q_c: Vec<BN254Scalar>,
    pub(crate) public_vars: Vec<usize>,
}

impl PlonkConstraintSystem {
    /// Create an empty constraint system. The zero variable is allocated
    /// up front.
    pub fn new() -> Self {
        PlonkConstraintSystem {
            num_vars: 1,
            num_public: 0,
            wiring: [vec![], vec![], vec![]],
            q_l: vec![],
            q_r: vec![],
            q_o: vec![],
            q_m: vec![],
            q_c: vec![],
            public_vars: vec![],
        }
    }

    /// The variable pinned to zero.
    pub fn zero_var(&self) -> usize {
        0
    }

    /// Allocate a fresh variable and return its index.
    pub fn new_variable(&mut self) -> usize {
        let var = self.num_vars;
        self.num_vars += 1;
        var
    }

    /// Return the number of gates.
    pub fn num_gates(&self) -> usize {
        self.q_l.len()
    }

    /// Append a gate over the three wires with the given selectors.
    pub fn add_gate(
        &mut self,
        wires: [usize; 3],
        q_l: BN254Scalar,
        q_r: BN254Scalar,
        q_o: BN254Scalar,
        q_m: BN254Scalar,
        q_c: BN254Scalar,
    ) {
        for (col, wire) in wires.iter().enumerate() {
            debug_assert!(*wire < self.num_vars);
            self.wiring[col].push(*wire);
        }
        self.q_l.push(q_l);
        self.q_r.push(q_r);
        self.q_o.push(q_o);
        self.q_m.push(q_m);
        self.q_c.push(q_c);
    }

    /// Expose a variable as the next public signal. Public-input gates
    /// occupy the front rows, so this must precede every other gate.
    pub fn add_public_gate(&mut self, var: usize) {
        assert_eq!(self.num_gates(), self.num_public);
        let zero = BN254Scalar::zero();
        self.add_gate(
            [var, self.zero_var(), self.zero_var()],
            BN254Scalar::one(),
            zero,
            zero,
            zero,
            zero,
        );
        self.public_vars.push(var);
        self.num_public += 1;
    }

    /// Append the gate `a * b = c`.
    pub fn add_mul_gate(&mut self, a: usize, b: usize, c: usize) {
        let zero = BN254Scalar::zero();
        self.add_gate(
            [a, b, c],
            zero,
            zero,
            BN254Scalar::one().neg(),
            BN254Scalar::one(),
            zero,
        );
    }

    /// Append the gate `a + b = c`.
    pub fn add_add_gate(&mut self, a: usize, b: usize, c: usize) {
        let one = BN254Scalar::one();
        self.add_gate(
            [a, b, c],
            one,
            one,
            one.neg(),
            BN254Scalar::zero(),
            BN254Scalar::zero(),
        );
    }

    /// Extract the public signals from a full witness, in gate order.
    pub fn public_signals(&self, witness: &[BN254Scalar]) -> Vec<BN254Scalar> {
        self.public_vars.iter().map(|v| witness[*v]).collect()
    }

    /// Check that the witness satisfies every gate. The witness is indexed
    /// by variable and must carry zero in position 0.
    pub fn is_satisfied(&self, witness: &[BN254Scalar]) -> bool {
        if witness.len() != self.num_vars {
            return false;
        }
        if !witness[0].is_zero() {
            return false;
        }
        for i in 0..self.num_gates() {
            let a = witness[self.wiring[0][i]];
            let b = witness[self.wiring[1][i]];
            let c = witness[self.wiring[2][i]];

            let mut acc = self.q_l[i].mul(&a);
            acc.add_assign(&self.q_r[i].mul(&b));
            acc.add_assign(&self.q_o[i].mul(&c));
            acc.add_assign(&self.q_m[i].mul(&a).mul(&b));
            acc.add_assign(&self.q_c[i]);
            if i < self.num_public {
                acc.sub_assign(&witness[self.public_vars[i]]);
            }
            if !acc.is_zero() {
                return false;
            }
        }
        true
    }
}

impl Default for PlonkConstraintSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// The multiplication circuit `out = in_1 * in_2 * … * in_k` with `out` as
/// the only public signal: one public-input gate followed by a chain of
/// multiplication gates.
pub fn multiplier_plonk_cs(num_inputs: usize) -> PlonkConstraintSystem {
    assert!(num_inputs >= 2);
    let mut cs = PlonkConstraintSystem::new();

    let out = cs.new_variable();
    let inputs: Vec<usize> = (0..num_inputs).map(|_| cs.new_variable()).collect();

    cs.add_public_gate(out);

    let mut acc = inputs[0];
    for (i, input) in inputs.iter().enumerate().skip(1) {
        let prod = if i == num_inputs - 1 {
            out
        } else {
            cs.new_variable()
        };
        cs.add_mul_gate(acc, *input, prod);
        acc = prod;
    }
    cs
}

/// The full witness for [`multiplier_plonk_cs`], given the inputs.
pub fn multiplier_plonk_witness(inputs: &[BN254Scalar]) -> Vec<BN254Scalar> {
    assert!(inputs.len() >= 2);
    let mut witness = vec![BN254Scalar::zero()];

    let mut product = inputs[0];
    for x in &inputs[1..] {
        product.mul_assign(x);
    }
    witness.push(product);
    witness.extend_from_slice(inputs);

    // intermediate products of the chain, excluding the final one
    let mut acc = inputs[0];
    for x in &inputs[1..inputs.len() - 1] {
        acc.mul_assign(x);
        witness.push(acc);
    }
    witness
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn multiplier_3_gates() {
        let cs = multiplier_plonk_cs(3);
        assert_eq!(cs.num_gates(), 3);
        assert_eq!(cs.num_public, 1);

        let witness = multiplier_plonk_witness(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        assert_eq!(cs.public_signals(&witness), vec![BN254Scalar::from(24u32)]);
        assert!(cs.is_satisfied(&witness));

        let mut bad = witness.clone();
        bad[1] = BN254Scalar::from(25u32);
        assert!(!cs.is_satisfied(&bad));
    }

    #[test]
    fn zero_variable_is_pinned() {
        let cs = multiplier_plonk_cs(2);
        let mut witness =
            multiplier_plonk_witness(&[BN254Scalar::from(2u32), BN254Scalar::from(3u32)]);
        assert!(cs.is_satisfied(&witness));

        witness[0] = BN254Scalar::one();
        assert!(!cs.is_satisfied(&witness));
    }

    #[test]
    fn add_gate_holds() {
        let mut cs = PlonkConstraintSystem::new();
        let a = cs.new_variable();
        let b = cs.new_variable();
        let c = cs.new_variable();
        cs.add_add_gate(a, b, c);

        let witness = vec![
            BN254Scalar::zero(),
            BN254Scalar::from(5u32),
            BN254Scalar::from(7u32),
            BN254Scalar::from(12u32),
        ];
        assert!(cs.is_satisfied(&witness));
    }
}
