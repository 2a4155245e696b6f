use veil_algebra::bn254::BN254Scalar;
use veil_algebra::prelude::*;

/// A linear combination of wires, as sparse `(wire index, coefficient)`
/// pairs.
pub type LinearCombination = Vec<(usize, BN254Scalar)>;

/// A rank-1 constraint system over BN254. Wire 0 is the constant one;
/// wires `1..=num_public` are the public signals; the rest are private.
#[derive(Clone, Debug)]
pub struct R1cs {
    /// The number of public signals, excluding the constant wire.
    pub num_public: usize,
    /// The total number of wires, including the constant wire.
    pub num_wires: usize,
    a: Vec<LinearCombination>,
    b: Vec<LinearCombination>,
    c: Vec<LinearCombination>,
}

impl R1cs {
    /// Create an empty constraint system over the given wire layout.
    pub fn new(num_public: usize, num_wires: usize) -> Self {
        assert!(num_wires > num_public);
        R1cs {
            num_public,
            num_wires,
            a: vec![],
            b: vec![],
            c: vec![],
        }
    }

    /// Append the constraint `<a, w> * <b, w> = <c, w>`.
    pub fn add_constraint(
        &mut self,
        a: LinearCombination,
        b: LinearCombination,
        c: LinearCombination,
    ) {
        self.a.push(a);
        self.b.push(b);
        self.c.push(c);
    }

    /// Return the number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.a.len()
    }

    /// Return the constraint rows.
    pub fn rows(&self) -> (&[LinearCombination], &[LinearCombination], &[LinearCombination]) {
        (&self.a, &self.b, &self.c)
    }

    /// Evaluate a linear combination against a full assignment.
    pub fn eval_lc(lc: &LinearCombination, assignment: &[BN254Scalar]) -> BN254Scalar {
        let mut acc = BN254Scalar::zero();
        for (wire, coef) in lc.iter() {
            acc.add_assign(&assignment[*wire].mul(coef));
        }
        acc
    }

    /// Check that the assignment satisfies every constraint. The
    /// assignment is laid out `[1, public…, private…]`.
    pub fn is_satisfied(&self, assignment: &[BN254Scalar]) -> bool {
        if assignment.len() != self.num_wires {
            return false;
        }
        if assignment[0] != BN254Scalar::one() {
            return false;
        }
        for ((a, b), c) in self.a.iter().zip(self.b.iter()).zip(self.c.iter()) {
            let left = Self::eval_lc(a, assignment).mul(&Self::eval_lc(b, assignment));
            if left != Self::eval_lc(c, assignment) {
                return false;
            }
        }
        true
    }
}

/// The multiplication circuit `out = in_1 * in_2 * … * in_k`, with `out`
/// as the only public signal. Two inputs make one constraint, each
/// further input adds a chained constraint through an intermediate wire.
pub fn multiplier_r1cs(num_inputs: usize) -> R1cs {
    assert!(num_inputs >= 2);
    let one = BN254Scalar::one();

    // wires: [1, out, in_1..in_k, intermediates…]
    let num_wires = 2 + num_inputs + (num_inputs - 2);
    let mut cs = R1cs::new(1, num_wires);

    let in_wire = |i: usize| 2 + i;
    let tmp_wire = |i: usize| 2 + num_inputs + i;

    let mut acc = in_wire(0);
    for i in 1..num_inputs {
        let out = if i == num_inputs - 1 {
            1 // the public output wire
        } else {
            tmp_wire(i - 1)
        };
        cs.add_constraint(
            vec![(acc, one)],
            vec![(in_wire(i), one)],
            vec![(out, one)],
        );
        acc = out;
    }
    cs
}

/// The full assignment for [`multiplier_r1cs`], given the inputs.
pub fn multiplier_assignment(inputs: &[BN254Scalar]) -> Vec<BN254Scalar> {
    assert!(inputs.len() >= 2);
    let mut assignment = vec![BN254Scalar::one()];

    let mut product = inputs[0];
    for x in &inputs[1..] {
        product.mul_assign(x);
    }
    assignment.push(product); // public output
    assignment.extend_from_slice(inputs);

    // intermediate products of the chain, excluding the final one
    let mut acc = inputs[0];
    for x in &inputs[1..inputs.len() - 1] {
        acc.mul_assign(x);
        assignment.push(acc);
    }
    assignment
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn multiplier_2_satisfied() {
        let cs = multiplier_r1cs(2);
        assert_eq!(cs.num_constraints(), 1);

        let assignment = multiplier_assignment(&[BN254Scalar::from(2u32), BN254Scalar::from(3u32)]);
        assert_eq!(assignment[1], BN254Scalar::from(6u32));
        assert!(cs.is_satisfied(&assignment));

        let mut bad = assignment.clone();
        bad[1] = BN254Scalar::from(7u32);
        assert!(!cs.is_satisfied(&bad));
    }

    #[test]
    fn multiplier_3_satisfied() {
        let cs = multiplier_r1cs(3);
        assert_eq!(cs.num_constraints(), 2);

        let assignment = multiplier_assignment(&[
            BN254Scalar::from(2u32),
            BN254Scalar::from(3u32),
            BN254Scalar::from(4u32),
        ]);
        assert_eq!(assignment[1], BN254Scalar::from(24u32));
        assert!(cs.is_satisfied(&assignment));

        // wrong intermediate wire
        let mut bad = assignment.clone();
        let last = bad.len() - 1;
        bad[last] = BN254Scalar::from(5u32);
        assert!(!cs.is_satisfied(&bad));
    }

    #[test]
    fn wrong_layout_rejected() {
        let cs = multiplier_r1cs(2);
        assert!(!cs.is_satisfied(&[BN254Scalar::one()]));

        let mut assignment =
            multiplier_assignment(&[BN254Scalar::from(2u32), BN254Scalar::from(3u32)]);
        assignment[0] = BN254Scalar::from(2u32);
        assert!(!cs.is_satisfied(&assignment));
    }
}
