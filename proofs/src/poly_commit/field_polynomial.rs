use num_bigint::{BigUint, ToBigUint};
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use veil_algebra::prelude::*;

/// A dense polynomial over a prime field, low-order coefficient first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial.
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the coefficient slice.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial.
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial.
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order
    /// coefficient first. High-order zero coefficients are trimmed.
    /// # Example
    /// ```
    /// use veil_proofs::poly_commit::field_polynomial::FpPolynomial;
    /// use veil_algebra::bn254::BN254Scalar;
    /// use veil_algebra::{Zero, One};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one, zero]);
    /// assert_eq!(poly.degree(), 2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build the vanishing polynomial `X^n - 1` of a radix-2 domain.
    pub fn vanishing(n: usize) -> Self {
        let mut coefs = vec![F::zero(); n + 1];
        coefs[0] = F::one().neg();
        coefs[n] = F::one();
        Self::from_coefs(coefs)
    }

    /// Build a polynomial from its zeroes/roots.
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let mut p = r.clone();
            r.coefs.insert(0, F::zero()); // multiply by X
            p.mul_scalar_assign(root);
            r.sub_assign(&p); // r = r * (X - x_0)
        }
        r.trim_coefs();
        r
    }

    /// Return a polynomial with `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let mut coefs = Vec::with_capacity(degree + 1);
        for _ in 0..degree + 1 {
            coefs.push(F::random(prng));
        }
        Self::from_coefs(coefs)
    }

    /// Remove high-order zero coefficients.
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().unwrap().is_zero() {
            self.coefs.pop();
        }
    }

    /// Return the degree of the polynomial.
    pub fn degree(&self) -> usize {
        if self.coefs.is_empty() {
            0
        } else {
            self.coefs.len() - 1
        }
    }

    /// Test if the polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate the polynomial at a point.
    pub fn eval(&self, point: &F) -> F {
        let mut result = F::zero();
        let mut variable = F::one();
        for coef in self.coefs.iter() {
            let mut a = variable;
            a.mul_assign(coef);
            result.add_assign(&a);
            variable.mul_assign(point);
        }
        result
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(*other_coef);
            }
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtract another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(other_coef.neg());
            }
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg_assign(&mut self) {
        let minus_one = F::one().neg();
        self.mul_scalar_assign(&minus_one);
    }

    /// Negate the coefficients, producing a new polynomial.
    pub fn neg(&self) -> Self {
        let mut new = self.clone();
        new.neg_assign();
        new
    }

    /// Multiply the polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply the polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Substitute the variable by a scalar multiple of itself:
    /// `mul_var(sum a_i X^i, b) = sum a_i b^i X^i`.
    pub fn mul_var_assign(&mut self, scalar: &F) {
        let mut r = F::one();
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(&r);
            r.mul_assign(scalar);
        }
        self.trim_coefs();
    }

    /// Substitute the variable by a scalar multiple of itself, producing a
    /// new polynomial.
    pub fn mul_var(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_var_assign(scalar);
        new
    }

    /// Multiply with another polynomial, producing a new polynomial.
    /// Schoolbook product; the circuits handled here are small.
    /// # Example
    /// ```
    /// use veil_proofs::poly_commit::field_polynomial::FpPolynomial;
    /// use veil_algebra::bn254::BN254Scalar;
    /// use veil_algebra::{Zero, One, ops::*};
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// // (1 + X) * (1 + X) = 1 + 2X + X^2
    /// let p = FpPolynomial::from_coefs(vec![one, one]);
    /// let sq = p.mul(&p);
    /// assert_eq!(sq, FpPolynomial::from_coefs(vec![one, two, one]));
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            for (j, b) in other.coefs.iter().enumerate() {
                let ab = a.mul(b);
                coefs[i + j].add_assign(&ab);
            }
        }
        Self::from_coefs(coefs)
    }

    /// Multiply with another polynomial by evaluation over a radix-2
    /// domain covering the product degree. Falls back to the schoolbook
    /// product when the field has no root of unity of the needed order.
    pub fn fast_mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let product_len = self.coefs.len() + other.coefs.len() - 1;
        let n = product_len.next_power_of_two();
        let root = match primitive_nth_root_of_unity::<F>(n) {
            Some(root) => root,
            None => return self.mul(other),
        };

        let self_evals = self.fft_with_unity_root(&root, n);
        let other_evals = other.fft_with_unity_root(&root, n);
        let product_evals: Vec<F> = self_evals
            .iter()
            .zip(other_evals.iter())
            .map(|(a, b)| a.mul(b))
            .collect();
        Self::ffti(&root, &product_evals, n)
    }

    /// Divide by another polynomial, producing the quotient and remainder.
    /// # Example
    /// ```
    /// use veil_proofs::poly_commit::field_polynomial::FpPolynomial;
    /// use veil_algebra::bn254::BN254Scalar;
    /// use veil_algebra::{Zero, One};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, one, one]);
    /// let divisor = FpPolynomial::from_coefs(vec![one, one]);
    /// let (q, r) = poly.div_rem(&divisor);
    /// assert_eq!(q, FpPolynomial::from_coefs(vec![zero, one]));
    /// assert_eq!(r, FpPolynomial::from_coefs(vec![one]));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let k = self.coefs.len();
        let l = divisor.coefs.len();
        if l > k {
            return (Self::zero(), self.clone());
        }
        let divisor_coefs = &divisor.coefs[..];
        // the divisor is trimmed, its leading coefficient is nonzero
        let bl_inv = divisor_coefs.last().unwrap().inv().unwrap();
        let mut rem = self.coefs.clone();
        let mut quo: Vec<F> = (0..k - l + 1).map(|_| F::zero()).collect();
        for i in (0..(k - l + 1)).rev() {
            let mut qi = bl_inv;
            qi.mul_assign(&rem[i + l - 1]);
            for j in 0..l {
                let mut a = qi;
                a.mul_assign(&divisor_coefs[j]);
                rem[i + j].sub_assign(&a);
            }
            quo[i] = qi;
        }
        for _ in 0..k - l + 1 {
            rem.pop();
        }
        if rem.is_empty() {
            rem.push(F::zero());
        }
        (FpPolynomial::from_coefs(quo), FpPolynomial::from_coefs(rem))
    }

    /// Compute the FFT of the polynomial over a radix-2 domain, returning
    /// the evaluations and the primitive root of unity used.
    pub fn fft(&self, num_points: usize) -> Option<(Vec<F>, F)> {
        assert!(num_points.is_power_of_two());
        let root = primitive_nth_root_of_unity(num_points)?;
        Some((self.fft_with_unity_root(&root, num_points), root))
    }

    /// Compute the FFT of the polynomial using the given n-th root of unity.
    pub fn fft_with_unity_root(&self, root: &F, num_points: usize) -> Vec<F> {
        assert!(num_points.is_power_of_two());
        let mut coefs: Vec<&F> = self.coefs.iter().collect();
        let zero = F::zero();
        if num_points + 1 > self.degree() {
            let dummy = vec![&zero; num_points - self.degree() - 1];
            coefs.extend(dummy);
        }
        recursive_fft(&coefs, root)
    }

    /// Interpolate the polynomial from its evaluations at the n n-th roots
    /// of unity, given a primitive n-th root of unity.
    pub fn ffti(root: &F, values: &[F], len: usize) -> Self {
        let mut values: Vec<&F> = values.iter().collect();
        let zero = F::zero();
        values.resize(len, &zero);

        let coefs = recursive_ifft(&values, root);
        Self::from_coefs(coefs)
    }
}

/// Compute the FFT of a coefficient slice over a radix-2 domain given a
/// primitive n-th root of unity.
fn recursive_fft<F: Scalar>(coefs: &[&F], root: &F) -> Vec<F> {
    let n = coefs.len();
    assert!(n.is_power_of_two());
    if n == 1 {
        return vec![*coefs[0]];
    }
    let root_sq = root.mul(root);
    let even: Vec<&F> = coefs.iter().step_by(2).copied().collect();
    let odd: Vec<&F> = coefs.iter().skip(1).step_by(2).copied().collect();

    let y_even = recursive_fft(&even, &root_sq);
    let y_odd = recursive_fft(&odd, &root_sq);

    let mut omega = F::one();
    let mut fft = vec![F::zero(); n];
    for (i, (e, o)) in y_even.iter().zip(y_odd.iter()).enumerate() {
        let omega_o = omega.mul(o);
        fft[i] = e.add(&omega_o);
        fft[n / 2 + i] = e.sub(&omega_o);
        omega.mul_assign(root);
    }
    fft
}

/// Compute a primitive num_points-th root of unity, if one exists.
pub fn primitive_nth_root_of_unity<F: Scalar>(num_points: usize) -> Option<F> {
    let q_minus_one = BigUint::from_bytes_le(F::get_field_size_le_bytes().as_slice()).sub(1u64);
    let (exp, r) = q_minus_one.div_rem(&num_points.to_biguint().unwrap());
    if !r.is_zero() {
        None
    } else {
        let g = F::multiplicative_generator();
        let exp_u32_limbs = exp.to_u32_digits();
        let exp_u64_limbs = u32_limbs_to_u64_limbs(exp_u32_limbs.as_slice());
        Some(g.pow(&exp_u64_limbs[..]))
    }
}

fn u32_limbs_to_u64_limbs(s: &[u32]) -> Vec<u64> {
    let mut u64_limbs = vec![];
    let mut even_limb = 0u64;
    for (i, u32_limb) in s.iter().enumerate() {
        if i % 2 == 0 {
            even_limb = (*u32_limb) as u64;
        } else {
            u64_limbs.push(even_limb + ((*u32_limb as u64) << 32));
            even_limb = 0u64;
        }
    }
    if even_limb != 0 {
        u64_limbs.push(even_limb);
    }
    u64_limbs
}

/// Interpolate from the evaluations at the n n-th roots of unity, given a
/// primitive n-th root of unity.
pub fn recursive_ifft<F: Scalar>(values: &[&F], root: &F) -> Vec<F> {
    let n = values.len();
    assert!(n.is_power_of_two());
    let root_inv = root.pow(&[(n - 1) as u64]);
    let n = F::from(n as u32);
    let n_inv = n.inv().unwrap();
    recursive_fft(values, &root_inv)
        .into_iter()
        .map(|x| {
            let mut a = n_inv;
            a.mul_assign(&x);
            a
        })
        .collect()
}
