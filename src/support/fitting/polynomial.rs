use num_traits::Float;

/// Evaluates a power series with ascending exponents.
///
/// `coefficients[i]` multiplies `x^i`, so `[c0, c1, c2]` is
/// `c0 + c1 * x + c2 * x^2`.
/// An empty coefficient slice evaluates to zero.
#[must_use]
pub fn polynomial<F: Float>(coefficients: &[F], x: F) -> F {
    // Horner's scheme, from the highest power down.
    coefficients
        .iter()
        .rev()
        .fold(F::zero(), |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(polynomial::<f64>(&[], 3.0), 0.0);
    }

    #[test]
    fn constant() {
        assert_eq!(polynomial(&[7.0], 123.0), 7.0);
    }

    #[test]
    fn quadratic() {
        assert_relative_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_relative_eq!(polynomial(&[1.0, 2.0, 3.0], -1.0), 2.0);
    }

    #[test]
    fn matches_explicit_sum() {
        let c = [0.5, -1.25, 0.0, 2.0, 0.125];
        let x = 1.7_f64;
        let expected: f64 = c
            .iter()
            .enumerate()
            .map(|(i, ci)| ci * x.powi(i32::try_from(i).unwrap()))
            .sum();
        assert_relative_eq!(polynomial(&c, x), expected, epsilon = 1e-12);
    }
}
