use num_traits::Float;

/// Evaluates a sum of power terms with free exponents.
///
/// Each `(coefficient, exponent)` pair contributes `coefficient * x^exponent`.
#[must_use]
pub fn power_sum<F: Float>(terms: &[(F, F)], x: F) -> F {
    terms
        .iter()
        .fold(F::zero(), |acc, &(c, e)| acc + c * x.powf(e))
}
