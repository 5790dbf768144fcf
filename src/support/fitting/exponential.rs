use num_traits::Float;

/// Evaluates `offset + scale * exp(rate * x)`.
///
/// # Example
///
/// ```
/// use cost_fitting_models::support::fitting::exponential;
///
/// assert_eq!(exponential(1.0, 2.0, 3.0, 0.0), 3.0);
/// ```
#[inline]
#[must_use]
pub fn exponential<F: Float>(offset: F, scale: F, rate: F, x: F) -> F {
    offset + scale * (rate * x).exp()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_input_reduces_to_offset_plus_scale() {
        assert_relative_eq!(exponential(0.0, 2.0, 3.0, 0.0), 2.0);
        assert_relative_eq!(exponential(1.0, 2.0, 3.0, 0.0), 3.0);
    }

    #[test]
    fn grows_with_positive_rate() {
        let x = 1.5;
        assert_relative_eq!(
            exponential(10.0, 4.0, 0.5, x),
            10.0 + 4.0 * (0.75_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn decays_toward_offset() {
        let far = exponential(100.0, 50.0, -2.0, 50.0);
        assert_relative_eq!(far, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn overflow_is_not_guarded() {
        assert!(exponential(0.0, 1.0, 1.0, 1000.0).is_infinite());
    }
}
