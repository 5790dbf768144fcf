//! Closed-form cost fitting curves.
//!
//! Each function evaluates a fitted curve at a single dependent value `x`.
//! The curves are generic over [`num_traits::Float`] so they work for both
//! `f32` and `f64` inputs.
//!
//! # Provided curves
//!
//! - [`scaled`]: `k * x`
//! - [`exponential`]: `a + b * exp(c * x)`
//! - [`polynomial`]: `c_0 + c_1 * x + c_2 * x^2 + ...`
//! - [`power_sum`]: `c_0 * x^e_0 + c_1 * x^e_1 + ...`
//!
//! No domain checks are performed. A fractional power of a negative value,
//! for example, yields `NaN` just as [`Float::powf`] does.
//!
//! # Example
//!
//! ```
//! use cost_fitting_models::support::fitting::{polynomial, power_sum};
//!
//! // 1 + 2x + 3x^2 at x = 2
//! assert_eq!(polynomial(&[1.0, 2.0, 3.0], 2.0), 17.0);
//!
//! // 2x^3 + 4x^1 at x = 2
//! assert_eq!(power_sum(&[(2.0, 3.0), (4.0, 1.0)], 2.0), 24.0);
//! ```

mod exponential;
mod polynomial;
mod power_sum;

pub use exponential::exponential;
pub use polynomial::polynomial;
pub use power_sum::power_sum;

use num_traits::Float;

/// Scales the dependent value by a specific cost factor.
#[inline]
#[must_use]
pub fn scaled<F: Float>(factor: F, x: F) -> F {
    factor * x
}
