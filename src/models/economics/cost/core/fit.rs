//! Per-method step evaluation.

use crate::support::fitting::{exponential, polynomial, power_sum, scaled};

use super::{Component, EvaluateError, Fitting, Multiplier};

/// Evaluates a fitted step at the resolved dependent value `x`.
///
/// `running_cost` is the cost before this step, used by a specific cost step
/// whose multiplier is [`Multiplier::RunningCost`].
///
/// # Errors
///
/// Returns [`EvaluateError::OddCoefficientCount`] for a free-exponent fit with
/// an odd number of values, and [`EvaluateError::MissingRunningCost`] if the
/// running cost is needed but absent.
pub(super) fn apply(
    component: &impl Component,
    fitting: &Fitting,
    x: f64,
    running_cost: Option<f64>,
) -> Result<f64, EvaluateError> {
    match fitting {
        Fitting::Spec(Multiplier::Value(factor)) => Ok(scaled(*factor, x)),
        Fitting::Spec(Multiplier::RunningCost) => {
            let factor = running_cost.ok_or_else(|| EvaluateError::MissingRunningCost {
                component: component.name().to_owned(),
                method: fitting.method(),
            })?;
            Ok(scaled(factor, x))
        }
        Fitting::Exp {
            offset,
            scale,
            rate,
        } => Ok(exponential(*offset, *scale, *rate, x)),
        Fitting::Poly(coefficients) => Ok(polynomial(coefficients, x)),
        Fitting::Free(values) => {
            if values.len() % 2 != 0 {
                return Err(EvaluateError::OddCoefficientCount {
                    component: component.name().to_owned(),
                    count: values.len(),
                });
            }
            let terms: Vec<(f64, f64)> = values
                .chunks_exact(2)
                .map(|pair| (pair[0], pair[1]))
                .collect();
            Ok(power_sum(&terms, x))
        }
    }
}
