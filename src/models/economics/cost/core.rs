//! Sequential cost fitting.
//!
//! A cost specification is an ordered list of steps. Each step resolves a
//! dependent value, evaluates its fitted curve at that value, and replaces the
//! running cost. Later steps may depend on the cost produced by earlier ones,
//! so steps always run strictly in order.

mod component;
mod config;
mod error;
mod financials;
mod fit;
mod resolve;

#[cfg(test)]
mod test_support;

pub use component::{Asset, Component, Costs};
pub use config::{AssetConfig, FinancialsConfig, FittingValue, OneOrMany};
pub use error::{ConfigError, EvaluateError};
pub use financials::{
    CostKind, DependentValue, Financials, Fitting, FittingMethod, Multiplier, Step,
};

use fit::apply;
use resolve::resolve;

/// Evaluates a cost specification against a component.
///
/// Runs every step in order and stores the result as the specification's
/// cost. A specification without steps is left untouched.
///
/// # Errors
///
/// Returns an [`EvaluateError`] from the first failing step. The cost keeps
/// the value written by the last successful step.
///
/// # Example
///
/// ```
/// use cost_fitting_models::models::economics::cost::{
///     Asset, Financials, Fitting, Multiplier, Step, evaluate,
/// };
///
/// let pump = Asset::new("pump").with_attribute("power", 5.0);
/// let mut capex = Financials::capex(vec![Step::fitted(
///     Fitting::Spec(Multiplier::Value(3.0)),
///     "power",
/// )]);
///
/// evaluate(&pump, &mut capex).unwrap();
/// assert_eq!(capex.cost(), Some(15.0));
/// ```
pub fn evaluate(
    component: &impl Component,
    financials: &mut Financials,
) -> Result<(), EvaluateError> {
    let Financials { kind, steps, cost } = financials;

    for step in steps.iter() {
        *cost = evaluate_step(component, *kind, step, *cost)?;
    }

    Ok(())
}

/// Evaluates one step, returning the new running cost.
fn evaluate_step(
    component: &impl Component,
    kind: CostKind,
    step: &Step,
    running_cost: Option<f64>,
) -> Result<Option<f64>, EvaluateError> {
    let Step::Fitted { fitting, dependent } = step else {
        return Ok(running_cost);
    };

    let method = fitting.method();
    let x = resolve(component, kind, running_cost, method, dependent)?;
    let cost = apply(component, fitting, x, running_cost)?;

    if !cost.is_finite() {
        return Err(EvaluateError::NonFinite {
            component: component.name().to_owned(),
            method,
            cost,
        });
    }

    Ok(Some(cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::test_support::TestComponent;

    fn component() -> TestComponent {
        TestComponent::new("this_ely")
            .with_attribute("x", 2.0)
            .with_attribute("capacity", 5.0)
    }

    #[test]
    fn empty_specification_is_a_no_op() {
        let mut financials = Financials::empty(CostKind::Capex).with_cost(12.0);
        evaluate(&component(), &mut financials).unwrap();
        assert_eq!(financials.cost(), Some(12.0));

        let mut financials = Financials::empty(CostKind::Opex);
        evaluate(&TestComponent::new("nothing"), &mut financials).unwrap();
        assert_eq!(financials.cost(), None);
    }

    #[test]
    fn fix_keeps_given_cost() {
        let mut financials = Financials::capex(vec![Step::Fix]).with_cost(1500.0);
        evaluate(&component(), &mut financials).unwrap();
        assert_eq!(financials.cost(), Some(1500.0));
    }

    #[test]
    fn fix_without_cost_stays_unset() {
        let mut financials = Financials::capex(vec![Step::Fix]);
        evaluate(&component(), &mut financials).unwrap();
        assert_eq!(financials.cost(), None);
    }

    #[test]
    fn spec_scales_dependent_value() {
        let mut financials = Financials::capex(vec![Step::fitted(
            Fitting::Spec(Multiplier::Value(3.0)),
            "capacity",
        )]);
        evaluate(&component(), &mut financials).unwrap();
        assert_relative_eq!(financials.cost().unwrap(), 15.0);
    }

    #[test]
    fn fix_then_spec_of_running_cost() {
        let mut financials = Financials::capex(vec![
            Step::Fix,
            Step::fitted(Fitting::Spec(Multiplier::RunningCost), "capacity"),
        ])
        .with_cost(2.0);
        evaluate(&component(), &mut financials).unwrap();
        assert_relative_eq!(financials.cost().unwrap(), 10.0);
    }

    #[test]
    fn spec_then_poly_of_own_capex() {
        // The second step reads the running capital cost, not an attribute.
        let component = component().with_attribute("capex", 1000.0);
        let mut financials = Financials::capex(vec![
            Step::fitted(Fitting::Spec(Multiplier::Value(3.0)), "x"),
            Step::fitted(Fitting::Poly(vec![1.0, 2.0, 3.0]), "capex"),
        ]);
        evaluate(&component, &mut financials).unwrap();

        // x = 2 -> 6 -> 1 + 2*6 + 3*36
        assert_relative_eq!(financials.cost().unwrap(), 121.0);
    }

    #[test]
    fn opex_depends_on_component_capex() {
        let component = component().with_capex_cost(4000.0);
        let mut financials = Financials::opex(vec![Step::fitted(
            Fitting::Spec(Multiplier::Value(0.025)),
            "capex",
        )]);
        evaluate(&component, &mut financials).unwrap();
        assert_relative_eq!(financials.cost().unwrap(), 100.0);
    }

    #[test]
    fn exp_poly_and_free() {
        let cases = [
            (
                Fitting::Exp {
                    offset: 1.0,
                    scale: 2.0,
                    rate: 3.0,
                },
                "zero",
                3.0,
            ),
            (Fitting::Poly(vec![1.0, 2.0, 3.0]), "x", 17.0),
            (Fitting::Free(vec![2.0, 3.0, 4.0, 1.0]), "x", 24.0),
        ];

        let component = component().with_attribute("zero", 0.0);
        for (fitting, dependent, expected) in cases {
            let mut financials = Financials::capex(vec![Step::fitted(fitting, dependent)]);
            evaluate(&component, &mut financials).unwrap();
            assert_relative_eq!(financials.cost().unwrap(), expected);
        }
    }

    #[test]
    fn failure_keeps_last_successful_cost() {
        let mut financials = Financials::capex(vec![
            Step::fitted(Fitting::Spec(Multiplier::Value(3.0)), "x"),
            Step::fitted(Fitting::Free(vec![1.0, 2.0, 3.0]), "x"),
        ]);
        let err = evaluate(&component(), &mut financials).unwrap_err();

        assert_eq!(
            err,
            EvaluateError::OddCoefficientCount {
                component: "this_ely".into(),
                count: 3,
            }
        );
        assert_relative_eq!(financials.cost().unwrap(), 6.0);
    }

    #[test]
    fn missing_attribute_is_reported() {
        let mut financials = Financials::opex(vec![Step::fitted(
            Fitting::Poly(vec![1.0]),
            "throughput",
        )])
        .with_cost(9.0);
        let err = evaluate(&component(), &mut financials).unwrap_err();

        assert!(matches!(
            err,
            EvaluateError::AttributeNotFound { ref attribute, .. } if attribute == "throughput"
        ));
        assert_eq!(financials.cost(), Some(9.0));
    }

    #[test]
    fn non_finite_result_is_not_written() {
        let component = component().with_attribute("negative", -4.0);
        let mut financials = Financials::capex(vec![Step::fitted(
            Fitting::Free(vec![1.0, 0.5]),
            "negative",
        )])
        .with_cost(1.0);
        let err = evaluate(&component, &mut financials).unwrap_err();

        assert!(matches!(
            err,
            EvaluateError::NonFinite {
                method: FittingMethod::Free,
                ..
            }
        ));
        assert_eq!(financials.cost(), Some(1.0));
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let mut financials = Financials::capex(vec![
            Step::fitted(
                Fitting::Exp {
                    offset: 10.0,
                    scale: 1.0,
                    rate: 0.1,
                },
                "capacity",
            ),
            Step::fitted(Fitting::Poly(vec![0.0, 1.5]), "capex"),
        ]);

        evaluate(&component(), &mut financials).unwrap();
        let first = financials.cost();
        evaluate(&component(), &mut financials).unwrap();
        assert_eq!(financials.cost(), first);
    }
}
