//! Dependent value resolution.

use super::{Component, CostKind, DependentValue, EvaluateError, FittingMethod};

/// Resolves the scalar a step is evaluated against.
///
/// Named attributes are read from the component. The `capex` dependency reads
/// a capital cost: while evaluating a capital cost specification that is the
/// specification's own running cost, otherwise it is the component's capex.
///
/// # Errors
///
/// Returns [`EvaluateError::AttributeNotFound`] if the component has no such
/// attribute or no capital cost to depend on, and
/// [`EvaluateError::MissingRunningCost`] if a capital cost specification
/// depends on itself before any cost exists.
pub(super) fn resolve(
    component: &impl Component,
    kind: CostKind,
    running_cost: Option<f64>,
    method: FittingMethod,
    dependent: &DependentValue,
) -> Result<f64, EvaluateError> {
    match (dependent, kind) {
        (DependentValue::Attribute(name), _) => {
            component
                .attribute(name)
                .ok_or_else(|| EvaluateError::AttributeNotFound {
                    component: component.name().to_owned(),
                    attribute: name.clone(),
                })
        }
        (DependentValue::Capex, CostKind::Capex) => {
            running_cost.ok_or_else(|| EvaluateError::MissingRunningCost {
                component: component.name().to_owned(),
                method,
            })
        }
        (DependentValue::Capex, CostKind::Opex) => {
            component
                .capex_cost()
                .ok_or_else(|| EvaluateError::AttributeNotFound {
                    component: component.name().to_owned(),
                    attribute: "capex.cost".to_owned(),
                })
        }
    }
}
