//! Fitted cost models.
//!
//! Components in a techno-economic simulation usually carry two cost
//! specifications, one for capital expenditure (CAPEX) and one for operating
//! expenditure (OPEX). Each specification chains one or more fitting steps:
//!
//! | Method | Cost                                  |
//! |--------|---------------------------------------|
//! | `fix`  | unchanged                             |
//! | `spec` | `x * k`, with `k` a value or the cost |
//! | `exp`  | `a + b * exp(c * x)`                  |
//! | `poly` | `c_0 + c_1 * x + c_2 * x^2 + ...`     |
//! | `free` | `c_0 * x^e_0 + c_1 * x^e_1 + ...`     |
//!
//! where `x` is the step's dependent value, a component attribute or the
//! component's capital cost.
//!
//! [`evaluate`] runs a single specification against any [`Component`].
//! [`CostModel`] is the [`twine_core::Model`] adapter that evaluates both
//! specifications of an [`Asset`].

mod core;

pub use self::core::{
    Asset, AssetConfig, Component, ConfigError, CostKind, Costs, DependentValue, EvaluateError,
    Financials, FinancialsConfig, Fitting, FittingMethod, FittingValue, Multiplier, OneOrMany,
    Step, evaluate,
};

use twine_core::Model;

/// Evaluates the capital and operating costs of an [`Asset`].
///
/// The input asset is not modified; evaluation runs on a copy.
///
/// # Example
///
/// ```
/// use cost_fitting_models::models::economics::cost::{
///     Asset, CostModel, Financials, Fitting, Multiplier, Step,
/// };
/// use twine_core::Model;
///
/// let asset = Asset::new("battery")
///     .with_attribute("capacity", 200.0)
///     .with_capex(Financials::capex(vec![Step::fitted(
///         Fitting::Spec(Multiplier::Value(450.0)),
///         "capacity",
///     )]))
///     .with_opex(Financials::opex(vec![Step::fitted(
///         Fitting::Spec(Multiplier::Value(0.25)),
///         "capex",
///     )]));
///
/// let costs = CostModel.call(&asset).unwrap();
/// assert_eq!(costs.capex, Some(90_000.0));
/// assert_eq!(costs.opex, Some(22_500.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CostModel;

impl Model for CostModel {
    type Input = Asset;
    type Output = Costs;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut asset = input.clone();
        asset.update_costs()?;
        Ok(asset.costs())
    }
}
