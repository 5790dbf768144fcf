use std::collections::BTreeMap;

use super::{CostKind, EvaluateError, Financials, evaluate};

/// Read access to the attributes a cost specification may depend on.
///
/// Implement this for any simulated asset whose costs are evaluated with
/// [`evaluate`]. Attribute lookup is by configuration name, so a cost
/// specification can reference any scalar the component chooses to expose.
pub trait Component {
    /// Name used to identify the component in errors.
    fn name(&self) -> &str;

    /// Returns the named scalar attribute, if the component has it.
    fn attribute(&self, name: &str) -> Option<f64>;

    /// Returns the computed capital cost, if any.
    fn capex_cost(&self) -> Option<f64>;
}

/// A simulated asset with named attributes and its own cost specifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    pub attributes: BTreeMap<String, f64>,
    capex: Financials,
    opex: Financials,
}

/// Evaluated costs of an [`Asset`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Costs {
    /// Capital cost, or `None` if no capital cost applies.
    pub capex: Option<f64>,
    /// Operating cost, or `None` if no operating cost applies.
    pub opex: Option<f64>,
}

impl Asset {
    /// Creates an asset with no attributes and no applicable costs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            capex: Financials::empty(CostKind::Capex),
            opex: Financials::empty(CostKind::Opex),
        }
    }

    /// Adds or replaces a named attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Sets the capital cost specification.
    ///
    /// # Panics
    ///
    /// Panics if `capex` is not a [`CostKind::Capex`] specification.
    #[must_use]
    pub fn with_capex(mut self, capex: Financials) -> Self {
        assert_eq!(capex.kind(), CostKind::Capex, "capex must be a capital cost");
        self.capex = capex;
        self
    }

    /// Sets the operating cost specification.
    ///
    /// # Panics
    ///
    /// Panics if `opex` is not a [`CostKind::Opex`] specification.
    #[must_use]
    pub fn with_opex(mut self, opex: Financials) -> Self {
        assert_eq!(opex.kind(), CostKind::Opex, "opex must be an operating cost");
        self.opex = opex;
        self
    }

    #[must_use]
    pub fn capex(&self) -> &Financials {
        &self.capex
    }

    #[must_use]
    pub fn opex(&self) -> &Financials {
        &self.opex
    }

    /// Returns the current capital and operating costs.
    #[must_use]
    pub fn costs(&self) -> Costs {
        Costs {
            capex: self.capex.cost(),
            opex: self.opex.cost(),
        }
    }

    /// Evaluates the capital cost, then the operating cost.
    ///
    /// The operating cost sees the freshly computed capital cost, so an
    /// operating cost specified as a share of the investment works.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvaluateError`] raised. If the capital cost fails,
    /// the operating cost is not evaluated.
    pub fn update_costs(&mut self) -> Result<(), EvaluateError> {
        let Self {
            name,
            attributes,
            capex,
            opex,
        } = self;

        evaluate(
            &AssetView {
                name: name.as_str(),
                attributes: &*attributes,
                capex_cost: capex.cost(),
            },
            capex,
        )?;

        evaluate(
            &AssetView {
                name: name.as_str(),
                attributes: &*attributes,
                capex_cost: capex.cost(),
            },
            opex,
        )
    }
}

impl Component for Asset {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }

    fn capex_cost(&self) -> Option<f64> {
        self.capex.cost()
    }
}

/// Borrowed view of an asset while one of its own specifications is mutated.
struct AssetView<'a> {
    name: &'a str,
    attributes: &'a BTreeMap<String, f64>,
    capex_cost: Option<f64>,
}

impl Component for AssetView<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }

    fn capex_cost(&self) -> Option<f64> {
        self.capex_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::economics::cost::core::{Fitting, Multiplier, Step};

    fn electrolyzer() -> Asset {
        Asset::new("this_ely")
            .with_attribute("power_max", 100.0)
            .with_capex(Financials::capex(vec![Step::fitted(
                Fitting::Poly(vec![1000.0, 50.0]),
                "power_max",
            )]))
            .with_opex(Financials::opex(vec![Step::fitted(
                Fitting::Spec(Multiplier::Value(0.02)),
                "capex",
            )]))
    }

    #[test]
    fn opex_follows_fresh_capex() {
        let mut asset = electrolyzer();
        asset.update_costs().unwrap();

        let costs = asset.costs();
        assert_relative_eq!(costs.capex.unwrap(), 6000.0);
        assert_relative_eq!(costs.opex.unwrap(), 120.0);
    }

    #[test]
    fn new_asset_has_no_costs() {
        let mut asset = Asset::new("pipe").with_attribute("length", 3.0);
        asset.update_costs().unwrap();
        assert_eq!(asset.costs(), Costs::default());
    }

    #[test]
    fn failing_capex_skips_opex() {
        let mut asset = Asset::new("tank")
            .with_capex(Financials::capex(vec![Step::fitted(
                Fitting::Spec(Multiplier::Value(2.0)),
                "volume",
            )]))
            .with_opex(Financials::opex(vec![Step::Fix]).with_cost(7.0));

        let err = asset.update_costs().unwrap_err();
        assert_eq!(
            err,
            EvaluateError::AttributeNotFound {
                component: "tank".into(),
                attribute: "volume".into(),
            }
        );
        assert_eq!(asset.costs().capex, None);
        assert_eq!(asset.costs().opex, Some(7.0));
    }

    #[test]
    fn component_view_of_asset() {
        let mut asset = electrolyzer();
        assert_eq!(asset.attribute("power_max"), Some(100.0));
        assert_eq!(asset.attribute("missing"), None);
        assert_eq!(asset.capex_cost(), None);

        asset.update_costs().unwrap();
        assert_eq!(asset.capex_cost(), Some(6000.0));
    }

    #[test]
    #[should_panic(expected = "capex must be a capital cost")]
    fn rejects_opex_as_capex() {
        let _ = Asset::new("x").with_capex(Financials::opex(vec![]));
    }
}
