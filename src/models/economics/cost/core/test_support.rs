use std::collections::HashMap;

use super::Component;

/// Map-backed component for exercising the evaluator in isolation.
#[derive(Debug, Clone, Default)]
pub(super) struct TestComponent {
    name: String,
    attributes: HashMap<String, f64>,
    capex_cost: Option<f64>,
}

impl TestComponent {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    pub(super) fn with_attribute(mut self, name: &str, value: f64) -> Self {
        self.attributes.insert(name.to_owned(), value);
        self
    }

    pub(super) fn with_capex_cost(mut self, cost: f64) -> Self {
        self.capex_cost = Some(cost);
        self
    }
}

impl Component for TestComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).copied()
    }

    fn capex_cost(&self) -> Option<f64> {
        self.capex_cost
    }
}
