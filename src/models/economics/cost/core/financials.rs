use std::{fmt, str::FromStr};

use super::ConfigError;

/// Cost fitting method selected by a specification key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FittingMethod {
    /// The running cost is already the fixed value.
    Fix,
    /// Specific cost, multiplied by the dependent value.
    Spec,
    /// Exponential fit.
    Exp,
    /// Polynomial fit with ascending integer exponents.
    Poly,
    /// Polynomial fit with freely chosen exponents.
    Free,
}

impl FittingMethod {
    /// Returns the configuration identifier for this method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Spec => "spec",
            Self::Exp => "exp",
            Self::Poly => "poly",
            Self::Free => "free",
        }
    }
}

impl FromStr for FittingMethod {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "fix" => Ok(Self::Fix),
            "spec" => Ok(Self::Spec),
            "exp" => Ok(Self::Exp),
            "poly" => Ok(Self::Poly),
            "free" => Ok(Self::Free),
            _ => Err(ConfigError::UnknownKey {
                key: key.to_owned(),
            }),
        }
    }
}

impl fmt::Display for FittingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of a component's two cost records a specification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostKind {
    /// Capital expenditure.
    Capex,
    /// Operating expenditure.
    Opex,
}

/// The factor applied by a [`Fitting::Spec`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Multiplier {
    /// A literal specific cost.
    Value(f64),
    /// The running cost produced by the previous steps.
    RunningCost,
}

/// Coefficients of a fitted (non-`fix`) step.
#[derive(Debug, Clone, PartialEq)]
pub enum Fitting {
    /// `cost = x * multiplier`
    Spec(Multiplier),
    /// `cost = offset + scale * exp(rate * x)`
    Exp { offset: f64, scale: f64, rate: f64 },
    /// `cost = sum(c[i] * x^i)`
    Poly(Vec<f64>),
    /// `cost = sum(c[2j] * x^c[2j + 1])`
    ///
    /// Values alternate coefficient and exponent. The count is checked when
    /// the step is evaluated so the failure can name the component.
    Free(Vec<f64>),
}

impl Fitting {
    /// Returns the method this fitting belongs to.
    #[must_use]
    pub fn method(&self) -> FittingMethod {
        match self {
            Self::Spec(_) => FittingMethod::Spec,
            Self::Exp { .. } => FittingMethod::Exp,
            Self::Poly(_) => FittingMethod::Poly,
            Self::Free(_) => FittingMethod::Free,
        }
    }
}

/// The input variable a fitted step is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependentValue {
    /// A named scalar attribute of the component.
    Attribute(String),
    /// The component's capital cost.
    Capex,
}

impl DependentValue {
    /// Creates a dependent value from its configuration name.
    ///
    /// The name `"capex"` refers to the capital cost itself rather than to an
    /// attribute of that name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "capex" {
            Self::Capex
        } else {
            Self::Attribute(name)
        }
    }
}

impl From<&str> for DependentValue {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for DependentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(name) => f.write_str(name),
            Self::Capex => f.write_str("capex"),
        }
    }
}

/// One step of a cost specification.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Leaves the running cost unchanged.
    Fix,
    /// Replaces the running cost with a fitted value.
    Fitted {
        fitting: Fitting,
        dependent: DependentValue,
    },
}

impl Step {
    /// Creates a fitted step.
    pub fn fitted(fitting: Fitting, dependent: impl Into<DependentValue>) -> Self {
        Self::Fitted {
            fitting,
            dependent: dependent.into(),
        }
    }

    /// Returns the fitting method of this step.
    #[must_use]
    pub fn method(&self) -> FittingMethod {
        match self {
            Self::Fix => FittingMethod::Fix,
            Self::Fitted { fitting, .. } => fitting.method(),
        }
    }
}

/// A capital or operating cost specification for one component.
///
/// Steps are evaluated in order, each one replacing the running cost.
/// A specification without steps means no cost applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Financials {
    pub(super) kind: CostKind,
    pub(super) steps: Vec<Step>,
    pub(super) cost: Option<f64>,
}

impl Financials {
    /// Creates a specification with the given steps and no cost yet.
    #[must_use]
    pub fn new(kind: CostKind, steps: Vec<Step>) -> Self {
        Self {
            kind,
            steps,
            cost: None,
        }
    }

    /// Creates a capital cost specification.
    #[must_use]
    pub fn capex(steps: Vec<Step>) -> Self {
        Self::new(CostKind::Capex, steps)
    }

    /// Creates an operating cost specification.
    #[must_use]
    pub fn opex(steps: Vec<Step>) -> Self {
        Self::new(CostKind::Opex, steps)
    }

    /// Creates a specification for which no cost applies.
    #[must_use]
    pub fn empty(kind: CostKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Sets the starting cost, as used by `fix` steps.
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn kind(&self) -> CostKind {
        self.kind
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the running cost, or `None` if no cost has been set or computed.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Returns `true` if no cost applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
