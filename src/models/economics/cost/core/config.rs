//! Declarative cost configuration.
//!
//! Cost specifications are usually written as loosely shaped records where a
//! single-step specification gives bare values and a multi-step one gives
//! parallel lists:
//!
//! ```json
//! { "key": "poly", "fitting_value": [1, 2, 3], "dependant_value": "power_max" }
//! { "key": ["spec", "poly"], "fitting_value": [3, [1, 2, 3]], "dependant_value": ["size", "capex"] }
//! ```
//!
//! The shape of `key` decides how the other fields are read, so a bare `poly`
//! coefficient list is one entry, not one entry per step. Building a
//! [`Financials`] normalizes both shapes into the same list of steps and
//! rejects inconsistent records before anything is evaluated.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{
    Asset, ConfigError, CostKind, DependentValue, Financials, Fitting, FittingMethod, Multiplier,
    Step,
};

/// A field given either as a single entry or as a list of entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

/// A raw fitting value entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FittingValue {
    Number(f64),
    Token(String),
    List(Vec<FittingValue>),
    Null,
}

/// Raw cost specification, as found in component configuration.
///
/// A record without a `key` is the empty specification.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FinancialsConfig {
    #[serde(default)]
    pub key: Option<OneOrMany<String>>,

    #[serde(default)]
    pub fitting_value: Option<FittingValue>,

    #[serde(default)]
    pub dependant_value: Option<OneOrMany<Option<String>>>,

    /// Starting cost, required in practice by `fix` steps.
    #[serde(default)]
    pub cost: Option<f64>,
}

impl FinancialsConfig {
    /// Normalizes this record into a [`Financials`] of the given kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown keys, mismatched step counts,
    /// missing fields, or fitting values of the wrong shape.
    pub fn build(self, kind: CostKind) -> Result<Financials, ConfigError> {
        let steps = match self.key {
            None => Vec::new(),
            Some(OneOrMany::One(key)) => {
                let dependant = single_name(self.dependant_value)?;
                vec![build_step(key.parse()?, self.fitting_value, dependant)?]
            }
            Some(OneOrMany::Many(keys)) => {
                let n = keys.len();

                let fitting_values: Vec<Option<FittingValue>> = match self.fitting_value {
                    None => vec![None; n],
                    Some(FittingValue::List(values)) => values.into_iter().map(Some).collect(),
                    Some(value) => vec![Some(value)],
                };

                let dependant_values: Vec<Option<String>> = match self.dependant_value {
                    None => vec![None; n],
                    Some(OneOrMany::One(name)) => vec![name],
                    Some(OneOrMany::Many(names)) => names,
                };

                if fitting_values.len() != n || dependant_values.len() != n {
                    return Err(ConfigError::LengthMismatch {
                        keys: n,
                        fitting_values: fitting_values.len(),
                        dependant_values: dependant_values.len(),
                    });
                }

                keys.into_iter()
                    .zip(fitting_values)
                    .zip(dependant_values)
                    .map(|((key, value), dependant)| build_step(key.parse()?, value, dependant))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        let financials = Financials::new(kind, steps);
        Ok(match self.cost {
            Some(cost) => financials.with_cost(cost),
            None => financials,
        })
    }
}

/// Raw asset record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssetConfig {
    pub name: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, f64>,

    #[serde(default)]
    pub capex: Option<FinancialsConfig>,

    #[serde(default)]
    pub opex: Option<FinancialsConfig>,
}

impl TryFrom<AssetConfig> for Asset {
    type Error = ConfigError;

    fn try_from(config: AssetConfig) -> Result<Self, Self::Error> {
        let capex = config.capex.unwrap_or_default().build(CostKind::Capex)?;
        let opex = config.opex.unwrap_or_default().build(CostKind::Opex)?;

        let mut asset = Asset::new(config.name).with_capex(capex).with_opex(opex);
        asset.attributes = config.attributes;
        Ok(asset)
    }
}

fn single_name(names: Option<OneOrMany<Option<String>>>) -> Result<Option<String>, ConfigError> {
    match names {
        None => Ok(None),
        Some(OneOrMany::One(name)) => Ok(name),
        Some(OneOrMany::Many(mut names)) if names.len() == 1 => Ok(names.pop().flatten()),
        Some(OneOrMany::Many(names)) => Err(ConfigError::LengthMismatch {
            keys: 1,
            fitting_values: 1,
            dependant_values: names.len(),
        }),
    }
}

fn build_step(
    method: FittingMethod,
    value: Option<FittingValue>,
    dependant: Option<String>,
) -> Result<Step, ConfigError> {
    let fitting = match method {
        FittingMethod::Fix => return Ok(Step::Fix),
        FittingMethod::Spec => Fitting::Spec(multiplier(required(method, value)?)?),
        FittingMethod::Exp => exponential(numbers(method, required(method, value)?)?)?,
        FittingMethod::Poly => Fitting::Poly(numbers(method, required(method, value)?)?),
        FittingMethod::Free => Fitting::Free(numbers(method, required(method, value)?)?),
    };

    let dependent = dependant.ok_or(ConfigError::MissingField {
        method,
        field: "dependant_value",
    })?;

    Ok(Step::fitted(fitting, DependentValue::new(dependent)))
}

fn required(
    method: FittingMethod,
    value: Option<FittingValue>,
) -> Result<FittingValue, ConfigError> {
    match value {
        None | Some(FittingValue::Null) => Err(ConfigError::MissingField {
            method,
            field: "fitting_value",
        }),
        Some(value) => Ok(value),
    }
}

fn multiplier(value: FittingValue) -> Result<Multiplier, ConfigError> {
    match value {
        FittingValue::Number(factor) => Ok(Multiplier::Value(factor)),
        FittingValue::Token(token) if token == "cost" => Ok(Multiplier::RunningCost),
        other => Err(ConfigError::InvalidCoefficients {
            method: FittingMethod::Spec,
            context: format!("expected a number or \"cost\", got {other:?}"),
        }),
    }
}

fn numbers(method: FittingMethod, value: FittingValue) -> Result<Vec<f64>, ConfigError> {
    let items = match value {
        FittingValue::List(items) => items,
        other => {
            return Err(ConfigError::InvalidCoefficients {
                method,
                context: format!("expected a list of numbers, got {other:?}"),
            });
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            FittingValue::Number(n) => Ok(n),
            other => Err(ConfigError::InvalidCoefficients {
                method,
                context: format!("expected a number, got {other:?}"),
            }),
        })
        .collect()
}

fn exponential(values: Vec<f64>) -> Result<Fitting, ConfigError> {
    match values[..] {
        [scale, rate] => Ok(Fitting::Exp {
            offset: 0.0,
            scale,
            rate,
        }),
        [offset, scale, rate] => Ok(Fitting::Exp {
            offset,
            scale,
            rate,
        }),
        _ => Err(ConfigError::ExpArity {
            count: values.len(),
        }),
    }
}
