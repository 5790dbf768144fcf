use thiserror::Error;

use super::FittingMethod;

/// Errors raised while building a cost specification from configuration.
///
/// All of these are detected before any step is evaluated, so a specification
/// that fails to build never touches a running cost.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The fitting method identifier is not one of `fix`, `spec`, `exp`, `poly`, `free`.
    #[error("cost key `{key}` not recognized, expected one of: fix, spec, exp, poly, free")]
    UnknownKey { key: String },

    /// The parallel step fields do not describe the same number of steps.
    #[error(
        "step count mismatch: {keys} key(s), {fitting_values} fitting value(s), \
         {dependant_values} dependant value(s)"
    )]
    LengthMismatch {
        keys: usize,
        fitting_values: usize,
        dependant_values: usize,
    },

    /// An exponential fit needs two or three coefficients.
    #[error("exponential fitting needs 2 or 3 values, got {count}")]
    ExpArity { count: usize },

    /// The fitting value has the wrong shape for its method.
    #[error("invalid fitting value for `{method}`: {context}")]
    InvalidCoefficients {
        method: FittingMethod,
        context: String,
    },

    /// A non-`fix` step is missing a required field.
    #[error("`{method}` step is missing `{field}`")]
    MissingField {
        method: FittingMethod,
        field: &'static str,
    },
}

/// Errors raised while evaluating a cost specification against a component.
///
/// Evaluation stops at the first failing step. The running cost keeps the
/// value written by the last successful step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    /// The component has no attribute with the requested name.
    #[error("component `{component}` has no attribute `{attribute}`")]
    AttributeNotFound { component: String, attribute: String },

    /// A free-exponent fit was given an odd number of values.
    #[error(
        "in component `{component}`, the number of fitting values is {count}, but it needs to be even"
    )]
    OddCoefficientCount { component: String, count: usize },

    /// A step needs the running cost before any cost has been computed.
    #[error("in component `{component}`, `{method}` step needs a cost that has not been computed")]
    MissingRunningCost {
        component: String,
        method: FittingMethod,
    },

    /// A step produced a cost that is not a finite number.
    #[error("in component `{component}`, `{method}` step produced a non-finite cost: {cost}")]
    NonFinite {
        component: String,
        method: FittingMethod,
        cost: f64,
    },
}
