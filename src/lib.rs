//! # Cost Fitting Models
//!
//! Fitted capital and operating cost models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A techno-economic simulation needs a cost for every component, usually
//! derived from a physical or operational attribute such as installed
//! capacity. This crate evaluates declarative cost specifications (fixed,
//! specific, exponential, polynomial and free-exponent fits, optionally
//! chained) against those attributes.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
