//! Economic models.
//!
//! This module contains models that put a price on components, such as
//! fitted capital and operating cost curves.

pub mod cost;
