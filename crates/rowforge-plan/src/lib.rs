//! Composed generation plans.
//!
//! A schema-mirroring table function does not scan rows itself; binding it
//! yields a [`ComposedPlan`] that positions one scalar generator call per
//! source column and joins their streams row by row. The engine validates
//! and executes the plan in place of the original call.

pub mod model;
pub mod validate;

pub use model::{ComposedPlan, GeneratorCall, OutputColumn};
pub use validate::validate_plan;
