//! Core contracts and helpers for Rowforge.
//!
//! This crate defines the error taxonomy, logical column types, scalar
//! values, columnar batch buffers, and the table/catalog model shared by the
//! generation engine and the row-generator functions.

pub mod batch;
pub mod catalog;
pub mod error;
pub mod table;
pub mod types;
pub mod value;

pub use batch::{ColumnData, RowBatch};
pub use catalog::{Catalog, DEFAULT_CATALOG, DEFAULT_SCHEMA, QualifiedName};
pub use error::{Error, Result};
pub use table::{ColumnDef, TableConstraint, TableDef};
pub use types::LogicalType;
pub use value::ScalarValue;

/// Current contract version for serialized table definitions and plans.
pub const CONTRACT_VERSION: &str = "0.1";
