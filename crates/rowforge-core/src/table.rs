use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::LogicalType;

/// Definition of a table registered in a catalog.
///
/// This is the shape the schema-mirroring planner reads: column names and
/// logical types in declaration order, plus enough metadata to recognize
/// features the planner does not support yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableDef {
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDef>,
    /// Table-level constraints.
    pub constraints: Vec<TableConstraint>,
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        TableDef {
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Appends a plain column of the given type.
    pub fn with_column(mut self, name: impl Into<String>, column_type: LogicalType) -> Self {
        self.columns.push(ColumnDef::new(name, column_type));
        self
    }

    pub fn with_column_def(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn has_generated_columns(&self) -> bool {
        self.columns.iter().any(|column| column.generated.is_some())
    }
}

/// Column metadata for a table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: LogicalType,
    /// Textual default expression, when the column declares one.
    pub default: Option<String>,
    /// Generation expression for computed columns.
    pub generated: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: LogicalType) -> Self {
        ColumnDef {
            name: name.into(),
            column_type,
            default: None,
            generated: None,
        }
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default = Some(expression.into());
        self
    }

    pub fn with_generated(mut self, expression: impl Into<String>) -> Self {
        self.generated = Some(expression.into());
        self
    }
}

/// Table-level constraint captured in a table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TableConstraint {
    PrimaryKey(Vec<String>),
    Unique(Vec<String>),
    Check(String),
}
