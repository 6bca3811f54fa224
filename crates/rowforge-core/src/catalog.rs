use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::table::TableDef;

/// Catalog used when a table reference does not name one.
pub const DEFAULT_CATALOG: &str = "memory";

/// Schema used when a table reference does not name one.
pub const DEFAULT_SCHEMA: &str = "main";

/// A parsed table reference of one, two, or three dot-separated parts.
///
/// A two-part reference is ambiguous between `schema.name` and
/// `catalog.name`; [`Catalog::resolve`] tries the schema reading in the
/// default catalog first and falls back to the catalog reading with the
/// default schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Catalog part, present only in fully qualified references.
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl QualifiedName {
    pub fn parse(reference: &str) -> Result<Self> {
        let parts: Vec<&str> = reference.split('.').collect();
        if parts.iter().any(|part| part.is_empty()) || parts.len() > 3 {
            return Err(Error::InvalidInput(format!(
                "invalid table reference '{reference}'"
            )));
        }
        let parsed = match parts.as_slice() {
            [name] => QualifiedName {
                catalog: None,
                schema: None,
                name: (*name).to_string(),
            },
            [schema, name] => QualifiedName {
                catalog: None,
                schema: Some((*schema).to_string()),
                name: (*name).to_string(),
            },
            [catalog, schema, name] => QualifiedName {
                catalog: Some((*catalog).to_string()),
                schema: Some((*schema).to_string()),
                name: (*name).to_string(),
            },
            _ => {
                return Err(Error::InvalidInput(format!(
                    "invalid table reference '{reference}'"
                )));
            }
        };
        Ok(parsed)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(catalog) = &self.catalog {
            write!(f, "{catalog}.")?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{schema}.")?;
        }
        f.write_str(&self.name)
    }
}

/// In-memory table catalog keyed by catalog, schema, and table name.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: HashMap<String, TableDef>,
}

fn table_key(catalog: &str, schema: &str, name: &str) -> String {
    format!("{catalog}.{schema}.{name}")
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Registers a table under the default catalog and schema.
    pub fn create_table(&mut self, table: TableDef) {
        self.create_table_in(DEFAULT_CATALOG, DEFAULT_SCHEMA, table);
    }

    pub fn create_table_in(&mut self, catalog: &str, schema: &str, table: TableDef) {
        self.tables
            .insert(table_key(catalog, schema, &table.name), table);
    }

    fn lookup(&self, catalog: &str, schema: &str, name: &str) -> Option<&TableDef> {
        self.tables.get(&table_key(catalog, schema, name))
    }

    /// Resolves a dotted table reference to a registered table.
    pub fn resolve(&self, reference: &str) -> Result<&TableDef> {
        let parsed = QualifiedName::parse(reference)?;
        let found = match (&parsed.catalog, &parsed.schema) {
            (Some(catalog), Some(schema)) => self.lookup(catalog, schema, &parsed.name),
            (None, Some(ambiguous)) => self
                .lookup(DEFAULT_CATALOG, ambiguous, &parsed.name)
                .or_else(|| self.lookup(ambiguous, DEFAULT_SCHEMA, &parsed.name)),
            _ => self.lookup(DEFAULT_CATALOG, DEFAULT_SCHEMA, &parsed.name),
        };
        found.ok_or_else(|| Error::Catalog(format!("table '{reference}' does not exist")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogicalType;

    fn users_table() -> TableDef {
        TableDef::new("users").with_column("id", LogicalType::Integer)
    }

    #[test]
    fn parses_one_two_and_three_part_references() {
        let one = QualifiedName::parse("users").unwrap();
        assert_eq!(one.catalog, None);
        assert_eq!(one.schema, None);
        assert_eq!(one.name, "users");

        let two = QualifiedName::parse("main.users").unwrap();
        assert_eq!(two.catalog, None);
        assert_eq!(two.schema.as_deref(), Some("main"));
        assert_eq!(two.name, "users");

        let three = QualifiedName::parse("memory.main.users").unwrap();
        assert_eq!(three.catalog.as_deref(), Some("memory"));
        assert_eq!(three.schema.as_deref(), Some("main"));
        assert_eq!(three.to_string(), "memory.main.users");
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(matches!(
            QualifiedName::parse(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            QualifiedName::parse("a..b"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            QualifiedName::parse("a.b.c.d"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            QualifiedName::parse(".users"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn resolves_bare_names_in_the_default_schema() {
        let mut catalog = Catalog::new();
        catalog.create_table(users_table());

        assert!(catalog.resolve("users").is_ok());
        assert!(catalog.resolve("main.users").is_ok());
        assert!(catalog.resolve("memory.main.users").is_ok());
    }

    #[test]
    fn two_part_references_prefer_the_schema_reading() {
        let mut catalog = Catalog::new();
        catalog.create_table_in(DEFAULT_CATALOG, "analytics", users_table());

        let resolved = catalog.resolve("analytics.users").unwrap();
        assert_eq!(resolved.name, "users");
    }

    #[test]
    fn two_part_references_fall_back_to_the_catalog_reading() {
        let mut catalog = Catalog::new();
        catalog.create_table_in("warehouse", DEFAULT_SCHEMA, users_table());

        let resolved = catalog.resolve("warehouse.users").unwrap();
        assert_eq!(resolved.name, "users");
    }

    #[test]
    fn missing_tables_report_the_reference_as_given() {
        let catalog = Catalog::new();
        let err = catalog.resolve("nope").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
        assert!(err.to_string().contains("'nope' does not exist"));
    }
}
