//! SQL exporter for generating CREATE TABLE statements from schema documents.
//!
//! Enum fields become a PostgreSQL `CREATE TYPE ... AS ENUM` statement emitted
//! ahead of the table, and the column uses that type.
//!
//! # Quoting
//!
//! Identifiers are emitted as written in the document. Enum values are wrapped
//! in single quotes without escaping embedded quote characters, so a value
//! containing `'` produces invalid DDL.

use tracing::debug;

use crate::export::types::SQL_TYPES;
use crate::export::{ExportError, ExportFormat, ExportResult};
use crate::models::SchemaDocument;

/// Table name used when the document has no title
pub const DEFAULT_TABLE_NAME: &str = "default_table_name";

/// Exporter for SQL DDL format.
#[derive(Debug, Default)]
pub struct SQLExporter;

impl SQLExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a document to `CREATE TYPE` and `CREATE TABLE` statements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_builder_sdk::export::sql::SQLExporter;
    /// use schema_builder_sdk::models::{FieldSchema, SchemaDocument};
    ///
    /// let doc = SchemaDocument::new("users")
    ///     .with_property("id", FieldSchema::integer(None, None), true)
    ///     .with_property("bio", FieldSchema::string(), false);
    ///
    /// let sql = SQLExporter::export_document(&doc);
    /// assert_eq!(sql, "CREATE TABLE users (id INTEGER NOT NULL, bio TEXT);");
    /// ```
    pub fn export_document(document: &SchemaDocument) -> String {
        let table_name = document.title_or(DEFAULT_TABLE_NAME);
        let mut enum_statements = Vec::new();
        let mut column_defs = Vec::with_capacity(document.properties.len());

        for (name, field) in document.properties.iter() {
            let column_type = match field.enum_values() {
                Some(values) => {
                    let enum_type = format!("{}_{}_enum", table_name, name);
                    enum_statements.push(Self::enum_statement(&enum_type, values));
                    enum_type
                }
                None => SQL_TYPES.lookup(field.primitive_type()).to_string(),
            };

            let mut col_def = format!("{} {}", name, column_type);
            if document.is_required(name) {
                col_def.push_str(" NOT NULL");
            }
            column_defs.push(col_def);
        }

        debug!(
            "Exported table '{}' with {} column(s) and {} enum type(s)",
            table_name,
            column_defs.len(),
            enum_statements.len()
        );

        let mut sql = String::new();
        for statement in &enum_statements {
            sql.push_str(statement);
            sql.push('\n');
        }
        sql.push_str(&format!(
            "CREATE TABLE {} ({});",
            table_name,
            column_defs.join(", ")
        ));
        sql
    }

    /// Export a document to SQL (SDK interface).
    pub fn export(&self, document: &SchemaDocument) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: Self::export_document(document),
            format: ExportFormat::Sql,
        })
    }

    fn enum_statement(type_name: &str, values: &[String]) -> String {
        let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
        format!(
            "CREATE TYPE {} AS ENUM ({});",
            type_name,
            quoted.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldSchema, StringFormat};

    #[test]
    fn test_user_table() {
        let doc = SchemaDocument::new("User")
            .with_property("id", FieldSchema::integer(None, None), true)
            .with_property(
                "email",
                FieldSchema::string_with_format(StringFormat::Email),
                true,
            );
        assert_eq!(
            SQLExporter::export_document(&doc),
            "CREATE TABLE User (id INTEGER NOT NULL, email TEXT NOT NULL);"
        );
    }

    #[test]
    fn test_enum_type_precedes_table() {
        let doc = SchemaDocument::new("account").with_property(
            "status",
            FieldSchema::enumeration(vec!["active".to_string(), "inactive".to_string()]),
            true,
        );
        let sql = SQLExporter::export_document(&doc);
        assert_eq!(
            sql,
            "CREATE TYPE account_status_enum AS ENUM ('active', 'inactive');\n\
             CREATE TABLE account (status account_status_enum NOT NULL);"
        );
    }

    #[test]
    fn test_default_table_name() {
        let mut doc = SchemaDocument::default().with_property("flag", FieldSchema::Boolean, false);
        assert_eq!(
            SQLExporter::export_document(&doc),
            "CREATE TABLE default_table_name (flag BOOLEAN);"
        );
        doc.title = Some(String::new());
        assert!(SQLExporter::export_document(&doc).contains("default_table_name"));
    }

    #[test]
    fn test_enum_values_not_escaped() {
        let doc = SchemaDocument::new("t").with_property(
            "q",
            FieldSchema::enumeration(vec!["it's".to_string()]),
            false,
        );
        assert!(SQLExporter::export_document(&doc).starts_with("CREATE TYPE t_q_enum AS ENUM ('it's');"));
    }

    #[test]
    fn test_unmapped_types_fall_back_to_text() {
        let doc = SchemaDocument::new("t")
            .with_property("tags", FieldSchema::array_of(FieldSchema::string()), false)
            .with_property("meta", FieldSchema::unknown(Some("null")), false)
            .with_property("price", FieldSchema::number(None, None), false);
        assert_eq!(
            SQLExporter::export_document(&doc),
            "CREATE TABLE t (tags TEXT, meta TEXT, price NUMERIC);"
        );
    }

    #[test]
    fn test_enum_on_integer_and_untyped_fields() {
        let doc = crate::import::JSONSchemaImporter::new()
            .parse(
                r#"{"title": "t", "properties": {
                    "lvl": {"type": "integer", "enum": [1, 2]},
                    "kind": {"enum": ["a", "b"]}
                }, "required": ["lvl"]}"#,
            )
            .unwrap();
        assert_eq!(
            SQLExporter::export_document(&doc),
            "CREATE TYPE t_lvl_enum AS ENUM ('1', '2');\n\
             CREATE TYPE t_kind_enum AS ENUM ('a', 'b');\n\
             CREATE TABLE t (lvl t_lvl_enum NOT NULL, kind t_kind_enum);"
        );
    }
}
