//! Export module tests

use schema_builder_sdk::export::{ExportError, ExportFormat, export, export_as};
use schema_builder_sdk::import::JSONSchemaImporter;
use schema_builder_sdk::models::{FieldSchema, SchemaDocument, StringFormat};

fn user_document() -> SchemaDocument {
    JSONSchemaImporter::new()
        .parse(
            r#"{
                "title": "User",
                "type": "object",
                "properties": {
                    "id": { "type": "integer" },
                    "email": { "type": "string", "format": "email" }
                },
                "required": ["id", "email"]
            }"#,
        )
        .unwrap()
}

mod sql_export_tests {
    use super::*;

    #[test]
    fn test_user_table() {
        let sql = export(&user_document(), "sql").unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE User (id INTEGER NOT NULL, email TEXT NOT NULL);"
        );
        assert!(!sql.contains("CREATE TYPE"));
    }

    #[test]
    fn test_enum_field() {
        let doc = user_document().with_property(
            "status",
            FieldSchema::enumeration(vec!["active".to_string(), "inactive".to_string()]),
            true,
        );
        let sql = export(&doc, "sql").unwrap();

        let type_stmt = "CREATE TYPE User_status_enum AS ENUM ('active', 'inactive');";
        let type_pos = sql.find(type_stmt).expect("enum type statement");
        let table_pos = sql.find("CREATE TABLE User").expect("table statement");
        assert!(type_pos < table_pos);
        assert!(sql.contains("status User_status_enum NOT NULL"));
    }

    #[test]
    fn test_optional_columns_are_nullable() {
        let doc = SchemaDocument::new("notes")
            .with_property("body", FieldSchema::string(), false)
            .with_property("pinned", FieldSchema::Boolean, true);
        assert_eq!(
            export(&doc, "sql").unwrap(),
            "CREATE TABLE notes (body TEXT, pinned BOOLEAN NOT NULL);"
        );
    }

    #[test]
    fn test_required_name_without_property() {
        let mut doc = user_document();
        doc.required.push("ghost".to_string());
        let sql = export(&doc, "sql").unwrap();
        assert!(!sql.contains("ghost"));
    }
}

mod graphql_export_tests {
    use super::*;

    #[test]
    fn test_user_type() {
        assert_eq!(
            export(&user_document(), "gql").unwrap(),
            "type User {\n  id: Int\n  email: String\n}\n"
        );
    }

    #[test]
    fn test_array_of_integers() {
        let doc = SchemaDocument::new("Post")
            .with_property("scores", FieldSchema::array_of(FieldSchema::integer(None, None)), true);
        assert_eq!(
            export(&doc, "graphql").unwrap(),
            "type Post {\n  scores: [Int]\n}\n"
        );
    }
}

mod protobuf_export_tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let proto = export(&user_document(), "proto").unwrap();
        assert!(proto.starts_with("syntax = \"proto3\";\n"));

        let id_pos = proto.find("int32 id = 1;").expect("id field");
        let email_pos = proto.find("string email = 2;").expect("email field");
        assert!(id_pos < email_pos);

        assert!(proto.contains("service UserService {"));
        assert!(proto.contains("rpc GetUser(User) returns (User);"));
    }

    #[test]
    fn test_field_numbers_follow_property_order() {
        let doc = SchemaDocument::new("Row")
            .with_property("c", FieldSchema::Boolean, false)
            .with_property("a", FieldSchema::number(None, None), false)
            .with_property("b", FieldSchema::string_with_format(StringFormat::Uuid), false);
        let proto = export(&doc, "proto").unwrap();
        assert!(proto.contains("  bool c = 1;\n  double a = 2;\n  string b = 3;\n"));
    }
}

mod dispatcher_tests {
    use super::*;

    #[test]
    fn test_unsupported_format() {
        for bad in ["", "xml", "avro", "sqlite"] {
            let err = export(&user_document(), bad).unwrap_err();
            assert!(matches!(err, ExportError::UnsupportedFormat(_)), "{bad}");
        }
    }

    #[test]
    fn test_deterministic_and_non_empty() {
        let doc = user_document();
        for format in ExportFormat::ALL {
            let first = export_as(&doc, format);
            let second = export_as(&doc, format);
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    #[test]
    fn test_selector_and_enum_agree() {
        let doc = user_document();
        for format in ExportFormat::ALL {
            assert_eq!(export(&doc, format.as_str()).unwrap(), export_as(&doc, format));
        }
    }

    #[test]
    fn test_partial_document_still_exports() {
        let doc = JSONSchemaImporter::new()
            .parse(r#"{"properties": {"x": {}, "y": {"type": "array"}, "z": {"type": "object"}}}"#)
            .unwrap();
        assert_eq!(
            export(&doc, "sql").unwrap(),
            "CREATE TABLE default_table_name (x TEXT, y TEXT, z TEXT);"
        );
        assert_eq!(
            export(&doc, "gql").unwrap(),
            "type Resource {\n  x: String\n  y: [String]\n  z: type\n}\n"
        );
        let proto = export(&doc, "proto").unwrap();
        assert!(proto.contains("message MyMessage {\n  string x = 1;\n  repeated y = 2;\n  message z = 3;\n}"));
    }
}
