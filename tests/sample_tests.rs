//! Sample generation tests

use rand::SeedableRng;
use rand::rngs::StdRng;
use schema_builder_sdk::models::{FieldSchema, ObjectField, Properties, SchemaDocument, StringFormat};
use schema_builder_sdk::sample::{SampleGenerator, SampleOptions, generate_samples};
use serde_json::Value;

fn mixed_document() -> SchemaDocument {
    SchemaDocument::new("Mixed")
        .with_property("id", FieldSchema::integer(None, None), true)
        .with_property("score", FieldSchema::number(Some(5.0), Some(10.0)), true)
        .with_property(
            "status",
            FieldSchema::enumeration(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
            true,
        )
        .with_property("email", FieldSchema::string_with_format(StringFormat::Email), true)
        .with_property("tags", FieldSchema::array_of(FieldSchema::string()), true)
        .with_property("active", FieldSchema::Boolean, true)
        .with_property("nickname", FieldSchema::string(), false)
        .with_property("extra", FieldSchema::unknown(None), false)
}

mod count_tests {
    use super::*;

    #[test]
    fn test_count_is_clamped() {
        let doc = mixed_document();
        for (requested, expected) in [(-10, 1), (0, 1), (1, 1), (7, 7), (25, 25), (26, 25), (1000, 25)] {
            let samples = generate_samples(&doc, SampleOptions::with_count(requested));
            assert_eq!(samples.len(), expected, "count {requested}");
        }
    }

    #[test]
    fn test_empty_document_yields_empty_objects() {
        let samples = generate_samples(&SchemaDocument::default(), SampleOptions::with_count(3));
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.as_object().is_some_and(|o| o.is_empty())));
    }
}

mod content_tests {
    use super::*;

    #[test]
    fn test_only_required_keys() {
        let doc = mixed_document();
        for sample in generate_samples(&doc, SampleOptions::with_count(25)) {
            let object = sample.as_object().unwrap();
            assert_eq!(object.len(), doc.required.len());
            for key in object.keys() {
                assert!(doc.is_required(key), "unexpected key {key}");
            }
        }
    }

    #[test]
    fn test_enum_values_respected() {
        let doc = mixed_document();
        for sample in generate_samples(&doc, SampleOptions::with_count(25)) {
            let status = sample["status"].as_str().unwrap();
            assert!(["a", "b", "c"].contains(&status));
        }
    }

    #[test]
    fn test_number_bounds_respected() {
        let doc = mixed_document();
        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(42));
        for sample in generator.generate(&doc, SampleOptions::with_count(25)) {
            let score = sample["score"].as_f64().unwrap();
            assert!((5.0..=10.0).contains(&score));
            let id = sample["id"].as_i64().unwrap();
            assert!((1..=1000).contains(&id));
        }
    }

    #[test]
    fn test_value_types() {
        let doc = mixed_document();
        for sample in generate_samples(&doc, SampleOptions::with_count(5)) {
            assert!(sample["email"].as_str().is_some_and(|e| e.contains('@')));
            assert!(sample["active"].is_boolean());
            let tags = sample["tags"].as_array().unwrap();
            assert_eq!(tags.len(), 1);
            assert!(tags[0].is_string());
        }
    }

    #[test]
    fn test_dangling_required_is_skipped() {
        let mut doc = SchemaDocument::new("T").with_property("id", FieldSchema::Boolean, true);
        doc.required.push("ghost".to_string());
        let samples = generate_samples(&doc, SampleOptions::with_count(2));
        for sample in samples {
            assert!(sample.get("ghost").is_none());
            assert!(sample["id"].is_boolean());
        }
    }

    #[test]
    fn test_nested_object_uses_its_own_required() {
        let mut inner = Properties::new();
        inner.insert("street", FieldSchema::string());
        inner.insert("zip", FieldSchema::string());
        let address = FieldSchema::Object(ObjectField {
            properties: inner,
            required: vec!["zip".to_string()],
        });
        let doc = SchemaDocument::new("Person").with_property("address", address, true);

        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(1));
        let sample = generator.generate(&doc, SampleOptions::with_count(1)).remove(0);
        let address = sample["address"].as_object().unwrap();
        assert!(address.contains_key("zip"));
        assert!(!address.contains_key("street"));
    }

    #[test]
    fn test_seeded_generators_agree_on_non_time_fields() {
        let doc = SchemaDocument::new("T")
            .with_property("n", FieldSchema::integer(None, None), true)
            .with_property("w", FieldSchema::string(), true)
            .with_property("u", FieldSchema::string_with_format(StringFormat::Uuid), true);
        let a = SampleGenerator::new(StdRng::seed_from_u64(9)).generate(&doc, SampleOptions::with_count(4));
        let b = SampleGenerator::new(StdRng::seed_from_u64(9)).generate(&doc, SampleOptions::with_count(4));
        assert_eq!(a, b);
        assert!(a.iter().all(|s| matches!(s["n"], Value::Number(_))));
    }
}
