//! Models module for the SDK
//!
//! Defines the in-memory shape of a JSON Schema document as produced by the
//! schema builder and consumed by every exporter and the sample generator.

pub mod document;
pub mod field;

pub use document::{DRAFT_2020_12, Properties, SchemaDocument};
pub use field::{
    ArrayField, FieldSchema, NumericField, ObjectField, PrimitiveType, StringField, StringFormat,
    UnknownField,
};
