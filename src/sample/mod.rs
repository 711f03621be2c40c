//! Sample data generation
//!
//! Synthesizes fake records that conform to a schema document's types,
//! formats and enums. Only required properties are populated, arrays always
//! hold exactly one generated item when `items` is present, and output is
//! random unless a seeded RNG is supplied via [`SampleGenerator::new`].

use chrono::{Duration, SecondsFormat, Utc};
use fake::Fake;
use fake::faker::internet::en::{DomainSuffix, FreeEmail, IPv4, IPv6, SafeEmail};
use fake::faker::lorem::en::Word;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::models::{FieldSchema, NumericField, Properties, SchemaDocument, StringField, StringFormat};

/// Smallest number of samples produced per call
pub const MIN_SAMPLES: i64 = 1;
/// Hard cap on samples produced per call
pub const MAX_SAMPLES: i64 = 25;

/// ISO-8601 duration emitted for `duration` fields
pub const SAMPLE_DURATION: &str = "P3Y6M4DT12H30M5S";
pub const SAMPLE_JSON_POINTER: &str = "/example/pointer";
pub const SAMPLE_RELATIVE_JSON_POINTER: &str = "0/example";
pub const SAMPLE_REGEX: &str = "[a-zA-Z0-9]+";

const NUMBER_RANGE: (f64, f64) = (0.0, 100.0);
const INTEGER_RANGE: (f64, f64) = (1.0, 1000.0);
const RECENT_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Options for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Requested sample count; clamped to `MIN_SAMPLES..=MAX_SAMPLES`
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    10
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

impl SampleOptions {
    pub fn with_count(count: i64) -> Self {
        Self { count }
    }
}

/// Clamp a requested count into the inclusive range `[1, 25]`
pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_SAMPLES, MAX_SAMPLES) as usize
}

/// Generate samples for a document using the thread-local RNG.
///
/// # Example
///
/// ```rust
/// use schema_builder_sdk::models::{FieldSchema, SchemaDocument};
/// use schema_builder_sdk::sample::{generate_samples, SampleOptions};
///
/// let doc = SchemaDocument::new("User")
///     .with_property("id", FieldSchema::integer(Some(1.0), Some(9.0)), true)
///     .with_property("nickname", FieldSchema::string(), false);
///
/// let samples = generate_samples(&doc, SampleOptions::with_count(3));
/// assert_eq!(samples.len(), 3);
/// assert!(samples[0].get("nickname").is_none());
/// ```
pub fn generate_samples(document: &SchemaDocument, options: SampleOptions) -> Vec<Value> {
    SampleGenerator::thread_local().generate(document, options)
}

/// Random value synthesizer over a schema document
pub struct SampleGenerator<R: Rng> {
    rng: R,
}

impl SampleGenerator<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `clamp_count(options.count)` sample objects
    pub fn generate(&mut self, document: &SchemaDocument, options: SampleOptions) -> Vec<Value> {
        let count = clamp_count(options.count);
        if count as i64 != options.count {
            warn!(
                "Sample count {} outside {}..={}; generating {}",
                options.count, MIN_SAMPLES, MAX_SAMPLES, count
            );
        }

        let samples: Vec<Value> = (0..count)
            .map(|_| self.generate_object(&document.properties, &document.required))
            .collect();

        debug!(
            "Generated {} sample(s) for '{}'",
            samples.len(),
            document.title_or("schema")
        );
        samples
    }

    /// Build an object holding a generated value for every required property
    pub fn generate_object(&mut self, properties: &Properties, required: &[String]) -> Value {
        let mut object = Map::new();
        for (name, field) in properties.iter() {
            if required.iter().any(|r| r == name) {
                object.insert(name.to_string(), self.generate_value(field));
            }
        }
        Value::Object(object)
    }

    /// Generate a single value for a field schema
    pub fn generate_value(&mut self, field: &FieldSchema) -> Value {
        match field {
            FieldSchema::String(string) => Value::String(self.generate_string(string)),
            FieldSchema::Number(bounds) => self.generate_number(bounds, NUMBER_RANGE),
            FieldSchema::Integer(bounds) => self.generate_number(bounds, INTEGER_RANGE),
            FieldSchema::Boolean => Value::Bool(self.rng.gen_bool(0.5)),
            FieldSchema::Array(array) => match array.items.as_deref() {
                Some(items) => Value::Array(vec![self.generate_value(items)]),
                None => Value::Array(Vec::new()),
            },
            FieldSchema::Object(object) => {
                self.generate_object(&object.properties, &object.required)
            }
            FieldSchema::Unknown(_) => Value::Null,
        }
    }

    fn generate_string(&mut self, field: &StringField) -> String {
        if let Some(values) = field.enum_values.as_deref()
            && let Some(choice) = values.choose(&mut self.rng)
        {
            return choice.clone();
        }
        match &field.format {
            Some(format) => self.generate_formatted(format),
            None => self.word(),
        }
    }

    fn generate_formatted(&mut self, format: &StringFormat) -> String {
        match format {
            StringFormat::Email => SafeEmail().fake_with_rng(&mut self.rng),
            StringFormat::IdnEmail => FreeEmail().fake_with_rng(&mut self.rng),
            StringFormat::DateTime => self
                .recent_timestamp()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            StringFormat::Date => self.recent_timestamp().format("%Y-%m-%d").to_string(),
            StringFormat::Time => self.recent_timestamp().format("%H:%M:%S").to_string(),
            StringFormat::Duration => SAMPLE_DURATION.to_string(),
            StringFormat::Hostname | StringFormat::IdnHostname => self.domain_name(),
            StringFormat::Ipv4 => IPv4().fake_with_rng(&mut self.rng),
            StringFormat::Ipv6 => IPv6().fake_with_rng(&mut self.rng),
            StringFormat::Uri
            | StringFormat::UriReference
            | StringFormat::Iri
            | StringFormat::IriReference => format!("https://{}/", self.domain_name()),
            StringFormat::Uuid => {
                let mut bytes = [0u8; 16];
                self.rng.fill(&mut bytes);
                uuid::Builder::from_random_bytes(bytes)
                    .into_uuid()
                    .to_string()
            }
            StringFormat::JsonPointer => SAMPLE_JSON_POINTER.to_string(),
            StringFormat::RelativeJsonPointer => SAMPLE_RELATIVE_JSON_POINTER.to_string(),
            StringFormat::Regex => SAMPLE_REGEX.to_string(),
            StringFormat::Other(_) => self.word(),
        }
    }

    /// Uniform integer within the field's bounds, or `defaults` where unset.
    /// Fractional bounds are rounded inward; an empty range, or one lying
    /// wholly outside the `i64` range, yields the lower bound unchanged.
    fn generate_number(&mut self, bounds: &NumericField, defaults: (f64, f64)) -> Value {
        let min = bounds.minimum.unwrap_or(defaults.0);
        let max = bounds.maximum.unwrap_or(defaults.1);
        let (lo, hi) = (min.ceil(), max.floor());
        if lo > hi || !lo.is_finite() || !hi.is_finite() {
            return json!(min);
        }
        // Partial overlap saturates into bounds; no overlap has no integer to pick
        if lo >= i64::MAX as f64 || hi < i64::MIN as f64 {
            return json!(min);
        }
        let value: i64 = self.rng.gen_range(lo as i64..=hi as i64);
        json!(value)
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn domain_name(&mut self) -> String {
        let label: String = Word().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        format!("{}.{}", label, suffix)
    }

    fn recent_timestamp(&mut self) -> chrono::DateTime<Utc> {
        let offset = self.rng.gen_range(0..RECENT_WINDOW_MS);
        Utc::now() - Duration::milliseconds(offset)
    }
}
