//! Records of named day fields, each with its own codec.

use daytype_calendar::Day;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::container::{JsonObject, JsonObjectWriter, KeyedDecoder, KeyedEncoder};
use crate::error::CodecError;
use crate::path::CodingPath;
use crate::strategy::{DayCodec, NullPolicy};

/// Decoded field values in schema order. Optional fields that were absent
/// or null hold `None`.
pub type DayRecord = IndexMap<String, Option<Day>>;

/// How one field is read and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    codec: DayCodec,
    optional: bool,
    null_policy: NullPolicy,
}

impl FieldSpec {
    /// A field that must be present and non-null.
    pub fn required(codec: DayCodec) -> Self {
        Self {
            codec,
            optional: false,
            null_policy: NullPolicy::Omit,
        }
    }

    /// A field that may be absent or null, written according to `null_policy`.
    pub fn optional(codec: DayCodec, null_policy: NullPolicy) -> Self {
        Self {
            codec,
            optional: true,
            null_policy,
        }
    }

    /// Returns the field's codec.
    pub fn codec(&self) -> &DayCodec {
        &self.codec
    }

    /// Returns `true` if null and a missing key read as no value.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns how an absent value is written.
    pub fn null_policy(&self) -> NullPolicy {
        self.null_policy
    }
}

/// An ordered set of day fields.
///
/// ```ignore
/// let schema = Schema::new()
///     .field("start", FieldSpec::required(DMY.clone()))
///     .field("end", FieldSpec::optional(DMY.clone(), NullPolicy::Omit));
/// let record = schema.decode_str(r#"{"start": "01/02/2012"}"#)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: IndexMap<String, FieldSpec>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field. Fields keep their first insertion position.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Returns the spec for `name`.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Iterates over fields in order.
    pub fn fields(&self) -> indexmap::map::Iter<'_, String, FieldSpec> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes every field from a keyed container. Keys not in the schema
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Stops at the first field that fails and returns its error.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %container.coding_path(), fields = self.len()))]
    pub fn decode<C: KeyedDecoder + ?Sized>(&self, container: &C) -> Result<DayRecord, CodecError> {
        let mut record = DayRecord::with_capacity(self.fields.len());
        for (name, spec) in &self.fields {
            let value = if spec.optional {
                container.decode_optional_day(name, &spec.codec)?
            } else {
                Some(container.decode_day(name, &spec.codec)?)
            };
            record.insert(name.clone(), value);
        }
        debug!(decoded = record.len(), "decoded day record");
        Ok(record)
    }

    /// Encodes a record into a keyed container. Entries not in the schema
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MissingKey`] if a required field has no value
    /// in `record`, and [`CodecError::Unrepresentable`] if a day cannot be
    /// rendered.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %container.coding_path(), fields = self.len()))]
    pub fn encode<C: KeyedEncoder + ?Sized>(&self, record: &DayRecord, container: &mut C) -> Result<(), CodecError> {
        for (name, spec) in &self.fields {
            let value = record.get(name).copied().flatten();
            if spec.optional {
                container.encode_optional_day(name, value, &spec.codec, spec.null_policy)?;
            } else {
                let day = value.ok_or_else(|| CodecError::MissingKey {
                    path: container.coding_path().join(name.as_str()),
                })?;
                container.encode_day(name, day, &spec.codec)?;
            }
        }
        Ok(())
    }

    /// Decodes a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] if `value` is not an object,
    /// otherwise as [`Schema::decode`].
    pub fn decode_json(&self, value: &Value) -> Result<DayRecord, CodecError> {
        self.decode(&JsonObject::from_value(value, CodingPath::root())?)
    }

    /// Parses and decodes a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] if the text is not JSON,
    /// otherwise as [`Schema::decode_json`].
    pub fn decode_str(&self, json: &str) -> Result<DayRecord, CodecError> {
        let value: Value = serde_json::from_str(json).map_err(|e| CodecError::InvalidFormat {
            path: CodingPath::root(),
            reason: e.to_string(),
        })?;
        self.decode_json(&value)
    }

    /// Encodes a record as a JSON object.
    ///
    /// # Errors
    ///
    /// As [`Schema::encode`].
    pub fn encode_json(&self, record: &DayRecord) -> Result<Value, CodecError> {
        let mut writer = JsonObjectWriter::new();
        self.encode(record, &mut writer)?;
        Ok(writer.into_value())
    }

    /// Decodes every element of a JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns the first element's error, with the element index prefixed
    /// to its path.
    pub fn decode_json_array(&self, value: &Value) -> Result<Vec<DayRecord>, CodecError> {
        let Value::Array(elements) = value else {
            return Err(CodecError::invalid_format(&CodingPath::root(), "expected an array"));
        };
        elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                self.decode_json(element)
                    .map_err(|err| err.within(&CodingPath::root().join(index)))
            })
            .collect()
    }
}
