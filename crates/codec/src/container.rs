//! Keyed containers: where "absent" and "null" become different things.
//!
//! A scalar codec only ever sees a value. Whether a key was present at all,
//! and whether a key is written at all, is decided here.

use daytype_calendar::Day;
use serde_json::{Map, Value};

use crate::error::CodecError;
use crate::path::CodingPath;
use crate::scalar::Scalar;
use crate::strategy::{DayCodec, FieldWrite, NullPolicy};

/// Read access to one keyed container of a document.
pub trait KeyedDecoder {
    /// Path of this container within the document.
    fn coding_path(&self) -> &CodingPath;

    /// Returns the value under `key`, or `None` if the key is absent.
    /// A present `null` is `Some(Scalar::Null)`.
    fn scalar(&self, key: &str) -> Option<Scalar<'_>>;

    /// Returns `true` if `key` is present, even with a null value.
    fn contains(&self, key: &str) -> bool {
        self.scalar(key).is_some()
    }

    /// Decodes a required day.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MissingKey`] if the key is absent and
    /// [`CodecError::InvalidFormat`] if its value does not decode, `null`
    /// included.
    fn decode_day(&self, key: &str, codec: &DayCodec) -> Result<Day, CodecError> {
        let path = self.coding_path().join(key);
        match self.scalar(key) {
            Some(scalar) => codec.decode_at(&scalar, &path),
            None => Err(CodecError::MissingKey { path }),
        }
    }

    /// Decodes an optional day. An absent key and a `null` both give `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] if a present, non-null value
    /// does not decode.
    fn decode_optional_day(&self, key: &str, codec: &DayCodec) -> Result<Option<Day>, CodecError> {
        match self.scalar(key) {
            Some(scalar) => codec.decode_optional(&scalar, &self.coding_path().join(key)),
            None => Ok(None),
        }
    }
}

/// Write access to one keyed container of a document.
pub trait KeyedEncoder {
    /// Path of this container within the document.
    fn coding_path(&self) -> &CodingPath;

    /// Writes `value` under `key`, replacing any previous value.
    fn write_scalar(&mut self, key: &str, value: Scalar<'_>);

    /// Writes an explicit null under `key`.
    fn write_null(&mut self, key: &str) {
        self.write_scalar(key, Scalar::Null);
    }

    /// Encodes a required day under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unrepresentable`] if the codec cannot render
    /// the day.
    fn encode_day(&mut self, key: &str, day: Day, codec: &DayCodec) -> Result<(), CodecError> {
        let scalar = codec.encode_at(day, &self.coding_path().join(key))?;
        self.write_scalar(key, scalar);
        Ok(())
    }

    /// Encodes an optional day under `key`. `None` writes a null or leaves
    /// the key out, as `policy` says.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unrepresentable`] if the codec cannot render
    /// a present day.
    fn encode_optional_day(
        &mut self,
        key: &str,
        value: Option<Day>,
        codec: &DayCodec,
        policy: NullPolicy,
    ) -> Result<(), CodecError> {
        match codec.encode_optional(value, policy, &self.coding_path().join(key))? {
            FieldWrite::Value(scalar) => self.write_scalar(key, scalar),
            FieldWrite::Null => self.write_null(key),
            FieldWrite::Omit => {}
        }
        Ok(())
    }
}

/// A [`KeyedDecoder`] over a borrowed JSON object.
#[derive(Debug, Clone)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    path: CodingPath,
}

impl<'a> JsonObject<'a> {
    /// Wraps an object found at the root of a document.
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self::at(map, CodingPath::root())
    }

    /// Wraps an object found at `path`.
    pub fn at(map: &'a Map<String, Value>, path: CodingPath) -> Self {
        Self { map, path }
    }

    /// Wraps `value` if it is an object.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] for any other JSON value.
    pub fn from_value(value: &'a Value, path: CodingPath) -> Result<Self, CodecError> {
        match value {
            Value::Object(map) => Ok(Self::at(map, path)),
            _ => Err(CodecError::invalid_format(&path, "expected an object")),
        }
    }
}

impl KeyedDecoder for JsonObject<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn scalar(&self, key: &str) -> Option<Scalar<'_>> {
        self.map.get(key).map(Scalar::from)
    }
}

/// A [`KeyedEncoder`] building an owned JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonObjectWriter {
    map: Map<String, Value>,
    path: CodingPath,
}

impl JsonObjectWriter {
    /// Starts an empty object at the root of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an empty object to be placed at `path`.
    pub fn at(path: CodingPath) -> Self {
        Self {
            map: Map::new(),
            path,
        }
    }

    /// Returns the object built so far.
    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    /// Returns the object built so far as a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl KeyedEncoder for JsonObjectWriter {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn write_scalar(&mut self, key: &str, value: Scalar<'_>) {
        self.map.insert(key.to_owned(), value.to_json());
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::presets::{DAY_COUNT, DMY};

    fn object(value: &Value) -> JsonObject<'_> {
        JsonObject::from_value(value, CodingPath::root()).unwrap()
    }

    #[test]
    fn required_present() {
        let doc = json!({"dmy": "01/02/2012"});
        assert_eq!(object(&doc).decode_day("dmy", &DMY).unwrap(), Day::new(2012, 2, 1));
    }

    #[test]
    fn required_missing() {
        let doc = json!({});
        let err = object(&doc).decode_day("dmy", &DMY).unwrap_err();
        assert_eq!(err, CodecError::MissingKey { path: CodingPath::root().join("dmy") });
    }

    #[test]
    fn required_null_is_invalid() {
        let doc = json!({"dmy": null});
        let err = object(&doc).decode_day("dmy", &DMY).unwrap_err();
        assert!(matches!(err, CodecError::InvalidFormat { .. }));
    }

    #[test]
    fn optional_absent_and_null() {
        let doc = json!({"present": null});
        let obj = object(&doc);
        assert_eq!(obj.decode_optional_day("present", &DAY_COUNT).unwrap(), None);
        assert_eq!(obj.decode_optional_day("absent", &DAY_COUNT).unwrap(), None);
        assert!(obj.contains("present"));
        assert!(!obj.contains("absent"));
    }

    #[test]
    fn optional_malformed_is_error() {
        let doc = json!({"dmy": "xxx"});
        let err = object(&doc).decode_optional_day("dmy", &DMY).unwrap_err();
        assert_eq!(err.path().map(CodingPath::keys), Some(vec!["dmy".to_string()]));
    }

    #[test]
    fn nested_path() {
        let doc = json!({"dmy": "xxx"});
        let obj = JsonObject::from_value(&doc, CodingPath::root().join("events").join(2usize)).unwrap();
        let err = obj.decode_day("dmy", &DMY).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "events[2].dmy");
    }

    #[test]
    fn non_object_rejected() {
        assert!(JsonObject::from_value(&json!([1]), CodingPath::root()).is_err());
    }

    #[test]
    fn writer_policies() {
        let mut writer = JsonObjectWriter::new();
        writer.encode_day("d", Day::EPOCH, &DAY_COUNT).unwrap();
        writer
            .encode_optional_day("omitted", None, &DAY_COUNT, NullPolicy::Omit)
            .unwrap();
        writer
            .encode_optional_day("nulled", None, &DAY_COUNT, NullPolicy::WriteNull)
            .unwrap();
        writer
            .encode_optional_day("present", Some(Day::EPOCH + 1), &DAY_COUNT, NullPolicy::Omit)
            .unwrap();
        assert_eq!(writer.into_value(), json!({"d": 0, "nulled": null, "present": 1}));
    }
}
