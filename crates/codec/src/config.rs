//! TOML configuration for schemas.
//!
//! ```toml
//! [fields.start]
//! strategy = "formatted"
//! pattern = "dd/MM/yyyy"
//!
//! [fields.seen]
//! strategy = "iso8601"
//! utc_offset = "+11:00"
//! optional = true
//! write_nulls = true
//!
//! [fields.seen.iso8601]
//! time_zone = false
//! zone = "+11:00"
//! ```

use std::path::Path;

use chrono::{FixedOffset, Offset, Utc};
use indexmap::IndexMap;
use ::serde::Deserialize;
use tracing::info;

use crate::error::CodecError;
use crate::iso8601::Iso8601Options;
use crate::pattern::DayPattern;
use crate::schema::{FieldSpec, Schema};
use crate::strategy::{DayCodec, EpochUnit, NullPolicy, Strategy};

/// Top-level schema file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaToml {
    /// Field tables in file order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldToml>,
}

/// The `strategy` key of a field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyToml {
    /// `"day-count"`
    DayCount,
    /// `"formatted"`
    Formatted,
    /// `"iso8601"`
    Iso8601,
    /// `"epoch-seconds"`
    EpochSeconds,
    /// `"epoch-milliseconds"`
    EpochMilliseconds,
}

/// One `[fields.<name>]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldToml {
    /// Wire strategy.
    pub strategy: StrategyToml,
    /// Date pattern; required by, and only allowed with, `formatted`.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Offset at which days start, `Z` or `+hh:mm`.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    /// Read null and a missing key as no value.
    #[serde(default)]
    pub optional: bool,
    /// Write no value as null instead of leaving the key out.
    #[serde(default)]
    pub write_nulls: bool,
    /// Layout for `iso8601`; defaults to `2012-02-03T00:00:00Z`.
    #[serde(default)]
    pub iso8601: Option<Iso8601Toml>,
}

/// A `[fields.<name>.iso8601]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Iso8601Toml {
    /// Write and expect an offset.
    #[serde(default = "default_true")]
    pub time_zone: bool,
    /// Separate date fields with `-`.
    #[serde(default = "default_true")]
    pub dash_separator: bool,
    /// Separate time fields with `:`.
    #[serde(default = "default_true")]
    pub colon_separator: bool,
    /// Use a space instead of `T`.
    #[serde(default)]
    pub space_separator: bool,
    /// Zone for rendering and for offset-less input.
    #[serde(default = "default_utc_offset")]
    pub zone: String,
}

fn default_utc_offset() -> String {
    "Z".to_string()
}
fn default_true() -> bool {
    true
}

/// Parses `Z`, `+hh:mm`, `-hh:mm`, `+hhmm` or `+hh`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidConfig`] for anything else, or an offset of
/// a day or more.
pub fn parse_utc_offset(text: &str) -> Result<FixedOffset, CodecError> {
    let invalid = || CodecError::InvalidConfig {
        reason: format!("invalid utc offset '{text}' (expected Z or +hh:mm)"),
    };
    if text == "Z" || text == "z" {
        return Ok(Utc.fix());
    }
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => return Err(invalid()),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) || !matches!(digits.len(), 2 | 4) {
        return Err(invalid());
    }
    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = if digits.len() == 4 {
        digits[2..].parse().map_err(|_| invalid())?
    } else {
        0
    };
    if minutes >= 60 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

impl Iso8601Toml {
    fn to_options(&self) -> Result<Iso8601Options, CodecError> {
        Ok(Iso8601Options::default()
            .with_time_zone(self.time_zone)
            .with_dash_separator(self.dash_separator)
            .with_colon_separator(self.colon_separator)
            .with_space_separator(self.space_separator)
            .with_zone(parse_utc_offset(&self.zone)?))
    }
}

impl FieldToml {
    /// Validates this table into a field spec.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] for a missing or misplaced
    /// `pattern`, a misplaced `iso8601` table, `write_nulls` on a required
    /// field or a bad offset, and
    /// [`CodecError::InvalidPattern`] for a malformed pattern.
    pub fn to_spec(&self, name: &str) -> Result<FieldSpec, CodecError> {
        let misplaced = |what: &str, strategy: &str| CodecError::InvalidConfig {
            reason: format!("field '{name}': {what} is only allowed with the {strategy} strategy"),
        };
        if self.pattern.is_some() && self.strategy != StrategyToml::Formatted {
            return Err(misplaced("pattern", "formatted"));
        }
        if self.iso8601.is_some() && self.strategy != StrategyToml::Iso8601 {
            return Err(misplaced("an iso8601 table", "iso8601"));
        }
        if self.write_nulls && !self.optional {
            return Err(CodecError::InvalidConfig {
                reason: format!("field '{name}': write_nulls is only allowed on optional fields"),
            });
        }

        let strategy = match self.strategy {
            StrategyToml::DayCount => Strategy::DayCount,
            StrategyToml::Formatted => {
                let pattern = self.pattern.as_deref().ok_or_else(|| CodecError::InvalidConfig {
                    reason: format!("field '{name}': the formatted strategy needs a pattern"),
                })?;
                Strategy::Formatted(DayPattern::new(pattern)?)
            }
            StrategyToml::Iso8601 => Strategy::Iso8601(match &self.iso8601 {
                Some(table) => table.to_options()?,
                None => Iso8601Options::default(),
            }),
            StrategyToml::EpochSeconds => Strategy::Epoch(EpochUnit::Seconds),
            StrategyToml::EpochMilliseconds => Strategy::Epoch(EpochUnit::Milliseconds),
        };
        let codec = DayCodec::new(strategy).with_offset(parse_utc_offset(&self.utc_offset)?);

        Ok(if self.optional {
            FieldSpec::optional(codec, NullPolicy::from_write_nulls(self.write_nulls))
        } else {
            FieldSpec::required(codec)
        })
    }
}

impl SchemaToml {
    /// Validates every field table into a schema, keeping file order.
    ///
    /// # Errors
    ///
    /// Returns the first field's validation error.
    pub fn to_schema(&self) -> Result<Schema, CodecError> {
        self.fields
            .iter()
            .try_fold(Schema::new(), |schema, (name, field)| {
                Ok(schema.field(name.clone(), field.to_spec(name)?))
            })
    }
}

impl Schema {
    /// Parses and validates a schema from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] for malformed TOML or unknown
    /// keys, and any validation error from [`SchemaToml::to_schema`].
    pub fn from_toml_str(text: &str) -> Result<Self, CodecError> {
        let raw: SchemaToml = toml::from_str(text).map_err(|e| CodecError::InvalidConfig {
            reason: e.to_string(),
        })?;
        raw.to_schema()
    }

    /// Reads a schema from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] if the file cannot be read, and
    /// otherwise as [`Schema::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CodecError::InvalidConfig {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        let schema = Self::from_toml_str(&text)?;
        info!(path = %path.display(), fields = schema.len(), "loaded day schema");
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let cases: &[(&str, i32)] = &[
            ("Z", 0),
            ("+00:00", 0),
            ("+11:00", 11 * 3600),
            ("-03:00", -3 * 3600),
            ("+0530", 5 * 3600 + 30 * 60),
            ("-09", -9 * 3600),
        ];
        for &(text, seconds) in cases {
            assert_eq!(
                parse_utc_offset(text).unwrap().local_minus_utc(),
                seconds,
                "offset {text}"
            );
        }
    }

    #[test]
    fn bad_offsets() {
        for text in ["", "11:00", "+1", "+11:60", "+24:00", "+ab:cd", "UTC"] {
            assert!(
                matches!(parse_utc_offset(text), Err(CodecError::InvalidConfig { .. })),
                "offset {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn minimal_field() {
        let schema = Schema::from_toml_str("[fields.d]\nstrategy = \"day-count\"\n").unwrap();
        let spec = schema.get("d").unwrap();
        assert_eq!(spec.codec(), &DayCodec::new(Strategy::DayCount));
        assert!(!spec.is_optional());
    }

    #[test]
    fn full_field() {
        let text = r#"
            [fields.seen]
            strategy = "iso8601"
            utc_offset = "+11:00"
            optional = true
            write_nulls = true

            [fields.seen.iso8601]
            time_zone = false
            zone = "+11:00"
        "#;
        let schema = Schema::from_toml_str(text).unwrap();
        let spec = schema.get("seen").unwrap();
        let eleven = FixedOffset::east_opt(11 * 3600).unwrap();
        let expected = DayCodec::new(Strategy::Iso8601(
            Iso8601Options::sans_time_zone().with_zone(eleven),
        ))
        .with_offset(eleven);
        assert_eq!(spec.codec(), &expected);
        assert_eq!(spec.null_policy(), NullPolicy::WriteNull);
    }

    #[test]
    fn keeps_file_order() {
        let text = r#"
            [fields.zeta]
            strategy = "epoch-seconds"
            [fields.alpha]
            strategy = "epoch-milliseconds"
        "#;
        let schema = Schema::from_toml_str(text).unwrap();
        let names: Vec<&str> = schema.fields().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Schema::from_toml_str("[fields.d]\nstrategy = \"day-count\"\ncolour = 1\n").unwrap_err();
        assert!(matches!(err, CodecError::InvalidConfig { .. }));
        assert!(Schema::from_toml_str("[fields.d]\nstrategy = \"weekly\"\n").is_err());
    }

    #[test]
    fn pattern_rules() {
        let missing = Schema::from_toml_str("[fields.d]\nstrategy = \"formatted\"\n").unwrap_err();
        assert_eq!(
            missing.reason(),
            "field 'd': the formatted strategy needs a pattern"
        );
        let misplaced =
            Schema::from_toml_str("[fields.d]\nstrategy = \"day-count\"\npattern = \"yyyy\"\n").unwrap_err();
        assert_eq!(
            misplaced.reason(),
            "field 'd': pattern is only allowed with the formatted strategy"
        );
        let malformed =
            Schema::from_toml_str("[fields.d]\nstrategy = \"formatted\"\npattern = \"dd/MM\"\n").unwrap_err();
        assert!(matches!(malformed, CodecError::InvalidPattern { .. }));
    }

    #[test]
    fn write_nulls_needs_optional() {
        let err = Schema::from_toml_str("[fields.d]\nstrategy = \"day-count\"\nwrite_nulls = true\n").unwrap_err();
        assert!(matches!(err, CodecError::InvalidConfig { .. }));
        assert_eq!(err.reason(), "field 'd': write_nulls is only allowed on optional fields");
        let explicit_false =
            Schema::from_toml_str("[fields.d]\nstrategy = \"day-count\"\nwrite_nulls = false\n").unwrap();
        assert!(!explicit_false.get("d").unwrap().is_optional());
    }

    #[test]
    fn empty_schema() {
        assert!(Schema::from_toml_str("").unwrap().is_empty());
    }
}
