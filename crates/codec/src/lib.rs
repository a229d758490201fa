//! # daytype-codec
//!
//! Reading and writing calendar days in the wire formats found in JSON
//! documents.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Scalar"] -->|"DayCodec::decode_at()"| B["Day"]
//!     B -->|"DayCodec::encode_at()"| A
//!     C["Strategy"] --> D["DayCodec"]
//!     E["KeyedDecoder / KeyedEncoder"] -->|"absent key, null, omit"| D
//!     F["Schema"] -->|"per-field FieldSpec"| E
//!     G["TOML"] -->|"Schema::from_toml_str()"| F
//!     H["presets"] --> D
//!     H --> I["serde adapters"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use daytype_codec::{FieldSpec, NullPolicy, Schema, presets};
//!
//! let schema = Schema::new()
//!     .field("dmy", FieldSpec::required(presets::DMY.clone()))
//!     .field("seen", FieldSpec::optional(presets::EPOCH_SECONDS.clone(), NullPolicy::Omit));
//!
//! let record = schema.decode_str(r#"{"dmy": "01/02/2012"}"#)?;
//! let json = schema.encode_json(&record)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `scalar` | JSON-like single values |
//! | `path` | Key paths for error reporting |
//! | `pattern` | `dd/MM/yyyy`-style date patterns |
//! | `iso8601` | ISO 8601 layouts |
//! | `strategy` | `DayCodec` and the wire strategies |
//! | `presets` | Shared codecs for the common formats |
//! | `container` | Keyed containers: missing keys and omitted nulls |
//! | `schema` | Records of named day fields |
//! | `config` | TOML schema files |
//! | `serde` | `#[serde(with = ...)]` field adapters |
//! | `error` | Error types |

mod config;
mod container;
mod error;
mod iso8601;
mod path;
mod pattern;
pub mod presets;
mod scalar;
mod schema;
pub mod serde;
mod strategy;

pub use config::{FieldToml, Iso8601Toml, SchemaToml, StrategyToml, parse_utc_offset};
pub use container::{JsonObject, JsonObjectWriter, KeyedDecoder, KeyedEncoder};
pub use error::{
    CodecError, EXPECTED_DAY_COUNT, EXPECTED_EPOCH, EXPECTED_ISO8601, UNREADABLE_DATE_STRING,
};
pub use iso8601::Iso8601Options;
pub use path::{CodingPath, PathSegment};
pub use pattern::DayPattern;
pub use presets::Preset;
pub use scalar::Scalar;
pub use schema::{DayRecord, FieldSpec, Schema};
pub use strategy::{DayCodec, EpochUnit, FieldWrite, NullPolicy, Strategy};
