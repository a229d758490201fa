//! Field adapters for `#[serde(with = "...")]`.
//!
//! Every preset has a module here for `Day` fields and an `option`
//! submodule for `Option<Day>` fields:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Booking {
//!     #[serde(with = "daytype_codec::serde::dmy")]
//!     arrival: Day,
//!     #[serde(with = "daytype_codec::serde::epoch_seconds::option")]
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     departure: Option<Day>,
//! }
//! ```
//!
//! An optional field needs `#[serde(default)]` so that a missing key reads
//! as `None`; `skip_serializing_if` leaves the key out on write, and without
//! it `None` is written as `null`.
//!
//! Serde has no key path, so errors carry only the reason text; decoders
//! such as `serde_json` add their own position.

use ::serde::de::Error as _;
use ::serde::ser::Error as _;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};
use daytype_calendar::Day;

use crate::scalar::Scalar;
use crate::strategy::DayCodec;

/// Serializes `day` with `codec`.
///
/// # Errors
///
/// Fails if the codec cannot represent the day.
pub fn serialize<S: Serializer>(codec: &DayCodec, day: &Day, serializer: S) -> Result<S::Ok, S::Error> {
    codec
        .encode(*day)
        .map_err(|e| S::Error::custom(e.reason()))?
        .serialize(serializer)
}

/// Deserializes a day with `codec`.
///
/// # Errors
///
/// Fails with the codec's reason if the value does not decode.
pub fn deserialize<'de, D: Deserializer<'de>>(codec: &DayCodec, deserializer: D) -> Result<Day, D::Error> {
    let scalar = Scalar::deserialize(deserializer)?;
    codec.decode(&scalar).map_err(|e| D::Error::custom(e.reason()))
}

/// Serializes an optional day with `codec`; `None` becomes `null`.
///
/// # Errors
///
/// Fails if the codec cannot represent the day.
pub fn serialize_option<S: Serializer>(
    codec: &DayCodec,
    value: &Option<Day>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(day) => serialize(codec, day, serializer),
        None => serializer.serialize_none(),
    }
}

/// Deserializes an optional day with `codec`; `null` becomes `None`.
///
/// # Errors
///
/// Fails with the codec's reason if a non-null value does not decode.
pub fn deserialize_option<'de, D: Deserializer<'de>>(
    codec: &DayCodec,
    deserializer: D,
) -> Result<Option<Day>, D::Error> {
    let scalar = Scalar::deserialize(deserializer)?;
    if scalar.is_null() {
        return Ok(None);
    }
    codec.decode(&scalar).map(Some).map_err(|e| D::Error::custom(e.reason()))
}

macro_rules! preset_module {
    ($(#[$meta:meta])* $name:ident => $codec:path) => {
        $(#[$meta])*
        pub mod $name {
            use ::serde::{Deserializer, Serializer};
            use daytype_calendar::Day;

            /// Writes a `Day` in this format.
            pub fn serialize<S: Serializer>(day: &Day, serializer: S) -> Result<S::Ok, S::Error> {
                super::serialize(&$codec, day, serializer)
            }

            /// Reads a `Day` in this format.
            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Day, D::Error> {
                super::deserialize(&$codec, deserializer)
            }

            /// The same format for `Option<Day>` fields.
            pub mod option {
                use ::serde::{Deserializer, Serializer};
                use daytype_calendar::Day;

                /// Writes `None` as null.
                pub fn serialize<S: Serializer>(value: &Option<Day>, serializer: S) -> Result<S::Ok, S::Error> {
                    super::super::serialize_option(&$codec, value, serializer)
                }

                /// Reads null as `None`.
                pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Day>, D::Error> {
                    super::super::deserialize_option(&$codec, deserializer)
                }
            }
        }
    };
}

preset_module!(
    /// Integer day count, as `Day`'s own `Serialize` impl writes it.
    day_count => crate::presets::DAY_COUNT
);
preset_module!(
    /// `dd/MM/yyyy`
    dmy => crate::presets::DMY
);
preset_module!(
    /// `MM/dd/yyyy`
    mdy => crate::presets::MDY
);
preset_module!(
    /// `yyyy-MM-dd`
    ymd => crate::presets::YMD
);
preset_module!(
    /// ISO 8601 with a UTC offset, for the day's midnight in UTC.
    iso8601 => crate::presets::ISO8601
);
preset_module!(
    /// ISO 8601 without an offset, read and written as UTC.
    iso8601_sans_time_zone => crate::presets::ISO8601_SANS_TIME_ZONE
);
preset_module!(
    /// Seconds since the Unix epoch of the day's midnight in UTC.
    epoch_seconds => crate::presets::EPOCH_SECONDS
);
preset_module!(
    /// Milliseconds since the Unix epoch of the day's midnight in UTC.
    epoch_milliseconds => crate::presets::EPOCH_MILLISECONDS
);
