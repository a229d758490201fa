//! Day codecs: one strategy value per wire shape.

use chrono::{FixedOffset, Offset, Utc};
use daytype_calendar::{Day, SECONDS_PER_DAY};
use tracing::debug;

use crate::error::{
    CodecError, EXPECTED_DAY_COUNT, EXPECTED_EPOCH, EXPECTED_ISO8601, UNREADABLE_DATE_STRING,
};
use crate::iso8601::Iso8601Options;
use crate::path::CodingPath;
use crate::pattern::DayPattern;
use crate::scalar::Scalar;

/// Resolution of an epoch timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpochUnit {
    /// Whole or fractional seconds.
    Seconds,
    /// Whole or fractional milliseconds.
    Milliseconds,
}

impl EpochUnit {
    /// Units per second.
    pub fn per_second(self) -> i64 {
        match self {
            EpochUnit::Seconds => 1,
            EpochUnit::Milliseconds => 1_000,
        }
    }
}

/// How a day is represented on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// An integer count of days since 1970-01-01.
    DayCount,
    /// A string in a date pattern.
    Formatted(DayPattern),
    /// An ISO 8601 date-time string for the day's midnight.
    Iso8601(Iso8601Options),
    /// A Unix timestamp of the day's midnight.
    Epoch(EpochUnit),
}

impl Strategy {
    /// Short name used in log events and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DayCount => "day-count",
            Strategy::Formatted(_) => "formatted",
            Strategy::Iso8601(_) => "iso8601",
            Strategy::Epoch(EpochUnit::Seconds) => "epoch-seconds",
            Strategy::Epoch(EpochUnit::Milliseconds) => "epoch-milliseconds",
        }
    }
}

/// What a keyed container should do with an optional field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWrite {
    /// Write this value under the key.
    Value(Scalar<'static>),
    /// Write an explicit null under the key.
    Null,
    /// Leave the key out.
    Omit,
}

/// How an absent optional value is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    /// Leave the key out of the container.
    #[default]
    Omit,
    /// Write the key with an explicit null.
    WriteNull,
}

impl NullPolicy {
    /// Maps a `write_nulls` flag to a policy.
    pub fn from_write_nulls(write_nulls: bool) -> Self {
        if write_nulls {
            NullPolicy::WriteNull
        } else {
            NullPolicy::Omit
        }
    }
}

/// Converts between [`Day`] values and [`Scalar`]s.
///
/// Instant-based strategies (ISO 8601 and epochs) need a zone in which to
/// take a day's midnight; this is the codec's `offset`, UTC by default.
/// Decoding maps an instant to the day whose midnight-to-midnight span at
/// that offset contains it, and encoding writes that midnight, so any time
/// of day is dropped on the way through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCodec {
    strategy: Strategy,
    offset: FixedOffset,
}

impl DayCodec {
    /// Creates a codec anchored at UTC.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            offset: Utc.fix(),
        }
    }

    /// Returns this codec anchored at `offset`.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the wire strategy.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Returns the offset at which days start.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Decodes a scalar found at the root of a document.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] for the wrong shape or unparsable
    /// content, including `null`.
    pub fn decode(&self, scalar: &Scalar<'_>) -> Result<Day, CodecError> {
        self.decode_at(scalar, &CodingPath::root())
    }

    /// Decodes a scalar found at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] carrying `path` and the
    /// strategy's fixed reason.
    pub fn decode_at(&self, scalar: &Scalar<'_>, path: &CodingPath) -> Result<Day, CodecError> {
        let (decoded, reason) = match &self.strategy {
            Strategy::DayCount => (
                scalar
                    .as_i64()
                    .and_then(|days| i32::try_from(days).ok())
                    .and_then(|days| Day::try_from_days_since_epoch(days).ok()),
                EXPECTED_DAY_COUNT,
            ),
            Strategy::Formatted(pattern) => (
                scalar.as_str().and_then(|s| pattern.parse(s).ok()),
                UNREADABLE_DATE_STRING,
            ),
            Strategy::Iso8601(options) => (
                scalar
                    .as_str()
                    .and_then(|s| options.parse_timestamp(s).ok())
                    .map(|secs| Day::from_timestamp_in(secs, self.offset)),
                EXPECTED_ISO8601,
            ),
            Strategy::Epoch(unit) => (self.decode_epoch(scalar, *unit), EXPECTED_EPOCH),
        };
        // Instants far enough out saturate the day count; treat those as unreadable too.
        decoded.filter(|day| day.is_supported()).ok_or_else(|| {
            debug!(
                path = %path,
                strategy = self.strategy.name(),
                kind = scalar.kind(),
                "failed to decode day"
            );
            CodecError::invalid_format(path, reason)
        })
    }

    fn decode_epoch(&self, scalar: &Scalar<'_>, unit: EpochUnit) -> Option<Day> {
        let per_second = unit.per_second();
        match *scalar {
            Scalar::Int(value) => Some(Day::from_timestamp_in(value.div_euclid(per_second), self.offset)),
            Scalar::UInt(value) => {
                let secs = value / per_second as u64;
                Some(Day::from_timestamp_in(i64::try_from(secs).unwrap_or(i64::MAX), self.offset))
            }
            Scalar::Float(value) if value.is_finite() => {
                let local = value / per_second as f64 + f64::from(self.offset.local_minus_utc());
                let days = (local / SECONDS_PER_DAY as f64).floor();
                // `as` saturates at the `i32` bounds.
                Some(Day::from_days_since_epoch(days as i32))
            }
            _ => None,
        }
    }

    /// Decodes an optional value: `null` is `None`, anything else must
    /// decode as a day.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] for a present but malformed value.
    pub fn decode_optional(&self, scalar: &Scalar<'_>, path: &CodingPath) -> Result<Option<Day>, CodecError> {
        if scalar.is_null() {
            return Ok(None);
        }
        self.decode_at(scalar, path).map(Some)
    }

    /// Encodes a day for the root of a document.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unrepresentable`] if the strategy cannot render
    /// the day.
    pub fn encode(&self, day: Day) -> Result<Scalar<'static>, CodecError> {
        self.encode_at(day, &CodingPath::root())
    }

    /// Encodes a day to be written at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unrepresentable`] if the strategy cannot render
    /// the day.
    pub fn encode_at(&self, day: Day, path: &CodingPath) -> Result<Scalar<'static>, CodecError> {
        let encoded = match &self.strategy {
            Strategy::DayCount => Some(Scalar::Int(i64::from(day.days_since_epoch()))),
            Strategy::Formatted(pattern) => pattern.format(day).map(|s| Scalar::Str(s.into())),
            Strategy::Iso8601(options) => options
                .format_timestamp(day.timestamp_in(self.offset))
                .map(|s| Scalar::Str(s.into())),
            Strategy::Epoch(unit) => day
                .timestamp_in(self.offset)
                .checked_mul(unit.per_second())
                .map(Scalar::Int),
        };
        encoded.ok_or_else(|| CodecError::Unrepresentable {
            path: path.clone(),
            day,
        })
    }

    /// Decides how an optional value is written under its key.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unrepresentable`] if a present day cannot be
    /// rendered.
    pub fn encode_optional(
        &self,
        value: Option<Day>,
        policy: NullPolicy,
        path: &CodingPath,
    ) -> Result<FieldWrite, CodecError> {
        match (value, policy) {
            (Some(day), _) => self.encode_at(day, path).map(FieldWrite::Value),
            (None, NullPolicy::WriteNull) => Ok(FieldWrite::Null),
            (None, NullPolicy::Omit) => Ok(FieldWrite::Omit),
        }
    }
}
