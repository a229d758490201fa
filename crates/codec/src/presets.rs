//! Shared, lazily built codecs for the common wire formats.
//!
//! Each preset is built once per process on first use and never changes
//! afterwards, so one instance serves every thread.

use std::sync::LazyLock;

use crate::iso8601::Iso8601Options;
use crate::pattern::DayPattern;
use crate::strategy::{DayCodec, EpochUnit, Strategy};

/// Integer day count.
pub static DAY_COUNT: LazyLock<DayCodec> = LazyLock::new(|| DayCodec::new(Strategy::DayCount));

/// `dd/MM/yyyy`
pub static DMY: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Formatted(DayPattern::dmy())));

/// `MM/dd/yyyy`
pub static MDY: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Formatted(DayPattern::mdy())));

/// `yyyy-MM-dd`
pub static YMD: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Formatted(DayPattern::ymd())));

/// `2012-02-03T00:00:00Z`
pub static ISO8601: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Iso8601(Iso8601Options::default())));

/// `2012-02-03T00:00:00`, read as UTC.
pub static ISO8601_SANS_TIME_ZONE: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Iso8601(Iso8601Options::sans_time_zone())));

/// Seconds since the Unix epoch.
pub static EPOCH_SECONDS: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Epoch(EpochUnit::Seconds)));

/// Milliseconds since the Unix epoch.
pub static EPOCH_MILLISECONDS: LazyLock<DayCodec> =
    LazyLock::new(|| DayCodec::new(Strategy::Epoch(EpochUnit::Milliseconds)));

/// Names a preset codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// [`DAY_COUNT`]
    DayCount,
    /// [`DMY`]
    Dmy,
    /// [`MDY`]
    Mdy,
    /// [`YMD`]
    Ymd,
    /// [`ISO8601`]
    Iso8601,
    /// [`ISO8601_SANS_TIME_ZONE`]
    Iso8601SansTimeZone,
    /// [`EPOCH_SECONDS`]
    EpochSeconds,
    /// [`EPOCH_MILLISECONDS`]
    EpochMilliseconds,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 8] = [
        Preset::DayCount,
        Preset::Dmy,
        Preset::Mdy,
        Preset::Ymd,
        Preset::Iso8601,
        Preset::Iso8601SansTimeZone,
        Preset::EpochSeconds,
        Preset::EpochMilliseconds,
    ];

    /// Returns the shared codec for this preset.
    pub fn codec(self) -> &'static DayCodec {
        match self {
            Preset::DayCount => &*DAY_COUNT,
            Preset::Dmy => &*DMY,
            Preset::Mdy => &*MDY,
            Preset::Ymd => &*YMD,
            Preset::Iso8601 => &*ISO8601,
            Preset::Iso8601SansTimeZone => &*ISO8601_SANS_TIME_ZONE,
            Preset::EpochSeconds => &*EPOCH_SECONDS,
            Preset::EpochMilliseconds => &*EPOCH_MILLISECONDS,
        }
    }
}
