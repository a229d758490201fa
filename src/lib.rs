//! # daytype
//!
//! Calendar days without a time of day or a time zone.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["daytype-calendar"] -->|"Day, DayMath"| B["CalendarDays"]
//!     A --> C["daytype-codec"]
//!     C -->|"Schema, presets, serde adapters"| D["JSON documents"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use daytype::{Day, StartOfWeek, presets};
//!
//! let day = Day::new(2012, 2, 1);
//! let grid = day.calendar_month(StartOfWeek::Monday);
//! let wire = presets::DMY.encode(day)?;
//! ```
//!
//! ## Crates
//!
//! | Crate | Description |
//! |-------|-------------|
//! | [`calendar`] | `Day`, day arithmetic, weekdays and month grids |
//! | [`codec`] | Day codecs, keyed containers, schemas and TOML config |

pub use daytype_calendar as calendar;
pub use daytype_codec as codec;

pub use daytype_calendar::{
    CalendarDay, CalendarDays, CalendarError, DateUnit, Day, DayComponents, DayRange, StartOfWeek,
    Weekday,
};
pub use daytype_codec::{CodecError, DayCodec, NullPolicy, Schema, Strategy, presets};
