//! # daytype-calendar
//!
//! Civil-calendar days without a time of day or a time zone.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Day (days since 1970-01-01)"] -->|".components()"| B["DayComponents"]
//!     B -->|"Day::from_components()"| A
//!     A -->|".weekday()"| C["Weekday"]
//!     A -->|".adding() / + / -"| A
//!     A -->|".days_until() / .stride()"| D["DayRange"]
//!     A -->|".calendar_month()"| E["CalendarDays"]
//!     E -->|".merge() / +"| E
//!     A -->|".timestamp_in() / NaiveDate::try_from()"| F["chrono"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use daytype_calendar::{DateUnit, Day, StartOfWeek, Weekday};
//!
//! // Construction rolls over out-of-range components
//! let day = Day::new(2023, 4, 45);
//! assert_eq!(day.components().ymd(), (2023, 5, 15));
//!
//! // Arithmetic
//! assert_eq!(day + 1, Day::new(2023, 5, 16));
//! assert_eq!(day.adding(DateUnit::Month, 1), Day::new(2023, 6, 15));
//! assert_eq!(Day::new(2023, 4, 8).weekday(), Weekday::Saturday);
//!
//! // Month grids
//! let march = Day::new(2026, 3, 1).calendar_month(StartOfWeek::Monday);
//! let spring = march.merge_day(Day::new(2026, 4, 1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `math` | Hinnant day-count algorithms |
//! | `day` | The `Day` value type and its arithmetic |
//! | `components` | Validated year, month and day |
//! | `weekday` | Weekdays and start-of-week choice |
//! | `range` | Iterators over runs of days |
//! | `convert` | Timestamps and chrono bridging |
//! | `style` | Human-readable rendering |
//! | `grid` | Week-aligned month grids |
//! | `error` | Error types |

mod components;
mod convert;
mod day;
mod error;
mod grid;
pub mod math;
mod range;
mod style;
mod weekday;

pub use components::DayComponents;
pub use convert::SECONDS_PER_DAY;
pub use day::{DateUnit, Day};
pub use error::CalendarError;
pub use grid::{CalendarDay, CalendarDays, Week};
pub use range::DayRange;
pub use style::DayStyle;
pub use weekday::{StartOfWeek, Weekday};
