//! End-to-end behaviour of days, grids and codecs through the facade.

use chrono::FixedOffset;
use daytype::codec::{CodecError, FieldSpec, JsonObject, KeyedDecoder};
use daytype::{CalendarDays, DateUnit, Day, DayCodec, NullPolicy, Schema, StartOfWeek, Strategy, Weekday, presets};
use serde::{Deserialize, Serialize};
use serde_json::json;

fn plus_eleven() -> FixedOffset {
    FixedOffset::east_opt(11 * 3600).unwrap()
}

#[test]
fn day_count_round_trip() {
    for n in (-1_000_000..=1_000_000).step_by(7) {
        let day = Day::from_days_since_epoch(n);
        assert_eq!(Day::from_components(day.components()).days_since_epoch(), n);
    }
}

#[test]
fn epoch_is_a_thursday() {
    assert_eq!(Day::EPOCH.weekday(), Weekday::Thursday);
    assert_eq!(Day::new(1970, 1, 1), Day::EPOCH);
}

#[test]
fn known_day_counts() {
    assert_eq!(Day::new(2023, 4, 8).days_since_epoch(), 19455);
    assert_eq!(Day::new(2001, 2, 3).adding(DateUnit::Day, 55), Day::new(2001, 3, 30));
}

#[test]
fn epoch_seconds_truncate_to_midnight() {
    let schema = Schema::new().field(
        "d1",
        FieldSpec::required(DayCodec::new(Strategy::Epoch(daytype::codec::EpochUnit::Seconds)).with_offset(plus_eleven())),
    );
    let record = schema.decode_str(r#"{"d1": 1328251182}"#).unwrap();
    assert_eq!(record["d1"], Some(Day::new(2012, 2, 3)));
    assert_eq!(schema.encode_json(&record).unwrap(), json!({"d1": 1328187600}));
}

#[test]
fn epoch_seconds_in_utc() {
    let schema = Schema::new().field("d1", FieldSpec::required(presets::EPOCH_SECONDS.clone()));
    let mut record = daytype::codec::DayRecord::new();
    record.insert("d1".to_string(), Some(Day::new(2012, 2, 3)));
    assert_eq!(schema.encode_json(&record).unwrap(), json!({"d1": 1328227200}));
}

#[test]
fn dmy_scenario() {
    let good = json!({"dmy": "01/02/2012"});
    let obj = JsonObject::from_value(&good, Default::default()).unwrap();
    assert_eq!(obj.decode_day("dmy", &presets::DMY).unwrap(), Day::new(2012, 2, 1));

    let bad = json!({"dmy": "xxx"});
    let obj = JsonObject::from_value(&bad, Default::default()).unwrap();
    let err = obj.decode_day("dmy", &presets::DMY).unwrap_err();
    assert!(matches!(err, CodecError::InvalidFormat { .. }));
    assert_eq!(err.path().unwrap().keys(), ["dmy"]);
    assert_eq!(err.to_string(), "invalid format at dmy: Unable to read the date string.");
}

#[test]
fn grid_properties() {
    for start in [StartOfWeek::Sunday, StartOfWeek::Monday] {
        for month in 1..=12 {
            let first = Day::new(2026, month, 1);
            let last = first.adding(DateUnit::Month, 1) - 1;
            let grid = first.calendar_month(start);

            assert_eq!(grid.first_key().unwrap().weekday(), start.weekday());
            assert!(grid.first_key().unwrap() <= first);
            assert!(grid.last_key().unwrap() + 6 >= last, "{first} {start:?}");
            let keys: Vec<Day> = grid.keys().collect();
            assert!(keys.windows(2).all(|w| w[1] - w[0] == 7));
            assert_eq!(grid.merge(&grid), grid);
        }
    }
}

#[test]
fn adjacent_months_share_a_week() {
    let january = Day::new(2026, 1, 1).calendar_month(StartOfWeek::Monday);
    let february = Day::new(2026, 2, 1).calendar_month(StartOfWeek::Monday);
    assert_eq!(january.len(), 5);
    assert_eq!(february.len(), 5);
    assert_eq!((&january + &february).len(), 9);

    // March 2026 starts on a Sunday, so a Sunday grid for it shares no week
    // with February.
    let february = Day::new(2026, 2, 1).calendar_month(StartOfWeek::Sunday);
    let march = Day::new(2026, 3, 1).calendar_month(StartOfWeek::Sunday);
    assert_eq!((&february + &march).len(), february.len() + march.len());
}

#[test]
fn day_counts_must_have_a_month_grid() {
    let max = presets::DAY_COUNT
        .decode(&daytype::codec::Scalar::Int(i64::from(Day::MAX.days_since_epoch())))
        .unwrap();
    assert!(!max.calendar_month(StartOfWeek::Sunday).is_empty());

    for count in [i32::MAX, i32::MIN] {
        let err = presets::DAY_COUNT
            .decode(&daytype::codec::Scalar::Int(i64::from(count)))
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidFormat { .. }), "count {count}");
    }
}

#[test]
fn merging_a_day_into_an_empty_grid() {
    let grid = CalendarDays::default() + Day::new(2026, 3, 15);
    assert_eq!(grid, Day::new(2026, 3, 1).calendar_month(StartOfWeek::Sunday));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Booking {
    #[serde(with = "daytype::codec::serde::dmy")]
    arrival: Day,
    #[serde(with = "daytype::codec::serde::iso8601::option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    departure: Option<Day>,
    #[serde(with = "daytype::codec::serde::epoch_milliseconds::option", default)]
    paid: Option<Day>,
    nights: u32,
}

#[test]
fn derived_structs_use_the_adapters() {
    let booking: Booking = serde_json::from_value(json!({"arrival": "01/02/2012", "nights": 2})).unwrap();
    assert_eq!(
        booking,
        Booking {
            arrival: Day::new(2012, 2, 1),
            departure: None,
            paid: None,
            nights: 2
        }
    );
    assert_eq!(
        serde_json::to_value(&booking).unwrap(),
        json!({"arrival": "01/02/2012", "paid": null, "nights": 2})
    );

    let full = json!({
        "arrival": "01/02/2012",
        "departure": "2012-02-03T00:00:00Z",
        "paid": 1328227200000_i64,
        "nights": 2
    });
    let booking: Booking = serde_json::from_value(full.clone()).unwrap();
    assert_eq!(booking.departure, Some(Day::new(2012, 2, 3)));
    assert_eq!(booking.paid, Some(Day::new(2012, 2, 3)));
    assert_eq!(serde_json::to_value(&booking).unwrap(), full);
}

#[test]
fn adapter_errors_keep_the_reason() {
    let err = serde_json::from_value::<Booking>(json!({"arrival": "xxx", "nights": 1})).unwrap_err();
    assert!(err.to_string().contains("Unable to read the date string."), "{err}");
}

#[test]
fn optional_fields_through_a_schema() {
    let schema = Schema::new()
        .field("a", FieldSpec::optional(presets::YMD.clone(), NullPolicy::Omit))
        .field("b", FieldSpec::optional(presets::YMD.clone(), NullPolicy::WriteNull));
    let record = schema.decode_str(r#"{"a": null}"#).unwrap();
    assert_eq!(record["a"], None);
    assert_eq!(record["b"], None);
    assert_eq!(schema.encode_json(&record).unwrap(), json!({"b": null}));
}

#[test]
fn day_serializes_as_its_count() {
    assert_eq!(serde_json::to_value(Day::new(2023, 4, 8)).unwrap(), json!(19455));
    assert_eq!(serde_json::from_value::<Day>(json!(-1)).unwrap(), Day::new(1969, 12, 31));
}
