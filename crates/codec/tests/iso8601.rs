use chrono::FixedOffset;
use daytype_calendar::Day;
use daytype_codec::{CodecError, DayCodec, EXPECTED_ISO8601, Iso8601Options, Scalar, Strategy};

fn plus(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap()
}

/// Codec used by a host whose days begin at +11:00.
fn melbourne(options: Iso8601Options) -> DayCodec {
    DayCodec::new(Strategy::Iso8601(options)).with_offset(plus(11))
}

fn decode(codec: &DayCodec, input: &str) -> Result<Day, CodecError> {
    codec.decode(&Scalar::Str(input.into()))
}

#[test]
fn decodes_instants_into_anchored_days() {
    let codec = melbourne(Iso8601Options::default());
    let cases: &[(&str, (i32, i32, i32))] = &[
        ("2012-02-03T10:33:23+11:00", (2012, 2, 3)),
        ("2012-02-02T13:33:23Z", (2012, 2, 3)),
        ("2012-02-02T12:59:59Z", (2012, 2, 2)),
        ("2012-02-02T13:00:00Z", (2012, 2, 3)),
        ("2012-02-02T13:33:23-03:00", (2012, 2, 3)),
    ];
    for &(input, (y, m, d)) in cases {
        assert_eq!(decode(&codec, input).unwrap(), Day::new(y, m, d), "input {input}");
    }
}

#[test]
fn sans_time_zone_in_utc() {
    let codec = melbourne(Iso8601Options::sans_time_zone());
    assert_eq!(decode(&codec, "2012-02-02T13:33:23").unwrap(), Day::new(2012, 2, 3));
    assert_eq!(
        codec.encode(Day::new(2012, 2, 3)).unwrap(),
        Scalar::Str("2012-02-02T13:00:00".into())
    );
}

#[test]
fn sans_time_zone_in_local_zone() {
    let codec = melbourne(Iso8601Options::sans_time_zone().with_zone(plus(11)));
    assert_eq!(decode(&codec, "2012-02-02T13:33:23").unwrap(), Day::new(2012, 2, 2));
    assert_eq!(
        codec.encode(Day::new(2012, 2, 3)).unwrap(),
        Scalar::Str("2012-02-03T00:00:00".into())
    );
}

#[test]
fn explicit_offset_overrides_zone() {
    let codec = melbourne(Iso8601Options::default().with_zone(plus(11)));
    assert_eq!(decode(&codec, "2012-02-02T13:33:23-03:00").unwrap(), Day::new(2012, 2, 3));
}

#[test]
fn minimal_layout() {
    let options = Iso8601Options::default()
        .with_time_zone(false)
        .with_dash_separator(false)
        .with_colon_separator(false)
        .with_space_separator(true)
        .with_zone(plus(11));
    let codec = melbourne(options);
    assert_eq!(decode(&codec, "20120202 133323").unwrap(), Day::new(2012, 2, 2));
    assert!(decode(&codec, "2012-02-02T13:33:23").is_err());
}

#[test]
fn default_encoding() {
    let codec = melbourne(Iso8601Options::default());
    assert_eq!(
        codec.encode(Day::new(2012, 2, 3)).unwrap(),
        Scalar::Str("2012-02-02T13:00:00Z".into())
    );
    let utc = DayCodec::new(Strategy::Iso8601(Iso8601Options::default()));
    assert_eq!(
        utc.encode(Day::new(2012, 2, 3)).unwrap(),
        Scalar::Str("2012-02-03T00:00:00Z".into())
    );
}

#[test]
fn encoded_strings_decode_to_same_day() {
    let layouts = [
        Iso8601Options::default(),
        Iso8601Options::sans_time_zone(),
        Iso8601Options::default().with_zone(plus(-3)),
        Iso8601Options::default().with_colon_separator(false),
        Iso8601Options::default().with_space_separator(true).with_zone(plus(11)),
    ];
    for options in layouts {
        for offset in [-12, -3, 0, 5, 11, 14] {
            let codec = DayCodec::new(Strategy::Iso8601(options)).with_offset(plus(offset));
            for day in Day::new(1999, 12, 25).days_through(Day::new(2000, 1, 5)) {
                let encoded = codec.encode(day).unwrap();
                assert_eq!(
                    codec.decode(&encoded).unwrap(),
                    day,
                    "offset {offset} options {options:?} wrote {encoded}"
                );
            }
        }
    }
}

#[test]
fn unreadable_strings() {
    let codec = melbourne(Iso8601Options::default());
    for input in ["", "xxx", "2012-02-02", "2012-02-02T13:33", "2012-13-02T13:33:23Z"] {
        let err = decode(&codec, input).unwrap_err();
        assert_eq!(err.reason(), EXPECTED_ISO8601, "input {input:?}");
    }
    assert!(codec.decode(&Scalar::Int(1_328_187_600)).is_err());
}
