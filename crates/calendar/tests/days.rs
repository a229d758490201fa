use daytype_calendar::{CalendarError, DateUnit, Day, StartOfWeek, Weekday};

#[test]
fn known_day_counts() {
    let cases: &[((i32, i32, i32), i32)] = &[
        ((1970, 1, 1), 0),
        ((2023, 4, 8), 19_455),
        ((2012, 2, 3), 15_373),
        ((2000, 1, 1), 10_957),
        ((1969, 12, 31), -1),
    ];
    for &((year, month, day), expected) in cases {
        assert_eq!(
            Day::new(year, month, day).days_since_epoch(),
            expected,
            "Day::new({year}, {month}, {day})"
        );
    }
}

#[test]
fn epoch_is_thursday() {
    assert_eq!(Day::EPOCH.weekday(), Weekday::Thursday);
    assert_eq!(Day::EPOCH.weekday().index(), 4);
}

#[test]
fn weekdays_advance_by_one_per_day() {
    let mut expected = Day::new(1899, 12, 31).weekday();
    for day in Day::new(1900, 1, 1).days_until(Day::new(2100, 1, 1)) {
        expected = expected.succ();
        assert_eq!(day.weekday(), expected, "weekday of {}", day.components());
    }
}

#[test]
fn rollover_and_strict_construction_agree_on_valid_input() {
    for day in Day::new(2023, 1, 1).days_through(Day::new(2024, 12, 31)) {
        let (year, month, dom) = day.components().ymd();
        assert_eq!(
            Day::try_new(year, month, dom).unwrap(),
            day,
            "try_new disagrees for {}",
            day.components()
        );
        assert_eq!(Day::new(year, i32::from(month), i32::from(dom)), day);
    }
}

#[test]
fn strict_construction_errors() {
    assert!(matches!(
        Day::try_new(2023, 4, 31),
        Err(CalendarError::InvalidDay { max_day: 30, .. })
    ));
    assert!(matches!(
        Day::try_new(2023, 0, 1),
        Err(CalendarError::InvalidMonth { month: 0 })
    ));
}

#[test]
fn adding_months_keeps_day_when_it_exists() {
    let start = Day::new(2020, 1, 15);
    for months in -24..=24 {
        let moved = start.adding(DateUnit::Month, months);
        assert_eq!(moved.day_of_month(), 15, "adding {months} months");
    }
}

#[test]
fn stride_by_week_lands_on_same_weekday() {
    let start = Day::new(2026, 3, 2);
    let mondays: Vec<Day> = start.stride(Day::new(2026, 4, 1), 7).collect();
    assert_eq!(mondays.len(), 5);
    assert!(mondays.iter().all(|d| d.weekday() == Weekday::Monday));
}

#[test]
fn range_length_matches_distance() {
    let start = Day::new(2000, 1, 1);
    let end = Day::new(2001, 1, 1);
    assert_eq!(start.days_until(end).len() as i32, start.distance_to(end));
    assert_eq!(start.days_through(end).len() as i32, start.distance_to(end) + 1);
}

#[test]
fn default_start_of_week_is_sunday() {
    assert_eq!(StartOfWeek::default(), StartOfWeek::Sunday);
    assert_eq!(Weekday::from(StartOfWeek::Monday), Weekday::Monday);
}

#[test]
fn values_are_shareable() {
    fn assert_copy<T: Send + Sync + Copy>() {}
    fn assert_shareable<T: Send + Sync + Clone>() {}
    assert_copy::<Day>();
    assert_shareable::<daytype_calendar::CalendarDays>();
    assert_shareable::<CalendarError>();
}
