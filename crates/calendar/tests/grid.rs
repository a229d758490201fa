use daytype_calendar::{CalendarDays, Day, StartOfWeek, Weekday};

fn assert_well_formed(grid: &CalendarDays) {
    let keys: Vec<Day> = grid.keys().collect();
    assert!(
        keys.windows(2).all(|w| w[0] < w[1]),
        "keys not strictly increasing: {keys:?}"
    );
    for (key, week) in grid {
        assert_eq!(week[0].day(), *key, "week keyed {key:?} starts elsewhere");
        for (i, cell) in week.iter().enumerate() {
            assert_eq!(cell.day(), *key + i as i32, "cell {i} of week {key:?}");
            assert_eq!(cell.components(), cell.day().components());
        }
    }
}

#[test]
fn every_month_covered_exactly() {
    for start in [StartOfWeek::Sunday, StartOfWeek::Monday] {
        for year in [1999, 2000, 2024, 2026] {
            for month in 1..=12 {
                let first = Day::new(year, month, 1);
                let last = Day::new(year, month + 1, 1) - 1;
                let grid = first.calendar_month(start);
                assert_well_formed(&grid);

                let first_key = grid.first_key().unwrap();
                let last_cell = grid.weeks().last().unwrap()[6].day();
                assert_eq!(
                    first_key.weekday(),
                    start.weekday(),
                    "{year}-{month:02} {start:?}: first row starts on {:?}",
                    first_key.weekday()
                );
                assert!(first_key <= first && first - first_key < 7, "{year}-{month:02} {start:?}: leading padding");
                assert!(last_cell >= last && last_cell - last < 7, "{year}-{month:02} {start:?}: trailing padding");
                assert!(
                    (4..=6).contains(&grid.len()),
                    "{year}-{month:02} {start:?}: {} rows",
                    grid.len()
                );
            }
        }
    }
}

#[test]
fn containing_ignores_day_of_month() {
    let reference = Day::new(2026, 3, 1).calendar_month(StartOfWeek::Monday);
    for day in Day::new(2026, 3, 1).days_through(Day::new(2026, 3, 31)) {
        assert_eq!(
            CalendarDays::containing(day, StartOfWeek::Monday),
            reference,
            "grid for {day} differs"
        );
    }
}

#[test]
fn february_2024_monday_start() {
    let grid = Day::new(2024, 2, 10).calendar_month(StartOfWeek::Monday);
    assert_eq!(grid.first_key(), Some(Day::new(2024, 1, 29)));
    assert_eq!(grid.weeks().last().unwrap()[6].day(), Day::new(2024, 3, 3));
    assert!(grid.days().any(|c| c.day() == Day::new(2024, 2, 29)));
}

#[test]
fn merged_months_keep_all_weeks() {
    let january = Day::new(2026, 1, 1).calendar_month(StartOfWeek::Monday);
    let march = Day::new(2026, 3, 1).calendar_month(StartOfWeek::Monday);
    let merged = &january + &march;
    assert_well_formed(&merged);
    assert_eq!(merged.len(), january.len() + march.len());
    assert_eq!(merged.first_key(), january.first_key());
    assert_eq!(merged.last_key(), march.last_key());
}

#[test]
fn year_of_merged_months() {
    let mut year = Day::new(2026, 1, 1).calendar_month(StartOfWeek::Monday);
    for month in 2..=12 {
        year = year + Day::new(2026, month, 1);
    }
    assert_well_formed(&year);
    assert!(year.keys().all(|k| k.weekday() == Weekday::Monday));
    // 2025-12-29 through 2027-01-03 is 53 weeks.
    assert_eq!(year.first_key(), Some(Day::new(2025, 12, 29)));
    assert_eq!(year.last_key(), Some(Day::new(2026, 12, 28)));
    assert_eq!(year.len(), 53);
}

#[test]
fn week_lookup() {
    let grid = Day::new(2026, 3, 1).calendar_month(StartOfWeek::Sunday);
    let week = grid.get(Day::new(2026, 3, 8)).unwrap();
    assert_eq!(week[0].day().weekday(), Weekday::Sunday);
    assert_eq!(week[6].day(), Day::new(2026, 3, 14));
    assert!(grid.get(Day::new(2026, 3, 9)).is_none());
}

#[test]
fn months_at_both_ends_of_the_range() {
    for start in [StartOfWeek::Sunday, StartOfWeek::Monday] {
        let earliest = Day::MIN.calendar_month(start);
        assert_well_formed(&earliest);
        assert_eq!(earliest.first_key().unwrap().weekday(), start.weekday());
        assert!(earliest.days().any(|cell| cell.day() == Day::MIN));
        assert_eq!(earliest.merge(&earliest), earliest);

        let latest = Day::MAX.calendar_month(start);
        assert_well_formed(&latest);
        assert!(latest.days().any(|cell| cell.day() == Day::MAX));
        assert_eq!((&latest + Day::MAX).len(), latest.len());
    }
}

#[test]
fn days_beyond_the_range_build_empty_grids() {
    for start in [StartOfWeek::Sunday, StartOfWeek::Monday] {
        for day in [Day::from_days_since_epoch(i32::MAX), Day::from_days_since_epoch(i32::MIN)] {
            assert!(day.calendar_month(start).is_empty(), "{day:?} {start:?}");
        }
    }
    let grid = Day::new(2026, 3, 1).calendar_month(StartOfWeek::Monday);
    assert_eq!(&grid + Day::from_days_since_epoch(i32::MAX), grid);
}
