use hours_badge::{evaluate, Badge, StatusResult};

/// The site's original hand-written branches, in minutes, kept as an oracle.
fn posted_rules(day: u8, minutes: u16) -> (bool, bool, Option<&'static str>, Option<&'static str>) {
    let t = minutes;
    if day == 0 {
        if (660..930).contains(&t) {
            return (true, t >= 900, Some("15:30"), None);
        }
        if (1020..1200).contains(&t) {
            return (true, t >= 1170, Some("20:00"), None);
        }
    } else {
        if (690..900).contains(&t) {
            return (true, t >= 870, Some("15:00"), None);
        }
        if (1020..1380).contains(&t) {
            return (true, t >= 1320, Some("23:00"), None);
        }
    }

    let message = match day {
        0 if t < 660 => "11:00から営業",
        0 if (930..1020).contains(&t) => "17:00から営業",
        0 => "明日11:30から",
        6 if t < 690 => "11:30から営業",
        6 if (900..1020).contains(&t) => "17:00から営業",
        6 => "明日11:00から",
        _ if t < 690 => "11:30から営業",
        _ if (900..1020).contains(&t) => "17:00から営業",
        _ => "明日11:30から",
    };
    (false, false, None, Some(message))
}

fn every_minute() -> impl Iterator<Item = (u8, u16)> {
    (0..7u8).flat_map(|day| (0..24 * 60u16).map(move |minute| (day, minute)))
}

fn eval(day: u8, minute: u16) -> StatusResult {
    evaluate(day, minute as f64 / 60.0).unwrap()
}

#[test]
fn matches_posted_rules_for_every_minute_of_the_week() {
    for (day, minute) in every_minute() {
        let status = eval(day, minute);
        let (open, near_close, close, message) = posted_rules(day, minute);
        assert_eq!(status.is_open(), open, "day {} minute {}", day, minute);
        assert_eq!(status.is_near_close(), near_close, "day {} minute {}", day, minute);
        assert_eq!(
            status.close_time().map(|t| t.to_string()).as_deref(),
            close,
            "day {} minute {}",
            day,
            minute
        );
        assert_eq!(
            status.next_opening_message().as_deref(),
            message,
            "day {} minute {}",
            day,
            minute
        );
    }
}

#[test]
fn open_and_closed_fields_are_exclusive() {
    for (day, minute) in every_minute() {
        let status = eval(day, minute);
        if status.is_open() {
            assert!(status.close_time().is_some() && status.last_order_time().is_some());
            assert!(status.next_opening().is_none());
        } else {
            assert!(!status.is_near_close());
            assert!(status.close_time().is_none() && status.last_order_time().is_none());
            assert!(status.next_opening().is_some());
        }
    }
}

#[test]
fn at_most_one_period_is_active() {
    let schedule = hours_badge::WeeklySchedule::standard();
    for (day, minute) in every_minute() {
        let weekday = hours_badge::timing::day::weekday_from_index(day).unwrap();
        let time = hours_badge::TimeOfDay::from_hm((minute / 60) as u32, (minute % 60) as u32).unwrap();
        let active = schedule
            .periods(weekday)
            .iter()
            .filter(|period| period.contains(time))
            .count();
        assert!(active <= 1);
    }
}

#[test]
fn listed_scenarios() {
    let s = evaluate(0, 11.0).unwrap();
    assert!(s.is_open() && !s.is_near_close());
    assert_eq!(s.close_time().unwrap().to_string(), "15:30");
    assert_eq!(s.last_order_time().unwrap().to_string(), "15:00");

    let s = evaluate(0, 15.25).unwrap();
    assert!(s.is_open() && s.is_near_close());

    assert_eq!(evaluate(0, 16.0).unwrap().next_opening_message().as_deref(), Some("17:00から営業"));
    assert_eq!(evaluate(1, 11.0).unwrap().next_opening_message().as_deref(), Some("11:30から営業"));
    assert_eq!(evaluate(6, 23.5).unwrap().next_opening_message().as_deref(), Some("明日11:00から"));
}

#[test]
fn badge_serializes_for_the_page() {
    let badge = Badge::from(&evaluate(2, 12.0).unwrap());
    let value = serde_json::to_value(&badge).unwrap();
    assert_eq!(value["text"], "本日営業中");
    assert_eq!(value["timeDisplay"], "〜15:00");
    assert_eq!(value["lastOrderDisplay"], "(L.O.14:30)");
}

#[test]
fn fractional_hours_just_before_last_order_and_close() {
    let schedule = hours_badge::WeeklySchedule::standard();
    for day in 0..7u8 {
        let weekday = hours_badge::timing::day::weekday_from_index(day).unwrap();
        for period in schedule.periods(weekday) {
            let last_order = period.last_order().minutes() as f64 / 60.0;
            let close = period.close().minutes() as f64 / 60.0;

            let before_last_order = evaluate(day, last_order - 1e-9).unwrap();
            assert!(before_last_order.is_open(), "day {} {}", day, period.last_order());
            assert!(!before_last_order.is_near_close(), "day {} {}", day, period.last_order());
            assert!(evaluate(day, last_order).unwrap().is_near_close());

            let before_close = evaluate(day, close - 1e-9).unwrap();
            assert!(before_close.is_open(), "day {} {}", day, period.close());
            assert!(before_close.is_near_close());
            assert!(!evaluate(day, close).unwrap().is_open());
        }
    }
}
