use almanac_time::{instant_to_jd, jd_to_instant, normalize_instant};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use proptest::prelude::*;

/// Calendar labels 1582-10-05..=14 do not exist in the historical calendar.
fn in_reform_gap(date: NaiveDate) -> bool {
    let gap_start = NaiveDate::from_ymd_opt(1582, 10, 5).unwrap();
    let gap_end = NaiveDate::from_ymd_opt(1582, 10, 14).unwrap();
    (gap_start..=gap_end).contains(&date)
}

proptest! {
    #[test]
    fn instant_roundtrip_within_a_second(
        year in 1i32..=3000,
        ordinal in 1u32..=365,
        seconds in 0i64..86_400,
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        prop_assume!(!in_reform_gap(date));
        let instant = (date.and_time(NaiveTime::MIN) + TimeDelta::seconds(seconds)).and_utc();

        let back = jd_to_instant(instant_to_jd(&instant)).unwrap();
        let err = (back - instant).num_milliseconds().abs();
        prop_assert!(err <= 1000, "{instant} -> {back}");
        prop_assert_eq!(normalize_instant(back), instant);
    }

    #[test]
    fn jd_is_monotonic_in_time(
        days in 0i64..1_000_000,
        step in 1i64..86_400,
    ) {
        let base = NaiveDate::from_ymd_opt(1, 1, 1).unwrap().and_time(NaiveTime::MIN).and_utc();
        let a = base + TimeDelta::days(days);
        prop_assume!(!in_reform_gap(a.date_naive()));
        let b = a + TimeDelta::seconds(step);
        prop_assume!(!in_reform_gap(b.date_naive()));
        prop_assert!(instant_to_jd(&b) > instant_to_jd(&a));
    }
}
