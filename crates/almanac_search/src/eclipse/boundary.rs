//! Calendar days for eclipse contacts.
//!
//! Contacts are reduced to clock times on the date of greatest eclipse.
//! When an eclipse straddles midnight some of them belong to the
//! neighbouring day; walking outwards from the anchor contact and
//! requiring each step to move forward in time recovers the day.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};

/// Hours since midnight, [0, 24).
pub fn clock_hours(t: &NaiveDateTime) -> f64 {
    f64::from(t.num_seconds_from_midnight()) / 3600.0 + f64::from(t.nanosecond()) / 3.6e12
}

/// Contacts placed on calendar days.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedContacts {
    pub instants: Vec<Option<NaiveDateTime>>,
    /// Day of the earliest present contact.
    pub date: NaiveDate,
}

/// Give each clock time a day so the sequence is chronological.
///
/// `clocks` holds hours in [0, 24) in event order, `None` for contacts
/// that do not occur. The contact at `anchor` is taken to fall on
/// `anchor_date`.
pub fn assign_days(anchor_date: NaiveDate, clocks: &[Option<f64>], anchor: usize) -> DatedContacts {
    let mut offsets = vec![0_i64; clocks.len()];
    let anchor_clock = clocks.get(anchor).copied().flatten();

    let mut neighbour = anchor_clock.map(|c| (c, 0_i64));
    for i in (0..anchor.min(clocks.len())).rev() {
        let Some(clock) = clocks[i] else { continue };
        let offset = match neighbour {
            Some((later, day)) if clock > later => day - 1,
            Some((_, day)) => day,
            None => 0,
        };
        offsets[i] = offset;
        neighbour = Some((clock, offset));
    }

    let mut neighbour = anchor_clock.map(|c| (c, 0_i64));
    for i in anchor + 1..clocks.len() {
        let Some(clock) = clocks[i] else { continue };
        let offset = match neighbour {
            Some((earlier, day)) if clock < earlier => day + 1,
            Some((_, day)) => day,
            None => 0,
        };
        offsets[i] = offset;
        neighbour = Some((clock, offset));
    }

    let midnight = anchor_date.and_time(chrono::NaiveTime::MIN);
    let instants: Vec<Option<NaiveDateTime>> = clocks
        .iter()
        .zip(&offsets)
        .map(|(clock, &day)| {
            clock.map(|h| {
                midnight
                    + TimeDelta::days(day)
                    + TimeDelta::milliseconds((h * 3_600_000.0).round() as i64)
            })
        })
        .collect();
    let date = instants
        .iter()
        .flatten()
        .next()
        .map_or(anchor_date, NaiveDateTime::date);
    DatedContacts { instants, date }
}
