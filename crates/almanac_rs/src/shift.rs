//! Re-expressing result timestamps at another UTC offset.
//!
//! Each result type lists its own timestamp fields; shifting changes the
//! offset a timestamp is expressed in, never the instant it denotes.

use chrono::{DateTime, FixedOffset};

use almanac_search::{
    ApsisEvent, ApsisPair, EclipsePair, LunarEclipseDetails, RiseSetResult, SolarDayEvents,
    SolarEclipseDetails,
};

/// A value carrying `DateTime<FixedOffset>` fields.
pub trait InstantFields {
    /// Visit every timestamp field in chronological field order.
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>));

    /// Apply `f` to every timestamp field.
    fn map_instants<F>(mut self, mut f: F) -> Self
    where
        Self: Sized,
        F: FnMut(DateTime<FixedOffset>) -> DateTime<FixedOffset>,
    {
        self.for_each_instant(&mut |t| *t = f(*t));
        self
    }

    /// Express every timestamp at `offset`.
    fn at_offset(self, offset: FixedOffset) -> Self
    where
        Self: Sized,
    {
        self.map_instants(|t| t.with_timezone(&offset))
    }
}

impl InstantFields for DateTime<FixedOffset> {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        f(self);
    }
}

impl<T: InstantFields> InstantFields for Option<T> {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        if let Some(v) = self {
            v.for_each_instant(f);
        }
    }
}

impl InstantFields for RiseSetResult {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.rise.for_each_instant(f);
        self.set.for_each_instant(f);
    }
}

impl InstantFields for SolarDayEvents {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.sunrise_sunset.for_each_instant(f);
        self.bottom_of_disc.for_each_instant(f);
        self.civil.for_each_instant(f);
        self.nautical.for_each_instant(f);
        self.astronomical.for_each_instant(f);
        self.solar_noon.for_each_instant(f);
    }
}

impl InstantFields for ApsisEvent {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.instant.for_each_instant(f);
    }
}

impl InstantFields for ApsisPair {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.last.for_each_instant(f);
        self.next.for_each_instant(f);
    }
}

impl InstantFields for LunarEclipseDetails {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        for t in [
            &mut self.penumbral_begin,
            &mut self.partial_begin,
            &mut self.total_begin,
            &mut self.maximum,
            &mut self.total_end,
            &mut self.partial_end,
            &mut self.penumbral_end,
        ] {
            t.for_each_instant(f);
        }
        if let Some(first) = self.penumbral_begin.or(self.maximum) {
            self.date = first.date_naive();
        }
    }
}

impl InstantFields for SolarEclipseDetails {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        for t in [
            &mut self.partial_begin,
            &mut self.central_begin,
            &mut self.maximum,
            &mut self.central_end,
            &mut self.partial_end,
        ] {
            t.for_each_instant(f);
        }
        if let Some(first) = self.partial_begin.or(self.maximum) {
            self.date = first.date_naive();
        }
    }
}

impl<T: InstantFields> InstantFields for EclipsePair<T> {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.last.for_each_instant(f);
        self.next.for_each_instant(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2018, 1, 31, h, m, 0).unwrap().fixed_offset()
    }

    #[test]
    fn shift_keeps_the_instant() {
        let r = RiseSetResult::new(Some(at(6, 0)), Some(at(18, 0)), false);
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let shifted = r.at_offset(offset);
        assert_eq!(shifted.rise, r.rise);
        assert_eq!(shifted.rise.unwrap().offset(), &offset);
        assert_eq!(shifted.rise.unwrap().format("%H:%M").to_string(), "01:00");
    }

    #[test]
    fn eclipse_date_follows_first_contact() {
        let e = LunarEclipseDetails {
            date: NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(),
            eclipse_type: almanac_search::LunarEclipseType::Total,
            penumbral_begin: Some(at(10, 51)),
            partial_begin: Some(at(11, 48)),
            total_begin: Some(at(12, 51)),
            maximum: Some(at(13, 30)),
            total_end: Some(at(14, 8)),
            partial_end: Some(at(15, 11)),
            penumbral_end: Some(at(16, 8)),
            penumbral_magnitude: 2.29,
            umbral_magnitude: 1.32,
        };
        let hawaii = FixedOffset::west_opt(11 * 3600).unwrap();
        let shifted = e.at_offset(hawaii);
        assert_eq!(shifted.date, NaiveDate::from_ymd_opt(2018, 1, 30).unwrap());
        assert_eq!(shifted.maximum, e.maximum);
    }

    #[test]
    fn visitor_sees_every_field_once() {
        let mut events = SolarDayEvents {
            sunrise_sunset: RiseSetResult::new(Some(at(7, 0)), Some(at(17, 0)), false),
            bottom_of_disc: RiseSetResult::new(Some(at(7, 3)), Some(at(16, 57)), false),
            civil: RiseSetResult::new(Some(at(6, 30)), Some(at(17, 30)), false),
            nautical: RiseSetResult::new(Some(at(6, 0)), Some(at(18, 0)), false),
            astronomical: RiseSetResult::all_day(false),
            solar_noon: Some(at(12, 0)),
        };
        let mut count = 0;
        events.for_each_instant(&mut |_| count += 1);
        assert_eq!(count, 9);
    }

    #[test]
    fn map_instants_applies_function() {
        let pair = ApsisPair {
            last: ApsisEvent::NONE,
            next: ApsisEvent {
                instant: Some(at(9, 54)),
                horizontal_parallax_arcsec: 3664.8,
                distance: almanac_core::Distance::from_km(358_994.0),
            },
        };
        let moved = pair.map_instants(|t| t + chrono::TimeDelta::hours(1));
        assert_eq!(moved.next.instant, Some(at(10, 54)));
        assert!(moved.last.instant.is_none());
    }
}
