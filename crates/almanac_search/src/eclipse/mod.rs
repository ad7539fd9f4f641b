//! Solar and lunar eclipses visible from a location.
//!
//! Eclipses are found in generated century tables covering 1601–2600.
//! A search starts in the query's century and continues into the
//! adjacent one; queries outside the covered range find nothing.

mod besselian;
mod boundary;
mod conditions;
mod local;
mod table;
mod types;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use almanac_core::{AlmanacConfig, GeoPosition};
use almanac_time::{instant_to_jd, jd_to_instant};

use boundary::{DatedContacts, assign_days, clock_hours};
use local::{Observer, lunar_visible, solar_local};
use table::{EclipseTable, LunarRecord, SolarRecord, century_index, table};

pub use besselian::BesselianElements;
pub use table::{FIRST_YEAR, LAST_YEAR};
pub use types::{
    EclipsePair, LunarEclipseDetails, LunarEclipseType, SolarEclipseDetails, SolarEclipseType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

trait Record: Sized + Copy {
    fn rows(table: &EclipseTable) -> std::slice::ChunksExact<'_, f64>;
    fn decode(row: &[f64]) -> Option<Self>;
    fn jd_ut(&self) -> f64;
}

impl Record for SolarRecord {
    fn rows(table: &EclipseTable) -> std::slice::ChunksExact<'_, f64> {
        table.solar_rows()
    }
    fn decode(row: &[f64]) -> Option<Self> {
        SolarRecord::from_row(row)
    }
    fn jd_ut(&self) -> f64 {
        SolarRecord::jd_ut(self)
    }
}

impl Record for LunarRecord {
    fn rows(table: &EclipseTable) -> std::slice::ChunksExact<'_, f64> {
        table.lunar_rows()
    }
    fn decode(row: &[f64]) -> Option<Self> {
        LunarRecord::from_row(row)
    }
    fn jd_ut(&self) -> f64 {
        LunarRecord::jd_ut(self)
    }
}

/// The query's century and its neighbour in the search direction.
fn tables_around(year: i32, direction: Direction) -> Vec<&'static EclipseTable> {
    let Some(index) = century_index(year) else {
        log::debug!("year {year} is outside the eclipse tables");
        return Vec::new();
    };
    let neighbour = match direction {
        Direction::Forward => index.checked_add(1),
        Direction::Backward => index.checked_sub(1),
    };
    [Some(index), neighbour]
        .into_iter()
        .flatten()
        .filter_map(table)
        .collect()
}

/// First record in `direction` from `instant` for which `visible` yields a result.
///
/// Backward searches include an eclipse whose maximum equals the query.
fn find<R: Record, T>(
    instant: &DateTime<Utc>,
    direction: Direction,
    mut visible: impl FnMut(R) -> Option<T>,
) -> Option<T> {
    let jd = instant_to_jd(instant);
    for t in tables_around(instant.year(), direction) {
        let records = R::rows(t).filter_map(R::decode);
        let hit = match direction {
            Direction::Forward => records.filter(|r| r.jd_ut() > jd).find_map(&mut visible),
            Direction::Backward => records
                .rev()
                .filter(|r| r.jd_ut() <= jd)
                .find_map(&mut visible),
        };
        if hit.is_some() {
            return hit;
        }
    }
    None
}

/// Place contact times (UT Julian Dates) on calendar days around `anchor`.
fn dated_contacts(jds: &[Option<f64>], anchor: usize) -> Option<DatedContacts> {
    let times: Vec<Option<NaiveDateTime>> = jds
        .iter()
        .map(|jd| jd.and_then(jd_to_instant).map(|t| t.naive_utc()))
        .collect();
    let anchor_date = times.get(anchor).copied().flatten()?.date();
    let clocks: Vec<Option<f64>> = times.iter().map(|t| t.as_ref().map(clock_hours)).collect();
    Some(assign_days(anchor_date, &clocks, anchor))
}

fn solar_details(record: &SolarRecord, observer: &Observer) -> Option<SolarEclipseDetails> {
    let local = solar_local(record, observer)?;
    if !local.visible {
        log::trace!("solar eclipse at JD {:.4} below the horizon", local.maximum);
        return None;
    }
    let dated = dated_contacts(
        &[
            Some(local.first_contact),
            local.second_contact,
            Some(local.maximum),
            local.third_contact,
            Some(local.last_contact),
        ],
        2,
    )?;
    let at = |i: usize| dated.instants[i].map(|t| t.and_utc().fixed_offset());
    Some(SolarEclipseDetails {
        date: dated.date,
        eclipse_type: local.eclipse_type,
        global_type: record.global_type,
        partial_begin: at(0),
        central_begin: at(1),
        maximum: at(2),
        central_end: at(3),
        partial_end: at(4),
        magnitude: local.magnitude,
        sun_altitude_deg: local.sun_altitude_deg,
    })
}

fn lunar_details(record: &LunarRecord, observer: &Observer) -> Option<LunarEclipseDetails> {
    if !lunar_visible(record, observer) {
        log::trace!("lunar eclipse at JDE {:.4} below the horizon", record.jde);
        return None;
    }
    let base = record.jd_ut();
    let at_offset = |h: f64| h.is_finite().then(|| base + h / 24.0);
    let [p1, u1, u2, u3, u4, p4] = record.contacts_h;
    let dated = dated_contacts(
        &[
            at_offset(p1),
            at_offset(u1),
            at_offset(u2),
            Some(base),
            at_offset(u3),
            at_offset(u4),
            at_offset(p4),
        ],
        3,
    )?;
    let at = |i: usize| dated.instants[i].map(|t| t.and_utc().fixed_offset());
    Some(LunarEclipseDetails {
        date: dated.date,
        eclipse_type: record.eclipse_type,
        penumbral_begin: at(0),
        partial_begin: at(1),
        total_begin: at(2),
        maximum: at(3),
        total_end: at(4),
        partial_end: at(5),
        penumbral_end: at(6),
        penumbral_magnitude: record.penumbral_magnitude,
        umbral_magnitude: record.umbral_magnitude,
    })
}

/// Next solar eclipse after `instant` visible from `position`.
pub fn next_solar_eclipse(
    instant: &DateTime<Utc>,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> Option<SolarEclipseDetails> {
    let observer = Observer::new(position, config);
    find(instant, Direction::Forward, |r: SolarRecord| {
        solar_details(&r, &observer)
    })
}

/// Most recent solar eclipse at or before `instant` visible from `position`.
pub fn last_solar_eclipse(
    instant: &DateTime<Utc>,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> Option<SolarEclipseDetails> {
    let observer = Observer::new(position, config);
    find(instant, Direction::Backward, |r: SolarRecord| {
        solar_details(&r, &observer)
    })
}

/// Next lunar eclipse after `instant` visible from `position`.
pub fn next_lunar_eclipse(
    instant: &DateTime<Utc>,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> Option<LunarEclipseDetails> {
    let observer = Observer::new(position, config);
    find(instant, Direction::Forward, |r: LunarRecord| {
        lunar_details(&r, &observer)
    })
}

/// Most recent lunar eclipse at or before `instant` visible from `position`.
pub fn last_lunar_eclipse(
    instant: &DateTime<Utc>,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> Option<LunarEclipseDetails> {
    let observer = Observer::new(position, config);
    find(instant, Direction::Backward, |r: LunarRecord| {
        lunar_details(&r, &observer)
    })
}

/// Last and next visible solar eclipses around `instant`.
pub fn solar_eclipses(
    instant: &DateTime<Utc>,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> EclipsePair<SolarEclipseDetails> {
    EclipsePair {
        last: last_solar_eclipse(instant, position, config),
        next: next_solar_eclipse(instant, position, config),
    }
}

/// Last and next visible lunar eclipses around `instant`.
pub fn lunar_eclipses(
    instant: &DateTime<Utc>,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> EclipsePair<LunarEclipseDetails> {
    EclipsePair {
        last: last_lunar_eclipse(instant, position, config),
        next: next_lunar_eclipse(instant, position, config),
    }
}
