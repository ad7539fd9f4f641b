//! Century eclipse tables.
//!
//! Ten tables cover 1601–2600, one per century. Each is generated from
//! the syzygy conditions on first use and cached for the process
//! lifetime. Records are flat `f64` rows of fixed stride; the field
//! offsets are below.
//!
//! # Accuracy
//!
//! The rows are not published eclipse elements. Lunar contacts come from
//! the Meeus ch. 54 semi-durations around the mean-syzygy maximum, and
//! solar rows carry Besselian elements fitted to this crate's own Sun and
//! Moon positions. Against NASA circumstances for 2017–2019 the local
//! contact times agree to within about 2 minutes for solar eclipses and
//! 10 minutes for lunar ones. Magnitudes agree to about 0.02, and
//! Besselian x/y to about 0.01 Earth radii. Event classification
//! (penumbral/partial/total, partial/annular/total/hybrid) matches the
//! published catalogue except for grazing events within a few thousandths
//! of a threshold.

use std::sync::OnceLock;

use almanac_core::moon_position;
use almanac_time::{J2000_JD, calendar_to_jd, delta_t_seconds};

use super::besselian::{BesselianElements, EARTH_RADIUS_KM, besselian_elements};
use super::conditions::{
    Conditions, LUNATIONS_PER_YEAR, conditions, lunar_geometry, solar_classification,
};
use super::types::{LunarEclipseType, SolarEclipseType};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// First year covered by the tables.
pub const FIRST_YEAR: i32 = 1601;
/// Last year covered by the tables.
pub const LAST_YEAR: i32 = 2600;
const CENTURY_COUNT: usize = 10;

/// Mean lunar radius, km.
const MOON_RADIUS_KM: f64 = 1737.4;

pub const LUNAR_STRIDE: usize = 22;
pub const SOLAR_STRIDE: usize = 28;

/// Offsets into a lunar record.
pub mod lunar_field {
    /// Greatest eclipse, JDE.
    pub const JDE: usize = 0;
    /// ΔT in seconds.
    pub const DELTA_T: usize = 1;
    /// 1 penumbral, 2 partial, 3 total.
    pub const TYPE: usize = 2;
    pub const GAMMA: usize = 3;
    pub const PENUMBRAL_MAGNITUDE: usize = 4;
    pub const UMBRAL_MAGNITUDE: usize = 5;
    /// P1, U1, U2, U3, U4, P4 in hours from greatest eclipse; NaN if absent.
    pub const CONTACTS: usize = 6;
    /// Moon's RA quadratic in hours from greatest eclipse, degrees.
    pub const RA: usize = 12;
    /// Moon's declination quadratic, degrees.
    pub const DEC: usize = 15;
    /// Equatorial horizontal parallax, degrees.
    pub const PARALLAX: usize = 18;
    /// Semidiameter, degrees.
    pub const SEMIDIAMETER: usize = 19;
    /// Umbral cone radius at the Earth.
    pub const U: usize = 20;
    /// Lunation number.
    pub const K: usize = 21;
}

/// Offsets into a solar record.
pub mod solar_field {
    /// Element epoch t0, JDE on the whole hour.
    pub const T0: usize = 0;
    pub const DELTA_T: usize = 1;
    /// 1 partial, 2 annular, 3 total, 4 hybrid.
    pub const TYPE: usize = 2;
    pub const GAMMA: usize = 3;
    /// Geocentric magnitude; 1 for umbral eclipses.
    pub const MAGNITUDE: usize = 4;
    pub const X: usize = 5;
    pub const Y: usize = 9;
    pub const D: usize = 13;
    pub const MU: usize = 16;
    pub const L1: usize = 19;
    pub const L2: usize = 22;
    pub const TAN_F1: usize = 25;
    pub const TAN_F2: usize = 26;
    /// Greatest eclipse, JDE.
    pub const JDE: usize = 27;
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// All eclipses of one century, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct EclipseTable {
    pub first_year: i32,
    lunar: Vec<f64>,
    solar: Vec<f64>,
}

impl EclipseTable {
    pub fn lunar_rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.lunar.chunks_exact(LUNAR_STRIDE)
    }

    pub fn solar_rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.solar.chunks_exact(SOLAR_STRIDE)
    }
}

static TABLES: [OnceLock<EclipseTable>; CENTURY_COUNT] = [const { OnceLock::new() }; CENTURY_COUNT];

/// Index of the table holding `year`, if covered.
pub fn century_index(year: i32) -> Option<usize> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    usize::try_from((year - FIRST_YEAR) / 100).ok()
}

/// The table at `index`, generating it on first access.
pub fn table(index: usize) -> Option<&'static EclipseTable> {
    TABLES.get(index).map(|cell| cell.get_or_init(|| build(index)))
}

fn jde_year(jde: f64) -> f64 {
    2000.0 + (jde - J2000_JD) / 365.25
}

fn build(index: usize) -> EclipseTable {
    let first_year = FIRST_YEAR + 100 * index as i32;
    let start = calendar_to_jd(first_year, 1, 1.0);
    let end = calendar_to_jd(first_year + 100, 1, 1.0);
    let k_first = (f64::from(first_year - 2000) * LUNATIONS_PER_YEAR).floor() - 2.0;
    let k_last = (f64::from(first_year + 100 - 2000) * LUNATIONS_PER_YEAR).ceil() + 2.0;

    let mut lunar = Vec::new();
    let mut solar = Vec::new();
    let mut k = k_first;
    while k <= k_last {
        if let Some(c) = conditions(k) {
            if (start..end).contains(&c.jde) {
                push_solar(&c, &mut solar);
            }
        }
        if let Some(c) = conditions(k + 0.5) {
            if (start..end).contains(&c.jde) {
                push_lunar(&c, &mut lunar);
            }
        }
        k += 1.0;
    }
    log::debug!(
        "eclipse table {}-{}: {} solar, {} lunar",
        first_year,
        first_year + 99,
        solar.len() / SOLAR_STRIDE,
        lunar.len() / LUNAR_STRIDE
    );
    EclipseTable {
        first_year,
        lunar,
        solar,
    }
}

fn push_solar(c: &Conditions, out: &mut Vec<f64>) {
    let Some((kind, magnitude)) = solar_classification(c) else {
        return;
    };
    let t0 = (c.jde * 24.0).round() / 24.0;
    let delta_t = delta_t_seconds(jde_year(c.jde));
    let e = besselian_elements(t0, delta_t);
    out.extend([t0, delta_t, f64::from(kind.code()), c.gamma, magnitude]);
    out.extend(e.x);
    out.extend(e.y);
    out.extend(e.d);
    out.extend(e.mu);
    out.extend(e.l1);
    out.extend(e.l2);
    out.extend([e.tan_f1, e.tan_f2, c.jde]);
}

fn push_lunar(c: &Conditions, out: &mut Vec<f64>) {
    let Some(g) = lunar_geometry(c) else {
        return;
    };
    let delta_t = delta_t_seconds(jde_year(c.jde));
    let [pen, par, tot] = g.semi_durations_h;
    let contacts = [-pen, -par, -tot, tot, par, pen];

    let samples = [-1.0, 0.0, 1.0].map(|h: f64| moon_position(c.jde + h / 24.0));
    let mut ra = samples.map(|m| m.equatorial.ra_rad.to_degrees());
    for i in 1..3 {
        if ra[i] - ra[i - 1] < -180.0 {
            ra[i] += 360.0;
        }
    }
    let dec = samples.map(|m| m.equatorial.dec_rad.to_degrees());
    let distance = samples[1].distance_km;

    out.extend([
        c.jde,
        delta_t,
        f64::from(g.eclipse_type.code()),
        c.gamma,
        g.penumbral_magnitude,
        g.umbral_magnitude,
    ]);
    out.extend(contacts);
    out.extend(fit_three(ra));
    out.extend(fit_three(dec));
    out.extend([
        (EARTH_RADIUS_KM / distance).asin().to_degrees(),
        (MOON_RADIUS_KM / distance).asin().to_degrees(),
        c.u,
        c.k,
    ]);
}

/// Quadratic through samples at −1, 0, +1.
fn fit_three([fm, f0, fp]: [f64; 3]) -> [f64; 3] {
    [f0, (fp - fm) / 2.0, (fp + fm - 2.0 * f0) / 2.0]
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

fn array<const N: usize>(row: &[f64], at: usize) -> [f64; N] {
    std::array::from_fn(|i| row[at + i])
}

/// Decoded lunar eclipse record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarRecord {
    pub jde: f64,
    pub delta_t: f64,
    pub eclipse_type: LunarEclipseType,
    pub gamma: f64,
    pub penumbral_magnitude: f64,
    pub umbral_magnitude: f64,
    /// P1, U1, U2, U3, U4, P4 in hours from `jde`.
    pub contacts_h: [f64; 6],
    pub ra_deg: [f64; 3],
    pub dec_deg: [f64; 3],
    pub parallax_deg: f64,
    pub semidiameter_deg: f64,
    /// Umbral cone radius at the Earth, Earth radii.
    pub umbral_radius: f64,
    /// Lunation number k, a half-integer for full moons.
    pub lunation: f64,
}

impl LunarRecord {
    /// `None` for a short row or an unknown type code.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        use lunar_field as f;
        if row.len() < LUNAR_STRIDE {
            return None;
        }
        let Some(eclipse_type) = LunarEclipseType::from_code(row[f::TYPE]) else {
            log::debug!("skipping lunar record with type code {}", row[f::TYPE]);
            return None;
        };
        Some(Self {
            jde: row[f::JDE],
            delta_t: row[f::DELTA_T],
            eclipse_type,
            gamma: row[f::GAMMA],
            penumbral_magnitude: row[f::PENUMBRAL_MAGNITUDE],
            umbral_magnitude: row[f::UMBRAL_MAGNITUDE],
            contacts_h: array(row, f::CONTACTS),
            ra_deg: array(row, f::RA),
            dec_deg: array(row, f::DEC),
            parallax_deg: row[f::PARALLAX],
            semidiameter_deg: row[f::SEMIDIAMETER],
            umbral_radius: row[f::U],
            lunation: row[f::K],
        })
    }

    /// Greatest eclipse, UT Julian Date.
    pub fn jd_ut(&self) -> f64 {
        self.jde - self.delta_t / 86_400.0
    }
}

/// Decoded solar eclipse record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarRecord {
    pub global_type: SolarEclipseType,
    pub gamma: f64,
    pub magnitude: f64,
    pub jde: f64,
    pub elements: BesselianElements,
}

impl SolarRecord {
    /// `None` for a short row or an unknown type code.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        use solar_field as f;
        if row.len() < SOLAR_STRIDE {
            return None;
        }
        let Some(global_type) = SolarEclipseType::from_code(row[f::TYPE]) else {
            log::debug!("skipping solar record with type code {}", row[f::TYPE]);
            return None;
        };
        Some(Self {
            global_type,
            gamma: row[f::GAMMA],
            magnitude: row[f::MAGNITUDE],
            jde: row[f::JDE],
            elements: BesselianElements {
                t0: row[f::T0],
                delta_t: row[f::DELTA_T],
                x: array(row, f::X),
                y: array(row, f::Y),
                d: array(row, f::D),
                mu: array(row, f::MU),
                l1: array(row, f::L1),
                l2: array(row, f::L2),
                tan_f1: row[f::TAN_F1],
                tan_f2: row[f::TAN_F2],
            },
        })
    }

    /// Greatest eclipse, UT Julian Date.
    pub fn jd_ut(&self) -> f64 {
        self.jde - self.elements.delta_t / 86_400.0
    }
}
