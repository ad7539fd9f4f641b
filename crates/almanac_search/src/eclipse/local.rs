//! Eclipse circumstances for one observer.
//!
//! Solar contacts are iterated on the Besselian elements; lunar contacts
//! are the same for every observer and only their visibility is local.
//!
//! Source: Explanatory Supplement to the Astronomical Almanac, ch. 11;
//! Espenak, NASA eclipse bulletins.

use almanac_core::{AlmanacConfig, GeoPosition};
use almanac_frames::ObserverFigure;
use almanac_time::gmst_rad;

use super::besselian::{BesselianElements, evaluate, rate};
use super::table::{LunarRecord, SolarRecord};
use super::types::SolarEclipseType;

/// Iteration cap for contact and maximum refinement.
const MAX_ITERATIONS: usize = 20;
/// Convergence threshold, hours (about 0.004 s).
const TOLERANCE_H: f64 = 1e-6;

/// Observer on the ellipsoid in the units of the fundamental plane.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
    latitude_rad: f64,
    longitude_deg: f64,
    figure: ObserverFigure,
}

impl Observer {
    pub fn new(position: &GeoPosition, config: &AlmanacConfig) -> Self {
        Self {
            latitude_rad: position.latitude_rad(),
            longitude_deg: position.longitude_deg,
            figure: config
                .ellipsoid
                .figure(position.latitude_rad(), config.eclipse_observer_altitude_m),
        }
    }
}

// ---------------------------------------------------------------------------
// Solar
// ---------------------------------------------------------------------------

/// Local solar eclipse circumstances; times are UT Julian Dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLocal {
    pub eclipse_type: SolarEclipseType,
    pub first_contact: f64,
    pub second_contact: Option<f64>,
    pub maximum: f64,
    pub third_contact: Option<f64>,
    pub last_contact: f64,
    pub magnitude: f64,
    pub sun_altitude_deg: f64,
    /// Sun above the horizon at first contact, maximum or last contact.
    pub visible: bool,
}

/// Observer's position relative to the shadow at `t` hours from t0.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    u: f64,
    v: f64,
    a: f64,
    b: f64,
    /// Penumbral radius at the observer.
    l1: f64,
    /// Umbral radius at the observer; negative inside a total shadow.
    l2: f64,
    sin_altitude: f64,
}

impl Geometry {
    fn n2(&self) -> f64 {
        self.a * self.a + self.b * self.b
    }

    fn miss(&self) -> f64 {
        (self.u * self.u + self.v * self.v).sqrt()
    }

    /// Correction to the time of least separation.
    fn to_maximum(&self) -> f64 {
        -(self.u * self.a + self.v * self.b) / self.n2()
    }
}

fn geometry(e: &BesselianElements, obs: &Observer, t: f64) -> Geometry {
    let x = evaluate(&e.x, t);
    let y = evaluate(&e.y, t);
    let d = evaluate(&e.d, t).to_radians();
    let d_rate = rate(&e.d, t).to_radians();
    let mu_rate = rate(&e.mu, t).to_radians();
    let h = (evaluate(&e.mu, t) + obs.longitude_deg).to_radians();

    let (sin_h, cos_h) = h.sin_cos();
    let (sin_d, cos_d) = d.sin_cos();
    let ObserverFigure {
        rho_sin_phi,
        rho_cos_phi,
    } = obs.figure;

    let xi = rho_cos_phi * sin_h;
    let eta = rho_sin_phi * cos_d - rho_cos_phi * cos_h * sin_d;
    let zeta = rho_sin_phi * sin_d + rho_cos_phi * cos_h * cos_d;
    let xi_rate = mu_rate * rho_cos_phi * cos_h;
    let eta_rate = mu_rate * xi * sin_d - zeta * d_rate;

    let (sin_lat, cos_lat) = obs.latitude_rad.sin_cos();
    Geometry {
        u: x - xi,
        v: y - eta,
        a: rate(&e.x, t) - xi_rate,
        b: rate(&e.y, t) - eta_rate,
        l1: evaluate(&e.l1, t) - zeta * e.tan_f1,
        l2: evaluate(&e.l2, t) - zeta * e.tan_f2,
        sin_altitude: sin_d * sin_lat + cos_d * cos_lat * cos_h,
    }
}

fn maximum(e: &BesselianElements, obs: &Observer) -> Option<(f64, Geometry)> {
    let mut t = 0.0;
    for _ in 0..MAX_ITERATIONS {
        let g = geometry(e, obs, t);
        if g.n2() <= 0.0 {
            return None;
        }
        let tau = g.to_maximum();
        t += tau;
        if tau.abs() < TOLERANCE_H {
            break;
        }
    }
    Some((t, geometry(e, obs, t)))
}

/// Time when the observer crosses a shadow edge of radius `radius(g)`.
/// `sign` is −1 for the ingress and +1 for the egress.
fn contact(
    e: &BesselianElements,
    obs: &Observer,
    start: f64,
    sign: f64,
    radius: fn(&Geometry) -> f64,
) -> Option<f64> {
    let mut t = start;
    for _ in 0..MAX_ITERATIONS {
        let g = geometry(e, obs, t);
        let l = radius(&g);
        let n = g.n2().sqrt();
        if n <= 0.0 || l <= 0.0 {
            return None;
        }
        let s = (g.a * g.v - g.u * g.b) / (n * l);
        if s.abs() > 1.0 {
            return None;
        }
        let tau = g.to_maximum() + sign * l / n * (1.0 - s * s).sqrt();
        t += tau;
        if tau.abs() < TOLERANCE_H {
            return Some(t);
        }
    }
    Some(t)
}

fn altitude_deg(g: &Geometry) -> f64 {
    g.sin_altitude.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Circumstances of `record` at the observer, or `None` if the
/// penumbra misses them.
pub fn solar_local(record: &SolarRecord, obs: &Observer) -> Option<SolarLocal> {
    let e = &record.elements;
    let (t_max, g) = maximum(e, obs)?;
    let m = g.miss();
    if m >= g.l1 {
        return None;
    }

    let central = m < g.l2.abs();
    let eclipse_type = match (central, g.l2 < 0.0) {
        (true, true) => SolarEclipseType::Total,
        (true, false) => SolarEclipseType::Annular,
        (false, _) => SolarEclipseType::Partial,
    };
    let magnitude = if central {
        (g.l1 - g.l2) / (g.l1 + g.l2)
    } else {
        (g.l1 - m) / (g.l1 + g.l2)
    };

    let c1 = contact(e, obs, t_max, -1.0, |g| g.l1)?;
    let c4 = contact(e, obs, t_max, 1.0, |g| g.l1)?;
    let (c2, c3) = if central {
        (
            contact(e, obs, t_max, -1.0, |g| g.l2.abs()),
            contact(e, obs, t_max, 1.0, |g| g.l2.abs()),
        )
    } else {
        (None, None)
    };

    let visible = [c1, t_max, c4]
        .iter()
        .any(|&t| geometry(e, obs, t).sin_altitude > 0.0);

    let to_ut = |t: f64| e.t0 + t / 24.0 - e.delta_t / 86_400.0;
    Some(SolarLocal {
        eclipse_type,
        first_contact: to_ut(c1),
        second_contact: c2.map(to_ut),
        maximum: to_ut(t_max),
        third_contact: c3.map(to_ut),
        last_contact: to_ut(c4),
        magnitude,
        sun_altitude_deg: altitude_deg(&g),
        visible,
    })
}

// ---------------------------------------------------------------------------
// Lunar
// ---------------------------------------------------------------------------

/// Topocentric altitude of the Moon `hours` from greatest eclipse, degrees.
pub fn moon_altitude_deg(record: &LunarRecord, obs: &Observer, hours: f64) -> f64 {
    let ra = evaluate(&record.ra_deg, hours).to_radians();
    let dec = evaluate(&record.dec_deg, hours).to_radians();
    let jd_ut = record.jd_ut() + hours / 24.0;
    let h = gmst_rad(jd_ut) + obs.longitude_deg.to_radians() - ra;
    let (sin_lat, cos_lat) = obs.latitude_rad.sin_cos();
    let sin_alt = sin_lat * dec.sin() + cos_lat * dec.cos() * h.cos();
    let alt = sin_alt.clamp(-1.0, 1.0).asin();
    alt.to_degrees() - record.parallax_deg * alt.cos()
}

/// Whether the Moon is up at any contact or at greatest eclipse.
pub fn lunar_visible(record: &LunarRecord, obs: &Observer) -> bool {
    record
        .contacts_h
        .iter()
        .copied()
        .filter(|h| h.is_finite())
        .chain(std::iter::once(0.0))
        .any(|h| moon_altitude_deg(record, obs, h) > 0.0)
}
