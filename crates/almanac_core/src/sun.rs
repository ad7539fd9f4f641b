//! Low-precision solar coordinates.
//!
//! Geometric mean longitude and anomaly, equation of the center and a
//! constant aberration term. No nutation, no planetary perturbations.
//! Good to about 0.01°.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 25.

use almanac_frames::{
    Equatorial, HorizontalCoords, ecliptic_to_equatorial, equatorial_to_horizontal,
    parallactic_angle,
};
use almanac_series::normalize_degrees;
use almanac_time::{centuries_since_j2000, local_sidereal_time_rad};

use crate::config::AlmanacConfig;
use crate::position::GeoPosition;

/// Kilometres per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Annual aberration in longitude, degrees.
const ABERRATION_DEG: f64 = 0.005_69;

/// Geocentric place of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Ecliptic longitude in radians, aberration included.
    pub longitude_rad: f64,
    /// Mean anomaly in radians.
    pub mean_anomaly_rad: f64,
    pub equatorial: Equatorial,
    /// Earth–Sun distance in km.
    pub distance_km: f64,
}

/// Sun's geocentric position at Julian Date `jd`.
pub fn sun_position(jd: f64) -> SunPosition {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = normalize_degrees(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2);
    let m_rad = m.to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;
    let nu = (m + c).to_radians();
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let longitude = normalize_degrees(l0 + c - ABERRATION_DEG).to_radians();
    SunPosition {
        longitude_rad: longitude,
        mean_anomaly_rad: m_rad,
        equatorial: ecliptic_to_equatorial(longitude, 0.0),
        distance_km: r_au * AU_KM,
    }
}

/// Local hour angle of the Sun, radians.
fn hour_angle(jd: f64, position: &GeoPosition, sun: &SunPosition) -> f64 {
    local_sidereal_time_rad(jd, position.longitude_rad()) - sun.equatorial.ra_rad
}

/// Apparent altitude of the Sun's centre, degrees.
///
/// No parallax: at solar distance it is below 9″.
pub fn sun_altitude_deg(jd: f64, position: &GeoPosition, config: &AlmanacConfig) -> f64 {
    let sun = sun_position(jd);
    let (alt, _) = equatorial_to_horizontal(
        hour_angle(jd, position, &sun),
        sun.equatorial.dec_rad,
        position.latitude_rad(),
    );
    config.refraction.apparent_altitude_deg(alt.to_degrees())
}

/// Full horizontal coordinates of the Sun.
pub fn sun_horizontal(jd: f64, position: &GeoPosition, config: &AlmanacConfig) -> HorizontalCoords {
    let sun = sun_position(jd);
    let lat = position.latitude_rad();
    let ha = hour_angle(jd, position, &sun);
    let (alt, az) = equatorial_to_horizontal(ha, sun.equatorial.dec_rad, lat);
    let true_alt = alt.to_degrees();
    let refraction = config.refraction.correction_deg(true_alt);
    HorizontalCoords {
        altitude_deg: true_alt + refraction,
        azimuth_deg: az.to_degrees(),
        parallax_deg: 0.0,
        refraction_deg: refraction,
        parallactic_angle_rad: parallactic_angle(ha, sun.equatorial.dec_rad, lat),
    }
}
