//! Lunar coordinates for an observer.
//!
//! The ecliptic place comes from the periodic series; the topocentric
//! correction uses the configured ellipsoid and observer height.

use almanac_frames::{
    Equatorial, HorizontalCoords, Topocentric, ecliptic_to_equatorial, equatorial_to_horizontal,
    parallactic_angle, topocentric,
};
use almanac_series::moon_ecliptic;
use almanac_time::{centuries_since_j2000, local_sidereal_time_rad};

use crate::config::AlmanacConfig;
use crate::position::GeoPosition;

/// Geocentric place of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Ecliptic longitude, radians in [0, 2π).
    pub longitude_rad: f64,
    /// Ecliptic latitude, radians.
    pub latitude_rad: f64,
    pub equatorial: Equatorial,
    /// Earth–Moon distance in km.
    pub distance_km: f64,
}

/// Moon's geocentric position at Julian Date `jd`.
pub fn moon_position(jd: f64) -> MoonPosition {
    let ecl = moon_ecliptic(centuries_since_j2000(jd));
    let lon = ecl.longitude_deg.to_radians();
    let lat = ecl.latitude_deg.to_radians();
    MoonPosition {
        longitude_rad: lon,
        latitude_rad: lat,
        equatorial: ecliptic_to_equatorial(lon, lat),
        distance_km: ecl.distance_km,
    }
}

struct LocalMoon {
    moon: MoonPosition,
    hour_angle: f64,
    topo: Topocentric,
}

fn local_moon(jd: f64, position: &GeoPosition, config: &AlmanacConfig) -> LocalMoon {
    let moon = moon_position(jd);
    let hour_angle =
        local_sidereal_time_rad(jd, position.longitude_rad()) - moon.equatorial.ra_rad;
    let figure = config
        .ellipsoid
        .figure(position.latitude_rad(), config.observer_altitude_m);
    let topo = topocentric(
        &moon.equatorial,
        moon.distance_km,
        hour_angle,
        &figure,
        config.ellipsoid.equatorial_radius_km,
    );
    LocalMoon {
        moon,
        hour_angle,
        topo,
    }
}

/// Apparent topocentric altitude of the Moon's centre, degrees.
pub fn moon_altitude_deg(jd: f64, position: &GeoPosition, config: &AlmanacConfig) -> f64 {
    let local = local_moon(jd, position, config);
    let (alt, _) = equatorial_to_horizontal(
        local.topo.hour_angle_rad,
        local.topo.equatorial.dec_rad,
        position.latitude_rad(),
    );
    config.refraction.apparent_altitude_deg(alt.to_degrees())
}

/// Full horizontal coordinates of the Moon.
pub fn moon_horizontal(
    jd: f64,
    position: &GeoPosition,
    config: &AlmanacConfig,
) -> HorizontalCoords {
    let local = local_moon(jd, position, config);
    let lat = position.latitude_rad();
    let dec = local.topo.equatorial.dec_rad;
    let (alt, az) = equatorial_to_horizontal(local.topo.hour_angle_rad, dec, lat);
    let (geo_alt, _) =
        equatorial_to_horizontal(local.hour_angle, local.moon.equatorial.dec_rad, lat);

    let true_alt = alt.to_degrees();
    let refraction = config.refraction.correction_deg(true_alt);
    HorizontalCoords {
        altitude_deg: true_alt + refraction,
        azimuth_deg: az.to_degrees(),
        parallax_deg: (geo_alt - alt).to_degrees(),
        refraction_deg: refraction,
        parallactic_angle_rad: parallactic_angle(local.topo.hour_angle_rad, dec, lat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_example_47a_equatorial() {
        // 1992 April 12, 0h TD. Meeus gives α = 134.688470°, δ = 13.768368°
        // with nutation and true obliquity; J2000 obliquity shifts δ slightly.
        let moon = moon_position(2_448_724.5);
        assert_abs_diff_eq!(moon.equatorial.ra_rad.to_degrees(), 134.688, epsilon = 0.02);
        assert_abs_diff_eq!(moon.equatorial.dec_rad.to_degrees(), 13.768, epsilon = 0.02);
        assert_abs_diff_eq!(moon.distance_km, 368_409.7, epsilon = 1.0);
    }

    #[test]
    fn parallax_lowers_the_moon() {
        let config = AlmanacConfig::default();
        let pos = GeoPosition::new(42.36, -71.06);
        for i in 0..48 {
            let h = moon_horizontal(2_458_192.5 + f64::from(i) / 48.0, &pos, &config);
            assert!(h.parallax_deg > 0.0 && h.parallax_deg < 1.05, "{}", h.parallax_deg);
        }
    }

    #[test]
    fn fast_altitude_matches_full() {
        let config = AlmanacConfig::default();
        let pos = GeoPosition::new(-33.9, 151.2);
        let jd = 2_458_300.3;
        assert_abs_diff_eq!(
            moon_altitude_deg(jd, &pos, &config),
            moon_horizontal(jd, &pos, &config).altitude_deg,
            epsilon = 1e-12
        );
    }
}
