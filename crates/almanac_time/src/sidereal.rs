//! Greenwich and local sidereal time.
//!
//! Functions take UT Julian Dates; UTC is used as UT throughout the engine.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the day count so the fractional turn keeps full precision.
    let turns = du.fract() + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du;
    (TAU * turns).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let tail = -0.00000044 + t * (-0.000029956 - t * 0.0000000368);
    let poly_arcsec = 0.014506 + t * (4612.156534 + t * (1.3915817 + t * tail));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time for an east-positive longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_rad: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_rad).rem_euclid(TAU)
}
