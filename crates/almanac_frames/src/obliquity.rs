//! Obliquity of the ecliptic, held fixed at its J2000.0 value.

/// Mean obliquity at J2000.0 in degrees (23°26′21.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Mean obliquity at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_DEG * (std::f64::consts::PI / 180.0);

/// sin(ε₀).
pub const SIN_OBL: f64 = 0.397_777_155_753_990_53;

/// cos(ε₀).
pub const COS_OBL: f64 = 0.917_482_062_146_321;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trig_constants_match_angle() {
        assert!((OBLIQUITY_J2000_RAD.sin() - SIN_OBL).abs() < 1e-12);
        assert!((OBLIQUITY_J2000_RAD.cos() - COS_OBL).abs() < 1e-12);
    }
}
