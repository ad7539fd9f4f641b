//! Time-scale plumbing for the almanac engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Julian/Gregorian switch at 1582-10-15)
//! - Instant ↔ Julian Date conversions with millisecond rounding
//! - Dynamic time (Julian centuries since J2000.0) and Unix-epoch day counts
//! - ΔT = TT − UT estimates
//! - Greenwich and local sidereal time

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_seconds, tt_to_ut_jd, ut_to_tt_jd};
pub use error::TimeError;
pub use instant::{
    centuries_since_j2000, day_start, days_since_j2000, decimal_year, from_unix_epoch_julian,
    instant_to_jd, jd_to_instant, normalize_instant, parse_instant, try_jd_to_instant,
    unix_epoch_julian,
};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, is_gregorian,
    jd_to_calendar,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
