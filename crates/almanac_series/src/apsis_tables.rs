//! Periodic terms for the Moon's perigee and apogee.
//!
//! Multipliers are for D, M, F (the M′ column is unused). Time corrections
//! are in days, parallax terms in arcseconds; `drift` is the coefficient of T.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., tables 50.A and 50.B.

use crate::term::{PeriodicTerm, drift, term};

/// Constant part of the perigee horizontal parallax, arcseconds.
pub const PERIGEE_PARALLAX_BASE: f64 = 3629.215;
/// Constant part of the apogee horizontal parallax, arcseconds.
pub const APOGEE_PARALLAX_BASE: f64 = 3245.251;

/// Perigee time correction, sine terms in days.
#[rustfmt::skip]
pub static PERIGEE_TIME_TERMS: [PeriodicTerm; 60] = [
    term( 2,  0, 0,  0,  -1.6769),
    term( 4,  0, 0,  0,   0.4589),
    term( 6,  0, 0,  0,  -0.1856),
    term( 8,  0, 0,  0,   0.0883),
    drift( 2, -1, 0,  0,  -0.0773,   0.00019),
    drift( 0,  1, 0,  0,   0.0502,  -0.00013),
    term(10,  0, 0,  0,  -0.0460),
    drift( 4, -1, 0,  0,   0.0422,  -0.00011),
    term( 6, -1, 0,  0,  -0.0256),
    term(12,  0, 0,  0,   0.0253),
    term( 1,  0, 0,  0,   0.0237),
    term( 8, -1, 0,  0,   0.0162),
    term(14,  0, 0,  0,  -0.0145),
    term( 0,  0, 0,  2,   0.0129),
    term( 3,  0, 0,  0,  -0.0112),
    term(10, -1, 0,  0,  -0.0104),
    term(16,  0, 0,  0,   0.0086),
    term(12, -1, 0,  0,   0.0069),
    term( 5,  0, 0,  0,   0.0066),
    term( 2,  0, 0,  2,  -0.0053),
    term(18,  0, 0,  0,  -0.0052),
    term(14, -1, 0,  0,  -0.0046),
    term( 7,  0, 0,  0,  -0.0041),
    term( 2,  1, 0,  0,   0.0040),
    term(20,  0, 0,  0,   0.0032),
    term( 1,  1, 0,  0,  -0.0032),
    term(16, -1, 0,  0,   0.0031),
    term( 4,  1, 0,  0,  -0.0029),
    term( 9,  0, 0,  0,   0.0027),
    term( 4,  0, 0,  2,   0.0027),
    term( 2, -2, 0,  0,  -0.0027),
    term( 4, -2, 0,  0,   0.0024),
    term( 6, -2, 0,  0,  -0.0021),
    term(22,  0, 0,  0,  -0.0021),
    term(18, -1, 0,  0,  -0.0021),
    term( 6,  1, 0,  0,   0.0019),
    term(11,  0, 0,  0,  -0.0018),
    term( 8,  1, 0,  0,  -0.0014),
    term( 4,  0, 0, -2,  -0.0014),
    term( 6,  0, 0,  2,  -0.0014),
    term( 3,  1, 0,  0,   0.0014),
    term( 5,  1, 0,  0,  -0.0014),
    term(13,  0, 0,  0,   0.0013),
    term(20, -1, 0,  0,   0.0013),
    term( 3,  2, 0,  0,   0.0011),
    term( 4, -2, 0,  2,  -0.0011),
    term( 1,  2, 0,  0,  -0.0010),
    term(22, -1, 0,  0,  -0.0009),
    term( 0,  0, 0,  4,  -0.0008),
    term( 6,  0, 0, -2,   0.0008),
    term( 2,  1, 0, -2,   0.0008),
    term( 0,  2, 0,  0,   0.0007),
    term( 0, -1, 0,  2,   0.0007),
    term( 2,  0, 0,  4,   0.0007),
    term( 0, -2, 0,  2,  -0.0006),
    term( 2,  2, 0, -2,  -0.0006),
    term(24,  0, 0,  0,   0.0006),
    term( 4,  0, 0, -4,   0.0005),
    term( 2,  2, 0,  0,   0.0005),
    term( 1, -1, 0,  0,  -0.0004),
];

/// Apogee time correction, sine terms in days.
#[rustfmt::skip]
pub static APOGEE_TIME_TERMS: [PeriodicTerm; 32] = [
    term( 2,  0, 0,  0,   0.4392),
    term( 4,  0, 0,  0,   0.0684),
    drift( 0,  1, 0,  0,   0.0456,  -0.00011),
    drift( 2, -1, 0,  0,   0.0426,  -0.00011),
    term( 0,  0, 0,  2,   0.0212),
    term( 1,  0, 0,  0,  -0.0189),
    term( 6,  0, 0,  0,   0.0144),
    term( 4, -1, 0,  0,   0.0113),
    term( 2,  0, 0,  2,   0.0047),
    term( 1,  1, 0,  0,   0.0036),
    term( 8,  0, 0,  0,   0.0035),
    term( 6, -1, 0,  0,   0.0034),
    term( 2,  0, 0, -2,  -0.0034),
    term( 2, -2, 0,  0,   0.0022),
    term( 3,  0, 0,  0,  -0.0017),
    term( 4,  0, 0,  2,   0.0013),
    term( 8, -1, 0,  0,   0.0011),
    term( 4, -2, 0,  0,   0.0010),
    term(10,  0, 0,  0,   0.0009),
    term( 3,  1, 0,  0,   0.0007),
    term( 0,  2, 0,  0,   0.0006),
    term( 2,  1, 0,  0,   0.0005),
    term( 2,  2, 0,  0,   0.0005),
    term( 6,  0, 0,  2,   0.0004),
    term( 6, -2, 0,  0,   0.0004),
    term(10, -1, 0,  0,   0.0004),
    term( 5,  0, 0,  0,  -0.0004),
    term( 4,  0, 0, -2,  -0.0004),
    term( 0,  1, 0,  2,   0.0003),
    term(12,  0, 0,  0,   0.0003),
    term( 2, -1, 0,  2,   0.0003),
    term( 1, -1, 0,  0,  -0.0003),
];

/// Perigee parallax, cosine terms in arcseconds.
#[rustfmt::skip]
pub static PERIGEE_PARALLAX_TERMS: [PeriodicTerm; 46] = [
    term( 2,  0, 0,  0,   63.224),
    term( 4,  0, 0,  0,   -6.990),
    drift( 2, -1, 0,  0,    2.834,   -0.0071),
    term( 6,  0, 0,  0,    1.927),
    term( 1,  0, 0,  0,   -1.263),
    term( 8,  0, 0,  0,   -0.702),
    drift( 0,  1, 0,  0,    0.696,   -0.0017),
    term( 0,  0, 0,  2,   -0.690),
    drift( 4, -1, 0,  0,   -0.629,    0.0016),
    term( 2,  0, 0, -2,   -0.392),
    term(10,  0, 0,  0,    0.297),
    term( 6, -1, 0,  0,    0.260),
    term( 3,  0, 0,  0,    0.201),
    term( 2,  1, 0,  0,   -0.161),
    term( 1,  1, 0,  0,    0.157),
    term(12,  0, 0,  0,   -0.138),
    term( 8, -1, 0,  0,   -0.127),
    term( 2,  0, 0,  2,    0.104),
    term( 2, -2, 0,  0,    0.104),
    term( 5,  0, 0,  0,   -0.079),
    term(14,  0, 0,  0,    0.068),
    term(10, -1, 0,  0,    0.067),
    term( 4,  1, 0,  0,    0.054),
    term(12, -1, 0,  0,   -0.038),
    term( 4, -2, 0,  0,   -0.038),
    term( 7,  0, 0,  0,    0.037),
    term( 4,  0, 0,  2,   -0.037),
    term(16,  0, 0,  0,   -0.035),
    term( 3,  1, 0,  0,   -0.030),
    term( 1, -1, 0,  0,    0.029),
    term( 6,  1, 0,  0,   -0.025),
    term( 0,  2, 0,  0,    0.023),
    term(14, -1, 0,  0,    0.023),
    term( 2,  2, 0,  0,   -0.023),
    term( 6, -2, 0,  0,    0.022),
    term( 2, -1, 0, -2,   -0.021),
    term( 9,  0, 0,  0,   -0.020),
    term(18,  0, 0,  0,    0.019),
    term( 6,  0, 0,  2,    0.017),
    term( 0, -1, 0,  2,    0.014),
    term(16, -1, 0,  0,   -0.014),
    term( 4,  0, 0, -2,    0.013),
    term( 8,  1, 0,  0,    0.012),
    term(11,  0, 0,  0,    0.011),
    term( 5,  1, 0,  0,    0.010),
    term(20,  0, 0,  0,   -0.010),
];

/// Apogee parallax, cosine terms in arcseconds.
#[rustfmt::skip]
pub static APOGEE_PARALLAX_TERMS: [PeriodicTerm; 17] = [
    term( 2,  0, 0,  0,   -9.147),
    term( 1,  0, 0,  0,   -0.841),
    term( 0,  0, 0,  2,    0.697),
    drift( 0,  1, 0,  0,   -0.656,    0.0016),
    term( 4,  0, 0,  0,    0.355),
    term( 2, -1, 0,  0,    0.159),
    term( 1,  1, 0,  0,    0.127),
    term( 4, -1, 0,  0,    0.065),
    term( 6,  0, 0,  0,    0.052),
    term( 2,  1, 0,  0,    0.043),
    term( 2,  0, 0,  2,    0.031),
    term( 2,  0, 0, -2,   -0.023),
    term( 2, -2, 0,  0,    0.022),
    term( 2,  2, 0,  0,    0.019),
    term( 0,  2, 0,  0,   -0.016),
    term( 6, -1, 0,  0,    0.014),
    term( 8,  0, 0,  0,    0.010),
];
