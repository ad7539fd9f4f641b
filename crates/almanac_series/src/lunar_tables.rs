//! Periodic terms for the Moon's geocentric position.
//!
//! Amplitudes are in 1e-6 degree (longitude, latitude) and 1e-3 km
//! (distance). Multipliers are for the arguments D, M, M′, F.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., tables 47.A and 47.B.
//! Based on the ELP-2000/82 theory (Chapront-Touzé & Chapront).

use crate::term::{PeriodicTerm, term};

/// Σl: sine terms in ecliptic longitude.
#[rustfmt::skip]
pub static LONGITUDE_TERMS: [PeriodicTerm; 59] = [
    term( 0,  0,  1,  0,   6_288_774.0),
    term( 2,  0, -1,  0,   1_274_027.0),
    term( 2,  0,  0,  0,     658_314.0),
    term( 0,  0,  2,  0,     213_618.0),
    term( 0,  1,  0,  0,    -185_116.0),
    term( 0,  0,  0,  2,    -114_332.0),
    term( 2,  0, -2,  0,      58_793.0),
    term( 2, -1, -1,  0,      57_066.0),
    term( 2,  0,  1,  0,      53_322.0),
    term( 2, -1,  0,  0,      45_758.0),
    term( 0,  1, -1,  0,     -40_923.0),
    term( 1,  0,  0,  0,     -34_720.0),
    term( 0,  1,  1,  0,     -30_383.0),
    term( 2,  0,  0, -2,      15_327.0),
    term( 0,  0,  1,  2,     -12_528.0),
    term( 0,  0,  1, -2,      10_980.0),
    term( 4,  0, -1,  0,      10_675.0),
    term( 0,  0,  3,  0,      10_034.0),
    term( 4,  0, -2,  0,       8_548.0),
    term( 2,  1, -1,  0,      -7_888.0),
    term( 2,  1,  0,  0,      -6_766.0),
    term( 1,  0, -1,  0,      -5_163.0),
    term( 1,  1,  0,  0,       4_987.0),
    term( 2, -1,  1,  0,       4_036.0),
    term( 2,  0,  2,  0,       3_994.0),
    term( 4,  0,  0,  0,       3_861.0),
    term( 2,  0, -3,  0,       3_665.0),
    term( 0,  1, -2,  0,      -2_689.0),
    term( 2,  0, -1,  2,      -2_602.0),
    term( 2, -1, -2,  0,       2_390.0),
    term( 1,  0,  1,  0,      -2_348.0),
    term( 2, -2,  0,  0,       2_236.0),
    term( 0,  1,  2,  0,      -2_120.0),
    term( 0,  2,  0,  0,      -2_069.0),
    term( 2, -2, -1,  0,       2_048.0),
    term( 2,  0,  1, -2,      -1_773.0),
    term( 2,  0,  0,  2,      -1_595.0),
    term( 4, -1, -1,  0,       1_215.0),
    term( 0,  0,  2,  2,      -1_110.0),
    term( 3,  0, -1,  0,        -892.0),
    term( 2,  1,  1,  0,        -810.0),
    term( 4, -1, -2,  0,         759.0),
    term( 0,  2, -1,  0,        -713.0),
    term( 2,  2, -1,  0,        -700.0),
    term( 2,  1, -2,  0,         691.0),
    term( 2, -1,  0, -2,         596.0),
    term( 4,  0,  1,  0,         549.0),
    term( 0,  0,  4,  0,         537.0),
    term( 4, -1,  0,  0,         520.0),
    term( 1,  0, -2,  0,        -487.0),
    term( 2,  1,  0, -2,        -399.0),
    term( 0,  0,  2, -2,        -381.0),
    term( 1,  1,  1,  0,         351.0),
    term( 3,  0, -2,  0,        -340.0),
    term( 4,  0, -3,  0,         330.0),
    term( 2, -1,  2,  0,         327.0),
    term( 0,  2,  1,  0,        -323.0),
    term( 1,  1, -1,  0,         299.0),
    term( 2,  0,  3,  0,         294.0),
];

/// Σr: cosine terms in Earth–Moon distance.
#[rustfmt::skip]
pub static DISTANCE_TERMS: [PeriodicTerm; 46] = [
    term( 0,  0,  1,  0, -20_905_355.0),
    term( 2,  0, -1,  0,  -3_699_111.0),
    term( 2,  0,  0,  0,  -2_955_968.0),
    term( 0,  0,  2,  0,    -569_925.0),
    term( 0,  1,  0,  0,      48_888.0),
    term( 0,  0,  0,  2,      -3_149.0),
    term( 2,  0, -2,  0,     246_158.0),
    term( 2, -1, -1,  0,    -152_138.0),
    term( 2,  0,  1,  0,    -170_733.0),
    term( 2, -1,  0,  0,    -204_586.0),
    term( 0,  1, -1,  0,    -129_620.0),
    term( 1,  0,  0,  0,     108_743.0),
    term( 0,  1,  1,  0,     104_755.0),
    term( 2,  0,  0, -2,      10_321.0),
    term( 0,  0,  1, -2,      79_661.0),
    term( 4,  0, -1,  0,     -34_782.0),
    term( 0,  0,  3,  0,     -23_210.0),
    term( 4,  0, -2,  0,     -21_636.0),
    term( 2,  1, -1,  0,      24_208.0),
    term( 2,  1,  0,  0,      30_824.0),
    term( 1,  0, -1,  0,      -8_379.0),
    term( 1,  1,  0,  0,     -16_675.0),
    term( 2, -1,  1,  0,     -12_831.0),
    term( 2,  0,  2,  0,     -10_445.0),
    term( 4,  0,  0,  0,     -11_650.0),
    term( 2,  0, -3,  0,      14_403.0),
    term( 0,  1, -2,  0,      -7_003.0),
    term( 2, -1, -2,  0,      10_056.0),
    term( 1,  0,  1,  0,       6_322.0),
    term( 2, -2,  0,  0,      -9_884.0),
    term( 0,  1,  2,  0,       5_751.0),
    term( 2, -2, -1,  0,      -4_950.0),
    term( 2,  0,  1, -2,       4_130.0),
    term( 4, -1, -1,  0,      -3_958.0),
    term( 3,  0, -1,  0,       3_258.0),
    term( 2,  1,  1,  0,       2_616.0),
    term( 4, -1, -2,  0,      -1_897.0),
    term( 0,  2, -1,  0,      -2_117.0),
    term( 2,  2, -1,  0,       2_354.0),
    term( 4,  0,  1,  0,      -1_423.0),
    term( 0,  0,  4,  0,      -1_117.0),
    term( 4, -1,  0,  0,      -1_571.0),
    term( 1,  0, -2,  0,      -1_739.0),
    term( 0,  0,  2, -2,      -4_421.0),
    term( 0,  2,  1,  0,       1_165.0),
    term( 2,  0, -1, -2,       8_752.0),
];

/// Σb: sine terms in ecliptic latitude.
#[rustfmt::skip]
pub static LATITUDE_TERMS: [PeriodicTerm; 60] = [
    term( 0,  0,  0,  1,   5_128_122.0),
    term( 0,  0,  1,  1,     280_602.0),
    term( 0,  0,  1, -1,     277_693.0),
    term( 2,  0,  0, -1,     173_237.0),
    term( 2,  0, -1,  1,      55_413.0),
    term( 2,  0, -1, -1,      46_271.0),
    term( 2,  0,  0,  1,      32_573.0),
    term( 0,  0,  2,  1,      17_198.0),
    term( 2,  0,  1, -1,       9_266.0),
    term( 0,  0,  2, -1,       8_822.0),
    term( 2, -1,  0, -1,       8_216.0),
    term( 2,  0, -2, -1,       4_324.0),
    term( 2,  0,  1,  1,       4_200.0),
    term( 2,  1,  0, -1,      -3_359.0),
    term( 2, -1, -1,  1,       2_463.0),
    term( 2, -1,  0,  1,       2_211.0),
    term( 2, -1, -1, -1,       2_065.0),
    term( 0,  1, -1, -1,      -1_870.0),
    term( 4,  0, -1, -1,       1_828.0),
    term( 0,  1,  0,  1,      -1_794.0),
    term( 0,  0,  0,  3,      -1_749.0),
    term( 0,  1, -1,  1,      -1_565.0),
    term( 1,  0,  0,  1,      -1_491.0),
    term( 0,  1,  1,  1,      -1_475.0),
    term( 0,  1,  1, -1,      -1_410.0),
    term( 0,  1,  0, -1,      -1_344.0),
    term( 1,  0,  0, -1,      -1_335.0),
    term( 0,  0,  3,  1,       1_107.0),
    term( 4,  0,  0, -1,       1_021.0),
    term( 4,  0, -1,  1,         833.0),
    term( 0,  0,  1, -3,         777.0),
    term( 4,  0, -2,  1,         671.0),
    term( 2,  0,  0, -3,         607.0),
    term( 2,  0,  2, -1,         596.0),
    term( 2, -1,  1, -1,         491.0),
    term( 2,  0, -2,  1,        -451.0),
    term( 0,  0,  3, -1,         439.0),
    term( 2,  0,  2,  1,         422.0),
    term( 2,  0, -3, -1,         421.0),
    term( 2,  1, -1,  1,        -366.0),
    term( 2,  1,  0,  1,        -351.0),
    term( 4,  0,  0,  1,         331.0),
    term( 2, -1,  1,  1,         315.0),
    term( 2, -2,  0, -1,         302.0),
    term( 0,  0,  1,  3,        -283.0),
    term( 2,  1,  1, -1,        -229.0),
    term( 1,  1,  0, -1,         223.0),
    term( 1,  1,  0,  1,         223.0),
    term( 0,  1, -2, -1,        -220.0),
    term( 2,  1, -1, -1,        -220.0),
    term( 1,  0,  1,  1,        -185.0),
    term( 2, -1, -2, -1,         181.0),
    term( 0,  1,  2,  1,        -177.0),
    term( 4,  0, -2, -1,         176.0),
    term( 4, -1, -1, -1,         166.0),
    term( 1,  0,  1, -1,        -164.0),
    term( 4,  0,  1, -1,         132.0),
    term( 1,  0, -1, -1,        -119.0),
    term( 4, -1,  0, -1,         115.0),
    term( 2, -2,  0,  1,         107.0),
];
