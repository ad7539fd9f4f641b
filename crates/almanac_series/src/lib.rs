//! Periodic-term evaluation for lunar theory.
//!
//! The Moon's ecliptic position and the times and distances of its
//! perigee and apogee are sums of sine or cosine terms whose arguments are
//! integer combinations of four fundamental angles:
//!
//! - D: mean elongation of the Moon from the Sun
//! - M: Sun's mean anomaly
//! - M′ (here `n`): Moon's mean anomaly
//! - F: Moon's argument of latitude
//!
//! This crate holds the term tables and evaluates them. It has no
//! dependencies and performs no I/O.

pub mod apsis;
pub mod apsis_tables;
pub mod arguments;
pub mod lunar;
pub mod lunar_tables;
pub mod term;

pub use apsis::{ApsisKind, ApsisTerms, apsis, apsis_k, distance_from_parallax_km};
pub use arguments::{FundamentalArguments, normalize_degrees};
pub use lunar::{MoonEcliptic, moon_ecliptic};
pub use term::{PeriodicTerm, Trig, sum_terms};
