//! Coordinate frames for an Earth-bound observer.
//!
//! Provides the fixed J2000 obliquity, ecliptic → equatorial rotation,
//! equatorial → horizontal conversion, topocentric parallax on a reference
//! ellipsoid, and atmospheric refraction.

pub mod equatorial;
pub mod horizontal;
pub mod obliquity;
pub mod parallax;
pub mod refraction;

pub use equatorial::{Equatorial, angular_separation, ecliptic_to_equatorial};
pub use horizontal::{HorizontalCoords, equatorial_to_horizontal, parallactic_angle};
pub use obliquity::{COS_OBL, OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, SIN_OBL};
pub use parallax::{Ellipsoid, ObserverFigure, Topocentric, topocentric};
pub use refraction::Refraction;
