//! Types for lunar illumination and phase naming.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named phase of the Moon over a calendar day.
///
/// The four principal phases are assigned to the day on which they occur;
/// the remaining days fall into the intermediate bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Traditional North American name of a month's full moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FullMoonName {
    Wolf,
    Snow,
    Worm,
    Pink,
    Flower,
    Strawberry,
    Buck,
    Sturgeon,
    Corn,
    Hunters,
    Beaver,
    Cold,
    /// Second full moon within one calendar month.
    Blue,
}

impl FullMoonName {
    /// Name for the first full moon of a month (1 = January).
    pub const fn for_month(month: u32) -> Option<Self> {
        match month {
            1 => Some(Self::Wolf),
            2 => Some(Self::Snow),
            3 => Some(Self::Worm),
            4 => Some(Self::Pink),
            5 => Some(Self::Flower),
            6 => Some(Self::Strawberry),
            7 => Some(Self::Buck),
            8 => Some(Self::Sturgeon),
            9 => Some(Self::Corn),
            10 => Some(Self::Hunters),
            11 => Some(Self::Beaver),
            12 => Some(Self::Cold),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wolf => "Wolf Moon",
            Self::Snow => "Snow Moon",
            Self::Worm => "Worm Moon",
            Self::Pink => "Pink Moon",
            Self::Flower => "Flower Moon",
            Self::Strawberry => "Strawberry Moon",
            Self::Buck => "Buck Moon",
            Self::Sturgeon => "Sturgeon Moon",
            Self::Corn => "Corn Moon",
            Self::Hunters => "Hunter's Moon",
            Self::Beaver => "Beaver Moon",
            Self::Cold => "Cold Moon",
            Self::Blue => "Blue Moon",
        }
    }
}

impl std::fmt::Display for FullMoonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Illuminated state of the Moon at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonIllumination {
    /// Illuminated fraction of the disc, [0, 1].
    pub fraction: f64,
    /// Position in the synodic cycle: 0 new, 0.25 first quarter,
    /// 0.5 full, 0.75 last quarter, [0, 1].
    pub phase: f64,
    /// Position angle of the bright limb's midpoint, radians. Negative
    /// while waxing, positive while waning.
    pub angle_rad: f64,
    /// Phase name for the calendar day containing the instant.
    pub phase_name: MoonPhase,
    /// Folk name, present only on a full-moon day.
    pub full_moon_name: Option<FullMoonName>,
}
