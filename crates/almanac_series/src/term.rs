//! A single periodic term and series summation.

use crate::arguments::FundamentalArguments;

/// One term `(amplitude + drift·T) · E^|m| · trig(d·D + m·M + n·M′ + f·F)`.
///
/// `E` is the eccentricity factor carried by the arguments (1.0 when the
/// series does not use it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub d: i8,
    pub m: i8,
    pub n: i8,
    pub f: i8,
    pub amplitude: f64,
    pub drift: f64,
}

/// Term with a constant amplitude.
pub const fn term(d: i8, m: i8, n: i8, f: i8, amplitude: f64) -> PeriodicTerm {
    PeriodicTerm {
        d,
        m,
        n,
        f,
        amplitude,
        drift: 0.0,
    }
}

/// Term whose amplitude varies linearly with T.
pub const fn drift(d: i8, m: i8, n: i8, f: i8, amplitude: f64, drift: f64) -> PeriodicTerm {
    PeriodicTerm {
        d,
        m,
        n,
        f,
        amplitude,
        drift,
    }
}

/// Which trigonometric function a series uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
}

impl PeriodicTerm {
    /// Combined argument in radians.
    pub fn argument(&self, args: &FundamentalArguments) -> f64 {
        f64::from(self.d) * args.d
            + f64::from(self.m) * args.m
            + f64::from(self.n) * args.n
            + f64::from(self.f) * args.f
    }

    /// Amplitude at the arguments' epoch, including eccentricity scaling.
    pub fn amplitude_at(&self, args: &FundamentalArguments) -> f64 {
        let base = self.amplitude + self.drift * args.t;
        match self.m.unsigned_abs() {
            0 => base,
            1 => base * args.e,
            _ => base * args.e * args.e,
        }
    }

    /// Value of this term.
    pub fn evaluate(&self, args: &FundamentalArguments, trig: Trig) -> f64 {
        let x = self.argument(args);
        let t = match trig {
            Trig::Sin => x.sin(),
            Trig::Cos => x.cos(),
        };
        self.amplitude_at(args) * t
    }
}

/// Sum a table of terms.
pub fn sum_terms(terms: &[PeriodicTerm], args: &FundamentalArguments, trig: Trig) -> f64 {
    terms.iter().map(|t| t.evaluate(args, trig)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(e: f64) -> FundamentalArguments {
        FundamentalArguments::from_degrees(0.5, 30.0, 90.0, 0.0, 45.0, e)
    }

    #[test]
    fn argument_is_integer_combination() {
        let t = term(2, -1, 0, 1, 1.0);
        assert_relative_eq!(
            t.argument(&args(1.0)).to_degrees(),
            60.0 - 90.0 + 45.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn eccentricity_scaling_by_solar_multiplier() {
        let a = args(0.9);
        assert_relative_eq!(term(1, 0, 0, 0, 10.0).amplitude_at(&a), 10.0);
        assert_relative_eq!(term(1, -1, 0, 0, 10.0).amplitude_at(&a), 9.0);
        assert_relative_eq!(term(0, 2, 0, 0, 10.0).amplitude_at(&a), 8.1, epsilon = 1e-12);
    }

    #[test]
    fn drift_adds_linear_t() {
        let t = drift(0, 0, 0, 0, 1.0, 0.2);
        assert_relative_eq!(t.amplitude_at(&args(1.0)), 1.1);
    }

    #[test]
    fn sum_sin_and_cos() {
        let terms = [term(1, 0, 0, 0, 2.0), term(0, 0, 0, 1, 4.0)];
        let a = args(1.0);
        let s = sum_terms(&terms, &a, Trig::Sin);
        let c = sum_terms(&terms, &a, Trig::Cos);
        assert_relative_eq!(s, 2.0 * 0.5 + 4.0 * std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        let expected = 2.0 * 3f64.sqrt() / 2.0 + 4.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(c, expected, epsilon = 1e-12);
    }
}
