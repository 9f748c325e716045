// src/mode/flight_mode.rs

//! A module specifying the shared interface for flight modes.
//! It includes the numeric trait used for targets and the trait
//! describing the flight mode lifecycle.

use crate::vehicle::Copter;
use num_traits::Float;

/// Custom trait to encapsulate base number requirements.
pub trait Number: Float {
    /// Scale from radians to centidegrees, 18000/π.
    const CENTIDEGREES_PER_RADIAN: Self;

    /// Converts an `f32` constant into this number type.
    fn from_f32(value: f32) -> Self;

    /// Converts an angle or angular rate from radians into centidegrees.
    fn to_centidegrees(self) -> Self {
        self * Self::CENTIDEGREES_PER_RADIAN
    }
}

impl Number for f32 {
    const CENTIDEGREES_PER_RADIAN: Self = 18000.0 / core::f32::consts::PI;

    fn from_f32(value: f32) -> Self {
        value
    }
}

impl Number for f64 {
    const CENTIDEGREES_PER_RADIAN: Self = 18000.0 / core::f64::consts::PI;

    fn from_f32(value: f32) -> Self {
        value as f64
    }
}

/// A trait for flight modes driven by the main control loop.
///
/// `init` is called once on mode entry. `run` is called every control tick
/// while the mode is active. A mode is dropped on exit, taking its state
/// with it.
pub trait FlightMode<T: Number> {
    /// Prepares the mode for entry.
    ///
    /// Returns `false` if the mode cannot be entered. `ignore_checks` asks
    /// the mode to skip its entry preconditions.
    fn init<V: Copter<T>>(&self, vehicle: &mut V, ignore_checks: bool) -> bool;

    /// Runs one control tick.
    fn run<V: Copter<T>>(&self, vehicle: &mut V);

    /// Short mode name for status reporting.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One radian is 5729.578 centidegrees.
    #[test]
    fn test_number_one_radian_to_centidegrees() {
        assert!(
            (5729.578 - 1.0f32.to_centidegrees()).abs() < 1e-2,
            "One radian should be about 5729.58 centidegrees."
        );
        assert!(
            (5729.577951308232 - 1.0f64.to_centidegrees()).abs() < 1e-9,
            "f64 conversion should keep full precision."
        );
    }

    /// Half a turn is 18000 centidegrees, and the sign is kept.
    #[test]
    fn test_number_half_turn_to_centidegrees() {
        assert!(
            (18000.0 - core::f32::consts::PI.to_centidegrees()).abs() < 1e-2,
            "Pi radians should be 18000 centidegrees."
        );
        assert!(
            (-9000.0 - (-core::f32::consts::FRAC_PI_2).to_centidegrees()).abs() < 1e-2,
            "Negative angles should stay negative."
        );
        assert_eq!(0.0, 0.0f32.to_centidegrees());
    }

    /// Float operations are reachable through the `Number` bound alone.
    #[test]
    fn test_number_generic_float_operations() {
        fn check<T: Number>(radians: T) -> (bool, T) {
            let centidegrees = radians.to_centidegrees();
            (centidegrees.is_finite(), centidegrees.abs())
        }

        let (finite, magnitude) = check(-2.0f64);
        assert!(finite);
        assert!((11459.155902616465 - magnitude).abs() < 1e-9);

        let (finite, _) = check(f32::INFINITY);
        assert!(!finite, "Infinite input stays infinite.");
    }
}
