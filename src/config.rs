// src/config.rs

//! # Guided Stabilize Configuration
//!
//! Tuning parameters for the guided stabilize mode. The fields are public and
//! `new()` fills in defaults that should be tuned for the airframe.

use crate::Number;

/// Crispest allowed RC feel.
pub const RC_FEEL_RP_MAX: u8 = 100;

/// Errors raised while validating a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The roll/pitch RC feel is above 100.
    #[error("RC feel {0} is out of range 0..=100")]
    RcFeelOutOfRange(u8),
    /// The throttle filter cutoff is negative or not finite.
    #[error("Throttle filter cutoff must be finite and non-negative")]
    InvalidThrottleFilter,
}

/// Configuration for the guided stabilize mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidedStabilizeConfig<T: Number> {
    /// Roll/pitch stick feel, 0 (very soft) to 100 (very crisp).
    pub rc_feel_rp: u8,
    /// Throttle low-pass cutoff in Hz. Zero disables filtering.
    pub throttle_filter: T,
}

impl<T: Number> GuidedStabilizeConfig<T> {
    /// Creates a new configuration with a very crisp feel and no throttle filter.
    ///
    /// Example Usage
    /// ```
    /// use guided_stabilize::config::GuidedStabilizeConfig;
    ///
    /// let mut config = GuidedStabilizeConfig::<f32>::new();
    ///
    /// // Soften the response to angle changes.
    /// config.rc_feel_rp = 25;
    ///
    /// // Filter the throttle output at 2 Hz.
    /// config.throttle_filter = 2.0;
    ///
    /// assert!(config.validate().is_ok());
    /// assert_eq!(4.5, config.smoothing_gain());
    /// ```
    pub fn new() -> Self {
        Self {
            rc_feel_rp: RC_FEEL_RP_MAX,
            throttle_filter: T::zero(),
        }
    }

    /// Checks that every parameter is within its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rc_feel_rp > RC_FEEL_RP_MAX {
            return Err(ConfigError::RcFeelOutOfRange(self.rc_feel_rp));
        }
        if !self.throttle_filter.is_finite() || self.throttle_filter < T::zero() {
            return Err(ConfigError::InvalidThrottleFilter);
        }
        Ok(())
    }

    /// Smoothing gain handed to the attitude controller, 2 to 12.
    pub fn smoothing_gain(&self) -> T {
        T::from_f32(2.0 + self.rc_feel_rp as f32 / 10.0)
    }
}

impl<T: Number> Default for GuidedStabilizeConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// The defaults are valid.
    #[test]
    fn test_config_defaults() {
        let config = GuidedStabilizeConfig::<f32>::new();
        assert_eq!(100, config.rc_feel_rp);
        assert_eq!(0.0, config.throttle_filter);
        assert_eq!(Ok(()), config.validate());
    }

    /// The smoothing gain spans 2 to 12 across the RC feel range.
    #[test]
    fn test_config_smoothing_gain_range() {
        let mut config = GuidedStabilizeConfig::<f32>::new();

        config.rc_feel_rp = 0;
        assert!(value_close(2.0, config.smoothing_gain()), "Softest feel.");

        config.rc_feel_rp = 50;
        assert!(value_close(7.0, config.smoothing_gain()), "Medium feel.");

        config.rc_feel_rp = 100;
        assert!(value_close(12.0, config.smoothing_gain()), "Crispest feel.");
    }

    /// RC feel above 100 is rejected.
    #[test]
    fn test_config_rc_feel_out_of_range() {
        let mut config = GuidedStabilizeConfig::<f32>::new();
        config.rc_feel_rp = 101;
        assert_eq!(Err(ConfigError::RcFeelOutOfRange(101)), config.validate());
    }

    /// Negative, infinite and NaN throttle filters are rejected.
    #[test]
    fn test_config_invalid_throttle_filter() {
        let mut config = GuidedStabilizeConfig::<f64>::new();
        for filter in [-1.0, f64::INFINITY, f64::NAN] {
            config.throttle_filter = filter;
            assert_eq!(
                Err(ConfigError::InvalidThrottleFilter),
                config.validate(),
                "Filter {} should be rejected.",
                filter
            );
        }

        config.throttle_filter = 0.5;
        assert_eq!(Ok(()), config.validate());
    }
}
