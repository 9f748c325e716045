// src/mode/guided_stabilize.rs

//! # Guided Stabilize Flight Mode
//!
//! Flies like stabilize: the pilot commands lean angles, yaw rate and
//! throttle through the sticks. An external guidance source may take over
//! the roll/pitch targets, the yaw-rate target, or both, independently. The
//! throttle always stays with the pilot.
//!
//! ## Overview
//!
//! Every tick the mode first checks the safety state. While the motors are
//! disarmed or the throttle is at zero, it only holds an unstabilized zero
//! throttle, and asks for a slow start if the vehicle is on the ground. The
//! attitude controller is not called on such ticks.
//!
//! Otherwise the roll/pitch and yaw-rate targets are each taken from the
//! pilot or from the stored guidance target, depending on that target's
//! switch, and passed on to the attitude controller together with the pilot
//! throttle.
//!
//! ## Usage
//!
//! The control loop owns the mode while it is active and calls
//! [`GuidedStabilize::run`] at 100 Hz or faster. All methods take `&self`,
//! so the same instance can be shared with the task that handles guidance
//! commands, which calls the `set_*`/`unset_*` methods at any time.
//!
//! Guidance values are stored and forwarded unchecked. Limits on lean angle
//! and yaw rate belong to the attitude controller.

use crate::command::{AttitudeTargetRequest, GuidedCommand};
use crate::config::{ConfigError, GuidedStabilizeConfig};
use crate::targets::{ExternalTargets, TargetSource, TargetSources};
use crate::vehicle::Copter;
use crate::{FlightMode, Number};
use log::{debug, info, trace};

/// Struct representing the guided stabilize flight mode.
pub struct GuidedStabilize<T: Number> {
    config: GuidedStabilizeConfig<T>,
    targets: ExternalTargets<T>,
}

impl<T: Number> GuidedStabilize<T> {
    /// Creates the mode using the provided configuration.
    ///
    /// Both targets start out pilot controlled.
    pub fn with_config(config: GuidedStabilizeConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GuidedStabilize {
            config,
            targets: ExternalTargets::new(),
        })
    }

    /// Creates the mode with default settings.
    pub fn new() -> Self {
        GuidedStabilize {
            config: GuidedStabilizeConfig::new(),
            targets: ExternalTargets::new(),
        }
    }

    /// Resets both targets to the pilot and reports a zero altitude target.
    ///
    /// This mode has no entry preconditions, so it always returns `true`.
    pub fn init<V: Copter<T>>(&self, vehicle: &mut V, _ignore_checks: bool) -> bool {
        // This mode does not control altitude.
        vehicle.set_altitude_target(T::zero());

        self.targets.reset();
        info!("guided stabilize: initialised, pilot has attitude and yaw rate");
        true
    }

    /// Runs one control tick.
    ///
    /// Should be called at 100 Hz or more.
    pub fn run<V: Copter<T>>(&self, vehicle: &mut V) {
        let filter = self.config.throttle_filter;

        // If not armed or throttle at zero, hold zero throttle and skip the
        // attitude controller entirely.
        if !vehicle.is_armed() || vehicle.is_throttle_zero() {
            vehicle.set_unstabilized_throttle(T::zero(), filter);
            if vehicle.is_landed_complete() {
                vehicle.trigger_slow_start(true);
            }
            trace!("guided stabilize: safety gate holding zero throttle");
            return;
        }

        vehicle.simple_mode_transform();
        let sticks = vehicle.sticks();

        let attitude = self.targets.attitude();
        let (target_roll, target_pitch) = match attitude.source {
            TargetSource::Pilot => vehicle.pilot_lean_angles(sticks.roll, sticks.pitch),
            TargetSource::External => (attitude.roll, attitude.pitch),
        };

        let yaw_rate = self.targets.yaw_rate();
        let target_yaw_rate = match yaw_rate.source {
            TargetSource::Pilot => vehicle.pilot_yaw_rate(sticks.yaw),
            TargetSource::External => yaw_rate.rate,
        };

        let pilot_throttle = vehicle.pilot_throttle(sticks.throttle);

        vehicle.apply_angle_target(
            target_roll,
            target_pitch,
            target_yaw_rate,
            self.config.smoothing_gain(),
        );

        // Body-frame rate control runs in the fast loop, not here.

        vehicle.set_throttle(pilot_throttle, true, filter);
    }

    /// Takes roll and pitch from guidance, starting with the next tick.
    ///
    /// Angles are in radians and stored in centidegrees.
    pub fn set_target_attitude(&self, roll: T, pitch: T) {
        let roll = roll.to_centidegrees();
        let pitch = pitch.to_centidegrees();
        self.targets.publish_attitude(roll, pitch);
        debug!("guided stabilize: external attitude target set");
    }

    /// Gives roll and pitch back to the pilot.
    ///
    /// The stored target is kept but is not used again until the next
    /// [`set_target_attitude`](Self::set_target_attitude).
    pub fn unset_target_attitude(&self) {
        self.targets.release_attitude();
        debug!("guided stabilize: external attitude target released");
    }

    /// Takes the yaw rate from guidance, starting with the next tick.
    ///
    /// The rate is in radians per second and stored in centidegrees per second.
    pub fn set_target_yaw_rate(&self, yaw_rate: T) {
        self.targets.publish_yaw_rate(yaw_rate.to_centidegrees());
        debug!("guided stabilize: external yaw rate target set");
    }

    /// Gives the yaw rate back to the pilot, keeping the stored target.
    pub fn unset_target_yaw_rate(&self) {
        self.targets.release_yaw_rate();
        debug!("guided stabilize: external yaw rate target released");
    }

    /// Applies a single guidance command.
    pub fn handle_command(&self, command: GuidedCommand<T>) {
        match command {
            GuidedCommand::SetAttitude { roll, pitch } => self.set_target_attitude(roll, pitch),
            GuidedCommand::UnsetAttitude => self.unset_target_attitude(),
            GuidedCommand::SetYawRate(yaw_rate) => self.set_target_yaw_rate(yaw_rate),
            GuidedCommand::UnsetYawRate => self.unset_target_yaw_rate(),
        }
    }

    /// Applies both halves of an attitude target request.
    pub fn handle_attitude_target(&self, request: &AttitudeTargetRequest<T>) {
        for command in request.commands() {
            self.handle_command(command);
        }
    }

    /// Current switch positions.
    pub fn target_sources(&self) -> TargetSources {
        self.targets.sources()
    }

    /// Stored guidance roll and pitch in centidegrees, whether selected or not.
    pub fn external_attitude(&self) -> (T, T) {
        let attitude = self.targets.attitude();
        (attitude.roll, attitude.pitch)
    }

    /// Stored guidance yaw rate in centidegrees per second, whether selected or not.
    pub fn external_yaw_rate(&self) -> T {
        self.targets.yaw_rate().rate
    }

    /// The configuration in use.
    pub fn config(&self) -> &GuidedStabilizeConfig<T> {
        &self.config
    }
}

impl<T: Number> Default for GuidedStabilize<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> FlightMode<T> for GuidedStabilize<T> {
    fn init<V: Copter<T>>(&self, vehicle: &mut V, ignore_checks: bool) -> bool {
        GuidedStabilize::init(self, vehicle, ignore_checks)
    }

    fn run<V: Copter<T>>(&self, vehicle: &mut V) {
        GuidedStabilize::run(self, vehicle)
    }

    fn name(&self) -> &'static str {
        "GUIDED_STABILIZE"
    }
}
