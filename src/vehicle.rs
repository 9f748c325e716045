// src/vehicle.rs

//! # Vehicle Collaborator Interfaces
//!
//! Flight modes do not own the attitude controller, the RC input scaling, or
//! the arming logic. They reach those subsystems through the traits in this
//! module, which the surrounding firmware implements on its vehicle object.
//!
//! Units follow the flight-mode convention: angles in centidegrees and
//! angular rates in centidegrees per second. Throttle and stick values are
//! passed through in whatever scale the implementor uses.

use crate::Number;

/// Raw pilot stick positions, read after the simple mode transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PilotSticks<T> {
    /// Roll stick.
    pub roll: T,
    /// Pitch stick.
    pub pitch: T,
    /// Yaw stick.
    pub yaw: T,
    /// Throttle stick.
    pub throttle: T,
}

/// Attitude and throttle actuation, implemented by the attitude control cascade.
pub trait AttitudeControl<T: Number> {
    /// Tracks an earth-frame roll/pitch angle and an earth-frame yaw rate,
    /// smoothing the commanded angle change with `smoothing_gain`.
    fn apply_angle_target(&mut self, roll: T, pitch: T, yaw_rate: T, smoothing_gain: T);

    /// Outputs a stabilized throttle, optionally boosted to compensate for
    /// lean angle, low-pass filtered at `filter` Hz.
    fn set_throttle(&mut self, value: T, angle_boost: bool, filter: T);

    /// Outputs a throttle that bypasses attitude stabilization.
    fn set_unstabilized_throttle(&mut self, value: T, filter: T);
}

/// Altitude target reporting, used for telemetry only.
pub trait AltitudeReport<T: Number> {
    /// Reports the altitude target of the active mode.
    fn set_altitude_target(&mut self, value: T);
}

/// Pilot stick input conversion.
pub trait PilotInput<T: Number> {
    /// Current stick positions.
    fn sticks(&self) -> PilotSticks<T>;

    /// Converts roll and pitch stick positions into desired lean angles.
    fn pilot_lean_angles(&self, roll_stick: T, pitch_stick: T) -> (T, T);

    /// Converts the yaw stick position into a desired yaw rate.
    fn pilot_yaw_rate(&self, yaw_stick: T) -> T;

    /// Converts the throttle stick position into a desired throttle.
    fn pilot_throttle(&self, throttle_stick: T) -> T;

    /// Re-orients the roll and pitch sticks for simple mode.
    fn simple_mode_transform(&mut self);
}

/// Arming and landing state, plus the motor slow-start trigger.
pub trait SafetyState {
    /// Motors are armed.
    fn is_armed(&self) -> bool;

    /// Pilot throttle is at zero.
    fn is_throttle_zero(&self) -> bool;

    /// Land detector reports the vehicle on the ground.
    fn is_landed_complete(&self) -> bool;

    /// Requests a gradual spin-up the next time the motors are driven.
    fn trigger_slow_start(&mut self, enable: bool);
}

/// Everything a multirotor flight mode needs from the vehicle.
///
/// Implemented automatically for any type providing all collaborator traits.
pub trait Copter<T: Number>:
    AttitudeControl<T> + AltitudeReport<T> + PilotInput<T> + SafetyState
{
}

impl<T, V> Copter<T> for V
where
    T: Number,
    V: AttitudeControl<T> + AltitudeReport<T> + PilotInput<T> + SafetyState,
{
}
