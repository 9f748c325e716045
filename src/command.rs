// src/command.rs

//! # Guidance Commands
//!
//! Commands a guidance source (a companion computer or ground station) sends
//! to override the pilot in guided stabilize. Angles arrive in radians and
//! rates in radians per second, exactly as received.
//!
//! `AttitudeTargetRequest` mirrors the MAVLink `SET_ATTITUDE_TARGET` type
//! mask: a set ignore bit hands that target back to the pilot, a clear bit
//! takes it from the request. Throttle is always flown by the pilot in this
//! mode, so the throttle bit has no effect.

use crate::Number;

/// A single guidance command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuidedCommand<T> {
    /// Take roll and pitch from guidance. Radians.
    SetAttitude {
        /// Roll target.
        roll: T,
        /// Pitch target.
        pitch: T,
    },
    /// Give roll and pitch back to the pilot.
    UnsetAttitude,
    /// Take the yaw rate from guidance. Radians per second.
    SetYawRate(T),
    /// Give the yaw rate back to the pilot.
    UnsetYawRate,
}

bitflags::bitflags! {
    /// Ignore bits of an attitude target type mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttitudeTargetIgnore: u8 {
        /// Ignore body roll rate.
        const BODY_ROLL_RATE = 1 << 0;
        /// Ignore body pitch rate.
        const BODY_PITCH_RATE = 1 << 1;
        /// Ignore body yaw rate.
        const BODY_YAW_RATE = 1 << 2;
        /// Ignore throttle.
        const THROTTLE = 1 << 6;
        /// Ignore attitude.
        const ATTITUDE = 1 << 7;
    }
}

/// An attitude target as received from guidance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeTargetRequest<T> {
    /// Which fields to leave to the pilot.
    pub ignore: AttitudeTargetIgnore,
    /// Roll in radians.
    pub roll: T,
    /// Pitch in radians.
    pub pitch: T,
    /// Yaw rate in radians per second.
    pub yaw_rate: T,
}

impl<T: Number> AttitudeTargetRequest<T> {
    /// Builds a request from a raw type mask. Unknown bits are dropped.
    pub fn from_type_mask(type_mask: u8, roll: T, pitch: T, yaw_rate: T) -> Self {
        Self {
            ignore: AttitudeTargetIgnore::from_bits_truncate(type_mask),
            roll,
            pitch,
            yaw_rate,
        }
    }

    /// The attitude command followed by the yaw-rate command.
    pub fn commands(&self) -> [GuidedCommand<T>; 2] {
        let attitude = if self.ignore.contains(AttitudeTargetIgnore::ATTITUDE) {
            GuidedCommand::UnsetAttitude
        } else {
            GuidedCommand::SetAttitude {
                roll: self.roll,
                pitch: self.pitch,
            }
        };
        let yaw_rate = if self.ignore.contains(AttitudeTargetIgnore::BODY_YAW_RATE) {
            GuidedCommand::UnsetYawRate
        } else {
            GuidedCommand::SetYawRate(self.yaw_rate)
        };
        [attitude, yaw_rate]
    }
}
