// src/test_utils.rs

//! This module contains utilities for testing.

use crate::vehicle::{AltitudeReport, AttitudeControl, PilotInput, PilotSticks, SafetyState};

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f32 = 1e-5;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
pub fn value_close(target: f32, value: f32) -> bool {
    (target - value).abs() < TEST_TOLERANCE
}

/// Installs a test logger once. Later calls are ignored.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lean angle in centidegrees per unit of roll/pitch stick.
pub const MOCK_LEAN_PER_STICK: f32 = 4.5;
/// Yaw rate in centidegrees per second per unit of yaw stick.
pub const MOCK_YAW_RATE_PER_STICK: f32 = 2.0;
/// Throttle per unit of throttle stick.
pub const MOCK_THROTTLE_PER_STICK: f32 = 0.5;

/// Vehicle double with linear pilot mappings that records every output.
#[derive(Debug, Default)]
pub struct MockCopter {
    // Inputs
    pub armed: bool,
    pub throttle_zero: bool,
    pub landed: bool,
    pub sticks: PilotSticks<f32>,

    // Recorded outputs
    pub angle_target: Option<(f32, f32, f32, f32)>,
    pub angle_target_calls: usize,
    pub throttle: Option<(f32, bool, f32)>,
    pub unstabilized_throttle: Option<(f32, f32)>,
    pub slow_start: Option<bool>,
    pub altitude_target: Option<f32>,
    pub simple_mode_calls: usize,
}

impl MockCopter {
    /// Armed, throttle up, in the air, with the given sticks.
    pub fn flying(sticks: PilotSticks<f32>) -> Self {
        MockCopter {
            armed: true,
            sticks,
            ..Default::default()
        }
    }

    /// Forgets everything recorded so far.
    pub fn clear_outputs(&mut self) {
        self.angle_target = None;
        self.angle_target_calls = 0;
        self.throttle = None;
        self.unstabilized_throttle = None;
        self.slow_start = None;
        self.altitude_target = None;
        self.simple_mode_calls = 0;
    }
}

impl AttitudeControl<f32> for MockCopter {
    fn apply_angle_target(&mut self, roll: f32, pitch: f32, yaw_rate: f32, smoothing_gain: f32) {
        self.angle_target = Some((roll, pitch, yaw_rate, smoothing_gain));
        self.angle_target_calls += 1;
    }

    fn set_throttle(&mut self, value: f32, angle_boost: bool, filter: f32) {
        self.throttle = Some((value, angle_boost, filter));
    }

    fn set_unstabilized_throttle(&mut self, value: f32, filter: f32) {
        self.unstabilized_throttle = Some((value, filter));
    }
}

impl AltitudeReport<f32> for MockCopter {
    fn set_altitude_target(&mut self, value: f32) {
        self.altitude_target = Some(value);
    }
}

impl PilotInput<f32> for MockCopter {
    fn sticks(&self) -> PilotSticks<f32> {
        self.sticks
    }

    fn pilot_lean_angles(&self, roll_stick: f32, pitch_stick: f32) -> (f32, f32) {
        (
            roll_stick * MOCK_LEAN_PER_STICK,
            pitch_stick * MOCK_LEAN_PER_STICK,
        )
    }

    fn pilot_yaw_rate(&self, yaw_stick: f32) -> f32 {
        yaw_stick * MOCK_YAW_RATE_PER_STICK
    }

    fn pilot_throttle(&self, throttle_stick: f32) -> f32 {
        throttle_stick * MOCK_THROTTLE_PER_STICK
    }

    fn simple_mode_transform(&mut self) {
        self.simple_mode_calls += 1;
    }
}

impl SafetyState for MockCopter {
    fn is_armed(&self) -> bool {
        self.armed
    }

    fn is_throttle_zero(&self) -> bool {
        self.throttle_zero
    }

    fn is_landed_complete(&self) -> bool {
        self.landed
    }

    fn trigger_slow_start(&mut self, enable: bool) {
        self.slow_start = Some(enable);
    }
}
