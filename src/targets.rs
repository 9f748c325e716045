// src/targets.rs

//! # External Target Store
//!
//! Holds the attitude and yaw-rate targets supplied by an external guidance
//! source, together with the switch that selects them over the pilot.
//!
//! Each target is stored with its switch as a single pair inside a
//! critical-section mutex. Writers publish the value and flip the switch in
//! the same critical section, and the control tick copies a pair out in one
//! critical section, so the tick never sees `External` next to a value that
//! is stale or half written. A critical section here only covers a copy of a
//! few words, so the control tick never waits on a writer.

use core::cell::Cell;

use critical_section::Mutex;

use crate::Number;

/// Where a target is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetSource {
    /// Derived from the pilot sticks every tick.
    #[default]
    Pilot,
    /// Taken from the last externally published value.
    External,
}

/// Snapshot of both target switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetSources {
    /// Source of the roll and pitch targets.
    pub attitude: TargetSource,
    /// Source of the yaw-rate target.
    pub yaw_rate: TargetSource,
}

/// Externally supplied roll and pitch, in centidegrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeTarget<T> {
    /// Which source the control tick should use.
    pub source: TargetSource,
    /// Roll target.
    pub roll: T,
    /// Pitch target.
    pub pitch: T,
}

/// Externally supplied yaw rate, in centidegrees per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawRateTarget<T> {
    /// Which source the control tick should use.
    pub source: TargetSource,
    /// Yaw-rate target.
    pub rate: T,
}

/// Attitude and yaw-rate targets shared between the control tick and the
/// guidance command handler.
pub struct ExternalTargets<T> {
    attitude: Mutex<Cell<AttitudeTarget<T>>>,
    yaw_rate: Mutex<Cell<YawRateTarget<T>>>,
}

impl<T: Number> ExternalTargets<T> {
    /// Creates a store with both switches on `Pilot` and zero targets.
    pub fn new() -> Self {
        ExternalTargets {
            attitude: Mutex::new(Cell::new(AttitudeTarget {
                source: TargetSource::Pilot,
                roll: T::zero(),
                pitch: T::zero(),
            })),
            yaw_rate: Mutex::new(Cell::new(YawRateTarget {
                source: TargetSource::Pilot,
                rate: T::zero(),
            })),
        }
    }

    /// Returns both switches to `Pilot` and zeroes both targets.
    pub fn reset(&self) {
        critical_section::with(|cs| {
            self.attitude.borrow(cs).set(AttitudeTarget {
                source: TargetSource::Pilot,
                roll: T::zero(),
                pitch: T::zero(),
            });
            self.yaw_rate.borrow(cs).set(YawRateTarget {
                source: TargetSource::Pilot,
                rate: T::zero(),
            });
        });
    }

    /// Stores a roll/pitch target and selects it.
    pub fn publish_attitude(&self, roll: T, pitch: T) {
        critical_section::with(|cs| {
            self.attitude.borrow(cs).set(AttitudeTarget {
                source: TargetSource::External,
                roll,
                pitch,
            });
        });
    }

    /// Selects the pilot for roll/pitch, keeping the stored target.
    pub fn release_attitude(&self) {
        critical_section::with(|cs| {
            let cell = self.attitude.borrow(cs);
            cell.set(AttitudeTarget {
                source: TargetSource::Pilot,
                ..cell.get()
            });
        });
    }

    /// Stores a yaw-rate target and selects it.
    pub fn publish_yaw_rate(&self, rate: T) {
        critical_section::with(|cs| {
            self.yaw_rate.borrow(cs).set(YawRateTarget {
                source: TargetSource::External,
                rate,
            });
        });
    }

    /// Selects the pilot for yaw rate, keeping the stored target.
    pub fn release_yaw_rate(&self) {
        critical_section::with(|cs| {
            let cell = self.yaw_rate.borrow(cs);
            cell.set(YawRateTarget {
                source: TargetSource::Pilot,
                ..cell.get()
            });
        });
    }

    /// Consistent copy of the attitude pair.
    pub fn attitude(&self) -> AttitudeTarget<T> {
        critical_section::with(|cs| self.attitude.borrow(cs).get())
    }

    /// Consistent copy of the yaw-rate pair.
    pub fn yaw_rate(&self) -> YawRateTarget<T> {
        critical_section::with(|cs| self.yaw_rate.borrow(cs).get())
    }

    /// Current switch positions.
    pub fn sources(&self) -> TargetSources {
        TargetSources {
            attitude: self.attitude().source,
            yaw_rate: self.yaw_rate().source,
        }
    }
}

impl<T: Number> Default for ExternalTargets<T> {
    fn default() -> Self {
        Self::new()
    }
}
