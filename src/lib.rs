// src/lib.rs

//! # Guided Stabilize Flight Mode
//!
//! This crate provides a `no_std`, no-alloc guided stabilize flight mode for
//! multirotors. The pilot flies the vehicle as in stabilize, while an external
//! guidance source can take over the roll/pitch and yaw-rate targets. A
//! safety gate holds the motors at zero throttle whenever the vehicle is
//! disarmed or the throttle is at zero.
//!
//! The attitude controller, pilot input scaling and arming logic are supplied
//! by the surrounding firmware through the traits in [`vehicle`].

#![no_std]
#![deny(missing_docs)]

pub mod command;
pub mod config;
pub mod mode;
pub mod targets;
pub mod vehicle;

#[doc(inline)]
pub use mode::*;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test_utils;
