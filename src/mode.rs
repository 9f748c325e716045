// src/mode.rs

//! # Flight Modes
//!
//! This module provides the flight mode interface and the guided stabilize
//! mode, which flies like stabilize but lets an external guidance source
//! override the attitude and yaw-rate targets.

pub mod flight_mode;
pub use flight_mode::*;
pub mod guided_stabilize;
pub use guided_stabilize::*;
