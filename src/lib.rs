// src/lib.rs

//! # RC Command Translation
//!
//! This crate provides a `no_std`, no-alloc PID command translator for
//! unmanned aerial vehicles. It converts a high-level, normalized guidance
//! command (desired altitude, roll, pitch, and yaw in [0, 1]) together with
//! the vehicle's current normalized state into low-level RC channel
//! commands in the actuator's integer range, one control tick at a time.
//! Sensor polling, wire framing, and command transport are the caller's
//! responsibility; the translator performs no I/O.

#![no_std]
#![deny(missing_docs)]

pub mod pid;
pub mod translator;

#[doc(inline)]
pub use translator::*;

#[cfg(test)]
mod test_utils;
