// src/translator/rc.rs

//! # RC Channel Command Translator
//!
//! This module provides the PID command translator for an RC-style
//! actuator link. The translator consumes a normalized guidance command
//! and the current normalized vehicle state once per control tick and
//! produces one integer command per channel in the order throttle, roll,
//! pitch, yaw.
//!
//! ## Overview
//!
//! Each axis is tracked by its own PID controller. Every tick the desired
//! action becomes the axis set point, the current state is the axis
//! measurement, and the resulting correction is mapped into the actuator
//! command range and clamped. Yaw is a normalized angle that wraps at the
//! [0, 1] boundary, so its set point is resolved to the representation of
//! the desired heading nearer the current heading before the linear
//! controller runs.
//!
//! ## Usage
//!
//! The translator owns its four axis controllers exclusively and expects
//! single-threaded, sequential invocation from a fixed-rate control loop.
//! Call [`CommandTranslator::reset`] before handing control authority back
//! to the translator after an interval of manual override, so stale
//! integral and derivative history cannot produce a command burst.

use crate::pid::{compute_axis, AxisControlData};
use crate::{
    ActionVector, CommandTranslator, CommandTranslatorConfig, CommandVector, Number, StateVector,
};
use piddiy::PidController;

/// Struct representing the RC channel command translator.
pub struct RcTranslator<T: Number> {
    throttle_pid: PidController<T, AxisControlData<T>>,
    roll_pid: PidController<T, AxisControlData<T>>,
    pitch_pid: PidController<T, AxisControlData<T>>,
    yaw_pid: PidController<T, AxisControlData<T>>,
    ff_throttle: T,
    command_center: T,
    scale: T,
    command_min: T,
    command_max: T,
}

impl<T: Number> RcTranslator<T> {
    /// Creates a new translator using the provided configuration
    pub fn with_config(config: CommandTranslatorConfig<T>) -> Self {
        let mut throttle_pid = PidController::new();
        throttle_pid
            .compute_fn(compute_axis)
            .kp(config.kp_throttle)
            .ki(config.ki_throttle)
            .kd(config.kd_throttle);

        let mut roll_pid = PidController::new();
        roll_pid
            .compute_fn(compute_axis)
            .kp(config.kp_roll)
            .ki(config.ki_roll)
            .kd(config.kd_roll);

        let mut pitch_pid = PidController::new();
        pitch_pid
            .compute_fn(compute_axis)
            .kp(config.kp_pitch)
            .ki(config.ki_pitch)
            .kd(config.kd_pitch);

        let mut yaw_pid = PidController::new();
        yaw_pid
            .compute_fn(compute_axis)
            .kp(config.kp_yaw)
            .ki(config.ki_yaw)
            .kd(config.kd_yaw);

        RcTranslator {
            throttle_pid,
            roll_pid,
            pitch_pid,
            yaw_pid,
            ff_throttle: config.ff_throttle,
            command_center: config.command_center,
            scale: config.scale,
            command_min: config.command_min,
            command_max: config.command_max,
        }
    }

    /// Creates a new translator with default settings
    pub fn new() -> Self {
        Self::with_config(CommandTranslatorConfig::new())
    }

    /// Clamps a mapped command to the actuator range and truncates it to
    /// an integer channel value.
    fn quantize(&self, command: T) -> u16 {
        command
            .clamp(self.command_min, self.command_max)
            .to_u16()
            .unwrap_or(0)
    }
}

impl<T: Number> CommandTranslator<T> for RcTranslator<T> {
    fn reset(&mut self) {
        self.throttle_pid.integral = T::zero();
        self.throttle_pid.error = T::zero();
        self.roll_pid.integral = T::zero();
        self.roll_pid.error = T::zero();
        self.pitch_pid.integral = T::zero();
        self.pitch_pid.error = T::zero();
        self.yaw_pid.integral = T::zero();
        self.yaw_pid.error = T::zero();
    }

    fn compute_command(
        &mut self,
        action: ActionVector<T>,
        state: StateVector<T>,
        dt: T,
    ) -> CommandVector {
        let [current_altitude, current_roll, current_pitch, current_yaw, _] = state;
        let [desired_altitude, desired_roll, desired_pitch, desired_yaw] = action;

        // Set the set points for throttle, roll, and pitch
        self.throttle_pid.set_point(desired_altitude);
        self.roll_pid.set_point(desired_roll);
        self.pitch_pid.set_point(desired_pitch);

        // Yaw wraps at the [0, 1] boundary. Feed the linear controller the
        // representation of the desired heading on the nearer side of the
        // wrap, so it never commands a near-full rotation when a shorter
        // one exists.
        let clockwise = (desired_yaw - current_yaw).abs();
        let counter_clockwise = (desired_yaw - T::one() - current_yaw).abs();
        if clockwise < counter_clockwise {
            self.yaw_pid.set_point(desired_yaw);
        } else {
            self.yaw_pid.set_point(desired_yaw - T::one());
        }

        // Prepare control data for each axis
        let throttle_data = AxisControlData {
            measurement: current_altitude,
            dt,
        };
        let roll_data = AxisControlData {
            measurement: current_roll,
            dt,
        };
        let pitch_data = AxisControlData {
            measurement: current_pitch,
            dt,
        };
        let yaw_data = AxisControlData {
            measurement: current_yaw,
            dt,
        };

        // Compute the correction for each axis
        let throttle_correction = self.throttle_pid.compute(throttle_data);
        let roll_correction = self.roll_pid.compute(roll_data);
        let pitch_correction = self.pitch_pid.compute(pitch_data);
        let yaw_correction = self.yaw_pid.compute(yaw_data);

        // Map the corrections into the actuator command range
        let throttle = self.ff_throttle + self.scale * throttle_correction;
        let roll = self.command_center + self.scale * roll_correction;
        let pitch = self.command_center + self.scale * pitch_correction;
        let yaw = self.command_center + self.scale * yaw_correction;

        [
            self.quantize(throttle),
            self.quantize(roll),
            self.quantize(pitch),
            self.quantize(yaw),
        ]
    }
}
