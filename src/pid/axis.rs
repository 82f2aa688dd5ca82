// src/pid/axis.rs

//! # Axis PID Control Module
//!
//! This module provides the compute function and control data structure
//! for a single control axis. One controller instance tracks one
//! normalized quantity (altitude, roll, pitch, or yaw) against a set
//! point supplied by the command translator before each computation.

use crate::Number;
use piddiy::PidController;

/// Control data for a single-axis PID computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisControlData<T> {
    /// The current measured value of the controlled quantity.
    pub measurement: T,
    /// The time delta since the last computation.
    pub dt: T,
}

/// Single-axis PID compute callback.
///
/// Computes the classic error, integral, and derivative terms against the
/// controller's current set point. When `dt` is zero the derivative term
/// is zero; dividing by the time delta would otherwise be undefined on the
/// first tick after two back-to-back samples. Negative `dt` is a caller
/// contract violation and is not guarded here.
///
/// No integral clamping or anti-windup is applied at this layer. Bound
/// enforcement is the owning translator's responsibility, which clamps the
/// final actuator command instead.
pub fn compute_axis<T: Number>(
    pid: &mut PidController<T, AxisControlData<T>>,
    data: AxisControlData<T>,
) -> (T, T, T) {
    let error = pid.set_point - data.measurement;
    let integral = pid.integral + error * data.dt;
    let derivative = if data.dt == T::zero() {
        T::zero()
    } else {
        (error - pid.error) / data.dt
    };

    (error, integral, derivative)
}
