// demos/no_std_fixed.rs

#![feature(start)]
#![no_std]

extern crate libc;
use core::fmt::Write;
use fixed::types::I16F16;
use rc_command_translation::{CommandTranslator, CommandTranslatorConfig, RcTranslator};

// Implement minimal formatting features for output.
struct Stdout;

impl Write for Stdout {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut buffer = [0u8; 1024]; // Buffer to hold the string and null terminator

        // Ensure we don't exceed the buffer size
        if s.len() + 1 > buffer.len() {
            return Err(core::fmt::Error);
        }

        // Copy the string into the buffer and null-terminate it
        buffer[..s.len()].copy_from_slice(s.as_bytes());
        buffer[s.len()] = 0; // Null terminator

        unsafe {
            // Use %s to print the string from the buffer
            libc::printf(b"%s\0".as_ptr() as *const _, buffer.as_ptr() as *const _);
        }
        Ok(())
    }
}

#[start]
fn _start(_: isize, _: *const *const u8) -> isize {
    let mut config = CommandTranslatorConfig::<I16F16>::new();

    // Set the PID gains for throttle, roll, pitch, and yaw. The gains are
    // kept small so intermediate products stay inside the I16F16 range
    // with a one second time step.
    config.kp_throttle = I16F16::from_num(1.0);
    config.ki_throttle = I16F16::from_num(0.0);
    config.kd_throttle = I16F16::from_num(0.2);

    config.kp_roll = I16F16::from_num(0.5);
    config.ki_roll = I16F16::from_num(0.0);
    config.kd_roll = I16F16::from_num(0.2);

    config.kp_pitch = config.kp_roll;
    config.ki_pitch = config.ki_roll;
    config.kd_pitch = config.kd_roll;

    config.kp_yaw = I16F16::from_num(1.5);
    config.ki_yaw = I16F16::from_num(0.0);
    config.kd_yaw = I16F16::from_num(0.5);

    // Set the feed-forward throttle bias for hover.
    config.ff_throttle = I16F16::from_num(1260);

    // Set the command range, its center, and the correction scale.
    config.command_center = I16F16::from_num(1500);
    config.scale = I16F16::from_num(500);
    config.command_min = I16F16::from_num(1000);
    config.command_max = I16F16::from_num(2000);

    // Set the command translator
    let mut translator = RcTranslator::with_config(config);

    // Simulated normalized state and desired action. The desired yaw sits
    // across the wrap boundary from the current heading.
    let action = [
        I16F16::from_num(0.8),
        I16F16::from_num(0.4),
        I16F16::from_num(0.6),
        I16F16::from_num(0.9),
    ];
    let mut state = [
        I16F16::from_num(0.5),
        I16F16::from_num(0.5),
        I16F16::from_num(0.5),
        I16F16::from_num(0.05),
        I16F16::from_num(0.0),
    ];
    let dt = I16F16::from_num(1.0);

    let response_gain = I16F16::from_num(0.25);
    let one = I16F16::from_num(1.0);

    let mut stdout = Stdout;
    writeln!(stdout, "              Throttle,     Roll,    Pitch,      Yaw").ok();
    let mut t = I16F16::from_num(0.0);
    for _ in 0..=10 {
        // Perform the translation
        let command = translator.compute_command(action, state, dt);

        // print results
        writeln!(stdout, "t = {:.3}, dt = {:.3}", t, dt).ok();
        writeln!(
            stdout,
            "    Action:  {:-8.3}, {:-8.3}, {:-8.3}, {:-8.3}",
            action[0], action[1], action[2], action[3]
        )
        .ok();
        writeln!(
            stdout,
            "    State:   {:-8.3}, {:-8.3}, {:-8.3}, {:-8.3}",
            state[0], state[1], state[2], state[3]
        )
        .ok();
        writeln!(
            stdout,
            "    Command: {:8}, {:8}, {:8}, {:8}",
            command[0], command[1], command[2], command[3]
        )
        .ok();

        // simulate response
        state[0] +=
            response_gain * (I16F16::from_num(command[0]) - config.ff_throttle) / config.scale;
        state[1] +=
            response_gain * (I16F16::from_num(command[1]) - config.command_center) / config.scale;
        state[2] +=
            response_gain * (I16F16::from_num(command[2]) - config.command_center) / config.scale;
        state[3] +=
            response_gain * (I16F16::from_num(command[3]) - config.command_center) / config.scale;

        // keep the heading on its circle
        if state[3] < I16F16::from_num(0.0) {
            state[3] += one;
        } else if one <= state[3] {
            state[3] -= one;
        }

        t += dt;
    }

    0
}
