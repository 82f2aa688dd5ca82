// demos/rc.rs

use rc_command_translation::{CommandTranslator, CommandTranslatorConfig, RcTranslator};

fn main() {
    let mut config = CommandTranslatorConfig::<f32>::new();

    // Set the PID gains for throttle, roll, pitch, and yaw.
    config.kp_throttle = 15.0;
    config.ki_throttle = 0.0;
    config.kd_throttle = 5.0;

    config.kp_roll = 0.5;
    config.ki_roll = 0.0;
    config.kd_roll = 0.2;

    config.kp_pitch = config.kp_roll;
    config.ki_pitch = config.ki_roll;
    config.kd_pitch = config.kd_roll;

    config.kp_yaw = 1.5;
    config.ki_yaw = 0.0;
    config.kd_yaw = 1.0;

    // Set the feed-forward throttle bias for hover.
    config.ff_throttle = 1260.0;

    // Set the command range, its center, and the correction scale.
    config.command_center = 1500.0;
    config.scale = 500.0;
    config.command_min = 1000.0;
    config.command_max = 2000.0;

    // Set the command translator
    let mut translator = RcTranslator::with_config(config);

    // Simulated normalized state and desired action. The desired yaw sits
    // across the wrap boundary from the current heading.
    let action = [0.8, 0.4, 0.6, 0.9];
    let mut state = [0.5, 0.5, 0.5, 0.05, 0.0];
    let dt = 0.01;

    println!("              Throttle,     Roll,    Pitch,      Yaw");
    let mut t = 0.0;
    for _ in 0..=10 {
        // Perform the translation
        let command = translator.compute_command(action, state, dt);

        // print results
        println!("t = {:.3}, dt = {:.3}", t, dt);
        println!(
            "    Action:  {:-8.3}, {:-8.3}, {:-8.3}, {:-8.3}",
            action[0], action[1], action[2], action[3]
        );
        println!(
            "    State:   {:-8.3}, {:-8.3}, {:-8.3}, {:-8.3}",
            state[0], state[1], state[2], state[3]
        );
        println!(
            "    Command: {:8}, {:8}, {:8}, {:8}",
            command[0], command[1], command[2], command[3]
        );

        // simulate response
        state[0] += 0.02 * (command[0] as f32 - config.ff_throttle) / config.scale;
        state[1] += 0.02 * (command[1] as f32 - config.command_center) / config.scale;
        state[2] += 0.02 * (command[2] as f32 - config.command_center) / config.scale;
        state[3] = (state[3] + 0.02 * (command[3] as f32 - config.command_center) / config.scale)
            .rem_euclid(1.0);

        t += dt;
    }
}
