// src/translator/command_translator.rs

//! A module specifying the shared interface for PID-based command
//! translators. A command translator sits between a high-level guidance
//! source (an autonomous policy or a manual input remap) and the physical
//! actuator link, converting normalized desires and normalized state into
//! integer channel commands once per control tick. It includes a
//! configuration structure for PID gains and translation constants and a
//! trait defining the translation functionality.

use num_traits::ToPrimitive;
use piddiy::Number as PiddiyNumber;

/// Custom trait to encapsulate base number requirements.
pub trait Number: PiddiyNumber + ToPrimitive {
    /// Clamps generic PartialOrd values within a given range.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if max < self {
            max
        } else {
            self
        }
    }

    /// Absolute value for generic signed values.
    fn abs(self) -> Self {
        if self < Self::zero() {
            Self::zero() - self
        } else {
            self
        }
    }
}

impl<T: PiddiyNumber + ToPrimitive> Number for T {}

/// Normalized vehicle state in the order altitude, roll, pitch, yaw,
/// followed by one caller-reserved slot the translator never reads.
pub type StateVector<T> = [T; 5];

/// Normalized guidance command in the order altitude, roll, pitch, yaw.
pub type ActionVector<T> = [T; 4];

/// Actuator channel commands in the order throttle, roll, pitch, yaw,
/// each within the configured command range.
pub type CommandVector = [u16; 4];

/// Configuration for PID gains and translation constants.
#[derive(Clone, Copy)]
pub struct CommandTranslatorConfig<T: Number> {
    /// Proportional gain for throttle control.
    pub kp_throttle: T,
    /// Integral gain for throttle control.
    pub ki_throttle: T,
    /// Derivative gain for throttle control.
    pub kd_throttle: T,
    /// Proportional gain for roll control.
    pub kp_roll: T,
    /// Integral gain for roll control.
    pub ki_roll: T,
    /// Derivative gain for roll control.
    pub kd_roll: T,
    /// Proportional gain for pitch control.
    pub kp_pitch: T,
    /// Integral gain for pitch control.
    pub ki_pitch: T,
    /// Derivative gain for pitch control.
    pub kd_pitch: T,
    /// Proportional gain for yaw control.
    pub kp_yaw: T,
    /// Integral gain for yaw control.
    pub ki_yaw: T,
    /// Derivative gain for yaw control.
    pub kd_yaw: T,
    /// Feed-forward throttle bias added to the throttle output,
    /// compensating for the known hover requirement.
    pub ff_throttle: T,
    /// Center value added to the roll, pitch, and yaw outputs, the
    /// midpoint of the command range.
    pub command_center: T,
    /// Scale factor applied to each PID correction to match the command
    /// range.
    pub scale: T,
    /// Lower bound of the actuator command range.
    pub command_min: T,
    /// Upper bound of the actuator command range.
    pub command_max: T,
}

impl<T: Number> CommandTranslatorConfig<T> {
    /// Creates a new configuration with default values for all parameters.
    /// Default values of zero or one are used.
    /// These should be replaced with meaningful values that are tuned for
    /// the vehicle and its actuator link.
    ///
    /// Example Usage
    /// ```
    /// use rc_command_translation::CommandTranslatorConfig;
    ///
    /// let mut config = CommandTranslatorConfig::<f32>::new();
    ///
    /// // Set the PID gains for throttle, roll, pitch, and yaw.
    /// config.kp_throttle = 15.0;
    /// config.ki_throttle = 0.0;
    /// config.kd_throttle = 5.0;
    ///
    /// config.kp_roll = 0.5;
    /// config.ki_roll = 0.0;
    /// config.kd_roll = 0.2;
    ///
    /// config.kp_pitch = config.kp_roll;
    /// config.ki_pitch = config.ki_roll;
    /// config.kd_pitch = config.kd_roll;
    ///
    /// config.kp_yaw = 1.5;
    /// config.ki_yaw = 0.0;
    /// config.kd_yaw = 1.0;
    ///
    /// // Set the feed-forward throttle bias for hover.
    /// config.ff_throttle = 1260.0;
    ///
    /// // Set the command range, its center, and the correction scale.
    /// config.command_center = 1500.0;
    /// config.scale = 500.0;
    /// config.command_min = 1000.0;
    /// config.command_max = 2000.0;
    ///
    /// // The configuration is ready to use.
    /// use rc_command_translation::RcTranslator;
    ///
    /// let translator = RcTranslator::with_config(config);
    /// ```
    pub fn new() -> Self {
        Self {
            kp_throttle: T::one(),
            ki_throttle: T::zero(),
            kd_throttle: T::zero(),
            kp_roll: T::one(),
            ki_roll: T::zero(),
            kd_roll: T::zero(),
            kp_pitch: T::one(),
            ki_pitch: T::zero(),
            kd_pitch: T::zero(),
            kp_yaw: T::one(),
            ki_yaw: T::zero(),
            kd_yaw: T::zero(),
            ff_throttle: T::zero(),
            command_center: T::zero(),
            scale: T::one(),
            command_min: T::zero(),
            command_max: T::one(),
        }
    }
}

/// A trait for PID-based command translators that convert a normalized
/// guidance command and the current normalized vehicle state into
/// actuator channel commands.
///
/// Implementations are single-owner, single-threaded by contract: the
/// caller drives one `compute_command` or `reset` call at a time from a
/// fixed-rate control loop and provides no concurrent access.
pub trait CommandTranslator<T: Number> {
    /// Resets all axis controllers to their zero-integral,
    /// zero-derivative-history state. Gains and set points are untouched.
    ///
    /// Call this whenever control authority is handed back to the
    /// translator after an interval of external or manual control, so a
    /// stale integral term cannot produce a discontinuous command burst.
    fn reset(&mut self);

    /// Takes the desired normalized action and the current normalized
    /// state, then computes the actuator channel commands.
    ///
    /// - `action`: Desired normalized altitude, roll, pitch, and yaw.
    /// - `state`: Current normalized altitude, roll, pitch, and yaw, plus
    ///   one caller-reserved slot that is passed through unread.
    /// - `dt`: Time delta since the last update. Must not be negative.
    ///
    /// Returns commands in the order throttle, roll, pitch, yaw, each
    /// clamped to the configured command range and truncated to an
    /// integer.
    fn compute_command(
        &mut self,
        action: ActionVector<T>,
        state: StateVector<T>,
        dt: T,
    ) -> CommandVector;
}
