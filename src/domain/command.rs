//! Commands read from the remote command feed.
//!
//! The feed sends [`Command`] objects as JSON. A command is only applied
//! after it validates into a [`FlashlightCommand`].

use serde::{Deserialize, Serialize};

use crate::error::FlashlightError;

/// Command discriminator as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandType {
    /// Turn the light on.
    On,
    /// Turn the light off.
    Off,
    /// Change the color; requires `metadata`.
    Color,
}

/// Raw command DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Which command this is.
    pub command: CommandType,
    /// Color value for `COLOR`, ignored otherwise.
    #[serde(default)]
    pub metadata: Option<f64>,
}

impl Command {
    /// `ON` command.
    #[must_use]
    pub const fn on() -> Self {
        Self {
            command: CommandType::On,
            metadata: None,
        }
    }

    /// `OFF` command.
    #[must_use]
    pub const fn off() -> Self {
        Self {
            command: CommandType::Off,
            metadata: None,
        }
    }

    /// `COLOR` command carrying `color`.
    #[must_use]
    pub fn color(color: u32) -> Self {
        Self {
            command: CommandType::Color,
            metadata: Some(f64::from(color)),
        }
    }

    /// Validates the DTO into an applicable command.
    ///
    /// # Errors
    ///
    /// Returns [`FlashlightError::InvalidCommand`] for a `COLOR` command
    /// without a color value.
    pub fn validate(&self) -> Result<FlashlightCommand, FlashlightError> {
        match (self.command, self.metadata) {
            (CommandType::On, _) => Ok(FlashlightCommand::On),
            (CommandType::Off, _) => Ok(FlashlightCommand::Off),
            (CommandType::Color, Some(value)) => Ok(FlashlightCommand::Color(color_from(value))),
            (CommandType::Color, None) => Err(FlashlightError::InvalidCommand(
                "COLOR command requires a color value".to_string(),
            )),
        }
    }
}

/// A validated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashlightCommand {
    /// Turn the light on.
    On,
    /// Turn the light off.
    Off,
    /// Set the color.
    Color(u32),
}

impl TryFrom<&Command> for FlashlightCommand {
    type Error = FlashlightError;

    fn try_from(command: &Command) -> Result<Self, Self::Error> {
        command.validate()
    }
}

/// Decodes and validates one JSON command frame.
///
/// # Errors
///
/// Returns [`FlashlightError::InvalidCommand`] if the frame is not a
/// command object or fails validation.
pub fn decode_command(frame: &[u8]) -> Result<FlashlightCommand, FlashlightError> {
    let command: Command = serde_json::from_slice(frame)
        .map_err(|e| FlashlightError::InvalidCommand(e.to_string()))?;
    command.validate()
}

/// Truncates a numeric color to `u32`. Out-of-range values saturate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn color_from(value: f64) -> u32 {
    value as u32
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn decodes_on_and_off() {
        let on = decode_command(br#"{"command": "ON", "metadata": null}"#);
        assert_eq!(on.ok(), Some(FlashlightCommand::On));

        let off = decode_command(br#"{"command": "OFF"}"#);
        assert_eq!(off.ok(), Some(FlashlightCommand::Off));
    }

    #[test]
    fn decodes_color_from_float_metadata() {
        let cmd = decode_command(br#"{"command": "COLOR", "metadata": 16738740.0}"#);
        assert_eq!(cmd.ok(), Some(FlashlightCommand::Color(0xff69_b4)));
    }

    #[test]
    fn color_without_metadata_is_rejected() {
        let Err(err) = decode_command(br#"{"command": "COLOR"}"#) else {
            panic!("COLOR without metadata must fail");
        };
        assert!(matches!(err, FlashlightError::InvalidCommand(_)));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(decode_command(br#"{"command": "BLINK"}"#).is_err());
        assert!(decode_command(b"not json }").is_err());
    }

    #[test]
    fn on_ignores_metadata() {
        let cmd = Command {
            command: CommandType::On,
            metadata: Some(1.0),
        };
        assert_eq!(FlashlightCommand::try_from(&cmd).ok(), Some(FlashlightCommand::On));
    }

    #[test]
    fn constructors_encode_as_feed_json() {
        let json = serde_json::to_string(&Command::color(0x00bf_ff)).unwrap_or_default();
        assert_eq!(json, r#"{"command":"COLOR","metadata":49151.0}"#);

        let json = serde_json::to_string(&Command::off()).unwrap_or_default();
        assert_eq!(json, r#"{"command":"OFF","metadata":null}"#);
    }

    #[test]
    fn negative_color_saturates_to_zero() {
        let cmd = Command {
            command: CommandType::Color,
            metadata: Some(-5.0),
        };
        assert_eq!(cmd.validate().ok(), Some(FlashlightCommand::Color(0)));
    }
}
