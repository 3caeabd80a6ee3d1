//! System utilities backed by shell commands.

use std::io;
use std::process::{Command, ExitStatus, Output};
use std::string::FromUtf8Error;

use log::warn;
use teleop_core::{line_from, Line, SystemUtilities, UtilityError};
use thiserror::Error;

/// A command line: program followed by its arguments.
pub type CommandLine = &'static [&'static str];

/// The commands [`LinuxSystem`] runs for each utility.
///
/// Customize this at compile-time by creating your own const.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    /// Prints the main battery voltage on its first line of output.
    pub battery: CommandLine,
    /// Prints the host's addresses, primary first.
    pub ip_address: CommandLine,
    pub halt: CommandLine,
    pub reboot: CommandLine,
}

/// Default commands for a Raspberry Pi robot.
///
/// `battery-voltage` is expected on `PATH`; it reads the motor HAT's ADC
/// and prints something like `7.84V`.
pub const DEFAULT_COMMANDS: CommandSet = CommandSet {
    battery: &["battery-voltage"],
    ip_address: &["hostname", "-I"],
    halt: &["sudo", "halt"],
    reboot: &["sudo", "reboot"],
};

impl Default for CommandSet {
    fn default() -> Self {
        DEFAULT_COMMANDS
    }
}

/// Why a utility command did not produce a usable result.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    Status {
        program: &'static str,
        status: ExitStatus,
    },
    #[error("output is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("{program} printed nothing usable")]
    NoOutput { program: &'static str },
}

impl From<CommandError> for UtilityError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Empty | CommandError::Spawn { .. } | CommandError::Status { .. } => {
                UtilityError::Failed
            }
            CommandError::Utf8(_) | CommandError::NoOutput { .. } => UtilityError::InvalidOutput,
        }
    }
}

/// First non-empty line of `text`, trimmed.
#[must_use]
pub fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// First whitespace-separated token of `text`.
#[must_use]
pub fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

fn command(line: CommandLine) -> Result<(&'static str, Command), CommandError> {
    let (&program, args) = line.split_first().ok_or(CommandError::Empty)?;
    let mut command = Command::new(program);
    command.args(args);
    Ok((program, command))
}

/// Run a command to completion and return its stdout.
fn capture(line: CommandLine) -> Result<(&'static str, String), CommandError> {
    let (program, mut command) = command(line)?;
    let Output { status, stdout, .. } = command
        .output()
        .map_err(|source| CommandError::Spawn { program, source })?;
    if !status.success() {
        return Err(CommandError::Status { program, status });
    }
    Ok((program, String::from_utf8(stdout)?))
}

/// Start a command without waiting for it.
fn launch(line: CommandLine) -> Result<(), CommandError> {
    let (program, mut command) = command(line)?;
    command
        .spawn()
        .map_err(|source| CommandError::Spawn { program, source })?;
    Ok(())
}

/// [`SystemUtilities`] for a Linux host.
///
/// Every failure is logged here and reported to the session as a plain
/// [`UtilityError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxSystem {
    commands: CommandSet,
}

impl LinuxSystem {
    pub const fn new(commands: CommandSet) -> Self {
        Self { commands }
    }

    #[inline]
    #[must_use]
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    fn query(line: CommandLine, pick: fn(&str) -> Option<&str>) -> Result<Line, CommandError> {
        let (program, stdout) = capture(line)?;
        pick(&stdout)
            .map(line_from)
            .ok_or(CommandError::NoOutput { program })
    }
}

fn logged<T>(what: &str, result: Result<T, CommandError>) -> Result<T, UtilityError> {
    result.map_err(|e| {
        warn!("{} unavailable: {}", what, e);
        e.into()
    })
}

impl SystemUtilities for LinuxSystem {
    fn main_battery_voltage(&mut self) -> Result<Line, UtilityError> {
        logged("Battery voltage", Self::query(self.commands.battery, first_line))
    }

    fn ip_address(&mut self) -> Result<Line, UtilityError> {
        logged("IP address", Self::query(self.commands.ip_address, first_token))
    }

    fn halt(&mut self) -> Result<(), UtilityError> {
        logged("Halt", launch(self.commands.halt))
    }

    fn reboot(&mut self) -> Result<(), UtilityError> {
        logged("Reboot", launch(self.commands.reboot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(battery: CommandLine, ip_address: CommandLine) -> LinuxSystem {
        LinuxSystem::new(CommandSet {
            battery,
            ip_address,
            ..DEFAULT_COMMANDS
        })
    }

    #[test]
    fn test_first_line_skips_blank_lines() {
        assert_eq!(first_line("\n  7.84V \nextra\n"), Some("7.84V"));
        assert_eq!(first_line(" \n\n"), None);
    }

    #[test]
    fn test_first_token_picks_primary_address() {
        assert_eq!(
            first_token("192.168.1.20 172.17.0.1 fe80::1 \n"),
            Some("192.168.1.20")
        );
        assert_eq!(first_token("\n"), None);
    }

    #[test]
    fn test_battery_from_command_output() {
        let mut system = system(&["echo", "7.84V"], &["true"]);
        assert_eq!(system.main_battery_voltage().unwrap().as_str(), "7.84V");
    }

    #[test]
    fn test_ip_from_command_output() {
        let mut system = system(&["true"], &["echo", "10.0.0.7 fe80::1"]);
        assert_eq!(system.ip_address().unwrap().as_str(), "10.0.0.7");
    }

    #[test]
    fn test_silent_command_is_invalid_output() {
        let mut system = system(&["true"], &["true"]);
        assert_eq!(system.ip_address(), Err(UtilityError::InvalidOutput));
    }

    #[test]
    fn test_failing_command_is_failed() {
        let mut system = system(&["false"], &["true"]);
        assert_eq!(system.main_battery_voltage(), Err(UtilityError::Failed));
    }

    #[test]
    fn test_missing_program_is_failed() {
        let mut system = system(&["/nonexistent/battery-voltage"], &["true"]);
        assert_eq!(system.main_battery_voltage(), Err(UtilityError::Failed));
    }

    #[test]
    fn test_empty_command_line() {
        assert!(matches!(capture(&[]), Err(CommandError::Empty)));
        assert_eq!(UtilityError::from(CommandError::Empty), UtilityError::Failed);
    }

    #[test]
    fn test_status_error_names_program() {
        let err = capture(&["false"]).unwrap_err();
        assert!(err.to_string().starts_with("false exited with"));
    }
}
