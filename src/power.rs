//! Host power control (shutdown and reboot).
//!
//! Both actions are terminal: once the command succeeds the host goes down and
//! nothing after it runs. [`DryRunPower`] only logs, for the simulator and for
//! development machines.

use std::process::Command;

use log::{info, warn};

use crate::error::{Error, Result};

/// Irreversible host action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PowerAction {
    Shutdown,
    Reboot,
}

impl PowerAction {
    /// Program and arguments run for this action.
    pub const fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Shutdown => ("sudo", &["shutdown", "-h", "now"]),
            Self::Reboot => ("sudo", &["reboot"]),
        }
    }

    /// Command line as a single string, for logs and errors.
    pub fn command_line(self) -> String {
        let (program, args) = self.command();
        let mut line = String::from(program);
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Label shown on the page offering this action.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shutdown => "SHUTDOWN",
            Self::Reboot => "REBOOT",
        }
    }
}

/// Performs host power actions.
pub trait PowerControl {
    fn execute(
        &mut self,
        action: PowerAction,
    ) -> Result<()>;
}

/// Runs the privileged host commands.
#[derive(Clone, Copy, Default, Debug)]
pub struct SystemPower;

impl PowerControl for SystemPower {
    fn execute(
        &mut self,
        action: PowerAction,
    ) -> Result<()> {
        let (program, args) = action.command();
        let command = action.command_line();
        info!("Running `{command}`");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| Error::PowerCommand {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::PowerCommandStatus { command, status });
        }
        Ok(())
    }
}

/// Logs power actions instead of running them.
#[derive(Clone, Default, Debug)]
pub struct DryRunPower {
    requested: Vec<PowerAction>,
}

impl DryRunPower {
    pub const fn new() -> Self { Self { requested: Vec::new() } }

    /// Actions requested so far, oldest first.
    pub fn requested(&self) -> &[PowerAction] { &self.requested }
}

impl PowerControl for DryRunPower {
    fn execute(
        &mut self,
        action: PowerAction,
    ) -> Result<()> {
        warn!("Dry run: not running `{}`", action.command_line());
        self.requested.push(action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_command() {
        assert_eq!(PowerAction::Shutdown.command_line(), "sudo shutdown -h now");
    }

    #[test]
    fn test_reboot_command() {
        assert_eq!(PowerAction::Reboot.command_line(), "sudo reboot");
    }

    #[test]
    fn test_labels() {
        assert_eq!(PowerAction::Shutdown.label(), "SHUTDOWN");
        assert_eq!(PowerAction::Reboot.label(), "REBOOT");
    }

    #[test]
    fn test_dry_run_records_actions() {
        let mut power = DryRunPower::new();
        power.execute(PowerAction::Reboot).unwrap();
        power.execute(PowerAction::Shutdown).unwrap();
        assert_eq!(power.requested(), &[PowerAction::Reboot, PowerAction::Shutdown]);
    }
}
