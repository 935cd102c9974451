// ── Shell launching ───────────────────────────────────────────────────────────
//
// Opening a path or a URL means running one OS helper command and looking at
// its exit code.  Output is never parsed.

use std::fmt;
use std::io;
use std::process::{Command, Stdio};

/// A helper program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg:?}")?;
        }
        Ok(())
    }
}

/// How a launched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    /// Exited with this code.
    Exited(i32),
    /// Terminated without an exit code (killed by a signal on Unix).
    Terminated,
}

impl LaunchStatus {
    pub fn success(self) -> bool {
        self == Self::Exited(0)
    }
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {code}"),
            Self::Terminated => f.write_str("terminated without exit code"),
        }
    }
}

/// Runs helper commands to completion.
pub trait ShellLauncher: Send + Sync {
    fn launch(&self, command: &LaunchCommand) -> io::Result<LaunchStatus>;
}

/// Launches real child processes and waits for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl ShellLauncher for ProcessLauncher {
    fn launch(&self, command: &LaunchCommand) -> io::Result<LaunchStatus> {
        log::trace!("launching {command}");
        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(match status.code() {
            Some(code) => LaunchStatus::Exited(code),
            None => LaunchStatus::Terminated,
        })
    }
}

/// Run `command` once; log and return `false` on any failure.
///
/// `what` names the action for the log line ("open path", "open website").
pub(crate) fn run_opener(
    launcher: &dyn ShellLauncher,
    command: &LaunchCommand,
    what: &str,
    target: &str,
) -> bool {
    match launcher.launch(command) {
        Ok(status) if status.success() => true,
        Ok(status) => {
            log::error!("Failed to {what}: {target}, {status}");
            false
        }
        Err(e) => {
            log::error!("Failed to {what}: {target}, could not run {}: {e}", command.program);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::Mutex;

    /// Launcher that records commands and answers with a fixed outcome.
    pub(crate) struct RecordingLauncher {
        outcome: Result<LaunchStatus, io::ErrorKind>,
        pub(crate) commands: Mutex<Vec<LaunchCommand>>,
    }

    impl RecordingLauncher {
        pub(crate) fn exiting(code: i32) -> Self {
            Self::with_outcome(Ok(LaunchStatus::Exited(code)))
        }

        pub(crate) fn with_outcome(outcome: Result<LaunchStatus, io::ErrorKind>) -> Self {
            Self {
                outcome,
                commands: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn last(&self) -> Option<LaunchCommand> {
            self.commands.lock().expect("lock").last().cloned()
        }
    }

    impl ShellLauncher for RecordingLauncher {
        fn launch(&self, command: &LaunchCommand) -> io::Result<LaunchStatus> {
            self.commands.lock().expect("lock").push(command.clone());
            self.outcome.map_err(io::Error::from)
        }
    }

    #[test]
    fn run_opener_maps_exit_codes() {
        let cmd = LaunchCommand::new("helper").arg("target");
        assert!(run_opener(&RecordingLauncher::exiting(0), &cmd, "open path", "target"));
        assert!(!run_opener(&RecordingLauncher::exiting(1), &cmd, "open path", "target"));
        assert!(!run_opener(
            &RecordingLauncher::with_outcome(Ok(LaunchStatus::Terminated)),
            &cmd,
            "open path",
            "target"
        ));
        assert!(!run_opener(
            &RecordingLauncher::with_outcome(Err(io::ErrorKind::NotFound)),
            &cmd,
            "open path",
            "target"
        ));
    }

    #[test]
    fn display_quotes_arguments() {
        let cmd = LaunchCommand::new("rundll32")
            .arg("url.dll,FileProtocolHandler")
            .arg("https://example.com/a b");
        assert_eq!(
            cmd.to_string(),
            r#"rundll32 "url.dll,FileProtocolHandler" "https://example.com/a b""#
        );
    }

    #[cfg(unix)]
    fn sh(script: &str) -> LaunchCommand {
        LaunchCommand::new("sh").arg("-c").arg(script)
    }

    #[cfg(unix)]
    #[test]
    fn process_launcher_reports_real_exit_codes() {
        assert_eq!(ProcessLauncher.launch(&sh("exit 0")).expect("spawn"), LaunchStatus::Exited(0));
        assert_eq!(ProcessLauncher.launch(&sh("exit 3")).expect("spawn"), LaunchStatus::Exited(3));
    }

    #[cfg(windows)]
    #[test]
    fn process_launcher_reports_real_exit_codes() {
        let cmd = |code: &str| LaunchCommand::new("cmd").arg("/C").arg(format!("exit {code}"));
        assert_eq!(ProcessLauncher.launch(&cmd("0")).expect("spawn"), LaunchStatus::Exited(0));
        assert_eq!(ProcessLauncher.launch(&cmd("3")).expect("spawn"), LaunchStatus::Exited(3));
    }

    #[test]
    fn process_launcher_missing_program_is_an_error() {
        let cmd = LaunchCommand::new("sysbridge-no-such-helper-program");
        assert!(ProcessLauncher.launch(&cmd).is_err());
    }
}
