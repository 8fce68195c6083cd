use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::logger::log_command;

/// Exit status and captured output of one external tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Seam for launching the rasterizer and the bundler.
pub trait CommandRunner {
    /// Runs `program` to completion. `Err` only when it could not be started.
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<CommandOutput>;
}

/// Runs tools with `std::process::Command`, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<CommandOutput> {
        log_command(program, args);
        let out = Command::new(program).args(args).output()?;
        let output = CommandOutput {
            status: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        };
        log::debug!("{} exited with {:?}", program.display(), output.status);
        Ok(output)
    }
}
