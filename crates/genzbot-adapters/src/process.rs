//! Process runner using `std::process`.

use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use genzbot_core::application::ports::{Invocation, ProcessExit, ProcessRunner};

/// Runs programs in the foreground with the caller's stdio attached, so
/// installer output and the service's logs reach the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %invocation))]
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessExit> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        debug!(code = ?status.code(), "process exited");
        Ok(ProcessExit {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn reports_exit_code() {
        let runner = SystemProcessRunner::new();
        let ok = runner
            .run(&Invocation::new("sh").arg("-c").arg("exit 0"))
            .unwrap();
        assert!(ok.success());

        let failed = runner
            .run(&Invocation::new("sh").arg("-c").arg("exit 3"))
            .unwrap();
        assert_eq!(failed.code, Some(3));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = SystemProcessRunner::new()
            .run(&Invocation::new("/definitely/not/here/genzbot-python"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
