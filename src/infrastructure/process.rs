use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::check::{CapturedOutput, LaunchFailure};
use crate::ports::ProcessLauncher;

/// Runs real subprocesses. `which` is only consulted for the debug trace;
/// the spawn error decides between a missing and an unusable executable.
#[derive(Debug, Default)]
pub struct SystemLauncher {
    pub debug: bool,
}

impl SystemLauncher {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, program: &str, target: &Path) -> Result<CapturedOutput, LaunchFailure> {
        let executable: OsString = match which::which(program) {
            Ok(path) => {
                if self.debug {
                    eprintln!("[DEBUG] {} -> {}", program, path.display());
                }
                path.into_os_string()
            }
            Err(e) => {
                if self.debug {
                    eprintln!("[DEBUG] {} not resolved on PATH ({}), spawning as given", program, e);
                }
                program.into()
            }
        };

        // Blocks until the child exits; there is no timeout.
        let output = Command::new(&executable)
            .arg(target)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => LaunchFailure::NotFound { program: program.to_string() },
                _ => LaunchFailure::Other { reason: e.to_string() },
            })
            .inspect_err(|failure| {
                if self.debug {
                    eprintln!("[DEBUG] {} failed to launch: {}", program, failure);
                }
            })?;

        if self.debug {
            eprintln!("[DEBUG] {} exited with {}", program, output.status);
        }

        Ok(CapturedOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
