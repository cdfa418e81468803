use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use super::plan::Step;

/// Runs a single step to completion.
///
/// Failing to start and exiting non-zero are both reported as `Err`.
pub trait StepRunner {
    fn run(&mut self, step: &Step, dir: &Path) -> Result<()>;
}

/// Spawns the real program with `dir` as working directory and the parent's
/// stdout/stderr attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl StepRunner for SystemRunner {
    fn run(&mut self, step: &Step, dir: &Path) -> Result<()> {
        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .context("failed to start")?;
        debug!(command = %step, %status, "step finished");
        if !status.success() {
            bail!("exited with {status}");
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn success_status_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let step = Step::new("sh", ["-c", "exit 0"]);
        SystemRunner.run(&step, dir.path()).unwrap();
    }

    #[test]
    fn runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        let step = Step::new("sh", ["-c", "touch marker"]);
        SystemRunner.run(&step, dir.path()).unwrap();
        assert!(dir.path().join("marker").is_file());
    }

    #[test]
    fn non_zero_exit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let step = Step::new("sh", ["-c", "exit 3"]);
        let err = SystemRunner.run(&step, dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "exited with exit status: 3");
    }

    #[test]
    fn missing_program_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let step = Step::new("setup-test-no-such-program", Vec::<String>::new());
        let err = SystemRunner.run(&step, dir.path()).unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to start: "));
    }
}
