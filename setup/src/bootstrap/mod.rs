//! The bootstrap sequence: make sure the build directory exists, then run
//! each step in order and stop at the first failure.

pub mod plan;
pub mod runner;

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

pub use plan::Plan;
pub use runner::{StepRunner, SystemRunner};

/// Create `dir` if it is missing.
///
/// Never fails: an existing directory is fine, and any other problem is only
/// logged. A directory that really is unusable shows up when the first step
/// tries to run in it.
pub fn ensure_build_dir(dir: &Path) {
    if dir.is_dir() {
        debug!(dir = %dir.display(), "build directory already exists");
        return;
    }
    match create_dir(dir) {
        Ok(()) => debug!(dir = %dir.display(), "created build directory"),
        Err(e) => warn!(
            dir = %dir.display(),
            error = %e,
            "could not create build directory, continuing"
        ),
    }
}

fn create_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o775);
    }
    builder.create(dir)
}

/// Run `plan` through `runner`.
///
/// Steps after the first failing one are not started; nothing already done
/// is undone.
pub fn execute<R: StepRunner>(plan: &Plan, runner: &mut R) -> Result<()> {
    ensure_build_dir(plan.build_dir());

    let total = plan.steps.len();
    for (i, step) in plan.steps.iter().enumerate() {
        info!(step = i + 1, total, command = %step, "running");
        runner
            .run(step, plan.build_dir())
            .with_context(|| format!("Running `{step}`"))?;
    }
    Ok(())
}
