use anyhow::{Result, bail};

use crate::bootstrap::Plan;

pub fn run() -> Result<()> {
    let plan = Plan::standard(
        crate::util::repo::DEFAULT_BUILD_DIR,
        crate::bootstrap::plan::DEFAULT_JOBS,
    )?;

    let mut ok = true;
    for program in plan.programs() {
        match which::which(program) {
            Ok(path) => eprintln!("[OK] {program} ({})", path.display()),
            Err(_) => {
                eprintln!("[FAIL] missing `{program}` in PATH");
                ok = false;
            }
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    Ok(())
}
