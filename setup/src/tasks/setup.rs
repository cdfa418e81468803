use anyhow::Result;

use crate::bootstrap::{Plan, SystemRunner};
use crate::cli::RunArgs;

pub fn run(args: &RunArgs) -> Result<()> {
    let plan = Plan::standard(&args.build_dir, args.jobs)?;
    crate::bootstrap::execute(&plan, &mut SystemRunner)
}
