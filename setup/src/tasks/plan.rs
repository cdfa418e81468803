use anyhow::{Context, Result};

use crate::bootstrap::Plan;
use crate::cli::RunArgs;

pub fn run(args: &RunArgs, json: bool) -> Result<()> {
    let plan = Plan::standard(&args.build_dir, args.jobs)?;

    if json {
        let out = serde_json::to_string_pretty(&plan).context("Serializing plan")?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "# in {}",
        crate::util::repo::absolute(plan.build_dir()).display()
    );
    for step in &plan.steps {
        println!("{step}");
    }
    Ok(())
}
