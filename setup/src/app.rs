use anyhow::Result;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        None => crate::tasks::setup::run(&cli.run),
        Some(crate::cli::Cmd::Run(args)) => crate::tasks::setup::run(&args),
        Some(crate::cli::Cmd::Plan { run, json }) => crate::tasks::plan::run(&run, json),
        Some(crate::cli::Cmd::Doctor) => crate::tasks::doctor::run(),
    }
}
