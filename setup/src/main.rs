use clap::Parser;

mod app;
mod bootstrap;
mod cli;
mod logging;
mod tasks;
mod util;

fn main() {
    crate::logging::init();
    let cli = match crate::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(crate::cli::usage_exit_code(&err));
        }
    };
    if let Err(err) = crate::app::run(cli) {
        eprintln!("Error: {err:#}.");
        std::process::exit(1);
    }
}
