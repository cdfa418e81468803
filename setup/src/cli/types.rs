use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "setup", version)]
#[command(about = "Bootstrap a local build: git submodules, CMake configure, parallel make")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    // Options for the default action (same as `setup run`).
    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Create the build directory, sync submodules, configure and build.
    ///
    /// This is what a bare `setup` invocation does.
    Run(RunArgs),

    /// Print the commands `run` would execute, without executing them.
    Plan {
        #[command(flatten)]
        run: RunArgs,

        /// Emit the plan as JSON instead of one command per line.
        #[arg(long)]
        json: bool,
    },

    /// Check that git, cmake and make are available on PATH.
    Doctor,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Directory to create and run the build tools in, relative to the repo root.
    #[arg(
        long = "build-dir",
        value_name = "PATH",
        default_value = crate::util::repo::DEFAULT_BUILD_DIR
    )]
    pub build_dir: PathBuf,

    /// Parallel jobs handed to `make -j`.
    #[arg(
        short = 'j',
        long = "jobs",
        default_value_t = crate::bootstrap::plan::DEFAULT_JOBS,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub jobs: u16,
}

/// Exit code for a rejected or informational command line: 0 for `--help` and
/// `--version`, 1 for everything else.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
