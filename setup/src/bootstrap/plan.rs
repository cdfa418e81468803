use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// `make -j` parallelism when none is given.
pub const DEFAULT_JOBS: u16 = 8;

/// CMake cache entries passed to the configure step.
const CMAKE_DEFINES: &[&str] = &["-DONNX_ML=OFF"];

/// One external command of the bootstrap sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// The ordered steps of one run and the directory they run in.
#[derive(Clone, Debug, Serialize)]
pub struct Plan {
    pub build_dir: PathBuf,
    pub steps: Vec<Step>,
}

impl Plan {
    /// Submodule sync, CMake configure, parallel make.
    pub fn standard(build_dir: impl Into<PathBuf>, jobs: u16) -> Result<Self> {
        let build_dir = build_dir.into();
        let source_dir = crate::util::repo::source_dir_from(&build_dir)?;
        let steps = vec![
            submodule_sync(),
            configure(&source_dir),
            build(jobs),
        ];
        Ok(Self { build_dir, steps })
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Distinct programs the plan needs, in first-use order.
    pub fn programs(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if !out.contains(&step.program.as_str()) {
                out.push(&step.program);
            }
        }
        out
    }
}

fn submodule_sync() -> Step {
    Step::new("git", ["submodule", "update", "--init", "--recursive"])
}

fn configure(source_dir: &str) -> Step {
    let mut args: Vec<String> = CMAKE_DEFINES.iter().map(|d| (*d).to_string()).collect();
    args.push(source_dir.to_string());
    Step::new("cmake", args)
}

fn build(jobs: u16) -> Step {
    Step::new("make", [format!("-j{jobs}")])
}
