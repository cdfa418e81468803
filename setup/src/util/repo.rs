use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Build directory used when none is given, relative to the repo root.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Path of the source tree (the invocation directory) as seen from inside `build_dir`.
///
/// A relative build directory nested `n` levels deep maps to `n` copies of `..`,
/// so the default `build` yields exactly `..`. Anything that cannot be walked
/// back that way (absolute paths, `..` components) gets the absolute current
/// directory instead.
pub fn source_dir_from(build_dir: &Path) -> Result<String> {
    let mut depth = 0usize;
    for component in build_dir.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return current_dir_string();
            }
        }
    }

    if depth == 0 {
        return Ok(".".to_string());
    }
    Ok(vec![".."; depth].join("/"))
}

/// Absolute form of `dir` for display; falls back to `dir` as given.
pub fn absolute(dir: &Path) -> PathBuf {
    std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn current_dir_string() -> Result<String> {
    let cwd = std::env::current_dir().context("Reading current directory")?;
    Ok(cwd.to_string_lossy().into_owned())
}
