//! External tool location and invocation
//!
//! The CLI wraps foreign executables (UI compiler, resource compiler,
//! translation tools, packager). Their behavior is opaque; this module only
//! finds them on `PATH` and runs them with inherited stdio.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::info;

use crate::error::Error;

/// Search `PATH` for an executable, appending `.exe` on Windows.
pub fn find_executable(name: &str) -> Result<PathBuf, Error> {
    let file_name = if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    };
    let path_var = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(&file_name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(Error::ToolNotFound(name.to_string()))
}

/// Run a tool with inherited stdio and return its exit status.
pub fn run_tool(program: &Path, args: &[String]) -> Result<ExitStatus, Error> {
    info!(program = %program.display(), args = ?args, "running external tool");
    Command::new(program)
        .args(args)
        .status()
        .map_err(|source| Error::Spawn {
            tool: program.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_reports_name() {
        let err = find_executable("definitely-not-a-real-tool-9000").unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(name) if name == "definitely-not-a-real-tool-9000"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_executable_locates_sh() {
        let sh = find_executable("sh").unwrap();
        assert!(sh.is_file());
    }
}
