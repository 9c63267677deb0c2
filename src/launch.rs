//! Fire-and-forget open helpers
//!
//! Hand a URL or file to the OS default handler from a detached background
//! thread. The contract is explicitly best-effort with unobserved results:
//! no join handle is kept, no result channel exists, and failures inside the
//! thread are funneled only to the application log.

use std::path::Path;
use std::process::Command;
use std::thread;

use crate::config::log::{Level, LogFile};

/// Open `url` in the default browser without blocking the caller.
pub fn open_url(url: &str, log: &LogFile) {
    log.append(Level::Debug, &format!("Opening url {url} in background thread"));
    spawn_opener(url.to_string(), log.clone());
}

/// Open `path` with whatever application the OS associates with it.
pub fn open_file(path: &Path, log: &LogFile) {
    log.append(
        Level::Debug,
        &format!("Opening file at path {} in background thread", path.display()),
    );
    spawn_opener(path.display().to_string(), log.clone());
}

fn spawn_opener(target: String, log: LogFile) {
    // The handle is dropped on purpose: completion is never observed.
    thread::spawn(move || {
        let (program, args) = opener_command(&target);
        match Command::new(program).args(&args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                log.append(
                    Level::Error,
                    &format!("Default handler for {target} exited with {status}"),
                );
            }
            Err(e) => {
                log.append(
                    Level::Error,
                    &format!("Failed to launch default handler for {target}: {e}"),
                );
            }
        }
    });
}

/// Platform opener invocation for a URL or file path.
fn opener_command(target: &str) -> (&'static str, Vec<String>) {
    if cfg!(windows) {
        // `start` is a cmd.exe builtin; the empty string fills the window
        // title slot so the target is not mistaken for a title.
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                target.to_string(),
            ],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![target.to_string()])
    } else {
        ("xdg-open", vec![target.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_opener_command_uses_xdg_open() {
        let (program, args) = opener_command("https://example.org");
        assert_eq!(program, "xdg-open");
        assert_eq!(args, vec!["https://example.org".to_string()]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_opener_command_uses_open() {
        let (program, args) = opener_command("https://example.org");
        assert_eq!(program, "open");
        assert_eq!(args, vec!["https://example.org".to_string()]);
    }

    #[cfg(windows)]
    #[test]
    fn test_opener_command_uses_cmd_start() {
        let (program, args) = opener_command("https://example.org");
        assert_eq!(program, "cmd");
        assert_eq!(args[0], "/C");
        assert_eq!(args[1], "start");
    }
}
