//! Script persistence and interpreter launch
//!
//! Persists a finished script to a named `.ahk` artifact and, when an
//! AutoHotkey installation can be discovered on the host, launches it
//! detached. A missing interpreter is a soft outcome (the artifact is still
//! on disk for download); only failing to write the artifact is an error.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{info, warn};

use crate::error::RunError;

/// Executable names probed during the `PATH` scan.
const INTERPRETER_NAMES: &[&str] = &["AutoHotkey.exe", "AutoHotkey"];

/// What happened to one run request.
#[derive(Debug)]
pub struct RunOutcome {
    /// Persisted script artifact, always present.
    pub script_path: PathBuf,
    /// Interpreter used, when one was found.
    pub interpreter: Option<PathBuf>,
    /// Process id of the launched interpreter.
    pub pid: Option<u32>,
    /// Human-readable reason when the launch did not happen.
    pub error: Option<String>,
}

impl RunOutcome {
    pub fn started(&self) -> bool {
        self.pid.is_some()
    }
}

/// Persist `code` and launch the interpreter on it, detached.
pub fn run_script(code: &str) -> Result<RunOutcome, RunError> {
    let script_path = persist_script(code)?;
    info!("script persisted to {}", script_path.display());

    let Some(interpreter) = find_interpreter() else {
        warn!("no AutoHotkey interpreter found on this host");
        return Ok(RunOutcome {
            script_path,
            interpreter: None,
            pid: None,
            error: Some(
                "AutoHotkey executable not found; install AutoHotkey or add it to PATH".to_string(),
            ),
        });
    };

    let child = Command::new(&interpreter)
        .arg(&script_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| RunError::Spawn {
            path: interpreter.clone(),
            source,
        })?;

    info!("launched {} (pid {})", interpreter.display(), child.id());
    Ok(RunOutcome {
        script_path,
        interpreter: Some(interpreter),
        pid: Some(child.id()),
        error: None,
    })
}

/// Write the script to a kept temp file (`ahk_*.ahk`) in the working
/// directory, so the caller can hand the path back for download.
pub(crate) fn persist_script(code: &str) -> Result<PathBuf, RunError> {
    let dir = std::env::current_dir().map_err(RunError::Persist)?;
    let mut file = tempfile::Builder::new()
        .prefix("ahk_")
        .suffix(".ahk")
        .tempfile_in(dir)
        .map_err(RunError::Persist)?;
    file.write_all(code.as_bytes()).map_err(RunError::Persist)?;
    let (_handle, path) = file.keep().map_err(|e| RunError::Persist(e.error))?;
    Ok(path)
}

/// Locate an AutoHotkey executable: standard install locations first, then a
/// portable exe in the working directory, then a `PATH` scan.
pub fn find_interpreter() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    for var in ["ProgramFiles", "ProgramFiles(x86)"] {
        if let Some(root) = std::env::var_os(var) {
            candidates.push(Path::new(&root).join("AutoHotkey").join("AutoHotkey.exe"));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("AutoHotkey.exe"));
    }
    if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
        return Some(found);
    }

    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        for name in INTERPRETER_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
