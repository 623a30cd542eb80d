//! Replays a startup script through the interpreter.

use crate::command::Output;
use crate::error::{Result, ShellError};
use crate::interpreter::Interpreter;
use std::fs;
use std::path::Path;

/// Feed every line of `script` to `interpreter`, in file order.
///
/// Lines are trimmed and dispatched exactly as if typed, blank ones included.
/// Replay stops early once a line runs `exit`. A missing or unreadable script
/// yields a single error line.
pub fn run(interpreter: &mut Interpreter, script: &Path) -> Output {
    let lines = match read_script(script) {
        Ok(lines) => lines,
        Err(e) => {
            log::warn!("{e}");
            return vec![e.to_string()];
        }
    };
    log::info!("replaying {} lines from {}", lines.len(), script.display());

    let mut out = Vec::new();
    for line in lines {
        out.extend(interpreter.execute(&line));
        if interpreter.should_exit() {
            log::info!("startup script requested exit");
            break;
        }
    }
    out
}

fn read_script(script: &Path) -> Result<Vec<String>> {
    if !script.is_file() {
        return Err(ShellError::ScriptNotFound(script.to_path_buf()));
    }
    let text = fs::read_to_string(script).map_err(ShellError::ScriptUnreadable)?;
    Ok(text.lines().map(str::to_string).collect())
}
