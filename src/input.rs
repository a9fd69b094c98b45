//! Interactive collection of the three entry fields
//!
//! Prompt → read → strip one newline, in a fixed order. Any read failure
//! aborts the run before a request can be built.

use std::io::{BufRead, Write};

use crate::entry::TaskEntry;
use crate::error::AppError;

/// Field values already supplied on the command line. A preset field is
/// taken as-is and its prompt is skipped.
#[derive(Debug, Default)]
pub(crate) struct TaskPreset {
    pub(crate) project: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) message: Option<String>,
}

/// Collect project, task ID, and message. An empty project falls back to
/// `default_project` before anything downstream sees the entry.
pub(crate) fn collect_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preset: TaskPreset,
    default_project: &str,
) -> Result<TaskEntry, AppError> {
    let mut project = field(input, output, preset.project, "project", "Enter a project: ")?;
    let id = field(input, output, preset.id, "task ID", "Enter a task ID: ")?;
    let message = field(input, output, preset.message, "message", "Enter a message: ")?;

    if project.is_empty() {
        project = default_project.to_string();
    }

    Ok(TaskEntry {
        project,
        id,
        message,
    })
}

fn field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preset: Option<String>,
    name: &'static str,
    prompt: &str,
) -> Result<String, AppError> {
    if let Some(value) = preset {
        return Ok(value);
    }

    write!(output, "{prompt}").map_err(|e| AppError::Input {
        field: name,
        source: e,
    })?;
    output.flush().map_err(|e| AppError::Input {
        field: name,
        source: e,
    })?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| AppError::Input {
        field: name,
        source: e,
    })?;
    if read == 0 {
        return Err(AppError::InputClosed { field: name });
    }
    Ok(strip_newline(line))
}

/// Remove exactly one trailing newline ("\n" or "\r\n"); any other
/// whitespace is part of the value.
fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
