use std::io::{ErrorKind, Write};
use std::panic;
use std::process::{ChildStdin, Command, Output, Stdio};
use std::thread;

use log::debug;

use crate::error::{Error, Result};

/// Everything a menu program left behind once it exited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl Captured {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Joins menu items the way dmenu-style programs read them: one item per
/// line, without a trailing newline.
#[must_use]
pub fn join_items(items: &[String]) -> String {
    items.join("\n")
}

fn write_input(program: &str, stdin: Option<ChildStdin>, input: &str) -> Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };

    match stdin.write_all(input.as_bytes()) {
        Ok(()) => Ok(()),
        // The program quit without reading everything; its exit status tells the rest.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("`{program}` closed its input early");
            Ok(())
        }
        Err(e) => Err(Error::SubProcess(e)),
    }
}

/// Runs `program` with `args`, writes `input` to its stdin and waits for it
/// to exit.
///
/// # Errors
///
/// Returns [`Error::Spawn`] if the program could not be started, or
/// [`Error::SubProcess`] if talking to it or waiting for it failed. A
/// non-zero exit is not an error here; it is reported through
/// [`Captured::code`].
pub fn pipe_input(program: &str, args: &[String], input: &str) -> Result<Captured> {
    debug!("Running `{program}` with arguments {args:?}");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::spawn_error(program, e))?;

    let stdin = child.stdin.take();

    // stdout and stderr are drained while the items are still being written.
    let output = thread::scope(|scope| -> Result<Output> {
        let writer = scope.spawn(move || write_input(program, stdin, input));
        let output = child.wait_with_output()?;
        writer
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload))?;
        Ok(output)
    })?;

    let captured = Captured {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    };

    debug!("`{program}` exited with {:?}", captured.code);

    Ok(captured)
}
