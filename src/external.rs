use crate::error::ShellError;
use std::process::{Command, Stdio};

/// Run a non-builtin command as a child process and wait for it.
///
/// The child inherits the parent's stdout and stderr so its output lands in
/// the session's terminal directly. Its stdin is closed: the shell's own
/// reader already consumed the line, and nothing feeds the child.
///
/// Any command name is accepted, including the empty string, which fails to
/// launch like any other unknown name.
pub(crate) fn run(name: &str, args: &[String]) -> Result<(), ShellError> {
    let status = Command::new(name)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ShellError::ExternalLaunch {
            name: name.to_owned(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ShellError::ExternalExit {
            name: name.to_owned(),
            status,
        })
    }
}
