use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Everything that can go wrong inside a single loop iteration.
///
/// Every variant is reported on the session's error stream and swallowed by
/// the loop; none of them ends the session. Only the explicit `exit` builtin
/// does that.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Username, working-directory or home-directory lookup failed.
    #[error("cannot resolve {what}: {reason}")]
    EnvironmentQuery { what: &'static str, reason: String },

    /// Reading a line from the session input failed, including end of stream.
    #[error("cannot read input: {0}")]
    InputRead(#[source] io::Error),

    /// A builtin that requires at least one operand was given none.
    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },

    /// A directory create/remove, file create or chdir failed.
    #[error("{command}: {path}: {source}")]
    Filesystem {
        command: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// An external command could not be spawned, e.g. command not found.
    #[error("{name}: {source}")]
    ExternalLaunch {
        name: String,
        #[source]
        source: io::Error,
    },

    /// An external command ran but reported failure.
    #[error("{name}: {status}")]
    ExternalExit { name: String, status: ExitStatus },

    /// Writing builtin output to the session's output stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
