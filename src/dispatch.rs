use crate::builtin::{self, Builtin};
use crate::env::Environment;
use crate::error::ShellError;
use crate::external;
use crate::lexer;
use crate::signal::ExitSignal;
use std::io::Write;

/// Routes one raw command line to a builtin or to the external launcher.
pub(crate) struct Dispatcher {
    env: Box<dyn Environment>,
    builtins: Vec<Box<dyn Builtin>>,
}

impl Dispatcher {
    pub fn new(env: Box<dyn Environment>, signal: ExitSignal) -> Self {
        Self {
            env,
            builtins: builtin::table(signal),
        }
    }

    pub fn env(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// Trim the line, split it into words, and run the command.
    ///
    /// Builtin names shadow external commands. Anything else — the empty
    /// name from a blank line included — is handed to the process launcher
    /// and fails there if no such program exists.
    pub fn dispatch(&mut self, output: &mut dyn Write, raw_line: &str) -> Result<(), ShellError> {
        let words = lexer::split_words(raw_line);
        let Some((name, args)) = words.split_first() else {
            return Ok(());
        };
        for builtin in &self.builtins {
            if builtin.name() == name.as_str() {
                return builtin.execute(output, args, self.env.as_mut());
            }
        }
        external::run(name, args)
    }
}
