use crate::dispatch::Dispatcher;
use crate::env::Environment;
use crate::error::ShellError;
use crate::prompt;
use crate::signal::{self, ExitWatch};
use std::io::{self, BufRead, Write};

/// Outcome of one loop iteration.
enum Step {
    Continue,
    Exit,
}

/// The interactive read-eval loop.
///
/// Each iteration checks the termination signal, renders the prompt, reads
/// one line, and dispatches it. Every error raised along the way is written
/// to the error stream and swallowed; only the `exit` builtin ends the
/// session.
pub struct Repl {
    dispatcher: Dispatcher,
    exit: ExitWatch,
}

impl Repl {
    pub fn new(env: Box<dyn Environment>) -> Self {
        let (tx, watch) = signal::exit_channel();
        Self {
            dispatcher: Dispatcher::new(env, tx),
            exit: watch,
        }
    }

    /// Run until the `exit` builtin signals termination, then print
    /// `exiting gracefully...` and return.
    ///
    /// End of input is treated like any other read error: it is reported and
    /// the loop keeps going, so a closed `input` makes the session spin on
    /// the error stream instead of shutting down. Reporting writes are
    /// fire-and-forget; a broken stream cannot end the session either.
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        err_output: &mut dyn Write,
    ) {
        loop {
            if let Step::Exit = self.step(input, output, err_output) {
                return;
            }
        }
    }

    fn step(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        err_output: &mut dyn Write,
    ) -> Step {
        if self.exit.is_set() {
            let _ = writeln!(output, "exiting gracefully...");
            return Step::Exit;
        }

        if let Err(e) = prompt::render(output, self.dispatcher.env()) {
            let _ = writeln!(err_output, "{e}");
            return Step::Continue;
        }

        let mut line = String::new();
        if let Err(e) = read_line(input, &mut line) {
            let _ = writeln!(err_output, "{e}");
            return Step::Continue;
        }

        if let Err(e) = self.dispatcher.dispatch(output, &line) {
            let _ = writeln!(err_output, "{e}");
        }
        Step::Continue
    }
}

/// Read one `\n`-terminated line into `buf`.
///
/// End of stream, including one reached in the middle of a line, counts as a
/// read failure; the partial data is discarded by the caller.
fn read_line(input: &mut dyn BufRead, buf: &mut String) -> Result<(), ShellError> {
    match input.read_line(buf) {
        Ok(n) if n == 0 || !buf.ends_with('\n') => Err(ShellError::InputRead(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ))),
        Ok(_) => Ok(()),
        Err(e) => Err(ShellError::InputRead(e)),
    }
}
