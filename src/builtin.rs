use crate::env::Environment;
use crate::error::ShellError;
use crate::signal::ExitSignal;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Commands implemented directly by the shell process.
///
/// A builtin receives the session output stream, the raw argument words from
/// the tokenizer (empty words included), and the environment provider. It
/// reports failure through [`ShellError`]; the loop prints it and moves on.
pub(crate) trait Builtin {
    /// Canonical name of the command, e.g. "echo" or "cd".
    fn name(&self) -> &'static str;

    fn execute(
        &self,
        stdout: &mut dyn Write,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError>;
}

/// The full builtin table, probed in order by the dispatcher.
pub(crate) fn table(signal: ExitSignal) -> Vec<Box<dyn Builtin>> {
    vec![
        Box::new(Cd),
        Box::new(EnvVars),
        Box::new(Exit { signal }),
        Box::new(Echo),
        Box::new(Pwd),
        Box::new(Mkdir),
        Box::new(Rmdir),
        Box::new(Touch),
    ]
}

fn fs_err(command: &'static str, path: &Path, source: io::Error) -> ShellError {
    ShellError::Filesystem {
        command,
        path: path.display().to_string(),
        source,
    }
}

/// Run a filesystem operation over every operand, in order, stopping at the
/// first failure. Earlier successes stay applied; there is no rollback.
fn apply_operands(
    command: &'static str,
    args: &[String],
    mut op: impl FnMut(&Path) -> io::Result<()>,
) -> Result<(), ShellError> {
    if args.is_empty() {
        return Err(ShellError::MissingOperand { command });
    }
    for raw in args {
        let path = Path::new(raw);
        op(path).map_err(|e| fs_err(command, path, e))?;
    }
    Ok(())
}

/// Change the working directory, defaulting to the user's home directory.
struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        _stdout: &mut dyn Write,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        // Operands beyond the first are ignored.
        let target = match args.first() {
            Some(t) => PathBuf::from(t),
            None => env.home_dir().ok_or(ShellError::EnvironmentQuery {
                what: "home directory",
                reason: "not available".into(),
            })?,
        };
        env.set_current_dir(&target)
            .map_err(|e| fs_err("cd", &target, e))
    }
}

/// Print environment variables: all of them, or the values of the named ones.
struct EnvVars;

impl Builtin for EnvVars {
    fn name(&self) -> &'static str {
        "env"
    }

    fn execute(
        &self,
        stdout: &mut dyn Write,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        if args.is_empty() {
            for (key, value) in env.vars() {
                writeln!(stdout, "{key}={value}")?;
            }
            return Ok(());
        }
        for name in args {
            // An absent variable prints as an empty line.
            writeln!(stdout, "{}", env.var(name).unwrap_or_default())?;
        }
        Ok(())
    }
}

/// Request session termination via the exit signal.
struct Exit {
    signal: ExitSignal,
}

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        _stdout: &mut dyn Write,
        _args: &[String],
        _env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        self.signal.notify();
        Ok(())
    }
}

/// Write the arguments joined by single spaces, followed by a newline.
struct Echo;

impl Builtin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(
        &self,
        stdout: &mut dyn Write,
        args: &[String],
        _env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        writeln!(stdout, "{}", args.join(" "))?;
        Ok(())
    }
}

/// Print the current working directory.
struct Pwd;

impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(
        &self,
        stdout: &mut dyn Write,
        _args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        let cwd = env.current_dir().map_err(|e| ShellError::EnvironmentQuery {
            what: "working directory",
            reason: e.to_string(),
        })?;
        writeln!(stdout, "{}", cwd.display())?;
        Ok(())
    }
}

/// Create each operand as a directory with mode 0755.
struct Mkdir;

impl Builtin for Mkdir {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(
        &self,
        _stdout: &mut dyn Write,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        apply_operands("mkdir", args, |path| env.create_dir(path))
    }
}

/// Remove each operand, a file or an empty directory.
struct Rmdir;

impl Builtin for Rmdir {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(
        &self,
        _stdout: &mut dyn Write,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        apply_operands("rmdir", args, |path| env.remove(path))
    }
}

/// Create (or truncate) each operand as an empty file.
struct Touch;

impl Builtin for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(
        &self,
        _stdout: &mut dyn Write,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Result<(), ShellError> {
        apply_operands("touch", args, |path| env.create_file(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::fake::FakeEnvironment;
    use crate::signal;
    use std::path::PathBuf;

    fn words(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn echo_joins_arguments_with_single_spaces() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();
        Echo.execute(&mut out, &words(&["a", "b", "c"]), &mut env)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a b c\n");
    }

    #[test]
    fn echo_without_arguments_prints_bare_newline() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();
        Echo.execute(&mut out, &[], &mut env).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn echo_preserves_empty_words() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();
        Echo.execute(&mut out, &words(&["a", "", "b"]), &mut env)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a  b\n");
    }

    #[test]
    fn pwd_prints_current_dir() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();
        Pwd.execute(&mut out, &[], &mut env).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/work\n");
    }

    #[test]
    fn cd_changes_directory() {
        let mut env = FakeEnvironment::new();
        env.dirs.insert(PathBuf::from("/work/sub"));

        let mut out = Vec::new();
        Cd.execute(&mut out, &words(&["/work/sub"]), &mut env)
            .unwrap();
        assert_eq!(env.cwd, PathBuf::from("/work/sub"));
    }

    #[test]
    fn cd_without_operand_goes_home() {
        let mut env = FakeEnvironment::new();
        env.dirs.insert(PathBuf::from("/home/tester"));

        let mut out = Vec::new();
        Cd.execute(&mut out, &[], &mut env).unwrap();
        assert_eq!(env.cwd, PathBuf::from("/home/tester"));
    }

    #[test]
    fn cd_to_missing_directory_fails_and_keeps_cwd() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();
        let err = Cd
            .execute(&mut out, &words(&["/nowhere"]), &mut env)
            .unwrap_err();
        assert!(matches!(err, ShellError::Filesystem { command: "cd", .. }));
        assert_eq!(env.cwd, PathBuf::from("/work"));
    }

    #[test]
    fn env_prints_all_variables() {
        let mut env = FakeEnvironment::new();
        env.vars.push(("PATH".into(), "/bin".into()));
        env.vars.push(("LANG".into(), "C".into()));

        let mut out = Vec::new();
        EnvVars.execute(&mut out, &[], &mut env).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "PATH=/bin\nLANG=C\n");
    }

    #[test]
    fn env_prints_named_values_and_empty_for_absent() {
        let mut env = FakeEnvironment::new();
        env.vars.push(("PATH".into(), "/bin".into()));

        let mut out = Vec::new();
        EnvVars
            .execute(&mut out, &words(&["PATH", "NO_SUCH_VAR"]), &mut env)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/bin\n\n");
    }

    #[test]
    fn exit_sets_the_termination_signal() {
        let (tx, watch) = signal::exit_channel();
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();

        let exit = Exit { signal: tx };
        exit.execute(&mut out, &[], &mut env).unwrap();
        exit.execute(&mut out, &[], &mut env).unwrap();

        assert!(watch.is_set());
        assert!(out.is_empty());
    }

    #[test]
    fn mkdir_without_operands_reports_missing_operand() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();
        let err = Mkdir.execute(&mut out, &[], &mut env).unwrap_err();
        assert_eq!(err.to_string(), "mkdir: missing operand");
        assert!(env.dirs.len() == 1);
    }

    #[test]
    fn rmdir_and_touch_report_missing_operand_too() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();

        let err = Rmdir.execute(&mut out, &[], &mut env).unwrap_err();
        assert_eq!(err.to_string(), "rmdir: missing operand");

        let err = Touch.execute(&mut out, &[], &mut env).unwrap_err();
        assert_eq!(err.to_string(), "touch: missing operand");
        assert!(env.files.is_empty());
    }

    #[test]
    fn mkdir_stops_at_first_failure_keeping_earlier_dirs() {
        let mut env = FakeEnvironment::new();
        env.dirs.insert(PathBuf::from("d2"));

        let mut out = Vec::new();
        let err = Mkdir
            .execute(&mut out, &words(&["d1", "d2", "d3"]), &mut env)
            .unwrap_err();

        assert!(matches!(
            err,
            ShellError::Filesystem { command: "mkdir", .. }
        ));
        assert!(env.dirs.contains(Path::new("d1")));
        assert!(!env.dirs.contains(Path::new("d3")));
    }

    #[test]
    fn mkdir_then_rmdir_round_trips() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();

        Mkdir.execute(&mut out, &words(&["d"]), &mut env).unwrap();
        assert!(env.dirs.contains(Path::new("d")));

        Rmdir.execute(&mut out, &words(&["d"]), &mut env).unwrap();
        assert!(!env.dirs.contains(Path::new("d")));
    }

    #[test]
    fn touch_creates_each_file_in_order() {
        let mut env = FakeEnvironment::new();
        let mut out = Vec::new();

        Touch
            .execute(&mut out, &words(&["a", "b"]), &mut env)
            .unwrap();
        assert!(env.files.contains(Path::new("a")));
        assert!(env.files.contains(Path::new("b")));
    }
}
