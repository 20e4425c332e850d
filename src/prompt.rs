use crate::env::Environment;
use crate::error::ShellError;
use std::io::Write;

/// Write the interactive prompt: `<cwd> [<username>] $ ` with a trailing
/// space and no newline.
///
/// Username and working directory are resolved on every call; neither is
/// cached because both can change mid-session. The output is flushed so the
/// prompt is visible before the blocking read that follows.
pub(crate) fn render(out: &mut dyn Write, env: &dyn Environment) -> Result<(), ShellError> {
    let user = env
        .user_name()
        .map_err(|e| ShellError::EnvironmentQuery {
            what: "username",
            reason: e.to_string(),
        })?;
    let cwd = env
        .current_dir()
        .map_err(|e| ShellError::EnvironmentQuery {
            what: "working directory",
            reason: e.to_string(),
        })?;

    write!(out, "{} [{}] $ ", cwd.display(), user)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::env::fake::FakeEnvironment;
    use crate::error::ShellError;

    #[test]
    fn renders_cwd_and_username() {
        let env = FakeEnvironment::new();
        let mut out = Vec::new();
        render(&mut out, &env).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/work [tester] $ ");
    }

    #[test]
    fn failed_user_lookup_writes_nothing() {
        let mut env = FakeEnvironment::new();
        env.user = String::new();

        let mut out = Vec::new();
        let err = render(&mut out, &env).unwrap_err();
        assert!(matches!(
            err,
            ShellError::EnvironmentQuery { what: "username", .. }
        ));
        assert!(out.is_empty());
    }
}
