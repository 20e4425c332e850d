use std::env as stdenv;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Abstraction over the parts of the process environment the shell touches.
///
/// Builtins and the prompt renderer go through this trait instead of calling
/// `std::env`/`std::fs` directly, so unit tests can substitute an in-memory
/// provider and avoid mutating the real working directory.
///
/// Lookups are performed at call time, never cached: the working directory
/// changes under `cd`, and the username can change under an `su`-like
/// external command.
pub trait Environment {
    /// Name of the user owning the session, as shown in the prompt.
    fn user_name(&self) -> io::Result<String>;

    /// The working directory commands run in.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Change the working directory; relative paths resolve against the
    /// current one.
    fn set_current_dir(&mut self, path: &Path) -> io::Result<()>;

    /// The user's home directory, the `cd` fallback when no operand is given.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Value of a single environment variable.
    fn var(&self, key: &str) -> Option<String>;

    /// All environment variables as key/value pairs.
    fn vars(&self) -> Vec<(String, String)>;

    /// Create one directory with permission mode `0755`.
    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Remove a file or an empty directory, whichever `path` is.
    fn remove(&mut self, path: &Path) -> io::Result<()>;

    /// Create `path` as an empty regular file, truncating an existing one.
    fn create_file(&mut self, path: &Path) -> io::Result<()>;
}

/// The real process environment.
#[derive(Debug, Default)]
pub struct OsEnvironment;

impl OsEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for OsEnvironment {
    fn user_name(&self) -> io::Result<String> {
        stdenv::var("USER")
            .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("USER: {e}")))
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        stdenv::current_dir()
    }

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        stdenv::set_current_dir(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn var(&self, key: &str) -> Option<String> {
        stdenv::var(key).ok()
    }

    fn vars(&self) -> Vec<(String, String)> {
        stdenv::vars().collect()
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(path)
    }

    fn remove(&mut self, path: &Path) -> io::Result<()> {
        // Mirrors Go's os.Remove: unlink first, then try removing an empty
        // directory, keeping whichever error is the more relevant one.
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(file_err) => match fs::remove_dir(path) {
                Ok(()) => Ok(()),
                Err(dir_err) if file_err.kind() == io::ErrorKind::IsADirectory => Err(dir_err),
                Err(_) => Err(file_err),
            },
        }
    }

    fn create_file(&mut self, path: &Path) -> io::Result<()> {
        fs::File::create(path).map(drop)
    }
}
