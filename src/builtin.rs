use crate::command::{Command, CommandFactory, ExecutableCommand, Output};
use crate::error::{Result, ShellError};
use crate::interpreter::Factory;
use crate::session::Session;
use chrono::Local;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How a builtin claims an input line.
pub(crate) enum Matching {
    /// The whole trimmed line equals the command name.
    Exact,
    /// The trimmed line starts with the command name, so `lsx` is still `ls`.
    Prefix,
}

impl Matching {
    fn matches(&self, name: &str, line: &str) -> bool {
        match self {
            Matching::Exact => line == name,
            Matching::Prefix => line.starts_with(name),
        }
    }
}

/// Built-in commands known to the shell at compile time.
///
/// Arguments are taken positionally from the whitespace-split line; each
/// builtin decides for itself which tokens it looks at and ignores the rest.
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the command, e.g. "ls" or "cd".
    fn name() -> &'static str;

    fn matching() -> Matching {
        Matching::Exact
    }

    /// Build the command from the tokens following the name.
    fn from_args(args: &[String]) -> Result<Self>;

    /// Executes the command against the session, returning the lines to show.
    fn execute(self, session: &mut Session) -> Result<Output>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, session: &mut Session) -> Result<Output> {
        <T as BuiltinCommand>::execute(*self, session)
    }
}

/// Stand-in for a builtin whose arguments were rejected.
struct InvalidArgs(ShellError);

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, _session: &mut Session) -> Result<Output> {
        Err(self.0)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, command: &Command) -> Option<Box<dyn ExecutableCommand>> {
        if T::matching().matches(T::name(), &command.line) {
            Some(match T::from_args(&command.args) {
                Ok(cmd) => Box::new(cmd),
                Err(e) => Box::new(InvalidArgs(e)),
            })
        } else {
            None
        }
    }
}

/// Close the shell.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn from_args(_args: &[String]) -> Result<Self> {
        Ok(Exit)
    }

    fn execute(self, session: &mut Session) -> Result<Output> {
        log::debug!("exit requested");
        session.request_exit();
        Ok(Vec::new())
    }
}

/// List a directory, optionally with sizes.
///
/// Without a path the current directory is listed. A path is joined onto the
/// session root, not onto the current directory.
pub struct Ls {
    pub long: bool,
    pub path: Option<String>,
}

impl BuiltinCommand for Ls {
    fn name() -> &'static str {
        "ls"
    }

    fn matching() -> Matching {
        Matching::Prefix
    }

    fn from_args(args: &[String]) -> Result<Self> {
        let mut args = args.iter();
        Ok(match args.next().map(String::as_str) {
            None => Ls {
                long: false,
                path: None,
            },
            Some("-l") => Ls {
                long: true,
                path: args.next().cloned(),
            },
            Some(path) => Ls {
                long: false,
                path: Some(path.to_string()),
            },
        })
    }

    fn execute(self, session: &mut Session) -> Result<Output> {
        let directory = match &self.path {
            Some(path) => session.resolve_from_root(path),
            None => session.current_dir().to_path_buf(),
        };
        let listing = if self.long {
            list_files_long(&directory)
        } else {
            list_files(&directory)
        };
        listing.map_err(|e| listing_error(&directory, e))
    }
}

fn read_entries(directory: &Path) -> io::Result<Vec<OsString>> {
    fs::read_dir(directory)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect()
}

fn list_files(directory: &Path) -> io::Result<Output> {
    let entries = read_entries(directory)?;
    let mut out = Vec::with_capacity(entries.len() + 1);
    out.push(format!("Files in {}:", directory.display()));
    out.extend(entries.iter().map(|name| name.to_string_lossy().into_owned()));
    Ok(out)
}

fn list_files_long(directory: &Path) -> io::Result<Output> {
    let entries = read_entries(directory)?;
    let mut out = Vec::with_capacity(entries.len() + 1);
    out.push(format!("Detailed files in {}:", directory.display()));
    for name in entries {
        // follows symlinks, a dangling one fails the whole listing
        let size = fs::metadata(directory.join(&name))?.len();
        out.push(format!("{}\tSize: {} bytes", name.to_string_lossy(), size));
    }
    Ok(out)
}

fn listing_error(directory: &Path, e: io::Error) -> ShellError {
    log::warn!("listing {} failed: {}", directory.display(), e);
    let directory = directory.display().to_string();
    match e.kind() {
        io::ErrorKind::NotFound => ShellError::DirectoryNotFound(directory),
        io::ErrorKind::PermissionDenied => ShellError::PermissionDenied(directory),
        _ => ShellError::Listing(e),
    }
}

/// Move the current directory. The argument is joined onto the current
/// directory and kept as joined.
pub struct Cd {
    pub target: String,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn matching() -> Matching {
        Matching::Prefix
    }

    fn from_args(args: &[String]) -> Result<Self> {
        match args.first() {
            Some(target) => Ok(Cd {
                target: target.clone(),
            }),
            None => Err(ShellError::Usage("cd <directory>")),
        }
    }

    fn execute(self, session: &mut Session) -> Result<Output> {
        let candidate = session.resolve(&self.target);
        if !candidate.is_dir() {
            return Err(ShellError::DirectoryNotFound(self.target));
        }
        log::debug!("cd: {} -> {}", session.current_dir().display(), candidate.display());
        session.set_current_dir(candidate);
        Ok(vec![format!(
            "Changed directory to: {}",
            session.current_dir().display()
        )])
    }
}

/// Print the local date and time.
pub struct Date;

impl BuiltinCommand for Date {
    fn name() -> &'static str {
        "date"
    }

    fn from_args(_args: &[String]) -> Result<Self> {
        Ok(Date)
    }

    fn execute(self, _session: &mut Session) -> Result<Output> {
        let now = Local::now().format(DATE_FORMAT);
        Ok(vec![format!("Current date and time: {now}")])
    }
}

/// Copy one file, both paths relative to the current directory.
///
/// A destination naming an existing directory receives the file under the
/// source's name. Permissions are copied along with the bytes.
pub struct Cp {
    pub source: String,
    pub destination: String,
}

impl BuiltinCommand for Cp {
    fn name() -> &'static str {
        "cp"
    }

    fn matching() -> Matching {
        Matching::Prefix
    }

    fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [source, destination] => Ok(Cp {
                source: source.clone(),
                destination: destination.clone(),
            }),
            _ => Err(ShellError::Usage("cp <source> <destination>")),
        }
    }

    fn execute(self, session: &mut Session) -> Result<Output> {
        let source_path = session.resolve(&self.source);
        let destination_path = copy_target(&source_path, session.resolve(&self.destination));

        // fs::copy truncates the destination before reading the source
        if is_same_file(&source_path, &destination_path) {
            log::warn!("cp: {} is its own destination", source_path.display());
            return Err(ShellError::Copying(io::Error::other(format!(
                "'{}' and '{}' are the same file",
                source_path.display(),
                destination_path.display()
            ))));
        }

        match fs::copy(&source_path, &destination_path) {
            Ok(bytes) => {
                log::debug!(
                    "cp: {} -> {} ({} bytes)",
                    source_path.display(),
                    destination_path.display(),
                    bytes
                );
                Ok(vec![format!("Copied {} to {}", self.source, self.destination)])
            }
            Err(e) => {
                log::warn!("copying {} failed: {}", source_path.display(), e);
                Err(match e.kind() {
                    io::ErrorKind::NotFound => ShellError::FileNotFound(self.source),
                    io::ErrorKind::PermissionDenied => ShellError::PermissionDenied(self.source),
                    _ => ShellError::Copying(e),
                })
            }
        }
    }
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}

fn copy_target(source: &Path, destination: PathBuf) -> PathBuf {
    match source.file_name() {
        Some(name) if destination.is_dir() => destination.join(name),
        _ => destination,
    }
}

/// Print the current directory.
pub struct Pwd;

impl BuiltinCommand for Pwd {
    fn name() -> &'static str {
        "pwd"
    }

    fn from_args(_args: &[String]) -> Result<Self> {
        Ok(Pwd)
    }

    fn execute(self, session: &mut Session) -> Result<Output> {
        Ok(vec![format!(
            "Current directory: {}",
            session.current_dir().display()
        )])
    }
}
