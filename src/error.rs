//! Failures produced while unpacking the archive or running a command.
//!
//! The `Display` text of every [`ShellError`] is exactly the line shown in
//! the transcript, so callers never need to format errors themselves.

use std::io;
use std::path::PathBuf;

/// Coarse classification of a [`ShellError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Archive, directory, script or source file is missing.
    NotFound,
    /// The filesystem refused access.
    PermissionDenied,
    /// Wrong number or shape of arguments.
    Usage,
    /// Unknown command name.
    Unrecognized,
    /// Anything else, carried with its underlying description.
    Generic,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("ZIP file not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("Error extracting archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Startup script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Error reading startup script: {0}")]
    ScriptUnreadable(#[source] io::Error),

    /// Directory handed to `ls` (root-joined) or argument handed to `cd`.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Command not found: {0}")]
    Unrecognized(String),

    #[error("Error listing files: {0}")]
    Listing(#[source] io::Error),

    #[error("Error copying file: {0}")]
    Copying(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Where this error sits in the taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::ArchiveNotFound(_)
            | ShellError::ScriptNotFound(_)
            | ShellError::DirectoryNotFound(_)
            | ShellError::FileNotFound(_) => ErrorKind::NotFound,
            ShellError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            ShellError::Usage(_) => ErrorKind::Usage,
            ShellError::Unrecognized(_) => ErrorKind::Unrecognized,
            ShellError::Archive(_)
            | ShellError::ScriptUnreadable(_)
            | ShellError::Listing(_)
            | ShellError::Copying(_)
            | ShellError::Io(_) => ErrorKind::Generic,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_display() {
        let e = ShellError::Usage("cd <directory>");
        assert_eq!(e.to_string(), "Usage: cd <directory>");
        assert_eq!(e.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_not_found_displays() {
        let e = ShellError::DirectoryNotFound("nope".into());
        assert_eq!(e.to_string(), "Directory not found: nope");
        assert_eq!(e.kind(), ErrorKind::NotFound);

        let e = ShellError::ScriptNotFound(PathBuf::from("file_system/start.txt"));
        assert_eq!(e.to_string(), "Startup script not found: file_system/start.txt");
        assert_eq!(e.kind(), ErrorKind::NotFound);

        let e = ShellError::ArchiveNotFound(PathBuf::from("missing.zip"));
        assert_eq!(e.to_string(), "ZIP file not found: missing.zip");
    }

    #[test]
    fn test_unrecognized_keeps_full_line() {
        let e = ShellError::Unrecognized("foo bar".into());
        assert_eq!(e.to_string(), "Command not found: foo bar");
        assert_eq!(e.kind(), ErrorKind::Unrecognized);
    }

    #[test]
    fn test_generic_carries_details() {
        let e = ShellError::Copying(io::Error::other("disk full"));
        assert_eq!(e.to_string(), "Error copying file: disk full");
        assert_eq!(e.kind(), ErrorKind::Generic);
    }
}
