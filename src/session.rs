use std::path::{Path, PathBuf};

/// State carried between commands of one interactive session.
///
/// The session contains:
/// - `root`: the directory the archive was unpacked into. Fixed for the whole session.
/// - `current_dir`: the cursor moved by `cd` and used to resolve `cd`/`cp` arguments.
/// - `should_exit`: a flag the surface checks to know when to terminate.
///
/// Paths are stored exactly as they were joined. Nothing is canonicalized, so
/// `cd sub` followed by `cd ..` leaves `root/sub/..` as the current directory.
#[derive(Debug, Clone)]
pub struct Session {
    root: PathBuf,
    current_dir: PathBuf,
    should_exit: bool,
}

impl Session {
    /// Start a session whose cursor sits at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            current_dir: root.clone(),
            root,
            should_exit: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Join `arg` onto the current directory.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        self.current_dir.join(arg)
    }

    /// Join `arg` onto the root directory, regardless of where the cursor is.
    pub fn resolve_from_root(&self, arg: &str) -> PathBuf {
        self.root.join(arg)
    }

    /// Move the cursor. The caller is responsible for checking the target exists.
    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }
}
