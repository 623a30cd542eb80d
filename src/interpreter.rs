use crate::command::{Command, CommandFactory, Output};
use crate::error::{Result, ShellError};
use crate::session::Session;
use std::path::PathBuf;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate, see `BuiltinCommand`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Line-at-a-time command interpreter over an unpacked directory.
///
/// The interpreter owns a [`Session`] and an ordered list of [`CommandFactory`]
/// objects. Each input line is offered to the factories in order and the first
/// one that claims it runs. It has no dependency on any display: every call to
/// [`Interpreter::execute`] returns the lines to show.
///
/// Example
/// ```
/// use vshell::Interpreter;
/// let mut sh = Interpreter::new("file_system");
/// let lines = sh.execute("foo bar");
/// assert_eq!(lines, vec!["> foo bar", "Command not found: foo bar"]);
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create an interpreter rooted at `root` with the builtin commands:
    /// `exit`, `ls`, `cd`, `date`, `cp`, `pwd`, matched in that order.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        use crate::builtin::*;
        Self::with_commands(
            Session::new(root),
            vec![
                Box::new(Factory::<Exit>::default()),
                Box::new(Factory::<Ls>::default()),
                Box::new(Factory::<Cd>::default()),
                Box::new(Factory::<Date>::default()),
                Box::new(Factory::<Cp>::default()),
                Box::new(Factory::<Pwd>::default()),
            ],
        )
    }

    /// Create an interpreter with a custom set of command factories.
    pub fn with_commands(session: Session, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { session, commands }
    }

    /// Run one line of input.
    ///
    /// The first returned line is always the echo `> <line>`; errors are
    /// rendered as a single trailing line and never escape.
    pub fn execute(&mut self, input: &str) -> Output {
        let command = Command::parse(input);
        log::debug!("dispatching {:?}", command.line);

        let mut lines = vec![format!("> {}", command.line)];
        match self.dispatch(&command) {
            Ok(output) => lines.extend(output),
            Err(e) => lines.push(e.to_string()),
        }
        lines
    }

    fn dispatch(&mut self, command: &Command) -> Result<Output> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(command) {
                return cmd.execute(&mut self.session);
            }
        }
        Err(ShellError::Unrecognized(command.line.clone()))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True once `exit` has run.
    pub fn should_exit(&self) -> bool {
        self.session.should_exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Interpreter) {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("a.txt"), b"abc").unwrap();
        let interp = Interpreter::new(dir.path());
        (dir, interp)
    }

    #[test]
    fn test_unknown_command_reports_full_line() {
        let (_dir, mut interp) = setup();
        assert_eq!(
            interp.execute("foo bar"),
            vec!["> foo bar", "Command not found: foo bar"]
        );
    }

    #[test]
    fn test_input_is_trimmed_before_echo() {
        let (_dir, mut interp) = setup();
        let lines = interp.execute("   foo  \n");
        assert_eq!(lines, vec!["> foo", "Command not found: foo"]);
    }

    #[test]
    fn test_empty_line_falls_through() {
        let (_dir, mut interp) = setup();
        assert_eq!(interp.execute(""), vec!["> ", "Command not found: "]);
        assert!(!interp.should_exit());
    }

    #[test]
    fn test_exact_commands_reject_arguments() {
        let (_dir, mut interp) = setup();
        assert_eq!(interp.execute("pwd x")[1], "Command not found: pwd x");
        assert_eq!(interp.execute("date now")[1], "Command not found: date now");
        assert_eq!(interp.execute("exit 0")[1], "Command not found: exit 0");
        assert!(!interp.should_exit());
    }

    #[test]
    fn test_exit_stops_the_session() {
        let (_dir, mut interp) = setup();
        assert_eq!(interp.execute("exit"), vec!["> exit"]);
        assert!(interp.should_exit());
    }

    #[test]
    fn test_prefix_commands_claim_longer_names() {
        let (dir, mut interp) = setup();
        // `lsx` is dispatched to ls and lists the current directory
        let lines = interp.execute("lsx");
        assert_eq!(lines[1], format!("Files in {}:", dir.path().display()));
        assert_eq!(lines[2..], ["docs".to_string()]);

        assert_eq!(interp.execute("cdrom")[1], "Usage: cd <directory>");
        assert_eq!(interp.execute("cpx")[1], "Usage: cp <source> <destination>");
    }

    #[test]
    fn test_cd_missing_then_pwd() {
        let (dir, mut interp) = setup();
        let before = interp.execute("pwd");
        assert_eq!(
            interp.execute("cd nope"),
            vec!["> cd nope", "Directory not found: nope"]
        );
        let after = interp.execute("pwd");
        assert_eq!(before, after);
        assert_eq!(after[1], format!("Current directory: {}", dir.path().display()));
    }

    #[test]
    fn test_relative_root_is_reported_as_given() {
        let mut interp = Interpreter::new("file_system");
        assert_eq!(interp.execute("cd nope")[1], "Directory not found: nope");
        assert_eq!(interp.execute("pwd")[1], "Current directory: file_system");
        assert_eq!(
            interp.execute("ls -l missing_dir")[1],
            "Directory not found: file_system/missing_dir"
        );
    }

    #[test]
    fn test_ls_after_cd_still_joins_root() {
        let (dir, mut interp) = setup();
        interp.execute("cd docs");
        let lines = interp.execute("ls -l missing_dir");
        assert_eq!(
            lines[1],
            format!(
                "Directory not found: {}",
                dir.path().join("missing_dir").display()
            )
        );

        let lines = interp.execute("ls docs");
        assert_eq!(lines[2..], ["a.txt".to_string()]);
    }

    #[test]
    fn test_cp_then_read_back() {
        let (dir, mut interp) = setup();
        interp.execute("cd docs");
        let lines = interp.execute("cp a.txt b.txt");
        assert_eq!(lines, vec!["> cp a.txt b.txt", "Copied a.txt to b.txt"]);
        assert_eq!(
            fs::read(dir.path().join("docs").join("b.txt")).unwrap(),
            fs::read(dir.path().join("docs").join("a.txt")).unwrap()
        );
    }

    #[test]
    fn test_custom_command_set() {
        let dir = TempDir::new().unwrap();
        let mut interp = Interpreter::with_commands(
            Session::new(dir.path()),
            vec![Box::new(Factory::<crate::builtin::Pwd>::default())],
        );
        assert_eq!(interp.execute("ls")[1], "Command not found: ls");
        assert!(interp.execute("pwd")[1].starts_with("Current directory: "));
    }
}
