use crate::error::Result;
use crate::session::Session;

/// Lines produced by a successful command, in display order.
pub type Output = Vec<String>;

/// One line of input, split into a name token and argument tokens.
///
/// `line` keeps the whole trimmed input because dispatch matches on its prefix
/// and `Command not found` reports it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub line: String,
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Trim `input` and split it on whitespace.
    pub fn parse(input: &str) -> Self {
        let line = input.trim().to_string();
        let mut tokens = line.split_whitespace().map(str::to_string);
        let name = tokens.next().unwrap_or_default();
        let args = tokens.collect();
        Self { line, name, args }
    }
}

/// Object-safe trait for any command the interpreter can run.
///
/// Implemented for every builtin through a blanket impl.
pub trait ExecutableCommand {
    /// Runs the command against the session.
    fn execute(self: Box<Self>, session: &mut Session) -> Result<Output>;
}

/// Factory that tries to create a command from a parsed input line.
///
/// Returns `None` when the factory doesn't recognize the line.
pub trait CommandFactory {
    fn try_create(&self, command: &Command) -> Option<Box<dyn ExecutableCommand>>;
}
