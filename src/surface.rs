use crate::command::Output;
use crate::interpreter::Interpreter;
use crate::script;
use crate::transcript::Transcript;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, Write};
use std::path::Path;

const PROMPT: &str = "$ ";

/// What the surface should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Thin adapter between a line editor and the [`Interpreter`].
///
/// Every line the interpreter produces is written to the output and appended
/// to the [`Transcript`]. [`Surface::submit`] accepts any writer so the
/// surface can be driven without a terminal.
pub struct Surface {
    interpreter: Interpreter,
    transcript: Transcript,
}

impl Surface {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            transcript: Transcript::new(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Handle one submitted line.
    pub fn submit(&mut self, input: &str, out: &mut dyn Write) -> io::Result<Flow> {
        let lines = self.interpreter.execute(input);
        self.show(lines, out)?;
        Ok(self.flow())
    }

    /// Replay `path` as if each line had been submitted.
    pub fn run_startup_script(&mut self, path: &Path, out: &mut dyn Write) -> io::Result<Flow> {
        let lines = script::run(&mut self.interpreter, path);
        self.show(lines, out)?;
        Ok(self.flow())
    }

    fn show(&mut self, lines: Output, out: &mut dyn Write) -> io::Result<()> {
        for line in lines {
            writeln!(out, "{line}")?;
            self.transcript.append(line);
        }
        out.flush()
    }

    fn flow(&self) -> Flow {
        if self.interpreter.should_exit() {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    /// Read-Eval-Print Loop on the controlling terminal.
    ///
    /// Returns after `exit`, end of input or an interrupt.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = io::stdout();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if self.submit(&line, &mut stdout)? == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    log::debug!("end of input");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}
