//! A toy shell over the contents of a zip archive.
//!
//! The archive is unpacked into a directory on disk and a handful of commands
//! (`ls`, `cd`, `pwd`, `cp`, `date`, `exit`) operate on it. There is no
//! isolation: the directory is an ordinary directory and `cd` may leave it.
//!
//! The main entry point is [`Interpreter`], which turns one input line into the
//! lines to display without touching any terminal. [`Surface`] wraps it in a
//! line editor and keeps the [`Transcript`](transcript::Transcript).

pub mod archive;
mod builtin;
pub mod command;
pub mod error;
mod interpreter;
pub mod script;
pub mod session;
mod surface;
pub mod transcript;

pub use interpreter::Interpreter;
pub use surface::{Flow, Surface};
