//! A tiny interactive shell.
//!
//! The shell repeatedly prompts for a line, splits it into whitespace-separated
//! tokens, and either runs one of the built-in commands (`cd`, `help`, `exit`)
//! in-process or launches an external program and waits for it to finish.
//! There is no pipeline syntax, no redirection, and no quoting; the only state
//! carried between iterations is the process's current working directory.
//!
//! The main entry point is [`Interpreter`], which owns the builtin registry
//! and drives the read-tokenize-dispatch loop.

mod builtin;
pub mod command;
mod external;
mod interpreter;
pub mod lexer;

pub use interpreter::Interpreter;
