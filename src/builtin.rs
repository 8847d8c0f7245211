use crate::command::Flow;
use anyhow::Result;
use std::io::Write;

/// Names of all builtins, in registration order. Shared between the registry
/// and `help`, which lists them.
pub(crate) const BUILTIN_NAMES: [&str; 3] = ["cd", "help", "exit"];

/// A command executed in-process instead of being launched as a child.
///
/// Builtins receive the tokens following the command name, write any output to
/// the provided streams, and report whether the REPL should keep going. Usage
/// and OS errors are written to `stderr` and recovered locally; an `Err`
/// return means the stream itself failed.
pub(crate) trait Builtin {
    /// Canonical name of the command, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Executes the command with the arguments that followed its name.
    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow>;
}

/// The fixed set of builtin commands, constructed once before the loop starts
/// and never mutated afterwards.
pub(crate) struct Registry {
    builtins: Vec<Box<dyn Builtin>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            builtins: vec![Box::new(Cd), Box::new(Help), Box::new(Exit)],
        }
    }

    /// Exact, case-sensitive lookup; no partial matches, no aliases.
    pub(crate) fn lookup(&self, name: &str) -> Option<&dyn Builtin> {
        self.builtins
            .iter()
            .find(|b| b.name() == name)
            .map(Box::as_ref)
    }

    pub(crate) fn len(&self) -> usize {
        self.builtins.len()
    }
}

/// `cd <path>`: change the process's working directory.
pub(crate) struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        args: &[String],
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow> {
        match args.first() {
            None => writeln!(stderr, "mysh: expected argument to \"cd\"")?,
            Some(target) => {
                if let Err(err) = std::env::set_current_dir(target) {
                    writeln!(stderr, "mysh: cd: {}: {}", target, err)?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}

/// `help`: print the usage banner and the list of builtins.
pub(crate) struct Help;

impl Builtin for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(
        &self,
        _args: &[String],
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<Flow> {
        writeln!(stdout, "mysh: a minimal shell")?;
        writeln!(stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(stdout, "The following are built in:")?;
        for name in BUILTIN_NAMES {
            writeln!(stdout, "  {}", name)?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

/// `exit`: no side effect of its own, just tells the loop to stop.
pub(crate) struct Exit;

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        _args: &[String],
        _stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<Flow> {
        Ok(Flow::Stop)
    }
}
