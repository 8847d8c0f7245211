use crate::builtin::Registry;
use crate::command::Flow;
use crate::external;
use crate::lexer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

/// The shell's read-tokenize-dispatch loop and the dispatch decision itself.
///
/// The interpreter owns the builtin [`Registry`], built once before the loop
/// starts. Each iteration reads one line, splits it into tokens, and routes
/// the first token to a builtin or to the external launcher; the returned
/// [`Flow`] decides whether to prompt again.
///
/// Example
/// ```
/// use mysh::Interpreter;
/// use mysh::command::Flow;
///
/// let sh = Interpreter::default();
/// let tokens = vec!["exit".to_string()];
/// let flow = sh.dispatch(&tokens, &mut std::io::stdout(), &mut std::io::stderr());
/// assert_eq!(flow, Flow::Stop);
/// ```
pub struct Interpreter {
    registry: Registry,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Route one token sequence to a builtin or an external launch.
    ///
    /// An empty sequence is a no-op that continues the loop. Otherwise the
    /// first token is looked up in the registry: a match runs that builtin
    /// with the remaining tokens, anything else is launched as an external
    /// program. A stream-write failure inside either path is reported here
    /// and mapped to [`Flow::Continue`] — dispatch never surfaces a fault.
    pub fn dispatch(
        &self,
        tokens: &[String],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Flow {
        let Some(name) = tokens.first() else {
            return Flow::Continue;
        };

        let result = match self.registry.lookup(name) {
            Some(builtin) => builtin.execute(&tokens[1..], stdout, stderr),
            None => external::launch(tokens, stderr),
        };

        match result {
            Ok(flow) => flow,
            Err(err) => {
                let _ = writeln!(stderr, "mysh: {}", err);
                Flow::Continue
            }
        }
    }

    /// Run the interactive loop until `exit` or end-of-input.
    ///
    /// Each accepted line goes into the editor's history before it is
    /// tokenized and dispatched. An interrupt discards the current line and
    /// prompts again; end-of-input ends the loop cleanly, exactly like an
    /// `exit`.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let tokens = lexer::split_line(&line);
                    let flow =
                        self.dispatch(&tokens, &mut io::stdout(), &mut io::stderr());
                    if flow == Flow::Stop {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("mysh: {}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
