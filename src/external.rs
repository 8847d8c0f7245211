use crate::command::Flow;
use anyhow::Result;
use std::io::Write;
use std::process::Command;

/// Launch an external program and wait for it to terminate.
///
/// `tokens[0]` names the program; the rest become its arguments. An empty
/// token sequence launches nothing and simply continues. The child
/// inherits the shell's standard streams, environment, and working directory,
/// and the program is resolved through the platform's normal `PATH` search.
///
/// Every failure is recovered locally: an unknown or non-executable program
/// and a failed process creation each produce one diagnostic line on `stderr`
/// and the shell keeps going. The child's exit status is observed by the wait
/// but deliberately not reported or propagated.
pub(crate) fn launch(tokens: &[String], stderr: &mut dyn Write) -> Result<Flow> {
    let Some(program) = tokens.first() else {
        return Ok(Flow::Continue);
    };

    let mut child = match Command::new(program).args(&tokens[1..]).spawn() {
        Ok(child) => child,
        Err(err) => {
            writeln!(stderr, "mysh: {}: {}", program, err)?;
            return Ok(Flow::Continue);
        }
    };

    // wait() returns only once the child has exited or been killed by a
    // signal; a merely-stopped child does not wake it up. It also reaps the
    // child, so no zombie is left behind.
    if let Err(err) = child.wait() {
        writeln!(stderr, "mysh: {}: {}", program, err)?;
    }

    Ok(Flow::Continue)
}
