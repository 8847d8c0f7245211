/// Loop-continuation signal threading the REPL's iterations together.
///
/// Every dispatch produces one of these; [`Flow::Stop`] is only ever produced
/// by the `exit` builtin (end-of-input stops the loop one level up, in the
/// driver itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep prompting for the next command.
    Continue,
    /// Leave the loop; the shell exits with a success status.
    Stop,
}
