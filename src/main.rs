use mysh::Interpreter;

fn main() {
    // The shell itself always exits successfully; a readline setup or IO
    // failure is reported but does not change the exit status.
    if let Err(err) = Interpreter::default().repl() {
        eprintln!("mysh: {}", err);
    }
}
