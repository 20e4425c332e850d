use minishell::Repl;
use minishell::env::OsEnvironment;
use std::io;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let mut repl = Repl::new(Box::new(OsEnvironment::new()));
    repl.run(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock());
}
