mod args;
mod cmd_say;

use std::io;
use std::process::ExitCode;

use winsay::Capabilities;

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let mut caps = Capabilities::system();
    let code = cmd_say::run(&argv, &mut caps, &mut io::stdout().lock(), &mut io::stderr());
    ExitCode::from(code)
}
