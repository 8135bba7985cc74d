//! covgen CLI
//!
//! Writes the generated coverage program to stdout (or `-o <path>`).

use std::io::Write;

use covgen::{generate, init_tracing, parse_args, usage, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Generate(options)) => options,
        Ok(Command::Help) => {
            println!("{}", usage());
            return;
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    let program = match generate(&options) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let written = match &options.output {
        Some(path) => std::fs::write(path, &program),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(program.as_bytes()).and_then(|()| stdout.flush())
        }
    };
    if let Err(err) = written {
        eprintln!("error: cannot write output: {err}");
        std::process::exit(1);
    }
}
