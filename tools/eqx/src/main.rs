//! `eqx` CLI
//!
//! Prints the declared name of each line given on the command line, or of
//! each stdin line when none are given.

use std::io::{self, BufRead};

use eqx::commands::{extract_lines, Mode};

fn main() {
    eqx::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let command = &args[1];
    if matches!(command.as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let Some(mode) = Mode::from_command(command) else {
        eprintln!("error: unknown command '{command}'");
        eprintln!();
        print_usage();
        std::process::exit(2);
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let result = if args.len() > 2 {
        extract_lines(mode, &args[2..], &mut out, &mut err)
    } else {
        let lines = match io::stdin().lock().lines().collect::<io::Result<Vec<_>>>() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("error: failed to read stdin: {e}");
                std::process::exit(1);
            }
        };
        extract_lines(mode, lines, &mut out, &mut err)
    };

    match result {
        Ok(summary) if summary.is_success() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: eqx <command> [LINE...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  type    Name declared by a `struct`/`enum` line");
    eprintln!("  var     Name declared by a `let`/`var` line");
    eprintln!("  decl    Either of the above");
    eprintln!();
    eprintln!("Reads lines from stdin when no LINE is given.");
    eprintln!("Set RUST_LOG=eqx_decl=trace to log each extraction.");
}
