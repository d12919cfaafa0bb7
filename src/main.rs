use std::env;
use std::io;
use std::io::Write;
use std::process::exit;

use error::Collector;
use error::LinePrinter;
use mimalloc::MiMalloc;
use scanner::Scanner;

mod error;
mod scanner;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let args = env::args().collect::<Vec<String>>();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: finlang [script]");
            exit(64)
        }
    }
}

fn repl() {
    let mut buf = String::new();
    loop {
        buf.clear();
        print!("finlang > ");
        io::stdout().flush().unwrap();
        if io::stdin().read_line(&mut buf).unwrap() == 0 {
            break;
        }
        let mut diagnostics = Collector::default();
        for token in Scanner::new(&buf, &mut diagnostics).scan_tokens() {
            println!("{token}");
        }
        for diagnostic in diagnostics.diagnostics {
            eprintln!("{diagnostic}");
        }
    }
}

fn run_file(path: &str) {
    let Ok(source) = std::fs::read_to_string(path) else {
        eprintln!("Could not read file {path}");
        exit(74);
    };
    let mut reporter = LinePrinter::default();
    for token in Scanner::new(&source, &mut reporter).scan_tokens() {
        println!("{token}");
    }
    if reporter.had_error() {
        exit(65);
    }
}
