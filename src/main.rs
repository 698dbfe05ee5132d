use befunge93::{load_file, ConsoleInspector, ConsolePort, Interpreter};
use std::env;
use std::process;

const USAGE: &str = "befunge93 is an interpreter for the Befunge-93 esoteric language.
Usage:
    befunge93 [flags] file.bf
Flags:
    --debug    pause the program and show the pointer and stack after every step";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let debug = args.iter().any(|a| a == "--debug");
    let filename = match args.iter().find(|a| !a.starts_with("--")) {
        Some(name) => name,
        None => {
            println!("{}", USAGE);
            return;
        }
    };

    let grid = match load_file(filename) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if debug {
        println!("program:\n{}", grid.render());
    }

    let mut engine = Interpreter::new(grid, ConsolePort::new());
    let result = if debug {
        let mut inspector = ConsoleInspector::new();
        engine.run_with_inspector(&mut inspector)
    } else {
        engine.run()
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}
