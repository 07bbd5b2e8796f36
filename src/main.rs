use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::{command, value_parser, Arg};

mod code;
mod error;
mod interpret;
mod io;
mod jump;
mod tape;

use code::load_code;
use interpret::Interpreter;


fn main() {
    let argv = command!()
        .next_line_help(true)
        .arg(Arg::new("src_file")
            .value_name("SRC_FILE")
            .help("The brainfuck file.")
            .required(true)
            .value_parser(value_parser!(PathBuf)))
        .get_matches();

    let src_file = argv.get_one::<PathBuf>("src_file").unwrap();

    let code = match fs::read_to_string(src_file) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error reading the Brainfuck file: {}", err);
            exit(1);
        },
    };
    let program = load_code(&code);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    let mut interpreter = match Interpreter::new(&program, stdin, stdout) {
        Ok(interpreter) => interpreter,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        },
    };
    if let Err(err) = interpreter.run() {
        eprintln!("{}", err);
        exit(1);
    }
}
