use std::{env, process, time::Instant};

use forth::{display_error, lexer::lexer::lex_file};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];

    let start = Instant::now();

    let tokens = match lex_file(file_path) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error);
            process::exit(1);
        }
    };

    println!("Lexed in {:?}", start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }
}
