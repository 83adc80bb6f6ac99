//! `mmq-hl` command-line entry point.

use mmq_hl::{parse_options, run, Command};

fn main() {
    mmq_hl::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("mmq-hl {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let command = match Command::from_name(&args[1]) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let result = parse_options(&args[2..]).and_then(|options| run(command, &options));
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("mmq-hl: highlight mailing filter queries");
    println!();
    println!("Usage: mmq-hl <command> <file|-> [options]");
    println!();
    println!("Commands:");
    println!("  lex         Print one row per token");
    println!("  highlight   Print the query with ANSI colors");
    println!("  json        Print tokens as JSON");
    println!();
    println!("Options:");
    println!("  --dialect=<name>     Keyword preset: massmailer (default), mailing");
    println!("  --config=<path>      JSON tokenizer config (replaces --dialect)");
    println!("  --comments           Recognize # line comments");
    println!("  --no-comments        Treat # as an invalid character");
    println!("  --color=<mode>       highlight only: auto (default), always, never");
    println!();
    println!("Set RUST_LOG=debug to trace tokenization.");
}
