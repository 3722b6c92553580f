// piglatin-translate: Translate English text from stdin into Pig Latin.
//
// Reads text from stdin and prints the translation to stdout. Whitespace,
// capitalization, and trailing punctuation are preserved.
//
// Usage:
//   piglatin-translate [OPTIONS] [WORD...]
//
// Options:
//   -h, --help   Print help
//
// When WORD arguments are given, each is translated and printed on its own
// line instead of reading stdin.

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if piglatin_cli::wants_help(&args) {
        println!("piglatin-translate: Translate English text into Pig Latin.");
        println!();
        println!("Usage: piglatin-translate [OPTIONS] [WORD...]");
        println!();
        println!("With no arguments, reads text from stdin and prints the");
        println!("translation to stdout. With WORD arguments, translates each");
        println!("argument and prints one result per line.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.is_empty() {
        for word in &args {
            let _ = writeln!(out, "{}", piglatin::translate(word));
        }
        return;
    }

    let input = piglatin_cli::read_stdin().unwrap_or_else(|e| piglatin_cli::fatal(&e));
    let _ = write!(out, "{}", piglatin::translate(&input));
}
