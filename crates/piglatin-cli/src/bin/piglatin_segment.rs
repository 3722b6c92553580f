// piglatin-segment: Show how input text is split into segments.
//
// Reads text from stdin and prints each segment with its kind and character
// span. Diagnostic tool for inspecting the tokenizer.
//
// Usage:
//   piglatin-segment [OPTIONS]
//
// Options:
//   -h, --help   Print help

use std::io::{self, Write};

use piglatin_core::segment::SegmentKind;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if piglatin_cli::wants_help(&args) {
        println!("piglatin-segment: Split text into word and whitespace segments.");
        println!();
        println!("Usage: piglatin-segment [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints segments with kinds:");
        println!("  WORD:       <text>");
        println!("  WHITESPACE: <text>");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let input = piglatin_cli::read_stdin().unwrap_or_else(|e| piglatin_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for seg in piglatin::segment(&input) {
        let kind_str = match seg.kind {
            SegmentKind::Word => "WORD",
            SegmentKind::Whitespace => "WHITESPACE",
        };
        let display_text = seg
            .text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t");
        let _ = writeln!(
            out,
            "{kind_str:11} [{:>4}..{:>4}]: {display_text}",
            seg.pos,
            seg.pos + seg.len()
        );
    }
}
