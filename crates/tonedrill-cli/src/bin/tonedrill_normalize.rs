// tonedrill-normalize: Print the canonical form of pinyin read from stdin.
//
// Reads one entry per line and prints its canonical numeric form
// (`Nǐ hǎo` -> `ni3 hao3`), or with --display the toneless display form.
//
// Usage:
//   tonedrill-normalize [OPTIONS]
//
// Options:
//   --display    Print the display form instead of numeric form
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use tonedrill_pinyin::{normalize_display, normalize_to_numeric};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tonedrill_cli::wants_help(&args) {
        println!("tonedrill-normalize: Print the canonical form of pinyin read from stdin.");
        println!();
        println!("Usage: tonedrill-normalize [OPTIONS]");
        println!();
        println!("Reads pinyin from stdin (one entry per line) and prints:");
        println!("  ni3 hao3    (numeric form, default)");
        println!("  ni hao      (display form, with --display)");
        println!();
        println!("Options:");
        println!("  --display    Print the display form instead of numeric form");
        println!("  -h, --help   Print this help");
        return;
    }

    tonedrill_cli::init_logging();
    let display = args.iter().any(|a| a == "--display");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        let normalized = if display {
            normalize_display(&line)
        } else {
            normalize_to_numeric(&line)
        };
        let _ = writeln!(out, "{normalized}");
    }
}
