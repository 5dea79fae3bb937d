// tonedrill-check: Grade pinyin answers against references.
//
// Reads `answer<TAB>reference` lines from stdin and prints one verdict each:
//   C: answer    (correct, tones matched)
//   T: answer    (correct, accepted without comparing every tone)
//   W: answer    (wrong; the reference follows)
//
// Usage:
//   tonedrill-check [OPTIONS]
//
// Options:
//   --strict         Require matching tones on every syllable
//   --ignore-tones   Ignore tones entirely
//   -h, --help       Print help

use std::io::{self, BufRead, Write};

use tonedrill_pinyin::{Grade, grade};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tonedrill_cli::wants_help(&args) {
        println!("tonedrill-check: Grade pinyin answers against references.");
        println!();
        println!("Usage: tonedrill-check [OPTIONS]");
        println!();
        println!("Reads `answer<TAB>reference` lines from stdin. Prints:");
        println!("  C: answer    (correct)");
        println!("  T: answer    (correct, tones not fully compared)");
        println!("  W: answer    (wrong, followed by the reference)");
        println!();
        println!("Options:");
        println!("  --strict         Require matching tones on every syllable");
        println!("  --ignore-tones   Ignore tones entirely");
        println!("  -h, --help       Print this help");
        return;
    }

    tonedrill_cli::init_logging();
    let strictness = tonedrill_cli::strictness_from_args(&args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some((answer, reference)) = line.split_once('\t') else {
            eprintln!("line {}: expected answer<TAB>reference", lineno + 1);
            continue;
        };

        let answer = answer.trim();
        match grade(answer, reference, strictness) {
            Grade::Exact => {
                let _ = writeln!(out, "C: {answer}");
            }
            Grade::ToneInsensitive => {
                let _ = writeln!(out, "T: {answer}");
            }
            Grade::Wrong => {
                let _ = writeln!(out, "W: {answer} (expected {})", reference.trim());
            }
        }
    }
}
