// tonedrill-progress: Show or reset saved progress for a study set.
//
// Usage:
//   tonedrill-progress [-d DATA_PATH] [-s SET] [OPTIONS]
//
// Options:
//   -d, --data-path PATH   Directory containing <set>.json word lists
//   -s, --set NAME         Study set (default: last used, else hsk3)
//   --list                 Also list known words
//   --reset                Forget every known word of the set
//   -h, --help             Print help

use std::io::{self, Write};

use tonedrill_study::{StudyOptions, StudySession};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = tonedrill_cli::parse_data_path(&args);
    let (set, args) = tonedrill_cli::parse_set(&args);

    if tonedrill_cli::wants_help(&args) {
        println!("tonedrill-progress: Show or reset saved progress for a study set.");
        println!();
        println!("Usage: tonedrill-progress [-d DATA_PATH] [-s SET] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing <set>.json word lists");
        println!("  -s, --set NAME         Study set (default: last used, else hsk3)");
        println!("  --list                 Also list known words");
        println!("  --reset                Forget every known word of the set");
        println!("  -h, --help             Print this help");
        return;
    }

    tonedrill_cli::init_logging();
    let list = args.iter().any(|a| a == "--list");
    let reset = args.iter().any(|a| a == "--reset");

    let store = tonedrill_cli::open_store();
    let set_id = tonedrill_cli::resolve_set(set, &store);
    let words = tonedrill_cli::load_words(data_path.as_deref(), &set_id)
        .unwrap_or_else(|e| tonedrill_cli::fatal(&e));

    let mut session = StudySession::open(store, set_id, words, StudyOptions::default());
    if reset {
        session.reset_progress();
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stats = session.stats();
    let _ = writeln!(
        out,
        "{}: {}/{} known ({}%)",
        session.set_id(),
        stats.known,
        stats.total,
        stats.percent
    );

    if list {
        for word in session.words().iter().filter(|w| session.is_known(&w.hanzi)) {
            let _ = writeln!(out, "  {}\t{}\t{}", word.hanzi, word.pinyin, word.english);
        }
    }
}
