// tonedrill-study: Drill a word list on the terminal.
//
// Typed recall by default: shows the characters and grades the pinyin you
// type. With --quiz, shows pinyin and gloss and asks for the characters out
// of several choices. Correct answers are saved as known words.
//
// Usage:
//   tonedrill-study [-d DATA_PATH] [-s SET] [OPTIONS]
//
// Options:
//   -d, --data-path PATH   Directory containing <set>.json word lists
//   -s, --set NAME         Study set to open (default: last used, else hsk3)
//   -n, --rounds N         Stop after N rounds (default: until end of input)
//   --quiz                 Multiple-choice mode
//   --strict               Require matching tones
//   --ignore-tones         Ignore tones entirely
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use tonedrill_study::{StudyOptions, StudySession, TypingOutcome};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = tonedrill_cli::parse_data_path(&args);
    let (set, args) = tonedrill_cli::parse_set(&args);
    let (rounds, args) = tonedrill_cli::parse_value_arg(&args, "rounds", "n");

    if tonedrill_cli::wants_help(&args) {
        println!("tonedrill-study: Drill a word list on the terminal.");
        println!();
        println!("Usage: tonedrill-study [-d DATA_PATH] [-s SET] [OPTIONS]");
        println!();
        println!("Typed recall by default; answer with tone marks, tone numbers or");
        println!("no tones. An empty line skips the word. End input to stop.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing <set>.json word lists");
        println!("  -s, --set NAME         Study set to open (default: last used, else hsk3)");
        println!("  -n, --rounds N         Stop after N rounds");
        println!("  --quiz                 Multiple-choice mode");
        println!("  --strict               Require matching tones");
        println!("  --ignore-tones         Ignore tones entirely");
        println!("  -h, --help             Print this help");
        return;
    }

    tonedrill_cli::init_logging();

    let rounds = rounds.map(|n| {
        n.parse::<usize>()
            .unwrap_or_else(|_| tonedrill_cli::fatal(&format!("invalid round count: {n}")))
    });
    let quiz_mode = args.iter().any(|a| a == "--quiz");
    let options = StudyOptions {
        strictness: tonedrill_cli::strictness_from_args(&args),
        ..StudyOptions::default()
    };

    let store = tonedrill_cli::open_store();
    let set_id = tonedrill_cli::resolve_set(set, &store);
    let words = tonedrill_cli::load_words(data_path.as_deref(), &set_id)
        .unwrap_or_else(|e| tonedrill_cli::fatal(&e));
    if words.is_empty() {
        tonedrill_cli::fatal(&format!("word list for {set_id} is empty"));
    }

    let mut session = StudySession::open(store, set_id, words, options);
    let mut rng = rand::rng();

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut played = 0;
    while rounds.is_none_or(|n| played < n) {
        let prompt_ok = if quiz_mode {
            ask_quiz(&mut session, &mut rng, &mut out)
        } else {
            ask_typing(&mut session, &mut rng, &mut out)
        };
        if !prompt_ok {
            break;
        }

        let Some(line) = tonedrill_cli::next_line(&mut input) else {
            break;
        };

        if quiz_mode {
            report_quiz(&mut session, &line, &mut out);
        } else {
            report_typing(&mut session, &line, &mut out);
        }
        played += 1;
    }

    let stats = session.stats();
    let _ = writeln!(
        out,
        "\n{}: {}/{} known ({}%)",
        session.set_id(),
        stats.known,
        stats.total,
        stats.percent
    );
}

fn ask_typing<S, R>(session: &mut StudySession<S>, rng: &mut R, out: &mut impl Write) -> bool
where
    S: tonedrill_study::KeyValueStore,
    R: rand::Rng + ?Sized,
{
    let Some(round) = session.new_typing(rng) else {
        return false;
    };
    let _ = write!(out, "{} > ", round.word().hanzi);
    let _ = out.flush();
    true
}

fn report_typing<S>(session: &mut StudySession<S>, line: &str, out: &mut impl Write)
where
    S: tonedrill_study::KeyValueStore,
{
    let english = session
        .typing()
        .map(|r| r.word().english.clone())
        .unwrap_or_default();
    match session.check_typing(line) {
        Some(TypingOutcome::Correct(_)) => {
            let _ = writeln!(out, "  correct ({english})");
        }
        Some(TypingOutcome::Incorrect { expected }) => {
            let _ = writeln!(out, "  answer: {expected} ({english})");
        }
        Some(TypingOutcome::Empty) => {
            let _ = writeln!(out, "  skipped");
        }
        None => {}
    }
}

fn ask_quiz<S, R>(session: &mut StudySession<S>, rng: &mut R, out: &mut impl Write) -> bool
where
    S: tonedrill_study::KeyValueStore,
    R: rand::Rng + ?Sized,
{
    let Some(round) = session.new_quiz(rng) else {
        return false;
    };
    let _ = writeln!(out, "{}", round.prompt());
    for (i, choice) in round.choices().iter().enumerate() {
        let _ = writeln!(out, "  {}) {}", i + 1, choice.hanzi);
    }
    let _ = write!(out, "> ");
    let _ = out.flush();
    true
}

fn report_quiz<S>(session: &mut StudySession<S>, line: &str, out: &mut impl Write)
where
    S: tonedrill_study::KeyValueStore,
{
    let choice = match line.trim().parse::<usize>() {
        Ok(n) if n > 0 => n - 1,
        _ => {
            let _ = writeln!(out, "  skipped");
            return;
        }
    };
    match session.answer_quiz(choice) {
        Some(outcome) if outcome.correct => {
            let _ = writeln!(out, "  correct");
        }
        Some(outcome) => {
            let _ = writeln!(out, "  answer: {}", outcome.answer_hanzi);
        }
        None => {
            let _ = writeln!(out, "  no such choice");
        }
    }
}
