// tonedrill-cli: shared utilities for CLI tools.

use std::io;
use std::path::PathBuf;
use std::process;

use tonedrill_pinyin::Strictness;
use tonedrill_study::progress::preferred_set;
use tonedrill_study::{DEFAULT_SET, DirStore, KeyValueStore, WordList};
use tracing_subscriber::EnvFilter;

/// Subdirectory of the tonedrill home holding word lists.
const DATA_SUBDIR: &str = "data";

/// Subdirectory of the tonedrill home holding progress files.
const PROGRESS_SUBDIR: &str = "progress";

/// Install a stderr `tracing` subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Find `<set_id>.json` and load it as a word list.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `TONEDRILL_DATA_PATH` environment variable
/// 3. `$TONEDRILL_HOME/data`, then `~/.tonedrill/data`
/// 4. `data/` under the current working directory
pub fn load_words(data_path: Option<&str>, set_id: &str) -> Result<WordList, String> {
    let file_name = format!("{set_id}.json");
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        let path = dir.join(&file_name);
        if path.is_file() {
            tracing::debug!(path = %path.display(), set_id, "loading word list");
            return WordList::from_path(&path).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        file_name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for word lists.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("TONEDRILL_DATA_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = tonedrill_home() {
        paths.push(home.join(DATA_SUBDIR));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DATA_SUBDIR));
    }

    paths
}

/// `TONEDRILL_HOME`, falling back to `~/.tonedrill`.
fn tonedrill_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("TONEDRILL_HOME") {
        return Some(PathBuf::from(home));
    }
    home_dir().map(|h| h.join(".tonedrill"))
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Progress store under the tonedrill home (or `./.tonedrill` without one).
pub fn open_store() -> DirStore {
    let home = tonedrill_home().unwrap_or_else(|| PathBuf::from(".tonedrill"));
    DirStore::new(home.join(PROGRESS_SUBDIR))
}

/// Study set to open: the explicit one, else the stored preference, else
/// the default set.
pub fn resolve_set<S: KeyValueStore + ?Sized>(explicit: Option<String>, store: &S) -> String {
    explicit
        .or_else(|| preferred_set(store))
        .unwrap_or_else(|| DEFAULT_SET.to_string())
}

/// Pull `--<long>=VALUE`, `--<long> VALUE` or `-<short> VALUE` out of `args`.
///
/// Returns `(value, remaining_args)`. Exits with an error if the option is
/// given without a value.
pub fn parse_value_arg(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long_flag = format!("--{long}");
    let long_prefix = format!("--{long}=");
    let short_flag = format!("-{short}");

    let mut value = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(&long_prefix) {
            value = Some(val.to_string());
        } else if *arg == long_flag || *arg == short_flag {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse `--data-path=PATH` or `-d PATH`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_value_arg(args, "data-path", "d")
}

/// Parse `--set=NAME` or `-s NAME`.
pub fn parse_set(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_value_arg(args, "set", "s")
}

/// Grading strictness from `--strict` / `--ignore-tones` flags.
pub fn strictness_from_args(args: &[String]) -> Strictness {
    if args.iter().any(|a| a == "--strict") {
        Strictness::Strict
    } else if args.iter().any(|a| a == "--ignore-tones") {
        Strictness::IgnoreTones
    } else {
        Strictness::Lenient
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Next line of input. A read error is reported on stderr and ends input.
pub fn next_line<I>(lines: &mut I) -> Option<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            eprintln!("error reading stdin: {e}");
            None
        }
    }
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
