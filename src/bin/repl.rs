//! Interactive demo: reads grammars and query words from stdin following a
//! fixed text protocol, and prints `Yes`/`No` per query.
//!
//! Protocol, one round:
//! - line 1: `|N| |T| |R|` (three space-separated integers)
//! - line 2: the non-terminal alphabet, as a run of characters
//! - line 3: the terminal alphabet, as a run of characters
//! - next `R` lines: a rule `X -> a`, where whitespace around `->` is
//!   stripped and an empty right-hand side denotes an ε-production
//! - next line: the start symbol (a single character)
//! - next line: `W`, the number of queries
//! - next `W` lines: one query word per line
//!
//! With `--infinite`, the whole protocol repeats until stdin is exhausted.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use grammarcheck::facade::{Facade, NaiveGrammar, NaiveRule};
use grammarcheck::{CykRecognizer, EarleyRecognizer, Recognizer};

/// Command line arguments accepted by the demo REPL.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// which recogniser to fit and query against
    #[arg(short, long, value_enum, default_value_t = RecognizerChoice::Earley)]
    recognizer: RecognizerChoice,
    /// keep reading rounds from stdin until it is exhausted, instead of
    /// stopping after the first
    #[arg(short, long)]
    infinite: bool,
    /// print each interned grammar and query before answering
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The two recognisers selectable from the command line.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RecognizerChoice {
    /// Chart-based, accepts any CFG directly.
    Earley,
    /// Normalises to CNF first, then fills a membership table.
    Cyk,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        match run_round(&mut lines, &mut out, args.recognizer, args.verbose > 0) {
            Ok(true) => {
                if !args.infinite {
                    break;
                }
            }
            Ok(false) => break, // stdin exhausted
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Runs one round of the protocol. Returns `Ok(false)` if stdin was
/// exhausted before the round could start (a clean end for `--infinite`),
/// `Ok(true)` if the round completed, or an error from malformed input.
fn run_round(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    recognizer: RecognizerChoice,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(header) = next_line(lines)? else {
        return Ok(false);
    };
    let counts: Vec<usize> = header
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?;
    let r = match counts.as_slice() {
        [_n, _t, r] => *r,
        _ => return Err("expected three counts on the header line".into()),
    };

    let non_terminals: HashSet<char> = require_line(lines)?.chars().collect();
    let terminals: HashSet<char> = require_line(lines)?.chars().collect();

    let mut rules = Vec::with_capacity(r);
    for _ in 0..r {
        let line = require_line(lines)?;
        let (left, right) = line.split_once("->").ok_or("expected a rule of the shape X -> a")?;
        let left = left.trim().chars().next().ok_or("rule is missing its left-hand side")?;
        rules.push(NaiveRule::new(left, right.trim()));
    }

    let start = require_line(lines)?
        .trim()
        .chars()
        .next()
        .ok_or("expected a start symbol")?;

    let naive = NaiveGrammar {
        non_terminals,
        terminals,
        start,
        rules,
    };
    if verbose {
        eprintln!("fitting {} rules, start = {start}", naive.rules.len());
    }

    let word_count: usize = require_line(lines)?.trim().parse()?;

    match recognizer {
        RecognizerChoice::Earley => answer_queries(&mut Facade::new(EarleyRecognizer::new()), &naive, word_count, lines, out, verbose)?,
        RecognizerChoice::Cyk => answer_queries(&mut Facade::new(CykRecognizer::new()), &naive, word_count, lines, out, verbose)?,
    }

    Ok(true)
}

fn answer_queries<R: Recognizer>(
    facade: &mut Facade<R>,
    naive: &NaiveGrammar,
    word_count: usize,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    facade.fit(naive)?;
    for _ in 0..word_count {
        let word = require_line(lines)?;
        let accepted = facade.predict(word.trim())?;
        if verbose {
            eprintln!("{word:?} -> {accepted}");
        }
        writeln!(out, "{}", if accepted { "Yes" } else { "No" })?;
    }
    Ok(())
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    lines.next().transpose()
}

fn require_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String, Box<dyn std::error::Error>> {
    next_line(lines)?.ok_or_else(|| "unexpected end of input".into())
}
