use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use epsilon_regex::{is_meta_character, Matcher, NFA};

/// Match text against patterns built from literals, `.`, `*`, `(a|b)` and
/// grouping.
#[derive(Debug, Parser)]
#[command(name = "epsilon_grep", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print whether PATTERN matches the whole of TEXT.
    Match { pattern: String, text: String },
    /// Print every line of FILE (or stdin) that contains a match of PATTERN.
    Grep { pattern: String, file: Option<PathBuf> },
    /// Print the positions and epsilon transitions of PATTERN.
    Dump { pattern: String },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let result = run(cli.command, &mut stdout.lock());
    if let Err(ref err) = result {
        eprintln!("error: {:#}", err);
    }
    ExitCode::from(status(&result))
}

/// 0 when something matched, 1 when nothing did, 2 on error.
fn status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether anything matched.
fn run<W: Write>(command: Command, out: &mut W) -> anyhow::Result<bool> {
    match command {
        Command::Match { pattern, text } => {
            let nfa = compile(&pattern)?;
            let matched = nfa.recognizes(&text)?;
            writeln!(out, "{}", matched)?;
            Ok(matched)
        }
        Command::Grep { pattern, file } => {
            // The wrapped form can hide an unbalanced pattern.
            compile(&pattern)?;
            let nfa = compile(&format!("(.*{}.*)", pattern))?;
            match file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    grep(&nfa, BufReader::new(file), out)
                }
                None => grep(&nfa, io::stdin().lock(), out),
            }
        }
        Command::Dump { pattern } => {
            write!(out, "{}", compile(&pattern)?)?;
            Ok(true)
        }
    }
}

fn compile(pattern: &str) -> anyhow::Result<NFA> {
    epsilon_regex::compile(pattern)
        .with_context(|| format!("failed to compile {:?}", pattern))
}

fn grep<R: BufRead, W: Write>(nfa: &NFA, input: R, out: &mut W) -> anyhow::Result<bool> {
    let matcher = Matcher::new(nfa);
    let mut found = false;
    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.chars().any(is_meta_character) {
            log::warn!("skipping line {}: contains a metacharacter", number + 1);
            continue;
        }
        if matcher.is_match(&line)? {
            writeln!(out, "{}", line)?;
            found = true;
        }
    }
    Ok(found)
}
