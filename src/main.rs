//! Interactive console for the keymark pipeline.
//!
//! Plain input lines are submitted directly: the text is run through the
//! pipeline and the result panel is printed. `:n <count>` changes the
//! keyword count (1–20), `:q` quits. An optional argument names a JSON
//! config file.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keymark::{HighlightPipeline, HighlightSession, KeymarkConfig};

/// Keyword count range enforced at the UI boundary.
const COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=20;

enum Command<'a> {
    Submit(&'a str),
    SetCount(&'a str),
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix(":n") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Command::SetCount(rest.trim());
        }
    }
    match trimmed {
        ":q" | ":quit" => Command::Quit,
        ":h" | ":help" => Command::Help,
        _ if trimmed.starts_with(':') => Command::Unknown(trimmed),
        _ => Command::Submit(line),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => KeymarkConfig::default(),
    };
    info!(top_n = config.top_n, "starting session");

    let mut session = HighlightSession::with_pipeline(HighlightPipeline::with_config(config));

    println!("{}", "keymark — keyword highlighter".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "enter text to highlight its top {} keywords; :h for help",
            session.keyword_count()
        )
        .dimmed()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "\n{} ", "❯".bright_green().bold())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match parse_command(line) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::SetCount(arg) => set_count(&mut session, arg),
            Command::Unknown(cmd) => {
                println!("{} unknown command: {cmd}", "✗".bright_red().bold());
            }
            Command::Submit(text) => {
                session.set_input(text);
                session.submit();
                render_result(&session);
            }
        }
    }

    Ok(())
}

fn load_config(path: &str) -> Result<KeymarkConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse config file {path}"))
}

fn set_count(session: &mut HighlightSession, arg: &str) {
    match arg.parse::<usize>() {
        Ok(count) if COUNT_RANGE.contains(&count) => {
            session.set_keyword_count(count);
            println!("{} keyword count set to {count}", "✓".bright_green().bold());
        }
        Ok(count) => {
            println!(
                "{} count {count} is out of range ({}..={})",
                "✗".bright_red().bold(),
                COUNT_RANGE.start(),
                COUNT_RANGE.end()
            );
        }
        Err(_) => {
            println!("{} usage: :n <count>", "✗".bright_red().bold());
        }
    }
}

fn print_help() {
    println!("  {}  submit the line as input text", "<text>".bright_white());
    println!("  {}  set the keyword count (1-20)", ":n <count>".bright_white());
    println!("  {}       show this help", ":h".bright_white());
    println!("  {}       quit", ":q".bright_white());
}

fn render_result(session: &HighlightSession) {
    if !session.has_result() {
        println!("{}", "nothing to show".dimmed());
        return;
    }

    let keywords = session
        .keywords()
        .iter()
        .map(|k| format!("{} ({})", k.term, k.count))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} {}", "keywords:".bright_yellow().bold(), keywords);
    println!("{}", session.result());
}
