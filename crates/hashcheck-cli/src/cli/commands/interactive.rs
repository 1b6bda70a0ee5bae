//! `hashcheck interactive` – line-oriented editing session.
//!
//! Protocol: one edit per line.
//!   `algo <name>`      select the algorithm
//!   `digest [<hex>]`   set (or clear) the expected digest
//!   `content [<text>]` set (or clear) the content; `\n` stands for a newline
//!   `load <url|#frag>` load inputs from a share link
//!   `show`             print the current inputs
//!   `quit`             leave
//! Each edit recomputes immediately; an edit arriving while a digest is still
//! being computed cancels that computation.

use crate::cli::terminal::{PrintedLocation, TerminalSurface};
use anyhow::Result;
use hashcheck_core::fragment::fragment_of;
use hashcheck_core::session::Session;
use hashcheck_core::VerifierInputs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Algorithm(String),
    Expected(String),
    Content(String),
    Load(String),
    Show,
    Quit,
}

/// Parse a line into an event. Returns `None` for blank or unknown lines.
pub fn parse_event(line: &str) -> Option<Event> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (cmd, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest),
        None => (line, ""),
    };
    match cmd {
        "algo" if !rest.trim().is_empty() => Some(Event::Algorithm(rest.trim().to_string())),
        "digest" => Some(Event::Expected(rest.trim().to_string())),
        "content" => Some(Event::Content(rest.replace("\\n", "\n"))),
        "load" if !rest.trim().is_empty() => Some(Event::Load(rest.trim().to_string())),
        "show" => Some(Event::Show),
        "quit" | "exit" => Some(Event::Quit),
        _ => None,
    }
}

pub async fn run_interactive(default_algorithm: &str, load: Option<&str>) -> Result<()> {
    let session = Session::new(
        TerminalSurface,
        PrintedLocation::default(),
        VerifierInputs::new(default_algorithm, "", ""),
    );
    let mut pending: Option<JoinHandle<bool>> = None;

    if let Some(target) = load {
        pending = session.load(&fragment_of(target));
        if pending.is_none() {
            println!("Nothing to load: the fragment needs both `digest` and `content`.");
        }
    }

    println!("Commands: algo <name> | digest <hex> | content <text> | load <url> | show | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(event) = parse_event(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command: {}", line.trim());
            }
            continue;
        };
        tracing::debug!(?event, "interactive event");
        let handle = match event {
            Event::Algorithm(name) => Some(session.set_algorithm(name)),
            Event::Expected(hex) => Some(session.set_expected(hex)),
            Event::Content(text) => Some(session.set_content(text)),
            Event::Load(target) => {
                let h = session.load(&fragment_of(&target));
                if h.is_none() {
                    println!("Nothing to load: the fragment needs both `digest` and `content`.");
                }
                h
            }
            Event::Show => {
                let inputs = session.inputs();
                println!(
                    "algorithm={} digest={} content={:?}",
                    inputs.algorithm, inputs.expected, inputs.content
                );
                None
            }
            Event::Quit => break,
        };
        if handle.is_some() {
            pending = handle;
        }
    }

    // Let the latest edit finish rendering before exiting.
    if let Some(h) = pending {
        if let Err(e) = h.await {
            if !e.is_cancelled() {
                tracing::warn!("recompute task: {}", e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edits() {
        assert_eq!(
            parse_event("algo SHA-512"),
            Some(Event::Algorithm("SHA-512".to_string()))
        );
        assert_eq!(
            parse_event("digest DEADBEEF\r\n"),
            Some(Event::Expected("DEADBEEF".to_string()))
        );
        assert_eq!(
            parse_event("content two  spaces\\nnext"),
            Some(Event::Content("two  spaces\nnext".to_string()))
        );
        assert_eq!(
            parse_event("load https://example.com/#content=x"),
            Some(Event::Load("https://example.com/#content=x".to_string()))
        );
    }

    #[test]
    fn clears_with_bare_command() {
        assert_eq!(parse_event("digest"), Some(Event::Expected(String::new())));
        assert_eq!(parse_event("content"), Some(Event::Content(String::new())));
    }

    #[test]
    fn control_lines() {
        assert_eq!(parse_event("show"), Some(Event::Show));
        assert_eq!(parse_event("quit"), Some(Event::Quit));
        assert_eq!(parse_event("exit"), Some(Event::Quit));
    }

    #[test]
    fn rejects_unknown_and_incomplete() {
        assert_eq!(parse_event(""), None);
        assert_eq!(parse_event("algo"), None);
        assert_eq!(parse_event("load "), None);
        assert_eq!(parse_event("frobnicate 1"), None);
    }
}
