//! Interactive browse session.
//!
//! Each input line becomes one [`UiEvent`], the same way a page turns
//! keystrokes and clicks into events, and the affected part of the view is
//! redrawn after it.

use std::io::{BufRead, Write};

use anyhow::Result;
use spdoc_core::{Page, PageUpdate, ToggleOutcome, UiEvent};
use spdoc_model::TypeFilter;
use spdoc_report::{filter_bar, listing_text, reports_text};
use tracing::debug;

const PROMPT: &str = "spdoc> ";

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Event(UiEventKind),
    ShowList,
    ShowReports,
    Help,
    Exit,
}

/// Session-level event, before it is turned into a [`UiEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEventKind {
    Search(String),
    Filter(TypeFilter),
    Open(String),
    Report(usize),
}

impl From<UiEventKind> for UiEvent {
    fn from(kind: UiEventKind) -> Self {
        match kind {
            UiEventKind::Search(text) => UiEvent::SearchInput(text),
            UiEventKind::Filter(filter) => UiEvent::FilterSelected(filter),
            UiEventKind::Open(name) => UiEvent::CardClicked(name),
            UiEventKind::Report(index) => UiEvent::ReportToggleClicked(index),
        }
    }
}

/// Parse one line. `Ok(None)` for blank lines.
///
/// Search text after `/` is kept exactly as typed, surrounding spaces
/// included; only keyword commands are trimmed.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let raw = line.strip_suffix('\r').unwrap_or(line);
    if let Some(query) = raw.trim_start().strip_prefix('/') {
        return Ok(Some(SessionCommand::Event(UiEventKind::Search(
            query.to_string(),
        ))));
    }
    let input = raw.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (input, ""),
    };
    let command = match keyword.to_lowercase().as_str() {
        "exit" | "quit" => SessionCommand::Exit,
        "help" => SessionCommand::Help,
        "list" => SessionCommand::ShowList,
        "reports" => SessionCommand::ShowReports,
        "filter" => {
            let filter = rest
                .parse::<TypeFilter>()
                .map_err(|e| format!("{e}. Usage: filter <all|select|insert|update|delete>"))?;
            SessionCommand::Event(UiEventKind::Filter(filter))
        }
        "open" => {
            if rest.is_empty() {
                return Err("Usage: open <procedure name>".to_string());
            }
            SessionCommand::Event(UiEventKind::Open(rest.to_string()))
        }
        "report" => {
            let index = rest
                .parse::<usize>()
                .map_err(|_| format!("Expected a report number but got '{rest}'"))?;
            SessionCommand::Event(UiEventKind::Report(index))
        }
        _ => return Err(format!("Unknown command '{keyword}' (type 'help')")),
    };
    Ok(Some(command))
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  /<text>          -> search (a bare / clears the search)")?;
    writeln!(out, "  filter <type>    -> all|select|insert|update|delete")?;
    writeln!(out, "  open <name>      -> toggle a procedure's details")?;
    writeln!(out, "  report <n>       -> toggle a report's details")?;
    writeln!(out, "  list | reports   -> redraw procedures or reports")?;
    writeln!(out, "  help             -> help")?;
    writeln!(out, "  exit|quit        -> quit")?;
    Ok(())
}

fn write_list<W: Write>(out: &mut W, page: &Page<'_>) -> Result<()> {
    writeln!(out, "{}", filter_bar(page.view()))?;
    writeln!(out, "{}", listing_text(page))?;
    Ok(())
}

/// Run a session until `exit` or end of input.
pub fn run_session<R: BufRead, W: Write>(page: &mut Page<'_>, input: R, mut out: W) -> Result<()> {
    writeln!(out, "spdoc browse (type 'help' or 'exit')")?;
    write_list(&mut out, page)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        debug!(?command, "session command");
        match command {
            SessionCommand::Exit => break,
            SessionCommand::Help => write_help(&mut out)?,
            SessionCommand::ShowList => write_list(&mut out, page)?,
            SessionCommand::ShowReports => writeln!(out, "{}", reports_text(page))?,
            SessionCommand::Event(kind) => match page.handle(kind.clone().into()) {
                PageUpdate::Rerendered { .. } => write_list(&mut out, page)?,
                PageUpdate::CardToggled(ToggleOutcome::NotFound) => {
                    if let UiEventKind::Open(name) = kind {
                        writeln!(out, "'{name}' is not in the current list")?;
                    }
                }
                PageUpdate::CardToggled(_) => write_list(&mut out, page)?,
                PageUpdate::ReportToggled(ToggleOutcome::NotFound) => {
                    writeln!(out, "No such report")?
                }
                PageUpdate::ReportToggled(_) => writeln!(out, "{}", reports_text(page))?,
                PageUpdate::RevealScheduled(_) | PageUpdate::Revealed(_) => {}
            },
        }
    }
    writeln!(out)?;
    Ok(())
}
