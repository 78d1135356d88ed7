//! Token scanning and command dispatch for finished lines.
//!
//! A submitted line is scanned by [`Tokens`], a forward-only cursor that
//! yields whitespace- or quote-delimited tokens. [`dispatch`] matches the
//! first token against an ordered table of [`Command`] entries and hands the
//! remaining scan state to the matching handler, or prints the table's
//! keywords when nothing matches. [`run_command`] wraps the whole
//! prompt/read/dispatch cycle for hosts that want the one-liner.
//!
//! # Parsing rules
//!
//! - Leading spaces before a token are skipped; runs of spaces never produce
//!   empty tokens.
//! - A token starting with `"` or `'` extends to the matching quote; quote
//!   characters are not escapable inside. An unmatched opening quote
//!   consumes the rest of the line as the token's content. This is the
//!   documented behavior, not an error.
//! - Scanning past the end of the line yields `""` and `has_next()` stays
//!   `false`.
//!
//! # Usage
//!
//! ```rust
//! use libcli::command::Tokens;
//!
//! let mut tokens = Tokens::new("set name \"My Device\"");
//! assert_eq!(tokens.next(), "set");
//! assert_eq!(tokens.next(), "name");
//! assert!(tokens.is_quoted());
//! assert_eq!(tokens.next(), "My Device");
//! assert!(!tokens.has_next());
//! ```

use crate::editor::{read_line, History, LineBuffer};
use crate::terminal::{EventSource, Terminal};

/// Forward-only token cursor over a finished line.
///
/// The cursor advances monotonically as tokens are consumed and never
/// rewinds. Tokens borrow from the scanned line, so no copying takes place.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Create a cursor at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Whether another token remains to be consumed.
    pub fn has_next(&self) -> bool {
        !self.rest.trim_start_matches(' ').is_empty()
    }

    /// Whether the next token is quote-delimited.
    ///
    /// Useful for handlers that treat quoted arguments as literal strings
    /// rather than keywords.
    pub fn is_quoted(&self) -> bool {
        let rest = self.rest.trim_start_matches(' ');
        rest.starts_with('"') || rest.starts_with('\'')
    }

    /// Consume and return the next token, or `""` past the end of the line.
    pub fn next(&mut self) -> &'a str {
        self.rest = self.rest.trim_start_matches(' ');
        let quote = match self.rest.as_bytes().first() {
            None => return "",
            Some(b'"') => Some('"'),
            Some(b'\'') => Some('\''),
            Some(_) => None,
        };

        let (token, rest) = match quote {
            Some(q) => {
                let body = &self.rest[1..];
                match body.find(q) {
                    Some(end) => (&body[..end], &body[end + 1..]),
                    // Unmatched quote: the rest of the line is the token.
                    None => (body, ""),
                }
            }
            None => match self.rest.find(' ') {
                Some(end) => (&self.rest[..end], &self.rest[end + 1..]),
                None => (self.rest, ""),
            },
        };
        self.rest = rest;
        token
    }

    /// Drain up to `argv.len()` tokens into `argv`, returning how many were
    /// written.
    ///
    /// Stops early when the line runs out of tokens; slots past the returned
    /// count are left untouched.
    pub fn fill(&mut self, argv: &mut [&'a str]) -> usize {
        for (count, slot) in argv.iter_mut().enumerate() {
            if !self.has_next() {
                return count;
            }
            *slot = self.next();
        }
        argv.len()
    }
}

/// Function signature for command handlers.
///
/// Handlers receive the output capability and the scan state positioned
/// just past the keyword, so the remaining tokens are theirs to consume.
pub type CommandFn = fn(&mut dyn Terminal, Tokens<'_>);

/// A keyword bound to its handler.
///
/// Tables are plain ordered slices supplied by the host; the order both
/// resolves matches (first match wins) and drives the keyword listing
/// printed for unknown commands.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// The keyword as typed by the user. Matching is exact and
    /// case-sensitive.
    pub name: &'static str,
    /// The function invoked when the keyword matches.
    pub handler: CommandFn,
}

/// Match the first token of `tokens` against `commands` and invoke the
/// handler, passing it the remaining scan state.
///
/// When no keyword matches (including the unmatchable empty keyword), the
/// registered keywords are listed on `term` in table order and no handler
/// runs. An unknown command is informational output, not a fault.
pub fn dispatch(term: &mut dyn Terminal, mut tokens: Tokens<'_>, commands: &[Command]) {
    let keyword = tokens.next();

    for command in commands {
        if command.name == keyword {
            (command.handler)(term, tokens);
            return;
        }
    }

    term.write_str("Commands: ");
    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            term.write_str(", ");
        }
        term.write_str(command.name);
    }
    term.write(b'\n');
}

/// Display a prompt, read one line, and dispatch it.
///
/// Convenience wrapper around [`read_line`] and [`dispatch`]: clears `line`,
/// prints a `>` prompt, edits until a non-empty submit (pushing the result
/// into `history`), echoes the line ending, and routes the finished line to
/// the matching handler. The buffers stay caller-owned so repeated prompts
/// reuse the same storage.
pub fn run_command<S, T, const N: usize, const H: usize>(
    source: &mut S,
    term: &mut T,
    line: &mut LineBuffer<N>,
    history: &mut History<H>,
    commands: &[Command],
    idle: Option<&mut dyn FnMut()>,
) where
    S: EventSource,
    T: Terminal,
{
    line.clear();
    term.write(b'>');
    read_line(source, term, line, history, idle);
    term.write(b'\n');
    dispatch(term, Tokens::new(line.as_str()), commands);
}
