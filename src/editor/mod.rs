//! Line editing core for serial consoles.
//!
//! This module ties the cursor-aware [`LineBuffer`] and the packed
//! [`History`] store together under [`read_line`], a blocking keystroke loop
//! that consumes decoded input events and emits matching terminal effects.
//! Both buffers are constructed and owned by the caller, preserving the
//! no-heap, no-static resource model expected on constrained hardware.
//!
//! # Usage
//!
//! ```rust,no_run
//! use libcli::editor::{read_line, History, LineBuffer};
//! use libcli::terminal::{EventSource, InputEvent, Terminal};
//!
//! fn prompt<S: EventSource, T: Terminal>(source: &mut S, term: &mut T) {
//!     let mut line = LineBuffer::<80>::new();
//!     let mut history = History::<256>::new();
//!
//!     term.write(b'>');
//!     read_line(source, term, &mut line, &mut history, None);
//!     term.write(b'\n');
//!     // `line` now holds the submitted, non-empty command text.
//! }
//! # fn main() {}
//! ```

/// Cursor-aware line buffer.
pub mod line;

/// Packed command history store.
pub mod history;

pub use history::History;
pub use line::LineBuffer;

use crate::terminal::{EventSource, InputEvent, Terminal};

/// Read one line of input, editing in place until a non-empty submit.
///
/// Runs the keystroke loop: each iteration first invokes the optional `idle`
/// callback (the host's cooperative-multitasking hook; it must not block),
/// then polls `source` for the next decoded event and applies it to `line`
/// and `history`, emitting the matching effects on `term`. `line` is edited
/// in place and holds the finished text when the function returns; the same
/// contents have already been pushed into `history`.
///
/// Event handling:
/// - cursor and home/end keys move the cursor, echoing the motion;
/// - older/newer keys clear the visible line, step the history recall
///   cursor, and re-print the recalled entry (or an empty line);
/// - erase removes the character left of the cursor;
/// - printable bytes (`0x20..`, excluding `0x7F`) are inserted and echoed,
///   silently dropped when the buffer is full;
/// - submit returns once the line is non-empty and is ignored otherwise.
///
/// The only exit is a non-empty submit; transport timeouts surface from the
/// source as `None` and are retried.
pub fn read_line<S, T, const N: usize, const H: usize>(
    source: &mut S,
    term: &mut T,
    line: &mut LineBuffer<N>,
    history: &mut History<H>,
    mut idle: Option<&mut dyn FnMut()>,
) where
    S: EventSource,
    T: Terminal,
{
    loop {
        // Host housekeeping hook, once per poll iteration.
        if let Some(hook) = idle.as_mut() {
            hook();
        }

        let event = match source.poll() {
            Some(event) => event,
            None => continue,
        };

        match event {
            InputEvent::Left => {
                if line.move_left() {
                    term.cursor_left(1);
                }
            }
            InputEvent::Right => {
                if line.move_right() {
                    term.cursor_right(1);
                }
            }
            InputEvent::Home => {
                let moved = line.seek_home();
                term.cursor_left(moved);
            }
            InputEvent::End => {
                let moved = line.seek_end();
                term.cursor_right(moved);
            }
            InputEvent::HistoryOlder => {
                clear_visible(term, line);
                replace_line(term, line, history.step_older());
            }
            InputEvent::HistoryNewer => {
                clear_visible(term, line);
                replace_line(term, line, history.step_newer());
            }
            InputEvent::Erase => {
                if line.delete_before_cursor() {
                    term.cursor_left(1);
                    term.delete_char();
                    history.reset_recall();
                }
            }
            InputEvent::Submit => {
                if !line.is_empty() {
                    history.push(line.as_bytes());
                    return;
                }
            }
            InputEvent::Char(byte) => {
                // Control codes and DEL are the decoder's business; anything
                // that slips through is dropped here.
                if byte < 0x20 || byte == 0x7F {
                    continue;
                }
                if line.insert(byte) {
                    term.insert_char();
                    term.write(byte);
                    history.reset_recall();
                }
            }
        }
    }
}

/// Wipe the line as displayed: cursor back to the start, then delete every
/// visible character.
fn clear_visible<T: Terminal, const N: usize>(term: &mut T, line: &mut LineBuffer<N>) {
    term.cursor_left(line.seek_home());
    for _ in 0..line.len() {
        term.delete_char();
    }
    line.clear();
}

/// Fill the (cleared) line from a recalled entry and re-print it, leaving
/// the line empty when the recall came back absent.
fn replace_line<T: Terminal, const N: usize>(
    term: &mut T,
    line: &mut LineBuffer<N>,
    entry: Option<&[u8]>,
) {
    if let Some(content) = entry {
        line.insert_slice(content, content.len());
        term.write_bytes(line.as_bytes());
    }
}
