//! A terminal abstraction layer for embedded command-line interfaces
//!
//! This module defines the two capabilities the editor core is written
//! against: a source of decoded keystroke events and a sink of visual
//! terminal effects. Escape-sequence decoding (arrow keys, home/end) and
//! line-ending normalization happen upstream, in the host's transport layer;
//! ANSI rendering of the emitted effects happens downstream. The core itself
//! never touches raw bytes on the wire and never reads terminal state back.

#![deny(unsafe_code)]

/// A decoded input event, one keystroke's worth.
///
/// The host's input decoder is expected to collapse multi-byte escape
/// sequences into the corresponding variant and to normalize `\r`, `\n`,
/// and `\r\n` into a single [`InputEvent::Submit`]. Bytes that reach the
/// editor as [`InputEvent::Char`] are treated as single-byte code units;
/// values below `0x20` and the `0x7F` delete code are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A plain character byte to insert at the cursor.
    Char(u8),
    /// Move the cursor one position left.
    Left,
    /// Move the cursor one position right.
    Right,
    /// Jump the cursor to the start of the line.
    Home,
    /// Jump the cursor to the end of the line.
    End,
    /// Recall the next-older history entry.
    HistoryOlder,
    /// Recall the next-newer history entry.
    HistoryNewer,
    /// Erase the character before the cursor (backspace).
    Erase,
    /// Submit the current line.
    Submit,
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            InputEvent::Char(c) => defmt::write!(f, "Char({=u8})", c),
            InputEvent::Left => defmt::write!(f, "Left"),
            InputEvent::Right => defmt::write!(f, "Right"),
            InputEvent::Home => defmt::write!(f, "Home"),
            InputEvent::End => defmt::write!(f, "End"),
            InputEvent::HistoryOlder => defmt::write!(f, "HistoryOlder"),
            InputEvent::HistoryNewer => defmt::write!(f, "HistoryNewer"),
            InputEvent::Erase => defmt::write!(f, "Erase"),
            InputEvent::Submit => defmt::write!(f, "Submit"),
        }
    }
}

/// A source of decoded input events.
///
/// Implementations wrap the raw byte transport plus whatever escape-sequence
/// decoding the host performs. `poll` may block per the transport's own
/// contract or return `None` immediately when nothing is pending; the editor
/// loop treats `None` (including transport timeouts) as "no event yet" and
/// retries.
///
/// # Examples
///
/// ```rust
/// use libcli::terminal::{EventSource, InputEvent};
///
/// struct Scripted<'a> {
///     events: &'a [InputEvent],
/// }
///
/// impl EventSource for Scripted<'_> {
///     fn poll(&mut self) -> Option<InputEvent> {
///         let (first, rest) = self.events.split_first()?;
///         self.events = rest;
///         Some(*first)
///     }
/// }
/// ```
pub trait EventSource {
    /// Return the next decoded event, or `None` if none is available yet.
    fn poll(&mut self) -> Option<InputEvent>;
}

/// A sink of visual terminal effects.
///
/// All five primitives are side effects on the display only; none of them
/// report back. A UART-backed implementation typically maps `cursor_left`
/// and `cursor_right` to ANSI `CUB`/`CUF` sequences and `insert_char` /
/// `delete_char` to `ICH`/`DCH`, but the editor core does not care how the
/// effects are rendered.
pub trait Terminal {
    /// Write one character byte at the cursor position.
    fn write(&mut self, byte: u8);

    /// Move the cursor `n` columns left.
    fn cursor_left(&mut self, n: usize);

    /// Move the cursor `n` columns right.
    fn cursor_right(&mut self, n: usize);

    /// Open a one-character gap at the cursor, shifting the rest of the
    /// visible line right.
    fn insert_char(&mut self);

    /// Close a one-character gap at the cursor, shifting the rest of the
    /// visible line left.
    fn delete_char(&mut self);

    /// Write a run of character bytes at the cursor position.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write(byte);
        }
    }

    /// Write a string slice at the cursor position.
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

/// Re-exports of common traits
pub mod prelude {
    pub use super::{EventSource, InputEvent, Terminal};
}
