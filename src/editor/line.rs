//! Cursor-aware line buffer.
//!
//! The buffer is a fixed-capacity, caller-owned value; there is no static
//! storage and no heap allocation. All operations are pure data mutations
//! and either take full effect or none at all, so the buffer can be unit
//! tested without a terminal attached.

use heapless::Vec;

/// An editable line of at most `N - 1` bytes with an editing cursor.
///
/// One slot of the backing storage is held back so a full line still leaves
/// room for a terminator when handed to sentinel-terminated consumers, the
/// usual convention on serial hosts. `N` must be at least 1.
///
/// Invariants, upheld after every operation:
/// - `cursor() <= len()`
/// - `len() <= capacity()` where `capacity() == N - 1`
///
/// # Examples
///
/// ```rust
/// use libcli::editor::LineBuffer;
///
/// let mut line = LineBuffer::<8>::new();
/// assert!(line.insert(b'h'));
/// assert!(line.insert(b'i'));
/// assert!(line.move_left());
/// assert!(line.insert(b'u')); // insert mid-line shifts the tail right
/// assert_eq!(line.as_str(), "hui");
/// ```
#[derive(Debug)]
pub struct LineBuffer<const N: usize> {
    buf: Vec<u8, N>,
    cursor: usize,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer with the cursor at position 0.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cursor: 0,
        }
    }

    /// Maximum number of live characters the buffer can hold (`N - 1`).
    pub const fn capacity(&self) -> usize {
        N.saturating_sub(1)
    }

    /// Number of live characters.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current cursor position, in `0..=len()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Live contents as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Live contents as a string slice, or `""` if the bytes inserted so far
    /// do not form valid UTF-8.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Insert one character at the cursor, shifting trailing content right.
    ///
    /// Returns `false` without mutating anything when the buffer is full.
    /// On success the cursor and length each advance by one.
    pub fn insert(&mut self, byte: u8) -> bool {
        if self.buf.len() >= self.capacity() {
            return false;
        }
        if self.buf.insert(self.cursor, byte).is_err() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Bulk-insert at the cursor, used for history recall and prompt
    /// pre-fill.
    ///
    /// Copies up to `min(max, remaining_space, length_until_first_NUL)`
    /// bytes, shifting trailing content right by the copied
    /// count, and returns how many bytes were actually copied (possibly 0).
    /// The NUL cutoff lets sentinel-terminated storage be handed in whole.
    pub fn insert_slice(&mut self, bytes: &[u8], max: usize) -> usize {
        let until_nul = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let space = self.capacity() - self.buf.len();
        let count = max.min(until_nul).min(space);
        for &byte in &bytes[..count] {
            // count <= remaining space, so the insert cannot fail
            let _ = self.buf.insert(self.cursor, byte);
            self.cursor += 1;
        }
        count
    }

    /// Remove the character immediately left of the cursor, shifting
    /// trailing content left.
    ///
    /// Returns `false` without mutating anything when the cursor is at the
    /// start of the line.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buf.remove(self.cursor);
        true
    }

    /// Move the cursor one position left; fails at the left margin.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one position right; fails at the end of the line.
    pub fn move_right(&mut self) -> bool {
        if self.cursor == self.buf.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Jump the cursor to the start of the line.
    ///
    /// Returns the distance moved so the caller can emit that many
    /// cursor-motion effects.
    pub fn seek_home(&mut self) -> usize {
        let moved = self.cursor;
        self.cursor = 0;
        moved
    }

    /// Jump the cursor to the end of the line.
    ///
    /// Returns the distance moved so the caller can emit that many
    /// cursor-motion effects.
    pub fn seek_end(&mut self) -> usize {
        let moved = self.buf.len() - self.cursor;
        self.cursor = self.buf.len();
        moved
    }

    /// Reset length and cursor to 0.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }
}
