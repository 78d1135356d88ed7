//! Packed command history store.
//!
//! Prior lines are packed into a single `H`-byte array, newest first, each
//! entry encoded as a 1-byte length prefix followed by that many raw bytes.
//! Pushing a line that no longer fits evicts the oldest entries until it
//! does. The store also carries the recall cursor used by the keystroke
//! engine's older/newer stepping protocol.

/// Fixed-capacity store of previously submitted lines, newest first.
///
/// The recall cursor (`index`) is 0 when no recall is in progress; larger
/// values step further into the past, so the entry currently recalled is
/// `recall(index - 1)`.
///
/// # Examples
///
/// ```rust
/// use libcli::editor::History;
///
/// let mut history = History::<32>::new();
/// history.push(b"first");
/// history.push(b"second");
/// assert_eq!(history.recall(0), Some(&b"second"[..]));
/// assert_eq!(history.recall(1), Some(&b"first"[..]));
/// assert_eq!(history.recall(2), None);
/// ```
#[derive(Debug)]
pub struct History<const H: usize> {
    buf: [u8; H],
    used: usize,
    entries: usize,
    index: usize,
}

impl<const H: usize> Default for History<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const H: usize> History<H> {
    /// Create an empty history store.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; H],
            used: 0,
            entries: 0,
            index: 0,
        }
    }

    /// Number of entries currently stored.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Prepend a snapshot of `content` as the newest entry.
    ///
    /// Oldest entries are evicted until the new entry fits; content longer
    /// than `min(H - 1, 255)` bytes is truncated to fit (255 because of the
    /// 1-byte length prefix). Empty content and zero-capacity stores are
    /// skipped entirely. Any recall in progress is reset.
    pub fn push(&mut self, content: &[u8]) {
        if H == 0 || content.is_empty() {
            return;
        }
        self.index = 0;

        let len = content.len().min(H - 1).min(u8::MAX as usize);
        let needed = 1 + len;
        while self.used + needed > H {
            self.evict_oldest();
        }

        self.buf.copy_within(0..self.used, needed);
        self.buf[0] = len as u8;
        self.buf[1..1 + len].copy_from_slice(&content[..len]);
        self.used += needed;
        self.entries += 1;
    }

    /// Content of the `index`-th entry, counting from newest (0) to oldest.
    ///
    /// Returns `None` when `index >= entries()`.
    pub fn recall(&self, index: usize) -> Option<&[u8]> {
        if index >= self.entries {
            return None;
        }
        let offset = self.offset_of(index);
        let len = self.buf[offset] as usize;
        Some(&self.buf[offset + 1..offset + 1 + len])
    }

    /// Step the recall cursor one entry into the past, saturating at the
    /// oldest entry, and return the entry now recalled.
    ///
    /// Returns `None` only when the store is empty.
    pub fn step_older(&mut self) -> Option<&[u8]> {
        if self.index < self.entries {
            self.index += 1;
        }
        if self.index == 0 {
            return None;
        }
        self.recall(self.index - 1)
    }

    /// Step the recall cursor one entry toward the present, saturating at
    /// the not-recalling state, and return the entry now recalled.
    ///
    /// Stepping newer past the newest entry returns `None`, which the engine
    /// renders as an empty line. The original in-progress edit is not
    /// restored; this is a known limitation carried over from the recall
    /// protocol, not an oversight.
    pub fn step_newer(&mut self) -> Option<&[u8]> {
        if self.index > 0 {
            self.index -= 1;
        }
        if self.index == 0 {
            return None;
        }
        self.recall(self.index - 1)
    }

    /// Abandon any recall in progress.
    ///
    /// Called by the engine whenever the line is edited by a direct
    /// keystroke, since an edit invalidates the recall position.
    pub fn reset_recall(&mut self) {
        self.index = 0;
    }

    /// Byte offset of the `index`-th entry's length prefix.
    ///
    /// Callers guarantee `index < entries`.
    fn offset_of(&self, index: usize) -> usize {
        let mut offset = 0;
        for _ in 0..index {
            offset += 1 + self.buf[offset] as usize;
        }
        offset
    }

    /// Drop the oldest stored entry.
    fn evict_oldest(&mut self) {
        if self.entries == 0 {
            self.used = 0;
            return;
        }
        self.used = self.offset_of(self.entries - 1);
        self.entries -= 1;
    }
}
