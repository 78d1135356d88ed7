use libcli::editor::History;

#[test]
fn starts_empty() {
    let history = History::<32>::new();
    assert_eq!(history.entries(), 0);
    assert!(history.is_empty());
    assert_eq!(history.recall(0), None);
}

#[test]
fn push_then_recall_round_trips() {
    let mut history = History::<32>::new();
    history.push(b"status");
    assert_eq!(history.entries(), 1);
    assert_eq!(history.recall(0), Some(&b"status"[..]));
}

#[test]
fn recall_orders_newest_first() {
    let mut history = History::<64>::new();
    history.push(b"first");
    history.push(b"second");
    history.push(b"third");
    assert_eq!(history.recall(0), Some(&b"third"[..]));
    assert_eq!(history.recall(1), Some(&b"second"[..]));
    assert_eq!(history.recall(2), Some(&b"first"[..]));
    assert_eq!(history.recall(3), None);
}

#[test]
fn empty_lines_are_not_stored() {
    // Skipping empty pushes is a deliberate choice: a blank line recalls as
    // nothing useful and would only churn the store.
    let mut history = History::<32>::new();
    history.push(b"");
    assert_eq!(history.entries(), 0);
}

#[test]
fn zero_capacity_store_ignores_pushes() {
    let mut history = History::<0>::new();
    history.push(b"anything");
    assert_eq!(history.entries(), 0);
    assert_eq!(history.recall(0), None);
}

#[test]
fn overflow_evicts_oldest_entries_first() {
    // Each entry costs 1 + len bytes; "aaaa".."dddd" cost 5 each, so a
    // 16-byte store holds three at most.
    let mut history = History::<16>::new();
    history.push(b"aaaa");
    history.push(b"bbbb");
    history.push(b"cccc");
    assert_eq!(history.entries(), 3);

    history.push(b"dddd");
    assert_eq!(history.entries(), 3);
    assert_eq!(history.recall(0), Some(&b"dddd"[..]));
    assert_eq!(history.recall(1), Some(&b"cccc"[..]));
    assert_eq!(history.recall(2), Some(&b"bbbb"[..]));
    // "aaaa" was evicted.
    assert_eq!(history.recall(3), None);
}

#[test]
fn oversized_entry_evicts_everything_and_is_truncated() {
    let mut history = History::<8>::new();
    history.push(b"ab");
    history.push(b"0123456789");
    assert_eq!(history.entries(), 1);
    // Truncated to H - 1 bytes.
    assert_eq!(history.recall(0), Some(&b"0123456"[..]));
}

#[test]
fn variable_length_entries_pack_tightly() {
    let mut history = History::<12>::new();
    history.push(b"a");
    history.push(b"bb");
    history.push(b"ccc");
    // 2 + 3 + 4 = 9 bytes used; all three fit.
    assert_eq!(history.entries(), 3);

    history.push(b"ddd");
    // Needs 4 bytes with 3 free; evicting "a" (2 bytes) makes room.
    assert_eq!(history.entries(), 3);
    assert_eq!(history.recall(0), Some(&b"ddd"[..]));
    assert_eq!(history.recall(1), Some(&b"ccc"[..]));
    assert_eq!(history.recall(2), Some(&b"bb"[..]));
    assert_eq!(history.recall(3), None);
}

#[test]
fn step_older_walks_into_the_past_and_saturates() {
    let mut history = History::<32>::new();
    history.push(b"first");
    history.push(b"second");

    assert_eq!(history.step_older(), Some(&b"second"[..]));
    assert_eq!(history.step_older(), Some(&b"first"[..]));
    // Saturates at the oldest entry.
    assert_eq!(history.step_older(), Some(&b"first"[..]));
}

#[test]
fn step_older_on_empty_store_returns_none() {
    let mut history = History::<32>::new();
    assert_eq!(history.step_older(), None);
}

#[test]
fn step_newer_saturates_to_the_empty_line() {
    let mut history = History::<32>::new();
    history.push(b"first");
    history.push(b"second");

    assert_eq!(history.step_older(), Some(&b"second"[..]));
    assert_eq!(history.step_older(), Some(&b"first"[..]));
    assert_eq!(history.step_newer(), Some(&b"second"[..]));
    // Past the newest entry the protocol restores an empty line, not the
    // in-progress edit.
    assert_eq!(history.step_newer(), None);
    assert_eq!(history.step_newer(), None);
}

#[test]
fn reset_recall_restarts_stepping_at_the_newest_entry() {
    let mut history = History::<32>::new();
    history.push(b"first");
    history.push(b"second");

    assert_eq!(history.step_older(), Some(&b"second"[..]));
    assert_eq!(history.step_older(), Some(&b"first"[..]));
    history.reset_recall();
    assert_eq!(history.step_older(), Some(&b"second"[..]));
}

#[test]
fn push_resets_recall_position() {
    let mut history = History::<32>::new();
    history.push(b"first");
    assert_eq!(history.step_older(), Some(&b"first"[..]));

    history.push(b"second");
    assert_eq!(history.step_older(), Some(&b"second"[..]));
}

#[test]
fn long_content_is_truncated_to_prefix_range() {
    // The 1-byte length prefix caps entries at 255 bytes even in a larger
    // store.
    let mut history = History::<512>::new();
    let content = [b'x'; 300];
    history.push(&content);
    assert_eq!(history.recall(0).map(|e| e.len()), Some(255));
}
