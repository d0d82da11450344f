//! Tab identity and theme allocation.

/// Ordered theme palette; tabs are assigned themes round-robin in this order.
pub const THEME_PALETTE: &[&str] = &[
    "ocean", "forest", "sunset", "amethyst", "crimson", "slate", "amber", "teal",
];

const ID_PREFIX: &str = "tab-";

/// Hands out tab ids and palette themes for one manager.
///
/// Both counters only move forward: closing a tab never returns its id or its
/// theme slot to the pool.
#[derive(Debug, Clone)]
pub struct TabAllocator {
    next_sequence: u64,
    /// Ids handed out after the numeric sequence ran out
    overflow: u64,
    theme_cursor: usize,
}

impl Default for TabAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl TabAllocator {
    pub fn new() -> Self {
        Self {
            next_sequence: 1,
            overflow: 0,
            theme_cursor: 0,
        }
    }

    /// Allocate a fresh tab id.
    ///
    /// Once the numeric sequence is exhausted, ids continue as
    /// `tab-<u64::MAX>-N`, which never parse back as a sequence number.
    pub fn next_id(&mut self) -> String {
        match self.next_sequence.checked_add(1) {
            Some(following) => {
                let id = format!("{}{}", ID_PREFIX, self.next_sequence);
                self.next_sequence = following;
                id
            }
            None => {
                self.overflow += 1;
                format!("{}{}-{}", ID_PREFIX, u64::MAX, self.overflow)
            }
        }
    }

    /// Allocate the next theme in palette order.
    pub fn next_theme(&mut self) -> &'static str {
        let theme = theme_at(self.theme_cursor);
        self.theme_cursor += 1;
        theme
    }

    /// Move both counters past a restored session.
    ///
    /// The id sequence skips the restored tab count and any restored id that uses
    /// our own `tab-N` format; the theme cursor moves to at least `restored_count`.
    pub fn fast_forward<'a>(
        &mut self,
        restored_count: usize,
        restored_ids: impl IntoIterator<Item = &'a str>,
    ) {
        let highest_restored = restored_ids
            .into_iter()
            .filter_map(parse_sequence)
            .max()
            .unwrap_or(0);
        self.next_sequence = self
            .next_sequence
            .max(restored_count as u64 + 1)
            .max(highest_restored + 1);
        self.theme_cursor = self.theme_cursor.max(restored_count);
    }
}

/// Theme for a palette position, wrapping around.
pub fn theme_at(index: usize) -> &'static str {
    THEME_PALETTE[index % THEME_PALETTE.len()]
}

/// Sequence number of a `tab-N` id. `u64::MAX` is never allocated as a plain
/// id, so it has nothing to skip past.
fn parse_sequence(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?
        .parse()
        .ok()
        .filter(|n| *n < u64::MAX)
}
