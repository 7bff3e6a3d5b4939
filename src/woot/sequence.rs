// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! The ordered container for the replicated string.
//!
//! A flat `Vec` of characters, always bracketed by the begin/end sentinels,
//! tombstones included. Positional queries scan; identifier presence is an
//! `FxHashSet` hit, because executability checks on the pending pool probe
//! presence far more often than anything asks for a position.
//!
//! Array semantics are the reference representation. A balanced tree would
//! turn the O(n) scans into O(log n) but must make exactly the same
//! ordering decisions.

use rustc_hash::FxHashSet;

use crate::woot::id::CharId;
use crate::woot::wchar::WChar;
use crate::woot::Error;
use crate::woot::Result;

/// The ordered list of every character this site has integrated.
#[derive(Clone, Debug)]
pub struct Sequence {
    chars: Vec<WChar>,
    /// Identifier presence index.
    present: FxHashSet<CharId>,
}

impl Sequence {
    /// A fresh sequence holding only the two sentinels.
    pub fn new() -> Sequence {
        let mut present = FxHashSet::default();
        present.insert(CharId::BEGIN);
        present.insert(CharId::END);
        return Sequence {
            chars: vec![WChar::begin(), WChar::end()],
            present,
        };
    }

    /// Total count, tombstones and sentinels included.
    pub fn len(&self) -> usize {
        return self.chars.len();
    }

    /// The character at sequence index `i`. Panics outside `[0, len)`.
    pub fn at(&self, i: usize) -> &WChar {
        return &self.chars[i];
    }

    /// The character with identifier `id`, if present.
    pub fn find(&self, id: &CharId) -> Option<&WChar> {
        if !self.present.contains(id) {
            return None;
        }
        return self.chars.iter().find(|c| c.id == *id);
    }

    fn find_mut(&mut self, id: &CharId) -> Option<&mut WChar> {
        if !self.present.contains(id) {
            return None;
        }
        return self.chars.iter_mut().find(|c| c.id == *id);
    }

    /// Sequence index of the character with identifier `id`.
    pub fn pos(&self, id: &CharId) -> Option<usize> {
        if !self.present.contains(id) {
            return None;
        }
        return self.chars.iter().position(|c| c.id == *id);
    }

    /// Whether a character with identifier `id` is in the sequence.
    /// Tombstones count.
    #[inline]
    pub fn contains(&self, id: &CharId) -> bool {
        return self.present.contains(id);
    }

    /// Splice `wchar` in at index `i`, shifting the tail right.
    ///
    /// Panics if `i > len` or if the identifier is already present; both are
    /// caller bugs, not runtime conditions.
    pub fn insert_at(&mut self, wchar: WChar, i: usize) {
        assert!(
            !self.present.contains(&wchar.id),
            "duplicate identifier {}",
            wchar.id
        );
        self.present.insert(wchar.id);
        self.chars.insert(i, wchar);
    }

    /// The characters strictly between `from` and `to` in sequence order.
    ///
    /// Fails with [`Error::BadRange`] when `to` does not occur after `from`,
    /// and with [`Error::AnchorMissing`] when either endpoint is absent.
    pub fn subseq(&self, from: &CharId, to: &CharId) -> Result<&[WChar]> {
        let p_from = self.pos(from).ok_or(Error::AnchorMissing(*from))?;
        let p_to = self.pos(to).ok_or(Error::AnchorMissing(*to))?;
        if p_to <= p_from {
            return Err(Error::BadRange { from: *from, to: *to });
        }
        return Ok(&self.chars[p_from + 1..p_to]);
    }

    /// The visible text: every visible payload in sequence order, sentinels
    /// excluded (they carry no payload).
    pub fn visible_value(&self) -> String {
        return self
            .chars
            .iter()
            .filter(|c| c.is_visible())
            .filter_map(|c| c.value)
            .collect();
    }

    /// The `i`-th visible character, sentinels included in the count:
    /// `ith_visible(0)` is the begin sentinel.
    pub fn ith_visible(&self, i: usize) -> Option<&WChar> {
        return self.chars.iter().filter(|c| c.is_visible()).nth(i);
    }

    /// Number of visible characters, sentinels included. Never below 2.
    pub fn visible_count(&self) -> usize {
        return self.chars.iter().filter(|c| c.is_visible()).count();
    }

    /// Flip the character with `id` into a tombstone.
    /// Returns whether the flag actually changed (false when the character
    /// is absent or already hidden).
    pub(crate) fn hide(&mut self, id: &CharId) -> bool {
        match self.find_mut(id) {
            Some(c) => return c.hide(),
            None => return false,
        }
    }

    /// Iterate the full sequence in order, sentinels and tombstones included.
    pub fn iter(&self) -> impl Iterator<Item = &WChar> {
        return self.chars.iter();
    }
}

impl Default for Sequence {
    fn default() -> Self {
        return Self::new();
    }
}
