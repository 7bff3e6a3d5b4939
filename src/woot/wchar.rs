// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! The woot-character: an identity record with causal anchors.
//!
//! `prev_id` and `next_id` are *not* live pointers. They record the visible
//! neighbours at the moment the character was generated and never change,
//! even as later integrations place other characters between them. Current
//! neighbours are whatever the sequence says; the anchors are history.
//!
//! Anchors are identifier values resolved by lookup, never references. This
//! keeps the record acyclic and lets the container pick any representation.

use serde::Deserialize;
use serde::Serialize;

use crate::woot::id::CharId;

/// A single replicated character.
///
/// Created by exactly one site, integrated everywhere, removed nowhere: a
/// delete only flips `visible` off, leaving a tombstone that future
/// concurrent inserts can still anchor on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WChar {
    /// Globally unique identifier. Immutable.
    pub id: CharId,
    /// The character payload. Sentinels carry none.
    pub value: Option<char>,
    /// Visibility flag. Flips `true -> false` at most once, never back.
    visible: bool,
    /// Identifier of the visible predecessor at generation time.
    /// `None` only for the begin sentinel.
    pub prev_id: Option<CharId>,
    /// Identifier of the visible successor at generation time.
    /// `None` only for the sentinels.
    pub next_id: Option<CharId>,
}

impl WChar {
    /// The begin sentinel: first in every sequence, never deleted, never
    /// shipped as an operation.
    pub fn begin() -> WChar {
        return WChar {
            id: CharId::BEGIN,
            value: None,
            visible: true,
            prev_id: None,
            next_id: None,
        };
    }

    /// The end sentinel: last in every sequence.
    pub fn end() -> WChar {
        return WChar {
            id: CharId::END,
            value: None,
            visible: true,
            prev_id: Some(CharId::BEGIN),
            next_id: None,
        };
    }

    /// A freshly generated user character, visible, anchored on the visible
    /// neighbours it was typed between.
    pub fn new(id: CharId, value: char, prev_id: CharId, next_id: CharId) -> WChar {
        return WChar {
            id,
            value: Some(value),
            visible: true,
            prev_id: Some(prev_id),
            next_id: Some(next_id),
        };
    }

    /// Whether this character is currently visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        return self.visible;
    }

    /// Whether this is one of the two sentinels.
    pub fn is_sentinel(&self) -> bool {
        return self.id.site.is_sentinel();
    }

    /// Turn this character into a tombstone.
    /// Returns whether the flag actually changed.
    pub(crate) fn hide(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        return was_visible;
    }
}
