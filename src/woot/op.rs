// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! Operations exchanged between sites.
//!
//! An operation is self-describing: no handshake or preamble is needed
//! before a receiver can integrate it. Inserts carry the full character
//! record, anchors included; deletes only need the target identifier.
//!
//! The transport may deliver operations late, reordered, or more than once.
//! Executability captures the one precondition integration has: the
//! characters an operation refers to must already be in the sequence.
//! Everything else about delivery is tolerated.

use serde::Deserialize;
use serde::Serialize;

use crate::woot::id::CharId;
use crate::woot::sequence::Sequence;
use crate::woot::wchar::WChar;

/// An edit shipped between sites.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Place a character. Carries the full record so the receiver can
    /// integrate from the anchors alone.
    Insert(WChar),
    /// Tombstone the character with this identifier.
    Delete(CharId),
}

impl Op {
    /// Whether this operation's preconditions hold against `seq`.
    ///
    /// An insert needs both anchors present (presence, not visibility:
    /// tombstones satisfy the check). A delete needs its target present.
    pub fn is_executable(&self, seq: &Sequence) -> bool {
        match self {
            Op::Insert(w) => {
                let prev_present = w.prev_id.map(|id| seq.contains(&id)).unwrap_or(false);
                let next_present = w.next_id.map(|id| seq.contains(&id)).unwrap_or(false);
                return prev_present && next_present;
            }
            Op::Delete(id) => return seq.contains(id),
        }
    }

    /// Whether this operation is already reflected in `seq`: an insert
    /// whose identifier is present, or a delete whose target is already
    /// invisible. Redundant operations can be dropped on receipt.
    pub fn is_redundant(&self, seq: &Sequence) -> bool {
        match self {
            Op::Insert(w) => return seq.contains(&w.id),
            Op::Delete(id) => {
                return match seq.find(id) {
                    Some(c) => !c.is_visible(),
                    None => false,
                };
            }
        }
    }

    /// The identifier of the character this operation concerns.
    pub fn id(&self) -> &CharId {
        match self {
            Op::Insert(w) => return &w.id,
            Op::Delete(id) => return id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteId;
    use crate::woot::integrate;

    fn wchar(site: u64, clock: u64, value: char) -> WChar {
        let id = CharId::new(SiteId(site), clock);
        return WChar::new(id, value, CharId::BEGIN, CharId::END);
    }

    #[test]
    fn insert_executable_once_anchors_arrive() {
        let seq = Sequence::new();

        // Anchored on the sentinels: executable against a fresh sequence.
        let op = Op::Insert(wchar(1, 0, 'a'));
        assert!(op.is_executable(&seq));

        // Anchored on a character nobody has seen: not executable.
        let ghost = CharId::new(SiteId(9), 9);
        let dangling = Op::Insert(WChar::new(
            CharId::new(SiteId(1), 1),
            'b',
            ghost,
            CharId::END,
        ));
        assert!(!dangling.is_executable(&seq));
    }

    #[test]
    fn delete_executable_when_target_present() {
        let mut seq = Sequence::new();
        let a = wchar(1, 0, 'a');
        let a_id = a.id;

        let op = Op::Delete(a_id);
        assert!(!op.is_executable(&seq));

        integrate::insert(&mut seq, a, CharId::BEGIN, CharId::END).unwrap();
        assert!(op.is_executable(&seq));

        // Tombstones still satisfy presence.
        integrate::delete(&mut seq, &a_id);
        assert!(op.is_executable(&seq));
    }

    #[test]
    fn redundancy() {
        let mut seq = Sequence::new();
        let a = wchar(1, 0, 'a');
        let a_id = a.id;

        let insert = Op::Insert(a.clone());
        let delete = Op::Delete(a_id);

        assert!(!insert.is_redundant(&seq));
        assert!(!delete.is_redundant(&seq));

        integrate::insert(&mut seq, a, CharId::BEGIN, CharId::END).unwrap();
        assert!(insert.is_redundant(&seq));
        assert!(!delete.is_redundant(&seq));

        integrate::delete(&mut seq, &a_id);
        assert!(delete.is_redundant(&seq));
    }

    #[test]
    fn wire_format() {
        // Operations are a tagged variant on the wire; inserts ship the
        // whole record, deletes just the identifier pair.
        let op = Op::Insert(wchar(1, 0, 'a'));
        let json = serde_json::to_string(&op).unwrap();
        let back: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
        assert!(json.contains("\"Insert\""));

        let op = Op::Delete(CharId::new(SiteId(1), 0));
        let json = serde_json::to_string(&op).unwrap();
        let back: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
        assert!(json.contains("\"Delete\""));
    }
}
