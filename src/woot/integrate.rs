// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! Insert and delete integration.
//!
//! This is the core of WOOT. Integrating an insert places the new character
//! between its two anchors consistently with every concurrent insert, at
//! every site, without coordination:
//!
//! 1. If nothing sits between the anchors, splice the character in.
//! 2. Otherwise, filter the characters between the anchors down to the
//!    *competitors*: those whose own original anchors bracket the same
//!    region. Characters that were inserted into a narrower gap are skipped;
//!    they ride along with their competitor.
//! 3. Walk the competitors in sequence order while their identifiers precede
//!    the new character's, then recurse into the narrowed window.
//!
//! The recursion strictly shrinks the window, so it terminates; in the worst
//! case it bottoms out on an empty window. Determinism follows from the
//! anchors, the (inductively identical) current sequence, and the total
//! order on identifiers. Every recursive step pays O(n) positional lookups
//! and the depth is O(n), so a pathological document costs O(n^3); fine for
//! the flat-array representation, and any faster container must keep the
//! ordering decisions bit-for-bit.
//!
//! Deletion is the easy half: flip the character invisible and leave the
//! tombstone in place, because not-yet-delivered inserts may anchor on it.

use crate::woot::id::CharId;
use crate::woot::sequence::Sequence;
use crate::woot::wchar::WChar;
use crate::woot::Error;
use crate::woot::Result;

/// Place `c` between `cp` and `cn`, which must both be present in `seq`
/// with `cp` strictly before `cn`.
///
/// `c`'s identifier must not already be present; callers check presence
/// before integrating (re-integration would duplicate the character).
pub fn insert(seq: &mut Sequence, c: WChar, cp: CharId, cn: CharId) -> Result<()> {
    let p_cp = seq.pos(&cp).ok_or(Error::AnchorMissing(cp))?;
    let p_cn = seq.pos(&cn).ok_or(Error::AnchorMissing(cn))?;
    if p_cn <= p_cp {
        return Err(Error::BadRange { from: cp, to: cn });
    }

    // Empty window: splice in directly.
    if p_cn - p_cp == 1 {
        tracing::trace!(id = %c.id, at = p_cn, "placing character");
        seq.insert_at(c, p_cn);
        return Ok(());
    }

    // Linearisation: the competitors are the characters between the anchors
    // whose original anchors bracket at least our whole window. The begin
    // and end anchors rail the walk on both sides.
    let mut rail: Vec<CharId> = vec![cp];
    for s in seq.subseq(&cp, &cn)? {
        let s_prev = s.prev_id.ok_or(Error::AnchorMissing(s.id))?;
        let s_next = s.next_id.ok_or(Error::AnchorMissing(s.id))?;
        let p_prev = seq.pos(&s_prev).ok_or(Error::AnchorMissing(s_prev))?;
        let p_next = seq.pos(&s_next).ok_or(Error::AnchorMissing(s_next))?;
        if p_prev <= p_cp && p_cn <= p_next {
            rail.push(s.id);
        }
    }
    rail.push(cn);
    debug_assert!(rail.len() > 2, "non-empty window with no competitors");

    // Walk the identifier order to the narrowed window, then recurse.
    let mut i = 1;
    while i < rail.len() - 1 && rail[i] < c.id {
        i += 1;
    }
    return insert(seq, c, rail[i - 1], rail[i]);
}

/// Tombstone the character with identifier `target`.
///
/// Idempotent: deleting an already-invisible character reports `false` and
/// changes nothing. Absent targets also report `false`; executability checks
/// keep that from happening on the pool path. The sentinels are never
/// deleted, whatever the wire claims.
pub fn delete(seq: &mut Sequence, target: &CharId) -> bool {
    if target.site.is_sentinel() {
        return false;
    }
    let hidden = seq.hide(target);
    if hidden {
        tracing::trace!(id = %target, "tombstoned character");
    }
    return hidden;
}
