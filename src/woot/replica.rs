// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! The replicated string façade.
//!
//! One `Replica` per site. Local edits go through [`Replica::generate_insert`]
//! and [`Replica::generate_delete`], which mutate the local sequence and hand
//! back the operation to ship. Remote operations come in through
//! [`Replica::receive`] and take effect on [`Replica::drain`].
//!
//! # Position conventions
//!
//! Both entry points index *visible user characters*; tombstones and the
//! sentinels are invisible to callers.
//!
//! - `generate_insert(pos, v)`: `pos` is a gap index. `0` inserts before the
//!   first character, `visible_len()` appends.
//! - `generate_delete(pos)`: `pos` addresses a character. `0` deletes the
//!   first character, `visible_len() - 1` the last.
//!
//! So for a document showing `"ab"`, `generate_insert(1, 'x')` yields
//! `"axb"` and `generate_delete(1)` yields `"a"`.
//!
//! The core is single-threaded and synchronous: nothing here blocks, spawns,
//! or suspends. Hosts running several replicas give each its own `Replica`;
//! there is no shared state between them.

use crate::site::SiteClock;
use crate::site::SiteId;
use crate::woot::id::CharId;
use crate::woot::integrate;
use crate::woot::op::Op;
use crate::woot::pool::Pool;
use crate::woot::sequence::Sequence;
use crate::woot::wchar::WChar;
use crate::woot::Error;
use crate::woot::Result;

/// A site's replica of the shared document.
#[derive(Clone, Debug)]
pub struct Replica {
    site: SiteId,
    clock: SiteClock,
    seq: Sequence,
    pool: Pool,
}

impl Replica {
    /// Create a replica for `site`.
    ///
    /// Panics on the reserved sentinel site `0`: its identifiers would
    /// collide with the sequence sentinels.
    pub fn new(site: SiteId) -> Replica {
        assert!(!site.is_sentinel(), "site 0 is reserved for the sentinels");
        return Replica {
            site,
            clock: SiteClock::new(),
            seq: Sequence::new(),
            pool: Pool::new(),
        };
    }

    /// Insert `value` at gap `pos` and return the operation to ship.
    ///
    /// Fails with [`Error::PositionOutOfRange`] when `pos > visible_len()`;
    /// nothing is minted and the clock does not advance.
    pub fn generate_insert(&mut self, pos: usize, value: char) -> Result<Op> {
        let len = self.visible_len();
        if pos > len {
            return Err(Error::PositionOutOfRange { pos, len });
        }

        // The anchors are the visible neighbours of the gap; ith_visible
        // counts the begin sentinel, so the gap before the first character
        // sits between visible indices 0 and 1.
        let cp = self
            .seq
            .ith_visible(pos)
            .map(|c| c.id)
            .ok_or(Error::PositionOutOfRange { pos, len })?;
        let cn = self
            .seq
            .ith_visible(pos + 1)
            .map(|c| c.id)
            .ok_or(Error::PositionOutOfRange { pos, len })?;

        let id = CharId::new(self.site, self.clock.tick());
        let wchar = WChar::new(id, value, cp, cn);
        integrate::insert(&mut self.seq, wchar.clone(), cp, cn)?;
        return Ok(Op::Insert(wchar));
    }

    /// Delete the `pos`-th visible character and return the operation to
    /// ship.
    ///
    /// Fails with [`Error::PositionOutOfRange`] when `pos >= visible_len()`.
    pub fn generate_delete(&mut self, pos: usize) -> Result<Op> {
        let len = self.visible_len();
        if pos >= len {
            return Err(Error::PositionOutOfRange { pos, len });
        }

        // Skip the begin sentinel: the pos-th character is visible index
        // pos + 1.
        let target = self
            .seq
            .ith_visible(pos + 1)
            .map(|c| c.id)
            .ok_or(Error::PositionOutOfRange { pos, len })?;
        integrate::delete(&mut self.seq, &target);
        return Ok(Op::Delete(target));
    }

    /// Accept a remote operation into the pending pool.
    ///
    /// Operations already reflected in the sequence (a duplicate insert, a
    /// delete of an already-invisible character) are dropped here. Call
    /// [`Replica::drain`] to make progress.
    pub fn receive(&mut self, op: Op) {
        if op.is_redundant(&self.seq) {
            tracing::trace!(id = %op.id(), "dropping redundant operation");
            return;
        }
        self.pool.push(op);
    }

    /// Execute every currently-executable pooled operation, to fixed point.
    ///
    /// Returns whether anything executed, so a host can reschedule a drain
    /// after more operations arrive. A drain that makes no progress is not
    /// an error.
    pub fn drain(&mut self) -> Result<bool> {
        let mut executed = 0usize;
        while let Some(op) = self.pool.take_next_executable(&self.seq) {
            self.execute(op)?;
            executed += 1;
        }
        if executed > 0 {
            tracing::debug!(executed, pending = self.pool.len(), "drained pool");
        }
        return Ok(executed > 0);
    }

    /// Apply one operation whose preconditions hold.
    fn execute(&mut self, op: Op) -> Result<()> {
        match op {
            Op::Insert(wchar) => {
                // A duplicate can still be queued behind the copy that
                // already executed; a present identifier is never
                // re-integrated.
                if self.seq.contains(&wchar.id) {
                    return Ok(());
                }
                let cp = wchar.prev_id.ok_or(Error::AnchorMissing(wchar.id))?;
                let cn = wchar.next_id.ok_or(Error::AnchorMissing(wchar.id))?;
                return integrate::insert(&mut self.seq, wchar, cp, cn);
            }
            Op::Delete(id) => {
                integrate::delete(&mut self.seq, &id);
                return Ok(());
            }
        }
    }

    /// The visible text.
    pub fn value(&self) -> String {
        return self.seq.visible_value();
    }

    /// Number of visible user characters.
    pub fn visible_len(&self) -> usize {
        return self.seq.visible_count() - 2;
    }

    /// Number of operations still waiting on their preconditions.
    pub fn pending(&self) -> usize {
        return self.pool.len();
    }

    /// This replica's site identifier.
    pub fn site(&self) -> SiteId {
        return self.site;
    }

    /// Read access to the underlying sequence.
    pub fn sequence(&self) -> &Sequence {
        return &self.seq;
    }
}
