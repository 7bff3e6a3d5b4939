// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! The pending-operation pool.
//!
//! Remote operations land here on receipt. An operation whose anchors have
//! not arrived yet simply waits; there is no expiry and no ordering
//! requirement. The replica drains the pool by repeatedly executing the
//! first executable operation until none remains, which reaches the same
//! fixed point as sweeping the pool in passes: every removal is re-checked
//! against the current sequence, so one execution can unblock operations
//! anywhere in the pool.
//!
//! Each replica owns its own pool. Sharing one pool between replicas in the
//! same process would leak operations across documents.

use crate::woot::op::Op;
use crate::woot::sequence::Sequence;

/// Received operations whose preconditions may not hold yet.
#[derive(Clone, Debug, Default)]
pub struct Pool {
    ops: Vec<Op>,
}

impl Pool {
    /// Create an empty pool.
    pub fn new() -> Pool {
        return Pool { ops: Vec::new() };
    }

    /// Append a received operation.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Number of operations still waiting.
    pub fn len(&self) -> usize {
        return self.ops.len();
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        return self.ops.is_empty();
    }

    /// Remove and return the first operation executable against `seq`, in
    /// pool order. Returns `None` when nothing currently qualifies.
    pub fn take_next_executable(&mut self, seq: &Sequence) -> Option<Op> {
        let idx = self.ops.iter().position(|op| op.is_executable(seq))?;
        return Some(self.ops.remove(idx));
    }
}
