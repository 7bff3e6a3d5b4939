// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! The WOOT replicated sequence (Oster et al. 2005).
//!
//! WOOT merges concurrent edits without operational transformation. Every
//! character carries a globally unique identifier plus the identifiers of
//! its neighbours *at the moment it was typed*. Integration places each
//! character deterministically from those anchors and the total order on
//! identifiers, so replicas that absorb the same set of operations end up
//! byte-identical. Deleted characters stay in the sequence as invisible
//! tombstones: future concurrent inserts may still anchor on them.
//!
//! Module map:
//!
//! - [`id`]: character identifiers and their total order
//! - [`wchar`]: the character record with its causal anchors
//! - [`sequence`]: the ordered container, sentinels included
//! - [`integrate`]: the insertion/deletion integration algorithm
//! - [`op`]: operations shipped between sites
//! - [`pool`]: received operations waiting on their preconditions
//! - [`replica`]: the per-site façade tying it all together

pub mod id;
pub mod integrate;
pub mod op;
pub mod pool;
pub mod replica;
pub mod sequence;
pub mod wchar;

use thiserror::Error;

use crate::woot::id::CharId;

/// Errors surfaced by the replicated sequence.
///
/// All of these indicate caller misuse or a broken invariant; none is
/// recoverable at this layer. Duplicate deliveries, deletes of already
/// invisible characters, and drains that make no progress are absorbed
/// silently, not reported here.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A sub-range query where the right endpoint does not occur after the
    /// left. Integration never constructs one; this is a caller bug.
    #[error("bad range: {to} does not occur after {from}")]
    BadRange { from: CharId, to: CharId },

    /// A local edit addressed a visible position outside the document.
    /// Nothing was minted and the site clock did not advance.
    #[error("position {pos} out of range for {len} visible characters")]
    PositionOutOfRange { pos: usize, len: usize },

    /// An anchor lookup failed during integration. Executability is checked
    /// before execution, so seeing this means an invariant is broken.
    #[error("anchor {0} missing from sequence")]
    AnchorMissing(CharId),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;
