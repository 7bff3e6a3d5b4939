// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-02"
// driver = "Isaac Clayton"

//! Site identity and the per-site clock.
//!
//! A site is an independent replica of the document. Who hands out site
//! identifiers is someone else's problem (a server, a registry, a keypair
//! fingerprint); this crate only requires that they are unique and that
//! site `0` is never handed out, because the sequence sentinels live there.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Identifies an editing site.
///
/// Site identifiers order character identifiers across sites, so two sites
/// must never share one. The value `0` is reserved for the pseudo-site that
/// owns the begin/end sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteId(pub u64);

impl SiteId {
    /// The pseudo-site that owns the sequence sentinels.
    pub const SENTINEL: SiteId = SiteId(0);

    /// Check whether this is the reserved sentinel site.
    pub fn is_sentinel(&self) -> bool {
        return self.0 == 0;
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

/// Monotonic counter minting the clock half of fresh character identifiers.
///
/// Each site owns exactly one. Uniqueness of identifiers follows from this
/// counter never repeating a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SiteClock {
    time: u64,
}

impl SiteClock {
    /// Create a clock starting at 0.
    pub fn new() -> SiteClock {
        return SiteClock { time: 0 };
    }

    /// The clock value the next identifier will carry.
    #[inline]
    pub fn time(&self) -> u64 {
        return self.time;
    }

    /// Issue the next clock value and advance. The first call returns 0.
    #[inline]
    pub fn tick(&mut self) -> u64 {
        let issued = self.time;
        self.time += 1;
        return issued;
    }
}
