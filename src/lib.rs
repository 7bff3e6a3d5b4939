// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! Weft - collaborative text editing over the WOOT replicated sequence.
//!
//! Every participating site owns a [`woot::replica::Replica`]: a replicated
//! string that merges concurrent edits without locks, rollback, or
//! operational transformation. Local edits produce self-describing
//! operations; ship them however you like. Once two sites have absorbed the
//! same set of operations they show the same text, no matter the order the
//! operations arrived in.
//!
//! # Quick Start
//!
//! ```
//! use weft::site::SiteId;
//! use weft::woot::replica::Replica;
//!
//! // Two sites editing the same document.
//! let mut alice = Replica::new(SiteId(1));
//! let mut bob = Replica::new(SiteId(2));
//!
//! // Alice types "hi" and ships the operations to Bob.
//! let h = alice.generate_insert(0, 'h').unwrap();
//! let i = alice.generate_insert(1, 'i').unwrap();
//!
//! // Delivery order does not matter.
//! bob.receive(i);
//! bob.receive(h);
//! bob.drain().unwrap();
//!
//! assert_eq!(alice.value(), "hi");
//! assert_eq!(bob.value(), "hi");
//! ```

pub mod site;
pub mod woot;
