// model = "claude-opus-4-5"
// created = "2026-02-02"
// modified = "2026-02-03"
// driver = "Isaac Clayton"

//! Scratch demo: two sites editing concurrently, then converging.

use weft::site::SiteId;
use weft::woot::replica::Replica;

fn main() {
    let mut alice = Replica::new(SiteId(1));
    let mut bob = Replica::new(SiteId(2));

    // Alice types "woot" while Bob, starting from the same empty document,
    // types "hi ".
    let mut from_alice = Vec::new();
    for (i, c) in "woot".chars().enumerate() {
        from_alice.push(alice.generate_insert(i, c).expect("alice insert"));
    }

    let mut from_bob = Vec::new();
    for (i, c) in "hi ".chars().enumerate() {
        from_bob.push(bob.generate_insert(i, c).expect("bob insert"));
    }

    println!("alice before sync: {:?}", alice.value());
    println!("bob   before sync: {:?}", bob.value());

    // Cross-deliver, Bob's in reverse order just to show it doesn't matter.
    for op in from_alice {
        bob.receive(op);
    }
    for op in from_bob.into_iter().rev() {
        alice.receive(op);
    }
    alice.drain().expect("alice drain");
    bob.drain().expect("bob drain");

    println!("alice after sync:  {:?}", alice.value());
    println!("bob   after sync:  {:?}", bob.value());
    assert_eq!(alice.value(), bob.value());
}
