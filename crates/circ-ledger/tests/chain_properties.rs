//! Property and scenario tests for the ledger's chain-integrity protocol,
//! driven entirely through the public API.

use circ_ledger::{ChainAuditor, ChainError, Ledger, LedgerEntry};
use circ_types::{CheckoutEvent, EntryHash};
use proptest::prelude::*;

fn arb_event() -> impl Strategy<Value = CheckoutEvent> {
    ("[A-Z][0-9]{1,4}", "[a-z]{1,12}", "20[0-9]{2}-[0-1][0-9]-[0-3][0-9]")
        .prop_map(|(item, borrower, date)| CheckoutEvent::new(item, borrower, date))
}

proptest! {
    // Chain integrity holds after every successful append.
    #[test]
    fn chain_valid_after_every_append(events in prop::collection::vec(arb_event(), 0..20)) {
        let mut ledger = Ledger::create_genesis();
        for event in events {
            ledger.append(event).unwrap();
            prop_assert!(ledger.full_chain_valid());
        }
    }

    // Positions mirror indices for any append sequence.
    #[test]
    fn positions_mirror_indices(events in prop::collection::vec(arb_event(), 0..20)) {
        let mut ledger = Ledger::create_genesis();
        for event in events {
            ledger.append(event).unwrap();
        }
        for (i, entry) in ledger.entries().iter().enumerate() {
            prop_assert_eq!(entry.position, i as u64);
        }
    }

    // Recomputing any stored entry's digest reproduces the stored value.
    #[test]
    fn digests_are_reproducible(events in prop::collection::vec(arb_event(), 0..20)) {
        let mut ledger = Ledger::create_genesis();
        for event in events {
            ledger.append(event).unwrap();
        }
        for entry in ledger.entries() {
            prop_assert_eq!(entry.computed_hash(), entry.content_hash);
            prop_assert!(entry.matches_hash(&entry.content_hash));
        }
    }

    // A rejected append leaves the snapshot identical, length and content.
    #[test]
    fn failed_append_is_atomic(
        events in prop::collection::vec(arb_event(), 0..10),
        bad_event in arb_event(),
        skip in 2u64..100,
    ) {
        let mut ledger = Ledger::create_genesis();
        for event in events {
            ledger.append(event).unwrap();
        }
        let before = ledger.snapshot();

        let mut candidate = LedgerEntry::next(ledger.tail(), bad_event);
        candidate.position += skip;
        candidate.content_hash = candidate.computed_hash();
        prop_assert!(ledger.append_entry(candidate).is_err());

        prop_assert_eq!(ledger.snapshot(), before);
    }

    // Flipping one stored content-hash byte is always detected.
    #[test]
    fn tampered_snapshot_fails_audit(
        events in prop::collection::vec(arb_event(), 1..10),
        index_seed: usize,
        byte_seed: usize,
    ) {
        let mut ledger = Ledger::create_genesis();
        for event in events {
            ledger.append(event).unwrap();
        }

        let mut entries = ledger.snapshot();
        let index = index_seed % entries.len();
        let mut bytes: [u8; 32] = *entries[index].content_hash.as_bytes();
        bytes[byte_seed % 32] ^= 0x01;
        entries[index].content_hash = EntryHash::from_hash(bytes);

        prop_assert!(!ChainAuditor::audit(&entries).is_valid());
    }
}

// Scenario A: a fresh ledger is exactly one sentinel entry.
#[test]
fn genesis_ledger_has_single_sentinel_entry() {
    let ledger = Ledger::create_genesis();
    assert_eq!(ledger.len(), 1);

    let genesis = &ledger.entries()[0];
    assert_eq!(genesis.position, 0);
    assert_eq!(genesis.prev_hash, None);
    assert!(genesis.payload.is_genesis);
}

// Scenario B: the first real checkout chains onto genesis.
#[test]
fn first_checkout_chains_onto_genesis() {
    let mut ledger = Ledger::create_genesis();
    ledger
        .append(CheckoutEvent::new("B1", "alice", "2024-01-01"))
        .unwrap();

    assert_eq!(ledger.len(), 2);
    let entries = ledger.entries();
    assert_eq!(entries[1].prev_hash, Some(entries[0].content_hash));
    assert_eq!(entries[1].position, 1);
    assert_eq!(entries[1].payload.item_id, "B1");
    assert_eq!(entries[1].payload.borrower, "alice");
}

// Scenario C: a candidate skipping positions is rejected as a gap.
#[test]
fn skipped_position_is_rejected_as_gap() {
    let mut ledger = Ledger::create_genesis();

    let mut candidate = LedgerEntry::next(
        ledger.tail(),
        CheckoutEvent::new("B1", "alice", "2024-01-01"),
    );
    candidate.position = 5;
    candidate.content_hash = candidate.computed_hash();

    let error = ledger.append_entry(candidate).unwrap_err();
    assert_eq!(
        error,
        ChainError::PositionGap {
            expected: 1,
            found: 5
        }
    );
    assert_eq!(ledger.len(), 1);
}

// Scenario D: flipping one character of a stored hash breaks the audit.
#[test]
fn flipped_hash_character_breaks_audit() {
    let mut ledger = Ledger::create_genesis();
    ledger
        .append(CheckoutEvent::new("B1", "alice", "2024-01-01"))
        .unwrap();
    ledger
        .append(CheckoutEvent::new("B2", "bob", "2024-01-02"))
        .unwrap();

    let mut entries = ledger.snapshot();
    let mut hex = entries[0].content_hash.to_hex();
    let first = if hex.starts_with('0') { '1' } else { '0' };
    hex.replace_range(0..1, &first.to_string());
    entries[0].content_hash = EntryHash::from_hex(&hex).unwrap();

    assert!(!ChainAuditor::audit(&entries).is_valid());
}
