//! Pile tests.
//!
//! These tests verify pile ordering, shuffling and pre-rolls:
//! - Shuffle keeps the multiset of copies
//! - Shuffle is uniform over orderings
//! - Pre-rolls are assigned once and survive moves

use engagement_engine::cards::{CardId, CardInstance};
use engagement_engine::core::InstanceId;
use engagement_engine::zones::{Pile, PRE_ROLL_MAX, PRE_ROLL_MIN};
use rustc_hash::FxHashMap;

fn copies(n: u32) -> Vec<CardInstance> {
    (0..n).map(|i| CardInstance::tactical(InstanceId(i), CardId(i))).collect()
}

// =============================================================================
// Shuffle
// =============================================================================

/// Shuffling an empty pile is a no-op.
#[test]
fn test_shuffle_empty() {
    let mut pile = Pile::with_seed(1);
    pile.shuffle();
    assert!(pile.is_empty());
}

/// Shuffling a single card leaves it on top.
#[test]
fn test_shuffle_single() {
    let mut pile = Pile::with_seed(1);
    pile.add_range(copies(1));
    pile.shuffle();
    assert_eq!(pile.ids(), vec![InstanceId(0)]);
}

/// Shuffling keeps every copy exactly once.
#[test]
fn test_shuffle_preserves_cards() {
    let mut pile = Pile::with_seed(99);
    pile.add_range(copies(30));
    pile.shuffle();

    let mut ids = pile.ids();
    assert_eq!(ids.len(), 30);
    ids.sort();
    assert_eq!(ids, (0..30).map(InstanceId).collect::<Vec<_>>());
}

/// Same seed, same order.
#[test]
fn test_shuffle_is_reproducible() {
    let mut a = Pile::with_seed(5);
    let mut b = Pile::with_seed(5);
    a.add_range(copies(20));
    b.add_range(copies(20));
    a.shuffle();
    b.shuffle();
    assert_eq!(a.ids(), b.ids());
}

/// Each of the 6 orderings of 3 cards appears about 1/6 of the time.
#[test]
fn test_shuffle_uniformity() {
    const TRIALS: usize = 6000;
    let mut pile = Pile::with_seed(2024);
    pile.add_range(copies(3));

    let mut counts: FxHashMap<Vec<InstanceId>, usize> = FxHashMap::default();
    for _ in 0..TRIALS {
        pile.shuffle();
        *counts.entry(pile.ids()).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "every permutation should appear");
    let expected = TRIALS / 6;
    for (order, count) in &counts {
        let deviation = (*count as f64 - expected as f64).abs() / expected as f64;
        assert!(deviation <= 0.2, "{order:?} appeared {count} times, expected about {expected}");
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Draws come from the front, adds go to the back.
#[test]
fn test_draw_order() {
    let mut pile = Pile::with_seed(3);
    pile.add_range(copies(4));

    let drawn: Vec<_> = pile.draw_multiple(2).into_iter().map(|c| c.id).collect();
    assert_eq!(drawn, vec![InstanceId(0), InstanceId(1)]);

    pile.add(CardInstance::tactical(InstanceId(9), CardId(9)));
    assert_eq!(pile.ids(), vec![InstanceId(2), InstanceId(3), InstanceId(9)]);
}

/// Drawing more than the pile holds returns what is there.
#[test]
fn test_draw_multiple_past_end() {
    let mut pile = Pile::with_seed(3);
    pile.add_range(copies(2));
    assert_eq!(pile.draw_multiple(5).len(), 2);
    assert!(pile.draw_top().is_none());
}

/// `take_where` keeps the order of both kept and taken cards.
#[test]
fn test_take_where_preserves_order() {
    let mut pile = Pile::with_seed(3);
    pile.add_range(copies(6));

    let even: Vec<_> = pile.take_where(|c| c.id.raw() % 2 == 0).into_iter().map(|c| c.id).collect();
    assert_eq!(even, vec![InstanceId(0), InstanceId(2), InstanceId(4)]);
    assert_eq!(pile.ids(), vec![InstanceId(1), InstanceId(3), InstanceId(5)]);
}

// =============================================================================
// Pre-rolls
// =============================================================================

/// Adding assigns a pre-roll within bounds.
#[test]
fn test_pre_roll_assigned_on_add() {
    let mut pile = Pile::with_seed(11);
    pile.add_range(copies(50));
    for card in pile.iter() {
        let roll = card.pre_roll().unwrap();
        assert!((PRE_ROLL_MIN..=PRE_ROLL_MAX).contains(&roll));
    }
}

/// A pre-roll never changes once assigned, even across piles and shuffles.
#[test]
fn test_pre_roll_idempotent() {
    let mut first = Pile::with_seed(11);
    let mut second = Pile::with_seed(12);
    first.add_range(copies(10));

    let before: Vec<_> = first.iter().map(|c| (c.id, c.pre_roll())).collect();

    second.add_range(first.draw_all());
    second.shuffle();
    first.add_range(second.draw_all());

    for (id, roll) in before {
        assert_eq!(first.get(id).unwrap().pre_roll(), roll);
    }
}
