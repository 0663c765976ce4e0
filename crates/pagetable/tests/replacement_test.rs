mod common;

use common::Harness;
use pagetable::Policy;

#[test]
fn test_fifo_evicts_earliest_loaded() {
    let mut h = Harness::new(Policy::Fifo, 8, 3);
    h.reads(&[0, 1, 2]);
    h.read(3);
    assert!(!h.is_resident(0));
    assert!(h.is_resident(1));
    assert_eq!(h.resident(), vec![1, 2, 3]);
}

#[test]
fn test_fifo_ignores_hits() {
    let mut h = Harness::new(Policy::Fifo, 4, 2);
    h.reads(&[0, 1, 0, 2]);
    // page 0 was loaded first; the hit does not save it
    assert!(!h.is_resident(0));
    assert_eq!(h.resident(), vec![1, 2]);
    h.read(3);
    assert!(!h.is_resident(1));
    assert_eq!(h.resident(), vec![2, 3]);
}

#[test]
fn test_lru_evicts_least_recently_used() {
    let mut h = Harness::new(Policy::Lru, 4, 2);
    h.reads(&[0, 1, 0]);
    assert_eq!(h.resident(), vec![1, 0]);
    h.read(2);
    assert!(!h.is_resident(1));
    assert!(h.is_resident(0));
    assert_eq!(h.resident(), vec![0, 2]);
    assert_eq!(h.stats.faults(), 3);
    assert_eq!(h.stats.hits(), 1);
}

#[test]
fn test_lru_hit_on_tail_and_sole_page() {
    let mut h = Harness::new(Policy::Lru, 4, 3);
    h.read(2);
    h.read(2);
    assert_eq!(h.resident(), vec![2]);
    h.reads(&[0, 0]);
    assert_eq!(h.resident(), vec![2, 0]);
}

#[test]
fn test_clock_without_hits_matches_fifo() {
    let mut clock = Harness::new(Policy::Clock, 6, 3);
    let mut fifo = Harness::new(Policy::Fifo, 6, 3);
    let trace = [0, 1, 2, 3, 4, 0, 5, 1];
    for &page in &trace {
        let a = clock.read(page);
        let b = fifo.read(page);
        assert_eq!(a, b);
    }
    assert_eq!(clock.resident(), fifo.resident());
}

#[test]
fn test_clock_gives_second_chance() {
    let mut h = Harness::new(Policy::Clock, 4, 2);
    h.reads(&[0, 1, 0]);
    assert!(h.table.entry(0).expect("entry").referenced);

    // hand on 0: referenced, cleared and passed over; 1 goes
    h.read(2);
    assert!(h.is_resident(0));
    assert!(!h.is_resident(1));
    assert!(!h.table.entry(0).expect("entry").referenced);
    assert_eq!(h.resident(), vec![0, 2]);

    // 0 has used its second chance
    h.read(3);
    assert!(!h.is_resident(0));
    assert_eq!(h.resident(), vec![2, 3]);
}

#[test]
fn test_clock_all_referenced_wraps_around() {
    let mut h = Harness::new(Policy::Clock, 5, 3);
    h.reads(&[0, 1, 2, 0, 1, 2]);
    // full turn clears every bit, then the original head goes
    h.read(3);
    assert!(!h.is_resident(0));
    assert_eq!(h.resident(), vec![1, 2, 3]);
    for page in [1, 2] {
        assert!(!h.table.entry(page).expect("entry").referenced);
    }
}

#[test]
fn test_policy_reported() {
    for policy in [Policy::Fifo, Policy::Lru, Policy::Clock] {
        let h = Harness::new(policy, 1, 1);
        assert_eq!(h.table.policy(), policy);
    }
}
