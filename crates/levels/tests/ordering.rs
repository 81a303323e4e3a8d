//! Integration tests for rank ordering and threshold admission.
//!
//! A record of rank R passes a threshold T exactly when R >= T; the named
//! levels keep their conventional numbering.

use levels::{Level, Severity};
use proptest::prelude::*;

// ============================================================================
// Threshold Admission
// ============================================================================

proptest! {
    #[test]
    fn admission_matches_rank_comparison(record in any::<u8>(), threshold in any::<u8>()) {
        let admitted = Level::new(threshold).admits(Level::new(record));
        prop_assert_eq!(admitted, record >= threshold);
    }

    #[test]
    fn level_ordering_matches_rank_ordering(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(Level::new(a).cmp(&Level::new(b)), a.cmp(&b));
    }

    #[test]
    fn names_round_trip_through_parse(rank in any::<u8>()) {
        let level = Level::new(rank);
        let reparsed: Level = level.name().parse().expect("display names parse back");
        prop_assert_eq!(reparsed, level);
    }
}

/// Verifies every named level admits itself and rejects the rank just below.
#[test]
fn every_named_level_is_a_closed_lower_bound() {
    for severity in Severity::ALL {
        let threshold = severity.level();
        assert!(threshold.admits(threshold), "{severity} must admit itself");
        let below = Level::new(severity.rank() - 1);
        assert!(!threshold.admits(below), "{severity} must reject {below}");
    }
}

/// Verifies the conventional levels keep their customary ranks.
#[test]
fn conventional_levels_are_not_renumbered() {
    assert_eq!(Level::DEBUG.rank(), 10);
    assert_eq!(Level::INFO.rank(), 20);
    assert_eq!(Level::WARNING.rank(), 30);
    assert_eq!(Level::ERROR.rank(), 40);
    assert_eq!(Level::CRITICAL.rank(), 50);
}

/// Verifies the additional levels sit where the routing model expects them.
#[test]
fn additional_levels_bracket_the_conventional_range() {
    assert!(Level::FILE_ONLY < Level::DEBUG);
    assert!(Level::INFO < Level::IMPORTANT_INFO && Level::IMPORTANT_INFO < Level::WARNING);
    assert!(Level::RAISE_MSG > Level::CRITICAL);
}
