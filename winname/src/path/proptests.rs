//! Property-based tests for the segment model and suffix resolver.

use super::{uncommon_suffixes, SegmentPath};
use proptest::prelude::*;

// Small alphabet so that shared leaves and shared parents are common
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn path_strategy() -> impl Strategy<Value = SegmentPath> {
    prop::collection::vec(segment_strategy(), 1..6)
        .prop_map(|segments| SegmentPath::new(segments).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Resolved suffixes differ, are genuine suffixes, and are never longer
    // than their source
    #[test]
    fn resolver_yields_distinct_trailing_suffixes(a in path_strategy(), b in path_strategy()) {
        prop_assume!(a != b);
        let pair = uncommon_suffixes(&a, &b);

        prop_assert_ne!(&pair.first, &pair.second);
        prop_assert!(a.ends_with(&pair.first));
        prop_assert!(b.ends_with(&pair.second));
        prop_assert!(pair.first.len() <= a.len());
        prop_assert!(pair.second.len() <= b.len());
    }

    // The resolver is minimal: one segment less would no longer separate them
    #[test]
    fn resolver_depth_is_minimal(a in path_strategy(), b in path_strategy()) {
        prop_assume!(a != b);
        let pair = uncommon_suffixes(&a, &b);

        if pair.depth > 1 {
            let shallower = pair.depth - 1;
            prop_assert_eq!(a.suffix_from_end(shallower), b.suffix_from_end(shallower));
        }
    }

    // Swapping the arguments swaps the result
    #[test]
    fn resolver_symmetric(a in path_strategy(), b in path_strategy()) {
        let ab = uncommon_suffixes(&a, &b);
        let ba = uncommon_suffixes(&b, &a);

        prop_assert_eq!(ab.first, ba.second);
        prop_assert_eq!(ab.second, ba.first);
        prop_assert_eq!(ab.depth, ba.depth);
    }

    // Suffix lengths are clamped to the path length
    #[test]
    fn suffix_from_end_clamped(path in path_strategy(), k in 0..10usize) {
        let suffix = path.suffix_from_end(k);
        prop_assert_eq!(suffix.len(), k.clamp(1, path.len()));
        prop_assert!(path.ends_with(&suffix));
    }

    // Joined relative paths parse back to the same segments
    #[test]
    fn parse_display_round_trip(path in path_strategy()) {
        let reparsed = SegmentPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }
}
