//! Property-based tests for the labelling engine.

use super::{ConflictPolicy, Disambiguator, PathEntry};
use crate::path::SegmentPath;
use proptest::prelude::*;

fn path_strategy() -> impl Strategy<Value = SegmentPath> {
    prop::collection::vec("[a-c]", 1..5).prop_map(|segments| SegmentPath::new(segments).unwrap())
}

fn entries_strategy() -> impl Strategy<Value = Vec<(SegmentPath, u8)>> {
    prop::collection::vec((path_strategy(), 0..3u8), 0..8)
}

fn policy_strategy() -> impl Strategy<Value = ConflictPolicy> {
    prop_oneof![
        Just(ConflictPolicy::LastPartner),
        Just(ConflictPolicy::DeepestPartner)
    ]
}

fn run(policy: ConflictPolicy, input: &[(SegmentPath, u8)]) -> Vec<SegmentPath> {
    let entries = input
        .iter()
        .enumerate()
        .map(|(i, (path, group))| PathEntry::new(i, path.clone(), *group))
        .collect();
    Disambiguator::new()
        .with_policy(policy)
        .disambiguate(entries)
        .unwrap()
        .into_iter()
        .map(|label| label.display)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Output has one label per input, each a suffix of its own path
    #[test]
    fn labels_are_suffixes(input in entries_strategy(), policy in policy_strategy()) {
        let labels = run(policy, &input);
        prop_assert_eq!(labels.len(), input.len());
        for ((path, _), label) in input.iter().zip(&labels) {
            prop_assert!(path.ends_with(label));
        }
    }

    // Same path in the same group always renders the same
    #[test]
    fn duplicates_render_identically(input in entries_strategy(), policy in policy_strategy()) {
        let labels = run(policy, &input);
        for i in 0..input.len() {
            for j in 0..input.len() {
                if input[i] == input[j] {
                    prop_assert_eq!(&labels[i], &labels[j]);
                }
            }
        }
    }

    // Removing an entry from another group does not change anyone's label
    #[test]
    fn groups_do_not_interact(input in entries_strategy(), policy in policy_strategy()) {
        prop_assume!(!input.is_empty());
        let removed_group = input[0].1;
        let full = run(policy, &input);

        let kept: Vec<_> = input
            .iter()
            .cloned()
            .enumerate()
            .filter(|(_, (_, group))| *group != removed_group)
            .collect();
        let reduced_input: Vec<_> = kept.iter().map(|(_, entry)| entry.clone()).collect();
        let reduced = run(policy, &reduced_input);

        for ((original_index, _), label) in kept.iter().zip(&reduced) {
            prop_assert_eq!(&full[*original_index], label);
        }
    }

    // Without shared leaves inside a group, every label is the leaf
    #[test]
    fn unique_leaves_stay_leaves(input in entries_strategy()) {
        let mut seen = std::collections::HashSet::new();
        let input: Vec<_> = input
            .into_iter()
            .filter(|(path, group)| seen.insert((path.leaf().to_string(), *group)))
            .collect();

        for ((path, _), label) in input.iter().zip(run(ConflictPolicy::LastPartner, &input)) {
            prop_assert_eq!(label, path.leaf_path());
        }
    }

    // Two paths in one group: labels differ and a second pass changes nothing
    #[test]
    fn two_way_collisions_resolve_in_one_pass(a in path_strategy(), b in path_strategy()) {
        prop_assume!(a != b);
        let input = vec![(a, 0u8), (b, 0u8)];
        let labels = run(ConflictPolicy::LastPartner, &input);
        prop_assert_ne!(&labels[0], &labels[1]);

        // Feed the labels back in as the starting point of a second sweep
        let mut set = super::CandidateSet::from_entries(
            input
                .iter()
                .enumerate()
                .map(|(i, (path, group))| PathEntry::new(i, path.clone(), *group))
                .collect(),
        );
        for (i, label) in labels.iter().enumerate() {
            set.set_display(i, label.clone());
        }
        Disambiguator::new().run(&mut set).unwrap();
        for (i, label) in labels.iter().enumerate() {
            prop_assert_eq!(set.display(i), label);
        }
    }
}
