//! Property-based tests for the search, the canonical form and the
//! fingerprint.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use xxiv::{
    canon::{canonicalize, is_canonical},
    enumerate::{trees, TREE_COUNT},
    eval::evaluate,
    fingerprint::fingerprint,
    solve,
    tree::ROOT,
};

mod common;

fn numbers() -> impl Strategy<Value = [i64; 4]> {
    prop::array::uniform4(-6i64..=13)
}

fn tree_index() -> impl Strategy<Value = usize> {
    0..TREE_COUNT
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_solution_reaches_the_target(numbers in numbers(), target in -20i64..=40) {
        for solution in solve(numbers, target) {
            let line = solution.to_string();
            let expr = common::parse(&line).map_err(TestCaseError::fail)?;
            prop_assert_eq!(common::eval(&expr), Some(target), "{}", line);
            prop_assert!(common::never_divides_by_zero(&expr), "{}", line);
        }
    }

    #[test]
    fn solutions_cover_each_class_exactly_once(numbers in numbers()) {
        let reported: Vec<_> = solve(numbers, 24)
            .iter()
            .map(|solution| common::normal_form_of(&solution.to_string()))
            .collect();
        let distinct: HashSet<_> = reported.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), reported.len());

        let expected: HashSet<_> = trees(numbers)
            .filter(|tree| evaluate(tree, ROOT) == Some(24))
            .map(|tree| common::normal_form_of(&tree.to_string()))
            .collect();
        prop_assert_eq!(distinct, expected);
    }

    #[test]
    fn canonical_form_is_a_fixed_point(numbers in numbers(), index in tree_index()) {
        let tree = trees(numbers).nth(index).unwrap();
        let canon = canonicalize(tree);
        prop_assert!(is_canonical(&canon));
        prop_assert_eq!(canonicalize(canon), canon);
        prop_assert_eq!(
            common::normal_form_of(&canon.to_string()),
            common::normal_form_of(&tree.to_string())
        );
        let mut sorted = numbers;
        sorted.sort_unstable();
        prop_assert_eq!(canon.numbers(), sorted);
    }

    #[test]
    fn fingerprints_match_canonical_forms(numbers in numbers()) {
        let mut by_key = HashMap::new();
        for tree in trees(numbers).step_by(7) {
            let canon = canonicalize(tree);
            let previous = by_key.insert(fingerprint(&canon), canon);
            prop_assert!(previous.map_or(true, |previous| previous == canon));
        }
    }
}
