//! Order-preserving duplicate removal.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicates, keeping the first occurrence of each value in place.
pub fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_keeps_first_occurrence() {
        let out = dedup_preserving_order(["b", "a", "b", "c", "a"]);
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_input() {
        let out: Vec<String> = dedup_preserving_order(Vec::new());
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn prop_each_value_once_in_first_seen_order(
            input in prop::collection::vec("[a-d]{1,2}", 0..40),
        ) {
            let out = dedup_preserving_order(input.clone());

            let distinct: HashSet<_> = input.iter().collect();
            prop_assert_eq!(out.len(), distinct.len());

            // Positions of first appearance must be strictly increasing.
            let firsts: Vec<usize> = out
                .iter()
                .map(|v| input.iter().position(|x| x == v).unwrap())
                .collect();
            prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_idempotent(input in prop::collection::vec(0u8..8, 0..40)) {
            let once = dedup_preserving_order(input);
            let twice = dedup_preserving_order(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
