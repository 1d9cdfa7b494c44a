/// Position of a shared run inside two token sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapSpan {
    /// Start index in the first sequence
    pub first: usize,
    /// Start index in the second sequence
    pub second: usize,
    pub len: usize,
}

impl OverlapSpan {
    /// The matched tokens, taken from the first sequence
    pub fn tokens<'a, T>(&self, first: &'a [T]) -> &'a [T] {
        &first[self.first..self.first + self.len]
    }
}

/// Longest contiguous run shared by `first` and `second`.
///
/// Every position of `first` is tried against every matching position of
/// `second` in ascending order; a run replaces the best one only when it is
/// strictly longer, so the first maximal run wins ties.
pub fn longest_overlap_span<T: PartialEq>(first: &[T], second: &[T]) -> Option<OverlapSpan> {
    let mut best: Option<OverlapSpan> = None;

    for (i, token) in first.iter().enumerate() {
        for (j, _) in second.iter().enumerate().filter(|(_, other)| *other == token) {
            let len = first[i..]
                .iter()
                .zip(&second[j..])
                .take_while(|(a, b)| a == b)
                .count();

            if len > best.map_or(0, |span| span.len) {
                best = Some(OverlapSpan {
                    first: i,
                    second: j,
                    len,
                });
            }
        }
    }

    best
}

/// Longest shared contiguous token run, empty when nothing is shared
pub fn overlap<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    longest_overlap_span(first, second)
        .map(|span| span.tokens(first).to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn finds_longest_shared_phrase() {
        let first = words("the house is full of rabbits and snakes");
        let second = words("my house is overriden by rabbits and snakes");
        assert_eq!(overlap(&first, &second), vec!["rabbits", "and", "snakes"]);
    }

    #[test]
    fn disjoint_glosses_have_no_overlap() {
        let first = words("ghost player");
        let second = words("baseball superstar");
        assert!(overlap(&first, &second).is_empty());
        assert_eq!(longest_overlap_span(&first, &second), None);
    }

    #[test]
    fn first_maximal_run_wins_ties() {
        let first = words("red apple green pear");
        let second = words("green pear red apple");
        let span = longest_overlap_span(&first, &second).unwrap();
        assert_eq!(span, OverlapSpan { first: 0, second: 2, len: 2 });
        assert_eq!(span.tokens(&first), &["red", "apple"]);
    }

    #[test]
    fn tries_every_alignment_of_a_repeated_token() {
        let first = words("a b c");
        let second = words("a x a b c");
        let span = longest_overlap_span(&first, &second).unwrap();
        assert_eq!(span, OverlapSpan { first: 0, second: 2, len: 3 });
    }

    #[test]
    fn run_stops_at_sequence_end() {
        let first = words("deposit money");
        let second = words("money deposit money");
        assert_eq!(overlap(&first, &second), vec!["deposit", "money"]);
    }

    #[test]
    fn empty_input_has_no_overlap() {
        let empty: Vec<&str> = Vec::new();
        assert!(overlap(&empty, &words("anything")).is_empty());
        assert!(overlap(&words("anything"), &empty).is_empty());
    }

    fn tokens() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-d]", 0..12)
    }

    fn contains_run(haystack: &[String], run: &[String]) -> bool {
        run.is_empty() || haystack.windows(run.len()).any(|window| window == run)
    }

    proptest! {
        #[test]
        fn proptest_overlap_is_shared_and_bounded(first in tokens(), second in tokens()) {
            let shared = overlap(&first, &second);
            prop_assert!(shared.len() <= first.len().min(second.len()));
            prop_assert!(contains_run(&first, &shared));
            prop_assert!(contains_run(&second, &shared));
        }

        #[test]
        fn proptest_no_longer_shared_run_exists(first in tokens(), second in tokens()) {
            let shared = overlap(&first, &second);
            let longer = shared.len() + 1;
            if longer <= first.len() {
                prop_assert!(first.windows(longer).all(|run| !contains_run(&second, run)));
            }
        }

        #[test]
        fn proptest_self_overlap_is_whole_sequence(first in prop::collection::vec("[a-z]{1,6}", 1..10)) {
            prop_assert_eq!(overlap(&first, &first), first);
        }
    }
}
