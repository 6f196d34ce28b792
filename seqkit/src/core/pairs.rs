//! Transforms over sequences of `(key, value)` pairs.

use crate::core::props::Props;

/// Set each `(key, value)` on `target` unless `key` is already present.
pub fn defaults<B, K, V, S>(target: &mut B, pairs: S) -> &mut B
where
    B: Props<K, V> + ?Sized,
    S: IntoIterator<Item = (K, V)>,
{
    for (key, value) in pairs {
        target.set_prop_if_absent(key, value);
    }
    target
}

/// Keep the pairs whose key satisfies `predicate`.
pub fn filter_key<S, K, V, P>(seq: S, mut predicate: P) -> impl Iterator<Item = (K, V)>
where
    S: IntoIterator<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    seq.into_iter().filter(move |(key, _)| predicate(key))
}

/// Keep the pairs whose value satisfies `predicate`.
pub fn filter_value<S, K, V, P>(seq: S, mut predicate: P) -> impl Iterator<Item = (K, V)>
where
    S: IntoIterator<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    seq.into_iter().filter(move |(_, value)| predicate(value))
}

/// Transform the key of every pair, leaving values untouched.
pub fn map_key<S, K, V, K2, F>(seq: S, mut f: F) -> impl Iterator<Item = (K2, V)>
where
    S: IntoIterator<Item = (K, V)>,
    F: FnMut(K) -> K2,
{
    seq.into_iter().map(move |(key, value)| (f(key), value))
}

/// Transform the value of every pair, leaving keys untouched.
pub fn map_value<S, K, V, V2, F>(seq: S, mut f: F) -> impl Iterator<Item = (K, V2)>
where
    S: IntoIterator<Item = (K, V)>,
    F: FnMut(V) -> V2,
{
    seq.into_iter().map(move |(key, value)| (key, f(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn defaults_never_overwrites_existing_keys() {
        let mut target = HashMap::from([("a", 1)]);
        defaults(&mut target, [("b", 2), ("a", 99)]);
        assert_eq!(target, HashMap::from([("a", 1), ("b", 2)]));
    }

    #[test]
    fn defaults_first_pair_wins_for_repeated_keys() {
        let mut target = BTreeMap::new();
        defaults(&mut target, [("k", "first"), ("k", "second")]);
        assert_eq!(target.get("k"), Some(&"first"));
    }

    #[test]
    fn filter_key_keeps_whole_pairs() {
        let kept: Vec<_> = filter_key([(1, "one"), (2, "two"), (3, "three")], |k| k % 2 == 1)
            .collect();
        assert_eq!(kept, vec![(1, "one"), (3, "three")]);
    }

    #[test]
    fn filter_value_inspects_only_values() {
        let kept: Vec<_> =
            filter_value([("a", 0), ("b", 5), ("c", 0)], |v| *v > 0).collect();
        assert_eq!(kept, vec![("b", 5)]);
    }

    #[test]
    fn filter_key_is_lazy_over_infinite_input() {
        let firsts: Vec<_> = filter_key((0..).map(|n| (n, n * n)), |k| k % 3 == 0)
            .take(3)
            .collect();
        assert_eq!(firsts, vec![(0, 0), (3, 9), (6, 36)]);
    }

    #[test]
    fn map_key_and_map_value_touch_one_side() {
        let pairs = vec![("a", 1), ("b", 2)];
        let keys: Vec<_> = map_key(pairs.clone(), str::to_uppercase).collect();
        let values: Vec<_> = map_value(pairs, |v| v * 10).collect();
        assert_eq!(
            keys,
            vec![("A".to_string(), 1), ("B".to_string(), 2)]
        );
        assert_eq!(values, vec![("a", 10), ("b", 20)]);
    }

    #[test]
    fn map_key_and_map_value_are_lazy_over_infinite_input() {
        let keys: Vec<_> = map_key((0..).map(|n| (n, n * n)), |k| k + 100)
            .take(3)
            .collect();
        let values: Vec<_> = map_value((0..).map(|n| (n, n * n)), |v| v * 2)
            .take(3)
            .collect();
        assert_eq!(keys, vec![(100, 0), (101, 1), (102, 4)]);
        assert_eq!(values, vec![(0, 0), (1, 2), (2, 8)]);
    }
}
