//! Property bags: bulk assignment, set-if-absent, and blank construction.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A container whose entries can be set by key.
///
/// Maps implement it directly. Structs implement it to map property names onto
/// fields, which lets them take part in [`assign_props`], [`create_from`] and
/// [`crate::core::pairs::defaults`].
pub trait Props<K, V> {
    /// Set `key` to `value`, replacing any existing entry.
    fn set_prop(&mut self, key: K, value: V);

    /// True if an entry for `key` is present.
    fn has_prop(&self, key: &K) -> bool;

    /// Set `key` only when absent. Returns true if the value was stored.
    fn set_prop_if_absent(&mut self, key: K, value: V) -> bool {
        if self.has_prop(&key) {
            return false;
        }
        self.set_prop(key, value);
        true
    }
}

impl<K: Eq + Hash, V> Props<K, V> for HashMap<K, V> {
    fn set_prop(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn has_prop(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn set_prop_if_absent(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

impl<K: Ord, V> Props<K, V> for BTreeMap<K, V> {
    fn set_prop(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn has_prop(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn set_prop_if_absent(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

/// Copy every `(key, value)` of `source` onto `target`, overwriting.
pub fn assign_props<B, K, V, S>(target: &mut B, source: S) -> &mut B
where
    B: Props<K, V> + ?Sized,
    S: IntoIterator<Item = (K, V)>,
{
    for (key, value) in source {
        target.set_prop(key, value);
    }
    target
}

/// Produce a blank `T` from its `Default` value.
///
/// This skips whatever validating constructor `T` offers. Only use it when the
/// caller fills every field that constructor would have checked.
pub fn create<T: Default>() -> T {
    T::default()
}

/// [`create`] followed by [`assign_props`].
///
/// Same caveat as [`create`]: no invariants of `T` are re-established.
pub fn create_from<T, K, V, S>(props: S) -> T
where
    T: Default + Props<K, V>,
    S: IntoIterator<Item = (K, V)>,
{
    let mut value = create::<T>();
    assign_props(&mut value, props);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Endpoint;

    #[test]
    fn assign_props_overwrites_and_returns_target() {
        let mut target = HashMap::from([("a", 1), ("b", 2)]);
        let returned = assign_props(&mut target, [("b", 20), ("c", 30)]);
        returned.set_prop("d", 40);
        assert_eq!(
            target,
            HashMap::from([("a", 1), ("b", 20), ("c", 30), ("d", 40)])
        );
    }

    #[test]
    fn set_prop_if_absent_keeps_existing_entry() {
        let mut target = BTreeMap::from([("a", 1)]);
        assert!(!target.set_prop_if_absent("a", 99));
        assert!(target.set_prop_if_absent("b", 2));
        assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2)]));
    }

    #[test]
    fn create_yields_blank_value() {
        let endpoint: Endpoint = create();
        assert_eq!(endpoint, Endpoint::default());
        assert!(!endpoint.has_prop(&"host"));
    }

    #[test]
    fn create_from_assigns_struct_fields() {
        let endpoint: Endpoint = create_from([("host", "example.org"), ("scheme", "https")]);
        assert_eq!(endpoint.host, "example.org");
        assert_eq!(endpoint.scheme, "https");
        assert!(endpoint.has_prop(&"host"));
    }

    #[test]
    fn create_from_builds_maps() {
        let map: BTreeMap<&str, u8> = create_from([("x", 1), ("x", 2)]);
        assert_eq!(map, BTreeMap::from([("x", 2)]));
    }
}
