#![forbid(unsafe_code)]

//! Ordered style maps and the tagged config values that hold them.
//!
//! # Invariants
//!
//! 1. **Keys unique**: re-inserting an existing key replaces its value in
//!    place, keeping the key's original position.
//!
//! 2. **Iteration order is insertion order**: the order keys were first
//!    inserted is the order [`StyleMap::keys`] yields them, and the order
//!    selectors use to break ties between ambiguous matches.

/// Whether a style value counts as "set" when a selector resolves it.
///
/// A matched map entry whose value is not set falls through to the
/// selector's fallback key instead of being returned. Types with no
/// meaningful empty state implement the trait with the default body:
///
/// ```
/// # use styled_props::StyleValue;
/// #[derive(Debug)]
/// struct MyStyle;
/// impl StyleValue for MyStyle {}
/// ```
pub trait StyleValue {
    /// Returns `false` for empty/zero values that should not terminate
    /// selection. Defaults to `true`.
    fn is_set(&self) -> bool {
        true
    }
}

impl StyleValue for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl StyleValue for &str {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl StyleValue for bool {
    fn is_set(&self) -> bool {
        *self
    }
}

impl<T: StyleValue> StyleValue for Option<T> {
    fn is_set(&self) -> bool {
        self.as_ref().is_some_and(StyleValue::is_set)
    }
}

macro_rules! numeric_style_value {
    ($($ty:ty)*) => {
        $(impl StyleValue for $ty {
            fn is_set(&self) -> bool {
                *self != 0 as $ty
            }
        })*
    };
}

numeric_style_value!(i8 i16 i32 i64 u8 u16 u32 u64 usize f32 f64);

/// Ordered (key, value) map from prop names (or fallback values) to style
/// values.
///
/// Backed by a `Vec` of pairs: the maps this library deals with are a
/// handful of entries, and selection needs the insertion order anyway for
/// deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> StyleMap<V> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value. Replaces in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Whether the map has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for StyleMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for StyleMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for StyleMap<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<V> IntoIterator for StyleMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A configuration entry: a style map, a list, or a single scalar.
///
/// The variant is decided by whoever builds the configuration, so
/// downstream code dispatches on the tag instead of sniffing value shapes.
/// Only [`ConfigValue::Map`] entries participate in selection; the other
/// variants are carried through config files untouched and skipped by the
/// bulk mapper.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigValue<V> {
    /// A style map usable by a selector.
    Map(StyleMap<V>),
    /// A plain list of values. Not a selectable map.
    List(Vec<V>),
    /// A single value. Not a selectable map.
    Scalar(V),
}

impl<V> ConfigValue<V> {
    /// The contained map, if this entry is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&StyleMap<V>> {
        match self {
            Self::Map(map) => Some(map),
            Self::List(_) | Self::Scalar(_) => None,
        }
    }
}

/// Ordered map of named [`ConfigValue`] entries.
///
/// Serves two roles: the `theme` attached to a [`Props`](crate::Props)
/// record, and the source object handed to
/// [`styled_mapped_props`](crate::styled_mapped_props).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConfigMap<V> {
    entries: Vec<(String, ConfigValue<V>)>,
}

impl<V> ConfigMap<V> {
    /// Create an empty config map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an entry. Replaces in place if the name already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: ConfigValue<V>) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfigValue<V>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// (name, entry) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue<V>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the config has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ConfigMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, ConfigValue<V>)> for ConfigMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, ConfigValue<V>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, ConfigValue<V>); N]> for ConfigMap<V> {
    fn from(pairs: [(K, ConfigValue<V>); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<V> IntoIterator for ConfigMap<V> {
    type Item = (String, ConfigValue<V>);
    type IntoIter = std::vec::IntoIter<(String, ConfigValue<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_first_position_on_replace() {
        let mut map = StyleMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&3));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn keys_iterate_in_insertion_order() {
        let map = StyleMap::from([("primary", "red"), ("danger", "crimson"), ("muted", "gray")]);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["primary", "danger", "muted"]);
    }

    #[test]
    fn missing_key_returns_none() {
        let map: StyleMap<i32> = StyleMap::new();
        assert_eq!(map.get("anything"), None);
        assert!(!map.contains_key("anything"));
        assert!(map.is_empty());
    }

    #[test]
    fn string_and_numeric_set_semantics() {
        assert!("red".is_set());
        assert!(!"".is_set());
        assert!(1_i64.is_set());
        assert!(!0_u8.is_set());
        assert!(!0.0_f64.is_set());
        assert!(!false.is_set());
        assert!(Some(5).is_set());
        assert!(!Some(0).is_set());
        assert!(!None::<i32>.is_set());
    }

    #[test]
    fn config_value_as_map() {
        let map: ConfigValue<i32> = ConfigValue::Map(StyleMap::from([("sm", 1)]));
        let list: ConfigValue<i32> = ConfigValue::List(vec![1, 2]);
        let scalar: ConfigValue<i32> = ConfigValue::Scalar(7);

        assert!(map.as_map().is_some());
        assert!(list.as_map().is_none());
        assert!(scalar.as_map().is_none());
    }

    #[test]
    fn config_map_replace_in_place() {
        let mut cfg = ConfigMap::new();
        cfg.insert("size", ConfigValue::Scalar(1));
        cfg.insert("color", ConfigValue::Scalar(2));
        cfg.insert("size", ConfigValue::Scalar(3));

        assert_eq!(cfg.len(), 2);
        assert_eq!(cfg.get("size"), Some(&ConfigValue::Scalar(3)));
        let names: Vec<&str> = cfg.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["size", "color"]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn style_map_round_trips_as_pair_list() {
        let map = StyleMap::from([("sm", 1), ("lg", 2)]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[["sm",1],["lg",2]]"#);

        let back: StyleMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn config_map_round_trips() {
        let cfg: ConfigMap<i32> = ConfigMap::from([
            ("size", ConfigValue::Map(StyleMap::from([("sm", 1), ("lg", 2)]))),
            ("weights", ConfigValue::List(vec![400, 700])),
            ("base", ConfigValue::Scalar(16)),
        ]);

        let json = serde_json::to_string(&cfg).unwrap();
        let back: ConfigMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
