#![forbid(unsafe_code)]

//! Bulk conversion of a configuration object into a set of selectors.

use crate::map::{ConfigMap, ConfigValue, StyleValue};
use crate::props::Props;
use crate::selector::{DiagnosticsMode, MapSource, SelectError, Selector};

/// What the bulk mapper builds its selectors from.
///
/// The caller picks the variant; nothing is inferred from value shapes.
#[derive(Debug, Clone)]
pub enum BulkSource<V> {
    /// A config object: every [`ConfigValue::Map`] entry becomes an inline
    /// selector over that map. `List`/`Scalar` entries are skipped.
    Inline(ConfigMap<V>),
    /// A list of theme map names: every name becomes a theme-resolved
    /// selector for that key.
    Themed(Vec<String>),
}

/// Named set of selectors produced by [`styled_mapped_props`], in source
/// insertion order.
///
/// Backed by a `Vec` of pairs like [`StyleMap`](crate::StyleMap): the sets
/// are a handful of entries, and [`names`](Self::names) follows the order
/// of the source config.
#[derive(Debug, Clone)]
pub struct SelectorSet<V> {
    selectors: Vec<(String, Selector<V>)>,
}

impl<V> SelectorSet<V> {
    /// The selector built for `name`, if that entry was a usable map.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Selector<V>> {
        self.selectors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Whether a selector exists for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.selectors.iter().any(|(n, _)| n == name)
    }

    /// Names of all selectors, in source insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(|(n, _)| n.as_str())
    }

    /// Number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Override the diagnostics mode of every selector in the set.
    #[must_use]
    pub fn with_mode(mut self, mode: DiagnosticsMode) -> Self {
        for (_, selector) in &mut self.selectors {
            selector.set_mode(mode);
        }
        self
    }

    fn insert(&mut self, name: String, selector: Selector<V>) {
        if let Some(slot) = self.selectors.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = selector;
        } else {
            self.selectors.push((name, selector));
        }
    }
}

impl<V: StyleValue> SelectorSet<V> {
    /// Run the named selector against `props`. `Ok(None)` when no selector
    /// exists for `name`.
    pub fn select<'a>(
        &'a self,
        name: &str,
        props: &'a Props<V>,
    ) -> Result<Option<&'a V>, SelectError> {
        match self.get(name) {
            Some(selector) => selector.select(props),
            None => Ok(None),
        }
    }
}

/// Convert each usable entry of `source` into a selector fallback-keyed by
/// the entry's own name.
///
/// # Example
///
/// ```
/// use styled_props::{BulkSource, ConfigMap, ConfigValue, Props, StyleMap, styled_mapped_props};
///
/// let source = BulkSource::Inline(ConfigMap::from([
///     ("size", ConfigValue::Map(StyleMap::from([("sm", 1), ("lg", 2)]))),
///     ("color", ConfigValue::Map(StyleMap::from([("red", 10), ("blue", 20)]))),
/// ]));
/// let set = styled_mapped_props(source);
///
/// // Direct flag match:
/// assert_eq!(set.select("size", &Props::new().flag("sm")).unwrap(), Some(&1));
/// // Fallback on the entry's own name:
/// assert_eq!(set.select("color", &Props::new().set("color", "blue")).unwrap(), Some(&20));
/// ```
#[must_use]
pub fn styled_mapped_props<V>(source: BulkSource<V>) -> SelectorSet<V> {
    let mut set = SelectorSet {
        selectors: Vec::new(),
    };
    match source {
        BulkSource::Inline(config) => {
            for (name, value) in config {
                if let ConfigValue::Map(map) = value {
                    let selector = Selector::new(MapSource::Inline(map)).with_fallback(&name);
                    set.insert(name, selector);
                }
            }
        }
        BulkSource::Themed(names) => {
            for name in names {
                let selector =
                    Selector::new(MapSource::ThemeKey(name.clone())).with_fallback(&name);
                set.insert(name, selector);
            }
        }
    }
    set
}

/// Convenience alias for the themed form of [`styled_mapped_props`]: every
/// name becomes a theme-resolved selector fallback-keyed by itself.
#[must_use]
pub fn styled_mapped_theme_props<V, I>(names: I) -> SelectorSet<V>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    styled_mapped_props(BulkSource::Themed(
        names.into_iter().map(Into::into).collect(),
    ))
}
