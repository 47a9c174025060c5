#![forbid(unsafe_code)]

//! Input records a selector reads props from.

use ahash::AHashMap;

use crate::map::{ConfigMap, ConfigValue};

/// Value of a single prop field.
///
/// A field is *truthy* when it is `Flag(true)` or a non-empty `Text`. Only
/// a truthy `Text` value can serve as a fallback lookup key; flags carry no
/// map key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropValue {
    /// A boolean marker prop, e.g. `primary: true`.
    Flag(bool),
    /// A named value prop, e.g. `size: "sm"`.
    Text(String),
}

impl PropValue {
    /// Whether the field counts as present-and-set for direct matching.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// The field's value as a map lookup key, if it has one.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(s),
            Self::Text(_) | Self::Flag(_) => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// The input record a [`Selector`](crate::Selector) resolves against:
/// named fields plus an optional theme of named sub-maps.
///
/// # Example
///
/// ```
/// use styled_props::{Props, StyleMap, styled_props};
///
/// let colors = StyleMap::from([("primary", "palevioletred"), ("danger", "crimson")]);
/// let selector = styled_props(colors, None);
///
/// let props: Props<&str> = Props::new().flag("danger");
/// assert_eq!(selector.select(&props).unwrap(), Some(&"crimson"));
/// ```
#[derive(Debug, Clone)]
pub struct Props<V> {
    fields: AHashMap<String, PropValue>,
    theme: Option<ConfigMap<V>>,
}

impl<V> Props<V> {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: AHashMap::new(),
            theme: None,
        }
    }

    /// Set a boolean field to `true`.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.set(name, true)
    }

    /// Set a field to any prop value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attach a theme.
    #[must_use]
    pub fn theme(mut self, theme: ConfigMap<V>) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Read a field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&PropValue> {
        self.fields.get(name)
    }

    /// Whether a field is present and truthy.
    #[must_use]
    pub fn is_truthy(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(PropValue::is_truthy)
    }

    /// Look up a theme entry. `None` when the theme or the entry is absent.
    #[must_use]
    pub fn theme_entry(&self, key: &str) -> Option<&ConfigValue<V>> {
        self.theme.as_ref().and_then(|t| t.get(key))
    }
}

impl<V> Default for Props<V> {
    fn default() -> Self {
        Self::new()
    }
}
