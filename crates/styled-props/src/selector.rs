#![forbid(unsafe_code)]

//! Selector construction and the selection algorithm.
//!
//! # Invariants
//!
//! 1. **Deterministic tie-break**: when several props match, the winner in
//!    permissive mode is always the first key in map insertion order.
//!
//! 2. **Direct match beats fallback**: a matched key with a set value
//!    returns immediately; the fallback key is consulted only when no
//!    direct match produced a set value.
//!
//! 3. **Errors at select time only**: building a selector never fails;
//!    every diagnostic is produced (or suppressed) when it runs.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Strict | Permissive |
//! |---------|-------|--------|------------|
//! | Ambiguous match | 2+ truthy matching props | `AmbiguousSelection` | first key in map order |
//! | Fallback miss | fallback value not a map key | `InvalidFallback` | `Ok(None)` |
//! | Theme map missing | no theme, or key absent | `MissingThemeMap` | `Ok(None)` |
//! | Theme entry not a map | `List`/`Scalar` entry | `Ok(None)` | `Ok(None)` |

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::map::{ConfigValue, StyleMap, StyleValue};
use crate::props::{PropValue, Props};

/// Whether selector misconfiguration surfaces as an error or is silently
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsMode {
    /// Ambiguous matches, fallback misses, and missing theme maps are
    /// returned as [`SelectError`]s. The development default.
    Strict,
    /// Conflicts resolve to the first match in map order, misses resolve
    /// to `None`; each suppressed diagnostic is logged at debug level.
    Permissive,
}

impl DiagnosticsMode {
    /// Derive the mode from the `STYLED_PROPS_ENV` environment variable:
    /// the literal `production` means [`Permissive`](Self::Permissive),
    /// anything else (or unset) means [`Strict`](Self::Strict).
    ///
    /// Intended for one call at startup, feeding
    /// [`set_default_diagnostics_mode`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var("STYLED_PROPS_ENV").ok().as_deref())
    }

    fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("production") => Self::Permissive,
            _ => Self::Strict,
        }
    }
}

static DEFAULT_MODE: ArcSwapOption<DiagnosticsMode> = ArcSwapOption::const_empty();

/// Set the process-wide default mode used by selectors built without an
/// explicit [`Selector::with_mode`]. Call once at startup.
pub fn set_default_diagnostics_mode(mode: DiagnosticsMode) {
    DEFAULT_MODE.store(Some(Arc::new(mode)));
}

/// The current process-wide default mode. [`DiagnosticsMode::Strict`]
/// until [`set_default_diagnostics_mode`] is called.
#[must_use]
pub fn default_diagnostics_mode() -> DiagnosticsMode {
    DEFAULT_MODE
        .load()
        .as_deref()
        .copied()
        .unwrap_or(DiagnosticsMode::Strict)
}

/// Errors a selector can produce in strict mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// More than one mapped prop was truthy at the same time. Carries all
    /// conflicting field names in map order.
    AmbiguousSelection { fields: Vec<String> },
    /// The fallback field's value did not resolve to a map entry.
    InvalidFallback { key: String },
    /// The requested theme map key is absent, or the record has no theme.
    MissingThemeMap { key: String },
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousSelection { fields } => write!(
                f,
                "multiple style props set at the same time: {}",
                fields.join(", ")
            ),
            Self::InvalidFallback { key } => {
                write!(f, "invalid fallback value provided for '{key}'")
            }
            Self::MissingThemeMap { key } => {
                write!(f, "theme map '{key}' not found, or theme missing")
            }
        }
    }
}

impl std::error::Error for SelectError {}

/// Where a selector reads its style map from.
#[derive(Debug, Clone)]
pub enum MapSource<V> {
    /// A map owned by the selector itself.
    Inline(StyleMap<V>),
    /// A named entry of the input record's theme, resolved per call.
    ThemeKey(String),
}

/// A compiled selection rule: one map source, one optional fallback key,
/// one diagnostics mode. Immutable after construction.
///
/// Selection walks the map keys in insertion order and returns the value
/// of the first key whose same-named prop is truthy; see the module docs
/// for the ambiguity and fallback rules.
#[derive(Debug, Clone)]
pub struct Selector<V> {
    source: MapSource<V>,
    fallback: Option<String>,
    mode: DiagnosticsMode,
}

impl<V> Selector<V> {
    /// Build a selector over `source` with no fallback key, using the
    /// process-wide default diagnostics mode.
    #[must_use]
    pub fn new(source: MapSource<V>) -> Self {
        Self {
            source,
            fallback: None,
            mode: default_diagnostics_mode(),
        }
    }

    /// Use `key`'s prop *value* as a secondary map lookup when no direct
    /// match produces a set value.
    #[must_use]
    pub fn with_fallback(mut self, key: impl Into<String>) -> Self {
        self.fallback = Some(key.into());
        self
    }

    /// Override the diagnostics mode for this selector.
    #[must_use]
    pub fn with_mode(mut self, mode: DiagnosticsMode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) fn set_mode(&mut self, mode: DiagnosticsMode) {
        self.mode = mode;
    }

    /// The configured fallback key, if any.
    #[must_use]
    pub fn fallback_key(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// The selector's diagnostics mode.
    #[must_use]
    pub fn mode(&self) -> DiagnosticsMode {
        self.mode
    }
}

impl<V: StyleValue> Selector<V> {
    /// Resolve a style value for `props`.
    ///
    /// `Ok(None)` means "deliberately no style" (nothing matched and no
    /// usable fallback); `Err` is a strict-mode misconfiguration report.
    pub fn select<'a>(&'a self, props: &'a Props<V>) -> Result<Option<&'a V>, SelectError> {
        match &self.source {
            MapSource::Inline(map) => self.select_from(map, props),
            MapSource::ThemeKey(key) => match props.theme_entry(key) {
                Some(ConfigValue::Map(map)) => self.select_from(map, props),
                // Present but not a map: nothing to select from, by contract
                // only absence is diagnosed.
                Some(_) => Ok(None),
                None => {
                    if self.mode == DiagnosticsMode::Strict {
                        return Err(SelectError::MissingThemeMap { key: key.clone() });
                    }
                    tracing::debug!(theme_key = %key, "theme map missing, selector yields nothing");
                    Ok(None)
                }
            },
        }
    }

    fn select_from<'a>(
        &self,
        map: &'a StyleMap<V>,
        props: &'a Props<V>,
    ) -> Result<Option<&'a V>, SelectError> {
        let matched: Vec<&str> = map.keys().filter(|key| props.is_truthy(key)).collect();

        if let Some(&first) = matched.first() {
            if matched.len() > 1 {
                if self.mode == DiagnosticsMode::Strict {
                    return Err(SelectError::AmbiguousSelection {
                        fields: matched.iter().map(|s| (*s).to_string()).collect(),
                    });
                }
                tracing::debug!(
                    fields = ?matched,
                    "ambiguous style props, taking first in map order"
                );
            }
            if let Some(value) = map.get(first)
                && value.is_set()
            {
                return Ok(Some(value));
            }
        }

        if let Some(fallback) = &self.fallback {
            let hit = props
                .field(fallback)
                .and_then(PropValue::as_key)
                .and_then(|key| map.get(key));
            return match hit {
                Some(value) => Ok(Some(value)),
                None => {
                    if self.mode == DiagnosticsMode::Strict {
                        return Err(SelectError::InvalidFallback {
                            key: fallback.clone(),
                        });
                    }
                    tracing::debug!(
                        fallback = %fallback,
                        "fallback did not resolve to a style value"
                    );
                    Ok(None)
                }
            };
        }

        Ok(None)
    }
}

/// Build a selector over an inline map. The primary entry point.
///
/// # Example
///
/// ```
/// use styled_props::{Props, StyleMap, styled_props};
///
/// let sizes = StyleMap::from([("sm", 8), ("md", 12), ("lg", 16)]);
/// let padding = styled_props(sizes, Some("size"));
///
/// // Direct match on a flag prop:
/// assert_eq!(padding.select(&Props::new().flag("lg")).unwrap(), Some(&16));
/// // Fallback on the `size` prop's value:
/// assert_eq!(padding.select(&Props::new().set("size", "md")).unwrap(), Some(&12));
/// ```
#[must_use]
pub fn styled_props<V>(map: StyleMap<V>, fallback: Option<&str>) -> Selector<V> {
    let selector = Selector::new(MapSource::Inline(map));
    match fallback {
        Some(key) => selector.with_fallback(key),
        None => selector,
    }
}

/// Build a selector that resolves its map from the record's theme per
/// call.
///
/// # Example
///
/// ```
/// use styled_props::{ConfigMap, ConfigValue, Props, StyleMap, styled_theme_props};
///
/// let theme = ConfigMap::from([(
///     "variant",
///     ConfigValue::Map(StyleMap::from([("a", "red"), ("b", "blue")])),
/// )]);
/// let selector = styled_theme_props("variant", None);
///
/// let props = Props::new().theme(theme).flag("a");
/// assert_eq!(selector.select(&props).unwrap(), Some(&"red"));
/// ```
#[must_use]
pub fn styled_theme_props<V>(theme_key: &str, fallback: Option<&str>) -> Selector<V> {
    let selector = Selector::new(MapSource::ThemeKey(theme_key.to_string()));
    match fallback {
        Some(key) => selector.with_fallback(key),
        None => selector,
    }
}
