#![forbid(unsafe_code)]

//! Prop-driven style value selection with theme maps and fallback keys.
//!
//! This crate provides:
//! - [`styled_props`] for resolving one value out of a [`StyleMap`] based on
//!   which prop of an input record is truthy, with an optional fallback
//!   keyed by another prop's *value*
//! - [`styled_theme_props`] for the same resolution against a named map
//!   inside the record's theme
//! - [`styled_mapped_props`] for rewriting every map-valued entry of a
//!   [`ConfigMap`] into such a selector at once
//!
//! Selection is pure and synchronous. Misconfiguration (ambiguous matches,
//! fallback misses, missing theme maps) surfaces as [`SelectError`] in
//! [`DiagnosticsMode::Strict`] and resolves silently (with a `tracing`
//! debug event) in [`DiagnosticsMode::Permissive`].
//!
//! # Example
//!
//! ```
//! use styled_props::{Props, StyleMap, styled_props};
//!
//! let colors = StyleMap::from([
//!     ("primary", "palevioletred"),
//!     ("danger", "crimson"),
//! ]);
//! let color = styled_props(colors, Some("kind"));
//!
//! let props: Props<&str> = Props::new().flag("primary");
//! assert_eq!(color.select(&props).unwrap(), Some(&"palevioletred"));
//!
//! let props: Props<&str> = Props::new().set("kind", "danger");
//! assert_eq!(color.select(&props).unwrap(), Some(&"crimson"));
//! ```

pub mod map;
pub mod mapped;
pub mod props;
pub mod selector;

pub use map::{ConfigMap, ConfigValue, StyleMap, StyleValue};
pub use mapped::{BulkSource, SelectorSet, styled_mapped_props, styled_mapped_theme_props};
pub use props::{PropValue, Props};
pub use selector::{
    DiagnosticsMode, MapSource, SelectError, Selector, default_diagnostics_mode,
    set_default_diagnostics_mode, styled_props, styled_theme_props,
};
