//! # docsite
//!
//! Page behaviors for static documentation sites: a mobile navigation toggle,
//! copy buttons on code blocks, and table-of-contents highlighting on scroll.
//!
//! This crate re-exports the platform-agnostic pieces. The browser runtime
//! lives in `docsite-wasm` (`crates/wasm`), built with `wasm-pack`.

// Re-export foundation crates
pub use docsite_core as page;
pub use docsite_types as types;

pub use docsite_core::{
    ActiveLink, ConfigError, CopyConfig, CopyFeedback, CopyLabel, CopyLabels, NavConfig,
    RevertToken, ScrollSpyState, SiteConfig, TocConfig, TocEntry, TocMap, ToggleState, Transition,
    select_active,
};
pub use docsite_types::{
    ActivationBand, BandMetrics, Fragment, FragmentError, HeadingId, RootMargin, parse_css_length,
};
