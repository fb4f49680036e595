//! # docsite-core
//!
//! Platform-agnostic logic behind the docsite page behaviors.
//!
//! - **config**: selectors, class names, labels and band tunables
//! - **nav**: open/closed state of the mobile navigation menu
//! - **copy**: label feedback for copy-code buttons, with revert tokens
//! - **toc**: pairing table-of-contents links with their headings
//! - **scroll_spy**: choosing the single active heading from measured positions
//! - **error**: configuration errors
//!
//! ## Design Principle
//!
//! Nothing in this crate touches a DOM. The browser bindings measure elements
//! and hand plain numbers and strings in; the decisions come back out as
//! values they apply to the page. This keeps every behavior testable natively.

pub use docsite_types as types;

pub mod config;
pub mod copy;
pub mod error;
pub mod nav;
pub mod scroll_spy;
pub mod toc;

pub use config::{CopyConfig, CopyLabels, NavConfig, SiteConfig, TocConfig};
pub use copy::{CopyFeedback, CopyLabel, RevertToken};
pub use error::ConfigError;
pub use nav::ToggleState;
pub use scroll_spy::{ActiveLink, ScrollSpyState, Transition, select_active};
pub use toc::{TocEntry, TocMap};
pub use types::{ActivationBand, BandMetrics, Fragment, FragmentError, HeadingId, RootMargin};
