//! Page configuration.
//!
//! Every field has a default matching the site's stock markup, so an empty
//! JSON object (or no configuration at all) wires the usual elements:
//!
//! ```json
//! {
//!   "nav": { "toggleSelector": ".nav-toggle", "menuId": "main-nav-menu", "openClass": "is-open" },
//!   "copy": { "blockSelector": "pre", "revertAfterMs": 2000 },
//!   "toc": { "sidebarSelector": ".sidebar", "band": { "height": 100 } }
//! }
//! ```

use crate::error::ConfigError;
use docsite_types::BandMetrics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub copy: CopyConfig,
    pub toc: TocConfig,
}

impl SiteConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the DOM would refuse at runtime, such as empty class
    /// names passed to `classList.add`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("nav.toggleSelector", &self.nav.toggle_selector)?;
        non_empty("nav.menuId", &self.nav.menu_id)?;
        class_name("nav.openClass", &self.nav.open_class)?;

        non_empty("copy.blockSelector", &self.copy.block_selector)?;
        non_empty("copy.codeSelector", &self.copy.code_selector)?;
        class_name("copy.buttonClass", &self.copy.button_class)?;
        non_empty("copy.labels.idle", &self.copy.labels.idle)?;
        non_empty("copy.labels.success", &self.copy.labels.success)?;
        non_empty("copy.labels.failure", &self.copy.labels.failure)?;
        if self.copy.revert_after_ms == 0 {
            return Err(ConfigError::NotPositive {
                field: "copy.revertAfterMs",
                value: 0.0,
            });
        }

        non_empty("toc.sidebarSelector", &self.toc.sidebar_selector)?;
        non_empty("toc.linkSelector", &self.toc.link_selector)?;
        non_empty("toc.headerSelector", &self.toc.header_selector)?;
        class_name("toc.activeClass", &self.toc.active_class)?;
        positive("toc.band.height", self.toc.band.height)?;
        positive(
            "toc.band.fallbackHeaderHeight",
            self.toc.band.fallback_header_height,
        )?;
        if !(self.toc.band.header_gap.is_finite() && self.toc.band.header_gap >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "toc.band.headerGap",
                value: self.toc.band.header_gap,
            });
        }
        Ok(())
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}

fn class_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidClassName {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Mobile navigation toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub menu_id: String,
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".nav-toggle".to_string(),
            menu_id: "main-nav-menu".to_string(),
            open_class: "is-open".to_string(),
        }
    }
}

/// Copy buttons on code blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CopyConfig {
    /// Blocks that may receive a button.
    pub block_selector: String,
    /// Element inside a block whose text is copied. Blocks without one are skipped.
    pub code_selector: String,
    pub button_class: String,
    pub labels: CopyLabels,
    pub revert_after_ms: u32,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            block_selector: "pre".to_string(),
            code_selector: "code".to_string(),
            button_class: "copy-code-button".to_string(),
            labels: CopyLabels::default(),
            revert_after_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyLabels {
    pub idle: String,
    pub success: String,
    pub failure: String,
}

impl Default for CopyLabels {
    fn default() -> Self {
        Self {
            idle: "Copy".to_string(),
            success: "Copied!".to_string(),
            failure: "Error".to_string(),
        }
    }
}

/// Table-of-contents scroll-spy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TocConfig {
    pub sidebar_selector: String,
    /// Links inside the sidebar, relative to it.
    pub link_selector: String,
    /// Sticky header whose height pushes the activation band down.
    pub header_selector: String,
    pub active_class: String,
    pub band: BandMetrics,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            sidebar_selector: ".sidebar".to_string(),
            link_selector: "ul li a".to_string(),
            header_selector: ".site-header".to_string(),
            active_class: "active-toc-link".to_string(),
            band: BandMetrics::default(),
        }
    }
}
