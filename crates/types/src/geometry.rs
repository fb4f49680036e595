use serde::{Deserialize, Serialize};
use std::fmt;

/// Tunables used to place the activation band below a sticky header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BandMetrics {
    /// Header height assumed when the header is missing or has no height.
    pub fallback_header_height: f64,
    /// Space left between the header and the band when no
    /// `scroll-padding-top` is set.
    pub header_gap: f64,
    /// Height of the band itself.
    pub height: f64,
}

impl Default for BandMetrics {
    fn default() -> Self {
        Self {
            fallback_header_height: 60.0,
            header_gap: 20.0,
            height: 100.0,
        }
    }
}

/// The strip near the top of the viewport in which a heading counts as
/// "current".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationBand {
    top: f64,
    height: f64,
}

impl ActivationBand {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Places the band from live page measurements.
    ///
    /// A measured header height of zero (or none) falls back to
    /// `metrics.fallback_header_height`. The band starts at the document's
    /// `scroll-padding-top` when that is a positive length, otherwise just
    /// below the header.
    pub fn resolve(
        header_height: Option<f64>,
        scroll_padding_top: Option<f64>,
        metrics: &BandMetrics,
    ) -> Self {
        let header_offset = header_height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(metrics.fallback_header_height);
        let top = scroll_padding_top
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(header_offset + metrics.header_gap);
        Self::new(top, metrics.height)
    }

    pub fn top(self) -> f64 {
        self.top
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// True once a heading's top edge has scrolled up to the band's lower edge.
    pub fn has_reached(self, heading_top: f64) -> bool {
        heading_top <= self.bottom()
    }

    /// The observer margin that shrinks a viewport of `viewport_height` down
    /// to this band.
    pub fn root_margin(self, viewport_height: f64) -> RootMargin {
        RootMargin {
            top: -self.top,
            right: 0.0,
            bottom: -(viewport_height - self.bottom()).max(0.0),
            left: 0.0,
        }
    }
}

/// An `IntersectionObserver` `rootMargin`, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}
