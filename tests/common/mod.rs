#![allow(dead_code)]

use docsite::{ActivationBand, CopyFeedback, HeadingId, RevertToken, ScrollSpyState, TocMap};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A document laid out as a list of headings at fixed offsets, viewed
/// through a scrollable viewport.
pub struct SimulatedPage {
    headings: Vec<(String, f64)>,
    pub scroll_y: f64,
}

impl SimulatedPage {
    pub fn new(headings: &[(&str, f64)]) -> Self {
        Self {
            headings: headings
                .iter()
                .map(|(id, offset)| (id.to_string(), *offset))
                .collect(),
            scroll_y: 0.0,
        }
    }

    pub fn lookup(&self, id: &HeadingId) -> Option<String> {
        self.headings
            .iter()
            .find(|(heading, _)| heading == id.as_str())
            .map(|(heading, _)| heading.clone())
    }

    pub fn offset_of(&self, id: &str) -> f64 {
        self.headings
            .iter()
            .find(|(heading, _)| heading == id)
            .map(|(_, offset)| *offset)
            .unwrap_or(f64::NAN)
    }

    /// Viewport-relative top, as `getBoundingClientRect().top` reports it.
    pub fn top_of(&self, id: &str) -> f64 {
        self.offset_of(id) - self.scroll_y
    }

    /// Scrolls so that `id` sits `inset` pixels below the band's top edge.
    pub fn scroll_heading_into_band(&mut self, id: &str, band: ActivationBand, inset: f64) {
        self.scroll_y = self.offset_of(id) - band.top() - inset;
    }

    pub fn spy(&self, hrefs: &[Option<&str>], band: ActivationBand) -> ScrollSpyState<String> {
        let map = TocMap::build(hrefs.iter().copied(), |id| self.lookup(id));
        ScrollSpyState::new(map, band)
    }
}

/// Link highlight as a page would show it: one flag per mapped entry.
pub fn highlighted(state: &ScrollSpyState<String>) -> Vec<bool> {
    (0..state.map().len())
        .map(|i| state.active() == Some(i))
        .collect()
}

/// A minimal stand-in for `setTimeout`, driven by hand.
#[derive(Default)]
pub struct ManualTimers {
    now_ms: u64,
    pending: Vec<(u64, RevertToken)>,
}

impl ManualTimers {
    pub fn schedule(&mut self, delay_ms: u32, token: RevertToken) {
        self.pending.push((self.now_ms + u64::from(delay_ms), token));
    }

    /// Moves the clock forward, firing due reverts in deadline order.
    pub fn advance(&mut self, ms: u64, feedback: &mut CopyFeedback) {
        self.now_ms += ms;
        self.pending.sort_by_key(|(due, _)| *due);
        let now = self.now_ms;
        let (due, later): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = later;
        for (_, token) in due {
            feedback.revert(token);
        }
    }
}
