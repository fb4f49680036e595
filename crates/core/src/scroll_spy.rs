//! Choosing the table-of-contents entry to highlight.
//!
//! The selection is recomputed from the measured position of every mapped
//! heading each time anything changes, rather than from whichever observer
//! entry happened to arrive last. Two headings crossing the band in the same
//! frame therefore always resolve the same way.

use crate::toc::TocMap;
use docsite_types::ActivationBand;
use log::debug;

/// Picks the heading that should be current, given each heading's viewport
/// `top` in document order.
///
/// Headings inside the band win over headings above it, and among those
/// inside the band the topmost one wins. If none is inside, the heading
/// closest above the band is chosen. Equal positions go to the earlier heading.
/// Headings still below the band are never chosen, so `None` means the reader
/// has not scrolled to the first heading yet.
pub fn select_active(tops: &[f64], band: ActivationBand) -> Option<usize> {
    let mut inside: Option<(usize, f64)> = None;
    let mut above: Option<(usize, f64)> = None;

    for (index, &top) in tops.iter().enumerate() {
        if !top.is_finite() || !band.has_reached(top) {
            continue;
        }
        if top >= band.top() {
            if inside.is_none_or(|(_, best)| top < best) {
                inside = Some((index, top));
            }
        } else if above.is_none_or(|(_, best)| top > best) {
            above = Some((index, top));
        }
    }

    inside.or(above).map(|(index, _)| index)
}

/// A change of highlighted entry, in [`TocMap`] entry indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub deactivate: Option<usize>,
    pub activate: usize,
}

/// Tracks the single active entry.
#[derive(Debug, Clone, Default)]
pub struct ActiveLink {
    current: Option<usize>,
}

impl ActiveLink {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Applies a new selection.
    ///
    /// An empty selection keeps the current entry highlighted. Returns `None`
    /// when nothing changes.
    pub fn activate(&mut self, next: Option<usize>) -> Option<Transition> {
        let next = next?;
        if self.current == Some(next) {
            return None;
        }
        let deactivate = self.current.replace(next);
        Some(Transition {
            deactivate,
            activate: next,
        })
    }
}

/// Everything the scroll-spy needs between observer callbacks.
#[derive(Debug)]
pub struct ScrollSpyState<H> {
    map: TocMap<H>,
    band: ActivationBand,
    active: ActiveLink,
}

impl<H> ScrollSpyState<H> {
    pub fn new(map: TocMap<H>, band: ActivationBand) -> Self {
        Self {
            map,
            band,
            active: ActiveLink::default(),
        }
    }

    pub fn map(&self) -> &TocMap<H> {
        &self.map
    }

    pub fn band(&self) -> ActivationBand {
        self.band
    }

    /// Entry index of the highlighted link.
    pub fn active(&self) -> Option<usize> {
        self.active.current()
    }

    /// Measures every mapped heading with `top_of` and updates the selection.
    pub fn update_with<F>(&mut self, top_of: F) -> Option<Transition>
    where
        F: FnMut(&H) -> f64,
    {
        let tops: Vec<f64> = self.map.headings().map(top_of).collect();
        let transition = self.active.activate(select_active(&tops, self.band));
        if let Some(t) = transition
            && let Some(entry) = self.map.get(t.activate)
        {
            debug!("Active TOC link is now {}", entry.fragment);
        }
        transition
    }
}
