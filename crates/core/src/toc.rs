//! Pairing table-of-contents links with the headings they point at.

use docsite_types::{Fragment, HeadingId};
use log::warn;
use std::collections::HashSet;

/// One link that resolved to a heading.
#[derive(Debug, Clone)]
pub struct TocEntry<H> {
    /// Position of the link among all sidebar links, in document order.
    pub link: usize,
    pub fragment: Fragment,
    pub heading: H,
}

/// Links that made it through validation, in document order.
///
/// Generic over the heading handle so the browser bindings can store DOM
/// elements while tests use plain values.
#[derive(Debug, Clone)]
pub struct TocMap<H> {
    entries: Vec<TocEntry<H>>,
    link_count: usize,
}

impl<H> TocMap<H> {
    /// Builds the map from each link's `href` attribute.
    ///
    /// `resolve` looks up the heading for an id. Links with a malformed
    /// target, links whose heading does not exist, and later links pointing at
    /// a heading that is already mapped are skipped with a warning.
    pub fn build<I, S, F>(hrefs: I, mut resolve: F) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
        F: FnMut(&HeadingId) -> Option<H>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        let mut link_count = 0;

        for (link, href) in hrefs.into_iter().enumerate() {
            link_count += 1;
            let href: Option<&str> = href.as_ref().map(|s| s.as_ref());
            let fragment = match Fragment::from_attribute(href) {
                Ok(fragment) => fragment,
                Err(e) => {
                    warn!("Skipping TOC link {}: {}", link, e);
                    continue;
                }
            };

            if seen.contains(fragment.id()) {
                warn!(
                    "TOC link {} repeats target '{}'; only the first link is highlighted",
                    link,
                    fragment.id()
                );
                continue;
            }

            let Some(heading) = resolve(fragment.id()) else {
                warn!("TOC link {} points at missing heading '{}'", link, fragment.id());
                continue;
            };

            seen.insert(fragment.id().clone());
            entries.push(TocEntry {
                link,
                fragment,
                heading,
            });
        }

        Self {
            entries,
            link_count,
        }
    }

    pub fn entries(&self) -> &[TocEntry<H>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&TocEntry<H>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of links seen, including the skipped ones.
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn headings(&self) -> impl Iterator<Item = &H> {
        self.entries.iter().map(|entry| &entry.heading)
    }
}
