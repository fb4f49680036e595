//! TypeScript-friendly type definitions.

use wasm_bindgen::prelude::*;

/// What [`init_page`](crate::init_page) managed to wire up.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    nav_toggle: bool,
    copy_buttons: usize,
    toc_links: usize,
}

#[wasm_bindgen]
impl InitReport {
    /// Whether the navigation toggle was bound.
    #[wasm_bindgen(getter, js_name = navToggle)]
    pub fn nav_toggle(&self) -> bool {
        self.nav_toggle
    }

    /// Number of copy buttons added.
    #[wasm_bindgen(getter, js_name = copyButtons)]
    pub fn copy_buttons(&self) -> usize {
        self.copy_buttons
    }

    /// Number of TOC links watched by the scroll-spy.
    #[wasm_bindgen(getter, js_name = tocLinks)]
    pub fn toc_links(&self) -> usize {
        self.toc_links
    }
}

impl InitReport {
    pub(crate) fn new(nav_toggle: bool, copy_buttons: usize, toc_links: usize) -> Self {
        Self {
            nav_toggle,
            copy_buttons,
            toc_links,
        }
    }
}
