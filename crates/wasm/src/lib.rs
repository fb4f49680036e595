//! WebAssembly runtime for docsite pages.
//!
//! Adds three independent behaviors to a static documentation page:
//!
//! - a mobile navigation toggle ([`install_nav_toggle`]),
//! - copy buttons on code blocks ([`install_copy_buttons`]),
//! - table-of-contents highlighting while scrolling ([`install_scroll_spy`]).
//!
//! # Architecture
//!
//! The decisions (toggle state, label feedback, which heading is current) are
//! made by `docsite-core`, which has no DOM dependency and is tested natively.
//! This crate measures the page, feeds the core, and writes the results back
//! through `web-sys`.
//!
//! Each installer takes a [`PageRoot`] rather than reading globals, and each
//! one fails on its own: a page without a sidebar still gets copy buttons.
//!
//! ## Module Structure
//!
//! - [`dom`] - `PageRoot` and small DOM helpers
//! - [`nav`] - navigation toggle
//! - [`copy`] - copy buttons and the clipboard handle
//! - [`scroll_spy`] - TOC highlighting
//! - [`error`] - Error types with JavaScript interop
//! - [`types`] - TypeScript-friendly report types
//!
//! # Example
//!
//! With the default `auto-init` feature the module wires itself once the DOM
//! is ready. Setup never binds the same element twice, so a later
//! `initWithConfig` only reaches elements the defaults did not. To change
//! selectors for elements the defaults would match, build without `auto-init`:
//!
//! ```javascript
//! import init, { initWithConfig } from '@docsite/wasm';
//!
//! await init();
//!
//! const report = initWithConfig({
//!   copy: { labels: { success: 'Copied' } },
//!   toc: { sidebarSelector: '.toc', band: { height: 120 } },
//! });
//! console.log(report.copyButtons);
//! ```

pub mod copy;
pub mod dom;
pub mod error;
pub mod nav;
pub mod scroll_spy;
pub mod types;

pub use copy::{ClipboardHandle, install_copy_buttons};
pub use dom::PageRoot;
pub use error::{ErrorCode, UiError};
pub use nav::install_nav_toggle;
pub use scroll_spy::{ScrollSpy, install_scroll_spy};
pub use types::InitReport;

use docsite_core::SiteConfig;
use log::{error, info};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Info).ok();
    }

    #[cfg(feature = "auto-init")]
    auto_init();
}

#[cfg(feature = "auto-init")]
fn auto_init() {
    use wasm_bindgen::JsCast;

    let Some(root) = PageRoot::from_window() else {
        return;
    };
    if root.document().ready_state() != "loading" {
        init_page(&root, &SiteConfig::default());
        return;
    }

    let document = root.document().clone();
    let on_ready = Closure::once_into_js(move || {
        init_page(&root, &SiteConfig::default());
    });
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

/// Wires every behavior under `root`.
///
/// Installers run independently; one failing is logged and the rest still run.
pub fn init_page(root: &PageRoot, config: &SiteConfig) -> InitReport {
    let nav_toggle = install_nav_toggle(root, &config.nav).unwrap_or_else(|e| {
        error!("Navigation toggle setup failed: {}", e);
        false
    });

    let clipboard = ClipboardHandle::from_navigator(&root.window().navigator());
    let copy_buttons = install_copy_buttons(root, clipboard, &config.copy).unwrap_or_else(|e| {
        error!("Copy button setup failed: {}", e);
        0
    });

    let toc_links = match install_scroll_spy(root, &config.toc) {
        Ok(Some(spy)) => {
            let count = spy.heading_count();
            spy.keep_alive();
            count
        }
        Ok(None) => 0,
        Err(e) => {
            error!("Scroll-spy setup failed: {}", e);
            0
        }
    };

    info!(
        "docsite ready: nav toggle {}, {} copy buttons, {} TOC links",
        if nav_toggle { "on" } else { "off" },
        copy_buttons,
        toc_links
    );
    InitReport::new(nav_toggle, copy_buttons, toc_links)
}

/// Wires every behavior on the current page with a custom configuration.
///
/// `config` is a plain object in the shape of `SiteConfig`; missing fields keep
/// their defaults and `undefined` means all defaults.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<InitReport, JsValue> {
    let config = parse_config(config)?;
    let root = PageRoot::from_window().ok_or_else(|| UiError::dom("No window or document"))?;
    Ok(init_page(&root, &config))
}

fn parse_config(value: JsValue) -> Result<SiteConfig, UiError> {
    let config: SiteConfig = if value.is_undefined() || value.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value)?
    };
    config.validate()?;
    Ok(config)
}

/// Get the version of the docsite-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
