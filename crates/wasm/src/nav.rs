//! Mobile navigation toggle.

use crate::dom::PageRoot;
use crate::error::UiError;
use docsite_core::{NavConfig, ToggleState};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Set on a toggle once its click handler is bound.
const BOUND_ATTRIBUTE: &str = "data-docsite-nav";

/// Binds the toggle control to the menu container.
///
/// Returns `Ok(false)` without touching the page when either element is
/// missing. Each click flips the open class on the menu and writes the new
/// state to the toggle's `aria-expanded`.
///
/// A toggle that is already bound keeps its single handler and reports
/// `Ok(true)`, so running setup again never makes one click flip the menu twice.
pub fn install_nav_toggle(root: &PageRoot, config: &NavConfig) -> Result<bool, UiError> {
    let Some(toggle) = root.query(&config.toggle_selector)? else {
        debug!("No '{}' on this page; navigation toggle skipped", config.toggle_selector);
        return Ok(false);
    };
    let Some(menu) = root.element_by_id(&config.menu_id) else {
        debug!("No #{} on this page; navigation toggle skipped", config.menu_id);
        return Ok(false);
    };
    if toggle.has_attribute(BOUND_ATTRIBUTE) {
        debug!("'{}' is already bound; leaving it as is", config.toggle_selector);
        return Ok(true);
    }

    let open_class = config.open_class.clone();
    let control = toggle.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let open = match menu.class_list().toggle(&open_class) {
            Ok(open) => open,
            Err(e) => {
                warn!("Failed to toggle navigation menu: {:?}", e);
                return;
            }
        };
        let state = ToggleState::from_open(open);
        if let Err(e) = control.set_attribute("aria-expanded", state.aria_expanded()) {
            warn!("Failed to update aria-expanded: {:?}", e);
        }
    });

    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    toggle.set_attribute(BOUND_ATTRIBUTE, "")?;
    // Lives as long as the page.
    on_click.forget();

    Ok(true)
}
