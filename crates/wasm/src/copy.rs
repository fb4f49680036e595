//! Copy-to-clipboard buttons on code blocks.

use crate::dom::{PageRoot, visible_text};
use crate::error::UiError;
use docsite_core::{CopyConfig, CopyFeedback, CopyLabels, RevertToken};
use log::{debug, error, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, Navigator, Window};

/// The asynchronous Clipboard API, when the page may use it.
#[derive(Debug, Clone)]
pub struct ClipboardHandle {
    inner: web_sys::Clipboard,
}

impl ClipboardHandle {
    /// `None` when `navigator.clipboard` is missing, as it is on plain-HTTP
    /// pages and in older browsers.
    pub fn from_navigator(navigator: &Navigator) -> Option<Self> {
        let value = js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard")).ok()?;
        Self::from_js(value)
    }

    /// Wraps any object with a promise-returning `writeText` method.
    pub fn from_js(value: JsValue) -> Option<Self> {
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(Self {
            inner: value.unchecked_into(),
        })
    }

    pub async fn write_text(&self, text: &str) -> Result<(), JsValue> {
        JsFuture::from(self.inner.write_text(text)).await.map(|_| ())
    }
}

/// Appends a copy button to every code block under `root`.
///
/// Without a clipboard nothing is installed and a single warning is logged.
/// Blocks lacking a code element, and blocks that already carry a button,
/// are left alone. Returns the number of buttons added.
pub fn install_copy_buttons(
    root: &PageRoot,
    clipboard: Option<ClipboardHandle>,
    config: &CopyConfig,
) -> Result<usize, UiError> {
    let Some(clipboard) = clipboard else {
        warn!("Clipboard API not available. Copy buttons will not function.");
        return Ok(0);
    };

    let labels = Rc::new(config.labels.clone());
    let mut installed = 0;

    for block in root.query_all(&config.block_selector)? {
        let Some(code) = block.query_selector(&config.code_selector)? else {
            continue;
        };
        if has_button(&block, &config.button_class) {
            continue;
        }

        let button = root.document().create_element("button")?;
        button.set_attribute("type", "button")?;
        button.set_class_name(&config.button_class);
        button.set_text_content(Some(&labels.idle));
        block.append_child(&button)?;

        let copy = CopyButton {
            window: root.window().clone(),
            button: button.clone(),
            code,
            clipboard: clipboard.clone(),
            labels: Rc::clone(&labels),
            feedback: Rc::new(RefCell::new(CopyFeedback::new())),
            revert_after_ms: i32::try_from(config.revert_after_ms).unwrap_or(i32::MAX),
        };
        let on_click = Closure::<dyn FnMut()>::new(move || copy.activate());
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        installed += 1;
    }

    debug!("Installed {} copy buttons", installed);
    Ok(installed)
}

fn has_button(block: &Element, button_class: &str) -> bool {
    let children = block.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .any(|child| child.class_list().contains(button_class))
}

/// Everything one button's click handler needs.
#[derive(Clone)]
struct CopyButton {
    window: Window,
    button: Element,
    code: Element,
    clipboard: ClipboardHandle,
    labels: Rc<CopyLabels>,
    feedback: Rc<RefCell<CopyFeedback>>,
    revert_after_ms: i32,
}

impl CopyButton {
    fn activate(&self) {
        // Read at click time so edits made after page load are picked up.
        let text = visible_text(&self.code);
        let this = self.clone();
        spawn_local(async move {
            let result = this.clipboard.write_text(&text).await;
            let token = {
                let mut feedback = this.feedback.borrow_mut();
                match result {
                    Ok(()) => feedback.succeed(),
                    Err(e) => {
                        error!("Failed to copy code: {:?}", e);
                        feedback.fail()
                    }
                }
            };
            this.show_label();
            this.schedule_revert(token);
        });
    }

    fn show_label(&self) {
        let label = self.feedback.borrow().label();
        self.button.set_text_content(Some(label.text(&self.labels)));
    }

    /// Supersedes any revert scheduled by an earlier click.
    fn schedule_revert(&self, token: RevertToken) {
        let this = self.clone();
        let revert = Closure::once_into_js(move || {
            let reverted = this.feedback.borrow_mut().revert(token);
            if reverted {
                this.show_label();
            }
        });
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revert.unchecked_ref(),
                self.revert_after_ms,
            )
        {
            warn!("Failed to schedule copy button reset: {:?}", e);
        }
    }
}
