//! The slice of the page a feature is installed into.

use crate::error::UiError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Handles to the browser objects every installer needs.
///
/// Installers receive a `PageRoot` instead of reaching for the global
/// `window`, so they can be pointed at a fragment of the page. Selector
/// queries are confined to `scope`; id lookups go through the document.
#[derive(Debug, Clone)]
pub struct PageRoot {
    window: Window,
    document: Document,
    scope: Element,
}

impl PageRoot {
    /// Scopes queries to the whole document.
    pub fn new(window: Window, document: Document) -> Option<Self> {
        let scope = document.document_element()?;
        Some(Self {
            window,
            document,
            scope,
        })
    }

    /// Builds a root from the global `window`, or `None` outside a browser
    /// page (workers, Node.js).
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Self::new(window, document)
    }

    /// Same window and document, with queries confined to `scope`.
    pub fn scoped(&self, scope: Element) -> Self {
        Self {
            window: self.window.clone(),
            document: self.document.clone(),
            scope,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scope(&self) -> &Element {
        &self.scope
    }

    pub fn query(&self, selector: &str) -> Result<Option<Element>, UiError> {
        Ok(self.scope.query_selector(selector)?)
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, UiError> {
        Ok(elements(&self.scope.query_selector_all(selector)?))
    }

    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    /// Reads a property from the computed style of `<html>`.
    pub fn root_style_property(&self, property: &str) -> Option<String> {
        let html = self.document.document_element()?;
        let style = self.window.get_computed_style(&html).ok()??;
        style.get_property_value(property).ok()
    }
}

pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// What the user sees of an element, falling back to raw text for non-HTML
/// elements.
pub(crate) fn visible_text(element: &Element) -> String {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => element.text_content().unwrap_or_default(),
    }
}

pub(crate) fn offset_height(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_height()))
}
