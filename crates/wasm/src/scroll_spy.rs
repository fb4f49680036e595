//! Highlighting the table-of-contents link for the section being read.

use crate::dom::{PageRoot, offset_height};
use crate::error::UiError;
use docsite_core::types::{ActivationBand, parse_css_length};
use docsite_core::{ScrollSpyState, TocConfig, TocMap, Transition};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverInit, Window};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct SpyState {
    spy: ScrollSpyState<Element>,
    links: Vec<Element>,
    active_class: String,
}

impl SpyState {
    fn refresh(&mut self) {
        let transition = self
            .spy
            .update_with(|heading| heading.get_bounding_client_rect().top());
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn apply(&self, transition: Transition) {
        let Some(entry) = self.spy.map().get(transition.activate) else {
            return;
        };
        // Clear every link, not just the previous one, so markup that shipped
        // with a highlight cannot leave two links marked.
        for link in &self.links {
            if let Err(e) = link.class_list().remove_1(&self.active_class) {
                warn!("Failed to clear TOC highlight: {:?}", e);
            }
        }
        if let Some(link) = self.links.get(entry.link)
            && let Err(e) = link.class_list().add_1(&self.active_class)
        {
            warn!("Failed to highlight TOC link {}: {:?}", entry.fragment, e);
        }
    }

    fn active_href(&self) -> Option<String> {
        let index = self.spy.active()?;
        self.spy
            .map()
            .get(index)
            .map(|entry| entry.fragment.href().to_string())
    }
}

/// Set on a sidebar while a scroll-spy is attached to it.
const BOUND_ATTRIBUTE: &str = "data-docsite-scroll-spy";

/// Handlers owned by a running spy. Dropping them detaches the spy.
struct Listeners {
    observer: ObserverCallback,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

/// A running scroll-spy.
///
/// Dropping it disconnects the observer and the window listeners. Call
/// [`ScrollSpy::keep_alive`] to leave it running for the rest of the page's life.
pub struct ScrollSpy {
    state: Rc<RefCell<SpyState>>,
    observer: Rc<RefCell<IntersectionObserver>>,
    window: Window,
    sidebar: Element,
    listeners: Option<Listeners>,
}

impl ScrollSpy {
    /// Re-measures the headings and moves the highlight if needed.
    pub fn refresh(&self) {
        self.state.borrow_mut().refresh();
    }

    /// `href` of the highlighted link, if any.
    pub fn active_href(&self) -> Option<String> {
        self.state.borrow().active_href()
    }

    /// Number of links that resolved to a heading.
    pub fn heading_count(&self) -> usize {
        self.state.borrow().spy.map().len()
    }

    pub fn band(&self) -> ActivationBand {
        self.state.borrow().spy.band()
    }

    pub fn disconnect(self) {
        drop(self);
    }

    pub fn keep_alive(mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.observer.forget();
            listeners.on_scroll.forget();
            listeners.on_resize.forget();
        }
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.take() else {
            return;
        };
        self.observer.borrow().disconnect();
        for (event, handler) in [
            ("scroll", &listeners.on_scroll),
            ("resize", &listeners.on_resize),
        ] {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                warn!("Failed to remove scroll-spy {} listener: {:?}", event, e);
            }
        }
        if let Err(e) = self.sidebar.remove_attribute(BOUND_ATTRIBUTE) {
            warn!("Failed to unmark TOC sidebar: {:?}", e);
        }
    }
}

/// Builds an observer whose root is shrunk to `band` and starts it on every
/// mapped heading.
fn observe_band(
    callback: &js_sys::Function,
    state: &SpyState,
    viewport_height: f64,
) -> Result<IntersectionObserver, JsValue> {
    let band = state.spy.band();
    let options = IntersectionObserverInit::new();
    options.set_root_margin(&band.root_margin(viewport_height).to_string());
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(callback, &options)?;
    for heading in state.spy.map().headings() {
        observer.observe(heading);
    }
    Ok(observer)
}

/// Wires the sidebar's links to their headings.
///
/// Returns `Ok(None)` when the sidebar is absent, already has a running spy,
/// or none of its links leads to a heading on this page. Links with bad
/// targets are skipped individually.
///
/// The observer catches headings crossing the band. A scroll listener also
/// re-measures, so a jump that carries a heading clean past the band still
/// moves the highlight. On resize the observer is rebuilt for the new viewport.
pub fn install_scroll_spy(
    root: &PageRoot,
    config: &TocConfig,
) -> Result<Option<ScrollSpy>, UiError> {
    let Some(sidebar) = root.query(&config.sidebar_selector)? else {
        debug!("No '{}' on this page; scroll-spy skipped", config.sidebar_selector);
        return Ok(None);
    };
    if sidebar.has_attribute(BOUND_ATTRIBUTE) {
        debug!("'{}' already has a scroll-spy", config.sidebar_selector);
        return Ok(None);
    }

    let links = crate::dom::elements(&sidebar.query_selector_all(&config.link_selector)?);
    if links.is_empty() {
        debug!("Sidebar has no links; scroll-spy skipped");
        return Ok(None);
    }

    let map = TocMap::build(
        links.iter().map(|link| link.get_attribute("href")),
        |id| root.element_by_id(id.as_str()),
    );
    if map.is_empty() {
        debug!(
            "None of the {} TOC links lead to a heading; scroll-spy skipped",
            map.link_count()
        );
        return Ok(None);
    }

    let header_height = root
        .query(&config.header_selector)?
        .and_then(|header| offset_height(&header));
    let scroll_padding = root
        .root_style_property("scroll-padding-top")
        .and_then(|value| parse_css_length(&value));
    let band = ActivationBand::resolve(header_height, scroll_padding, &config.band);

    let state = Rc::new(RefCell::new(SpyState {
        spy: ScrollSpyState::new(map, band),
        links,
        active_class: config.active_class.clone(),
    }));
    state.borrow_mut().refresh();

    let observed = Rc::clone(&state);
    let callback: ObserverCallback =
        Closure::new(move |_entries: js_sys::Array, _observer: IntersectionObserver| {
            // Entry order is not trusted; every heading is re-measured instead.
            refresh_shared(&observed);
        });
    let callback_fn = callback.as_ref().unchecked_ref::<js_sys::Function>().clone();

    let observer = Rc::new(RefCell::new(observe_band(
        &callback_fn,
        &state.borrow(),
        root.viewport_height(),
    )?));

    let scrolled = Rc::clone(&state);
    let on_scroll = Closure::<dyn FnMut()>::new(move || refresh_shared(&scrolled));

    let resized = Rc::clone(&state);
    let current = Rc::clone(&observer);
    let page = root.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let rebuilt = match resized.try_borrow() {
            Ok(state) => observe_band(&callback_fn, &state, page.viewport_height()),
            Err(_) => return,
        };
        match rebuilt {
            Ok(next) => current.replace(next).disconnect(),
            Err(e) => warn!("Failed to rebuild scroll-spy observer: {:?}", e),
        }
        refresh_shared(&resized);
    });

    let window = root.window().clone();
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    sidebar.set_attribute(BOUND_ATTRIBUTE, "")?;

    debug!(
        "Scroll-spy watching {} headings, band {}..{}px",
        state.borrow().spy.map().len(),
        band.top(),
        band.bottom()
    );

    Ok(Some(ScrollSpy {
        state,
        observer,
        window,
        sidebar,
        listeners: Some(Listeners {
            observer: callback,
            on_scroll,
            on_resize,
        }),
    }))
}

fn refresh_shared(state: &RefCell<SpyState>) {
    match state.try_borrow_mut() {
        Ok(mut state) => state.refresh(),
        Err(_) => debug!("Scroll-spy busy; skipping re-entrant refresh"),
    }
}
