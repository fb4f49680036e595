//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

use docsite_core::{CopyConfig, NavConfig, SiteConfig, TocConfig};
use docsite_wasm::{
    ClipboardHandle, PageRoot, install_copy_buttons, install_nav_toggle, install_scroll_spy,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Appends `html` inside a fresh container and returns a root scoped to it.
fn fixture(html: &str) -> (PageRoot, Element) {
    let page = PageRoot::from_window().expect("Should run in a browser page");
    let container = page.document().create_element("div").unwrap();
    container.set_inner_html(html);
    page.document()
        .body()
        .expect("Page should have a body")
        .append_child(&container)
        .unwrap();
    (page.scoped(container.clone()), container)
}

fn by_selector(scope: &Element, selector: &str) -> HtmlElement {
    scope
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("Fixture should contain {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// A stand-in for `navigator.clipboard` that records what it was given.
fn recording_clipboard(accept: bool) -> ClipboardHandle {
    let body = if accept {
        "globalThis.__docsiteCopied = text; return Promise.resolve();"
    } else {
        "return Promise.reject(new Error('denied'));"
    };
    let write_text = js_sys::Function::new_with_args("text", body);
    let clipboard = js_sys::Object::new();
    js_sys::Reflect::set(&clipboard, &"writeText".into(), &write_text).unwrap();
    ClipboardHandle::from_js(clipboard.into()).expect("Object should be accepted")
}

fn copied_text() -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &"__docsiteCopied".into())
        .ok()
        .and_then(|v| v.as_string())
}

#[wasm_bindgen_test]
fn test_version() {
    let version = docsite_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_nav_toggle_round_trip() {
    let (root, container) = fixture(
        r#"<button class="nav-toggle" aria-expanded="false">Menu</button>
           <nav id="nav-test-menu"></nav>"#,
    );
    let config = NavConfig {
        menu_id: "nav-test-menu".to_string(),
        ..NavConfig::default()
    };

    assert!(install_nav_toggle(&root, &config).unwrap());

    let toggle = by_selector(&container, ".nav-toggle");
    let menu = by_selector(&container, "#nav-test-menu");

    toggle.click();
    assert!(menu.class_list().contains("is-open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    toggle.click();
    assert!(!menu.class_list().contains("is-open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    container.remove();
}

#[wasm_bindgen_test]
fn test_nav_toggle_installed_twice_still_opens_on_one_click() {
    let (root, container) = fixture(
        r#"<button class="nav-toggle" aria-expanded="false">Menu</button>
           <nav id="nav-twice-menu"></nav>"#,
    );
    let config = NavConfig {
        menu_id: "nav-twice-menu".to_string(),
        ..NavConfig::default()
    };

    assert!(install_nav_toggle(&root, &config).unwrap());
    assert!(install_nav_toggle(&root, &config).unwrap());

    let toggle = by_selector(&container, ".nav-toggle");
    let menu = by_selector(&container, "#nav-twice-menu");

    toggle.click();
    assert!(menu.class_list().contains("is-open"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

    container.remove();
}

#[wasm_bindgen_test]
fn test_nav_toggle_skipped_without_menu() {
    let (root, container) = fixture(r#"<button class="nav-toggle">Menu</button>"#);
    let config = NavConfig {
        menu_id: "nav-test-missing".to_string(),
        ..NavConfig::default()
    };
    assert!(!install_nav_toggle(&root, &config).unwrap());
    container.remove();
}

#[wasm_bindgen_test]
fn test_no_clipboard_means_no_buttons() {
    let (root, container) = fixture("<pre><code>cargo build</code></pre>");

    let installed = install_copy_buttons(&root, None, &CopyConfig::default()).unwrap();

    assert_eq!(installed, 0);
    assert!(container.query_selector("button").unwrap().is_none());
    container.remove();
}

#[wasm_bindgen_test]
fn test_buttons_only_on_blocks_with_code() {
    let (root, container) = fixture(
        "<pre><code>one</code></pre><pre>plain text</pre><pre><code>two</code></pre>",
    );
    let config = CopyConfig::default();

    let installed = install_copy_buttons(&root, Some(recording_clipboard(true)), &config).unwrap();
    assert_eq!(installed, 2);

    // A second pass does not double up.
    let again = install_copy_buttons(&root, Some(recording_clipboard(true)), &config).unwrap();
    assert_eq!(again, 0);
    assert_eq!(
        container
            .query_selector_all(".copy-code-button")
            .unwrap()
            .length(),
        2
    );
    container.remove();
}

#[wasm_bindgen_test]
async fn test_copy_shows_feedback_then_reverts() {
    let (root, container) = fixture("<pre><code>npm run docs</code></pre>");
    let config = CopyConfig {
        revert_after_ms: 100,
        ..CopyConfig::default()
    };
    install_copy_buttons(&root, Some(recording_clipboard(true)), &config).unwrap();

    let button = by_selector(&container, ".copy-code-button");
    assert_eq!(button.text_content().as_deref(), Some("Copy"));

    button.click();
    sleep(20).await;
    assert_eq!(copied_text().as_deref(), Some("npm run docs"));
    assert_eq!(button.text_content().as_deref(), Some("Copied!"));

    sleep(150).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy"));
    container.remove();
}

#[wasm_bindgen_test]
async fn test_rejected_write_shows_error() {
    let (root, container) = fixture("<pre><code>secret</code></pre>");
    let config = CopyConfig {
        revert_after_ms: 100,
        ..CopyConfig::default()
    };
    install_copy_buttons(&root, Some(recording_clipboard(false)), &config).unwrap();

    let button = by_selector(&container, ".copy-code-button");
    button.click();
    sleep(20).await;
    assert_eq!(button.text_content().as_deref(), Some("Error"));

    sleep(150).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy"));
    container.remove();
}

#[wasm_bindgen_test]
async fn test_later_click_keeps_its_label_for_the_full_window() {
    let (root, container) = fixture("<pre><code>x</code></pre>");
    let config = CopyConfig {
        revert_after_ms: 200,
        ..CopyConfig::default()
    };
    install_copy_buttons(&root, Some(recording_clipboard(true)), &config).unwrap();
    let button = by_selector(&container, ".copy-code-button");

    button.click();
    sleep(120).await;
    button.click();
    // The first click's timer fires around here and must be ignored.
    sleep(120).await;
    assert_eq!(button.text_content().as_deref(), Some("Copied!"));

    sleep(150).await;
    assert_eq!(button.text_content().as_deref(), Some("Copy"));
    container.remove();
}

const TOC_FIXTURE: &str = r##"
<aside class="spy-sidebar">
  <ul>
    <li><a href="#spy-one">One</a></li>
    <li><a href="">Empty</a></li>
    <li><a href="#">Bare</a></li>
    <li><a href="#spy missing">Spaces</a></li>
    <li><a href="#spy-nowhere">Nowhere</a></li>
    <li><a href="#spy-two">Two</a></li>
  </ul>
</aside>
<h2 id="spy-one">One</h2>
<div style="height: 3000px"></div>
<h2 id="spy-two">Two</h2>
<div style="height: 3000px"></div>
"##;

fn toc_config() -> TocConfig {
    TocConfig {
        sidebar_selector: ".spy-sidebar".to_string(),
        header_selector: ".spy-header".to_string(),
        ..TocConfig::default()
    }
}

fn active_links(container: &Element) -> Vec<String> {
    let list = container.query_selector_all(".active-toc-link").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .filter_map(|e| e.get_attribute("href"))
        .collect()
}

#[wasm_bindgen_test]
fn test_scroll_spy_skips_bad_links_and_follows_scrolling() {
    let (root, container) = fixture(TOC_FIXTURE);
    let window = root.window().clone();

    let spy = install_scroll_spy(&root, &toc_config())
        .unwrap()
        .expect("Valid links should still be wired");
    assert_eq!(spy.heading_count(), 2);

    let band = spy.band();
    let scroll_to_heading = |id: &str| {
        let heading = root.element_by_id(id).unwrap();
        let top = heading.get_bounding_client_rect().top() + window.scroll_y().unwrap();
        window.scroll_to_with_x_and_y(0.0, top - band.top() - 10.0);
    };

    scroll_to_heading("spy-one");
    spy.refresh();
    assert_eq!(spy.active_href().as_deref(), Some("#spy-one"));
    assert_eq!(active_links(&container), vec!["#spy-one".to_string()]);

    // H2 inside the band, H1 far above it.
    scroll_to_heading("spy-two");
    spy.refresh();
    assert_eq!(spy.active_href().as_deref(), Some("#spy-two"));
    assert_eq!(active_links(&container), vec!["#spy-two".to_string()]);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    spy.disconnect();
    container.remove();
}

/// Scrolls the window so that `id` sits `offset` pixels below the band's top.
fn scroll_heading_to(root: &PageRoot, band_top: f64, id: &str, offset: f64) {
    let window = root.window();
    let heading = root.element_by_id(id).unwrap();
    let top = heading.get_bounding_client_rect().top() + window.scroll_y().unwrap();
    window.scroll_to_with_x_and_y(0.0, top - band_top - offset);
}

#[wasm_bindgen_test]
async fn test_heading_entering_band_is_highlighted_while_scrolling() {
    let (root, container) = fixture(TOC_FIXTURE);
    let spy = install_scroll_spy(&root, &toc_config())
        .unwrap()
        .expect("Valid links should still be wired");
    let band_top = spy.band().top();

    scroll_heading_to(&root, band_top, "spy-one", 10.0);
    sleep(100).await;
    assert_eq!(active_links(&container), vec!["#spy-one".to_string()]);

    scroll_heading_to(&root, band_top, "spy-two", 10.0);
    sleep(100).await;
    assert_eq!(active_links(&container), vec!["#spy-two".to_string()]);

    root.window().scroll_to_with_x_and_y(0.0, 0.0);
    spy.disconnect();
    container.remove();
}

#[wasm_bindgen_test]
async fn test_jump_past_the_band_moves_highlight() {
    let (root, container) = fixture(TOC_FIXTURE);
    let spy = install_scroll_spy(&root, &toc_config())
        .unwrap()
        .expect("Valid links should still be wired");
    let band_top = spy.band().top();

    // One just above the band, Two far below it.
    scroll_heading_to(&root, band_top, "spy-one", -10.0);
    sleep(100).await;
    assert_eq!(active_links(&container), vec!["#spy-one".to_string()]);

    // Two goes from below the band to above it without ever touching it.
    scroll_heading_to(&root, band_top, "spy-two", -500.0);
    sleep(100).await;
    assert_eq!(active_links(&container), vec!["#spy-two".to_string()]);

    root.window().scroll_to_with_x_and_y(0.0, 0.0);
    spy.disconnect();
    container.remove();
}

#[wasm_bindgen_test]
fn test_scroll_spy_attaches_once_per_sidebar() {
    let (root, container) = fixture(TOC_FIXTURE);
    let config = toc_config();

    let spy = install_scroll_spy(&root, &config).unwrap().expect("First install wires");
    assert!(install_scroll_spy(&root, &config).unwrap().is_none());

    spy.disconnect();
    let again = install_scroll_spy(&root, &config)
        .unwrap()
        .expect("Sidebar is free again after disconnect");
    again.disconnect();
    container.remove();
}

#[wasm_bindgen_test]
fn test_scroll_spy_skipped_without_sidebar() {
    let (root, container) = fixture("<h2 id=\"lonely\">Lonely</h2>");
    assert!(install_scroll_spy(&root, &toc_config()).unwrap().is_none());
    container.remove();
}

#[wasm_bindgen_test]
fn test_scroll_spy_skipped_when_no_link_resolves() {
    let (root, container) = fixture(
        r##"<aside class="spy-sidebar"><ul><li><a href="#nope">Nope</a></li></ul></aside>"##,
    );
    assert!(install_scroll_spy(&root, &toc_config()).unwrap().is_none());
    container.remove();
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_reported() {
    let (root, container) = fixture("<pre><code>x</code></pre>");
    let config = CopyConfig {
        block_selector: "pre[".to_string(),
        ..CopyConfig::default()
    };
    let err = install_copy_buttons(&root, Some(recording_clipboard(true)), &config).unwrap_err();
    assert_eq!(err.code(), docsite_wasm::ErrorCode::Dom);
    container.remove();
}

#[wasm_bindgen_test]
fn test_init_with_config_rejects_bad_config() {
    let bad = serde_wasm_bindgen::to_value(&config_with_empty_active_class()).unwrap();
    assert!(docsite_wasm::init_with_config(bad).is_err());
}

fn config_with_empty_active_class() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.toc.active_class = String::new();
    config
}
