use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlImageElement};

/// Keeps exactly one `<link rel="canonical">` in the document head, pointing
/// at the current origin + path. Creates the tag if absent, otherwise
/// updates it in place.
pub fn upsert_canonical_link() {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            let location = window.location();
            if let (Ok(origin), Ok(pathname)) = (location.origin(), location.pathname()) {
                let href = format!("{}{}", origin, pathname);
                if let Ok(Some(existing)) = document.query_selector("link[rel=\"canonical\"]") {
                    let _ = existing.set_attribute("href", &href);
                } else if let (Ok(link), Some(head)) =
                    (document.create_element("link"), document.head())
                {
                    let _ = link.set_attribute("rel", "canonical");
                    let _ = link.set_attribute("href", &href);
                    let _ = head.append_child(&link);
                }
            }
        }
    }
}

/// Inserts a preload hint per image path (deduplicated by exact attribute
/// match) and warms the browser cache with an eager async decode. Both are
/// fire-and-forget: no retry, no failure signal.
pub fn ensure_image_preloads(paths: &[&str]) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        for path in paths {
            insert_preload_hint(&document, path);
            warm_image_cache(path);
        }
    }
}

fn insert_preload_hint(document: &Document, href: &str) {
    let selector = format!("link[rel=\"preload\"][as=\"image\"][href=\"{}\"]", href);
    if let Ok(Some(_)) = document.query_selector(&selector) {
        return;
    }
    if let (Ok(link), Some(head)) = (document.create_element("link"), document.head()) {
        let _ = link.set_attribute("rel", "preload");
        let _ = link.set_attribute("as", "image");
        let _ = link.set_attribute("href", href);
        let _ = head.append_child(&link);
    }
}

fn warm_image_cache(src: &str) {
    if let Ok(image) = HtmlImageElement::new() {
        image.set_decoding("async");
        image.set_src(src);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(image.decode()).await;
        });
    }
}

/// Smooth-scrolls to an on-page anchor. A missing target is a no-op.
pub fn scroll_to_anchor(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(target) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
