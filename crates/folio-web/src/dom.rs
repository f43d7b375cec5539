use std::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once after `delay` on the event loop.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

/// Every element matching `selector`, in document order. Empty on a bad selector.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Matching descendants of `root`.
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

fn elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}
