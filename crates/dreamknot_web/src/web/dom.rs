use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn query(root: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).ok().flatten()
}

pub(super) fn query_as<T: JsCast>(root: &web_sys::Document, selector: &str) -> Option<T> {
    query(root, selector).and_then(|el| el.dyn_into::<T>().ok())
}

pub(super) fn by_id_as<T: JsCast>(root: &web_sys::Document, id: &str) -> Option<T> {
    root.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element matching `selector`, in document order.
pub(super) fn query_all(root: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(super) fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(super) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub(super) fn has_class(el: &web_sys::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(super) fn set_style(el: &web_sys::Element, prop: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = el.style().set_property(prop, value);
    }
}

/// Suppresses or restores page scrolling.
pub(super) fn lock_body_scroll(doc: &web_sys::Document, locked: bool) {
    if let Some(body) = doc.body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Whether `target` is `container` or one of its descendants.
pub(super) fn contains_target(container: &web_sys::Element, target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Attaches a listener for the lifetime of the page.
pub(super) fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let cb = Closure::wrap(Box::new(move |ev: JsValue| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(JsValue)>);
    match target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(_) => tracing::warn!(event, "failed to attach listener"),
    }
}

pub(super) fn navigate(window: &web_sys::Window, href: &str) {
    if window.location().set_href(href).is_err() {
        tracing::warn!(href, "navigation failed");
    }
}
