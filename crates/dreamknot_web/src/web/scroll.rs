use dreamknot::page;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;
use super::PageContext;
use crate::dom_contract::{self as sel, class};

type ObserverCallback = dyn FnMut(js_sys::Array, web_sys::IntersectionObserver);

/// Header state tracks the scroll offset, no hysteresis.
pub(super) fn init_header(ctx: &PageContext) {
    let Some(header) = dom::query(&ctx.document, sel::TOP_HEADER) else {
        return;
    };
    let threshold = ctx.config.header_scroll_threshold_px;
    let window = ctx.window.clone();
    dom::listen::<web_sys::Event, _>(&ctx.window, "scroll", move |_| {
        let offset = window.page_y_offset().unwrap_or(0.0);
        dom::set_class(&header, class::SCROLLED, page::header_is_scrolled(offset, threshold));
    });
}

/// One-way reveal for `.animate-on-scroll` elements.
pub(super) fn init_reveal(ctx: &PageContext) {
    let targets = dom::query_all(&ctx.document, sel::SCROLL_REVEAL);
    if targets.is_empty() {
        return;
    }
    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));
    init.set_root_margin(&ctx.config.reveal_root_margin);

    let cb = Closure::wrap(Box::new(|entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        for_each_intersecting(&entries, |target| {
            dom::set_class(&target, class::VISIBLE, true);
            observer.unobserve(&target);
        });
    }) as Box<ObserverCallback>);

    match observe_all(cb, Some(&init), &targets) {
        Ok(()) => tracing::debug!(count = targets.len(), "scroll reveal armed"),
        Err(e) => tracing::warn!("scroll reveal unavailable: {e}"),
    }
}

/// `img.lazy` swaps in `data-src` on first intersection.
pub(super) fn init_lazy_images(ctx: &PageContext) {
    let images = dom::query_all(&ctx.document, sel::LAZY_IMAGES);
    if images.is_empty() {
        return;
    }
    let cb = Closure::wrap(Box::new(|entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        for_each_intersecting(&entries, |target| {
            if let Some(src) = target.get_attribute("data-src") {
                let _ = target.set_attribute("src", &src);
            }
            dom::set_class(&target, class::LAZY, false);
            observer.unobserve(&target);
        });
    }) as Box<ObserverCallback>);

    if let Err(e) = observe_all(cb, None, &images) {
        tracing::warn!("lazy images unavailable: {e}");
    }
}

fn for_each_intersecting(entries: &js_sys::Array, mut f: impl FnMut(web_sys::Element)) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
            continue;
        };
        if entry.is_intersecting() {
            f(entry.target());
        }
    }
}

fn observe_all(
    cb: Closure<ObserverCallback>,
    init: Option<&web_sys::IntersectionObserverInit>,
    targets: &[web_sys::Element],
) -> Result<(), String> {
    let func: &js_sys::Function = cb.as_ref().unchecked_ref();
    let observer = match init {
        Some(init) => web_sys::IntersectionObserver::new_with_options(func, init),
        None => web_sys::IntersectionObserver::new(func),
    }
    .map_err(|e| format!("{e:?}"))?;
    for target in targets {
        observer.observe(target);
    }
    cb.forget();
    Ok(())
}
