//! `window.DreamKnot`: helpers other scripts on the page may call.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use dreamknot::format::{self, LongDate};
use dreamknot::notification::{Notification, NotificationTiming, Severity};
use dreamknot::timer::Debouncer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::modal::expose;
use super::notify;
use super::timers::WindowTimeout;
use super::PageContext;

const NAMESPACE: &str = "DreamKnot";

pub(super) fn init(ctx: &PageContext) {
    let api = js_sys::Object::new();
    let timing = ctx.config.notification_timing();

    let show = Closure::wrap(Box::new(move |message: JsValue, severity: JsValue| {
        show_notification(message, severity, timing);
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    let currency = Closure::wrap(Box::new(|amount: JsValue| -> String {
        format::format_currency(js_sys::Number::new(&amount).value_of())
    }) as Box<dyn FnMut(JsValue) -> String>);
    let date = Closure::wrap(
        Box::new(format_date) as Box<dyn FnMut(JsValue) -> Result<String, JsValue>>
    );
    let debounce = Closure::wrap(
        Box::new(make_debounced) as Box<dyn FnMut(js_sys::Function, JsValue) -> Result<JsValue, JsValue>>
    );

    let members = [
        ("showNotification", show.into_js_value()),
        ("formatCurrency", currency.into_js_value()),
        ("formatDate", date.into_js_value()),
        ("debounce", debounce.into_js_value()),
    ];
    for (name, func) in members {
        if js_sys::Reflect::set(&api, &JsValue::from_str(name), &func).is_err() {
            tracing::warn!(name, "failed to attach helper");
        }
    }
    expose(&ctx.window, NAMESPACE, &api);
}

fn show_notification(message: JsValue, severity: JsValue, timing: NotificationTiming) {
    let message = message.as_string().unwrap_or_default();
    let severity = severity
        .as_string()
        .and_then(|s| s.parse::<Severity>().ok())
        .unwrap_or_default();
    notify::present(Notification::new(message, severity), timing);
}

/// ISO date strings are read as calendar dates; anything else goes through
/// `Date` and its local calendar fields.
fn format_date(value: JsValue) -> Result<String, JsValue> {
    if let Some(text) = value.as_string() {
        if let Ok(date) = format::parse_date(&text) {
            return Ok(date.to_string());
        }
    }
    let date = js_sys::Date::new(&value);
    if date.get_time().is_nan() {
        return Err(js_sys::RangeError::new("Invalid time value").into());
    }
    LongDate::new(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
        .map(|d| d.to_string())
        .map_err(|e| js_sys::RangeError::new(&e.to_string()).into())
}

type ArgsDebouncer = RefCell<Debouncer<WindowTimeout, js_sys::Array>>;

/// Returns a function that calls `func` with the latest arguments once
/// `wait` ms pass without another call.
fn make_debounced(func: js_sys::Function, wait: JsValue) -> Result<JsValue, JsValue> {
    let wait_ms = wait
        .as_f64()
        .filter(|w| w.is_finite())
        .map(|w| w.clamp(0.0, f64::from(u32::MAX)) as u32)
        .unwrap_or(0);

    let cell: Rc<OnceCell<ArgsDebouncer>> = Rc::new(OnceCell::new());
    let weak = Rc::downgrade(&cell);
    let fire = Closure::wrap(Box::new(move || {
        let Some(cell) = weak.upgrade() else {
            return;
        };
        // Release the borrow before `func` runs; it may call back in.
        let args = cell.get().and_then(|d| d.borrow_mut().fire());
        if let Some(args) = args {
            if let Err(e) = func.apply(&JsValue::UNDEFINED, &args) {
                tracing::warn!("debounced function threw: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>);
    let _ = cell.set(RefCell::new(Debouncer::new(wait_ms, WindowTimeout::new(fire))));

    let inner = Closure::wrap(Box::new(move |args: js_sys::Array| {
        if let Some(d) = cell.get() {
            d.borrow_mut().call(args);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    // Collects the variadic arguments into one array for the Rust side.
    let shim = js_sys::Function::new_with_args("inner", "return function (...args) { inner(args); };");
    shim.call1(&JsValue::UNDEFINED, &inner.into_js_value())
}
