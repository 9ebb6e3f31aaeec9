use dreamknot::timer::{IntervalTimer, OneShotTimer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `setInterval` with a fixed callback.
pub(super) struct WindowInterval {
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl WindowInterval {
    pub(super) fn new(callback: Closure<dyn FnMut()>) -> Self {
        Self {
            callback,
            handle: None,
        }
    }
}

impl IntervalTimer for WindowInterval {
    fn start(&mut self, period_ms: u32) {
        self.stop();
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            clamp_ms(period_ms),
        ) {
            Ok(id) => self.handle = Some(id),
            Err(_) => tracing::warn!("failed to start interval"),
        }
    }

    fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for WindowInterval {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `setTimeout` with a fixed callback.
pub(super) struct WindowTimeout {
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl WindowTimeout {
    pub(super) fn new(callback: Closure<dyn FnMut()>) -> Self {
        Self {
            callback,
            handle: None,
        }
    }
}

impl OneShotTimer for WindowTimeout {
    fn schedule(&mut self, delay_ms: u32) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            clamp_ms(delay_ms),
        ) {
            Ok(id) => self.handle = Some(id),
            Err(_) => tracing::warn!("failed to schedule timeout"),
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for WindowTimeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `f` once after `delay_ms`. The callback frees itself after firing.
pub(super) fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), clamp_ms(delay_ms))
        .is_err()
    {
        tracing::warn!(delay_ms, "failed to schedule timeout");
    }
}

/// Future that resolves after `delay_ms`.
pub(super) async fn sleep_ms(delay_ms: u32) -> Result<(), String> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let Some(window) = web_sys::window() else {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("timer: no window"));
            return;
        };
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, clamp_ms(delay_ms))
            .is_err()
        {
            let _ = reject.call1(
                &JsValue::UNDEFINED,
                &JsValue::from_str("timer: setTimeout threw"),
            );
        }
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| "timer: sleep rejected".to_string())
}

fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}
