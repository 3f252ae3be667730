use std::future::Future;
use std::pin::Pin;

use inque_site::host::Delay;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Runs `f` once after `ms` milliseconds. Without a window, runs nothing.
pub(super) fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    );
}

/// `setTimeout` wrapped in a promise.
pub(super) struct BrowserDelay;

impl Delay for BrowserDelay {
    type Sleep = Pin<Box<dyn Future<Output = ()>>>;

    fn sleep(&self, ms: u32) -> Self::Sleep {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    &resolve,
                    ms.min(i32::MAX as u32) as i32,
                )
                .ok()
            });
            if scheduled.is_none() {
                let _ = resolve.call0(&JsValue::UNDEFINED);
            }
        });
        Box::pin(async move {
            let _ = JsFuture::from(promise).await;
        })
    }
}
