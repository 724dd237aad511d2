use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::shared::errors::Result;
use crate::shared::logging::log_scroll_listener_error;

/// A registered `scroll` listener on `window`.
///
/// Dropping it removes the listener, so its lifetime is the subscription's.
pub struct ScrollSubscription {
    #[cfg(target_arch = "wasm32")]
    window: web_sys::Window,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

impl ScrollSubscription {
    /// Attach `on_scroll` to the window; it receives `window.scrollY` on every event.
    #[cfg(target_arch = "wasm32")]
    pub fn register(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self> {
        use crate::shared::errors::AppError;
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(AppError::NoWindow)?;

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Ok(offset) = reader.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| AppError::ScrollListenerError(format!("{:?}", e)))?;

        crate::shared::logging::log_scroll_listener_registered();
        Ok(Self { window, callback })
    }

    // No window outside the browser: nothing to listen to
    #[cfg(not(target_arch = "wasm32"))]
    pub fn register(on_scroll: impl FnMut(f64) + 'static) -> Result<Self> {
        drop(on_scroll);
        Ok(Self {})
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
            crate::shared::logging::log_scroll_listener_removed();
        }
    }
}

/// Subscribe to the window's vertical scroll offset for as long as the
/// calling component is mounted.
///
/// Registration happens once, on the first render. The listener is removed
/// in `use_drop` when the component unmounts. If registration fails the
/// error is logged and `on_scroll` is simply never called.
pub fn use_window_scroll(on_scroll: impl FnMut(f64) + 'static) {
    let subscription = use_hook(move || {
        let subscription = match ScrollSubscription::register(on_scroll) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                log_scroll_listener_error(&e.to_string());
                None
            }
        };
        Rc::new(RefCell::new(subscription))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });
}
