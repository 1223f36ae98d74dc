//! Window-width classification with a scoped `resize` subscription.

use contracts::shared::navigation::ViewportClass;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Quiet period after the last `resize` event before re-classifying.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Classifies the current `window.innerWidth`; desktop when unavailable.
pub fn current_viewport_class() -> ViewportClass {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(ViewportClass::from_width)
        .unwrap_or_default()
}

/// Publishes the viewport class now and after every (debounced) resize.
///
/// Every notification is published, even when the class did not change;
/// consumers must tolerate repeats. The listener and any pending timer are
/// released when the calling owner is cleaned up.
pub fn use_viewport_class<F>(on_change: F)
where
    F: Fn(ViewportClass) + Clone + 'static,
{
    on_change(current_viewport_class());

    // Replacing the stored timeout drops, and thereby cancels, the previous one.
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        let on_change = on_change.clone();
        let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            let class = current_viewport_class();
            log::debug!("viewport resized, class: {:?}", class);
            on_change(class);
        });
        pending.set_value(Some(timeout));
    });

    on_cleanup(move || handle.remove());
}
