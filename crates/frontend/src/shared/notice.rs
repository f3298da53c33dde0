use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const SUCCESS_BANNER_MS: u32 = 3000;

/// Shows a success banner and clears it again after a few seconds.
pub fn flash_success(slot: RwSignal<Option<String>>, message: &str) {
    slot.set(Some(message.to_string()));
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(SUCCESS_BANNER_MS).await;
        slot.set(None);
    });
}
