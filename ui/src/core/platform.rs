//! Platform glue: document attributes and timers.

use crate::i18n::Language;

/// Set `dir` and `lang` on `<html>` so the whole page flips for Arabic.
///
/// Desktop has no outer document to touch; the root component also mirrors
/// both attributes on its wrapper element, which covers that case.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_language(language: Language) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::debug!("no document element; skipping dir/lang update");
        return;
    };
    let _ = root.set_attribute("dir", language.direction().as_str());
    let _ = root.set_attribute("lang", language.code());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_language(language: Language) {
    tracing::debug!(
        lang = language.code(),
        dir = language.direction().as_str(),
        "document language applied"
    );
}

/// Resolve after `ms` milliseconds without blocking the UI.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
