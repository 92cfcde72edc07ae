use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

/// Body shown for unknown routes and unknown product ids.
#[component]
pub fn NotFoundPanel() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!(lang, "notFound.title")} }
            p { {t!(lang, "notFound.body")} }
            Link { class: "button--primary", to: "/", {t!(lang, "notFound.back")} }
        }
    }
}

/// Catch-all route target.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");
    rsx! { NotFoundPanel {} }
}
