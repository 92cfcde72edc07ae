use dioxus::prelude::*;

use crate::i18n::use_language_provider;

/// Root wrapper: owns the active-language signal and mirrors `dir`/`lang` on
/// the element enclosing the whole app.
#[component]
pub fn LanguageRoot(children: Element) -> Element {
    let lang = use_language_provider();
    let current = lang();

    rsx! {
        div {
            class: "app",
            dir: current.direction().as_str(),
            lang: current.code(),
            {children}
        }
    }
}
