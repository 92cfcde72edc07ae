use crate::i18n::{self, use_language, Language};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the localized label and must return a link whose
/// only child is that label.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///         products: |label| rsx!( Link { class: "navbar__link", to: Route::Products {}, "{label}" } ),
///         about: |label| rsx!( Link { class: "navbar__link", to: Route::About {}, "{label}" } ),
///         contact: |label| rsx!( Link { class: "navbar__link", to: Route::Contact {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a builder the navbar falls back to path-based links.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub products: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
    pub contact: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    let lang = use_language();
    let lang_ctx: Option<Signal<Language>> = try_use_context::<Signal<Language>>();

    let on_change = move |evt: FormEvent| match Language::parse(&evt.value()) {
        Ok(next) => {
            if let Some(signal) = lang_ctx {
                i18n::switch_language(signal, next);
            }
        }
        Err(err) => tracing::warn!(%err, "language switcher sent an unsupported value"),
    };

    let home = t!(lang, "nav.home");
    let products = t!(lang, "nav.products");
    let about = t!(lang, "nav.about");
    let contact = t!(lang, "nav.contact");

    let nav = match NAV_BUILDER.get() {
        Some(b) => rsx! {
            nav { class: "navbar__links",
                {(b.home)(&home)}
                {(b.products)(&products)}
                {(b.about)(&about)}
                {(b.contact)(&contact)}
            }
        },
        None => rsx! {
            nav { class: "navbar__links",
                Link { class: "navbar__link", to: "/", "{home}" }
                Link { class: "navbar__link", to: "/products", "{products}" }
                Link { class: "navbar__link", to: "/about", "{about}" }
                Link { class: "navbar__link", to: "/contact", "{contact}" }
            }
        },
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", {t!(lang, "brand.name")} }
                }

                {nav}

                div { class: "navbar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!(lang, "nav.language")}
                    }
                    select {
                        id: "locale-select",
                        value: "{lang.code()}",
                        onchange: on_change,
                        for option_lang in Language::ALL {
                            option {
                                key: "{option_lang.code()}",
                                value: "{option_lang.code()}",
                                selected: option_lang == lang,
                                "{option_lang.native_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
