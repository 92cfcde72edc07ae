use dioxus::prelude::*;

use crate::core::catalog::{categories, CategoryFilter};
use crate::i18n::{resolve_text, use_language};
use crate::t;

/// Filter buttons: the `all` sentinel followed by the published categories.
#[component]
pub fn CategoryChips(active: Signal<CategoryFilter>) -> Element {
    let mut active = active;
    let lang = use_language();
    let current = active();

    let chip_class = |selected: bool| {
        if selected {
            "chip chip--active"
        } else {
            "chip"
        }
    };

    rsx! {
        div { class: "chips", role: "group",
            button {
                r#type: "button",
                class: chip_class(current == CategoryFilter::All),
                onclick: move |_| active.set(CategoryFilter::All),
                {t!(lang, "categories.all")}
            }
            for category in categories().iter().copied() {
                button {
                    key: "{category.slug()}",
                    r#type: "button",
                    class: chip_class(current == CategoryFilter::Only(category)),
                    onclick: move |_| active.set(CategoryFilter::Only(category)),
                    {resolve_text(&format!("categories.{}", category.slug()), lang)}
                }
            }
        }
    }
}
