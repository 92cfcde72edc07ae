use dioxus::prelude::*;

use crate::components::{CategoryChips, ProductGrid};
use crate::core::catalog::{catalog, query_catalog, CatalogQuery, CategoryFilter, SortMode};
use crate::i18n::{resolve_text, use_language};
use crate::t;

#[component]
pub fn Products() -> Element {
    let lang = use_language();
    let category = use_signal(CategoryFilter::default);
    let mut search_text = use_signal(String::new);
    let mut sort_mode = use_signal(SortMode::default);

    let results = use_memo(move || {
        query_catalog(
            catalog(),
            &CatalogQuery {
                category: category(),
                search_text: search_text(),
                sort_mode: sort_mode(),
            },
        )
    });
    let count = format!("{} {}", results().len(), t!(lang, "products.count"));

    rsx! {
        section { class: "page page-products",
            h1 { {t!(lang, "products.title")} }

            CategoryChips { active: category }

            div { class: "toolbar",
                input {
                    r#type: "search",
                    class: "toolbar__search",
                    value: search_text(),
                    placeholder: t!(lang, "products.search_placeholder"),
                    oninput: move |evt: FormEvent| search_text.set(evt.value()),
                }
                label { class: "toolbar__sort",
                    {t!(lang, "sort.label")}
                    select {
                        value: sort_mode().as_str(),
                        onchange: move |evt: FormEvent| sort_mode.set(SortMode::parse(&evt.value())),
                        for mode in SortMode::ALL {
                            option {
                                key: "{mode.as_str()}",
                                value: mode.as_str(),
                                selected: mode == sort_mode(),
                                {resolve_text(&format!("sort.{}", mode.as_str()), lang)}
                            }
                        }
                    }
                }
                span { class: "toolbar__count", "{count}" }
            }

            ProductGrid { products: results() }
        }
    }
}
