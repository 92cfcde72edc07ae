use dioxus::prelude::*;

use crate::components::{CategoryChips, ProductGrid, ReviewCard};
use crate::core::catalog::{catalog, query_catalog, trending, CatalogQuery, CategoryFilter};
use crate::core::testimonials::TESTIMONIALS;
use crate::i18n::use_language;
use crate::t;

/// How many products the "popular" strip shows.
const TRENDING_COUNT: usize = 3;

#[component]
pub fn Home() -> Element {
    let lang = use_language();
    let category = use_signal(CategoryFilter::default);

    let popular = use_memo(|| trending(catalog(), TRENDING_COUNT));
    let listed = use_memo(move || {
        query_catalog(
            catalog(),
            &CatalogQuery {
                category: category(),
                ..CatalogQuery::default()
            },
        )
    });

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { {t!(lang, "home.hero.title")} }
                p { {t!(lang, "home.hero.subtitle")} }
                Link { class: "button--primary", to: "/products", {t!(lang, "home.hero.cta")} }
            }

            h2 { {t!(lang, "products.featured")} }
            ProductGrid { products: popular() }

            h2 { {t!(lang, "products.title")} }
            CategoryChips { active: category }
            ProductGrid { products: listed() }

            h2 { {t!(lang, "testimonials.title")} }
            div { class: "review-grid",
                for testimonial in TESTIMONIALS {
                    ReviewCard { key: "{testimonial.name}", testimonial }
                }
            }

            p { class: "page-home__cta",
                Link { to: "/products", {t!(lang, "products.view_all")} }
            }
        }
    }
}
