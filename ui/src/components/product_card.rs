use dioxus::prelude::*;

use crate::core::catalog::Product;
use crate::core::config::config;
use crate::core::format::format_price;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn ProductCard(product: Product) -> Element {
    let lang = use_language();
    let price = format_price(product.price, &config().currency);
    let href = format!("/products/{}", product.id);
    let reviews = format!("{} {}", product.reviews, t!(lang, "product.reviews"));

    rsx! {
        article { class: "product-card",
            Link { to: href.clone(),
                img { src: "{product.image}", alt: "{product.name}", loading: "lazy" }
            }
            div { class: "product-card__body",
                h3 { "{product.name}" }
                p { class: "product-card__description", "{product.description}" }
                div { class: "product-card__meta",
                    span { class: "price", "{price}" }
                    span { class: "product-card__reviews", "{reviews}" }
                }
                Link { class: "button--primary", to: href, {t!(lang, "product.view")} }
            }
        }
    }
}

/// Grid of cards, or the empty-state message when nothing matched.
#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    let lang = use_language();

    rsx! {
        if products.is_empty() {
            p { class: "product-grid__empty", {t!(lang, "products.empty")} }
        } else {
            div { class: "product-grid",
                for product in products {
                    ProductCard { key: "{product.id}", product: product.clone() }
                }
            }
        }
    }
}
