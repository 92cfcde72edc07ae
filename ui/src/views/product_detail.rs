use dioxus::prelude::*;

use crate::components::{OrderForm, ProductGrid};
use crate::core::catalog::{catalog, find_product, related_products};
use crate::core::config::config;
use crate::core::format::format_price;
use crate::i18n::use_language;
use crate::t;

use super::NotFoundPanel;

const RELATED_COUNT: usize = 3;

#[component]
pub fn ProductDetail(id: String) -> Element {
    let lang = use_language();

    let Some(product) = find_product(catalog(), &id) else {
        tracing::debug!(%id, "unknown product id");
        return rsx! { NotFoundPanel {} };
    };

    let price = format_price(product.price, &config().currency);
    let related = related_products(catalog(), &product, RELATED_COUNT);
    let gallery: Vec<String> = product
        .images
        .iter()
        .filter(|src| **src != product.image)
        .cloned()
        .collect();

    rsx! {
        section { class: "page page-product",
            Link { class: "page-product__back", to: "/products", {t!(lang, "product.back")} }

            div { class: "page-product__layout",
                div { class: "page-product__media",
                    img { src: "{product.image}", alt: "{product.name}" }
                    for src in gallery {
                        img { key: "{src}", class: "page-product__thumb", src: "{src}", alt: "{product.name}" }
                    }
                }

                div { class: "page-product__info",
                    h1 { "{product.name}" }
                    p { class: "price", "{price}" }
                    p { "{product.description}" }

                    h2 { {t!(lang, "product.features")} }
                    ul { class: "page-product__features",
                        for feature in product.features.iter() {
                            li { "{feature}" }
                        }
                    }

                    OrderForm { product: product.clone() }
                }
            }

            if !related.is_empty() {
                h2 { {t!(lang, "product.related")} }
                ProductGrid { products: related.clone() }
            }
        }
    }
}
