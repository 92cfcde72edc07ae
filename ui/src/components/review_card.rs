use dioxus::prelude::*;

use crate::core::testimonials::Testimonial;
use crate::i18n::{resolve_text, use_language};
use crate::t;

#[component]
pub fn ReviewCard(testimonial: Testimonial) -> Element {
    let lang = use_language();
    let quote = format!("“{}”", resolve_text(testimonial.quote_key, lang));
    let rating = format!("{} {}", t!(lang, "testimonials.rating"), testimonial.rating_label());
    let screenshot = format!("{} ({})", t!(lang, "testimonials.screenshot"), testimonial.name);

    rsx! {
        article { class: "review-card",
            div { class: "review-card__header",
                div { class: "review-card__avatar", "{testimonial.initial()}" }
                div {
                    h3 { "{testimonial.name}" }
                    span { class: "review-card__verified", {t!(lang, "testimonials.verified")} }
                }
                div { class: "stars", title: "{rating}", aria_label: "{rating}",
                    for (i, filled) in testimonial.stars().into_iter().enumerate() {
                        span {
                            key: "{i}",
                            class: if filled { "stars__star stars__star--filled" } else { "stars__star" },
                            "★"
                        }
                    }
                }
            }
            p { class: "review-card__quote", "{quote}" }
            if !testimonial.image.is_empty() {
                img { src: testimonial.image, alt: "{screenshot}", loading: "lazy" }
            }
        }
    }
}
