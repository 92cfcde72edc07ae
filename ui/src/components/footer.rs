use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let lang = use_language();
    let year = OffsetDateTime::now_utc().year();
    let phone = t!(lang, "contactInfo.phone");
    let email = t!(lang, "contactInfo.email");
    let copyright = format!(
        "© {year} {}. {}",
        t!(lang, "brand.name"),
        t!(lang, "footer.copyright")
    );

    rsx! {
        footer { class: "footer",
            div { class: "footer__columns",
                div { class: "footer__brand",
                    strong { {t!(lang, "brand.name")} }
                    p { {t!(lang, "brand.tagline")} }
                }
                nav { class: "footer__links",
                    h4 { {t!(lang, "footer.quickLinks")} }
                    ul {
                        li { Link { to: "/", {t!(lang, "nav.home")} } }
                        li { Link { to: "/products", {t!(lang, "nav.products")} } }
                        li { Link { to: "/about", {t!(lang, "nav.about")} } }
                        li { Link { to: "/contact", {t!(lang, "nav.contact")} } }
                    }
                }
                div { class: "footer__contact",
                    h4 { {t!(lang, "contactInfo.title")} }
                    ul {
                        li { a { href: "tel:{phone}", "{phone}" } }
                        li { a { href: "mailto:{email}", "{email}" } }
                        li { {t!(lang, "contactInfo.location")} }
                    }
                }
            }
            div { class: "footer__bottom",
                span { "{copyright}" }
                span { class: "footer__payment", {t!(lang, "footer.payment")} }
            }
        }
    }
}
