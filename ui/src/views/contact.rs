use dioxus::prelude::*;

use crate::components::ContactForm;
use crate::i18n::use_language;
use crate::t;

#[component]
pub fn Contact() -> Element {
    let lang = use_language();
    let phone = t!(lang, "contactInfo.phone");
    let email = t!(lang, "contactInfo.email");

    rsx! {
        section { class: "page page-contact",
            h1 { {t!(lang, "contact.title")} }
            p { {t!(lang, "contact.subtitle")} }

            div { class: "page-contact__layout",
                ContactForm {}
                aside { class: "page-contact__info",
                    h2 { {t!(lang, "contactInfo.title")} }
                    p { a { href: "tel:{phone}", "{phone}" } }
                    p { a { href: "mailto:{email}", "{email}" } }
                    p { {t!(lang, "contactInfo.location")} }
                }
            }
        }
    }
}
