use dioxus::prelude::*;

use crate::i18n::{resolve_text, use_language, DICTIONARY};
use crate::t;

const VALUES: [&str; 3] = ["quality", "innovation", "satisfaction"];

#[component]
pub fn About() -> Element {
    let lang = use_language();

    let reasons: Vec<String> = (0..DICTIONARY.list_len("about.reasons"))
        .map(|i| resolve_text(&format!("about.reasons.{i}"), lang))
        .collect();

    rsx! {
        section { class: "page page-about",
            div { class: "hero",
                h1 { {t!(lang, "about.heroTitle")} }
                p { {t!(lang, "about.heroSubtitle")} }
            }

            h2 { {t!(lang, "about.ourStory")} }
            p { {t!(lang, "about.storyContent.p1")} }
            p { {t!(lang, "about.storyContent.p2")} }
            p { {t!(lang, "about.storyContent.p3")} }

            h2 { {t!(lang, "about.ourValues")} }
            div { class: "page-about__values",
                for value in VALUES {
                    article { key: "{value}", class: "product-card product-card__body",
                        h3 { {resolve_text(&format!("about.values.{value}.title"), lang)} }
                        p { {resolve_text(&format!("about.values.{value}.desc"), lang)} }
                    }
                }
            }

            h2 { {t!(lang, "about.whyChooseUs")} }
            ul { class: "page-about__reasons",
                for reason in reasons {
                    li { "{reason}" }
                }
            }
        }
    }
}
