use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::t;

/// Catches render errors from the pages below it and shows a localized panel
/// with "try again" (clears the error and re-renders) and "back to home".
#[component]
pub fn PageErrorBoundary(children: Element) -> Element {
    let lang = use_language();

    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                for err in errors.errors().iter() {
                    tracing::error!(error = ?err, "page failed to render");
                }
                let retry = errors.clone();
                rsx! {
                    section { class: "page page-error", role: "alert",
                        h1 { {t!(lang, "error.title")} }
                        p { {t!(lang, "error.body")} }
                        div { class: "page-error__actions",
                            button {
                                class: "button--primary",
                                r#type: "button",
                                onclick: move |_| retry.clear_errors(),
                                {t!(lang, "error.retry")}
                            }
                            Link {
                                class: "button--secondary",
                                to: "/",
                                onclick: move |_| errors.clear_errors(),
                                {t!(lang, "error.back")}
                            }
                        }
                    }
                }
            },
            {children}
        }
    }
}
