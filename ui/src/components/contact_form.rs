use dioxus::prelude::*;

use super::order_form::{FormStatus, SUCCESS_MESSAGE_MS};
use crate::core::config::config;
use crate::core::forms::{ContactRequest, ContactSubmission, FormSubmitter, GoogleFormsClient};
use crate::core::platform;
use crate::i18n::{resolve_text, use_language};
use crate::t;

#[component]
pub fn ContactForm() -> Element {
    let lang = use_language();
    let mut request = use_signal(ContactRequest::default);
    let mut status = use_signal(|| FormStatus::Idle);
    let busy = status() == FormStatus::Submitting;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == FormStatus::Submitting {
            return;
        }
        let message = match ContactSubmission::new(&request()) {
            Ok(message) => message,
            Err(err) => {
                status.set(FormStatus::Invalid(err));
                return;
            }
        };
        status.set(FormStatus::Submitting);
        spawn(async move {
            match GoogleFormsClient.submit(&config().forms.contact, message.fields()).await {
                Ok(()) => {
                    request.set(ContactRequest::default());
                    status.set(FormStatus::Sent);
                    platform::sleep_ms(SUCCESS_MESSAGE_MS).await;
                    status.set(FormStatus::Idle);
                }
                Err(_) => status.set(FormStatus::Failed),
            }
        });
    };

    let feedback = match status() {
        FormStatus::Invalid(err) => Some(("form__error", resolve_text(err.message_key(), lang))),
        FormStatus::Failed => Some(("form__error", t!(lang, "contact.errors.failed"))),
        FormStatus::Sent => Some(("form__success", t!(lang, "contact.success"))),
        FormStatus::Idle | FormStatus::Submitting => None,
    };

    let current = request();

    rsx! {
        form { class: "form contact-form", onsubmit: on_submit,
            label {
                {t!(lang, "contact.full_name")}
                input {
                    r#type: "text",
                    name: "fullName",
                    value: "{current.full_name}",
                    oninput: move |evt: FormEvent| request.write().full_name = evt.value(),
                }
            }
            label {
                {t!(lang, "contact.email")}
                input {
                    r#type: "email",
                    name: "email",
                    value: "{current.email}",
                    oninput: move |evt: FormEvent| request.write().email = evt.value(),
                }
            }
            label {
                {t!(lang, "contact.phone")}
                input {
                    r#type: "tel",
                    name: "phone",
                    value: "{current.phone}",
                    oninput: move |evt: FormEvent| request.write().phone = evt.value(),
                }
            }
            label {
                {t!(lang, "contact.subject")}
                input {
                    r#type: "text",
                    name: "subject",
                    value: "{current.subject}",
                    oninput: move |evt: FormEvent| request.write().subject = evt.value(),
                }
            }
            label {
                {t!(lang, "contact.message")}
                textarea {
                    name: "message",
                    rows: "5",
                    value: "{current.message}",
                    oninput: move |evt: FormEvent| request.write().message = evt.value(),
                }
            }

            if let Some((class, text)) = feedback {
                div { class: "{class}", role: "status", "{text}" }
            }

            button { class: "button--primary", r#type: "submit", disabled: busy,
                if busy {
                    {t!(lang, "contact.submitting")}
                } else {
                    {t!(lang, "contact.submit")}
                }
            }
        }
    }
}
