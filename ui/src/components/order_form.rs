use dioxus::prelude::*;

use crate::core::catalog::Product;
use crate::core::config::config;
use crate::core::format::{format_price, order_total};
use crate::core::forms::{FormError, FormSubmitter, GoogleFormsClient, OrderRequest, OrderSubmission};
use crate::core::platform;
use crate::i18n::{resolve_text, use_language};
use crate::t;

/// How long the confirmation stays up before the form comes back.
pub(crate) const SUCCESS_MESSAGE_MS: u32 = 5_000;

/// Shared lifecycle of the order and contact forms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FormStatus {
    Idle,
    Submitting,
    Sent,
    Invalid(FormError),
    Failed,
}

#[component]
pub fn OrderForm(product: Product) -> Element {
    let lang = use_language();
    let mut request = use_signal(OrderRequest::default);
    let mut status = use_signal(|| FormStatus::Idle);

    let currency = config().currency.as_str();
    let total = format_price(order_total(product.price, request().quantity), currency);
    let busy = status() == FormStatus::Submitting;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == FormStatus::Submitting {
            return;
        }
        let order = match OrderSubmission::new(&request(), &product) {
            Ok(order) => order,
            Err(err) => {
                status.set(FormStatus::Invalid(err));
                return;
            }
        };
        status.set(FormStatus::Submitting);
        spawn(async move {
            match GoogleFormsClient.submit(&config().forms.order, order.fields()).await {
                Ok(()) => {
                    request.set(OrderRequest::default());
                    status.set(FormStatus::Sent);
                    platform::sleep_ms(SUCCESS_MESSAGE_MS).await;
                    status.set(FormStatus::Idle);
                }
                Err(_) => status.set(FormStatus::Failed),
            }
        });
    };

    let on_quantity = move |evt: FormEvent| {
        if let Ok(quantity) = evt.value().trim().parse::<u32>() {
            if quantity > 0 {
                request.write().quantity = quantity;
            }
        }
    };

    if status() == FormStatus::Sent {
        return rsx! {
            div { class: "form__success", role: "status",
                p { {t!(lang, "order.success")} }
            }
        };
    }

    let error = match status() {
        FormStatus::Invalid(err) => Some(resolve_text(err.message_key(), lang)),
        FormStatus::Failed => Some(t!(lang, "order.errors.failed")),
        _ => None,
    };

    let current = request();

    rsx! {
        form { class: "form order-form", onsubmit: on_submit,
            h2 { {t!(lang, "order.title")} }

            label {
                {t!(lang, "order.full_name")}
                input {
                    r#type: "text",
                    name: "fullName",
                    value: "{current.full_name}",
                    placeholder: t!(lang, "order.full_name_placeholder"),
                    oninput: move |evt: FormEvent| request.write().full_name = evt.value(),
                }
            }
            label {
                {t!(lang, "order.email")}
                input {
                    r#type: "email",
                    name: "email",
                    value: "{current.email}",
                    placeholder: "your@email.com",
                    oninput: move |evt: FormEvent| request.write().email = evt.value(),
                }
            }
            label {
                {t!(lang, "order.phone")}
                input {
                    r#type: "tel",
                    name: "phone",
                    value: "{current.phone}",
                    placeholder: "+212 123 456 7890",
                    oninput: move |evt: FormEvent| request.write().phone = evt.value(),
                }
            }
            div { class: "order-form__quantity",
                label {
                    {t!(lang, "order.quantity")}
                    input {
                        r#type: "number",
                        name: "quantity",
                        min: "1",
                        value: "{current.quantity}",
                        oninput: on_quantity,
                    }
                }
                div {
                    span { {t!(lang, "order.total")} }
                    span { class: "price", "{total}" }
                }
            }
            label {
                {t!(lang, "order.address")}
                textarea {
                    name: "address",
                    rows: "3",
                    value: "{current.address}",
                    placeholder: t!(lang, "order.address_placeholder"),
                    oninput: move |evt: FormEvent| request.write().address = evt.value(),
                }
            }

            if let Some(message) = error {
                div { class: "form__error", role: "alert", "{message}" }
            }

            button { class: "button--primary", r#type: "submit", disabled: busy,
                if busy {
                    {t!(lang, "order.submitting")}
                } else {
                    {t!(lang, "order.submit")}
                }
            }
            p { class: "order-form__note", {t!(lang, "order.cod_note")} }
        }
    }
}
