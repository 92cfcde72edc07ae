//! Order and contact submissions.
//!
//! Pages build a request from their input fields, validate it into a
//! submission, and hand the flat field list to a [`FormSubmitter`]. Delivery is
//! fire-and-forget: one attempt, no retry, and any non-success is reported to
//! the user as a single generic message.

use std::future::Future;

use crate::core::catalog::Product;
use crate::core::config::FormEndpoint;
use crate::core::format::{format_amount, order_total};

/// Validation failures. Each maps to a dictionary key for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("full name is required")]
    MissingOrderName,
    #[error("phone number is required")]
    MissingPhone,
    #[error("delivery address is required")]
    MissingAddress,
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("full name is required")]
    MissingContactName,
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

impl FormError {
    pub fn message_key(self) -> &'static str {
        match self {
            Self::MissingOrderName => "order.errors.full_name",
            Self::MissingPhone => "order.errors.phone",
            Self::MissingAddress => "order.errors.address",
            Self::InvalidQuantity => "order.errors.quantity",
            Self::MissingContactName => "contact.errors.full_name",
            Self::MissingEmail => "contact.errors.email",
            Self::MissingMessage => "contact.errors.message",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("form field `{0}` has no entry id configured")]
    UnmappedField(&'static str),
    #[error("form endpoint has no form id configured")]
    MissingFormId,
    #[error("network error: {0}")]
    Network(String),
    #[error("form service answered with status {0}")]
    Rejected(u16),
}

/// Raw order form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub quantity: u32,
    pub address: String,
}

impl Default for OrderRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            quantity: 1,
            address: String::new(),
        }
    }
}

/// A validated order, ready to post.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    pub quantity: u32,
    pub total: f64,
    pub address: String,
}

impl OrderSubmission {
    /// Checks run in the order fields appear on the form; the first failure wins.
    pub fn new(request: &OrderRequest, product: &Product) -> Result<Self, FormError> {
        if request.full_name.trim().is_empty() {
            return Err(FormError::MissingOrderName);
        }
        if request.phone.trim().is_empty() {
            return Err(FormError::MissingPhone);
        }
        if request.quantity == 0 {
            return Err(FormError::InvalidQuantity);
        }
        if request.address.trim().is_empty() {
            return Err(FormError::MissingAddress);
        }
        Ok(Self {
            full_name: request.full_name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            product: product.name.clone(),
            quantity: request.quantity,
            total: order_total(product.price, request.quantity),
            address: request.address.trim().to_string(),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.full_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("product", self.product.clone()),
            ("quantity", self.quantity.to_string()),
            ("total", format_amount(self.total)),
            ("address", self.address.clone()),
        ]
    }
}

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(request: &ContactRequest) -> Result<Self, FormError> {
        if request.full_name.trim().is_empty() {
            return Err(FormError::MissingContactName);
        }
        if request.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if request.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(Self {
            full_name: request.full_name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            subject: request.subject.trim().to_string(),
            message: request.message.trim().to_string(),
        })
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.full_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("subject", self.subject.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// Translate logical field names into the endpoint's `entry.NNN` ids.
pub fn encode_fields(
    endpoint: &FormEndpoint,
    fields: &[(&'static str, String)],
) -> Result<Vec<(String, String)>, SubmissionError> {
    if endpoint.form_id.is_empty() {
        return Err(SubmissionError::MissingFormId);
    }
    fields
        .iter()
        .map(|(name, value)| {
            endpoint
                .entry_for(name)
                .map(|entry| (entry.to_string(), value.clone()))
                .ok_or(SubmissionError::UnmappedField(*name))
        })
        .collect()
}

/// Transport for form posts. One attempt per call.
pub trait FormSubmitter {
    fn submit(
        &self,
        endpoint: &FormEndpoint,
        fields: Vec<(&'static str, String)>,
    ) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Posts to the public `formResponse` URL of a Google Form.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleFormsClient;

impl FormSubmitter for GoogleFormsClient {
    async fn submit(
        &self,
        endpoint: &FormEndpoint,
        fields: Vec<(&'static str, String)>,
    ) -> Result<(), SubmissionError> {
        let encoded = encode_fields(endpoint, &fields)?;
        let url = endpoint.response_url();
        let result = post_form(&url, &encoded).await;
        match &result {
            Ok(()) => tracing::info!(form = %endpoint.form_id, "form submitted"),
            Err(err) => tracing::warn!(form = %endpoint.form_id, %err, "form submission failed"),
        }
        result
    }
}

/// Browsers block reading the cross-origin response, so the request goes out
/// in `no-cors` mode and an opaque response counts as delivered.
#[cfg(target_arch = "wasm32")]
async fn post_form(url: &str, fields: &[(String, String)]) -> Result<(), SubmissionError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{FormData, RequestInit, RequestMode, Response, ResponseType};

    let js_err = |err: wasm_bindgen::JsValue| SubmissionError::Network(format!("{err:?}"));

    let window = web_sys::window().ok_or_else(|| SubmissionError::Network("no window".into()))?;
    let form = FormData::new().map_err(js_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::NoCors);
    init.set_body(&form);

    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;
    if response.ok() || response.type_() == ResponseType::Opaque {
        Ok(())
    } else {
        Err(SubmissionError::Rejected(response.status()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_form(url: &str, fields: &[(String, String)]) -> Result<(), SubmissionError> {
    let response = reqwest::Client::new()
        .post(url)
        .form(fields)
        .send()
        .await
        .map_err(|err| SubmissionError::Network(err.to_string()))?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SubmissionError::Rejected(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{catalog, find_product};
    use crate::core::config::StorefrontConfig;
    use std::cell::RefCell;

    fn order_request() -> OrderRequest {
        OrderRequest {
            full_name: "  Fatima Mohamed ".into(),
            email: String::new(),
            phone: "+212 600000000".into(),
            quantity: 2,
            address: "Casablanca".into(),
        }
    }

    #[test]
    fn order_total_uses_product_price() {
        let product = find_product(catalog(), "1").unwrap();
        let order = OrderSubmission::new(&order_request(), &product).unwrap();
        assert_eq!(order.total, 798.0);
        assert_eq!(order.full_name, "Fatima Mohamed");
        assert_eq!(order.product, "Neon Pink Love Sign");
    }

    #[test]
    fn order_validation_reports_first_missing_field() {
        let product = find_product(catalog(), "1").unwrap();
        let mut request = order_request();
        request.phone = "   ".into();
        request.address.clear();
        assert_eq!(OrderSubmission::new(&request, &product), Err(FormError::MissingPhone));

        let request = OrderRequest { quantity: 0, ..order_request() };
        assert_eq!(OrderSubmission::new(&request, &product), Err(FormError::InvalidQuantity));

        assert_eq!(
            OrderSubmission::new(&OrderRequest::default(), &product),
            Err(FormError::MissingOrderName)
        );
    }

    #[test]
    fn order_fields_follow_form_layout() {
        let product = find_product(catalog(), "3").unwrap();
        let fields = OrderSubmission::new(&order_request(), &product).unwrap().fields();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["name", "email", "phone", "product", "quantity", "total", "address"]);
        assert_eq!(fields[5].1, "658");
    }

    #[test]
    fn contact_requires_name_email_and_message() {
        let mut request = ContactRequest {
            full_name: "Karim Ali".into(),
            email: "karim@example.com".into(),
            message: "Bonjour".into(),
            ..ContactRequest::default()
        };
        assert!(ContactSubmission::new(&request).is_ok());
        request.email.clear();
        assert_eq!(ContactSubmission::new(&request), Err(FormError::MissingEmail));
        assert_eq!(FormError::MissingEmail.message_key(), "contact.errors.email");
    }

    #[test]
    fn fields_are_encoded_with_entry_ids() {
        let config = StorefrontConfig::embedded().unwrap();
        let request = ContactRequest {
            full_name: "Karim".into(),
            email: "k@example.com".into(),
            message: "Salut".into(),
            ..ContactRequest::default()
        };
        let fields = ContactSubmission::new(&request).unwrap().fields();
        let encoded = encode_fields(&config.forms.contact, &fields).unwrap();
        assert_eq!(encoded[0], ("entry.1976625530".to_string(), "Karim".to_string()));
        assert_eq!(encoded.len(), 5);
    }

    #[test]
    fn unmapped_field_is_an_error() {
        let endpoint = FormEndpoint {
            form_id: "abc".into(),
            ..FormEndpoint::default()
        };
        let err = encode_fields(&endpoint, &[("name", "x".into())]).unwrap_err();
        assert!(matches!(err, SubmissionError::UnmappedField("name")));
        let err = encode_fields(&FormEndpoint::default(), &[]).unwrap_err();
        assert!(matches!(err, SubmissionError::MissingFormId));
    }

    #[derive(Default)]
    struct RecordingSubmitter {
        calls: RefCell<Vec<Vec<(String, String)>>>,
        fail: bool,
    }

    impl FormSubmitter for RecordingSubmitter {
        async fn submit(
            &self,
            endpoint: &FormEndpoint,
            fields: Vec<(&'static str, String)>,
        ) -> Result<(), SubmissionError> {
            self.calls.borrow_mut().push(encode_fields(endpoint, &fields)?);
            if self.fail {
                Err(SubmissionError::Rejected(500))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn submitter_is_called_once_without_retry() {
        let config = StorefrontConfig::embedded().unwrap();
        let product = find_product(catalog(), "6").unwrap();
        let order = OrderSubmission::new(&order_request(), &product).unwrap();
        let submitter = RecordingSubmitter {
            fail: true,
            ..RecordingSubmitter::default()
        };
        let result = futures::executor::block_on(submitter.submit(&config.forms.order, order.fields()));
        assert!(matches!(result, Err(SubmissionError::Rejected(500))));
        assert_eq!(submitter.calls.borrow().len(), 1);
        assert_eq!(submitter.calls.borrow()[0][3].1, "Pink Marble Lamp");
    }
}
