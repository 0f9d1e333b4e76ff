//! Lead capture pipeline for the contact form
//!
//! The contact form is the only place where the site talks to a backend:
//! - `ContactFields` holds what the visitor typed and validates it
//! - `LeadRequest` / `LeadResponse` are the wire shapes of `POST /leads/create/`
//! - `LeadTransport` abstracts the HTTP call so the pipeline runs without a browser
//! - `ContactForm` is the state machine the component drives

use serde::{Deserialize, Serialize};

/// Value of the `source` field for every lead created by this site
pub const LEAD_SOURCE: &str = "website";

/// Path appended to the API base URL
pub const LEADS_CREATE_PATH: &str = "/leads/create/";

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_DEFAULT_SUCCESS: &str = "Thank you! We'll get back to you shortly.";
pub const MSG_DEFAULT_REJECTED: &str = "Failed to submit your request. Please try again.";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// Errors that can end a lead submission
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LeadError {
    #[error("required fields are missing")]
    MissingFields,

    #[error("lead rejected by server: {0}")]
    Rejected(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl LeadError {
    /// Text shown to the visitor for this error
    pub fn user_message(&self) -> String {
        match self {
            LeadError::MissingFields => MSG_REQUIRED_FIELDS.to_string(),
            LeadError::Rejected(message) => message.clone(),
            LeadError::Transport(_) | LeadError::InvalidResponse(_) => {
                MSG_GENERIC_FAILURE.to_string()
            }
        }
    }
}

/// JSON body sent to the lead intake endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub description: String,
    pub source: String,
}

/// JSON body returned by the lead intake endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lead_id: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl LeadResponse {
    /// First human-readable string found in `errors`.
    ///
    /// The backend reports validation errors either as a list or as a map of
    /// field name to list of messages.
    pub fn first_error(&self) -> Option<String> {
        fn first_string(value: &serde_json::Value) -> Option<String> {
            match value {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                serde_json::Value::Array(items) => items.iter().find_map(first_string),
                serde_json::Value::Object(map) => map.values().find_map(first_string),
                _ => None,
            }
        }

        self.errors.as_ref().and_then(first_string)
    }
}

/// Raw outcome of one HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a lead as JSON and hand back the raw response
#[allow(async_fn_in_trait)]
pub trait LeadTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &LeadRequest,
    ) -> Result<TransportResponse, LeadError>;
}

/// Build the full intake URL from the configured API base
pub fn leads_endpoint(api_base_url: &str) -> String {
    format!("{}{}", api_base_url.trim_end_matches('/'), LEADS_CREATE_PATH)
}

/// Send a validated lead and interpret the response.
///
/// Returns the success message to show, or the error describing why the lead
/// was not accepted. There is no retry.
pub async fn send_lead<T: LeadTransport>(
    transport: &T,
    api_base_url: &str,
    request: &LeadRequest,
) -> Result<String, LeadError> {
    let url = leads_endpoint(api_base_url);
    let response = transport.post_json(&url, request).await?;

    if response.is_success() {
        let body: LeadResponse = serde_json::from_str(&response.body)
            .map_err(|e| LeadError::InvalidResponse(e.to_string()))?;
        Ok(body
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| MSG_DEFAULT_SUCCESS.to_string()))
    } else {
        // Error bodies are best effort: an unreadable one still maps to the default text
        let body: LeadResponse = serde_json::from_str(&response.body).unwrap_or_default();
        let message = body
            .message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| body.first_error())
            .unwrap_or_else(|| MSG_DEFAULT_REJECTED.to_string());
        Err(LeadError::Rejected(message))
    }
}

/// The three fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Validate and build the wire request with trimmed values
    pub fn to_request(&self) -> Result<LeadRequest, LeadError> {
        if !self.is_complete() {
            return Err(LeadError::MissingFields);
        }

        Ok(LeadRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            description: self.message.trim().to_string(),
            source: LEAD_SOURCE.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Submission status shown under the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn success_message(&self) -> Option<String> {
        match self {
            FormStatus::Success(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            FormStatus::Error(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// Contact form state: fields plus submission status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: FormStatus,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Any edit after a finished submission clears the old status text
    pub fn touch(&mut self) {
        if matches!(self.status, FormStatus::Success(_) | FormStatus::Error(_)) {
            self.status = FormStatus::Idle;
        }
    }

    /// Start a submission.
    ///
    /// Returns the request to send, or `None` when nothing must be sent: a
    /// submission is already in flight, or validation failed (the status then
    /// carries the required-fields message).
    pub fn begin_submit(&mut self) -> Option<LeadRequest> {
        if self.is_submitting() {
            return None;
        }

        match self.fields.to_request() {
            Ok(request) => {
                self.status = FormStatus::Submitting;
                Some(request)
            }
            Err(err) => {
                self.status = FormStatus::Error(err.user_message());
                None
            }
        }
    }

    /// Apply the result of `send_lead`
    pub fn finish_submit(&mut self, result: Result<String, LeadError>) {
        match result {
            Ok(message) => {
                self.fields.clear();
                self.status = FormStatus::Success(message);
            }
            Err(err) => {
                self.status = FormStatus::Error(err.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Transport double that records every call and replays a canned result
    struct RecordingTransport {
        result: Result<TransportResponse, LeadError>,
        calls: RefCell<Vec<(String, LeadRequest)>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                result: Ok(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                result: Err(LeadError::Transport(reason.to_string())),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl LeadTransport for RecordingTransport {
        async fn post_json(
            &self,
            url: &str,
            request: &LeadRequest,
        ) -> Result<TransportResponse, LeadError> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), request.clone()));
            self.result.clone()
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            fields: ContactFields::new("Ada Lovelace", "ada@example.com", "We need a new app"),
            status: FormStatus::Idle,
        }
    }

    /// Drive the form the way the component does
    async fn submit(form: &mut ContactForm, transport: &RecordingTransport) {
        if let Some(request) = form.begin_submit() {
            let result = send_lead(transport, "https://api.example.com/v1", &request).await;
            form.finish_submit(result);
        }
    }

    #[test]
    fn test_leads_endpoint_joins_paths() {
        assert_eq!(
            leads_endpoint("https://api.example.com"),
            "https://api.example.com/leads/create/"
        );
        assert_eq!(
            leads_endpoint("https://api.example.com/v1/"),
            "https://api.example.com/v1/leads/create/"
        );
        assert_eq!(leads_endpoint("/api"), "/api/leads/create/");
    }

    #[test]
    fn test_request_uses_trimmed_values_and_website_source() {
        let fields = ContactFields::new("  Ada ", " ada@example.com\n", "\tHello ");
        let request = fields.to_request().unwrap();

        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.description, "Hello");
        assert_eq!(request.source, "website");
    }

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = ContactFields::new("Ada", "ada@example.com", "Hello")
            .to_request()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "description": "Hello",
                "source": "website"
            })
        );
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let fields = ContactFields::new("Ada", "   ", "Hello");
        assert!(!fields.is_complete());
        assert_eq!(fields.to_request(), Err(LeadError::MissingFields));
    }

    #[tokio::test]
    async fn test_empty_field_never_calls_network() {
        let transport = RecordingTransport::replying(201, r#"{"message":"ok"}"#);

        for fields in [
            ContactFields::new("", "ada@example.com", "Hello"),
            ContactFields::new("Ada", "", "Hello"),
            ContactFields::new("Ada", "ada@example.com", ""),
            ContactFields::default(),
        ] {
            let mut form = ContactForm {
                fields: fields.clone(),
                status: FormStatus::Idle,
            };
            submit(&mut form, &transport).await;

            assert_eq!(form.status, FormStatus::Error(MSG_REQUIRED_FIELDS.to_string()));
            assert_eq!(form.fields, fields);
        }

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_shows_message() {
        let transport = RecordingTransport::replying(
            201,
            r#"{"message":"Thanks, we will be in touch","lead_id":42}"#,
        );
        let mut form = filled_form();

        submit(&mut form, &transport).await;

        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(
            form.status,
            FormStatus::Success("Thanks, we will be in touch".to_string())
        );

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://api.example.com/v1/leads/create/");
        assert_eq!(calls[0].1.description, "We need a new app");
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default() {
        let transport = RecordingTransport::replying(200, r#"{"lead_id":"abc"}"#);
        let mut form = filled_form();

        submit(&mut form, &transport).await;

        assert_eq!(form.status, FormStatus::Success(MSG_DEFAULT_SUCCESS.to_string()));
        assert_eq!(form.fields, ContactFields::default());
    }

    #[tokio::test]
    async fn test_rejection_keeps_fields_and_shows_server_message() {
        let transport =
            RecordingTransport::replying(400, r#"{"message":"Email address is invalid"}"#);
        let mut form = filled_form();
        let before = form.fields.clone();

        submit(&mut form, &transport).await;

        assert_eq!(form.fields, before);
        assert_eq!(
            form.status,
            FormStatus::Error("Email address is invalid".to_string())
        );
    }

    #[tokio::test]
    async fn test_rejection_falls_back_to_errors_field() {
        let transport = RecordingTransport::replying(
            422,
            r#"{"errors":{"email":["Enter a valid email address."]}}"#,
        );
        let mut form = filled_form();

        submit(&mut form, &transport).await;

        assert_eq!(
            form.status,
            FormStatus::Error("Enter a valid email address.".to_string())
        );
    }

    #[tokio::test]
    async fn test_rejection_without_body_uses_default() {
        let transport = RecordingTransport::replying(500, "<html>Internal Server Error</html>");
        let mut form = filled_form();
        let before = form.fields.clone();

        submit(&mut form, &transport).await;

        assert_eq!(form.fields, before);
        assert_eq!(form.status, FormStatus::Error(MSG_DEFAULT_REJECTED.to_string()));
    }

    #[tokio::test]
    async fn test_network_error_shows_generic_message() {
        let transport = RecordingTransport::failing("connection refused");
        let mut form = filled_form();
        let before = form.fields.clone();

        submit(&mut form, &transport).await;

        assert_eq!(form.fields, before);
        assert_eq!(form.status, FormStatus::Error(MSG_GENERIC_FAILURE.to_string()));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_generic_failure() {
        let transport = RecordingTransport::replying(200, "not json");
        let mut form = filled_form();
        let before = form.fields.clone();

        submit(&mut form, &transport).await;

        assert_eq!(form.fields, before);
        assert_eq!(form.status, FormStatus::Error(MSG_GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn test_second_submit_refused_while_in_flight() {
        let mut form = filled_form();

        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_touch_clears_finished_status_only() {
        let mut form = filled_form();
        form.status = FormStatus::Error("boom".to_string());
        form.touch();
        assert_eq!(form.status, FormStatus::Idle);

        form.status = FormStatus::Submitting;
        form.touch();
        assert_eq!(form.status, FormStatus::Submitting);
    }

    #[test]
    fn test_first_error_handles_lists_and_blanks() {
        let response = LeadResponse {
            errors: Some(serde_json::json!(["", "Name is required"])),
            ..Default::default()
        };
        assert_eq!(response.first_error(), Some("Name is required".to_string()));

        let empty = LeadResponse {
            errors: Some(serde_json::json!({})),
            ..Default::default()
        };
        assert_eq!(empty.first_error(), None);
    }

    #[test]
    fn test_first_error_follows_document_order() {
        let body = r#"{"errors":{"name":["Name is required"],"email":["Enter a valid email address."]}}"#;
        let response: LeadResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.first_error(), Some("Name is required".to_string()));
    }

    #[test]
    fn test_status_accessors() {
        assert_eq!(
            FormStatus::Success("yay".into()).success_message(),
            Some("yay".to_string())
        );
        assert_eq!(FormStatus::Success("yay".into()).error_message(), None);
        assert_eq!(
            FormStatus::Error("nope".into()).error_message(),
            Some("nope".to_string())
        );
        assert_eq!(FormStatus::Idle.success_message(), None);
    }
}
