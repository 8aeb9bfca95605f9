//! Contact form model: validation, submission payloads, and the state machine
//! behind the form component.
use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::PERSONAL_INFO;

pub const MIN_MESSAGE_LEN: usize = 10;
pub const DEFAULT_SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
/// Sender used for a test email when the form has no usable address.
pub const TEST_EMAIL_SENDER: &str = "me@example.com";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

/// Text shown when a validated submission still couldn't be delivered.
pub fn submit_failure_message() -> String {
    format!(
        "Failed to send message. Please try again or contact me directly at {}.",
        PERSONAL_INFO.email
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
    Verification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn set(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

/// Validate raw form input. Values are trimmed before checking.
pub fn validate(
    name: &str,
    email: &str,
    message: &str,
    verification: Option<&str>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if name.trim().is_empty() {
        errors.set(Field::Name, "Name is required");
    }

    let email = email.trim();
    if email.is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.set(Field::Email, "Please enter a valid email address");
    }

    let message = message.trim();
    if message.is_empty() {
        errors.set(Field::Message, "Message is required");
    // counted in chars, so an emoji is one character rather than two code units
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.set(Field::Message, "Message should be at least 10 characters long");
    }

    if !verification.is_some_and(|t| !t.trim().is_empty()) {
        errors.set(Field::Verification, "Please complete the reCAPTCHA verification");
    }

    errors
}

/// Unsent form text. Lives only as long as the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "g-recaptcha-response")]
    pub verification: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = validate(
            &self.name,
            &self.email,
            &self.message,
            Some(self.verification.as_str()),
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The minimal `{sender, subject, body}` payload the email endpoint also accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEmail {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl TestEmail {
    pub fn greeting(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            subject: "Hello from frontend".to_string(),
            body: "This is a test email sent via POST from frontend".to_string(),
        }
    }
}

/// What the contact endpoint sends back, success or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Sent(String),
    Failed(String),
}

/// Everything the contact form renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub verification: Option<String>,
    pub errors: ValidationErrors,
    pub banner: Option<Banner>,
    pub submitting: bool,
}

impl ContactForm {
    /// Editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Message => self.draft.message = value,
            Field::Verification => return,
        }
        self.errors.clear(field);
    }

    pub fn verification_completed(&mut self, token: String) {
        self.verification = Some(token);
        self.errors.clear(Field::Verification);
    }

    pub fn verification_expired(&mut self) {
        self.verification = None;
        self.errors
            .set(Field::Verification, "reCAPTCHA expired. Please verify again.");
    }

    pub fn verification_unavailable(&mut self) {
        self.errors.set(
            Field::Verification,
            "Failed to load reCAPTCHA. Please refresh the page.",
        );
    }

    /// Validate and, if everything passes, enter the submitting state and return
    /// the payload to send. On failure the field errors are shown instead.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.errors = validate(
            &self.draft.name,
            &self.draft.email,
            &self.draft.message,
            self.verification.as_deref(),
        );
        if !self.errors.is_empty() {
            return None;
        }
        let verification = self.verification.clone()?;

        self.banner = None;
        self.submitting = true;
        Some(ContactSubmission {
            name: self.draft.name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
            message: self.draft.message.trim().to_string(),
            verification,
            timestamp: now,
        })
    }

    /// `Ok` carries the endpoint's message, if it sent one.
    pub fn finish_submit<E>(&mut self, result: Result<Option<String>, E>) {
        self.submitting = false;
        match result {
            Ok(message) => {
                self.draft = ContactDraft::default();
                self.verification = None;
                self.errors = ValidationErrors::default();
                self.banner = Some(Banner::Sent(
                    message.unwrap_or_else(|| DEFAULT_SENT_MESSAGE.to_string()),
                ));
            }
            Err(_) => {
                self.banner = Some(Banner::Failed(submit_failure_message()));
            }
        }
    }

    /// Enter the submitting state and return a test email. The form's address
    /// is the sender when it looks valid.
    pub fn begin_test_email(&mut self) -> Option<TestEmail> {
        if self.submitting {
            return None;
        }
        let email = self.draft.email.trim();
        let sender = if EMAIL_RE.is_match(email) {
            email
        } else {
            TEST_EMAIL_SENDER
        };
        self.banner = None;
        self.submitting = true;
        Some(TestEmail::greeting(sender))
    }

    /// Like `finish_submit`, but the form is left as it was.
    pub fn finish_test_email<E>(&mut self, result: Result<Option<String>, E>) {
        self.submitting = false;
        self.banner = Some(match result {
            Ok(message) => Banner::Sent(message.unwrap_or_else(|| DEFAULT_SENT_MESSAGE.to_string())),
            Err(_) => Banner::Failed(submit_failure_message()),
        });
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada Lovelace".to_string());
        form.set_field(Field::Email, "ada@example.com".to_string());
        form.set_field(Field::Message, "Let's talk about analytical engines.".to_string());
        form
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate("", "", "", None);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
        assert_eq!(
            errors.get(Field::Verification),
            Some("Please complete the reCAPTCHA verification")
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let errors = validate("   ", " \t", "\n\n", Some("token"));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
        assert_eq!(errors.get(Field::Verification), None);
    }

    #[test]
    fn test_email_format() {
        for bad in ["ada", "ada.example.com", "ada@example", "@example.com"] {
            let errors = validate("Ada", bad, "long enough message", Some("t"));
            assert_eq!(
                errors.get(Field::Email),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
        for good in ["ada@example.com", "a.b+c@sub.example.org", "  ada@example.com  "] {
            let errors = validate("Ada", good, "long enough message", Some("t"));
            assert!(errors.is_empty(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_message_min_length() {
        let errors = validate("Ada", "ada@example.com", "too short", Some("t"));
        assert_eq!(
            errors.get(Field::Message),
            Some("Message should be at least 10 characters long")
        );
        let errors = validate("Ada", "ada@example.com", "   ten chars!   ", Some("t"));
        assert_eq!(errors.get(Field::Message), None);
    }

    #[test]
    fn test_message_length_counts_chars() {
        // nine emoji: eighteen UTF-16 code units, but still too short
        let errors = validate("Ada", "ada@example.com", "🚀🚀🚀🚀🚀🚀🚀🚀🚀", Some("t"));
        assert!(errors.get(Field::Message).is_some());
        let errors = validate("Ada", "ada@example.com", "🚀🚀🚀🚀🚀🚀🚀🚀🚀🚀", Some("t"));
        assert_eq!(errors.get(Field::Message), None);
    }

    #[test]
    fn test_new_form_starts_empty() {
        let form = ContactForm::default();
        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.verification, None);
        assert_eq!(form.banner, None);
        assert!(!form.submitting);
    }

    #[test]
    fn test_submit_blocked_without_verification() {
        let mut form = filled();
        assert!(form.begin_submit(now()).is_none());
        assert!(!form.submitting);
        assert_eq!(form.errors.len(), 1);
        assert!(form.errors.get(Field::Verification).is_some());
    }

    #[test]
    fn test_valid_submit_produces_payload() {
        let mut form = filled();
        form.verification_completed("captcha-token".to_string());
        let submission = form.begin_submit(now()).expect("form should be valid");
        assert!(form.submitting);
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.verification, "captcha-token");
        assert!(submission.validate().is_ok());

        // no double submit while one is pending
        assert!(form.begin_submit(now()).is_none());
    }

    #[test]
    fn test_submission_wire_format() {
        let mut form = filled();
        form.verification_completed("captcha-token".to_string());
        let submission = form.begin_submit(now()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["g-recaptcha-response"], "captcha-token");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["timestamp"], "2025-03-14T09:26:53Z");
        assert!(json.get("verification").is_none());
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = ContactForm::default();
        form.begin_submit(now());
        assert_eq!(form.errors.len(), 4);
        form.set_field(Field::Email, "a".to_string());
        assert!(form.errors.get(Field::Email).is_none());
        assert!(form.errors.get(Field::Name).is_some());
        form.verification_completed("t".to_string());
        assert!(form.errors.get(Field::Verification).is_none());
    }

    #[test]
    fn test_verification_expiry() {
        let mut form = filled();
        form.verification_completed("t".to_string());
        form.verification_expired();
        assert_eq!(form.verification, None);
        assert_eq!(
            form.errors.get(Field::Verification),
            Some("reCAPTCHA expired. Please verify again.")
        );
        assert!(form.begin_submit(now()).is_none());
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = filled();
        form.verification_completed("t".to_string());
        form.begin_submit(now()).unwrap();
        form.finish_submit::<()>(Ok(None));
        assert!(!form.submitting);
        assert_eq!(form.draft, ContactDraft::default());
        assert_eq!(form.verification, None);
        assert_eq!(
            form.banner,
            Some(Banner::Sent(DEFAULT_SENT_MESSAGE.to_string()))
        );
        form.dismiss_banner();
        assert_eq!(form.banner, None);
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut form = filled();
        form.verification_completed("t".to_string());
        form.begin_submit(now()).unwrap();
        form.finish_submit(Err("HTTP 500"));
        assert!(!form.submitting);
        assert_eq!(form.draft.name, "Ada Lovelace");
        match form.banner {
            Some(Banner::Failed(msg)) => assert!(msg.contains("soojidano@gmail.com")),
            other => panic!("expected failure banner, got {other:?}"),
        }
    }

    #[test]
    fn test_reply_message_optional() {
        let reply: ContactReply = serde_json::from_str(r#"{"message":"Queued"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Queued"));
        let reply: ContactReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.message, None);
    }

    #[test]
    fn test_test_email_uses_form_address() {
        let mut form = filled();
        let email = form.begin_test_email().unwrap();
        assert_eq!(email.sender, "ada@example.com");
        assert!(form.submitting);
        assert!(form.begin_test_email().is_none());

        let mut form = ContactForm::default();
        form.set_field(Field::Email, "not an address".to_string());
        assert_eq!(form.begin_test_email().unwrap().sender, TEST_EMAIL_SENDER);
    }

    #[test]
    fn test_test_email_reply_keeps_form() {
        let mut form = filled();
        form.begin_test_email().unwrap();
        form.finish_test_email::<()>(Ok(Some("Email sent".to_string())));
        assert!(!form.submitting);
        assert_eq!(form.draft.name, "Ada Lovelace");
        assert_eq!(form.banner, Some(Banner::Sent("Email sent".to_string())));

        form.begin_test_email().unwrap();
        form.finish_test_email(Err("timeout"));
        assert_eq!(form.draft.name, "Ada Lovelace");
        assert!(matches!(form.banner, Some(Banner::Failed(_))));
    }

    #[test]
    fn test_test_email_payload() {
        let json = serde_json::to_value(TestEmail::greeting("me@example.com")).unwrap();
        assert_eq!(json["sender"], "me@example.com");
        assert_eq!(json["subject"], "Hello from frontend");
    }
}
