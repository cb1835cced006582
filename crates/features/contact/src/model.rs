use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Inquiry categories offered by the contact form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InquiryType {
    Foia,
    Budget,
    Whistleblower,
    Technical,
    Media,
    Partnership,
    General,
}

impl InquiryType {
    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Foia => "FOIA Request Assistance",
            Self::Budget => "Budget Data Questions",
            Self::Whistleblower => "Whistleblower Support",
            Self::Technical => "Technical Support",
            Self::Media => "Media Inquiry",
            Self::Partnership => "Partnership Opportunity",
            Self::General => "General Question",
        }
    }

    /// Form value string.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.into()
    }
}

/// Raw form payload as posted by the browser. Selects post empty strings when
/// untouched, so every field arrives as text and is validated into a
/// [`ContactMessage`].
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validates the submission.
    ///
    /// # Errors
    /// Returns the list of offending field names; nothing is recorded for an
    /// invalid submission.
    pub fn validate(&self) -> Result<ContactMessage, Vec<&'static str>> {
        let mut invalid = Vec::new();

        if self.name.trim().is_empty() {
            invalid.push("name");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            invalid.push("email");
        }
        let inquiry_type = InquiryType::from_str(self.inquiry_type.trim());
        if inquiry_type.is_err() {
            invalid.push("inquiry_type");
        }
        if self.subject.trim().is_empty() {
            invalid.push("subject");
        }
        if self.message.trim().is_empty() {
            invalid.push("message");
        }

        if !invalid.is_empty() {
            return Err(invalid);
        }

        let phone = self.phone.trim();
        Ok(ContactMessage {
            name: self.name.trim().to_owned(),
            email: email.to_owned(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            inquiry_type: inquiry_type.unwrap_or(InquiryType::General),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

/// A validated contact message ready for the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub inquiry_type: InquiryType,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.org".to_owned(),
            phone: String::new(),
            inquiry_type: "budget".to_owned(),
            subject: "District totals".to_owned(),
            message: "Where do the district totals come from?".to_owned(),
        }
    }

    #[test]
    fn valid_form_produces_message() {
        let msg = filled_form().validate().expect("valid form");
        assert_eq!(msg.inquiry_type, InquiryType::Budget);
        assert!(msg.phone.is_none());
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let mut form = filled_form();
        form.email = "not-an-email".to_owned();
        form.subject = "   ".to_owned();

        let invalid = form.validate().expect_err("invalid form");
        assert_eq!(invalid, vec!["email", "subject"]);
    }

    #[test]
    fn unknown_inquiry_type_is_rejected() {
        let mut form = filled_form();
        form.inquiry_type = "gossip".to_owned();
        assert_eq!(form.validate().expect_err("invalid"), vec!["inquiry_type"]);
    }

    #[test]
    fn inquiry_values_round_trip_through_strum() {
        assert_eq!(InquiryType::from_str("whistleblower"), Ok(InquiryType::Whistleblower));
        assert_eq!(InquiryType::Whistleblower.value(), "whistleblower");
        assert_eq!(InquiryType::Foia.label(), "FOIA Request Assistance");
    }
}
