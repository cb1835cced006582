//! Request letter generation.
//!
//! The toolkit form collects the requester's details and produces a formatted
//! Virginia FOIA request letter ready to send to the chosen agency.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shub_kernel::domain::constants::FOIA_RESPONSE_DAYS;
use std::fmt::Write as _;
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Categories of records a request can target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RequestType {
    Budget,
    Contracts,
    Meetings,
    Correspondence,
    Reports,
    Other,
}

impl RequestType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget & Financial Records",
            Self::Contracts => "Contracts & Procurement",
            Self::Meetings => "Meeting Minutes & Agendas",
            Self::Correspondence => "Email & Correspondence",
            Self::Reports => "Reports & Studies",
            Self::Other => "Other",
        }
    }

    /// Phrase used inside the letter body.
    #[must_use]
    pub const fn letter_phrase(self) -> &'static str {
        match self {
            Self::Budget => "budget and financial",
            Self::Contracts => "contract and procurement",
            Self::Meetings => "meeting minutes and agenda",
            Self::Correspondence => "email and correspondence",
            Self::Reports => "report and study",
            Self::Other => "public",
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        self.into()
    }
}

/// Agencies the form offers as recipients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Agency {
    StateBudget,
    Education,
    Health,
    Transportation,
    GeneralServices,
    LocalCity,
    LocalCounty,
    OtherAgency,
}

impl Agency {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StateBudget => "Virginia Department of Budget & Planning",
            Self::Education => "Virginia Department of Education",
            Self::Health => "Virginia Department of Health",
            Self::Transportation => "Virginia Department of Transportation",
            Self::GeneralServices => "Virginia Department of General Services",
            Self::LocalCity => "Local City Government",
            Self::LocalCounty => "Local County Government",
            Self::OtherAgency => "Other Agency",
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        self.into()
    }
}

/// Delivery preference for the requested records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PreferredFormat {
    Electronic,
    Paper,
    Inspection,
}

impl PreferredFormat {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronic => "Electronic (Email/Download)",
            Self::Paper => "Paper Copies",
            Self::Inspection => "Inspection Only",
        }
    }

    #[must_use]
    pub const fn letter_phrase(self) -> &'static str {
        match self {
            Self::Electronic => "electronic copies",
            Self::Paper => "paper copies",
            Self::Inspection => "an opportunity to inspect the records",
        }
    }

    #[must_use]
    pub fn value(self) -> &'static str {
        self.into()
    }
}

/// Raw form payload as posted by the browser.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LetterForm {
    pub request_type: String,
    pub agency: String,
    pub records_description: String,
    pub timeframe: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub preferred_format: String,
}

impl Default for LetterForm {
    fn default() -> Self {
        Self {
            request_type: String::new(),
            agency: String::new(),
            records_description: String::new(),
            timeframe: String::new(),
            contact_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            preferred_format: PreferredFormat::Electronic.value().to_owned(),
        }
    }
}

impl LetterForm {
    /// Validates the submission.
    ///
    /// # Errors
    /// Returns the list of offending field names.
    pub fn validate(&self) -> Result<LetterRequest, Vec<&'static str>> {
        let mut invalid = Vec::new();

        let request_type = RequestType::from_str(self.request_type.trim());
        if request_type.is_err() {
            invalid.push("request_type");
        }
        let agency = Agency::from_str(self.agency.trim());
        if agency.is_err() {
            invalid.push("agency");
        }
        if self.records_description.trim().is_empty() {
            invalid.push("records_description");
        }
        if self.contact_name.trim().is_empty() {
            invalid.push("contact_name");
        }
        let email = self.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            invalid.push("contact_email");
        }
        let preferred_format = PreferredFormat::from_str(self.preferred_format.trim());
        if preferred_format.is_err() {
            invalid.push("preferred_format");
        }

        if !invalid.is_empty() {
            return Err(invalid);
        }

        let timeframe = self.timeframe.trim();
        let phone = self.contact_phone.trim();
        Ok(LetterRequest {
            request_type: request_type.unwrap_or(RequestType::Other),
            agency: agency.unwrap_or(Agency::OtherAgency),
            records_description: self.records_description.trim().to_owned(),
            timeframe: (!timeframe.is_empty()).then(|| timeframe.to_owned()),
            contact_name: self.contact_name.trim().to_owned(),
            contact_email: email.to_owned(),
            contact_phone: (!phone.is_empty()).then(|| phone.to_owned()),
            preferred_format: preferred_format.unwrap_or(PreferredFormat::Electronic),
        })
    }
}

/// A validated letter request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterRequest {
    pub request_type: RequestType,
    pub agency: Agency,
    pub records_description: String,
    pub timeframe: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub preferred_format: PreferredFormat,
}

impl LetterRequest {
    /// Renders the request letter.
    ///
    /// `date` is the letter date; `reference` is the tracking ID quoted in the
    /// subject line.
    #[must_use]
    pub fn render(&self, date: NaiveDate, reference: &str) -> String {
        let mut letter = String::new();

        let _ = writeln!(letter, "{}", date.format("%B %-d, %Y"));
        letter.push('\n');
        let _ = writeln!(letter, "FOIA Officer");
        let _ = writeln!(letter, "{}", self.agency.label());
        letter.push('\n');
        let _ = writeln!(letter, "Re: Virginia Freedom of Information Act Request ({reference})");
        letter.push('\n');
        let _ = writeln!(letter, "Dear FOIA Officer:");
        letter.push('\n');
        let _ = writeln!(
            letter,
            "Pursuant to the Virginia Freedom of Information Act, Va. Code § 2.2-3700 et seq., \
             I request access to the following {} records: {}",
            self.request_type.letter_phrase(),
            self.records_description,
        );
        if let Some(timeframe) = &self.timeframe {
            letter.push('\n');
            let _ = writeln!(letter, "This request covers the period {timeframe}.");
        }
        letter.push('\n');
        let _ = writeln!(
            letter,
            "I would prefer to receive {}. If any portion of this request is denied, please \
             cite the specific exemption relied upon and release all reasonably segregable \
             portions of the remaining records. If fees will exceed the first free hour of \
             staff time, please notify me of the estimated charges before proceeding.",
            self.preferred_format.letter_phrase(),
        );
        letter.push('\n');
        let _ = writeln!(
            letter,
            "As provided by Va. Code § 2.2-3704, I look forward to your response within \
             {FOIA_RESPONSE_DAYS} business days.",
        );
        letter.push('\n');
        let _ = writeln!(letter, "Sincerely,");
        let _ = writeln!(letter, "{}", self.contact_name);
        let _ = writeln!(letter, "{}", self.contact_email);
        if let Some(phone) = &self.contact_phone {
            let _ = writeln!(letter, "{phone}");
        }

        letter
    }
}
