use validator::ValidateEmail;

use super::{
    fields::is_truthy, FieldBag, FIELD_BOTCHECK, FIELD_EMAIL, FIELD_HOW_DID_YOU_HEAR, FIELD_MESSAGE, FIELD_NAME,
    FIELD_PRIVACY_POLICY, FIELD_WEBSITE,
};
use crate::models::{SubmissionInput, ValidSubmission};

const DEFAULT_HOW_DID_YOU_HEAR: &str = "Not specified";

/// Email address check: RFC-ish syntax plus a dotted domain, so `foo@bar`
/// is rejected while `foo@bar.com` passes.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    match email.rsplit_once('@') {
        Some((_, domain)) => domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2,
        None => false,
    }
}

impl SubmissionInput {
    pub fn from_fields(fields: &FieldBag) -> Self {
        let how_did_you_hear = match fields.text(FIELD_HOW_DID_YOU_HEAR) {
            s if s.is_empty() => DEFAULT_HOW_DID_YOU_HEAR.to_owned(),
            s => s,
        };

        Self {
            name:                    fields.text(FIELD_NAME),
            email:                   fields.text(FIELD_EMAIL),
            website_link:            fields.text(FIELD_WEBSITE),
            message:                 fields.text(FIELD_MESSAGE),
            how_did_you_hear,
            privacy_policy_accepted: fields.flag(FIELD_PRIVACY_POLICY),
            botcheck:                fields.get(FIELD_BOTCHECK).map(str::to_owned),
        }
    }

    /// A filled-in honeypot field marks automated traffic. Uses the same
    /// truthiness as checkboxes, so `"0"` does not count.
    pub fn is_bot(&self) -> bool {
        is_truthy(self.botcheck.as_deref())
    }

    /// Run every rule and collect all violations, in a fixed order.
    pub fn validate(self) -> Result<ValidSubmission, Vec<String>> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push("Name is required".to_owned());
        }

        if self.email.is_empty() {
            errors.push("Email is required".to_owned());
        } else if !is_valid_email(&self.email) {
            errors.push("Invalid email address".to_owned());
        }

        if self.website_link.is_empty() {
            errors.push("Website URL is required".to_owned());
        }

        if self.message.is_empty() {
            errors.push("Message is required".to_owned());
        }

        if !self.privacy_policy_accepted {
            errors.push("You must accept the privacy policy".to_owned());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidSubmission {
            name:             self.name,
            email:            self.email,
            website_link:     self.website_link,
            message:          self.message,
            how_did_you_hear: self.how_did_you_hear,
        })
    }
}
