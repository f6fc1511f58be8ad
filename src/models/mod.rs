use serde::Serialize;

// ── Submissions ──────────────────────────────────────────────

/// Field values of one contact form submission, trimmed but not yet checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub name:                    String,
    pub email:                   String,
    pub website_link:            String,
    pub message:                 String,
    pub how_did_you_hear:        String,
    pub privacy_policy_accepted: bool,
    pub botcheck:                Option<String>,
}

/// A submission that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name:             String,
    pub email:            String,
    pub website_link:     String,
    pub message:          String,
    pub how_did_you_hear: String,
}

/// A valid submission with every value HTML-escaped, safe to embed in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSubmission {
    pub name:             String,
    pub email:            String,
    pub website_link:     String,
    pub message:          String,
    pub how_did_you_hear: String,
}

// ── API responses ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors:   Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into(), errors: None, redirect: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), errors: None, redirect: None }
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }
}
