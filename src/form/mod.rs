//! Contact form processing: body normalization, validation and HTML escaping.
//!
//! Handlers only ever see a [`FieldBag`], so JSON and URL-encoded
//! submissions go through exactly the same rules.

mod fields;
mod sanitize;
mod validate;

pub use fields::FieldBag;

// ── Wire field names ─────────────────────────────────────────

pub const FIELD_NAME:             &str = "name";
pub const FIELD_EMAIL:            &str = "email";
pub const FIELD_WEBSITE:          &str = "Website-Link";
pub const FIELD_MESSAGE:          &str = "message";
pub const FIELD_HOW_DID_YOU_HEAR: &str = "How-did-you-hear-from-us";
pub const FIELD_PRIVACY_POLICY:   &str = "Privacy-Policy";
pub const FIELD_BOTCHECK:         &str = "botcheck";
