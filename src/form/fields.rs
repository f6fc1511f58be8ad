use std::collections::HashMap;

use axum::{
    body::to_bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use serde_json::Value;

/// Largest body read for a submission; anything bigger counts as unparsable.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// PHP-style truthiness: absent, `""` and `"0"` are false.
pub fn is_truthy(value: Option<&str>) -> bool {
    !matches!(value, None | Some("") | Some("0"))
}

/// Untyped field values of a submission, keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBag(HashMap<String, String>);

impl FieldBag {
    /// Read and normalize the body of `request`.
    ///
    /// `multipart/form-data` text fields are collected like URL-encoded ones,
    /// file parts are ignored. Bodies over [`MAX_BODY_BYTES`] yield an empty bag.
    pub async fn from_request(request: Request) -> Self {
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let is_multipart = content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"));

        if is_multipart {
            return match Multipart::from_request(request, &()).await {
                Ok(multipart) => Self::from_multipart(multipart).await,
                Err(err) => {
                    tracing::debug!(error = %err, "Unparsable multipart body");
                    Self::default()
                }
            };
        }

        match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
            Ok(bytes) => Self::from_body(content_type.as_deref(), &bytes),
            Err(err) => {
                tracing::warn!(error = %err, limit = MAX_BODY_BYTES, "Discarding unreadable request body");
                Self::default()
            }
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Self {
        let mut fields = HashMap::new();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "Discarding unreadable multipart body");
                    return Self::default();
                }
            };

            // Uploads are never part of a submission.
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.text().await {
                Ok(value) => {
                    fields.insert(name, value);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Discarding unreadable multipart body");
                    return Self::default();
                }
            }
        }

        Self(fields)
    }

    /// Normalize a request body into a field bag.
    ///
    /// A `Content-Type` mentioning `application/json` selects JSON, anything
    /// else is read as `application/x-www-form-urlencoded`. Bodies that fail
    /// to parse, and JSON payloads that are not objects, yield an empty bag.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(body)
        } else {
            Self::from_form(body)
        }
    }

    fn from_json(body: &[u8]) -> Self {
        let object = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                tracing::debug!("JSON body is not an object");
                return Self::default();
            }
            Err(err) => {
                tracing::debug!(error = %err, "Unparsable JSON body");
                return Self::default();
            }
        };

        Self(
            object
                .into_iter()
                .filter_map(|(key, value)| json_scalar(value).map(|v| (key, v)))
                .collect(),
        )
    }

    fn from_form(body: &[u8]) -> Self {
        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) {
            // Later duplicates overwrite earlier ones.
            Ok(pairs) => Self(pairs.into_iter().collect()),
            Err(err) => {
                tracing::debug!(error = %err, "Unparsable form body");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Trimmed value of `key`, empty when absent.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(str::trim).unwrap_or_default().to_owned()
    }

    /// Whether `key` carries a truthy value, see [`is_truthy`].
    pub fn flag(&self, key: &str) -> bool {
        is_truthy(self.get(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn json_scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("1".into()),
        Value::Bool(false) => Some(String::new()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Some("0".into()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
