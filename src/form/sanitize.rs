use crate::models::{SanitizedSubmission, ValidSubmission};

/// Escape text for embedding in HTML, quotes included.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

impl ValidSubmission {
    pub fn sanitize(&self) -> SanitizedSubmission {
        SanitizedSubmission {
            name:             html_escape(&self.name),
            email:            html_escape(&self.email),
            website_link:     html_escape(&self.website_link),
            message:          html_escape(&self.message),
            how_did_you_hear: html_escape(&self.how_did_you_hear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(html_escape("Grüße, 世界"), "Grüße, 世界");
    }

    #[test]
    fn sanitizes_every_field() {
        let valid = ValidSubmission {
            name:             "<b>Ada</b>".into(),
            email:            "ada@example.com".into(),
            website_link:     "https://example.com/?a=1&b=2".into(),
            message:          "<script>x</script>".into(),
            how_did_you_hear: "\"friends\"".into(),
        };

        let sanitized = valid.sanitize();
        assert_eq!(sanitized.name, "&lt;b&gt;Ada&lt;/b&gt;");
        assert_eq!(sanitized.email, "ada@example.com");
        assert_eq!(sanitized.website_link, "https://example.com/?a=1&amp;b=2");
        assert_eq!(sanitized.message, "&lt;script&gt;x&lt;/script&gt;");
        assert_eq!(sanitized.how_did_you_hear, "&quot;friends&quot;");
    }
}
