//! Subject and bodies of the notification sent for each submission.
//!
//! Every value interpolated here must already be HTML-escaped.

use super::OutboundEmail;
use crate::{config::MailSettings, models::SanitizedSubmission};

pub const SENDER_NAME: &str = "Vertex Experience Contact Form";

const HEADING: &str = "New Free Audit Request";

const STYLE: &str = "\
            body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
            .container { max-width: 600px; margin: 0 auto; padding: 20px; }
            .header { background-color: #4d65ff; color: white; padding: 20px; text-align: center; }
            .content { background-color: #f9f9f9; padding: 20px; }
            .field { margin-bottom: 15px; }
            .label { font-weight: bold; color: #555; }
            .value { margin-top: 5px; padding: 10px; background-color: white; border-left: 3px solid #4d65ff; }";

pub fn render(submission: &SanitizedSubmission, settings: &MailSettings) -> OutboundEmail {
    OutboundEmail {
        from_address:     settings.smtp.username.clone(),
        from_name:        SENDER_NAME.to_owned(),
        recipient:        settings.recipient.clone(),
        reply_to_address: submission.email.clone(),
        reply_to_name:    submission.name.clone(),
        subject:          subject(submission),
        html_body:        html_body(submission),
        text_body:        text_body(submission),
    }
}

fn subject(s: &SanitizedSubmission) -> String {
    format!("{HEADING} from {}", s.name)
}

fn field(label: &str, value: &str) -> String {
    format!(
        "
                <div class='field'>
                    <div class='label'>{label}:</div>
                    <div class='value'>{value}</div>
                </div>"
    )
}

fn html_body(s: &SanitizedSubmission) -> String {
    let link = format!("<a href='{0}'>{0}</a>", s.website_link);
    let fields = [
        field("Name", &s.name),
        field("Email", &s.email),
        field("Website URL", &link),
        field("How did you hear from us", &s.how_did_you_hear),
        field("Message", &s.message),
    ]
    .concat();

    format!(
        "<html>
    <head>
        <style>
{STYLE}
        </style>
    </head>
    <body>
        <div class='container'>
            <div class='header'>
                <h2>{HEADING}</h2>
            </div>
            <div class='content'>{fields}
            </div>
        </div>
    </body>
</html>
"
    )
}

fn text_body(s: &SanitizedSubmission) -> String {
    format!(
        "{HEADING}\n\n\
         Name: {}\n\
         Email: {}\n\
         Website URL: {}\n\
         How did you hear from us: {}\n\n\
         Message:\n{}",
        s.name, s.email, s.website_link, s.how_did_you_hear, s.message
    )
}
