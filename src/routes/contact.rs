//! `POST /contact-form-handler` — validate a contact form submission and relay it by email
//! `OPTIONS /contact-form-handler` — CORS preflight
//!
//! The same handler is mounted at `/contact-form-handler.php`, the path the
//! marketing site's forms post to.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    errors::{ContactError, ContactResult},
    form::FieldBag,
    mail::{template, Mailer},
    models::{ApiResponse, SubmissionInput},
    state::AppState,
};

const BOT_ACK_MESSAGE: &str = "Thank you for your submission!";
const SUCCESS_MESSAGE: &str = "Thank you for your submission! We will get back to you soon.";

pub fn router<M: Mailer>() -> Router<AppState<M>> {
    Router::new()
        .route("/contact-form-handler", any(submit::<M>))
        .route("/contact-form-handler.php", any(submit::<M>))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

// ── Handlers ─────────────────────────────────────────────────

/// Takes the raw request so the body is only read once the method and the
/// configuration have been checked.
async fn submit<M: Mailer>(
    State(state): State<AppState<M>>,
    request: Request,
) -> ContactResult<Response> {
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if request.method() != Method::POST {
        return Err(ContactError::MethodNotAllowed);
    }

    let settings = state.config.mail_settings()?;

    let fields = FieldBag::from_request(request).await;
    let input = SubmissionInput::from_fields(&fields);

    // Answer bots exactly like people so the honeypot is not revealed.
    if input.is_bot() {
        tracing::info!("Honeypot field filled in, discarding submission");
        return Ok(Json(ApiResponse::success(BOT_ACK_MESSAGE)).into_response());
    }

    let submission = input.validate().map_err(ContactError::Validation)?;
    let email = template::render(&submission.sanitize(), &settings);

    state.mailer.send(settings.smtp, email).await?;
    tracing::info!("Contact form submission relayed");

    let body = ApiResponse::success(SUCCESS_MESSAGE).with_redirect(state.config.redirect_url.as_str());
    Ok(Json(body).into_response())
}
