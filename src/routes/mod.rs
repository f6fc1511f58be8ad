use axum::Router;

use crate::{mail::Mailer, state::AppState};

mod contact;
mod status;

/// Build the full router.
///
/// The contact form route carries its own CORS and content-type headers; the
/// status routes are plain JSON.
pub fn all_routes<M: Mailer>() -> Router<AppState<M>> {
    Router::new()
        .merge(contact::router())
        .merge(status::router())
}
