//! Request handlers for the HTTP routes.

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use super::AppState;
use crate::annotation::{Annotation, NewAnnotation};
use crate::error::{Error, Result};
use crate::journey::JourneyRecord;

/// Prefix shared by all JSON API routes.
const API_PREFIX: &str = "/api/";

/// Prefix of the journey route, followed by the id segment.
const JOURNEY_PREFIX: &str = "/api/journey/";

/// `GET /api/journey/{id}`
///
/// The id is taken from the raw path, so percent-escapes never match a
/// journey id.
pub(super) async fn get_journey(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Json<JourneyRecord>> {
    match uri.path().strip_prefix(JOURNEY_PREFIX) {
        Some(id) if is_journey_id(id) => state.journeys().get_journey(id).map(Json),
        _ => Err(Error::route_not_found(method.as_str(), uri.path())),
    }
}

/// `POST /api/annotation`
///
/// The body is read raw so that parse failures, including a missing or
/// wrong `Content-Type`, all answer 400.
pub(super) async fn create_annotation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Annotation>)> {
    let input = NewAnnotation::from_json(&body)?;
    let annotation = state.store().insert(input);
    info!("Created annotation {}", annotation.id);
    Ok((StatusCode::CREATED, Json(annotation)))
}

/// `GET /api/annotations`
pub(super) async fn list_annotations(State(state): State<AppState>) -> Json<Vec<Annotation>> {
    Json(state.store().list_all())
}

/// Known API path, unsupported method.
pub(super) async fn api_not_found(method: Method, uri: Uri) -> Error {
    Error::route_not_found(method.as_str(), uri.path())
}

/// Anything no route matched.
pub(super) async fn fallback(method: Method, uri: Uri) -> Response {
    if uri.path().starts_with(API_PREFIX) {
        Error::route_not_found(method.as_str(), uri.path()).into_response()
    } else {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    }
}

/// Runs before routing: answers every `OPTIONS` request with an empty 200
/// and refuses `HEAD` on API paths, which `get` routes would otherwise serve.
pub(super) async fn preflight(request: Request, next: Next) -> Response {
    let method = request.method();
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method == Method::HEAD && request.uri().path().starts_with(API_PREFIX) {
        return Error::route_not_found(method.as_str(), request.uri().path()).into_response();
    }
    next.run(request).await
}

/// Journey ids are one or more word characters or hyphens.
fn is_journey_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_journey_id() {
        assert!(is_journey_id("journey-001"));
        assert!(is_journey_id("a_b-c"));
        assert!(!is_journey_id(""));
        assert!(!is_journey_id("journey.001"));
        assert!(!is_journey_id("journey 001"));
        assert!(!is_journey_id("journey%2D001"));
        assert!(!is_journey_id("journey-001/extra"));
    }
}
