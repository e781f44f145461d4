//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::sample::sample_trip;
use crate::sorter::{SortError, Trip};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/trip/sample", get(sample_trip_page))
        .route("/trip/sort", post(sort_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page describing the API.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        max_cards: state.config.max_cards,
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The built-in sample trip, sorted.
async fn sample_trip_page(headers: HeaderMap) -> Result<Response, AppError> {
    let mut trip = Trip::new(sample_trip());
    trip.sort()?;
    render_trip(&headers, &trip)
}

/// Sort the boarding cards in the request body.
async fn sort_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: SortTripRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid sort request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let trip = sort_request(&state.config, req)?;
    render_trip(&headers, &trip)
}

/// Validate and sort the cards of a request.
pub fn sort_request(config: &AppConfig, req: SortTripRequest) -> Result<Trip, AppError> {
    if req.cards.len() > config.max_cards {
        return Err(AppError::PayloadTooLarge {
            message: format!(
                "{} cards sent, at most {} accepted",
                req.cards.len(),
                config.max_cards
            ),
        });
    }

    let cards = req
        .cards
        .into_iter()
        .map(BoardingCardRequest::into_card)
        .collect::<Result<Vec<_>, _>>()?;

    let mut trip = Trip::new(cards);
    trip.sort()?;

    debug!(cards = trip.len(), "Sorted trip");
    Ok(trip)
}

/// Return HTML or JSON based on the Accept header.
fn render_trip(headers: &HeaderMap, trip: &Trip) -> Result<Response, AppError> {
    if accepts_html(headers) {
        let html = ItineraryTemplate::from_trip(trip)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(SortTripResponse::from_trip(trip)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<SortError> for AppError {
    fn from(e: SortError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::PayloadTooLarge { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        debug!(status = %self.status(), error = %self.message(), "Request failed");
        let body = ErrorResponse {
            error: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> SortTripRequest {
        serde_json::from_str(json).unwrap()
    }

    fn bus(id: &str, from: &str, to: &str) -> String {
        format!(
            r#"{{"id": "{id}",
                "departure": {{"id": "{from}", "city": "{from}"}},
                "destination": {{"id": "{to}", "city": "{to}"}},
                "transport": {{"kind": "bus"}}}}"#
        )
    }

    fn cards(cards: &[String]) -> SortTripRequest {
        request(&format!(r#"{{"cards": [{}]}}"#, cards.join(",")))
    }

    #[test]
    fn sorts_valid_request() {
        let req = cards(&[bus("2", "B", "C"), bus("1", "A", "B")]);
        let trip = sort_request(&AppConfig::default(), req).unwrap();

        let ids: Vec<_> = trip.cards().iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn empty_request_is_empty_trip() {
        let trip = sort_request(&AppConfig::default(), request(r#"{"cards": []}"#)).unwrap();
        assert!(trip.is_empty());
    }

    #[test]
    fn too_many_cards_rejected() {
        let mut config = AppConfig::default();
        config.max_cards = 1;

        let req = cards(&[bus("1", "A", "B"), bus("2", "B", "C")]);
        let err = sort_request(&config, req).unwrap_err();

        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "2 cards sent, at most 1 accepted");
    }

    #[test]
    fn invalid_card_is_bad_request() {
        let req = cards(&[bus("1", "A", "A")]);
        let err = sort_request(&AppConfig::default(), req).unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("same place"));
    }

    #[test]
    fn round_trip_is_bad_request() {
        let req = cards(&[bus("1", "X", "Y"), bus("2", "Y", "X")]);
        let err = sort_request(&AppConfig::default(), req).unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), SortError::NoStartFound.to_string());
    }

    #[test]
    fn error_response_status() {
        let response = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn accepts_html_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "text/html,*/*".parse().unwrap());
        assert!(accepts_html(&headers));
    }

    #[test]
    fn render_trip_json_and_html() {
        let mut trip = Trip::new(sample_trip());
        trip.sort().unwrap();

        let json = render_trip(&HeaderMap::new(), &trip).unwrap();
        assert_eq!(
            json.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, "text/html".parse().unwrap());
        let html = render_trip(&headers, &trip).unwrap();
        assert!(
            html.headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }
}
