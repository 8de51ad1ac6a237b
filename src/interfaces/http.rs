//! Axum adapter over the payment service.
//!
//! Thin by design: the bearer credential resolves the merchant, handlers
//! translate [`CreatePaymentOutcome`] into HTTP statuses, and every error
//! leaves as a structured JSON body. Infrastructure faults collapse into a
//! generic 500 carrying no business detail.

use crate::application::service::{CreatePaymentOutcome, PaymentService};
use crate::domain::bank::BankRejection;
use crate::domain::submission::Submission;
use crate::error::PaymentError;
use crate::mapping::{self, PaymentDto};
use crate::validation::ValidationErrors;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PaymentService>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/{id}", get(get_payment_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The merchant identity recovered from the caller's bearer credential.
///
/// Transport authentication proper is outside this service; the token is
/// taken verbatim as the opaque partition key.
pub struct Merchant(pub String);

impl<S> FromRequestParts<S> for Merchant
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Self(token.to_owned()))
            .ok_or(ApiError::Unauthorized)
    }
}

async fn create_payment(
    State(state): State<AppState>,
    merchant: Merchant,
    Json(submission): Json<Submission>,
) -> Result<(StatusCode, Json<PaymentDto>), ApiError> {
    match state.service.create_payment(&merchant.0, &submission).await? {
        CreatePaymentOutcome::Created(payment) => Ok((
            StatusCode::CREATED,
            Json(mapping::to_payment_dto(&payment)),
        )),
        CreatePaymentOutcome::RejectedValidation(errors) => Err(ApiError::Validation(errors)),
        CreatePaymentOutcome::BankRejected(rejection) => Err(ApiError::BankRejected(rejection)),
    }
}

async fn get_payment_by_id(
    State(state): State<AppState>,
    merchant: Merchant,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentDto>, ApiError> {
    match state.service.get_payment(&merchant.0, id).await? {
        Some(payment) => Ok(Json(mapping::to_payment_dto(&payment))),
        None => Err(ApiError::NotFound),
    }
}

/// Everything a handler can turn into a response.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    NotFound,
    Validation(ValidationErrors),
    BankRejected(BankRejection),
    Internal,
}

impl From<PaymentError> for ApiError {
    fn from(error: PaymentError) -> Self {
        tracing::error!(error = %error, "payment pipeline failed");
        Self::Internal
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "A merchant bearer token is required",
                None,
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "No such payment", None),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "The payment request is invalid",
                serde_json::to_value(&errors).ok(),
            ),
            Self::BankRejected(rejection) => (
                StatusCode::BAD_GATEWAY,
                "BANK_REJECTED",
                "The acquiring bank rejected the authorization call",
                Some(json!({
                    "status": rejection.status,
                    "is_transient": rejection.kind.is_transient(),
                })),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred",
                None,
            ),
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message, details },
        };
        (status, Json(body)).into_response()
    }
}
