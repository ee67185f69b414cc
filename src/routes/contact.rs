//! Contact form route.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::mail::SendReceipt;
use crate::services::contact::{self, ContactError, ContactRequest};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: SendReceipt,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

pub(crate) fn contact_error_to_response(err: &ContactError) -> Response {
    match err {
        ContactError::MissingRequiredFields => error_response(StatusCode::BAD_REQUEST, "Missing required fields"),
        ContactError::InvalidEmail => error_response(StatusCode::BAD_REQUEST, "Invalid email address"),
        ContactError::Delivery(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email"),
    }
}

/// `POST /api/contact` — validate a contact submission and forward it by email.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "contact body rejected");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let Some(desk) = &state.contact else {
        tracing::error!("contact submission received but mailer is not configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Email service not configured");
    };

    match contact::submit(desk.mailer.as_ref(), &desk.addresses, &request).await {
        Ok(receipt) => {
            tracing::info!(email_id = %receipt.id, "contact submission forwarded");
            Json(ContactResponse { success: true, message: "Email sent successfully", data: receipt }).into_response()
        }
        Err(e @ ContactError::Delivery(_)) => {
            tracing::error!(error = %e, "contact submission delivery failed");
            contact_error_to_response(&e)
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact submission rejected");
            contact_error_to_response(&e)
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
