// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Uniform response envelope. `usingFallback` is only present on reads and
/// is computed from the access layer's provenance tag, never stored.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "usingFallback", skip_serializing_if = "Option::is_none")]
    pub using_fallback: Option<bool>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            using_fallback: None,
        })
    }

    pub fn success_with_fallback(data: T, using_fallback: bool) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            using_fallback: Some(using_fallback),
        })
    }

    pub fn success_with_message(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: Some(message.to_string()),
            using_fallback: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            message: Some(message.to_string()),
            using_fallback: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            message: Some(message.to_string()),
            using_fallback: None,
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
