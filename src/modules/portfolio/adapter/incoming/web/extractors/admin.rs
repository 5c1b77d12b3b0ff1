use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use subtle::ConstantTimeEq;

use crate::shared::api::ApiResponse;

/// Header carrying the shared admin secret.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Shared secret for the admin gate, loaded once at startup and compared
/// per request. No session, no expiry.
#[derive(Clone)]
pub struct AdminConfig {
    secret: String,
}

impl AdminConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn from_env() -> Self {
        let secret =
            std::env::var("ADMIN_SECRET_KEY").expect("ADMIN_SECRET_KEY is not set in .env file");
        Self::new(secret)
    }

    /// Constant-time comparison; a direct equality check would leak the
    /// match length through timing.
    fn matches(&self, candidate: &str) -> bool {
        self.secret.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Proof that the request carried the exact configured admin secret.
/// Evaluated independently per request; rejection halts the handler.
#[derive(Debug, Clone)]
pub struct AdminKey;

impl FromRequest for AdminKey {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let config = match req.app_data::<web::Data<AdminConfig>>() {
            Some(config) => config,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error(
                    "Admin gate is not configured",
                ))));
            }
        };

        let candidate = req
            .headers()
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match candidate {
            Some(key) if config.matches(key) => ready(Ok(AdminKey)),
            _ => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Unauthorized: Admin access required",
            )))),
        }
    }
}
