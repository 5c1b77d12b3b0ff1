// src/shared/api/not_found.rs
use actix_web::{HttpRequest, HttpResponse};

use crate::shared::api::ApiResponse;

/// Default service for unmatched routes: 404 echoing the requested path.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    ApiResponse::not_found(&format!("Route {} not found", req.path()))
}
