use actix_web::{put, web, Responder};
use tracing::error;

use crate::portfolio::adapter::incoming::web::extractors::admin::AdminKey;
use crate::portfolio::adapter::incoming::web::routes::add_certificate::CertificateRequest;
use crate::portfolio::application::use_cases::add_certificate::CertificateWriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/certificates/{id}")]
pub async fn update_certificate_handler(
    _admin: AdminKey,
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CertificateRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .update_certificate
        .execute(id, body.into_inner().into_draft())
        .await
    {
        Ok(Some(certificate)) => {
            ApiResponse::success_with_message(certificate, "Certificate updated successfully")
        }
        Ok(None) => ApiResponse::<()>::not_found("Certificate not found"),
        Err(CertificateWriteError::StoreError(msg)) => {
            error!("Failed to update certificate {}: {}", id, msg);
            ApiResponse::<()>::internal_error("Error updating certificate")
        }
    }
}
