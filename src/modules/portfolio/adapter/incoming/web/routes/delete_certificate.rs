use actix_web::{delete, web, Responder};
use tracing::error;

use crate::portfolio::adapter::incoming::web::extractors::admin::AdminKey;
use crate::portfolio::application::use_cases::add_certificate::CertificateWriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/certificates/{id}")]
pub async fn delete_certificate_handler(
    _admin: AdminKey,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();

    match data.delete_certificate.execute(id).await {
        Ok(true) => ApiResponse::message("Certificate deleted successfully"),
        Ok(false) => ApiResponse::<()>::not_found("Certificate not found"),
        Err(CertificateWriteError::StoreError(msg)) => {
            error!("Failed to delete certificate {}: {}", id, msg);
            ApiResponse::<()>::internal_error("Error deleting certificate")
        }
    }
}
