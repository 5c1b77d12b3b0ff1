use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

// Certificates never report fallback: their fallback collection is empty
// by design, so there is nothing substituted to flag.
#[get("/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> impl Responder {
    let certificates = data.get_certificates.execute().await;

    ApiResponse::success_with_fallback(certificates, false)
}
