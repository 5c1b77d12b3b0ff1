use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::portfolio::adapter::incoming::web::extractors::admin::AdminKey;
use crate::portfolio::application::ports::outgoing::CertificateDraft;
use crate::portfolio::application::use_cases::add_certificate::CertificateWriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Certificate payload as accepted on create and update.
#[derive(Deserialize)]
pub struct CertificateRequest {
    pub title: String,
    pub issuing_organization: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    #[serde(rename = "certificate_image_url")]
    pub image_url: Option<String>,
}

impl CertificateRequest {
    pub fn into_draft(self) -> CertificateDraft {
        CertificateDraft {
            title: self.title,
            issuing_organization: self.issuing_organization,
            issue_date: self.issue_date,
            credential_url: self.credential_url,
            image_url: self.image_url,
        }
    }
}

#[post("/certificates")]
pub async fn add_certificate_handler(
    _admin: AdminKey,
    data: web::Data<AppState>,
    body: web::Json<CertificateRequest>,
) -> impl Responder {
    match data
        .add_certificate
        .execute(body.into_inner().into_draft())
        .await
    {
        Ok(certificate) => {
            ApiResponse::success_with_message(certificate, "Certificate added successfully")
        }
        Err(CertificateWriteError::StoreError(msg)) => {
            error!("Failed to add certificate: {}", msg);
            ApiResponse::<()>::internal_error("Error adding certificate")
        }
    }
}
