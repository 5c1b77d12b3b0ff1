use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::portfolio::application::use_cases::update_profile_picture::UpdatePersonalInfoError;
use crate::portfolio::adapter::incoming::web::extractors::admin::AdminKey;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    pub resume_url: String,
}

#[put("/resume")]
pub async fn update_resume_handler(
    _admin: AdminKey,
    data: web::Data<AppState>,
    body: web::Json<ResumeRequest>,
) -> impl Responder {
    match data.update_resume.execute(&body.resume_url).await {
        Ok(info) => ApiResponse::success_with_message(info, "Resume updated successfully"),
        Err(UpdatePersonalInfoError::RecordMissing) => {
            ApiResponse::<()>::not_found("Personal info not found")
        }
        Err(UpdatePersonalInfoError::StoreError(msg)) => {
            error!("Failed to update resume: {}", msg);
            ApiResponse::<()>::internal_error("Error updating resume")
        }
    }
}
