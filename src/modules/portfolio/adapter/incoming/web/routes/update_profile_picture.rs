use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::portfolio::application::use_cases::update_profile_picture::UpdatePersonalInfoError;
use crate::portfolio::adapter::incoming::web::extractors::admin::AdminKey;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePictureRequest {
    pub profile_picture_url: String,
}

#[put("/profile-picture")]
pub async fn update_profile_picture_handler(
    _admin: AdminKey,
    data: web::Data<AppState>,
    body: web::Json<ProfilePictureRequest>,
) -> impl Responder {
    match data
        .update_profile_picture
        .execute(&body.profile_picture_url)
        .await
    {
        Ok(info) => ApiResponse::success_with_message(info, "Profile picture updated successfully"),
        Err(UpdatePersonalInfoError::RecordMissing) => {
            ApiResponse::<()>::not_found("Personal info not found")
        }
        Err(UpdatePersonalInfoError::StoreError(msg)) => {
            error!("Failed to update profile picture: {}", msg);
            ApiResponse::<()>::internal_error("Error updating profile picture")
        }
    }
}
